//! The `Agent` trait — the uniform per-tick contract driven by `hive-sim`.

use std::fmt;

use hive_core::{AgentId, Point};

use crate::Report;

/// Which motion model an agent follows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    /// Commutes between its home and the origin.
    Shuttle,
    /// Walks in a random direction that changes at a fixed interval.
    Wanderer,
}

impl AgentKind {
    /// Label used at the start of every report line.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Shuttle  => "Shuttle",
            AgentKind::Wanderer => "Wanderer",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mobile entity that advances its own position once per tick.
///
/// # Thread safety
///
/// The driver moves each agent into its own thread, so implementations must
/// be `Send`.  They need not be `Sync`: an agent is only ever touched by the
/// thread that owns it.
///
/// # Example
///
/// ```rust
/// use hive_agent::{Agent, Shuttle};
/// use hive_core::{AgentId, Kinematics, Point};
/// use std::time::Duration;
///
/// let kin = Kinematics::new(1.0, Duration::from_secs(1));
/// let mut shuttle = Shuttle::new(AgentId(0), Point::new(3.0, 4.0), kin);
/// let report = shuttle.advance();
/// assert!((report.position.distance_to(Point::ORIGIN) - 4.0).abs() < 1e-9);
/// ```
pub trait Agent: Send + 'static {
    /// Roster position of this agent.
    fn id(&self) -> AgentId;

    /// Motion model of this agent.
    fn kind(&self) -> AgentKind;

    /// Current position (as of the last `advance`).
    fn position(&self) -> Point;

    /// Move by exactly one tick and report the new position.
    fn advance(&mut self) -> Report;
}
