//! Position reports emitted once per agent tick.

use std::fmt;

use hive_core::{AgentId, Point, Tick};

use crate::AgentKind;

/// One agent's position at the end of one of its ticks.
///
/// The `Display` impl is the line written to the sink:
///
/// ```text
/// Shuttle (2.000000, 3.000000) at 1.445300, 2.167950
/// Wanderer #2 at 0.540302, 0.841471
/// ```
///
/// Shuttles are identified by their home, Wanderers by their roster ID.
/// `tick` orders the reports of a single agent; it is not part of the line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub agent:    AgentId,
    pub kind:     AgentKind,
    pub tick:     Tick,
    /// `Some(home)` for Shuttles.
    pub home:     Option<Point>,
    pub position: Point,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.home {
            Some(home) => write!(f, "{} {}", self.kind, home)?,
            None       => write!(f, "{} {}", self.kind, self.agent)?,
        }
        write!(f, " at {:.6}, {:.6}", self.position.x, self.position.y)
    }
}
