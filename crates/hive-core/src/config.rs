//! Top-level swarm configuration.
//!
//! The `hive` binary fills a [`SwarmConfig`] from compile-time constants;
//! tests build their own with millisecond ticks.  [`SwarmConfig::validate`]
//! is called by the swarm builder before any thread is spawned.

use std::time::Duration;

use crate::{HiveError, HiveResult, Kinematics};

// ── ShutdownPolicy ────────────────────────────────────────────────────────────

/// What the driver does with agent threads once the stop marker is written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShutdownPolicy {
    /// Detach every agent thread without signalling it.  Agents keep ticking
    /// until the process exits; their output is discarded by the closed sink.
    #[default]
    Abandon,

    /// Raise a stop flag that agents check once per tick, then wait up to
    /// `timeout` for each to acknowledge.  Stragglers are abandoned.
    Graceful { timeout: Duration },
}

// ── SwarmConfig ───────────────────────────────────────────────────────────────

/// Swarm-wide simulation parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwarmConfig {
    /// Distance units per second.  Default: 1.0.
    pub speed: f64,

    /// Wall-clock length of one tick.  Default: 1 s.
    pub tick: Duration,

    /// Ticks a Wanderer holds its heading before resampling.  Default: 3.
    pub heading_interval_ticks: u32,

    /// How long the driver lets the swarm run.  Default: 10 s.
    pub run_duration: Duration,

    /// Run seed for Wanderer RNGs.  `None` seeds every agent from OS
    /// entropy.
    pub seed: Option<u64>,

    /// Agent thread handling at shutdown.  Default: abandon.
    pub shutdown: ShutdownPolicy,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            speed:                  1.0,
            tick:                   Duration::from_millis(1_000),
            heading_interval_ticks: 3,
            run_duration:           Duration::from_secs(10),
            seed:                   None,
            shutdown:               ShutdownPolicy::Abandon,
        }
    }
}

impl SwarmConfig {
    /// Speed and tick duration as a [`Kinematics`] value for the agents.
    #[inline]
    pub fn kinematics(&self) -> Kinematics {
        Kinematics::new(self.speed, self.tick)
    }

    /// Wall-clock time a Wanderer holds one heading.
    pub fn heading_interval(&self) -> HiveResult<Duration> {
        self.kinematics().ticks(self.heading_interval_ticks).ok_or_else(|| {
            HiveError::Config(format!(
                "heading interval of {} ticks of {:?} overflows",
                self.heading_interval_ticks, self.tick
            ))
        })
    }

    /// Reject parameters the agents cannot run with.
    pub fn validate(&self) -> HiveResult<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(HiveError::Config(format!(
                "speed must be finite and non-negative, got {}",
                self.speed
            )));
        }
        if self.tick.is_zero() {
            return Err(HiveError::Config("tick duration must be non-zero".into()));
        }
        if self.heading_interval_ticks == 0 {
            return Err(HiveError::Config(
                "heading interval must be at least one tick".into(),
            ));
        }
        if self.run_duration.is_zero() {
            return Err(HiveError::Config("run duration must be non-zero".into()));
        }
        self.heading_interval()?;
        Ok(())
    }
}
