//! Simulation time model.
//!
//! # Design
//!
//! There is no global clock.  Every agent counts its own ticks with a
//! [`Tick`] counter and sleeps one tick duration of wall-clock time between
//! iterations.  [`Kinematics`] couples the tick duration to the distance an
//! agent covers per tick:
//!
//!   step = speed * tick_duration_secs
//!
//! Agents in the same swarm share one `Kinematics`, but each holds its own
//! copy; nothing about time is shared between threads.

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A per-agent tick counter.  `Tick(n)` labels the agent's `n`th report.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick following `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

/// Speed and tick duration shared by every agent in a swarm.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kinematics {
    /// Distance units per second of wall-clock time.
    pub speed: f64,
    /// Wall-clock length of one tick.
    pub tick: Duration,
}

impl Kinematics {
    #[inline]
    pub fn new(speed: f64, tick: Duration) -> Self {
        Self { speed, tick }
    }

    /// Distance covered in one tick.
    #[inline]
    pub fn step(&self) -> f64 {
        self.speed * self.tick.as_secs_f64()
    }

    /// Wall-clock length of `ticks` ticks, or `None` if it overflows
    /// `Duration`.
    #[inline]
    pub fn ticks(&self, ticks: u32) -> Option<Duration> {
        self.tick.checked_mul(ticks)
    }
}
