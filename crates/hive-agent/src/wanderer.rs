//! The Wanderer — a piecewise-linear random walk.

use std::time::Duration;

use hive_core::{AgentId, AgentRng, Heading, Kinematics, Point, Tick};

use crate::{Agent, AgentKind, Report};

/// Walks in a straight line along a random heading, picking a fresh heading
/// every `interval` of simulated time.
///
/// The countdown is kept in wall-clock units and decremented by one tick
/// duration per tick, so it always lies in `[0, interval]`.  A heading is
/// resampled at the start of the tick on which the countdown has reached
/// zero: with an interval of `n` ticks, ticks `1..=n` share the initial
/// heading, tick `n + 1` uses a new one, and so on.
#[derive(Debug)]
pub struct Wanderer {
    id:         AgentId,
    position:   Point,
    heading:    Heading,
    countdown:  Duration,
    interval:   Duration,
    kinematics: Kinematics,
    rng:        AgentRng,
    tick:       Tick,
}

impl Wanderer {
    /// A Wanderer at `start` with a freshly sampled heading and a full
    /// countdown.
    ///
    /// `interval` should be a positive multiple of `kinematics.tick`; the
    /// swarm builder derives it from `SwarmConfig::heading_interval`.
    pub fn new(
        id:         AgentId,
        start:      Point,
        kinematics: Kinematics,
        interval:   Duration,
        mut rng:    AgentRng,
    ) -> Self {
        let heading = rng.heading();
        Self {
            id,
            position: start,
            heading,
            countdown: interval,
            interval,
            kinematics,
            rng,
            tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Simulated time left before the next heading change.
    #[inline]
    pub fn countdown(&self) -> Duration {
        self.countdown
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }
}

impl Agent for Wanderer {
    fn id(&self) -> AgentId {
        self.id
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Wanderer
    }

    fn position(&self) -> Point {
        self.position
    }

    fn advance(&mut self) -> Report {
        if self.countdown.is_zero() {
            self.heading   = self.rng.heading();
            self.countdown = self.interval;
        }

        self.position  = self.position.advance(self.heading, self.kinematics.step());
        self.tick      = self.tick.next();
        self.countdown = self.countdown.saturating_sub(self.kinematics.tick);

        Report {
            agent:    self.id,
            kind:     AgentKind::Wanderer,
            tick:     self.tick,
            home:     None,
            position: self.position,
        }
    }
}
