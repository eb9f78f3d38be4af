//! The Shuttle — a commuter between its home and the shared origin.

use hive_core::{AgentId, Kinematics, Point, Tick, distance};

use crate::{Agent, AgentKind, Report};

/// Which end of its route a Shuttle is currently heading for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Travelling to [`Point::ORIGIN`].  Initial phase.
    #[default]
    TowardOrigin,
    /// Travelling back to the Shuttle's home.
    TowardHome,
}

impl Phase {
    /// The other phase.
    #[inline]
    pub fn flipped(self) -> Phase {
        match self {
            Phase::TowardOrigin => Phase::TowardHome,
            Phase::TowardHome   => Phase::TowardOrigin,
        }
    }
}

/// Moves in a straight line between `home` and the origin at constant speed,
/// turning around exactly when it reaches either end.
///
/// The position always lies on the segment `home`–origin.  Arrival is a
/// **snap**: when the target is within one step, the position is set to the
/// target exactly and the phase flips, so the Shuttle never overshoots.
#[derive(Debug, Clone)]
pub struct Shuttle {
    id:         AgentId,
    home:       Point,
    position:   Point,
    phase:      Phase,
    kinematics: Kinematics,
    tick:       Tick,
}

impl Shuttle {
    /// A Shuttle starting at `home`, heading for the origin.
    pub fn new(id: AgentId, home: Point, kinematics: Kinematics) -> Self {
        Self {
            id,
            home,
            position: home,
            phase: Phase::TowardOrigin,
            kinematics,
            tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn home(&self) -> Point {
        self.home
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The point the current phase is heading for.
    #[inline]
    pub fn target(&self) -> Point {
        match self.phase {
            Phase::TowardOrigin => Point::ORIGIN,
            Phase::TowardHome   => self.home,
        }
    }

    fn report(&self) -> Report {
        Report {
            agent:    self.id,
            kind:     AgentKind::Shuttle,
            tick:     self.tick,
            home:     Some(self.home),
            position: self.position,
        }
    }
}

impl Agent for Shuttle {
    fn id(&self) -> AgentId {
        self.id
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Shuttle
    }

    fn position(&self) -> Point {
        self.position
    }

    fn advance(&mut self) -> Report {
        let step   = self.kinematics.step();
        let target = self.target();
        let d      = distance(self.position, target);

        // Snap before dividing: `d == 0` always lands here.
        if d <= step {
            self.position = target;
            self.phase    = self.phase.flipped();
        } else {
            self.position = self.position.step_towards(target, step, d);
        }

        self.tick = self.tick.next();
        self.report()
    }
}
