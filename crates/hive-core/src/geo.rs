//! Planar coordinate type and direction vectors.
//!
//! The simulation plane is unbounded and unitless; agents measure everything
//! relative to the shared [`Point::ORIGIN`].  Coordinates are `f64` so the
//! Shuttle's snap-to-target comparison is not dominated by rounding noise.

use std::fmt;

/// A point on the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The shared origin every Shuttle commutes to.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.  See [`distance`].
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        distance(self, other)
    }

    /// Move `step` units from `self` straight towards `target`, given the
    /// precomputed distance `d` between them.
    ///
    /// The caller guarantees `d > 0`; a zero `d` must be handled (snapped)
    /// before this is reached.
    #[inline]
    pub fn step_towards(self, target: Point, step: f64, d: f64) -> Point {
        Point {
            x: self.x + step * (target.x - self.x) / d,
            y: self.y + step * (target.y - self.y) / d,
        }
    }

    /// Move `step` units along `heading`.
    #[inline]
    pub fn advance(self, heading: Heading, step: f64) -> Point {
        Point {
            x: self.x + heading.dx * step,
            y: self.y + heading.dy * step,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// Euclidean distance between `a` and `b`.  Always non-negative.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

// ── Heading ───────────────────────────────────────────────────────────────────

/// A unit direction vector.
///
/// The only constructor goes through an angle, so `dx² + dy² == 1` up to
/// float rounding.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    pub dx: f64,
    pub dy: f64,
}

impl Heading {
    /// Heading pointing at `radians` counter-clockwise from the +x axis.
    #[inline]
    pub fn from_angle(radians: f64) -> Self {
        let (dy, dx) = radians.sin_cos();
        Self { dx, dy }
    }

    /// Vector length; `1.0` within rounding.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}
