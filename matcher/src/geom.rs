//! 3-D points, bounded line segments, and the midpoint elevation shift.
//!
//! Coordinates are in the host's internal length unit (decimal feet). A
//! [`Segment`] is a value: transforms return a new segment and never touch the
//! input.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::consts::SHORT_CURVE_TOLERANCE;
use crate::error::MatchError;

/// A point in model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point3) -> f64 {
        let (dx, dy, dz) = (other.x - self.x, other.y - self.y, other.z - self.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A bounded line segment. Always non-degenerate: `start` and `end` are
/// finite and farther apart than [`SHORT_CURVE_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSegment")]
pub struct Segment {
    start: Point3,
    end: Point3,
}

#[derive(Deserialize)]
struct RawSegment {
    start: Point3,
    end: Point3,
}

impl TryFrom<RawSegment> for Segment {
    type Error = MatchError;

    fn try_from(raw: RawSegment) -> Result<Self, Self::Error> {
        Segment::new(raw.start, raw.end)
    }
}

impl Segment {
    /// Build a segment between two points.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateSegment` if either point is non-finite or the points
    /// coincide within tolerance.
    pub fn new(start: Point3, end: Point3) -> Result<Self, MatchError> {
        let segment = Self { start, end };
        segment.validate()?;
        Ok(segment)
    }

    #[must_use]
    pub fn start(&self) -> Point3 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point3 {
        self.end
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Horizontal component `(dx, dy)` of the start→end vector.
    #[must_use]
    pub fn horizontal_delta(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    /// Re-check the invariant. Arithmetic on a valid segment can collapse it
    /// when the shift dwarfs the rise.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateSegment` when the endpoints no longer qualify.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.length() <= SHORT_CURVE_TOLERANCE {
            return Err(MatchError::DegenerateSegment);
        }
        Ok(())
    }
}

/// Centerline elevation at the segment's midpoint.
#[must_use]
pub fn midpoint_elevation(segment: &Segment) -> f64 {
    (segment.start.z + segment.end.z) / 2.0
}

/// Move `segment` vertically so its midpoint sits at `target` elevation.
///
/// Both endpoints shift by the same delta, so x/y and the rise are unchanged.
/// Vertical segments are shifted the same way.
#[must_use]
pub fn shift_to_midpoint(segment: &Segment, target: f64) -> Segment {
    let delta = target - midpoint_elevation(segment);
    let lift = |p: Point3| Point3 { z: p.z + delta, ..p };
    Segment { start: lift(segment.start), end: lift(segment.end) }
}
