//! Geometric primitives used by the clock face pipeline.
//!
//! All coordinates are in screen space: X grows to the right and Y grows
//! downward, matching the coordinate systems of typical 2D canvases.

use crate::error::ClockError;

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downward).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub(crate) fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The circle every piece of clock geometry is derived from.
///
/// Supplied by the host on each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSpec {
    /// Center of the face.
    pub center: Point,
    /// Face radius in host units.
    pub radius: f64,
}

impl FaceSpec {
    /// Create a face description.
    ///
    /// No validation happens here; geometry functions reject invalid faces.
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Fit the largest face into a rectangle.
    ///
    /// The face is centered in the rectangle and its diameter is the shorter
    /// side.
    pub fn fit(x: f64, y: f64, width: f64, height: f64) -> Self {
        let size = width.min(height);
        let half = size / 2.0;
        Self {
            center: Point::new(x + width / 2.0, y + height / 2.0),
            radius: half,
        }
    }

    /// Face diameter.
    pub fn width(&self) -> f64 {
        self.radius * 2.0
    }

    /// Check that the face can produce geometry.
    pub fn validate(&self) -> Result<(), ClockError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ClockError::invalid(format!(
                "face radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !self.center.is_finite() {
            return Err(ClockError::invalid("face center must be finite"));
        }
        Ok(())
    }

    /// Project a point at `distance` from the center along a trigonometric
    /// angle in degrees (0 is east, counter-clockwise positive).
    pub(crate) fn project(&self, degrees: f64, distance: f64) -> Point {
        let radians = degrees.to_radians();
        Point::new(
            self.center.x + distance * radians.cos(),
            self.center.y - distance * radians.sin(),
        )
    }
}

/// Convert a clock-face angle (0 at twelve, clockwise) to a trigonometric
/// angle (0 east, counter-clockwise).
pub(crate) fn clock_to_trig(clock_degrees: f64) -> f64 {
    -(clock_degrees - 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_uses_shorter_side() {
        let face = FaceSpec::fit(10.0, 20.0, 300.0, 200.0);
        assert_eq!(face.radius, 100.0);
        assert_eq!(face.center, Point::new(160.0, 120.0));
        assert_eq!(face.width(), 200.0);
    }

    #[test]
    fn validate_rejects_degenerate_faces() {
        let center = Point::new(0.0, 0.0);
        assert!(FaceSpec::new(center, 0.0).validate().is_err());
        assert!(FaceSpec::new(center, -4.0).validate().is_err());
        assert!(FaceSpec::new(center, f64::NAN).validate().is_err());
        assert!(FaceSpec::new(Point::new(f64::INFINITY, 0.0), 4.0).validate().is_err());
        assert!(FaceSpec::new(center, 4.0).validate().is_ok());
    }

    #[test]
    fn projection_flips_y() {
        let face = FaceSpec::new(Point::new(50.0, 50.0), 50.0);
        let top = face.project(clock_to_trig(0.0), 10.0);
        assert!((top.x - 50.0).abs() < 1e-9);
        assert!((top.y - 40.0).abs() < 1e-9);
        let right = face.project(clock_to_trig(90.0), 10.0);
        assert!((right.x - 60.0).abs() < 1e-9);
        assert!((right.y - 50.0).abs() < 1e-9);
    }
}
