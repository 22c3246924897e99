use std::ops::{Add, Sub};

/// A point in continuous 2D space, used both for turtle drawing space and for
/// canvas/screen pixel space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The position `distance` units away along `heading_degrees`, measured
    /// counter-clockwise from the positive X axis.
    #[must_use]
    pub fn advanced(self, heading_degrees: f64, distance: f64) -> Self {
        let radians = heading_degrees.to_radians();

        Self {
            x: self.x + distance * radians.cos(),
            y: self.y + distance * radians.sin(),
        }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_advanced_along_positive_x() {
        let p = Position::ORIGIN.advanced(0.0, 2.0);

        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_advanced_heading_is_counter_clockwise() {
        let p = Position::new(1.0, 1.0).advanced(90.0, 1.0);

        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_add_and_sub() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(3.0, -4.0);

        assert_eq!(a + b, Position::new(4.0, -2.0));
        assert_eq!(a - b, Position::new(-2.0, 6.0));
    }

    #[test]
    fn test_distance_to() {
        assert_eq!(Position::ORIGIN.distance_to(Position::new(3.0, 4.0)), 5.0); // 3-4-5 triangle
    }
}
