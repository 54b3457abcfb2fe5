use serde::{Deserialize, Serialize};

mod rectangle;

pub use rectangle::RectangleModel;

/// A point in the host's drawing coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Rotates this point by `degrees` about `pivot`.
    pub fn rotated_about(&self, pivot: &Point, degrees: f64) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }
}

impl From<boxdraw_core::TouchPoint> for Point {
    fn from(p: boxdraw_core::TouchPoint) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_rotated_about_quarter_turn() {
        let p = Point::new(10.0, 0.0).rotated_about(&Point::new(0.0, 0.0), 90.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_about_pivot_is_fixed() {
        let pivot = Point::new(5.0, 7.0);
        assert_eq!(pivot.rotated_about(&pivot, 33.0), pivot);
    }
}
