use serde::{Deserialize, Serialize};

use super::Point;

/// One rectangle drawn on the surface, either still being stretched or finished.
///
/// The rectangle spans from `origin` to `current` and is rotated by `angle`
/// degrees about `origin`. Once the angle is locked it never changes again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleModel {
    origin: Point,
    current: Point,
    /// Rotation angle in degrees
    angle: f64,
    angle_locked: bool,
}

impl RectangleModel {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
            angle: 0.0,
            angle_locked: false,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_angle_locked(&self) -> bool {
        self.angle_locked
    }

    pub fn set_current(&mut self, p: Point) {
        self.current = p;
    }

    /// Sets the rotation angle. Returns `false` and leaves the angle untouched
    /// once it has been locked.
    pub fn set_angle(&mut self, degrees: f64) -> bool {
        if self.angle_locked {
            tracing::trace!("Rejected angle {} on locked rectangle", degrees);
            return false;
        }
        self.angle = degrees;
        true
    }

    pub fn lock_angle(&mut self) {
        self.angle_locked = true;
    }

    pub fn width(&self) -> f64 {
        (self.current.x - self.origin.x).abs()
    }

    pub fn height(&self) -> f64 {
        (self.current.y - self.origin.y).abs()
    }

    /// Normalized `(left, top, right, bottom, angle)` for rendering.
    pub fn bounds_and_angle(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.origin.x.min(self.current.x),
            self.origin.y.min(self.current.y),
            self.origin.x.max(self.current.x),
            self.origin.y.max(self.current.y),
            self.angle,
        )
    }

}
