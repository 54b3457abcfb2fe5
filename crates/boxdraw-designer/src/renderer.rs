//! Render records handed to the host.
//!
//! The host draws each rectangle by rotating its canvas by `angle` degrees
//! about `pivot`, filling the axis-aligned bounds, and rotating back. Hosts
//! that tessellate instead can take the pre-rotated outline from
//! [`RenderedRectangle::to_path`].

use lyon::path::Path;
use serde::{Deserialize, Serialize};

use crate::model::{Point, RectangleModel};

/// One rectangle, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderedRectangle {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    /// Rotation in degrees about `pivot`.
    pub angle: f64,
    /// The rectangle's origin corner.
    pub pivot: Point,
}

impl RenderedRectangle {
    /// `(left, top, right, bottom, angle)`
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (self.left, self.top, self.right, self.bottom, self.angle)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Corners after rotation, clockwise from top-left in unrotated space.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
        .map(|corner| corner.rotated_about(&self.pivot, self.angle))
    }

    /// Closed outline through [`corners`](Self::corners).
    pub fn to_path(&self) -> Path {
        let corners = self.corners();
        let mut builder = Path::builder();
        builder.begin(lyon::math::point(corners[0].x as f32, corners[0].y as f32));
        for corner in &corners[1..] {
            builder.line_to(lyon::math::point(corner.x as f32, corner.y as f32));
        }
        builder.close();
        builder.build()
    }
}

impl From<&RectangleModel> for RenderedRectangle {
    fn from(rect: &RectangleModel) -> Self {
        let (left, top, right, bottom, angle) = rect.bounds_and_angle();
        Self {
            left,
            top,
            right,
            bottom,
            angle,
            pivot: rect.origin(),
        }
    }
}
