//! Rotation angle derived from the secondary finger.

use crate::model::Point;

/// Angle in degrees between the horizontal through `origin` and the line from
/// `origin` to `finger`, computed as `asin(|dy| / distance)`.
///
/// The result is always in `[0, 90]`: the direction of the finger relative to
/// the origin (left/right, above/below) is not distinguished. Returns `None`
/// when the finger sits exactly on the origin or the inputs are not finite.
pub fn rotation_angle(origin: Point, finger: Point) -> Option<f64> {
    let height = (finger.y - origin.y).abs();
    let hypotenuse = finger.distance_to(&origin);
    if hypotenuse == 0.0 || !hypotenuse.is_finite() {
        return None;
    }
    Some((height / hypotenuse).min(1.0).asin().to_degrees())
}
