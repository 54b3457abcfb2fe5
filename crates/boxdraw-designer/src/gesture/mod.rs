//! Gesture controller: turns a normalized multi-touch stream into rectangles.
//!
//! One finger stretches a rectangle from where it first touched to where it
//! currently is. A second finger rotates that rectangle about its origin, and
//! lifting either finger while two are down locks the rotation for good.
//!
//! ```text
//! Idle ──session-begin──▶ Drawing ──second-finger-begin──▶ Rotating
//!  ▲                         │                                │
//!  └──session-end/cancel─────┴────────second-finger-end───────┘ (locks)
//! ```

mod angle;

pub use angle::rotation_angle;

use boxdraw_core::{CancelPolicy, TouchEvent, TouchEventKind, TouchId, MAX_TOUCH_POINTS};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::{Point, RectangleModel};
use crate::renderer::RenderedRectangle;

/// Where the controller is within the current gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    /// No rectangle is being edited.
    #[default]
    Idle,
    /// The primary finger is stretching the active rectangle.
    Drawing,
    /// A secondary finger is also down and drives the angle.
    Rotating,
}

impl std::fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Drawing => write!(f, "Drawing"),
            Self::Rotating => write!(f, "Rotating"),
        }
    }
}

/// Owns every rectangle drawn on the surface and the state of the gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    pub(crate) rectangles: Vec<RectangleModel>,
    pub(crate) active: Option<usize>,
    pub(crate) primary_touch_id: Option<TouchId>,
    pub(crate) phase: GesturePhase,
    pub(crate) cancel_policy: CancelPolicy,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel_policy(cancel_policy: CancelPolicy) -> Self {
        Self {
            cancel_policy,
            ..Self::default()
        }
    }

    /// Applies one touch event. Returns `true` when the rendered rectangles changed
    /// and the host should redraw.
    ///
    /// Events carrying more than [`MAX_TOUCH_POINTS`] points, and any event
    /// arriving while the active rectangle is already locked, are ignored.
    pub fn handle_event(&mut self, event: &TouchEvent) -> bool {
        if event.pointer_count() > MAX_TOUCH_POINTS {
            debug!("Ignoring {}: too many touch points", event);
            return false;
        }
        if self
            .active_rectangle()
            .is_some_and(RectangleModel::is_angle_locked)
        {
            debug!("Ignoring {}: active rectangle is locked", event);
            return false;
        }

        match event.kind {
            TouchEventKind::SessionBegin => self.begin_rectangle(event),
            TouchEventKind::PointUpdate => self.update_points(event),
            TouchEventKind::SecondFingerBegin => self.begin_rotation(),
            TouchEventKind::SecondFingerEnd => self.lock_active(),
            TouchEventKind::SessionCancel => {
                self.release_active(self.cancel_policy == CancelPolicy::Lock)
            }
            TouchEventKind::SessionEnd | TouchEventKind::Other => self.release_active(false),
        }
    }

    fn begin_rectangle(&mut self, event: &TouchEvent) -> bool {
        if self.active.is_some() {
            debug!("Ignoring {}: a rectangle is still active", event);
            return false;
        }
        let [touch] = event.points.as_slice() else {
            debug!("Ignoring {}: expected exactly one touch point", event);
            return false;
        };

        let origin = Point::from(*touch);
        self.rectangles.push(RectangleModel::new(origin));
        self.active = Some(self.rectangles.len() - 1);
        self.primary_touch_id = Some(event.trigger.unwrap_or(touch.id));
        self.phase = GesturePhase::Drawing;
        debug!(
            "Started rectangle {} at ({}, {}) owned by {}",
            self.rectangles.len() - 1,
            origin.x,
            origin.y,
            touch.id
        );
        true
    }

    fn update_points(&mut self, event: &TouchEvent) -> bool {
        let (Some(index), Some(primary)) = (self.active, self.primary_touch_id) else {
            return false;
        };
        let rotating = self.phase == GesturePhase::Rotating;
        let rect = &mut self.rectangles[index];

        let mut changed = false;
        for touch in &event.points {
            if touch.id == primary {
                rect.set_current(Point::from(*touch));
                trace!("Rectangle {} corner -> ({}, {})", index, touch.x, touch.y);
                changed = true;
            } else if rotating {
                match rotation_angle(rect.origin(), Point::from(*touch)) {
                    Some(angle) => {
                        if rect.set_angle(angle) {
                            trace!("Rectangle {} angle -> {:.3}", index, angle);
                            changed = true;
                        }
                    }
                    None => trace!("Secondary finger {} on origin, angle kept", touch.id),
                }
            }
        }
        changed
    }

    fn begin_rotation(&mut self) -> bool {
        if self.phase == GesturePhase::Drawing {
            self.phase = GesturePhase::Rotating;
            debug!("Rotating rectangle {:?}", self.active);
        }
        false
    }

    fn lock_active(&mut self) -> bool {
        let Some(index) = self.active.take() else {
            return false;
        };
        self.rectangles[index].lock_angle();
        self.primary_touch_id = None;
        self.phase = GesturePhase::Idle;
        debug!(
            "Locked rectangle {} at {:.3} degrees",
            index,
            self.rectangles[index].angle()
        );
        true
    }

    fn release_active(&mut self, lock: bool) -> bool {
        if lock {
            return self.lock_active();
        }
        if let Some(index) = self.active.take() {
            debug!("Released rectangle {} without locking", index);
        }
        self.primary_touch_id = None;
        self.phase = GesturePhase::Idle;
        false
    }

    /// Renderable snapshot of every rectangle, in the order they were created.
    pub fn rectangles(&self) -> Vec<RenderedRectangle> {
        self.rectangles.iter().map(RenderedRectangle::from).collect()
    }

    /// Every rectangle model, in the order they were created.
    pub fn models(&self) -> &[RectangleModel] {
        &self.rectangles
    }

    /// Rectangle at `index` in creation order.
    pub fn rectangle(&self, index: usize) -> Option<&RectangleModel> {
        self.rectangles.get(index)
    }

    pub fn rectangle_count(&self) -> usize {
        self.rectangles.len()
    }

    /// Index of the rectangle the current gesture is editing.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_rectangle(&self) -> Option<&RectangleModel> {
        self.active.and_then(|index| self.rectangles.get(index))
    }

    pub fn primary_touch_id(&self) -> Option<TouchId> {
        self.primary_touch_id
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn cancel_policy(&self) -> CancelPolicy {
        self.cancel_policy
    }

    /// Changes what a cancelled session does to the active rectangle.
    pub fn set_cancel_policy(&mut self, cancel_policy: CancelPolicy) {
        self.cancel_policy = cancel_policy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxdraw_core::TouchPoint;

    fn drawing_at(x: f64, y: f64) -> GestureController {
        let mut controller = GestureController::new();
        assert!(controller.handle_event(&TouchEvent::session_begin(1, x, y)));
        controller
    }

    #[test]
    fn test_session_begin_creates_rectangle() {
        let controller = drawing_at(5.0, 6.0);
        assert_eq!(controller.rectangle_count(), 1);
        assert_eq!(controller.active_index(), Some(0));
        assert_eq!(controller.primary_touch_id(), Some(TouchId(1)));
        assert_eq!(controller.phase(), GesturePhase::Drawing);
    }

    #[test]
    fn test_session_begin_with_two_points_ignored() {
        let mut controller = GestureController::new();
        let event = TouchEvent::new(
            TouchEventKind::SessionBegin,
            vec![TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 1.0, 1.0)],
            Some(TouchId(1)),
        );
        assert!(!controller.handle_event(&event));
        assert_eq!(controller.rectangle_count(), 0);
        assert_eq!(controller.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_session_begin_while_active_ignored() {
        let mut controller = drawing_at(0.0, 0.0);
        assert!(!controller.handle_event(&TouchEvent::session_begin(4, 9.0, 9.0)));
        assert_eq!(controller.rectangle_count(), 1);
        assert_eq!(controller.primary_touch_id(), Some(TouchId(1)));
    }

    #[test]
    fn test_primary_move_updates_current() {
        let mut controller = drawing_at(0.0, 0.0);
        let moved = controller.handle_event(&TouchEvent::point_update(vec![TouchPoint::new(
            1, 50.0, 40.0,
        )]));
        assert!(moved);
        assert_eq!(
            controller.rectangles()[0].as_tuple(),
            (0.0, 0.0, 50.0, 40.0, 0.0)
        );
    }

    #[test]
    fn test_move_without_session_is_noop() {
        let mut controller = GestureController::new();
        let event = TouchEvent::point_update(vec![TouchPoint::new(1, 3.0, 3.0)]);
        assert!(!controller.handle_event(&event));
        assert_eq!(controller.rectangle_count(), 0);
    }

    #[test]
    fn test_secondary_move_before_rotation_ignored() {
        let mut controller = drawing_at(0.0, 0.0);
        let event = TouchEvent::point_update(vec![TouchPoint::new(2, 0.0, 10.0)]);
        assert!(!controller.handle_event(&event));
        assert_eq!(controller.rectangle(0).unwrap().angle(), 0.0);
    }

    #[test]
    fn test_second_finger_begin_enters_rotating_without_redraw() {
        let mut controller = drawing_at(0.0, 0.0);
        let event = TouchEvent::second_finger_begin(
            2,
            vec![TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 5.0, 0.0)],
        );
        assert!(!controller.handle_event(&event));
        assert_eq!(controller.phase(), GesturePhase::Rotating);
    }

    #[test]
    fn test_secondary_on_origin_keeps_angle() {
        let mut controller = drawing_at(10.0, 10.0);
        controller.handle_event(&TouchEvent::second_finger_begin(
            2,
            vec![TouchPoint::new(1, 10.0, 10.0), TouchPoint::new(2, 10.0, 20.0)],
        ));
        controller.handle_event(&TouchEvent::point_update(vec![TouchPoint::new(
            2, 10.0, 20.0,
        )]));
        let before = controller.rectangle(0).unwrap().angle();
        assert!((before - 90.0).abs() < 1e-9);

        let changed = controller.handle_event(&TouchEvent::point_update(vec![TouchPoint::new(
            2, 10.0, 10.0,
        )]));
        assert!(!changed);
        assert_eq!(controller.rectangle(0).unwrap().angle(), before);
    }

    #[test]
    fn test_second_finger_end_locks_and_returns_to_idle() {
        let mut controller = drawing_at(0.0, 0.0);
        let both = vec![TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 0.0, 10.0)];
        controller.handle_event(&TouchEvent::second_finger_begin(2, both.clone()));
        controller.handle_event(&TouchEvent::point_update(both.clone()));
        assert!(controller.handle_event(&TouchEvent::second_finger_end(2, both)));

        assert!(controller.rectangle(0).unwrap().is_angle_locked());
        assert_eq!(controller.active_index(), None);
        assert_eq!(controller.primary_touch_id(), None);
        assert_eq!(controller.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_primary_lift_during_rotation_also_locks() {
        let mut controller = drawing_at(0.0, 0.0);
        let both = vec![TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 10.0, 10.0)];
        controller.handle_event(&TouchEvent::second_finger_begin(2, both.clone()));
        controller.handle_event(&TouchEvent::point_update(both.clone()));
        assert!(controller.handle_event(&TouchEvent::second_finger_end(1, both)));
        assert!(controller.rectangle(0).unwrap().is_angle_locked());
    }

    #[test]
    fn test_session_end_releases_without_lock() {
        let mut controller = drawing_at(0.0, 0.0);
        assert!(!controller.handle_event(&TouchEvent::session_end(1, 4.0, 4.0)));
        assert!(!controller.rectangle(0).unwrap().is_angle_locked());
        assert_eq!(controller.active_index(), None);
        assert_eq!(controller.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_cancel_release_policy() {
        let mut controller = drawing_at(0.0, 0.0);
        assert!(!controller.handle_event(&TouchEvent::session_cancel()));
        assert!(!controller.rectangle(0).unwrap().is_angle_locked());
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn test_cancel_lock_policy() {
        let mut controller = GestureController::with_cancel_policy(CancelPolicy::Lock);
        controller.handle_event(&TouchEvent::session_begin(1, 0.0, 0.0));
        assert!(controller.handle_event(&TouchEvent::session_cancel()));
        assert!(controller.rectangle(0).unwrap().is_angle_locked());
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn test_cancel_policy_applies_only_to_cancel() {
        let mut controller = GestureController::with_cancel_policy(CancelPolicy::Lock);
        controller.handle_event(&TouchEvent::session_begin(1, 0.0, 0.0));
        controller.handle_event(&TouchEvent::session_end(1, 0.0, 0.0));
        assert!(!controller.rectangle(0).unwrap().is_angle_locked());
    }

    #[test]
    fn test_other_event_releases() {
        let mut controller = drawing_at(0.0, 0.0);
        let event = TouchEvent::new(TouchEventKind::Other, Vec::new(), None);
        assert!(!controller.handle_event(&event));
        assert_eq!(controller.active_index(), None);
        assert_eq!(controller.rectangle_count(), 1);
    }

    #[test]
    fn test_three_fingers_ignored() {
        let mut controller = drawing_at(0.0, 0.0);
        let before = controller.clone();
        let event = TouchEvent::point_update(vec![
            TouchPoint::new(1, 9.0, 9.0),
            TouchPoint::new(2, 1.0, 1.0),
            TouchPoint::new(3, 2.0, 2.0),
        ]);
        assert!(!controller.handle_event(&event));
        assert_eq!(controller.models(), before.models());
        assert_eq!(controller.active_index(), before.active_index());
        assert_eq!(controller.phase(), before.phase());
    }

    #[test]
    fn test_new_session_after_lock_creates_second_rectangle() {
        let mut controller = drawing_at(0.0, 0.0);
        let both = vec![TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 10.0, 10.0)];
        controller.handle_event(&TouchEvent::second_finger_begin(2, both.clone()));
        controller.handle_event(&TouchEvent::second_finger_end(2, both));
        controller.handle_event(&TouchEvent::session_end(1, 0.0, 0.0));

        assert!(controller.handle_event(&TouchEvent::session_begin(7, 20.0, 20.0)));
        assert_eq!(controller.rectangle_count(), 2);
        assert_eq!(controller.active_index(), Some(1));
        assert_eq!(controller.primary_touch_id(), Some(TouchId(7)));
    }

    #[test]
    fn test_set_cancel_policy_applies_to_active_session() {
        let mut controller = drawing_at(0.0, 0.0);
        assert_eq!(controller.cancel_policy(), CancelPolicy::Release);
        controller.set_cancel_policy(CancelPolicy::Lock);

        controller.handle_event(&TouchEvent::session_cancel());
        assert_eq!(controller.rectangle(0).map(|r| r.is_angle_locked()), Some(true));
        assert!(controller.rectangle(1).is_none());
    }
}
