//! Normalized touch input
//!
//! Provides:
//! - Touch identifiers and points in the host's drawing coordinate space
//! - Touch event kinds covering a multi-touch gesture session
//! - The policy applied when a session is cancelled mid-gesture
//!
//! Hosts translate their native pointer events into [`TouchEvent`] values
//! before forwarding them to a drawing surface.

use serde::{Deserialize, Serialize};

/// Maximum number of simultaneous touch points a gesture may carry.
/// Events with more points are ignored by the gesture controller.
pub const MAX_TOUCH_POINTS: usize = 2;

/// Stable per-finger identifier assigned by the host for the lifetime of a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchId(pub u32);

impl std::fmt::Display for TouchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for TouchId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A single active touch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: TouchId,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    /// Creates a new touch point.
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self {
            id: TouchId(id),
            x,
            y,
        }
    }
}

/// Touch event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchEventKind {
    /// First finger touched down
    SessionBegin,
    /// One or more active fingers moved
    PointUpdate,
    /// An additional finger touched down while another is held
    SecondFingerBegin,
    /// A finger lifted while at least one other remains down
    SecondFingerEnd,
    /// Last finger lifted
    SessionEnd,
    /// Host aborted the gesture
    SessionCancel,
    /// Anything the host could not classify
    Other,
}

impl std::fmt::Display for TouchEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionBegin => write!(f, "session-begin"),
            Self::PointUpdate => write!(f, "point-update"),
            Self::SecondFingerBegin => write!(f, "second-finger-begin"),
            Self::SecondFingerEnd => write!(f, "second-finger-end"),
            Self::SessionEnd => write!(f, "session-end"),
            Self::SessionCancel => write!(f, "session-cancel"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A normalized touch event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    /// Every touch point active when the event was raised.
    pub points: Vec<TouchPoint>,
    /// The identifier that caused this event, when the host knows it.
    #[serde(default)]
    pub trigger: Option<TouchId>,
}

impl TouchEvent {
    /// Creates an event with an explicit kind, point set, and trigger.
    pub fn new(kind: TouchEventKind, points: Vec<TouchPoint>, trigger: Option<TouchId>) -> Self {
        Self {
            kind,
            points,
            trigger,
        }
    }

    /// First finger down at `(x, y)`.
    pub fn session_begin(id: u32, x: f64, y: f64) -> Self {
        let point = TouchPoint::new(id, x, y);
        Self::new(TouchEventKind::SessionBegin, vec![point], Some(point.id))
    }

    /// Movement of the given active points.
    pub fn point_update(points: Vec<TouchPoint>) -> Self {
        Self::new(TouchEventKind::PointUpdate, points, None)
    }

    /// `trigger` touched down; `points` includes it and the already-held finger.
    pub fn second_finger_begin(trigger: u32, points: Vec<TouchPoint>) -> Self {
        Self::new(TouchEventKind::SecondFingerBegin, points, Some(TouchId(trigger)))
    }

    /// `trigger` lifted while another finger stays down.
    pub fn second_finger_end(trigger: u32, points: Vec<TouchPoint>) -> Self {
        Self::new(TouchEventKind::SecondFingerEnd, points, Some(TouchId(trigger)))
    }

    /// Last finger lifted.
    pub fn session_end(id: u32, x: f64, y: f64) -> Self {
        let point = TouchPoint::new(id, x, y);
        Self::new(TouchEventKind::SessionEnd, vec![point], Some(point.id))
    }

    /// Gesture aborted by the host.
    pub fn session_cancel() -> Self {
        Self::new(TouchEventKind::SessionCancel, Vec::new(), None)
    }

    /// Number of touch points active for this event.
    pub fn pointer_count(&self) -> usize {
        self.points.len()
    }

    /// Looks up an active point by identifier.
    pub fn point(&self, id: TouchId) -> Option<&TouchPoint> {
        self.points.iter().find(|p| p.id == id)
    }
}

impl std::fmt::Display for TouchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} points", self.kind, self.points.len())?;
        if let Some(trigger) = self.trigger {
            write!(f, ", trigger {}", trigger)?;
        }
        write!(f, ")")
    }
}

/// What happens to the in-progress rectangle when a session is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelPolicy {
    /// Drop the active reference without locking; the rectangle keeps its
    /// last geometry and is never edited again.
    #[default]
    Release,
    /// Lock the rectangle's angle before dropping the active reference.
    Lock,
}

impl std::fmt::Display for CancelPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Release => write!(f, "release"),
            Self::Lock => write!(f, "lock"),
        }
    }
}
