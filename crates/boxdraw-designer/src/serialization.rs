//! Save/restore of the drawing surface.
//!
//! [`SurfaceState`] is the logical snapshot: every rectangle in creation
//! order plus the active gesture references. Hosts that need bytes (for
//! example to stash state across a process restart) use the versioned JSON
//! blob produced by [`SurfaceState::to_blob`].

use boxdraw_core::{StateError, TouchId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::gesture::{GestureController, GesturePhase};
use crate::model::RectangleModel;

/// State blob format version
pub const STATE_FORMAT_VERSION: u32 = 1;

/// Snapshot of a [`GestureController`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceState {
    pub rectangles: Vec<RectangleModel>,
    #[serde(default)]
    pub active_index: Option<usize>,
    #[serde(default)]
    pub primary_touch_id: Option<TouchId>,
    #[serde(default)]
    pub phase: GesturePhase,
}

/// Envelope written to the opaque blob.
#[derive(Debug, Serialize, Deserialize)]
struct StateBlob {
    version: u32,
    saved_at: DateTime<Utc>,
    state: SurfaceState,
}

impl SurfaceState {
    /// Encodes the state as an opaque byte blob.
    ///
    /// Coordinates and angles must be finite; JSON has no encoding for NaN
    /// or infinity.
    pub fn to_blob(&self) -> Result<Vec<u8>, StateError> {
        let blob = StateBlob {
            version: STATE_FORMAT_VERSION,
            saved_at: Utc::now(),
            state: self.clone(),
        };
        serde_json::to_vec(&blob).map_err(StateError::Encode)
    }

    /// Decodes a blob produced by [`to_blob`](Self::to_blob).
    pub fn from_blob(bytes: &[u8]) -> Result<Self, StateError> {
        let blob: StateBlob = serde_json::from_slice(bytes).map_err(StateError::Decode)?;
        if blob.version != STATE_FORMAT_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: blob.version,
                expected: STATE_FORMAT_VERSION,
            });
        }
        debug!(
            "Decoded surface state saved at {} ({} rectangles)",
            blob.saved_at,
            blob.state.rectangles.len()
        );
        Ok(blob.state)
    }
}

impl GestureController {
    /// Snapshot of the rectangles and the gesture in progress.
    pub fn save_state(&self) -> SurfaceState {
        SurfaceState {
            rectangles: self.rectangles.clone(),
            active_index: self.active,
            primary_touch_id: self.primary_touch_id,
            phase: self.phase,
        }
    }

    /// Replaces the controller's contents with `state`.
    ///
    /// Never fails. An active reference that cannot be honoured (index out of
    /// range, rectangle already locked, or no owning finger) is dropped and
    /// the controller restores as idle; the rectangles themselves are always
    /// restored as given. The cancel policy is configuration and is kept.
    pub fn restore_state(&mut self, state: SurfaceState) {
        let SurfaceState {
            rectangles,
            active_index,
            primary_touch_id,
            phase,
        } = state;

        let active = match (active_index, primary_touch_id) {
            (Some(index), Some(_)) => match rectangles.get(index) {
                None => {
                    warn!(
                        "Restored active index {} out of range ({} rectangles); restoring idle",
                        index,
                        rectangles.len()
                    );
                    None
                }
                Some(rect) if rect.is_angle_locked() => {
                    warn!("Restored active rectangle {} is locked; restoring idle", index);
                    None
                }
                Some(_) => Some(index),
            },
            (Some(index), None) => {
                warn!("Restored active rectangle {} has no owning touch; restoring idle", index);
                None
            }
            (None, _) => None,
        };

        self.rectangles = rectangles;
        self.active = active;
        match active {
            Some(_) => {
                self.primary_touch_id = primary_touch_id;
                self.phase = match phase {
                    GesturePhase::Idle => GesturePhase::Drawing,
                    other => other,
                };
            }
            None => {
                self.primary_touch_id = None;
                self.phase = GesturePhase::Idle;
            }
        }
        debug!(
            "Restored {} rectangles, active {:?}, phase {}",
            self.rectangles.len(),
            self.active,
            self.phase
        );
    }
}
