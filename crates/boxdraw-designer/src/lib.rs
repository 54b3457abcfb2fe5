//! # BoxDraw Designer
//!
//! Gesture-to-geometry logic for a touch drawing surface. One finger drags
//! out a rectangle from its origin; a second finger rotates it about that
//! origin; lifting a finger while two are down locks the rotation.
//!
//! ## Core Components
//!
//! - **RectangleModel**: origin, current corner, angle, and lock flag
//! - **GestureController**: the multi-touch state machine that owns every
//!   rectangle drawn so far
//! - **RenderedRectangle**: what the host draws each frame
//! - **SurfaceState**: save/restore snapshot and its opaque blob form
//! - **DrawingSurface**: the capability trait hosts program against, with
//!   a lock-protected [`SharedSurface`] for multi-threaded hosts
//!
//! ## Architecture
//!
//! ```text
//! Host input pump ──TouchEvent──▶ GestureController ──▶ Vec<RectangleModel>
//!                                        │
//!                                        ├──▶ rectangles() ──▶ host renderer
//!                                        └──▶ save_state()/restore_state()
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use boxdraw_core::{TouchEvent, TouchPoint};
//! use boxdraw_designer::GestureController;
//!
//! let mut controller = GestureController::new();
//! controller.handle_event(&TouchEvent::session_begin(1, 0.0, 0.0));
//! controller.handle_event(&TouchEvent::point_update(vec![TouchPoint::new(1, 40.0, 30.0)]));
//!
//! let rects = controller.rectangles();
//! assert_eq!(rects[0].as_tuple(), (0.0, 0.0, 40.0, 30.0, 0.0));
//! ```

pub mod gesture;
pub mod model;
pub mod renderer;
pub mod serialization;
pub mod surface;

pub use gesture::{rotation_angle, GestureController, GesturePhase};
pub use model::{Point, RectangleModel};
pub use renderer::RenderedRectangle;
pub use serialization::{SurfaceState, STATE_FORMAT_VERSION};
pub use surface::{DrawingSurface, SharedSurface};
