//! Host-facing drawing surface capability.
//!
//! Hosts talk to the gesture logic only through [`DrawingSurface`]. A plain
//! [`GestureController`] serves a single input thread; [`SharedSurface`]
//! puts one lock around the controller for hosts that deliver events from
//! several threads.

use std::sync::Arc;

use boxdraw_core::{thread_safe, Callback, CancelPolicy, ThreadSafe, TouchEvent};

use crate::gesture::GestureController;
use crate::renderer::RenderedRectangle;
use crate::serialization::SurfaceState;

/// What a host needs from a drawing surface.
pub trait DrawingSurface {
    /// Applies a touch event; `true` means the host should redraw.
    fn handle_event(&mut self, event: &TouchEvent) -> bool;

    /// Rectangles to draw, oldest first.
    fn rectangles(&self) -> Vec<RenderedRectangle>;

    fn save_state(&self) -> SurfaceState;

    fn restore_state(&mut self, state: SurfaceState);
}

impl DrawingSurface for GestureController {
    fn handle_event(&mut self, event: &TouchEvent) -> bool {
        GestureController::handle_event(self, event)
    }

    fn rectangles(&self) -> Vec<RenderedRectangle> {
        GestureController::rectangles(self)
    }

    fn save_state(&self) -> SurfaceState {
        GestureController::save_state(self)
    }

    fn restore_state(&mut self, state: SurfaceState) {
        GestureController::restore_state(self, state)
    }
}

/// A cloneable, thread-safe handle to one gesture controller.
///
/// Every operation takes the same lock, so a reader never observes a
/// half-applied event. The redraw callback is shared too: registering it on
/// any clone applies to events delivered through every clone.
#[derive(Clone)]
pub struct SharedSurface {
    controller: ThreadSafe<GestureController>,
    on_redraw: ThreadSafe<Option<Arc<Callback>>>,
}

impl SharedSurface {
    pub fn new(controller: GestureController) -> Self {
        Self {
            controller: thread_safe(controller),
            on_redraw: thread_safe(None),
        }
    }

    pub fn with_cancel_policy(cancel_policy: CancelPolicy) -> Self {
        Self::new(GestureController::with_cancel_policy(cancel_policy))
    }

    /// Registers a callback invoked after any event that needs a redraw,
    /// replacing the previous one. The callback runs with no lock held.
    pub fn set_redraw_callback(&self, callback: Callback) {
        *self.on_redraw.lock() = Some(Arc::new(callback));
    }

    pub fn clear_redraw_callback(&self) {
        *self.on_redraw.lock() = None;
    }

    /// Runs `f` with exclusive access to the underlying controller.
    pub fn with_controller<R>(&self, f: impl FnOnce(&mut GestureController) -> R) -> R {
        let mut controller = self.controller.lock();
        f(&mut *controller)
    }

    pub fn rectangle_count(&self) -> usize {
        self.controller.lock().rectangle_count()
    }
}

impl Default for SharedSurface {
    fn default() -> Self {
        Self::new(GestureController::new())
    }
}

impl std::fmt::Debug for SharedSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("SharedSurface");
        match self.controller.try_lock() {
            Some(controller) => debug.field("controller", &*controller),
            None => debug.field("controller", &format_args!("<locked>")),
        };
        match self.on_redraw.try_lock() {
            Some(on_redraw) => debug.field("on_redraw", &on_redraw.is_some()),
            None => debug.field("on_redraw", &format_args!("<locked>")),
        };
        debug.finish()
    }
}

impl DrawingSurface for SharedSurface {
    fn handle_event(&mut self, event: &TouchEvent) -> bool {
        let redraw = self.controller.lock().handle_event(event);
        if redraw {
            let callback = self.on_redraw.lock().clone();
            if let Some(callback) = callback {
                (*callback)();
            }
        }
        redraw
    }

    fn rectangles(&self) -> Vec<RenderedRectangle> {
        self.controller.lock().rectangles()
    }

    fn save_state(&self) -> SurfaceState {
        self.controller.lock().save_state()
    }

    fn restore_state(&mut self, state: SurfaceState) {
        self.controller.lock().restore_state(state);
    }
}
