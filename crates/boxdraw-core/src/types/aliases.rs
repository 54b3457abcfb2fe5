//! Type aliases for commonly used complex types.
//!
//! Hosts that feed a drawing surface from more than one thread share it as a
//! [`ThreadSafe`] value, and register redraw notifications as [`Callback`]s.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxdraw_core::types::*;
//!
//! // Instead of: Arc<Mutex<GestureController>>
//! let surface: ThreadSafe<GestureController> = thread_safe(GestureController::new());
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` rather than `std::sync::Mutex` (no lock poisoning).
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A simple callback with no parameters or return value.
///
/// Thread-safe, suitable for cross-thread event notification.
pub type Callback = Box<dyn Fn() + Send + Sync>;

/// Create a new thread-safe wrapper.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
