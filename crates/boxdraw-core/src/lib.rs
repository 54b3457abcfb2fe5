//! # BoxDraw Core
//!
//! Core types and utilities for BoxDraw.
//! Provides the normalized touch input model the gesture controller consumes,
//! the state blob error type, and shared-state type aliases.

pub mod error;
pub mod input;
pub mod types;

pub use error::StateError;

pub use input::{CancelPolicy, TouchEvent, TouchEventKind, TouchId, TouchPoint, MAX_TOUCH_POINTS};

pub use types::{thread_safe, Callback, ThreadSafe};
