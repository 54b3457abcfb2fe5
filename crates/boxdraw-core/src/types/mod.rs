//! Type aliases shared across the BoxDraw crates.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Arc<Mutex<T>>` and callbacks.

pub mod aliases;

pub use aliases::*;
