//! BoxDraw Settings Crate
//!
//! Handles drawing surface configuration: gesture behaviour and the colours
//! hosts paint with, loaded from and saved to JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, GestureSettings, SurfaceStyle};
pub use error::{SettingsError, SettingsResult};
