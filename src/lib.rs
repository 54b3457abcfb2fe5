//! # BoxDraw
//!
//! The core of a touch-driven drawing surface: drag one finger to stretch a
//! rectangle, add a second finger to rotate it about its origin, and lift to
//! lock the rotation. Rectangles accumulate across gestures and are handed
//! back to the host, oldest first, for drawing.
//!
//! ## Architecture
//!
//! BoxDraw is organized as a workspace with multiple crates:
//!
//! 1. **boxdraw-core** - Touch input model, errors, shared-state aliases
//! 2. **boxdraw-designer** - Rectangle model, gesture controller, render records, save/restore
//! 3. **boxdraw-settings** - JSON/TOML configuration
//! 4. **boxdraw** - This crate: re-exports, logging setup, config wiring
//!
//! The host owns the window, the canvas, and the lifecycle. It forwards touch
//! events through [`DrawingSurface::handle_event`], redraws when told to, and
//! decides when to [`save_state`](DrawingSurface::save_state) and
//! [`restore_state`](DrawingSurface::restore_state).

use std::path::Path;

use anyhow::Context;

pub use boxdraw_core::{
    CancelPolicy, StateError, TouchEvent, TouchEventKind, TouchId, TouchPoint, MAX_TOUCH_POINTS,
};

pub use boxdraw_designer::{
    rotation_angle, DrawingSurface, GestureController, GesturePhase, Point, RectangleModel,
    RenderedRectangle, SharedSurface, SurfaceState,
};

pub use boxdraw_settings::{Config, GestureSettings, SettingsError, SurfaceStyle};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support (INFO by default)
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("BoxDraw {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}

/// Builds a gesture controller configured from `config`.
pub fn surface_from_config(config: &Config) -> GestureController {
    GestureController::with_cancel_policy(config.gesture.cancel_policy)
}

/// Builds a thread-safe surface configured from `config`.
pub fn shared_surface_from_config(config: &Config) -> SharedSurface {
    SharedSurface::new(surface_from_config(config))
}

/// Loads settings from `path` and builds a controller from them.
pub fn load_surface(path: impl AsRef<Path>) -> anyhow::Result<(Config, GestureController)> {
    let path = path.as_ref();
    let config = Config::load_from_file(path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    let controller = surface_from_config(&config);
    Ok((config, controller))
}
