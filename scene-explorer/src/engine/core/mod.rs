//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration and plugin
//! initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Builds the app from the explorer core, the configuration loader, the
/// camera controller, HUD and demo scene.
pub mod app_setup;

/// Application states and HUD marker components.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;
