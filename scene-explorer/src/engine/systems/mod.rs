//! Diagnostic overlay for the running explorer.

/// HUD text, hover label and the F3 stats dump.
pub mod hud;
