//! Shared tuning tables for the scene explorer.
//!
//! Everything here is plain data: the engine crate turns these values into
//! components and resources.

pub mod animation;
pub mod interaction;
pub mod lod;
pub mod quality;
pub mod render_settings;
