//! Interactive 3D scene explorer.
//!
//! The reusable part is [`engine::ExplorerCorePlugin`]: procedural animation,
//! view-ray interaction targeting and an adaptive performance governor, all
//! driven by the Bevy main schedule. The rest of `engine` is the host app the
//! binary runs.

pub mod engine;
