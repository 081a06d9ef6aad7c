use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Bottom-right diagnostics line.
#[derive(Component)]
pub struct HudText;

/// Name and description of the hovered entity, centre-bottom.
#[derive(Component)]
pub struct HoverLabel;

pub fn announce_running() {
    println!("→ Configuration settled, scene running");
}
