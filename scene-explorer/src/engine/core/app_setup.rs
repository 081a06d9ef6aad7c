use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use crate::engine::camera::{CameraSettings, camera_controller, spawn_camera};
use crate::engine::config::ExplorerConfigPlugin;
use crate::engine::core::app_state::{AppState, announce_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::demo::spawn_demo_scene;
use crate::engine::systems::hud::{
    create_native_overlays, hover_label_update_system, hud_text_update_system, stats_dump_system,
};
use crate::engine::{ExplorerCorePlugin, ExplorerSet};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(ExplorerCorePlugin)
        // Loads explorer.config.json and moves the app to Running once settled.
        .add_plugins(ExplorerConfigPlugin)
        .init_resource::<CameraSettings>();

    app.add_systems(Startup, (spawn_camera, create_native_overlays))
        .add_systems(
            OnEnter(AppState::Running),
            (announce_running, spawn_demo_scene),
        );

    // Camera input is read ahead of the core sets.
    app.add_systems(
        Update,
        camera_controller
            .before(ExplorerSet::Animate)
            .run_if(in_state(AppState::Running)),
    )
    .add_systems(
        Update,
        (
            hud_text_update_system,
            hover_label_update_system,
            stats_dump_system,
        )
            .after(ExplorerSet::Govern),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
