//! Runtime configuration loaded from `assets/explorer.config.json`.
//!
//! Every field is optional. Missing or unreadable files leave the compiled-in
//! defaults from the `constants` crate in place.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use serde::Deserialize;

use crate::engine::camera::CameraSettings;
use crate::engine::core::app_state::AppState;
use crate::engine::interaction::InteractionSettings;
use crate::engine::performance::{GovernorOverrides, PerformanceGovernor};

pub const CONFIG_PATH: &str = "explorer.config.json";

#[derive(Asset, TypePath, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub governor: GovernorOverrides,
    pub interaction: Option<InteractionSettings>,
    pub camera: Option<CameraSettings>,
}

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ExplorerConfig>>,
}

pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    config_loader.handle = Some(asset_server.load(CONFIG_PATH));
}

/// Apply the config once it has loaded, or give up on it if loading failed.
/// Either way the app moves on to `AppState::Running`.
pub fn apply_loaded_config(
    config_loader: Res<ConfigLoader>,
    configs: Res<Assets<ExplorerConfig>>,
    asset_server: Res<AssetServer>,
    mut governor: ResMut<PerformanceGovernor>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = config_loader.handle.as_ref() else {
        next_state.set(AppState::Running);
        return;
    };

    if let Some(config) = configs.get(handle) {
        governor.set_options(&config.governor);
        if let Some(interaction) = config.interaction {
            commands.insert_resource(interaction);
        }
        if let Some(camera) = config.camera {
            commands.insert_resource(camera);
        }
        info!("Applied configuration from {}", CONFIG_PATH);
        next_state.set(AppState::Running);
    } else if let LoadState::Failed(err) = asset_server.load_state(handle.id()) {
        warn!("Using default configuration: {}", err);
        next_state.set(AppState::Running);
    }
}

pub struct ExplorerConfigPlugin;

impl Plugin for ExplorerConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<ExplorerConfig>::new(&["config.json"]))
            .init_resource::<ConfigLoader>()
            .add_systems(Startup, start_loading)
            .add_systems(
                Update,
                apply_loaded_config.run_if(in_state(AppState::Loading)),
            );
    }
}
