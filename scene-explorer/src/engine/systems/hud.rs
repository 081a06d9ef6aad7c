use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::{HOVER_LABEL_COLOUR, HUD_FONT_SIZE, HUD_TEXT_COLOUR};

use crate::engine::core::app_state::{HoverLabel, HudText};
use crate::engine::interaction::InteractionTargeting;
use crate::engine::performance::{GovernorStats, PerformanceGovernor};

pub fn create_native_overlays(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(HUD_TEXT_COLOUR),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                HudText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(HOVER_LABEL_COLOUR),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(48.0),
                    left: Val::Percent(40.0),
                    ..default()
                },
                HoverLabel,
            ));
        });
}

pub fn format_stats(smoothed_fps: Option<f64>, stats: &GovernorStats) -> String {
    let fps = smoothed_fps.map_or(stats.fps, |value| value as f32);
    format!(
        "FPS: {fps:.1} | {} | LOD {} / visible {}",
        stats.tier.as_str(),
        stats.lod_count,
        stats.visible_count
    )
}

pub fn hud_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    governor: Res<PerformanceGovernor>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    let smoothed = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    let line = format_stats(smoothed, &governor.stats());
    for mut text in &mut query {
        if text.0 != line {
            text.0.clone_from(&line);
        }
    }
}

pub fn hover_label_update_system(
    targeting: Res<InteractionTargeting>,
    mut query: Query<&mut Text, With<HoverLabel>>,
) {
    if !targeting.is_changed() {
        return;
    }
    let label = targeting
        .hovered()
        .map(|entity| format!("{} - {}", entity.name, entity.description))
        .unwrap_or_default();
    for mut text in &mut query {
        text.0.clone_from(&label);
    }
}

/// F3 logs the governor stats as JSON.
pub fn stats_dump_system(keyboard: Res<ButtonInput<KeyCode>>, governor: Res<PerformanceGovernor>) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }
    match serde_json::to_string(&governor.stats()) {
        Ok(json) => info!("Governor stats: {}", json),
        Err(err) => warn!("Failed to serialise governor stats: {}", err),
    }
}
