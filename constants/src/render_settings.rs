use bevy::prelude::*;

pub const CAMERA_SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.7, 12.0);
pub const CAMERA_MOVE_SPEED: f32 = 6.0;
pub const CAMERA_LOOK_SENSITIVITY: f32 = 0.0030;
pub const CAMERA_PITCH_LIMIT: f32 = 1.55;

pub const HUD_FONT_SIZE: f32 = 16.0;
pub const HUD_TEXT_COLOUR: Color = Color::srgb(1.0, 0.2, 0.2);
pub const HOVER_LABEL_COLOUR: Color = Color::srgb(1.0, 1.0, 0.6);

pub const FOG_COLOUR: Color = Color::srgba(0.55, 0.6, 0.7, 1.0);
