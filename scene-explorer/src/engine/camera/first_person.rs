use bevy::input::mouse::MouseMotion;
use bevy::math::EulerRot;
use bevy::prelude::*;
use constants::render_settings::{
    CAMERA_LOOK_SENSITIVITY, CAMERA_MOVE_SPEED, CAMERA_PITCH_LIMIT, CAMERA_SPAWN_POSITION,
};
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub move_speed: f32,
    pub look_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            move_speed: CAMERA_MOVE_SPEED,
            look_sensitivity: CAMERA_LOOK_SENSITIVITY,
        }
    }
}

/// Yaw/pitch state of the explorer's eye.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct FirstPersonCamera {
    pub yaw: f32,
    pub pitch: f32,
}

impl FirstPersonCamera {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    pub fn look(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch = (self.pitch - delta.y * sensitivity)
            .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    /// World-space direction for a local move input. Horizontal movement
    /// follows yaw only, so looking down does not dig into the ground.
    pub fn move_direction(&self, input: Vec3) -> Vec3 {
        let heading = Quat::from_rotation_y(self.yaw);
        let forward = heading * Vec3::NEG_Z;
        let right = heading * Vec3::X;
        let delta = right * input.x + Vec3::Y * input.y - forward * input.z;
        delta.normalize_or_zero()
    }
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_SPAWN_POSITION),
        FirstPersonCamera::default(),
    ));
}

/// Right mouse drag looks around, WASD moves, Space/C rise and sink.
pub fn camera_controller(
    mut cameras: Query<(&mut Transform, &mut FirstPersonCamera)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<CameraSettings>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let Ok((mut transform, mut eye)) = cameras.single_mut() else {
        return;
    };

    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        eye.look(mouse_delta, settings.look_sensitivity);
        transform.rotation = eye.rotation();
    }

    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) { move_input.z -= 1.0; }
    if keyboard.pressed(KeyCode::KeyS) { move_input.z += 1.0; }
    if keyboard.pressed(KeyCode::KeyD) { move_input.x += 1.0; }
    if keyboard.pressed(KeyCode::KeyA) { move_input.x -= 1.0; }
    if keyboard.pressed(KeyCode::Space) { move_input.y += 1.0; }
    if keyboard.pressed(KeyCode::KeyC) { move_input.y -= 1.0; }

    if move_input == Vec3::ZERO {
        return;
    }

    // Shift = faster, ctrl = slower
    let mut speed = settings.move_speed;
    if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) { speed *= 3.5; }
    if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) { speed *= 0.25; }

    transform.translation += eye.move_direction(move_input) * speed * time.delta_secs();
}
