#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;

/// App with transform propagation and a hand-driven clock, no window or
/// renderer.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(TransformPlugin).init_resource::<Time>();
    app
}

pub fn advance(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
}

pub fn translation(app: &App, node: Entity) -> Vec3 {
    app.world().get::<Transform>(node).unwrap().translation
}

/// Observer-fed record of fired events, in firing order.
#[derive(Resource, Default)]
pub struct EventLog(pub Vec<String>);
