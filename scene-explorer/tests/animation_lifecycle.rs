mod common;

use bevy::prelude::*;
use scene_explorer::engine::animation::commands::{
    register_animation, set_animation_playing, unregister_animation,
};
use scene_explorer::engine::animation::{
    AnimationConfig, AnimationKind, AnimationPlugin, AnimationRegistry,
};
use scene_explorer::engine::scene::SurfaceMaterial;

use common::{advance, headless_app, translation};

fn app_with_node(at: Vec3) -> (App, Entity) {
    let mut app = headless_app();
    app.add_plugins(AnimationPlugin);
    let node = app
        .world_mut()
        .spawn((Transform::from_translation(at), Visibility::default()))
        .id();
    (app, node)
}

fn registry(app: &App) -> &AnimationRegistry {
    app.world().resource::<AnimationRegistry>()
}

#[test]
fn float_offsets_then_restores_baseline() {
    let (mut app, node) = app_with_node(Vec3::new(0.0, 5.0, 0.0));
    let config = AnimationConfig::new(AnimationKind::Float)
        .with_amplitude(2.0)
        .with_duration(4.0);
    register_animation(app.world_mut(), "hover".into(), node, config);
    assert!(registry(&app).is_running());

    advance(&mut app, 1.0);
    app.update();
    assert!((translation(&app, node).y - 7.0).abs() < 1e-4);

    unregister_animation(app.world_mut(), "hover");
    assert_eq!(translation(&app, node), Vec3::new(0.0, 5.0, 0.0));
    assert!(!registry(&app).is_running());
    assert!(registry(&app).list_ids().is_empty());
}

#[test]
fn rotate_accumulates_without_wrapping() {
    let (mut app, node) = app_with_node(Vec3::ZERO);
    let config = AnimationConfig::new(AnimationKind::Rotate).with_speed(2.0);
    register_animation(app.world_mut(), "spin".into(), node, config);

    advance(&mut app, 3.0);
    app.update();
    let rotation = app.world().get::<Transform>(node).unwrap().rotation;
    // 6 rad is past one turn; compare as rotations, not angles.
    assert!(rotation.angle_between(Quat::from_rotation_y(6.0)) < 1e-3);
}

#[test]
fn pause_freezes_and_play_restarts_the_cycle() {
    let (mut app, node) = app_with_node(Vec3::ZERO);
    let config = AnimationConfig::new(AnimationKind::Float)
        .with_amplitude(1.0)
        .with_duration(4.0);
    register_animation(app.world_mut(), "bob".into(), node, config);

    advance(&mut app, 1.0);
    app.update();
    let peak = translation(&app, node).y;
    assert!((peak - 1.0).abs() < 1e-4);

    set_animation_playing(app.world_mut(), "bob", false);
    assert!(!registry(&app).is_active("bob"));
    assert!(!registry(&app).is_running());
    advance(&mut app, 1.0);
    app.update();
    assert_eq!(translation(&app, node).y, peak);

    set_animation_playing(app.world_mut(), "bob", true);
    app.update();
    assert!(translation(&app, node).y.abs() < 1e-4);
}

#[test]
fn paused_registration_waits_for_play() {
    let (mut app, node) = app_with_node(Vec3::ZERO);
    let config = AnimationConfig::new(AnimationKind::Bounce).paused();
    register_animation(app.world_mut(), "hop".into(), node, config);
    assert_eq!(registry(&app).list_ids(), vec!["hop"]);
    assert!(!registry(&app).is_active("hop"));
    assert!(!registry(&app).is_running());

    advance(&mut app, 0.5);
    app.update();
    assert_eq!(translation(&app, node), Vec3::ZERO);
}

#[test]
fn glow_restores_emissive_and_ignores_basic_materials() {
    let (mut app, node) = app_with_node(Vec3::ZERO);
    let baseline = LinearRgba::rgb(2.0, 1.0, 0.5);
    app.world_mut()
        .entity_mut(node)
        .insert(SurfaceMaterial::phong(baseline, 30.0));
    let plain = app
        .world_mut()
        .spawn((Transform::default(), SurfaceMaterial::Basic))
        .id();

    let config = AnimationConfig::new(AnimationKind::Glow)
        .with_amplitude(1.0)
        .with_duration(4.0);
    register_animation(app.world_mut(), "glow".into(), node, config);
    register_animation(app.world_mut(), "dud".into(), plain, config);

    // progress 0.25: (sin(pi/2) + 1) / 2 = 1
    advance(&mut app, 1.0);
    app.update();
    let bright = app
        .world()
        .get::<SurfaceMaterial>(node)
        .unwrap()
        .emissive()
        .unwrap();
    assert!((bright.red - baseline.red).abs() < 1e-4);
    assert!((bright.blue - baseline.blue).abs() < 1e-4);

    // progress 0.75: (sin(3pi/2) + 1) / 2 = 0
    advance(&mut app, 2.0);
    app.update();
    let dimmed = app
        .world()
        .get::<SurfaceMaterial>(node)
        .unwrap()
        .emissive()
        .unwrap();
    assert!(dimmed.red.abs() < 1e-4);
    assert_eq!(app.world().get::<SurfaceMaterial>(plain), Some(&SurfaceMaterial::Basic));

    unregister_animation(app.world_mut(), "glow");
    assert_eq!(
        app.world().get::<SurfaceMaterial>(node).unwrap().emissive(),
        Some(baseline)
    );
}
