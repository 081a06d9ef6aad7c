//! A small walkable scene that exercises the core.
//!
//! Five plinths each carry an animated object and are registered as
//! interactables on the plinth, so the ray may hit either the plinth or the
//! object on top of it. Activating one toggles its animation. A row of
//! columns running away from the spawn point is under LOD control.

use bevy::prelude::*;

use crate::engine::animation::{
    AnimationCommands, AnimationConfig, AnimationKind, AnimationRegistry,
};
use crate::engine::interaction::{
    HoverEnded, HoverStarted, InteractableEntity, InteractionCommands, Interacted,
};
use crate::engine::performance::{LodCommands, LodConfig};
use crate::engine::scene::SurfaceMaterial;
use crate::engine::scene::material::shininess_to_roughness;

/// Animation id toggled when the plinth carrying this component is activated.
#[derive(Component, Debug, Clone)]
pub struct ToggledAnimation(pub String);

struct Exhibit {
    name: &'static str,
    description: &'static str,
    position: Vec3,
    colour: Color,
    emissive: LinearRgba,
    config: AnimationConfig,
}

fn exhibits() -> [Exhibit; 5] {
    [
        Exhibit {
            name: "Lantern",
            description: "A paper lantern that breathes light",
            position: Vec3::new(-8.0, 0.0, 0.0),
            colour: Color::srgb(0.9, 0.7, 0.3),
            emissive: LinearRgba::rgb(4.0, 2.5, 0.8),
            config: AnimationConfig::new(AnimationKind::Glow).with_amplitude(1.0),
        },
        Exhibit {
            name: "Crystal",
            description: "Turns slowly on its point",
            position: Vec3::new(-4.0, 0.0, -3.0),
            colour: Color::srgb(0.4, 0.8, 0.9),
            emissive: LinearRgba::BLACK,
            config: AnimationConfig::new(AnimationKind::Rotate).with_speed(0.8),
        },
        Exhibit {
            name: "Stone",
            description: "Hovers above its plinth",
            position: Vec3::new(0.0, 0.0, -4.0),
            colour: Color::srgb(0.5, 0.5, 0.55),
            emissive: LinearRgba::BLACK,
            config: AnimationConfig::new(AnimationKind::Float).with_duration(3.0),
        },
        Exhibit {
            name: "Drum",
            description: "Swells to a slow beat",
            position: Vec3::new(4.0, 0.0, -3.0),
            colour: Color::srgb(0.7, 0.2, 0.2),
            emissive: LinearRgba::BLACK,
            config: AnimationConfig::new(AnimationKind::Pulse)
                .with_amplitude(0.15)
                .with_duration(1.2),
        },
        Exhibit {
            name: "Ball",
            description: "Will not sit still",
            position: Vec3::new(8.0, 0.0, 0.0),
            colour: Color::srgb(0.2, 0.6, 0.3),
            emissive: LinearRgba::BLACK,
            config: AnimationConfig::new(AnimationKind::Bounce)
                .with_amplitude(1.2)
                .with_duration(0.9),
        },
    ]
}

fn phong(
    materials: &mut Assets<StandardMaterial>,
    colour: Color,
    emissive: LinearRgba,
    shininess: f32,
) -> (MeshMaterial3d<StandardMaterial>, SurfaceMaterial) {
    let handle = materials.add(StandardMaterial {
        base_color: colour,
        emissive,
        perceptual_roughness: shininess_to_roughness(shininess),
        ..default()
    });
    (MeshMaterial3d(handle), SurfaceMaterial::phong(emissive, shininess))
}

pub fn spawn_demo_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    println!("=== SCENE EXPLORER DEMO ===");

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(240.0, 240.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.25, 0.3, 0.25))),
    ));
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));

    let plinth_mesh = meshes.add(Cylinder::new(0.8, 1.0));
    let object_mesh = meshes.add(Sphere::new(0.5).mesh().uv(32, 18));
    for exhibit in exhibits() {
        let id = exhibit.name.to_lowercase();
        let (plinth_material, plinth_surface) =
            phong(&mut materials, Color::srgb(0.8, 0.8, 0.75), LinearRgba::BLACK, 20.0);
        let (object_material, object_surface) =
            phong(&mut materials, exhibit.colour, exhibit.emissive, 60.0);

        let object = commands
            .spawn((
                Mesh3d(object_mesh.clone()),
                object_material,
                object_surface,
                Transform::from_xyz(0.0, 1.1, 0.0),
            ))
            .id();
        let plinth = commands
            .spawn((
                Mesh3d(plinth_mesh.clone()),
                plinth_material,
                plinth_surface,
                Transform::from_translation(exhibit.position + Vec3::Y * 0.5),
                ToggledAnimation(id.clone()),
            ))
            .add_child(object)
            .observe(toggle_exhibit)
            .observe(log_hover_started)
            .observe(log_hover_ended)
            .id();

        commands.register_animation(id, object, exhibit.config);
        commands.register_interactable(
            InteractableEntity::new(plinth, exhibit.name).with_description(exhibit.description),
        );
    }

    let column_mesh = meshes.add(Cuboid::new(1.0, 6.0, 1.0));
    for i in 0..8 {
        let (material, surface) =
            phong(&mut materials, Color::srgb(0.85, 0.8, 0.7), LinearRgba::BLACK, 80.0);
        let column = commands
            .spawn((
                Mesh3d(column_mesh.clone()),
                material,
                surface,
                Transform::from_xyz(-14.0, 3.0, 8.0 - i as f32 * 14.0),
            ))
            .id();
        commands.register_lod(column, LodConfig::default());
    }
}

fn toggle_exhibit(
    trigger: Trigger<Interacted>,
    exhibits: Query<&ToggledAnimation>,
    registry: Res<AnimationRegistry>,
    mut commands: Commands,
) {
    let Ok(ToggledAnimation(id)) = exhibits.get(trigger.target()) else {
        return;
    };
    if registry.is_active(id) {
        commands.pause_animation(id.clone());
    } else {
        commands.play_animation(id.clone());
    }
}

fn log_hover_started(trigger: Trigger<HoverStarted>) {
    debug!("Looking at {}", trigger.event().name);
}

fn log_hover_ended(trigger: Trigger<HoverEnded>) {
    debug!("Looked away from {}", trigger.event().name);
}
