use bevy::prelude::*;

/// Material capabilities of a scene node.
///
/// Only the `Phong` variant exposes emissive colour and shininess. Glow
/// animations and LOD fidelity changes branch on the tag and leave the other
/// variants untouched.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum SurfaceMaterial {
    /// Unlit colour only.
    Basic,
    /// Lit material with an emissive term and specular exponent.
    Phong { emissive: LinearRgba, shininess: f32 },
    /// Anything the core does not know how to adjust.
    Other,
}

impl SurfaceMaterial {
    pub fn phong(emissive: LinearRgba, shininess: f32) -> Self {
        Self::Phong {
            emissive,
            shininess,
        }
    }

    pub fn emissive(&self) -> Option<LinearRgba> {
        match self {
            Self::Phong { emissive, .. } => Some(*emissive),
            _ => None,
        }
    }

    pub fn shininess(&self) -> Option<f32> {
        match self {
            Self::Phong { shininess, .. } => Some(*shininess),
            _ => None,
        }
    }

    /// Returns false when the material has no emissive term.
    pub fn set_emissive(&mut self, colour: LinearRgba) -> bool {
        match self {
            Self::Phong { emissive, .. } => {
                *emissive = colour;
                true
            }
            _ => false,
        }
    }

    /// Returns false when the material has no shininess term.
    pub fn set_shininess(&mut self, value: f32) -> bool {
        match self {
            Self::Phong { shininess, .. } => {
                *shininess = value;
                true
            }
            _ => false,
        }
    }
}

/// Blinn-Phong exponent to Bevy's perceptual roughness.
pub fn shininess_to_roughness(shininess: f32) -> f32 {
    let alpha = (2.0 / (shininess.max(0.0) + 2.0)).sqrt();
    alpha.sqrt().clamp(0.089, 1.0)
}

/// Push changed `SurfaceMaterial`s into the node's PBR material asset.
pub fn sync_surface_materials(
    nodes: Query<
        (&SurfaceMaterial, &MeshMaterial3d<StandardMaterial>),
        Changed<SurfaceMaterial>,
    >,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (surface, handle) in &nodes {
        let SurfaceMaterial::Phong {
            emissive,
            shininess,
        } = *surface
        else {
            continue;
        };
        if let Some(material) = materials.get_mut(&handle.0) {
            material.emissive = emissive;
            material.perceptual_roughness = shininess_to_roughness(shininess);
        }
    }
}
