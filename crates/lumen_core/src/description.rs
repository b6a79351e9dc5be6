//! Scene description types.
//!
//! These mirror the JSON scene format one-to-one. Vectors and colors are
//! stored as plain `[f32; 3]` arrays so the files stay readable; use the
//! accessor methods to get `Vec3` values.

use lumen_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// The kind of surface response a material has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Lambertian diffuse with hard shadows.
    Diffuse,
    /// Phong: weighted diffuse plus recursive specular.
    Glossy,
    /// Perfect mirror.
    Reflective,
    /// Dielectric with Fresnel-weighted reflection/refraction and absorption.
    Refractive,
    /// Flat base color, no lighting. Used for anything unrecognized.
    Unlit,
}

impl MaterialKind {
    /// Parse a material type name (case-insensitive).
    ///
    /// Returns `None` for names that are not known material types.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "diffuse" => Some(Self::Diffuse),
            "glossy" => Some(Self::Glossy),
            "reflective" => Some(Self::Reflective),
            "refractive" => Some(Self::Refractive),
            "unlit" => Some(Self::Unlit),
            _ => None,
        }
    }
}

/// Global render options carried by a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Per-axis sub-samples; each pixel averages `aa_multiplier²` rays.
    pub aa_multiplier: u32,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Overrides the engine's maximum recursion depth
    pub max_depth: Option<u32>,
    /// Overrides the camera's half field of view, in degrees
    pub half_fov_degrees: Option<f32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            aa_multiplier: 1,
            width: 800,
            height: 600,
            max_depth: None,
            half_fov_degrees: None,
        }
    }
}

/// Geometry of a single entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Plane { center: [f32; 3], normal: [f32; 3] },
    Sphere { center: [f32; 3], radius: f32 },
    Triangle { vertices: [[f32; 3]; 3] },
}

fn default_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn default_refractive_index() -> f32 {
    1.0
}

/// Material of a single entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// Material type name, e.g. `"diffuse"`. Unknown names render unlit.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
    /// Only meaningful for refractive materials.
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f32,
}

impl MaterialDescription {
    pub fn new(kind: impl Into<String>, color: [f32; 3]) -> Self {
        Self {
            kind: kind.into(),
            color,
            refractive_index: default_refractive_index(),
        }
    }

    /// The parsed material kind, degrading unknown names to `Unlit`.
    pub fn material_kind(&self) -> MaterialKind {
        MaterialKind::from_name(&self.kind).unwrap_or(MaterialKind::Unlit)
    }

    pub fn color(&self) -> Color {
        Color::from_array(self.color)
    }
}

/// A renderable entity: one shape plus one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDescription {
    pub shape: ShapeDescription,
    pub material: MaterialDescription,
}

/// A point light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: [f32; 3],
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

impl LightDescription {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn color(&self) -> Color {
        Color::from_array(self.color)
    }
}

/// A complete scene file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub options: RenderOptions,
    #[serde(default)]
    pub entities: Vec<EntityDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_kind_from_name() {
        assert_eq!(MaterialKind::from_name("diffuse"), Some(MaterialKind::Diffuse));
        assert_eq!(MaterialKind::from_name("Glossy"), Some(MaterialKind::Glossy));
        assert_eq!(MaterialKind::from_name("REFRACTIVE"), Some(MaterialKind::Refractive));
        assert_eq!(MaterialKind::from_name("emissive"), None);
    }

    #[test]
    fn test_unknown_material_degrades_to_unlit() {
        let material = MaterialDescription::new("velvet", [0.2, 0.3, 0.4]);
        assert_eq!(material.material_kind(), MaterialKind::Unlit);
        assert_eq!(material.color(), Color::new(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_render_options_default() {
        let options = RenderOptions::default();
        assert_eq!(options.aa_multiplier, 1);
        assert!(options.max_depth.is_none());
        assert!(options.half_fov_degrees.is_none());
    }

    #[test]
    fn test_shape_tagging() {
        let json = r#"{ "type": "sphere", "center": [0, 0, 5], "radius": 1.5 }"#;
        let shape: ShapeDescription = serde_json::from_str(json).unwrap();
        assert_eq!(
            shape,
            ShapeDescription::Sphere {
                center: [0.0, 0.0, 5.0],
                radius: 1.5
            }
        );
    }
}
