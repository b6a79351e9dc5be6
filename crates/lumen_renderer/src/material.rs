//! Surface materials.

use lumen_core::{MaterialDescription, MaterialKind};
use lumen_math::Color;

/// A material: a kind tag plus the parameters its shading routine reads.
///
/// Immutable once attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    /// Base color; for refractive materials this drives absorption
    pub color: Color,
    /// Index of refraction, only meaningful for `Refractive`
    pub refractive_index: f32,
}

impl Material {
    pub fn new(kind: MaterialKind, color: Color, refractive_index: f32) -> Self {
        Self {
            kind,
            color,
            refractive_index,
        }
    }

    /// Lambertian diffuse material.
    pub fn diffuse(color: Color) -> Self {
        Self::new(MaterialKind::Diffuse, color, 1.0)
    }

    /// Phong material (diffuse + specular).
    pub fn glossy(color: Color) -> Self {
        Self::new(MaterialKind::Glossy, color, 1.0)
    }

    /// Perfect mirror. The color is unused.
    pub fn reflective() -> Self {
        Self::new(MaterialKind::Reflective, Color::ONE, 1.0)
    }

    /// Dielectric with the given absorption color and index of refraction.
    ///
    /// - `refractive_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn refractive(color: Color, refractive_index: f32) -> Self {
        Self::new(MaterialKind::Refractive, color, refractive_index)
    }

    /// Flat color, no lighting.
    pub fn unlit(color: Color) -> Self {
        Self::new(MaterialKind::Unlit, color, 1.0)
    }
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Self::new(desc.material_kind(), desc.color(), desc.refractive_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_description() {
        let mut desc = MaterialDescription::new("refractive", [0.9, 0.8, 0.7]);
        desc.refractive_index = 1.33;

        let material = Material::from(&desc);
        assert_eq!(material.kind, MaterialKind::Refractive);
        assert_eq!(material.color, Color::new(0.9, 0.8, 0.7));
        assert_eq!(material.refractive_index, 1.33);
    }

    #[test]
    fn test_unknown_description_is_unlit() {
        let desc = MaterialDescription::new("chrome-ish", [0.1, 0.2, 0.3]);
        assert_eq!(Material::from(&desc).kind, MaterialKind::Unlit);
    }
}
