//! Point lights.

use lumen_core::LightDescription;
use lumen_math::{Color, Vec3};

/// A light that emits in all directions from a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }

    /// Unit direction and distance from `point` to the light.
    pub fn direction_from(&self, point: Vec3) -> (Vec3, f32) {
        let to_light = self.position - point;
        let distance = to_light.length();
        (to_light / distance, distance)
    }
}

impl From<&LightDescription> for PointLight {
    fn from(desc: &LightDescription) -> Self {
        Self::new(desc.position(), desc.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from() {
        let light = PointLight::new(Vec3::new(0.0, 5.0, 5.0), Color::ONE);
        let (dir, dist) = light.direction_from(Vec3::new(0.0, 1.0, 2.0));
        assert!((dist - 5.0).abs() < 1e-5);
        assert!((dir - Vec3::new(0.0, 0.8, 0.6)).length() < 1e-5);
    }
}
