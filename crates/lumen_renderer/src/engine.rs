//! Recursive ray casting and material shading.
//!
//! [`cast_ray`] finds the nearest hit and dispatches on its material:
//! - Diffuse: Lambertian with hard shadows
//! - Glossy: Phong, `Kd * diffuse + Ks * specular`, specular recursing
//! - Reflective: pure mirror recursion
//! - Refractive: Fresnel mix of reflection and refraction, with Beer's-law
//!   absorption on rays leaving the medium
//! - Unlit: flat base color
//!
//! Recursion stops once `depth` exceeds [`EngineConfig::max_depth`].

use crate::scene::{EntityId, Scene};
use crate::{fresnel, reflect, refract, Color, MaterialKind, PointLight, RayHit};
use lumen_math::{Ray, Vec3};

/// Shading and recursion constants.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Rays cast deeper than this return black
    pub max_depth: u32,
    /// Offset along the normal for secondary ray origins
    pub bias: f32,
    /// Phong diffuse weight (Kd)
    pub diffuse_weight: f32,
    /// Phong specular weight (Ks)
    pub specular_weight: f32,
    /// Phong specular exponent (n)
    pub specular_exponent: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            bias: 1e-4,
            diffuse_weight: 0.7,
            specular_weight: 0.3,
            specular_exponent: 10,
        }
    }
}

/// Compute the color seen along a ray.
///
/// Channels are clamped below at zero; there is no upper clamp here.
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32, config: &EngineConfig) -> Color {
    if depth > config.max_depth {
        return Color::ZERO;
    }

    let Some((id, hit)) = scene.nearest_hit(ray) else {
        return Color::ZERO;
    };

    let color = match hit.material.kind {
        MaterialKind::Diffuse => diffuse(scene, id, &hit, config),
        MaterialKind::Glossy => phong(scene, id, &hit, depth, config),
        MaterialKind::Reflective => mirror(scene, &hit, depth, config),
        MaterialKind::Refractive => dielectric(scene, &hit, depth, config),
        MaterialKind::Unlit => hit.material.color,
    };

    color.max(Color::ZERO)
}

/// Direction to `light` if nothing other than the shaded entity blocks it.
///
/// The shadow ray starts `bias` above the surface; occluders count only if
/// they are strictly closer to the hit point than the light is.
fn light_direction(
    scene: &Scene,
    id: EntityId,
    hit: &RayHit,
    light: &PointLight,
    config: &EngineConfig,
) -> Option<Vec3> {
    let (light_dir, light_distance) = light.direction_from(hit.position);
    let shadow_ray = Ray::new(hit.position + hit.normal * config.bias, light_dir);

    if scene.occluded(&shadow_ray, hit.position, light_distance, id) {
        None
    } else {
        Some(light_dir)
    }
}

/// Sum of Lambertian contributions from every unshadowed light.
///
/// `normal·light` is not clamped: a light behind the surface subtracts.
fn diffuse(scene: &Scene, id: EntityId, hit: &RayHit, config: &EngineConfig) -> Color {
    scene
        .lights()
        .iter()
        .filter_map(|light| {
            light_direction(scene, id, hit, light, config)
                .map(|light_dir| hit.material.color * light.color * hit.normal.dot(light_dir))
        })
        .fold(Color::ZERO, |acc, c| acc + c)
}

/// Phong shading: `Kd * diffuse + Ks * specular`.
///
/// Each unshadowed light adds a highlight and the color seen along the
/// mirror direction. That color is the same for every light, so it is cast
/// once at `depth + 1` and scaled by the number of unshadowed lights.
fn phong(scene: &Scene, id: EntityId, hit: &RayHit, depth: u32, config: &EngineConfig) -> Color {
    let lit = scene
        .lights()
        .iter()
        .filter(|light| light_direction(scene, id, hit, light, config).is_some())
        .count();
    if lit == 0 {
        return Color::ZERO;
    }

    let reflected = reflect(hit.incident, hit.normal);
    let highlight = reflected
        .dot(-hit.incident)
        .max(0.0)
        .powi(config.specular_exponent)
        / 2.0;

    let bounce = Ray::new(hit.position + hit.normal * config.bias, reflected);
    let specular =
        (cast_ray(scene, &bounce, depth + 1, config) + Color::splat(highlight)) * lit as f32;

    diffuse(scene, id, hit, config) * config.diffuse_weight + specular * config.specular_weight
}

/// Perfect mirror: the reflected color, no local shading.
fn mirror(scene: &Scene, hit: &RayHit, depth: u32, config: &EngineConfig) -> Color {
    let reflected = reflect(hit.incident, hit.normal);
    let bounce = Ray::new(hit.position + hit.normal * config.bias, reflected);
    cast_ray(scene, &bounce, depth + 1, config)
}

/// Dielectric: `reflected * kr + refracted * (1 - kr)`.
fn dielectric(scene: &Scene, hit: &RayHit, depth: u32, config: &EngineConfig) -> Color {
    let material = hit.material;
    let kr = fresnel(hit.incident, hit.normal, material.refractive_index);
    let outside = hit.is_outside();
    let bias = hit.normal * config.bias;

    let mut refracted = Color::ZERO;
    if kr < 1.0 {
        if let Some(direction) = refract(hit.incident, hit.normal, material.refractive_index) {
            let origin = if outside {
                hit.position - bias
            } else {
                hit.position + bias
            };
            refracted = cast_ray(scene, &Ray::new(origin, direction), depth + 1, config);

            // Leaving the medium: absorb according to how far the ray travelled inside
            if hit.incident.dot(hit.normal) > 0.0 {
                refracted *= absorption(material.color, material.refractive_index, hit.distance);
            }
        }
    }

    let origin = if outside {
        hit.position + bias
    } else {
        hit.position - bias
    };
    let reflection_ray = Ray::new(origin, reflect(hit.incident, hit.normal));
    let reflected = cast_ray(scene, &reflection_ray, depth + 1, config);

    reflected * kr + refracted * (1.0 - kr)
}

/// Beer's law transmittance: `exp(-(1 - color) * ior * distance)` per channel.
fn absorption(color: Color, refractive_index: f32, distance: f32) -> Color {
    let absorbance = (Color::ONE - color) * refractive_index * distance;
    Color::new(
        (-absorbance.x).exp(),
        (-absorbance.y).exp(),
        (-absorbance.z).exp(),
    )
}
