//! Reflection, refraction (Snell's law) and Fresnel reflectance.
//!
//! All functions take the incident direction and the surface normal as
//! reported by the primitive. Whether the ray is entering or leaving the
//! medium is decided from the sign of `incident·normal`; when leaving, the
//! indices swap and the normal is flipped.

use lumen_math::Vec3;

/// Index of refraction of the medium surrounding every object.
const SURROUNDING_INDEX: f32 = 1.0;

/// Reflect a vector about a normal: `i - 2(i·n)n`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Refract `incident` through a surface with index `refractive_index`.
///
/// Returns `None` on total internal reflection.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f32) -> Option<Vec3> {
    let mut cos_i = normal.dot(incident).clamp(-1.0, 1.0);
    let (mut eta_i, mut eta_t) = (SURROUNDING_INDEX, refractive_index);
    let mut n = normal;

    if cos_i < 0.0 {
        // Entering: make the cosine positive
        cos_i = -cos_i;
    } else {
        // Leaving: swap media and flip the normal
        std::mem::swap(&mut eta_i, &mut eta_t);
        n = -normal;
    }

    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }

    Some(eta * incident + (eta * cos_i - k.sqrt()) * n)
}

/// Fraction of light reflected at the boundary, in [0, 1].
///
/// Unpolarised average of the s- and p-polarised Fresnel terms; exactly 1
/// on total internal reflection.
pub fn fresnel(incident: Vec3, normal: Vec3, refractive_index: f32) -> f32 {
    let cos_i = incident.dot(normal).clamp(-1.0, 1.0);
    let (mut eta_i, mut eta_t) = (SURROUNDING_INDEX, refractive_index);
    if cos_i > 0.0 {
        std::mem::swap(&mut eta_i, &mut eta_t);
    }

    let sin_t = eta_i / eta_t * (1.0 - cos_i * cos_i).max(0.0).sqrt();
    if sin_t >= 1.0 {
        return 1.0;
    }

    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    let cos_i = cos_i.abs();
    let rs = (eta_t * cos_i - eta_i * cos_t) / (eta_t * cos_i + eta_i * cos_t);
    let rp = (eta_i * cos_i - eta_t * cos_t) / (eta_i * cos_i + eta_t * cos_t);

    (rs * rs + rp * rp) / 2.0
}
