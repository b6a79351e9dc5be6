//! Infinite plane primitive.

use crate::hittable::{Hittable, SurfaceHit, PARALLEL_EPSILON};
use lumen_math::{Ray, Vec3};

/// An infinite plane through `center`, facing `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    center: Vec3,
    /// Unit normal (zero if constructed from a zero vector)
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(center: Vec3, normal: Vec3) -> Self {
        Self {
            center,
            normal: normal.normalize_or_zero(),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let denom = self.normal.dot(ray.direction());

        // Ray is (nearly) parallel to the plane, or the normal is degenerate
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.center - ray.origin()).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        // The normal is reported as-is, whichever side the ray came from
        Some(SurfaceHit {
            t,
            position: ray.at(t),
            normal: self.normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit() {
        let plane = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 1.0));

        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.position - Vec3::new(0.0, -1.0, 1.0)).length() < 1e-5);
        assert!((hit.t - 2.0_f32.sqrt()).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_normal_not_flipped_from_behind() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = plane.intersect(&ray).unwrap();
        assert_eq!(hit.normal, Vec3::Z);
        assert!((hit.t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_parallel_ray_rejected() {
        let plane = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y);

        // Exactly parallel
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(plane.intersect(&ray).is_none());

        // Grazing from both sides of the epsilon sign
        let below = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1e-8, 1.0));
        assert!(plane.intersect(&below).is_none());
        let above = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1e-8, 1.0));
        assert!(plane.intersect(&above).is_none());
    }

    #[test]
    fn test_zero_normal_never_hits() {
        let plane = Plane::new(Vec3::ZERO, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_hit_position_matches_ray_parameter() {
        let plane = Plane::new(Vec3::new(0.0, 0.0, 7.0), Vec3::NEG_Z);
        let ray = Ray::new(Vec3::new(0.5, 0.5, 0.0), Vec3::new(0.2, -0.1, 1.0));

        let hit = plane.intersect(&ray).unwrap();
        assert!(hit.t > 0.0);
        assert!((hit.position - ray.at(hit.t)).length() < 1e-5);
    }
}
