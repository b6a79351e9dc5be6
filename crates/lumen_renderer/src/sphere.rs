//! Sphere primitive for ray tracing.

use crate::hittable::{Hittable, SurfaceHit};
use lumen_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    /// Geometric (projection) solution.
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let radius2 = self.radius * self.radius;
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        let (t0, t1) = (tca - thc, tca + thc);

        // Prefer the near root; fall back to the far one when the origin is inside
        let t = if t0 >= 0.0 {
            t0
        } else if t1 >= 0.0 {
            t1
        } else {
            return None;
        };

        let position = ray.at(t);
        Some(SurfaceHit {
            t,
            position,
            normal: (position - self.center).normalize(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_from_negative_z() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 8.0).abs() < 1e-5); // originZ - r
        assert!((hit.position - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
        assert!((hit.normal - hit.position.normalize()).length() < 1e-5);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(sphere.intersect(&ray).is_none());

        // Ray passing beside it
        let ray = Ray::new(Vec3::new(1.5, 0.0, 0.0), Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside_uses_far_root() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-5);
        // Normal still points outward
        assert!((hit.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_hit_position_matches_ray_parameter() {
        let sphere = Sphere::new(Vec3::new(0.3, -0.2, 6.0), 1.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.05, 0.0, 1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!(hit.t > 0.0);
        assert!((hit.position - ray.at(hit.t)).length() < 1e-5);
    }
}
