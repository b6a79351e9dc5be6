//! Hittable trait, hit records, and the closed set of primitive shapes.

use crate::{Material, Plane, Sphere, Triangle};
use lumen_math::{Ray, Vec3};

/// Threshold below which a ray is treated as parallel to a surface.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Geometric result of a ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Distance along the ray (the ray direction is unit length)
    pub t: f32,
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal, oriented by the primitive's own convention
    pub normal: Vec3,
}

/// Record of a ray hitting an entity, ready for shading.
///
/// Created fresh per intersection and consumed by the shading routine.
#[derive(Debug, Clone, Copy)]
pub struct RayHit<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal (not flipped towards the ray)
    pub normal: Vec3,
    /// Direction of the ray that produced this hit
    pub incident: Vec3,
    /// Distance from the ray origin to `position`
    pub distance: f32,
    /// Material of the entity that was hit
    pub material: &'a Material,
}

impl<'a> RayHit<'a> {
    pub fn new(ray: &Ray, surface: SurfaceHit, material: &'a Material) -> Self {
        Self {
            position: surface.position,
            normal: surface.normal,
            incident: ray.direction(),
            distance: surface.t,
            material,
        }
    }

    /// True if the incident ray arrives from the side the normal points to.
    #[inline]
    pub fn is_outside(&self) -> bool {
        self.incident.dot(self.normal) < 0.0
    }
}

/// Trait for geometry that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection in front of the ray origin, if any.
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit>;
}

/// The primitive shapes an entity can be made of.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Hittable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        match self {
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Triangle(triangle) => triangle.intersect(ray),
        }
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_shape_dispatch() {
        let shape: Shape = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0).into();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let hit = shape.intersect(&ray).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_hit_copies_incident() {
        let material = Material::diffuse(Color::ONE);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        let surface = SurfaceHit {
            t: 3.0,
            position: Vec3::new(0.0, 0.0, 3.0),
            normal: Vec3::NEG_Z,
        };

        let hit = RayHit::new(&ray, surface, &material);
        assert_eq!(hit.incident, Vec3::Z);
        assert_eq!(hit.distance, 3.0);
        assert!(hit.is_outside());
    }
}
