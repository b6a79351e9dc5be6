//! Scene construction and the frozen entity/light arena.
//!
//! Scenes are built with [`SceneBuilder`] and then frozen into an immutable
//! [`Scene`]. Entities are addressed by [`EntityId`], their index in the
//! arena, which stays stable for the lifetime of the scene. A frozen scene
//! is `Sync`, so render workers can share it without locking.

use crate::hittable::{Hittable, RayHit, Shape};
use crate::{Material, Plane, PointLight, Sphere, Triangle};
use lumen_core::{SceneDescription, ShapeDescription};
use lumen_math::{Interval, Ray, Vec3};

/// Stable index of an entity within a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub usize);

/// A renderable object: one shape plus one material.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub shape: Shape,
    pub material: Material,
}

impl Entity {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    /// Intersect the shape and attach this entity's material to the hit.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        self.shape
            .intersect(ray)
            .map(|surface| RayHit::new(ray, surface, &self.material))
    }
}

/// Collects entities and lights before rendering.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    entities: Vec<Entity>,
    lights: Vec<PointLight>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its id in the built scene.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        EntityId(self.entities.len() - 1)
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Builder-style variant of [`add_entity`](Self::add_entity).
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.add_entity(entity);
        self
    }

    /// Builder-style variant of [`add_light`](Self::add_light).
    pub fn with_light(mut self, light: PointLight) -> Self {
        self.add_light(light);
        self
    }

    /// Freeze the collections into a render-ready scene.
    pub fn build(self) -> Scene {
        Scene {
            entities: self.entities,
            lights: self.lights,
        }
    }
}

/// An immutable snapshot of entities and lights.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<Entity>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Start building a new scene.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    /// Build a scene from a loaded description.
    pub fn from_description(desc: &SceneDescription) -> Self {
        let mut builder = SceneBuilder::new();

        for entity in &desc.entities {
            let shape: Shape = match &entity.shape {
                ShapeDescription::Plane { center, normal } => {
                    Plane::new(Vec3::from_array(*center), Vec3::from_array(*normal)).into()
                }
                ShapeDescription::Sphere { center, radius } => {
                    Sphere::new(Vec3::from_array(*center), *radius).into()
                }
                ShapeDescription::Triangle { vertices } => Triangle::new(
                    Vec3::from_array(vertices[0]),
                    Vec3::from_array(vertices[1]),
                    Vec3::from_array(vertices[2]),
                )
                .into(),
            };
            builder.add_entity(Entity::new(shape, Material::from(&entity.material)));
        }

        for light in &desc.lights {
            builder.add_light(PointLight::from(light));
        }

        builder.build()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        &self.entities[id.0]
    }

    /// Find the nearest hit at a strictly positive distance from the ray origin.
    ///
    /// Linear scan over every entity.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(EntityId, RayHit<'_>)> {
        let mut nearest: Option<(EntityId, RayHit<'_>)> = None;
        let mut range = Interval::positive();

        for (index, entity) in self.entities.iter().enumerate() {
            if let Some(hit) = entity.intersect(ray) {
                let distance = (hit.position - ray.origin()).length();
                if range.surrounds(distance) {
                    range = range.with_max(distance);
                    nearest = Some((EntityId(index), hit));
                }
            }
        }

        nearest
    }

    /// True if any entity other than `exclude` is hit within `max_distance` of `from`.
    ///
    /// Distances are measured from `from`, not from the (biased) ray origin.
    pub fn occluded(&self, ray: &Ray, from: Vec3, max_distance: f32, exclude: EntityId) -> bool {
        self.entities
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != exclude.0)
            .filter_map(|(_, entity)| entity.shape.intersect(ray))
            .any(|hit| (hit.position - from).length() < max_distance)
    }
}
