//! Lumen Renderer - recursive CPU ray tracing
//!
//! A Whitted-style ray tracer: camera rays are cast per pixel, the nearest
//! hit is shaded according to its material (diffuse, Phong, mirror or
//! dielectric), and reflective/refractive surfaces recurse up to a fixed
//! depth. Point lights cast hard shadows.

mod hittable;
mod plane;
mod sphere;
mod triangle;
mod material;
mod light;
mod scene;
mod optics;
mod engine;
mod camera;
mod renderer;
mod bucket;

pub use hittable::{Hittable, RayHit, Shape, SurfaceHit, PARALLEL_EPSILON};
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use material::Material;
pub use light::PointLight;
pub use scene::{Entity, EntityId, Scene, SceneBuilder};
pub use optics::{fresnel, reflect, refract};
pub use engine::{cast_ray, EngineConfig};
pub use camera::{Camera, CameraConfig};
pub use renderer::{
    color_to_rgb8, render, render_pixel, ImageBuffer, ImageSink, RenderConfig,
};
pub use bucket::{
    generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE,
};

/// Re-export the description types the renderer consumes
pub use lumen_core::{MaterialKind, SceneDescription};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Interval, Ray, Vec3};
