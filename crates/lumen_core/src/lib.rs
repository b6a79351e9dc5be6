//! Lumen Core - scene description types and loading.
//!
//! This crate provides:
//!
//! - **Description types**: `SceneDescription`, `EntityDescription`,
//!   `ShapeDescription`, `MaterialDescription`, `LightDescription`
//! - **Loading**: JSON scene files with validation
//!
//! It is renderer-agnostic: nothing here knows how to shade a pixel.
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let description = load_scene("scenes/spheres.json")?;
//! println!("Loaded {} entities, {} lights",
//!     description.entities.len(),
//!     description.lights.len());
//! ```

pub mod description;
pub mod loader;

// Re-export commonly used types
pub use description::{
    EntityDescription, LightDescription, MaterialDescription, MaterialKind, RenderOptions,
    SceneDescription, ShapeDescription,
};
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
