//! JSON scene loading.
//!
//! Reads a scene file into a [`SceneDescription`] and validates the parts
//! that would otherwise only show up as black pixels at render time.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::description::{MaterialKind, SceneDescription, ShapeDescription};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid render option: {0}")]
    InvalidOption(String),

    #[error("Invalid geometry in entity {index}: {message}")]
    InvalidGeometry { index: usize, message: String },
}

/// Result type for loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a JSON scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    log::debug!("Read scene file {} ({} bytes)", path.display(), text.len());
    load_scene_from_str(&text)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(text: &str) -> SceneResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(text)?;
    validate(&description)?;

    log::info!(
        "Loaded scene with {} entities and {} lights",
        description.entities.len(),
        description.lights.len()
    );

    Ok(description)
}

fn validate(description: &SceneDescription) -> SceneResult<()> {
    let options = &description.options;
    if options.aa_multiplier == 0 {
        return Err(SceneError::InvalidOption(
            "aa_multiplier must be at least 1".to_string(),
        ));
    }
    if options.width == 0 || options.height == 0 {
        return Err(SceneError::InvalidOption(format!(
            "image size must be non-zero, got {}x{}",
            options.width, options.height
        )));
    }
    if let Some(fov) = options.half_fov_degrees {
        if !(fov > 0.0 && fov < 90.0) {
            return Err(SceneError::InvalidOption(format!(
                "half_fov_degrees must be in (0, 90), got {}",
                fov
            )));
        }
    }

    for (index, entity) in description.entities.iter().enumerate() {
        match &entity.shape {
            ShapeDescription::Sphere { radius, .. } if *radius <= 0.0 => {
                return Err(SceneError::InvalidGeometry {
                    index,
                    message: format!("sphere radius must be positive, got {}", radius),
                });
            }
            ShapeDescription::Plane { normal, .. } if normal.iter().all(|c| *c == 0.0) => {
                return Err(SceneError::InvalidGeometry {
                    index,
                    message: "plane normal must be non-zero".to_string(),
                });
            }
            // Degenerate triangles are left to the renderer, which never hits them.
            _ => {}
        }

        if MaterialKind::from_name(&entity.material.kind).is_none() {
            log::warn!(
                "Entity {} has unknown material type '{}', rendering as unlit",
                index,
                entity.material.kind
            );
        }
    }

    Ok(())
}
