//! Lumen command-line renderer.
//!
//! Loads a JSON scene, renders it and writes the image to disk.

mod cli;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::LevelFilter;

use cli::Args;
use lumen_renderer::{render, render_parallel, ImageBuffer, RenderConfig, Scene};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::from(args.log_level.clone()))
        .init();

    let description = lumen_core::load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let mut config = RenderConfig::from_options(&description.options);
    if let Some(aa) = args.aa {
        config.aa_multiplier = aa;
    }
    let width = args.width.unwrap_or(description.options.width);
    let height = args.height.unwrap_or(description.options.height);
    ensure!(width > 0 && height > 0, "Image size must be non-zero, got {}x{}", width, height);

    let scene = Scene::from_description(&description);
    let mut image = ImageBuffer::new(width, height);

    if args.single_threaded {
        render(&scene, &config, &mut image);
    } else {
        render_parallel(&scene, &config, &mut image);
    }

    image
        .save(&args.output)
        .with_context(|| format!("Failed to save image {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
