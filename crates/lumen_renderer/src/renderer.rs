//! Render entry points and image output.
//!
//! Implements:
//! - Supersampled pixel evaluation (`aa_multiplier²` rays per pixel)
//! - A single-threaded full-image render into any [`ImageSink`]
//! - An in-memory [`ImageBuffer`] with PNG export

use std::path::Path;
use std::time::Instant;

use crate::{cast_ray, Camera, CameraConfig, Color, EngineConfig, Interval, Scene};
use crate::bucket::DEFAULT_BUCKET_SIZE;
use lumen_core::RenderOptions;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Sub-samples per pixel axis for anti-aliasing
    pub aa_multiplier: u32,
    /// Edge length of parallel render buckets, in pixels
    pub bucket_size: u32,
    /// Shading constants
    pub engine: EngineConfig,
    /// Camera placement
    pub camera: CameraConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            aa_multiplier: 1,
            bucket_size: DEFAULT_BUCKET_SIZE,
            engine: EngineConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Build a config from scene-file options, keeping defaults for anything unset.
    pub fn from_options(options: &RenderOptions) -> Self {
        let mut config = Self {
            aa_multiplier: options.aa_multiplier.max(1),
            ..Default::default()
        };
        if let Some(max_depth) = options.max_depth {
            config.engine.max_depth = max_depth;
        }
        if let Some(half_fov) = options.half_fov_degrees {
            config.camera.half_fov_degrees = half_fov;
        }
        config
    }
}

/// Destination for rendered pixels.
pub trait ImageSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Render a single pixel, averaging `aa_multiplier²` camera rays.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: u32, y: u32, config: &RenderConfig) -> Color {
    let aa = config.aa_multiplier.max(1);
    let weight = 1.0 / (aa * aa) as f32;
    let mut pixel_color = Color::ZERO;

    for dx in 0..aa {
        for dy in 0..aa {
            let ray = camera.get_ray(x, y, dx, dy, aa);
            pixel_color += cast_ray(scene, &ray, 0, &config.engine) * weight;
        }
    }

    pixel_color
}

/// Render the entire scene into `sink`, one pixel at a time.
pub fn render(scene: &Scene, config: &RenderConfig, sink: &mut dyn ImageSink) {
    let (width, height) = (sink.width(), sink.height());
    let camera = Camera::new(&config.camera, width, height);

    log::info!(
        "Rendering {}x{} (aa {}x) with {} entities and {} lights",
        width,
        height,
        config.aa_multiplier,
        scene.entities().len(),
        scene.lights().len()
    );
    let start = Instant::now();

    for x in 0..width {
        for y in 0..height {
            let color = render_pixel(scene, &camera, x, y, config);
            sink.set_pixel(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
}

/// Convert a color to 8-bit RGB, clipping each channel to [0, 1].
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (255.0 * Interval::UNIT.clamp(c)).round() as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to 8-bit RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|color| color_to_rgb8(*color))
            .collect()
    }

    /// Save as a PNG (or any format `image` infers from the extension).
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        let img = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb8(self.get(x, y)))
        });
        img.save(path)
    }
}

impl ImageSink for ImageBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}
