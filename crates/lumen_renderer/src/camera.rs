//! Camera for primary ray generation.
//!
//! A pinhole camera looking down +Z with +Y up. Pixel (0, 0) is the
//! top-left corner of the image.

use lumen_math::{Ray, Vec3};

/// Camera placement and lens settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Position of the pinhole
    pub origin: Vec3,
    /// Half of the vertical field of view, in degrees
    pub half_fov_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            half_fov_degrees: 30.0,
        }
    }
}

/// Camera bound to an image resolution.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    image_width: u32,
    image_height: u32,
    /// tan(half fov)
    scale: f32,
    aspect_ratio: f32,
}

impl Camera {
    /// Create a camera for a `width` x `height` image.
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        Self {
            origin: config.origin,
            image_width: width,
            image_height: height,
            scale: config.half_fov_degrees.to_radians().tan(),
            aspect_ratio: width as f32 / height as f32,
        }
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Generate the ray for sub-sample `(dx, dy)` of pixel `(x, y)`.
    ///
    /// With `aa` sub-samples per axis, sub-sample `d` sits at offset `d / aa`
    /// inside the pixel.
    pub fn get_ray(&self, x: u32, y: u32, dx: u32, dy: u32, aa: u32) -> Ray {
        let aa = aa as f32;
        let px = (x as f32 + dx as f32 / aa) / self.image_width as f32;
        let py = (y as f32 + dy as f32 / aa) / self.image_height as f32;

        // Normalized device coordinates in [-1, 1], +Y up
        let ndc_x = px * 2.0 - 1.0;
        let ndc_y = 1.0 - py * 2.0;

        let direction = Vec3::new(
            ndc_x * self.scale * self.aspect_ratio,
            ndc_y * self.scale,
            1.0,
        );
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_z() {
        let camera = Camera::new(&CameraConfig::default(), 100, 100);

        let ray = camera.get_ray(50, 50, 0, 0, 1);
        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_corner_ray_spans_field_of_view() {
        let camera = Camera::new(&CameraConfig::default(), 200, 100);

        // Top-left corner of the image
        let ray = camera.get_ray(0, 0, 0, 0, 1);
        let dir = ray.direction() / ray.direction().z;
        let tan30 = 30.0_f32.to_radians().tan();
        assert!((dir.y - tan30).abs() < 1e-5);
        assert!((dir.x + tan30 * 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_subsample_offsets() {
        let camera = Camera::new(&CameraConfig::default(), 10, 10);

        // Sub-sample (1, 1) of 2 lands on the next half pixel
        let a = camera.get_ray(3, 3, 1, 1, 2);
        let b = camera.get_ray(7, 7, 0, 0, 2);
        let c = Camera::new(&CameraConfig::default(), 20, 20).get_ray(7, 7, 0, 0, 1);
        let d = Camera::new(&CameraConfig::default(), 20, 20).get_ray(14, 14, 0, 0, 1);
        assert!((a.direction() - c.direction()).length() < 1e-6);
        assert!((b.direction() - d.direction()).length() < 1e-6);
    }

    #[test]
    fn test_custom_origin() {
        let config = CameraConfig {
            origin: Vec3::new(1.0, 2.0, 3.0),
            half_fov_degrees: 45.0,
        };
        let camera = Camera::new(&config, 4, 4);
        let ray = camera.get_ray(0, 0, 0, 0, 1);
        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));

        let dir = ray.direction() / ray.direction().z;
        assert!((dir.y - 1.0).abs() < 1e-5);
    }
}
