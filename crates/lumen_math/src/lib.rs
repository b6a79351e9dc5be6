// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// Color type alias (linear RGB, nominally 0-1 but unbounded above).
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_color_is_componentwise() {
        let material = Color::new(1.0, 0.5, 0.0);
        let light = Color::new(0.5, 0.5, 0.5);
        assert_eq!(material * light, Color::new(0.5, 0.25, 0.0));
    }
}
