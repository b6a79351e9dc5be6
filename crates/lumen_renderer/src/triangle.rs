//! Triangle primitive for ray tracing.
//!
//! Intersects the supporting plane first, then runs an inside-outside test
//! against each edge.

use crate::hittable::{Hittable, SurfaceHit, PARALLEL_EPSILON};
use lumen_math::{Ray, Vec3};

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (not normalized; length is twice the area)
    face_normal: Vec3,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// Winding is counter-clockwise around the face normal.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let face_normal = (v1 - v0).cross(v2 - v0);
        Self {
            v0,
            v1,
            v2,
            face_normal,
        }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Unit face normal, or zero for a degenerate triangle.
    pub fn normal(&self) -> Vec3 {
        self.face_normal.normalize_or_zero()
    }

    /// True if `p` lies on the inner side of the edge `from -> to`.
    #[inline]
    fn inside_edge(&self, from: Vec3, to: Vec3, p: Vec3) -> bool {
        let c = (to - from).cross(p - from);
        self.face_normal.dot(c) >= 0.0
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let n = self.face_normal;

        // Ray is parallel to the triangle (also rejects degenerate triangles)
        let n_dot_dir = n.dot(ray.direction());
        if n_dot_dir.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.v0 - ray.origin()).dot(n) / n_dot_dir;
        if t < 0.0 {
            return None;
        }

        let p = ray.at(t);
        if !self.inside_edge(self.v0, self.v1, p)
            || !self.inside_edge(self.v1, self.v2, p)
            || !self.inside_edge(self.v2, self.v0, p)
        {
            return None;
        }

        Some(SurfaceHit {
            t,
            position: p,
            normal: n.normalize(),
        })
    }
}
