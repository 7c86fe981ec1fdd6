//! Triangle geometry for meshes.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use glint_math::{Ray, Vec3};

/// Determinant threshold below which a ray counts as parallel to the
/// triangle, and the minimum accepted hit distance.
pub const TRIANGLE_EPSILON: f32 = 1e-4;

/// A triangle with a pre-computed face normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices, counter-clockwise when seen from the front
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Unit face normal from the winding
    pub normal: Vec3,
}

/// Where a ray crosses a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance along the ray
    pub t: f32,
    /// Barycentric weight of v1
    pub u: f32,
    /// Barycentric weight of v2
    pub v: f32,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();

        Self { v0, v1, v2, normal }
    }

    pub fn from_vertices([v0, v1, v2]: [Vec3; 3]) -> Self {
        Self::new(v0, v1, v2)
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// Only distances above `TRIANGLE_EPSILON` count; the caller applies
    /// its own parameter window on top.
    pub fn intersect(&self, ray: &Ray) -> Option<TriangleHit> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let p = ray.direction().cross(edge2);
        let det = edge1.dot(p);

        // Ray is parallel to triangle
        if det.abs() < TRIANGLE_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let t_vec = ray.origin() - self.v0;
        let u = t_vec.dot(p) * inv_det;

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = t_vec.cross(edge1);
        let v = ray.direction().dot(q) * inv_det;

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(q) * inv_det;
        if t > TRIANGLE_EPSILON {
            Some(TriangleHit { t, u, v })
        } else {
            None
        }
    }
}
