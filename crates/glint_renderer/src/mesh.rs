//! Triangle mesh primitive.
//!
//! A mesh is tested in two phases: a slab test against its bounding box,
//! then a linear scan over every triangle keeping the closest hit.

use crate::hittable::{HitRecord, Hittable};
use crate::triangle::Triangle;
use glint_core::{Material, MeshData};
use glint_math::{Aabb, Interval, Ray, Vec3};

/// Bounds are grown by this fraction of the mesh's largest coordinate
/// (plus the same absolute amount), so rays grazing an edge or corner are
/// never culled by rounding in the slab test.
const BOUNDS_MARGIN: f32 = 1e-4;

/// A collection of flat-shaded triangles sharing one material.
#[derive(Debug, Clone)]
pub struct Mesh {
    triangles: Vec<Triangle>,
    material: Material,
    /// Bounds of every vertex, `None` for an empty or unbounded mesh
    bbox: Option<Aabb>,
}

impl Mesh {
    /// Build a mesh from loaded geometry.
    pub fn from_data(data: &MeshData, material: Material) -> Self {
        let mut builder = MeshBuilder::new(material);
        builder.extend_from_data(data);
        builder.build()
    }

    /// Drop the bounding box so every ray scans all triangles.
    ///
    /// Results are identical, only slower.
    pub fn without_bounds(mut self) -> Self {
        self.bbox = None;
        self
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        self.bbox
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

impl Hittable for Mesh {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        if let Some(bbox) = &self.bbox {
            if !bbox.hit(ray, ray_t) {
                return None;
            }
        }

        let mut closest_t = ray_t.max;
        let mut hit_normal = None;

        for tri in &self.triangles {
            if let Some(hit) = tri.intersect(ray) {
                if ray_t.with_max(closest_t).surrounds(hit.t) {
                    closest_t = hit.t;
                    hit_normal = Some(tri.normal);
                }
            }
        }

        hit_normal.map(|normal| HitRecord::new(ray, closest_t, normal, self.material))
    }
}

/// Collects triangles, then computes the bounding box once in `build`.
#[derive(Debug, Clone)]
pub struct MeshBuilder {
    triangles: Vec<Triangle>,
    material: Material,
}

impl MeshBuilder {
    pub fn new(material: Material) -> Self {
        Self {
            triangles: Vec::new(),
            material,
        }
    }

    /// Append a triangle given counter-clockwise vertices.
    pub fn push_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3) -> &mut Self {
        self.push(Triangle::new(v0, v1, v2))
    }

    pub fn push(&mut self, triangle: Triangle) -> &mut Self {
        self.triangles.push(triangle);
        self
    }

    /// Append every face of loaded geometry.
    pub fn extend_from_data(&mut self, data: &MeshData) -> &mut Self {
        self.triangles.extend(
            data.extract_triangle_vertices()
                .into_iter()
                .map(Triangle::from_vertices),
        );
        self
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Finish the mesh, folding min/max over every vertex for its bounds.
    pub fn build(self) -> Mesh {
        let vertices = self.triangles.iter().flat_map(Triangle::vertices);
        let bbox = Aabb::from_vertices(vertices).map(|bbox| {
            let extent = bbox.min().abs().max(bbox.max().abs()).max_element();
            bbox.padded(BOUNDS_MARGIN * (1.0 + extent))
        });

        match &bbox {
            Some(bbox) => log::debug!(
                "Built mesh: {} triangles, bounds min={:?} max={:?}",
                self.triangles.len(),
                bbox.min(),
                bbox.max()
            ),
            None => log::debug!("Built empty mesh"),
        }

        Mesh {
            triangles: self.triangles,
            material: self.material,
            bbox,
        }
    }
}
