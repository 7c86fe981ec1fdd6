//! Mesh geometry as loaded from disk.
//!
//! This is the renderer-agnostic form of a model: vertex positions plus
//! triangle indices. The renderer turns it into triangles with
//! precomputed face normals.

use glint_math::Vec3;

/// Vertex positions and triangle indices.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a new mesh from positions and indices.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Place the model in the world: every position becomes
    /// `position * scale + offset` (per axis).
    pub fn transform(&mut self, scale: Vec3, offset: Vec3) {
        for position in &mut self.positions {
            *position = *position * scale + offset;
        }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    /// Extract triangle vertices as [v0, v1, v2] triplets, in face order.
    ///
    /// Faces referencing a vertex that does not exist are skipped.
    pub fn extract_triangle_vertices(&self) -> Vec<[Vec3; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for chunk in self.indices.chunks_exact(3) {
            let i0 = chunk[0] as usize;
            let i1 = chunk[1] as usize;
            let i2 = chunk[2] as usize;

            match (
                self.positions.get(i0),
                self.positions.get(i1),
                self.positions.get(i2),
            ) {
                (Some(&p0), Some(&p1), Some(&p2)) => triangles.push([p0, p1, p2]),
                _ => {
                    log::warn!(
                        "Invalid triangle indices: [{}, {}, {}], vertex count: {}",
                        i0,
                        i1,
                        i2,
                        self.positions.len()
                    );
                }
            }
        }

        triangles
    }
}
