//! Wavefront OBJ loading.
//!
//! Only geometry is read: vertex positions and faces. Polygons are
//! triangulated, texture/normal sub-indices and material libraries are
//! ignored. All models in a file are merged into one `MeshData`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use glint_math::Vec3;
use thiserror::Error;

use crate::mesh::MeshData;

/// Errors that can occur while loading an OBJ file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OBJ parse error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No models found in OBJ file")]
    NoModels,
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Load an OBJ file from disk.
pub fn load_obj<P: AsRef<Path>>(path: P) -> LoadResult<MeshData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mesh = load_obj_from_reader(&mut BufReader::new(file))?;
    log::info!(
        "Loaded {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Load OBJ data from any buffered reader.
pub fn load_obj_from_reader<R: BufRead>(reader: &mut R) -> LoadResult<MeshData> {
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| -> tobj::MTLLoadResult {
        Err(tobj::LoadError::OpenFileFailed)
    })?;

    if models.is_empty() {
        return Err(LoadError::NoModels);
    }

    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for model in &models {
        let mesh = &model.mesh;
        let base = positions.len() as u32;

        log::debug!(
            "OBJ model '{}': {} positions, {} indices",
            model.name,
            mesh.positions.len() / 3,
            mesh.indices.len()
        );

        positions.extend(mesh.positions.chunks_exact(3).map(Vec3::from_slice));
        indices.extend(mesh.indices.iter().map(|i| base + i));
    }

    Ok(MeshData::new(positions, indices))
}
