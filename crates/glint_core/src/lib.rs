//! Glint Core - scene data shared by the renderer and the command line.
//!
//! This crate provides:
//!
//! - **Materials**: Blinn-Phong `Material` values and named presets
//! - **Geometry**: `MeshData` (positions + triangle indices) and OBJ loading
//! - **Scene description**: `SceneDescription`, the JSON render configuration
//!
//! # Example
//!
//! ```ignore
//! use glint_core::obj::load_obj;
//!
//! let mut mesh = load_obj("bunny.obj")?;
//! mesh.transform(Vec3::splat(2.0), Vec3::ZERO);
//! println!("Loaded {} triangles", mesh.triangle_count());
//! ```

pub mod material;
pub mod mesh;
pub mod obj;
pub mod scene;

// Re-export commonly used types
pub use material::{Color, Material, MaterialPreset, MaterialSpec};
pub use mesh::MeshData;
pub use obj::{load_obj, load_obj_from_reader, LoadError, LoadResult};
pub use scene::{
    CameraSettings, ConfigError, ConfigResult, ImageSettings, LightSettings, MeshDesc,
    SceneDescription, SphereDesc, MAX_IMAGE_PIXELS, SKY_COLOR,
};
