//! Glint Renderer - CPU Ray Casting
//!
//! Casts one primary ray per pixel into a scene of spheres and triangle
//! meshes, and shades the closest hit with Blinn-Phong lighting and a hard
//! shadow from a single point light.

mod camera;
mod hittable;
mod mesh;
mod output;
mod renderer;
mod shading;
mod sphere;
mod triangle;
mod world;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList, Primitive};
pub use mesh::{Mesh, MeshBuilder};
pub use output::{save_image, save_png, save_ppm, write_ppm, OutputError, OutputResult};
pub use renderer::{
    color_to_rgb, ray_color, render, render_pixel, ImageBuffer, RenderConfig, RenderError,
};
pub use shading::{in_shadow, shade, shading_terms, PointLight, ShadingTerms, SHADOW_EPSILON};
pub use sphere::Sphere;
pub use triangle::{Triangle, TriangleHit, TRIANGLE_EPSILON};
pub use world::build_world;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Aabb, Interval, Ray, Vec3};
