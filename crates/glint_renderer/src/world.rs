//! Turning a scene description into renderable primitives.

use std::path::Path;

use glint_core::{load_obj, MeshDesc, SceneDescription};

use crate::{HittableList, Mesh, MeshBuilder};

/// Build the world from a scene description.
///
/// Relative mesh paths resolve against `base_dir`. A mesh that fails to
/// load is logged and contributes an empty mesh, so the rest of the scene
/// still renders.
pub fn build_world(desc: &SceneDescription, base_dir: &Path) -> HittableList {
    let mut world = HittableList::new();

    for sphere in &desc.spheres {
        world.add_sphere(sphere.center, sphere.radius, sphere.material.resolve());
    }

    for mesh in &desc.meshes {
        world.add_mesh(load_mesh(mesh, base_dir));
    }

    log::info!(
        "World ready: {} spheres, {} meshes",
        desc.spheres.len(),
        desc.meshes.len()
    );
    world
}

fn load_mesh(desc: &MeshDesc, base_dir: &Path) -> Mesh {
    let material = desc.material.resolve();
    let path = if desc.path.is_relative() {
        base_dir.join(&desc.path)
    } else {
        desc.path.clone()
    };

    match load_obj(&path) {
        Ok(mut data) => {
            data.transform(desc.scale, desc.offset);
            Mesh::from_data(&data, material)
        }
        Err(err) => {
            log::warn!("Skipping mesh {}: {}", path.display(), err);
            MeshBuilder::new(material).build()
        }
    }
}
