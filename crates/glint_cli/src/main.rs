use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::SceneDescription;
use glint_renderer::{build_world, render, save_image, Camera, RenderConfig};

mod cli;

use cli::Args;

/// Load the scene named on the command line, or fall back to the showcase
/// scene. Returns the description and the directory meshes resolve against.
fn load_scene(path: Option<&Path>) -> Result<(SceneDescription, PathBuf)> {
    match path {
        Some(path) => {
            let desc = SceneDescription::load(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            let base_dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Ok((desc, base_dir))
        }
        None => {
            log::info!("No scene given, rendering the showcase scene");
            Ok((SceneDescription::showcase(), PathBuf::from(".")))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    if let Some(path) = &args.write_default_scene {
        SceneDescription::showcase()
            .save(path)
            .with_context(|| format!("Failed to write scene {}", path.display()))?;
        log::info!("Wrote showcase scene to {}", path.display());
        return Ok(());
    }

    let (mut desc, base_dir) = load_scene(args.scene.as_deref())?;
    if let Some(width) = args.width {
        desc.image.width = width;
    }
    desc.validate().context("Invalid render settings")?;

    let world = build_world(&desc, &base_dir);
    let camera = Camera::from_settings(&desc.camera, &desc.image);
    let config = RenderConfig::from_description(&desc);

    log::info!(
        "Rendering {}x{} ({} objects)",
        camera.image_width,
        camera.image_height,
        world.len()
    );
    let start = Instant::now();
    let image = render(&camera, &world, &config).context("Failed to start render")?;
    log::info!("Render finished in {:.2?}", start.elapsed());

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
