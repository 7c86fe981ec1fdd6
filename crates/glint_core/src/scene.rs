//! Scene description for Glint.
//!
//! This is the on-disk (JSON) form of everything a render needs: image
//! size, camera, light, background and the geometry to place. The
//! renderer turns it into a world of hittable primitives.

use std::fs;
use std::path::{Path, PathBuf};

use glint_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::{Color, MaterialPreset, MaterialSpec};

/// Errors that can occur while reading or writing a scene description.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Pale sky blue returned for rays that hit nothing.
pub const SKY_COLOR: Color = Color::new(0.8, 0.9, 1.0);

/// Largest image (in pixels) a scene may request.
pub const MAX_IMAGE_PIXELS: u64 = 1 << 26;

/// Output image dimensions. The height is derived from the aspect ratio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub width: u32,
    pub aspect_ratio: f64,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl ImageSettings {
    /// Image height, never less than one pixel.
    pub fn height(&self) -> u32 {
        ((self.width as f64 / self.aspect_ratio) as u32).max(1)
    }

    /// Check the settings describe a renderable image.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 {
            return Err(invalid("image.width", "must be at least 1"));
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(invalid(
                "image.aspect_ratio",
                format!("must be positive and finite, got {}", self.aspect_ratio),
            ));
        }

        let pixels = u64::from(self.width) * u64::from(self.height());
        if pixels > MAX_IMAGE_PIXELS {
            return Err(invalid(
                "image",
                format!(
                    "{}x{} exceeds {} pixels",
                    self.width,
                    self.height(),
                    MAX_IMAGE_PIXELS
                ),
            ));
        }
        Ok(())
    }
}

/// Pinhole camera placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
}

impl CameraSettings {
    /// Check the camera has a well-defined view basis.
    pub fn validate(&self) -> ConfigResult<()> {
        let finite = self.look_from.is_finite()
            && self.look_at.is_finite()
            && self.up.is_finite()
            && self.vfov.is_finite();
        if !finite {
            return Err(invalid("camera", "all values must be finite"));
        }

        let view = self.look_from - self.look_at;
        if view.length_squared() == 0.0 {
            return Err(invalid("camera", "look_from and look_at are the same point"));
        }
        if self.up.cross(view).length_squared() == 0.0 {
            return Err(invalid("camera.up", "must not be parallel to the view direction"));
        }
        if self.vfov <= 0.0 || self.vfov >= 180.0 {
            return Err(invalid(
                "camera.vfov",
                format!("must be between 0 and 180 degrees, got {}", self.vfov),
            ));
        }
        Ok(())
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            look_from: Vec3::new(0.0, 1.2, 2.0),
            look_at: Vec3::new(0.0, 1.2, 1.0),
            up: Vec3::Y,
            vfov: 90.0,
        }
    }
}

/// A single point light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    pub position: Vec3,
    pub color: Color,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 5.0, 0.0),
            color: Color::ONE,
        }
    }
}

/// An analytic sphere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: Vec3,
    pub radius: f32,
    #[serde(default)]
    pub material: MaterialSpec,
}

/// A triangle mesh loaded from an OBJ file and placed with
/// `position * scale + offset`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshDesc {
    /// OBJ path, relative paths resolve against the scene file's directory
    pub path: PathBuf,
    #[serde(default)]
    pub material: MaterialSpec,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    #[serde(default)]
    pub offset: Vec3,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

/// Everything needed to render one image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub image: ImageSettings,
    pub camera: CameraSettings,
    pub light: LightSettings,
    pub background: Color,
    pub spheres: Vec<SphereDesc>,
    pub meshes: Vec<MeshDesc>,
}

impl Default for SceneDescription {
    /// Default settings and no geometry.
    fn default() -> Self {
        Self {
            image: ImageSettings::default(),
            camera: CameraSettings::default(),
            light: LightSettings::default(),
            background: SKY_COLOR,
            spheres: Vec::new(),
            meshes: Vec::new(),
        }
    }
}

impl SceneDescription {
    /// Red sphere over a large yellow ground sphere, with a bunny and a
    /// teapot lit from the upper right.
    pub fn showcase() -> Self {
        Self {
            spheres: vec![
                SphereDesc {
                    center: Vec3::new(-1.0, 1.4, -2.0),
                    radius: 0.8,
                    material: MaterialPreset::Red.into(),
                },
                SphereDesc {
                    center: Vec3::new(0.0, -100.5, -1.0),
                    radius: 100.0,
                    material: MaterialPreset::Yellow.into(),
                },
            ],
            meshes: vec![
                MeshDesc {
                    path: PathBuf::from("bunny.obj"),
                    material: MaterialPreset::Green.into(),
                    scale: Vec3::new(2.5, 1.1, 2.5),
                    offset: Vec3::new(-1.0, -0.7, -1.5),
                },
                MeshDesc {
                    path: PathBuf::from("teapot.obj"),
                    material: MaterialPreset::Green.into(),
                    scale: Vec3::splat(0.5),
                    offset: Vec3::new(1.5, -0.5, -2.0),
                },
            ],
            ..Default::default()
        }
    }

    /// Parse and validate a scene description from JSON text.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let scene: Self = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Reject settings the renderer cannot turn into an image.
    pub fn validate(&self) -> ConfigResult<()> {
        self.image.validate()?;
        self.camera.validate()
    }

    /// Read a scene description from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let scene = Self::from_json(&text)?;
        log::info!(
            "Loaded scene {}: {} spheres, {} meshes",
            path.as_ref().display(),
            scene.spheres.len(),
            scene.meshes.len()
        );
        Ok(scene)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the description to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    #[test]
    fn test_default_image_height() {
        let image = ImageSettings::default();
        assert_eq!(image.height(), 576);
    }

    #[test]
    fn test_image_height_is_at_least_one() {
        let image = ImageSettings {
            width: 1,
            aspect_ratio: 16.0 / 9.0,
        };
        assert_eq!(image.height(), 1);
    }

    #[test]
    fn test_default_scene_is_empty() {
        let scene = SceneDescription::default();
        assert!(scene.spheres.is_empty());
        assert!(scene.meshes.is_empty());
        assert_eq!(scene.background, SKY_COLOR);
    }

    #[test]
    fn test_showcase_scene_layout() {
        let scene = SceneDescription::showcase();

        assert_eq!(scene.background, SKY_COLOR);
        assert_eq!(scene.spheres.len(), 2);
        assert_eq!(scene.spheres[0].material.resolve(), Material::red());
        assert_eq!(scene.meshes.len(), 2);
        assert_eq!(scene.meshes[1].scale, Vec3::splat(0.5));
        assert_eq!(scene.camera.look_from, Vec3::new(0.0, 1.2, 2.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "image": { "width": 64 },
            "spheres": [
                { "center": [0.0, 0.0, -1.0], "radius": 0.5, "material": "red" }
            ]
        }"#;
        let scene = SceneDescription::from_json(json).unwrap();

        assert_eq!(scene.image.width, 64);
        assert!((scene.image.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.spheres[0].material.resolve(), Material::red());
        assert!(scene.meshes.is_empty());
        assert_eq!(scene.light, LightSettings::default());
    }

    #[test]
    fn test_mesh_desc_defaults() {
        let json = r#"{ "meshes": [ { "path": "model.obj" } ] }"#;
        let scene = SceneDescription::from_json(json).unwrap();
        let mesh = &scene.meshes[0];

        assert_eq!(mesh.scale, Vec3::ONE);
        assert_eq!(mesh.offset, Vec3::ZERO);
        assert_eq!(mesh.material.resolve(), Material::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("glint_scene_save_and_load.json");
        let mut scene = SceneDescription::showcase();
        scene.image.width = 32;
        scene.meshes.clear();

        scene.save(&path).unwrap();
        let loaded = SceneDescription::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.image.width, 32);
        assert_eq!(loaded.spheres.len(), 2);
        assert!(loaded.meshes.is_empty());
    }

    #[test]
    fn test_defaults_and_showcase_validate() {
        assert!(SceneDescription::default().validate().is_ok());
        assert!(SceneDescription::showcase().validate().is_ok());
    }

    #[test]
    fn test_bad_aspect_ratio_is_rejected() {
        for aspect in ["0.0", "-1.5"] {
            let json = format!(r#"{{ "image": {{ "width": 64, "aspect_ratio": {} }} }}"#, aspect);
            let err = SceneDescription::from_json(&json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { field: "image.aspect_ratio", .. }));
        }

        let image = ImageSettings {
            width: 64,
            aspect_ratio: f64::NAN,
        };
        assert!(image.validate().is_err());
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        let image = ImageSettings {
            width: u32::MAX,
            aspect_ratio: 1.0,
        };
        assert!(matches!(
            image.validate(),
            Err(ConfigError::Invalid { field: "image", .. })
        ));

        let zero = ImageSettings {
            width: 0,
            aspect_ratio: 1.0,
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_degenerate_camera_is_rejected() {
        let same_point = CameraSettings {
            look_at: Vec3::new(0.0, 1.2, 2.0),
            ..Default::default()
        };
        assert!(matches!(
            same_point.validate(),
            Err(ConfigError::Invalid { field: "camera", .. })
        ));

        // Looking straight down with +Y up
        let json = r#"{ "camera": { "look_from": [0.0, 5.0, 0.0], "look_at": [0.0, 0.0, 0.0] } }"#;
        let err = SceneDescription::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "camera.up", .. }));

        let wide = CameraSettings {
            vfov: 180.0,
            ..Default::default()
        };
        assert!(wide.validate().is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = SceneDescription::from_json("{ \"spheres\": 3 }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
