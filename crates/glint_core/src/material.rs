//! Blinn-Phong surface materials.
//!
//! A material is plain data: three color terms and a shininess exponent.
//! Primitives carry one by value and hit records copy it out.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values nominally 0-1, not clamped)
pub type Color = Vec3;

/// Reflectance parameters for the Blinn-Phong model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Constant term, applied even in shadow
    pub ambient: Color,

    /// Lambertian term, scaled by max(0, N·L)
    pub diffuse: Color,

    /// Highlight term, scaled by max(0, N·H)^shininess
    pub specular: Color,

    /// Specular exponent
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.05),
            diffuse: Color::splat(0.5), // Grey default
            specular: Color::splat(0.5),
            shininess: 32.0,
        }
    }
}

impl Material {
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Highly reflective gold with a tight highlight.
    pub fn gold() -> Self {
        Self::new(
            Color::new(0.05, 0.05, 0.0),
            Color::new(0.8, 0.6, 0.0),
            Color::ONE,
            120.0,
        )
    }

    pub fn red() -> Self {
        Self::new(
            Color::new(0.1, 0.0, 0.0),
            Color::new(0.8, 0.0, 0.0),
            Color::ONE,
            32.0,
        )
    }

    pub fn green() -> Self {
        Self::new(
            Color::new(0.0, 0.1, 0.0),
            Color::new(0.0, 0.8, 0.0),
            Color::ONE,
            50.0,
        )
    }

    pub fn yellow() -> Self {
        Self::new(
            Color::new(0.1, 0.1, 0.0),
            Color::new(0.9, 0.9, 0.2),
            Color::splat(0.8),
            20.0,
        )
    }
}

/// Named material presets, as spelled in scene files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialPreset {
    Gold,
    Red,
    Green,
    Yellow,
}

impl From<MaterialPreset> for Material {
    fn from(preset: MaterialPreset) -> Self {
        match preset {
            MaterialPreset::Gold => Material::gold(),
            MaterialPreset::Red => Material::red(),
            MaterialPreset::Green => Material::green(),
            MaterialPreset::Yellow => Material::yellow(),
        }
    }
}

/// A material as written in a scene file: either `"red"` or a full
/// `{ "ambient": [..], "diffuse": [..], "specular": [..], "shininess": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialSpec {
    Preset(MaterialPreset),
    Custom(Material),
}

impl MaterialSpec {
    /// Resolve to the concrete material.
    pub fn resolve(&self) -> Material {
        match *self {
            MaterialSpec::Preset(preset) => preset.into(),
            MaterialSpec::Custom(material) => material,
        }
    }
}

impl Default for MaterialSpec {
    fn default() -> Self {
        MaterialSpec::Custom(Material::default())
    }
}

impl From<MaterialPreset> for MaterialSpec {
    fn from(preset: MaterialPreset) -> Self {
        MaterialSpec::Preset(preset)
    }
}
