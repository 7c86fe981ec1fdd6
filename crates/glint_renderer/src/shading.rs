//! Blinn-Phong shading with hard shadows from a single point light.

use crate::{HitRecord, Hittable};
use glint_core::{Color, LightSettings};
use glint_math::{Interval, Ray, Vec3};

/// Shadow rays start this far from the surface to avoid hitting it again.
pub const SHADOW_EPSILON: f32 = 0.001;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
}

impl PointLight {
    /// A white light at `position`.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            color: Color::ONE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl From<&LightSettings> for PointLight {
    fn from(settings: &LightSettings) -> Self {
        Self::new(settings.position).with_color(settings.color)
    }
}

/// The three Blinn-Phong contributions at a surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingTerms {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
}

impl ShadingTerms {
    /// Sum of all terms, channel by channel and unclamped.
    pub fn total(&self) -> Color {
        self.ambient + self.diffuse + self.specular
    }
}

/// Returns true if anything in `world` lies between `p` and the light.
pub fn in_shadow(world: &dyn Hittable, p: Vec3, light: &PointLight) -> bool {
    let to_light = light.position - p;
    let distance = to_light.length();

    let shadow_ray = Ray::new(p, to_light / distance);
    world
        .hit(&shadow_ray, Interval::new(SHADOW_EPSILON, distance))
        .is_some()
}

/// Evaluate each Blinn-Phong term for a hit.
///
/// A light sitting exactly on the hit point has no direction, so only the
/// ambient term is returned in that case.
pub fn shading_terms(
    rec: &HitRecord,
    world: &dyn Hittable,
    light: &PointLight,
    camera_position: Vec3,
) -> ShadingTerms {
    let material = &rec.material;
    let mut terms = ShadingTerms {
        ambient: material.ambient,
        diffuse: Color::ZERO,
        specular: Color::ZERO,
    };

    let to_light = light.position - rec.p;
    if to_light.length_squared() == 0.0 {
        return terms;
    }

    if in_shadow(world, rec.p, light) {
        return terms;
    }

    let n = rec.normal.normalize();
    let l = to_light.normalize();

    let diffuse_factor = n.dot(l).max(0.0);
    terms.diffuse = material.diffuse * diffuse_factor * light.color;

    if diffuse_factor > 0.0 {
        let v = (camera_position - rec.p).normalize_or_zero();
        let h = (l + v).normalize_or_zero();

        let specular_factor = h.dot(n).max(0.0).powf(material.shininess);
        terms.specular = material.specular * specular_factor * light.color;
    }

    terms
}

/// Color of a hit point: ambient + diffuse + specular.
pub fn shade(
    rec: &HitRecord,
    world: &dyn Hittable,
    light: &PointLight,
    camera_position: Vec3,
) -> Color {
    shading_terms(rec, world, light, camera_position).total()
}
