//! Render driver.
//!
//! One primary ray per pixel, shaded with Blinn-Phong and a hard shadow.
//! Rays that hit nothing take the background color.

use thiserror::Error;

use crate::shading::{shade, PointLight};
use crate::{Camera, Hittable, Ray};
use glint_core::{Color, SceneDescription, MAX_IMAGE_PIXELS, SKY_COLOR};
use glint_math::{Interval, Vec3};

/// Errors from setting up a render.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("{width}x{height} image exceeds {max} pixels", max = MAX_IMAGE_PIXELS)]
    ImageTooLarge { width: u32, height: u32 },
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Color for rays that hit nothing
    pub background: Color,
    /// The single light of the scene
    pub light: PointLight,
    /// Closest accepted primary hit distance
    pub t_min: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: SKY_COLOR,
            light: PointLight::new(Vec3::new(5.0, 5.0, 0.0)),
            t_min: 0.001,
        }
    }
}

impl RenderConfig {
    /// Lighting and background taken from a scene description.
    pub fn from_description(desc: &SceneDescription) -> Self {
        Self {
            background: desc.background,
            light: PointLight::from(&desc.light),
            ..Default::default()
        }
    }
}

/// Compute the color seen by a ray.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, camera_position: Vec3, config: &RenderConfig) -> Color {
    match world.hit(ray, Interval::new(config.t_min, f32::INFINITY)) {
        Some(rec) => shade(&rec, world, &config.light, camera_position),
        None => config.background,
    }
}

/// Color of pixel (x, y).
pub fn render_pixel(camera: &Camera, world: &dyn Hittable, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.get_ray(x, y);
    ray_color(&ray, world, camera.center(), config)
}

/// Map a [0, 1]-nominal channel to a byte by scaling and truncating.
#[inline]
fn channel_to_u8(x: f32) -> u8 {
    (255.0 * Interval::UNIT.clamp(x)) as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

/// Simple image buffer for storing render output.
///
/// Pixels are row-major, top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    ///
    /// Fails if the pixel count overflows or exceeds `MAX_IMAGE_PIXELS`.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len as u64 <= MAX_IMAGE_PIXELS)
            .ok_or(RenderError::ImageTooLarge { width, height })?;

        Ok(Self {
            width,
            height,
            pixels: vec![Color::ZERO; len],
        })
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)
    }

    /// Get the pixel at (x, y), `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at (x, y). Writes outside the image are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Convert to packed RGB bytes (for saving).
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer, one scanline at a time.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Result<ImageBuffer, RenderError> {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height)?;

    for y in 0..camera.image_height {
        log::trace!("Scanlines remaining: {}", camera.image_height - y);
        for x in 0..camera.image_width {
            let color = render_pixel(camera, world, x, y, config);
            image.set(x, y, color);
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HittableList;
    use glint_core::Material;

    fn single_sphere_scene() -> (Camera, HittableList, RenderConfig) {
        let mut world = HittableList::new();
        world.add_sphere(Vec3::new(0.0, 0.0, -1.0), 0.5, Material::red());

        let mut camera = Camera::new().with_resolution(21, 11);
        camera.initialize();

        let config = RenderConfig {
            light: PointLight::new(Vec3::new(10.0, 0.0, 0.0)),
            ..Default::default()
        };

        (camera, world, config)
    }

    #[test]
    fn test_center_pixel_is_lit_sphere() {
        let (camera, world, config) = single_sphere_scene();
        let color = render_pixel(&camera, &world, 10, 5, &config);

        // Ambient red is 0.1; anything above it is diffuse light
        assert!(color.x > Material::red().ambient.x + 0.01);
        assert!(color.x > color.y && color.x > color.z);
    }

    #[test]
    fn test_off_sphere_pixel_is_background() {
        let (camera, world, config) = single_sphere_scene();

        assert_eq!(render_pixel(&camera, &world, 0, 0, &config), SKY_COLOR);
        assert_eq!(render_pixel(&camera, &world, 20, 10, &config), SKY_COLOR);
    }

    #[test]
    fn test_miss_uses_configured_background() {
        let world = HittableList::new();
        let config = RenderConfig {
            background: Color::new(0.1, 0.2, 0.3),
            ..Default::default()
        };

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(ray_color(&ray, &world, Vec3::ZERO, &config), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_render_fills_every_pixel() {
        let (camera, world, config) = single_sphere_scene();
        let image = render(&camera, &world, &config).unwrap();

        assert_eq!(image.pixels.len(), 21 * 11);
        assert_eq!(image.get(0, 0), Some(SKY_COLOR));
        assert_ne!(image.get(10, 5), Some(SKY_COLOR));
        assert_eq!(image.to_rgb().len(), 21 * 11 * 3);
    }

    #[test]
    fn test_image_buffer_rejects_oversized_images() {
        assert_eq!(
            ImageBuffer::new(u32::MAX, u32::MAX).err(),
            Some(RenderError::ImageTooLarge {
                width: u32::MAX,
                height: u32::MAX,
            })
        );
        assert!(ImageBuffer::new(64, u32::MAX).is_err());
        assert!(ImageBuffer::new(0, 0).unwrap().pixels.is_empty());
    }

    #[test]
    fn test_render_reports_oversized_camera() {
        let (_, world, config) = single_sphere_scene();
        let camera = Camera::new().with_resolution(u32::MAX, 2);

        assert!(render(&camera, &world, &config).is_err());
    }

    #[test]
    fn test_image_buffer_bounds() {
        let mut image = ImageBuffer::new(3, 2).unwrap();
        image.set(2, 1, Color::ONE);
        image.set(3, 0, Color::ONE);
        image.set(0, 2, Color::ONE);

        assert_eq!(image.get(2, 1), Some(Color::ONE));
        assert_eq!(image.get(3, 0), None);
        assert_eq!(image.get(0, 2), None);
        assert_eq!(image.pixels.iter().filter(|&&c| c == Color::ONE).count(), 1);
    }

    #[test]
    fn test_color_to_rgb_clamps_and_truncates() {
        assert_eq!(color_to_rgb(Color::new(0.0, 0.5, 1.0)), [0, 127, 255]);
        assert_eq!(color_to_rgb(Color::new(-1.0, 2.5, 0.999)), [0, 255, 254]);
    }

    #[test]
    fn test_from_description() {
        let desc = SceneDescription::default();
        let config = RenderConfig::from_description(&desc);

        assert_eq!(config.background, SKY_COLOR);
        assert_eq!(config.light.position, Vec3::new(5.0, 5.0, 0.0));
        assert_eq!(config.light.color, Color::ONE);
    }
}
