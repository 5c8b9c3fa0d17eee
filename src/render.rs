//! Path integrator and the per-pixel sampling loop.
//!
//! `ray_colour` follows one path through the scene; `Renderer` fires many
//! jittered camera rays per pixel, averages them, gamma corrects and quantizes
//! the result into an 8-bit image. Scanlines are rendered in parallel and every
//! pixel draws from its own generator stream, so output depends only on the seed.

use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::RenderError;
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::material::Color;
use crate::random;
use crate::ray::Ray;

/// Smallest ray parameter accepted for a hit, keeps bounced rays from
/// re-hitting the surface they start on.
pub const SHADOW_ACNE_EPSILON: f64 = 0.001;

/// Image and sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Width over height; the image height is derived from it
    pub aspect_ratio: f64,
    /// Number of random samples for each pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces
    pub max_depth: u32,
    /// Seed for every random stream used by the render
    pub seed: u64,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            show_progress: true,
        }
    }
}

impl RenderSettings {
    /// Image height derived from width and aspect ratio, at least one pixel.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f64 / self.aspect_ratio) as u32).max(1)
    }

    /// Check that the settings describe a renderable image.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.image_width == 0 {
            return Err(RenderError::InvalidSettings("image width must be at least 1".into()));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSettings(
                "samples per pixel must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Radiance carried back along `r`.
///
/// Bounces at most `depth` times; a path that runs out of bounces or is
/// absorbed contributes black. Rays that escape pick up the sky gradient.
pub fn ray_colour<R: Rng>(r: &Ray, world: &dyn Hittable, depth: u32, rng: &mut R) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    if let Some(rec) = world.hit(r, Interval::from_min(SHADOW_ACNE_EPSILON)) {
        return match rec.material.scatter(r, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_colour(&scatter.scattered, world, depth - 1, rng)
            }
            None => Color::ZERO,
        };
    }

    sky_colour(r)
}

/// Vertical white to sky-blue gradient, the only light in the scene.
pub fn sky_colour(r: &Ray) -> Color {
    let unit_direction = random::unit_vector(r.direction);
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::ONE + a * Color::new(0.5, 0.7, 1.0)
}

/// Gamma 2 transform, applied per channel.
pub fn linear_to_gamma(colour: Color) -> Color {
    let c = colour.max(Color::ZERO);
    Color::new(c.x.sqrt(), c.y.sqrt(), c.z.sqrt())
}

/// Quantize an averaged linear color into an 8-bit pixel.
pub fn to_rgb8(colour: Color) -> Rgb<u8> {
    let intensity = Interval::new(0.0, 0.999);
    let c = linear_to_gamma(colour);
    Rgb([
        (256.0 * intensity.clamp(c.x)) as u8,
        (256.0 * intensity.clamp(c.y)) as u8,
        (256.0 * intensity.clamp(c.z)) as u8,
    ])
}

/// Renders one scene through one camera.
pub struct Renderer<'a> {
    settings: RenderSettings,
    camera: Camera,
    world: &'a dyn Hittable,
    image_height: u32,
}

impl<'a> Renderer<'a> {
    /// Bind settings, camera and scene together.
    pub fn new(
        settings: RenderSettings,
        camera: Camera,
        world: &'a dyn Hittable,
    ) -> Result<Self, RenderError> {
        settings.validate()?;
        Ok(Self {
            image_height: settings.image_height(),
            settings,
            camera,
            world,
        })
    }

    /// Output image width
    pub fn width(&self) -> u32 {
        self.settings.image_width
    }

    /// Output image height
    pub fn height(&self) -> u32 {
        self.image_height
    }

    /// Generator for the pixel at column `x`, row `y` (row 0 at the top).
    fn pixel_rng(&self, x: u32, y: u32) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.settings.seed);
        rng.set_stream(y as u64 * self.settings.image_width as u64 + x as u64);
        rng
    }

    /// Average linear color of the pixel at column `x`, row `y` (row 0 at the top).
    ///
    /// A dimension of a single pixel spans the whole viewport along that axis.
    pub fn sample_pixel(&self, x: u32, y: u32) -> Color {
        let mut rng = self.pixel_rng(x, y);
        let j = self.image_height - 1 - y;
        let u_span = (self.settings.image_width - 1).max(1) as f64;
        let v_span = (self.image_height - 1).max(1) as f64;

        let mut pixel_colour = Color::ZERO;
        for _ in 0..self.settings.samples_per_pixel {
            let s = (x as f64 + random::random_f64(&mut rng)) / u_span;
            let t = (j as f64 + random::random_f64(&mut rng)) / v_span;
            let r = self.camera.get_ray(s, t);
            pixel_colour += ray_colour(&r, self.world, self.settings.max_depth, &mut rng);
        }

        pixel_colour / self.settings.samples_per_pixel as f64
    }

    /// Render the full image, rows top to bottom.
    pub fn render(&self) -> RgbImage {
        let width = self.settings.image_width;
        let height = self.image_height;
        let mut image = RgbImage::new(width, height);

        info!(
            "Rendering {}x{} at {} samples per pixel, max depth {}, seed {}, on {} threads",
            width,
            height,
            self.settings.samples_per_pixel,
            self.settings.max_depth,
            self.settings.seed,
            rayon::current_num_threads()
        );
        let generation_start = std::time::Instant::now();

        let pb = if self.settings.show_progress {
            ProgressBar::new(height as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} scanlines ETA: {eta}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        image
            .par_chunks_mut(3 * width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                    let colour = self.sample_pixel(x as u32, y as u32);
                    pixel.copy_from_slice(&to_rgb8(colour).0);
                }
                pb.inc(1);
            });

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::DVec3;

    use super::*;
    use crate::camera::CameraSettings;
    use crate::hittable::HittableList;
    use crate::material::Material;
    use crate::sphere::Sphere;
    use approx::assert_abs_diff_eq;

    fn quiet(settings: RenderSettings) -> RenderSettings {
        RenderSettings {
            show_progress: false,
            ..settings
        }
    }

    fn single_sphere(material: Material) -> HittableList {
        let mut world = HittableList::new();
        world.add(Sphere::new(DVec3::new(0.0, 0.0, -1.0), 0.5, Arc::new(material)));
        world
    }

    #[test]
    fn zero_depth_is_black() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let world = single_sphere(Material::lambertian(Color::ONE));
        let empty = HittableList::new();
        for dir in [DVec3::NEG_Z, DVec3::Y, DVec3::new(0.3, -0.2, 1.0)] {
            let r = Ray::new(DVec3::ZERO, dir);
            assert_eq!(ray_colour(&r, &world, 0, &mut rng), Color::ZERO);
            assert_eq!(ray_colour(&r, &empty, 0, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn miss_returns_sky_gradient() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let empty = HittableList::new();
        let up = ray_colour(&Ray::new(DVec3::ZERO, DVec3::Y), &empty, 5, &mut rng);
        let down = ray_colour(&Ray::new(DVec3::ZERO, DVec3::NEG_Y), &empty, 5, &mut rng);
        let level = ray_colour(&Ray::new(DVec3::ZERO, DVec3::X), &empty, 5, &mut rng);
        assert_eq!(up, Color::new(0.5, 0.7, 1.0));
        assert_eq!(down, Color::ONE);
        assert_abs_diff_eq!((level - Color::new(0.75, 0.85, 1.0)).length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn absorbed_ray_is_black() {
        // Grazing hit on a fully fuzzy metal: some fuzzed reflections dip
        // below the surface and are absorbed, the rest escape to the sky.
        let world = single_sphere(Material::metal(Color::ONE, 1.0));
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let r = Ray::new(DVec3::new(-1.0, 0.4999, -1.0), DVec3::X);
        let blacks = (0..500)
            .filter(|_| ray_colour(&r, &world, 5, &mut rng) == Color::ZERO)
            .count();
        assert!(blacks > 0 && blacks < 500);
    }

    #[test]
    fn one_bounce_budget_ends_on_surface() {
        // With one bounce left the scattered ray is never traced.
        let world = single_sphere(Material::lambertian(Color::splat(0.5)));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let r = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        assert_eq!(ray_colour(&r, &world, 1, &mut rng), Color::ZERO);
    }

    #[test]
    fn mirror_tints_reflected_sky() {
        let world = single_sphere(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Straight back at the camera, then into the sky behind it.
        let r = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        let c = ray_colour(&r, &world, 2, &mut rng);
        let sky = sky_colour(&Ray::new(DVec3::ZERO, DVec3::Z));
        assert_abs_diff_eq!((c - Color::new(0.8, 0.6, 0.2) * sky).length(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn quantization_applies_gamma_and_clamps() {
        assert_eq!(to_rgb8(Color::ZERO), Rgb([0, 0, 0]));
        assert_eq!(to_rgb8(Color::new(0.25, 1.0, 4.0)), Rgb([128, 255, 255]));
        assert_eq!(to_rgb8(Color::splat(-1.0)), Rgb([0, 0, 0]));
    }

    #[test]
    fn height_follows_aspect_ratio() {
        let s = RenderSettings::default();
        assert_eq!(s.image_height(), 225);
        let tall = RenderSettings { image_width: 1, aspect_ratio: 16.0 / 9.0, ..s };
        assert_eq!(tall.image_height(), 1);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let camera = Camera::new(&CameraSettings::default(), 1.0).unwrap();
        let world = HittableList::new();
        let zero_width = RenderSettings { image_width: 0, ..RenderSettings::default() };
        let zero_samples = RenderSettings { samples_per_pixel: 0, ..RenderSettings::default() };
        let bad_aspect = RenderSettings { aspect_ratio: f64::NAN, ..RenderSettings::default() };
        for s in [zero_width, zero_samples, bad_aspect] {
            assert!(matches!(
                Renderer::new(s, camera, &world),
                Err(RenderError::InvalidSettings(_))
            ));
        }
    }

    #[test]
    fn empty_scene_renders_the_sky() {
        let settings = quiet(RenderSettings {
            image_width: 8,
            aspect_ratio: 2.0,
            samples_per_pixel: 4,
            ..RenderSettings::default()
        });
        let camera = Camera::new(&CameraSettings::default(), settings.aspect_ratio).unwrap();
        let world = HittableList::new();
        let renderer = Renderer::new(settings, camera, &world).unwrap();
        let image = renderer.render();

        assert_eq!(image.dimensions(), (8, 4));
        // Top rows look up into the bluer part of the gradient.
        let top = image.get_pixel(4, 0);
        let bottom = image.get_pixel(4, 3);
        assert!(top[0] < bottom[0]);
        assert_eq!(top[2], 255);
        assert_eq!(bottom[2], 255);
    }

    #[test]
    fn pixel_streams_do_not_depend_on_render_order() {
        let settings = quiet(RenderSettings {
            image_width: 6,
            aspect_ratio: 1.5,
            samples_per_pixel: 3,
            seed: 42,
            ..RenderSettings::default()
        });
        let camera = Camera::new(&CameraSettings::default(), settings.aspect_ratio).unwrap();
        let world = single_sphere(Material::dielectric(1.5));
        let renderer = Renderer::new(settings, camera, &world).unwrap();
        let image = renderer.render();
        for y in (0..renderer.height()).rev() {
            for x in (0..renderer.width()).rev() {
                assert_eq!(*image.get_pixel(x, y), to_rgb8(renderer.sample_pixel(x, y)));
            }
        }
    }
}
