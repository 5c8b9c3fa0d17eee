//! Programmatically built scenes and their camera presets.

use std::sync::Arc;

use glam::DVec3;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::camera::CameraSettings;
use crate::hittable::HittableList;
use crate::material::{Color, Material};
use crate::random;
use crate::sphere::Sphere;

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePreset {
    /// Ground, a diffuse centre sphere and two metal spheres of different roughness.
    MaterialShowcase,
    /// Diffuse, hollow glass and polished metal spheres seen from above.
    GlassShowcase,
    /// Hundreds of small random spheres around three large ones.
    RandomSpheres,
}

impl ScenePreset {
    /// Build the scene. `seed` only matters for [`ScenePreset::RandomSpheres`].
    pub fn build(self, seed: u64) -> HittableList {
        let world = match self {
            ScenePreset::MaterialShowcase => material_showcase(),
            ScenePreset::GlassShowcase => glass_showcase(),
            ScenePreset::RandomSpheres => random_spheres(seed),
        };
        debug!("Built {:?} with {} spheres", self, world.len());
        world
    }

    /// Camera placement the scene was composed for.
    pub fn camera(self) -> CameraSettings {
        match self {
            ScenePreset::MaterialShowcase => CameraSettings::default(),
            ScenePreset::GlassShowcase => CameraSettings {
                lookfrom: DVec3::new(-2.0, 2.0, 1.0),
                lookat: DVec3::new(0.0, 0.0, -1.0),
                vup: DVec3::Y,
                vfov: 20.0,
            },
            ScenePreset::RandomSpheres => CameraSettings {
                lookfrom: DVec3::new(13.0, 2.0, 3.0),
                lookat: DVec3::ZERO,
                vup: DVec3::Y,
                vfov: 20.0,
            },
        }
    }
}

/// Yellowish ground with one diffuse and two metal spheres in a row.
pub fn material_showcase() -> HittableList {
    let material_ground = Arc::new(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    let material_center = Arc::new(Material::lambertian(Color::new(0.7, 0.3, 0.3)));
    let material_left = Arc::new(Material::metal(Color::new(0.8, 0.8, 0.8), 0.3));
    let material_right = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 1.0));

    let mut world = HittableList::new();
    world.add(Sphere::new(DVec3::new(0.0, -100.5, -1.0), 100.0, material_ground));
    world.add(Sphere::new(DVec3::new(0.0, 0.0, -1.0), 0.5, material_center));
    world.add(Sphere::new(DVec3::new(-1.0, 0.0, -1.0), 0.5, material_left));
    world.add(Sphere::new(DVec3::new(1.0, 0.0, -1.0), 0.5, material_right));
    world
}

/// Like the material showcase, with the left sphere swapped for a glass bubble.
///
/// The bubble is two spheres sharing one material; the inner one has a
/// negative radius so its normals point inward.
pub fn glass_showcase() -> HittableList {
    let material_ground = Arc::new(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    let material_center = Arc::new(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let material_left = Arc::new(Material::dielectric(1.5));
    let material_right = Arc::new(Material::metal(Color::new(0.8, 0.6, 0.2), 0.0));

    let mut world = HittableList::new();
    world.add(Sphere::new(DVec3::new(0.0, -100.5, -1.0), 100.0, material_ground));
    world.add(Sphere::new(DVec3::new(0.0, 0.0, -1.0), 0.5, material_center));
    world.add(Sphere::new(DVec3::new(-1.0, 0.0, -1.0), 0.5, material_left.clone()));
    world.add(Sphere::new(DVec3::new(-1.0, 0.0, -1.0), -0.4, material_left));
    world.add(Sphere::new(DVec3::new(1.0, 0.0, -1.0), 0.5, material_right));
    world
}

/// Grid of small random spheres around three large feature spheres.
pub fn random_spheres(seed: u64) -> HittableList {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut world = HittableList::new();

    let ground_material = Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    world.add(Sphere::new(DVec3::new(0.0, -1000.0, 0.0), 1000.0, ground_material));

    // Every small glass sphere shares this one.
    let glass = Arc::new(Material::dielectric(1.5));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = random::random_f64(&mut rng);
            let center = DVec3::new(
                a as f64 + 0.9 * random::random_f64(&mut rng),
                0.2,
                b as f64 + 0.9 * random::random_f64(&mut rng),
            );

            // Keep clear of the large feature spheres
            if (center - DVec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let sphere_material = if choose_mat < 0.8 {
                let albedo = random::random_vec3(&mut rng) * random::random_vec3(&mut rng);
                Arc::new(Material::lambertian(albedo))
            } else if choose_mat < 0.95 {
                let albedo = random::random_vec3_range(&mut rng, 0.5, 1.0);
                let fuzz = random::random_f64_range(&mut rng, 0.0, 0.5);
                Arc::new(Material::metal(albedo, fuzz))
            } else {
                glass.clone()
            };

            world.add(Sphere::new(center, 0.2, sphere_material));
        }
    }

    world.add(Sphere::new(DVec3::new(0.0, 1.0, 0.0), 1.0, glass));
    world.add(Sphere::new(
        DVec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::lambertian(Color::new(0.4, 0.2, 0.1))),
    ));
    world.add(Sphere::new(
        DVec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0)),
    ));

    world
}
