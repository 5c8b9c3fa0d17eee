//! Material system for ray tracing.
//!
//! Implements three material types: Lambertian (diffuse), Metal (specular),
//! and Dielectric (transparent). Materials are immutable once built and are
//! shared between spheres through `Arc`.

use glam::DVec3;
use rand::Rng;

use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;

/// RGB color, one f64 per channel.
pub type Color = DVec3;

/// Material types for ray tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness in [0, 1] (0.0 = mirror).
        fuzz: f64,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f64,
    },
}

/// Outcome of a scattering event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Color multiplier applied to whatever the scattered ray gathers.
    pub attenuation: Color,
    /// Outgoing ray, starting at the hit point.
    pub scattered: Ray,
}

impl Material {
    /// Diffuse material with the given albedo.
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// Metal material. Fuzz is clamped to [0, 1].
    pub fn metal(albedo: Color, fuzz: f64) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Glass-like material with the given index of refraction.
    pub fn dielectric(refraction_index: f64) -> Self {
        Material::Dielectric { refraction_index }
    }

    /// Compute ray scattering for this material.
    ///
    /// Returns `None` when the ray is absorbed.
    pub fn scatter<R: Rng>(&self, r_in: &Ray, rec: &HitRecord<'_>, rng: &mut R) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => Some(scatter_lambertian(albedo, rec, rng)),
            Material::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec, rng),
            Material::Dielectric { refraction_index } => {
                Some(scatter_dielectric(refraction_index, r_in, rec, rng))
            }
        }
    }
}

/// Lambertian diffuse scattering with cosine-weighted distribution.
fn scatter_lambertian<R: Rng>(albedo: Color, rec: &HitRecord<'_>, rng: &mut R) -> Scatter {
    let mut scatter_direction = rec.normal + random::random_unit_vector(rng);

    // Catch degenerate scatter direction
    if scatter_direction.length_squared() < 1e-16 {
        scatter_direction = rec.normal;
    }

    Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, scatter_direction),
    }
}

/// Metallic reflection with optional surface roughness.
fn scatter_metal<R: Rng>(
    albedo: Color,
    fuzz: f64,
    r_in: &Ray,
    rec: &HitRecord<'_>,
    rng: &mut R,
) -> Option<Scatter> {
    let mut direction = reflect(random::unit_vector(r_in.direction), rec.normal);
    if fuzz > 0.0 {
        direction += fuzz * random::random_in_unit_sphere(rng);
    }

    // Fuzzed below the surface: absorbed.
    if direction.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some(Scatter {
        attenuation: albedo,
        scattered: Ray::new(rec.p, direction),
    })
}

/// Dielectric scattering, choosing reflection or refraction per call.
fn scatter_dielectric<R: Rng>(
    refraction_index: f64,
    r_in: &Ray,
    rec: &HitRecord<'_>,
    rng: &mut R,
) -> Scatter {
    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = random::unit_vector(r_in.direction);
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;

    let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f64(rng) {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    Scatter {
        attenuation: Color::ONE,
        scattered: Ray::new(rec.p, direction),
    }
}

/// Mirror `v` about the surface normal `n`.
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit vector `uv` through a surface with normal `n` (Snell's law).
///
/// `etai_over_etat` is the ratio of refractive indices, incident over transmitted.
pub fn refract(uv: DVec3, n: DVec3, etai_over_etat: f64) -> DVec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Fresnel reflectance using Schlick's approximation.
pub fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
