//! Random sampling for ray tracing.
//!
//! Every routine takes the generator explicitly so callers control seeding.
//! The renderer hands each pixel its own stream, which keeps parallel renders
//! reproducible.

use glam::DVec3;
use rand::Rng;

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64<R: Rng>(rng: &mut R) -> f64 {
    rng.random()
}

/// Generate a random f64 in [min, max)
pub fn random_f64_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * random_f64(rng)
}

/// Generate a random DVec3 with components in [0.0, 1.0).
pub fn random_vec3<R: Rng>(rng: &mut R) -> DVec3 {
    DVec3::new(rng.random(), rng.random(), rng.random())
}

/// Generate a random DVec3 with components in [min, max).
pub fn random_vec3_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> DVec3 {
    DVec3::splat(min) + DVec3::splat(max - min) * random_vec3(rng)
}

/// Uniform point in the cube [-1, 1)^3.
pub fn random_in_unit_cube<R: Rng>(rng: &mut R) -> DVec3 {
    random_vec3_range(rng, -1.0, 1.0)
}

/// Uniform point strictly inside the unit sphere.
///
/// Rejection sampled from the unit cube: redraw while |p|^2 >= 1.
pub fn random_in_unit_sphere<R: Rng>(rng: &mut R) -> DVec3 {
    loop {
        let p = random_in_unit_cube(rng);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Random unit vector, uniformly distributed on the unit sphere.
///
/// Normalizes a point from [`random_in_unit_sphere`]. Points too close to the
/// origin to normalize reliably are redrawn.
pub fn random_unit_vector<R: Rng>(rng: &mut R) -> DVec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        if p.length_squared() > 1e-160 {
            return unit_vector(p);
        }
    }
}

/// Normalize vector to unit length.
///
/// The input must not be (close to) zero; there is no meaningful direction to
/// return in that case.
pub fn unit_vector(v: DVec3) -> DVec3 {
    debug_assert!(v.length_squared() > 0.0, "normalizing a zero-length vector");
    v / v.length()
}
