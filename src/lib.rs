//! SpherePath path tracer
//!
//! A CPU Monte Carlo path tracer for scenes made of spheres. Rays are bounced
//! off diffuse, metallic and dielectric surfaces and lit by a procedural sky.
//! Rendering is parallel over scanlines and deterministic for a given seed.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ray;
pub mod sphere;
pub mod hittable;
pub mod interval;
pub mod camera;
pub mod random;
pub mod material;
pub mod render;
pub mod scene;
pub mod output;
pub mod error;

pub use error::RenderError;
