//! Pinhole camera: maps image-plane coordinates to world-space rays.

use glam::DVec3;
use log::debug;

use crate::error::RenderError;
use crate::ray::Ray;

/// Where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Point camera is looking from (camera position)
    pub lookfrom: DVec3,
    /// Point camera is looking at (look target)
    pub lookat: DVec3,
    /// Camera-relative "up" direction vector
    pub vup: DVec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            lookfrom: DVec3::ZERO,
            lookat: DVec3::NEG_Z,
            vup: DVec3::Y,
            vfov: 90.0,
        }
    }
}

/// Camera with a precomputed viewport, immutable for the duration of a render.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: DVec3,
    lower_left_corner: DVec3,
    horizontal: DVec3,
    vertical: DVec3,
    /// Camera frame basis vector pointing right
    u: DVec3,
    /// Camera frame basis vector pointing up
    v: DVec3,
    /// Camera frame basis vector pointing opposite view direction
    w: DVec3,
}

impl Camera {
    /// Build the camera basis and viewport.
    ///
    /// Fails if the view direction has zero length, the up vector is parallel
    /// to it, or the field of view or aspect ratio are out of range.
    pub fn new(settings: &CameraSettings, aspect_ratio: f64) -> Result<Self, RenderError> {
        if !(settings.vfov.is_finite() && settings.vfov > 0.0 && settings.vfov < 180.0) {
            return Err(RenderError::InvalidSettings(format!(
                "vertical field of view must be in (0, 180) degrees, got {}",
                settings.vfov
            )));
        }
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "aspect ratio must be positive, got {aspect_ratio}"
            )));
        }

        let theta = settings.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        let w = (settings.lookfrom - settings.lookat)
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera("lookfrom and lookat coincide"))?;
        let u = settings
            .vup
            .cross(w)
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera("up vector is parallel to the view direction"))?;
        let v = w.cross(u);

        let origin = settings.lookfrom;
        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - w;

        debug!("Camera basis u={u} v={v} w={w}, viewport {viewport_width:.3}x{viewport_height:.3}");

        Ok(Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
        })
    }

    /// Ray from the camera origin through viewport point (s, t).
    ///
    /// (0, 0) is the lower left corner of the viewport, (1, 1) the upper right.
    pub fn get_ray(&self, s: f64, t: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }

    /// Camera position
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Orthonormal camera frame (u right, v up, w backward).
    pub fn basis(&self) -> (DVec3, DVec3, DVec3) {
        (self.u, self.v, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_view_matches_reference_viewport() {
        let cam = Camera::new(&CameraSettings::default(), 16.0 / 9.0).unwrap();
        let center = cam.get_ray(0.5, 0.5);
        assert_eq!(center.origin, DVec3::ZERO);
        assert_abs_diff_eq!((center.direction - DVec3::NEG_Z).length(), 0.0, epsilon = 1e-12);

        let corner = cam.get_ray(0.0, 0.0);
        assert_abs_diff_eq!(corner.direction.x, -16.0 / 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(corner.direction.y, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(corner.direction.z, -1.0, epsilon = 1e-12);

        let top_right = cam.get_ray(1.0, 1.0);
        assert_abs_diff_eq!(top_right.direction.x, 16.0 / 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(top_right.direction.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn basis_is_orthonormal() {
        let settings = CameraSettings {
            lookfrom: DVec3::new(-2.0, 2.0, 1.0),
            lookat: DVec3::new(0.0, 0.0, -1.0),
            vup: DVec3::Y,
            vfov: 20.0,
        };
        let cam = Camera::new(&settings, 1.5).unwrap();
        let (u, v, w) = cam.basis();
        for axis in [u, v, w] {
            assert_abs_diff_eq!(axis.length(), 1.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(u.dot(v), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(u.dot(w), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.dot(w), 0.0, epsilon = 1e-9);
        // w points backward, away from the target.
        assert!(w.dot(settings.lookat - settings.lookfrom) < 0.0);
        assert_eq!(cam.origin(), settings.lookfrom);
    }

    #[test]
    fn field_of_view_sets_viewport_height() {
        let settings = CameraSettings {
            vfov: 60.0,
            ..CameraSettings::default()
        };
        let cam = Camera::new(&settings, 1.0).unwrap();
        let top = cam.get_ray(0.5, 1.0).direction;
        assert_abs_diff_eq!(top.y, (30f64).to_radians().tan(), epsilon = 1e-12);
    }

    #[test]
    fn rejects_degenerate_setups() {
        let same_point = CameraSettings {
            lookat: DVec3::ZERO,
            ..CameraSettings::default()
        };
        assert!(matches!(
            Camera::new(&same_point, 1.0),
            Err(RenderError::DegenerateCamera(_))
        ));

        let up_along_view = CameraSettings {
            vup: DVec3::Z,
            ..CameraSettings::default()
        };
        assert!(matches!(
            Camera::new(&up_along_view, 1.0),
            Err(RenderError::DegenerateCamera(_))
        ));

        let wide = CameraSettings {
            vfov: 180.0,
            ..CameraSettings::default()
        };
        assert!(matches!(Camera::new(&wide, 1.0), Err(RenderError::InvalidSettings(_))));
        assert!(matches!(
            Camera::new(&CameraSettings::default(), 0.0),
            Err(RenderError::InvalidSettings(_))
        ));
    }
}
