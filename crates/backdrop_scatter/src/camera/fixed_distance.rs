//! Backdrop camera at a constant distance from the view plane.
use std::f64::consts::PI;

use glam::{DMat4, DQuat, DVec3};

use crate::camera::{BackdropCamera, CameraFrame};
use crate::error::{Error, Result};
use crate::viewport::ViewportProvider;

/// Perspective camera fixed at a given distance from the view plane.
///
/// The field of view is derived once from the viewport height and the
/// distance, and never recomputed. The camera centers itself on the view
/// plane, and the far clip is measured from the plane: the stored value is
/// `distance + far`.
pub struct FixedDistanceCamera {
    frame: CameraFrame,
}

impl FixedDistanceCamera {
    /// Create a camera at `distance` from the view plane described by the
    /// viewport's current dimensions.
    pub fn new(
        viewport: &dyn ViewportProvider,
        distance: f64,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(Error::InvalidParameter("distance must be > 0".into()));
        }
        if !near.is_finite() || !far.is_finite() || near <= 0.0 || far <= 0.0 {
            return Err(Error::InvalidParameter(
                "clip distances must be > 0".into(),
            ));
        }
        let (vw, vh) = viewport.dimensions();
        if vw <= 0.0 || vh <= 0.0 {
            return Err(Error::InvalidParameter(
                "viewport dimensions must be > 0".into(),
            ));
        }

        let fov_degrees = ((vh / 2.0).atan2(distance) * 2.0).to_degrees();
        let aspect = vw / vh;

        let mut camera = Self {
            frame: CameraFrame {
                position: DVec3::new(vw / 2.0, vh / 2.0, -distance),
                rotation: DQuat::from_rotation_x(PI),
                distance,
                focus: distance,
                near,
                far: distance + far,
                fov_degrees,
                aspect,
                projection: DMat4::IDENTITY,
            },
        };
        camera.update_projection();

        Ok(camera)
    }
}

impl BackdropCamera for FixedDistanceCamera {
    /// No-op: both distance and field of view are fixed at construction.
    fn recalculate(&mut self) {}

    fn distance(&mut self) -> f64 {
        self.frame.distance
    }

    fn update_projection(&mut self) {
        self.frame.projection = DMat4::perspective_rh(
            self.frame.fov_degrees.to_radians(),
            self.frame.aspect,
            self.frame.near,
            self.frame.far,
        );
    }

    fn frame(&self) -> &CameraFrame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::FixedViewport;

    #[test]
    fn fov_is_derived_from_height_and_distance() {
        let viewport = FixedViewport::new(800.0, 600.0);
        let camera = FixedDistanceCamera::new(&viewport, 1000.0, 0.1, 2000.0).unwrap();

        let expected = ((300.0_f64).atan2(1000.0) * 2.0).to_degrees();
        assert!((camera.frame().fov_degrees - expected).abs() < 1e-12);
    }

    #[test]
    fn camera_centers_on_the_view_plane() {
        let viewport = FixedViewport::new(800.0, 600.0);
        let camera = FixedDistanceCamera::new(&viewport, 500.0, 0.1, 2000.0).unwrap();

        assert_eq!(camera.frame().position, DVec3::new(400.0, 300.0, -500.0));
    }

    #[test]
    fn far_clip_is_measured_from_the_view_plane() {
        let viewport = FixedViewport::new(800.0, 600.0);
        let camera = FixedDistanceCamera::new(&viewport, 500.0, 0.1, 2000.0).unwrap();

        assert_eq!(camera.frame().far, 2500.0);
    }

    #[test]
    fn recalculate_never_changes_the_frame() {
        let viewport = FixedViewport::new(800.0, 600.0);
        let mut camera = FixedDistanceCamera::new(&viewport, 500.0, 0.1, 2000.0).unwrap();

        let before = camera.frame().clone();
        camera.recalculate();
        assert_eq!(*camera.frame(), before);
        assert_eq!(camera.distance(), 500.0);
    }

    #[test]
    fn construction_rejects_bad_parameters() {
        let viewport = FixedViewport::new(800.0, 600.0);

        assert!(FixedDistanceCamera::new(&viewport, 0.0, 0.1, 100.0).is_err());
        assert!(FixedDistanceCamera::new(&viewport, 500.0, 0.0, 100.0).is_err());
        assert!(FixedDistanceCamera::new(&viewport, 500.0, 0.1, 0.0).is_err());

        let degenerate = FixedViewport::new(800.0, 0.0);
        assert!(FixedDistanceCamera::new(&degenerate, 500.0, 0.1, 100.0).is_err());
    }
}
