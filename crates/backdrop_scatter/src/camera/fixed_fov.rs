//! Backdrop camera that keeps a constant angular field of view.
use std::f64::consts::PI;
use std::sync::Arc;

use glam::{DMat4, DQuat, DVec3};

use crate::camera::{BackdropCamera, CameraFrame};
use crate::error::{Error, Result};
use crate::viewport::ViewportProvider;

/// Perspective camera that adjusts its distance from the view plane so the
/// plane always subtends the same vertical angle.
///
/// Resizing the viewport changes the computed distance, not the apparent
/// angular size of the backdrop.
pub struct FixedFovCamera {
    viewport: Arc<dyn ViewportProvider>,
    frame: CameraFrame,
}

impl FixedFovCamera {
    /// Create a camera for the given viewport, field of view (degrees), and
    /// clip range. The frame is fully computed before this returns.
    pub fn new(
        viewport: Arc<dyn ViewportProvider>,
        fov_degrees: f64,
        near: f64,
        far: f64,
    ) -> Result<Self> {
        if !fov_degrees.is_finite() || fov_degrees <= 0.0 || fov_degrees >= 180.0 {
            return Err(Error::InvalidParameter(
                "fov_degrees must be in (0, 180)".into(),
            ));
        }
        if !near.is_finite() || !far.is_finite() || near <= 0.0 || far <= near {
            return Err(Error::InvalidParameter(
                "clip range must satisfy 0 < near < far".into(),
            ));
        }
        let (vw, vh) = viewport.dimensions();
        if vw <= 0.0 || vh <= 0.0 {
            return Err(Error::InvalidParameter(
                "viewport dimensions must be > 0".into(),
            ));
        }

        let mut camera = Self {
            viewport,
            frame: CameraFrame {
                position: DVec3::ZERO,
                rotation: DQuat::from_rotation_x(PI),
                distance: 0.0,
                focus: 0.0,
                near,
                far,
                fov_degrees,
                aspect: vw / vh,
                projection: DMat4::IDENTITY,
            },
        };
        camera.update_projection();

        Ok(camera)
    }
}

impl BackdropCamera for FixedFovCamera {
    fn recalculate(&mut self) {
        let vh = self.viewport.height();
        let distance = (vh / 2.0) / (self.frame.fov_degrees.to_radians() / 2.0).tan();

        self.frame.distance = distance;
        self.frame.focus = distance;
        self.frame.position.z = -distance;
    }

    fn distance(&mut self) -> f64 {
        self.recalculate();
        self.frame.distance
    }

    fn update_projection(&mut self) {
        self.recalculate();

        let (vw, vh) = self.viewport.dimensions();
        self.frame.aspect = vw / vh;
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
