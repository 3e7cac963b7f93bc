//! Backdrop cameras that frame the scattered point field.
//!
//! Two variants share one capability: [`FixedFovCamera`] adapts its distance
//! to keep a constant angular field of view as the viewport changes, while
//! [`FixedDistanceCamera`] sits at a constant distance and derives its field
//! of view once at construction.
use glam::{DMat4, DQuat, DVec3};

pub mod fixed_distance;
pub mod fixed_fov;

pub use fixed_distance::FixedDistanceCamera;
pub use fixed_fov::FixedFovCamera;

/// Derived framing state, owned by the camera that computed it.
///
/// Consumers read the frame; only the owning camera's recalculation step
/// mutates it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    /// Camera position; the view axis runs along negative z.
    pub position: DVec3,
    /// Camera rotation; the view is flipped about the x axis to face the
    /// backdrop plane.
    pub rotation: DQuat,
    /// Distance from camera to the view plane.
    pub distance: f64,
    /// Focus distance; tracks `distance`.
    pub focus: f64,
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance.
    pub far: f64,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    /// Width / height ratio of the viewport.
    pub aspect: f64,
    /// Current perspective projection transform.
    pub projection: DMat4,
}

/// Shared capability of backdrop cameras.
///
/// Recalculation must be driven by the caller on every relevant event
/// (resize, scroll, draw); cameras do not subscribe to anything themselves.
pub trait BackdropCamera {
    /// Recompute the frame from the current viewport. Idempotent.
    fn recalculate(&mut self);

    /// Current camera-to-plane distance, recalculated before returning so a
    /// viewport change since the last call is never missed.
    fn distance(&mut self) -> f64;

    /// Recalculate, then rebuild the perspective projection transform. Must
    /// be called after any change to aspect ratio or field of view.
    fn update_projection(&mut self);

    /// The current frame.
    fn frame(&self) -> &CameraFrame;
}
