#![forbid(unsafe_code)]
//! backdrop_scatter: blue-noise point fields and adaptive fixed-FOV framing
//! for decorative 3D backdrops.
//!
//! Modules:
//! - random: injectable random primitives (unit directions, jitter magnitudes)
//! - sampling: point-set generation (perturbed lattice, Poisson disk)
//! - cache: viewport-keyed reuse of generated sample sets
//! - viewport, camera: measured view planes and backdrop cameras
//!
//! For examples and docs, see README and docs.rs.
pub mod cache;
pub mod camera;
pub mod error;
pub mod extent;
pub mod random;
pub mod sampling;
pub mod viewport;

/// Convenient re-exports for common types. Import with `use backdrop_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::cache::{SampleCache, ViewportKey};
    pub use crate::camera::fixed_distance::FixedDistanceCamera;
    pub use crate::camera::fixed_fov::FixedFovCamera;
    pub use crate::camera::{BackdropCamera, CameraFrame};
    pub use crate::error::{Error, Result};
    pub use crate::extent::Extent;
    pub use crate::random::{
        exponential_jitter_magnitude, random_int_inclusive, uniform_random_direction,
    };
    pub use crate::sampling::{
        FieldSampling, PoissonDiskSampling, RegularGridSampling, SampleSet,
    };
    pub use crate::viewport::{FixedViewport, Orientation, SharedViewport, ViewportProvider};
}
