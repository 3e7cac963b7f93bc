//! Axis-aligned sampling volumes.
use glam::Vec3;
use mint::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Origin-anchored box of three positive magnitudes describing the region
/// over which points are sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extent {
    /// Size along the x axis in world units.
    pub width: f32,
    /// Size along the y axis in world units.
    pub height: f32,
    /// Size along the z axis in world units.
    pub depth: f32,
}

impl Extent {
    /// Create a new extent from three axis magnitudes.
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Validates the extent, returning an error if any axis is missing a
    /// positive finite magnitude.
    pub fn validate(&self) -> Result<()> {
        let finite = self.width.is_finite() && self.height.is_finite() && self.depth.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 || self.depth <= 0.0 {
            return Err(Error::InvalidParameter(
                "extent must be > 0 in all three components".into(),
            ));
        }

        Ok(())
    }

    /// True when `point` lies inside the extent, with exclusive upper bounds.
    pub fn contains(&self, point: Vec3) -> bool {
        (0.0..self.width).contains(&point.x)
            && (0.0..self.height).contains(&point.y)
            && (0.0..self.depth).contains(&point.z)
    }

    /// The extent as a vector of its axis magnitudes.
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

impl From<Vec3> for Extent {
    fn from(value: Vec3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Vector3<f32>> for Extent {
    fn from(value: Vector3<f32>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Extent> for Vec3 {
    fn from(value: Extent) -> Self {
        value.as_vec3()
    }
}
