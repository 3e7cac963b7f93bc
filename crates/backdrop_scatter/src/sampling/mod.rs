//! Point-set generation over a rectangular 3D volume.
//!
//! This module defines the sampling trait and concrete strategies used to
//! scatter backdrop shapes: a perturbed lattice and a Poisson disk sampler.
use glam::Vec3;
use mint::Vector3;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extent::Extent;

pub mod poisson_disk;
pub mod regular_grid;

pub use poisson_disk::PoissonDiskSampling;
pub use regular_grid::RegularGridSampling;

/// Trait for point-set generation over an [`Extent`].
pub trait FieldSampling: Send + Sync {
    fn generate(&self, extent: &Extent, rng: &mut dyn RngCore) -> Result<SampleSet>;
}

/// An ordered sequence of points together with the separation parameter and
/// the extent they were generated for.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleSet {
    /// Generated points, in generation order.
    pub points: Vec<Vec3>,
    /// Separation parameter the set was generated with: the minimum pairwise
    /// distance for Poisson output, the lattice spacing for grid output.
    pub min_distance: f32,
    /// Extent the points were generated for.
    pub extent: Extent,
}

impl SampleSet {
    /// Creates a new sample set.
    pub fn new(points: Vec<Vec3>, min_distance: f32, extent: Extent) -> Self {
        Self {
            points,
            min_distance,
            extent,
        }
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Vec3> {
        self.points.iter()
    }

    /// The points converted to interop vectors.
    pub fn to_mint(&self) -> Vec<Vector3<f32>> {
        self.points.iter().copied().map(Into::into).collect()
    }
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, useful for
/// ensuring bounds are strictly inside a domain. Handles edge cases
/// safely including very small positive values and zero.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_reports_len_and_order() {
        let extent = Extent::new(4.0, 4.0, 4.0);
        let points = vec![Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)];
        let set = SampleSet::new(points.clone(), 1.0, extent);

        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), points);
    }

    #[test]
    fn sample_set_converts_to_mint() {
        let set = SampleSet::new(
            vec![Vec3::new(1.0, 2.0, 3.0)],
            1.0,
            Extent::new(4.0, 4.0, 4.0),
        );
        let mint = set.to_mint();
        assert_eq!(mint.len(), 1);
        assert_eq!(mint[0].x, 1.0);
        assert_eq!(mint[0].z, 3.0);
    }

    #[test]
    fn next_down_handles_edge_cases() {
        assert!(next_down(1.0) < 1.0);
        assert!(next_down(0.5) < 0.5);

        let down_min_pos = next_down(f32::MIN_POSITIVE);
        assert!(down_min_pos >= 0.0);
        assert!(down_min_pos < f32::MIN_POSITIVE);

        assert_eq!(next_down(0.0), -f32::MIN_POSITIVE);
        assert!(next_down(-1.0) < -1.0);

        assert_eq!(next_down(f32::INFINITY), f32::MAX);
        assert_eq!(next_down(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(next_down(f32::NAN).is_nan());
    }
}
