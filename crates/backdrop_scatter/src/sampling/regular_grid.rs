//! Perturbed-lattice position sampling strategy.
use glam::Vec3;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::random::{exponential_jitter_magnitude, uniform_random_direction};
use crate::sampling::{FieldSampling, SampleSet};

/// Regular lattice sampling with optional perturbation.
///
/// Lays out points at integer multiples of `spacing` along each axis and
/// jitters each one by a random direction scaled by an exponentially
/// distributed magnitude. Unlike Poisson disk output, the perturbed lattice
/// carries no minimum-separation guarantee.
#[derive(Debug, Clone)]
pub struct RegularGridSampling {
    /// Distance between lattice points in world units.
    pub spacing: f32,
    /// Perturbation strength; 0 leaves the lattice unperturbed.
    pub perturbation: f32,
}

impl RegularGridSampling {
    /// Create a new RegularGridSampling with the given spacing and
    /// perturbation strength.
    pub fn new(spacing: f32, perturbation: f32) -> Self {
        Self {
            spacing,
            perturbation,
        }
    }
}

impl FieldSampling for RegularGridSampling {
    /// Generates the perturbed lattice for `extent`.
    ///
    /// Points are produced in a fixed order: the z axis outermost, then y,
    /// then x innermost. Callers may rely on that ordering.
    fn generate(&self, extent: &Extent, rng: &mut dyn RngCore) -> Result<SampleSet> {
        extent.validate()?;
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(Error::InvalidParameter("spacing must be > 0".into()));
        }

        let steps = |axis: f32| (axis.abs() / self.spacing).floor() as usize;
        let steps_x = steps(extent.width);
        let steps_y = steps(extent.height);
        let steps_z = steps(extent.depth);

        let mut points = Vec::with_capacity(steps_x * steps_y * steps_z);

        for k in 0..steps_z {
            for j in 0..steps_y {
                for i in 0..steps_x {
                    let base = Vec3::new(i as f32, j as f32, k as f32) * self.spacing;
                    let jitter = uniform_random_direction(rng)?
                        * exponential_jitter_magnitude(self.perturbation, rng);
                    points.push(base + jitter);
                }
            }
        }

        Ok(SampleSet::new(points, self.spacing, *extent))
    }
}
