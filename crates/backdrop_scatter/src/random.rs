//! Random primitives used to jitter and scatter points.
//!
//! All functions draw from an injected [`RngCore`], so callers control
//! seeding and reproducibility.
use glam::Vec3;
use rand::RngCore;

use crate::error::{Error, Result};

/// Retry cap for [`uniform_random_direction`]. Exceeding it is practically
/// unreachable with any non-constant random source.
pub const MAX_DIRECTION_ATTEMPTS: usize = 10_000;

/// Vectors shorter than this are rejected before normalization.
const MIN_DIRECTION_LENGTH: f32 = 0.001;

/// Generate a random float in the range [0, 1].
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Generate a random float in the range [-1, 1].
#[inline]
pub fn signed_unit(rng: &mut dyn RngCore) -> f32 {
    rand01(rng) * 2.0 - 1.0
}

/// Uniformly distributed unit direction.
///
/// Rejection-samples three signed-uniform components and discards draws whose
/// magnitude is below a small threshold, so normalization never divides by a
/// near-zero length. Fails with [`Error::DegenerateSample`] if the retry cap
/// is exhausted.
pub fn uniform_random_direction(rng: &mut dyn RngCore) -> Result<Vec3> {
    for _ in 0..MAX_DIRECTION_ATTEMPTS {
        let v = Vec3::new(signed_unit(rng), signed_unit(rng), signed_unit(rng));
        if v.length() >= MIN_DIRECTION_LENGTH {
            return Ok(v.normalize());
        }
    }

    Err(Error::DegenerateSample {
        attempts: MAX_DIRECTION_ATTEMPTS,
    })
}

/// Exponentially distributed jitter magnitude for a given `lambda`.
///
/// Computes `lambda * exp(-lambda * u)` for a signed-uniform `u` in [-1, 1].
/// This is a deterministic transform of a uniform draw rather than an
/// inverse-CDF exponential sample; the exact shape is relied upon by
/// perturbed-lattice output.
#[inline]
pub fn exponential_jitter_magnitude(lambda: f32, rng: &mut dyn RngCore) -> f32 {
    lambda * (-lambda * signed_unit(rng)).exp()
}

/// Uniform integer in `[min, max]`, both ends inclusive.
pub fn random_int_inclusive(min: i64, max: i64, rng: &mut dyn RngCore) -> i64 {
    debug_assert!(min <= max);
    let span = (max - min + 1) as f64;
    let offset = (f64::from(rand01(rng)) * span).floor() as i64;
    // rand01 can land on exactly 1.0, which would overshoot by one step.
    (min + offset).min(max)
}
