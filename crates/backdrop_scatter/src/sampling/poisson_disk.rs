//! Poisson disk position sampling strategy.
use glam::Vec3;
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::random::{rand01, random_int_inclusive, uniform_random_direction};
use crate::sampling::{next_down, FieldSampling, SampleSet};

/// Poisson disk sampling strategy.
///
/// Produces a greedy maximal point set in which no two points are closer than
/// `min_distance`, via dart throwing against a background grid. Saturation is
/// not an error: a sparse or single-point result is a valid outcome.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    /// Minimum distance between samples in world units.
    pub min_distance: f32,
    /// Outer radius of the candidate annulus around each active point.
    pub max_distance: f32,
    /// Candidate attempts per active point before it is retired.
    pub max_tries: u32,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with the specified minimum distance.
    ///
    /// Defaults: `max_distance` is twice the minimum, `max_tries` is 30.
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            max_distance: min_distance * 2.0,
            max_tries: 30,
        }
    }

    /// Sets the outer candidate radius.
    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Sets the number of candidate attempts per active point.
    pub fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }
}

impl FieldSampling for PoissonDiskSampling {
    fn generate(&self, extent: &Extent, rng: &mut dyn RngCore) -> Result<SampleSet> {
        extent.validate()?;
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(Error::InvalidParameter("min_distance must be > 0".into()));
        }
        if !self.max_distance.is_finite() || self.max_distance < self.min_distance {
            return Err(Error::InvalidParameter(
                "max_distance must be >= min_distance".into(),
            ));
        }

        let mut sampler = PoissonDiskSampler::new(self, extent.as_vec3());
        let points = sampler.fill(rng)?;
        debug!(count = points.len(), "generated poisson disk sample set");

        Ok(SampleSet::new(points, self.min_distance, *extent))
    }
}

struct PoissonDiskSampler {
    min_distance_squared: f32,
    min_distance: f32,
    max_distance: f32,
    max_tries: u32,
    cell_size: f32,
    grid_width: usize,
    grid_height: usize,
    grid_depth: usize,
    cells: Vec<Vec<usize>>,
    points: Vec<Vec3>,
    active: Vec<usize>,
    bounds: Vec3,
}

impl PoissonDiskSampler {
    fn new(config: &PoissonDiskSampling, bounds: Vec3) -> Self {
        debug_assert!(config.min_distance > 0.0);
        // Cell size equals the separation radius, so any conflicting
        // neighbor lies in the surrounding 3x3x3 block.
        let cell_size = config.min_distance;
        let grid_width = (bounds.x / cell_size).ceil() as usize + 1;
        let grid_height = (bounds.y / cell_size).ceil() as usize + 1;
        let grid_depth = (bounds.z / cell_size).ceil() as usize + 1;

        Self {
            min_distance_squared: config.min_distance * config.min_distance,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            max_tries: config.max_tries,
            cell_size,
            grid_width,
            grid_height,
            grid_depth,
            cells: vec![Vec::new(); grid_width * grid_height * grid_depth],
            points: Vec::new(),
            active: Vec::new(),
            bounds,
        }
    }

    #[inline]
    fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.grid_height + y) * self.grid_width + x
    }

    #[inline]
    fn point_to_cell(&self, point: Vec3) -> (usize, usize, usize) {
        let x = ((point.x / self.cell_size).floor() as isize)
            .clamp(0, self.grid_width as isize - 1) as usize;
        let y = ((point.y / self.cell_size).floor() as isize)
            .clamp(0, self.grid_height as isize - 1) as usize;
        let z = ((point.z / self.cell_size).floor() as isize)
            .clamp(0, self.grid_depth as isize - 1) as usize;
        (x, y, z)
    }

    fn is_valid_point(&self, point: Vec3) -> bool {
        if point.x < 0.0
            || point.x >= self.bounds.x
            || point.y < 0.0
            || point.y >= self.bounds.y
            || point.z < 0.0
            || point.z >= self.bounds.z
        {
            return false;
        }

        let (gx, gy, gz) = self.point_to_cell(point);
        let start_x = gx.saturating_sub(1);
        let end_x = (gx + 2).min(self.grid_width);
        let start_y = gy.saturating_sub(1);
        let end_y = (gy + 2).min(self.grid_height);
        let start_z = gz.saturating_sub(1);
        let end_z = (gz + 2).min(self.grid_depth);

        for z in start_z..end_z {
            for y in start_y..end_y {
                for x in start_x..end_x {
                    let idx = self.cell_index(x, y, z);
                    for &existing in &self.cells[idx] {
                        let delta = point - self.points[existing];
                        if delta.length_squared() < self.min_distance_squared {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }

    fn add_point(&mut self, point: Vec3) {
        let index = self.points.len();
        let (gx, gy, gz) = self.point_to_cell(point);
        let cell = self.cell_index(gx, gy, gz);
        self.points.push(point);
        self.cells[cell].push(index);
        self.active.push(index);
    }

    fn generate_around_point(&self, rng: &mut dyn RngCore, point: Vec3) -> Result<Option<Vec3>> {
        for _ in 0..self.max_tries {
            let direction = uniform_random_direction(rng)?;
            let distance =
                self.min_distance + rand01(rng) * (self.max_distance - self.min_distance);
            let candidate = point + direction * distance;

            if self.is_valid_point(candidate) {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    fn fill(&mut self, rng: &mut dyn RngCore) -> Result<Vec<Vec3>> {
        let seed = Vec3::new(
            (rand01(rng) * self.bounds.x).clamp(0.0, next_down(self.bounds.x)),
            (rand01(rng) * self.bounds.y).clamp(0.0, next_down(self.bounds.y)),
            (rand01(rng) * self.bounds.z).clamp(0.0, next_down(self.bounds.z)),
        );
        self.add_point(seed);

        while !self.active.is_empty() {
            let slot =
                random_int_inclusive(0, self.active.len() as i64 - 1, rng) as usize;
            let center = self.points[self.active[slot]];

            match self.generate_around_point(rng, center)? {
                Some(candidate) => self.add_point(candidate),
                None => {
                    self.active.swap_remove(slot);
                }
            }
        }

        Ok(std::mem::take(&mut self.points))
    }
}
