//! Cache for generated sample sets, keyed by viewport dimensions.
//!
//! This module provides a cache that maps a [`ViewportKey`] to a previously
//! generated [`SampleSet`], so a backdrop rebuilt for an unchanged viewport
//! reuses its point field instead of resampling.
//!
//! Typical usage:
//! - Look up or generate a set with [`SampleCache::get_or_generate`] by
//!   passing a sampling strategy and the current extent.
//! - Reuse the cache across rebuilds; entries for the same key are
//!   overwritten by the latest write.
use std::collections::HashMap;

use rand::RngCore;

use crate::error::{Error, Result};
use crate::extent::Extent;
use crate::sampling::{FieldSampling, SampleSet};

/// Exact-equality cache key over observed viewport dimensions.
///
/// Only the first two extent axes participate: a set generated at one depth
/// is returned for any other depth with the same width and height. Dimension
/// drift of any kind, however small, is a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportKey {
    width_bits: u32,
    height_bits: u32,
}

impl ViewportKey {
    /// Creates a key from observed width and height.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width_bits: width.to_bits(),
            height_bits: height.to_bits(),
        }
    }

    /// Creates a key from the width and height of an extent, ignoring depth.
    pub fn for_extent(extent: &Extent) -> Self {
        Self::new(extent.width, extent.height)
    }

    /// The width this key was built from.
    pub fn width(&self) -> f32 {
        f32::from_bits(self.width_bits)
    }

    /// The height this key was built from.
    pub fn height(&self) -> f32 {
        f32::from_bits(self.height_bits)
    }
}

/// Cache of generated sample sets, keyed by [`ViewportKey`].
///
/// Shared mutable state with last-writer-wins discipline; callers that
/// introduce concurrent writers must wrap it in a mutex.
pub struct SampleCache {
    entries: HashMap<ViewportKey, SampleSet>,
}

impl SampleCache {
    /// Creates a new, empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Gets a reference to the cached set for `key`, if it exists.
    pub fn get(&self, key: ViewportKey) -> Option<&SampleSet> {
        self.entries.get(&key)
    }

    /// Inserts a set under `key`, overwriting any previous entry.
    pub fn put(&mut self, key: ViewportKey, set: SampleSet) {
        self.entries.insert(key, set);
    }

    /// Removes the entry for `key`, returning it if it existed.
    pub fn remove(&mut self, key: ViewportKey) -> Option<SampleSet> {
        self.entries.remove(&key)
    }

    /// Clears all entries from the cache.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the sample set for the extent's viewport key, generating and
    /// caching it on a miss. A miss is a normal path, not an error.
    pub fn get_or_generate<'a>(
        &'a mut self,
        sampler: &dyn FieldSampling,
        extent: &Extent,
        rng: &mut dyn RngCore,
    ) -> Result<&'a SampleSet> {
        let key = ViewportKey::for_extent(extent);

        if !self.entries.contains_key(&key) {
            let set = sampler.generate(extent, rng)?;
            self.put(key, set);
        }

        match self.entries.get(&key) {
            Some(set) => Ok(set),
            None => Err(Error::Other("entry missing after insert".to_string())),
        }
    }
}

impl Default for SampleCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::PoissonDiskSampling;

    #[test]
    fn get_on_empty_cache_misses() {
        let cache = SampleCache::new();
        assert!(cache.get(ViewportKey::new(800.0, 600.0)).is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let mut cache = SampleCache::new();
        let extent = Extent::new(800.0, 600.0, 100.0);
        let set = SampleSet::new(vec![], 2.0, extent);

        cache.put(ViewportKey::for_extent(&extent), set.clone());
        assert_eq!(cache.get(ViewportKey::new(800.0, 600.0)), Some(&set));
    }

    #[test]
    fn key_ignores_depth_axis() {
        let mut cache = SampleCache::new();
        let sampler = PoissonDiskSampling::new(100.0);

        let mut rng = StdRng::seed_from_u64(1);
        let first = cache
            .get_or_generate(&sampler, &Extent::new(800.0, 600.0, 100.0), &mut rng)
            .expect("generate")
            .clone();

        // Same width and height at a different depth hits the cached entry.
        let mut other_rng = StdRng::seed_from_u64(999);
        let second = cache
            .get_or_generate(&sampler, &Extent::new(800.0, 600.0, 50.0), &mut other_rng)
            .expect("lookup");

        assert_eq!(*second, first);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn dimension_drift_is_a_miss() {
        let mut cache = SampleCache::new();
        let sampler = PoissonDiskSampling::new(100.0);
        let mut rng = StdRng::seed_from_u64(1);

        cache
            .get_or_generate(&sampler, &Extent::new(800.0, 600.0, 100.0), &mut rng)
            .unwrap();
        cache
            .get_or_generate(&sampler, &Extent::new(800.5, 600.0, 100.0), &mut rng)
            .unwrap();

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn last_write_overwrites() {
        let mut cache = SampleCache::new();
        let extent = Extent::new(400.0, 300.0, 50.0);
        let key = ViewportKey::for_extent(&extent);

        cache.put(key, SampleSet::new(vec![], 1.0, extent));
        cache.put(key, SampleSet::new(vec![], 2.0, extent));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(key).map(|s| s.min_distance), Some(2.0));
    }

    #[test]
    fn generation_failure_caches_nothing() {
        let mut cache = SampleCache::new();
        let sampler = PoissonDiskSampling::new(0.0);
        let mut rng = StdRng::seed_from_u64(1);

        let result = cache.get_or_generate(&sampler, &Extent::new(800.0, 600.0, 100.0), &mut rng);
        assert!(result.is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_removes_all_entries() {
        let mut cache = SampleCache::new();
        let extent = Extent::new(400.0, 300.0, 50.0);
        cache.put(
            ViewportKey::for_extent(&extent),
            SampleSet::new(vec![], 1.0, extent),
        );

        cache.clear();
        assert!(cache.is_empty());
    }
}
