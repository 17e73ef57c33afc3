use std::collections::HashMap;
use std::sync::Arc;

use crate::algorithm::MixedRadix;
use crate::common::FftNum;
use crate::Fft;

/// The FFT planner creates new FFT plans and caches them per length.
///
/// Each plan computes both transform directions, so there is one cache entry per length, not
/// one per length and direction. Plans are returned behind an `Arc`, so cloning them out of
/// the cache is cheap and the plans can be moved across threads.
pub struct FftPlanner<T: FftNum> {
    algorithm_cache: HashMap<usize, Arc<MixedRadix<T>>>,
}

impl<T: FftNum> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            algorithm_cache: HashMap::new(),
        }
    }

    /// Returns a plan for computing FFTs of size `len`, in either direction.
    ///
    /// If `plan_fft` was already called with this length, the cached plan instance is
    /// returned instead of building a new one.
    pub fn plan_fft(&mut self, len: usize) -> Arc<dyn Fft<T>> {
        if let Some(instance) = self.algorithm_cache.get(&len) {
            return Arc::clone(instance) as Arc<dyn Fft<T>>;
        }

        let instance = Arc::new(MixedRadix::new(len));
        self.algorithm_cache.insert(len, Arc::clone(&instance));
        instance
    }
}
