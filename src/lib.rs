//! `mixedfft` computes complex FFTs of any size, including prime-number sizes, in O(n log n)
//! time for smooth sizes and O(n²) worst case, using the classical mixed-radix
//! Cooley–Tukey decomposition.
//!
//! The transform length is factored into small radices once, ahead of time, along with a
//! trigonometric table keyed to that factorization. The resulting plan is immutable and can be
//! shared across threads and reused for any number of transforms of that length, in either
//! direction.
//!
//! ### Usage
//!
//! The recommended way to use mixedfft is to create a [`FftPlanner`] instance and call its
//! `plan_fft` method. Plans are cached per length, so planning the same size twice is cheap.
//!
//! ```
//! use mixedfft::{Fft, FftDirection, FftPlanner, num_complex::Complex};
//!
//! let mut planner = FftPlanner::new();
//! let fft = planner.plan_fft(123);
//!
//! let mut buffer = vec![Complex{ re: 0.0f32, im: 0.0f32 }; 123];
//! fft.process(FftDirection::Forward, &mut buffer);
//! ```
//!
//! The planner hands out instances of [`algorithm::MixedRadix`]. If you'd rather skip the
//! planner, that type can be constructed directly for a given length.
//!
//! ### Normalization
//!
//! mixedfft does not normalize outputs. Callers must manually normalize the results by scaling
//! each element by `1/len()` or `1/sqrt(len())`. A forward transform followed by an inverse
//! transform multiplies every element of the input by `len()`.

use std::fmt::Display;

use num_complex::Complex;
use num_traits::Zero;

pub mod algorithm;
mod array_utils;
mod common;
mod math_utils;
mod plan;
mod twiddles;

#[cfg(test)]
mod test_utils;

pub use crate::common::FftNum;
pub use crate::plan::FftPlanner;

// re-export the num-complex crate, so that callers don't have to name the exact version we
// depend on to build our buffer types
pub use num_complex;

/// A transform direction: a forward FFT (analysis) or an inverse FFT (synthesis)
///
/// Unlike the plan types, which are direction-neutral, every processing call takes a
/// direction. A single precomputed plan serves both directions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FftDirection {
    Forward,
    Inverse,
}
impl FftDirection {
    /// Returns the opposite direction of `self`.
    pub fn opposite_direction(&self) -> FftDirection {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}
impl Display for FftDirection {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match self {
            Self::Forward => write!(f, "Forward"),
            Self::Inverse => write!(f, "Inverse"),
        }
    }
}

/// A trait that allows FFT algorithms to report their expected input/output size
pub trait Length {
    /// The FFT size that this algorithm can process
    fn len(&self) -> usize;
}

/// Trait for algorithms that compute FFTs.
///
/// The transforms are unnormalized: a forward transform followed by an inverse transform of
/// the same buffer multiplies every element by the transform length.
pub trait Fft<T: FftNum>: Length + Sync + Send {
    /// Computes a FFT in place, in the given direction.
    ///
    /// Uses the provided `scratch` buffer as scratch space, so the contents of `scratch`
    /// should be considered garbage after calling.
    ///
    /// # Panics
    ///
    /// This method panics if `buffer.len() != self.len()`, or if
    /// `scratch.len() < self.scratch_len()`.
    fn process_with_scratch(
        &self,
        direction: FftDirection,
        buffer: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    );

    /// Returns the size of the scratch buffer required by `process_with_scratch`
    fn scratch_len(&self) -> usize;

    /// Computes a FFT in place, in the given direction.
    ///
    /// This method allocates a scratch buffer internally on every call. To re-use that
    /// allocation across calls, use `process_with_scratch` instead.
    ///
    /// # Panics
    ///
    /// This method panics if `buffer.len() != self.len()`.
    fn process(&self, direction: FftDirection, buffer: &mut [Complex<T>]) {
        let mut scratch = vec![Complex::zero(); self.scratch_len()];
        self.process_with_scratch(direction, buffer, &mut scratch);
    }
}
