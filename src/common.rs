use std::fmt::Debug;

use num_traits::{FromPrimitive, Signed};

/// Generic floating point number, implemented for f32 and f64
pub trait FftNum: Copy + FromPrimitive + Signed + Sync + Send + Debug + 'static {}
impl<T> FftNum for T where T: Copy + FromPrimitive + Signed + Sync + Send + Debug + 'static {}

// Calling the panics directly from the validation branches bloats the callers with formatting
// code, so they live here behind cold, uninlined functions.
#[cold]
#[inline(never)]
pub fn fft_error_buffer(expected: usize, actual: usize) -> ! {
    panic!(
        "Provided FFT buffer has the wrong length. Expected len = {}, got len = {}",
        expected, actual
    );
}

#[cold]
#[inline(never)]
pub fn fft_error_scratch(expected: usize, actual: usize) -> ! {
    panic!(
        "Provided scratch buffer is too small. Expected len >= {}, got len = {}",
        expected, actual
    );
}
