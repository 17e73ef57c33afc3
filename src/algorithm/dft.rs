use num_complex::Complex;
use num_traits::Zero;

use crate::common::{fft_error_buffer, fft_error_scratch, FftNum};
use crate::twiddles;
use crate::{Fft, FftDirection, Length};

/// Naive O(n²) Discrete Fourier Transform, computed directly from the definition.
///
/// Useless for large sizes, but a convenient correctness reference: the whole test suite
/// cross-checks the mixed-radix plans against it.
pub struct Dft<T> {
    twiddles: Vec<Complex<T>>,
}

impl<T: FftNum> Dft<T> {
    /// Preallocates the forward twiddle factors for transforms of length `len`
    pub fn new(len: usize) -> Self {
        Self {
            twiddles: (0..len)
                .map(|i| twiddles::compute_twiddle(i, len, FftDirection::Forward))
                .collect(),
        }
    }

    fn perform_dft(
        &self,
        direction: FftDirection,
        signal: &[Complex<T>],
        spectrum: &mut [Complex<T>],
    ) {
        for (k, spectrum_bin) in spectrum.iter_mut().enumerate() {
            let mut sum = Complex::zero();
            for (i, &signal_bin) in signal.iter().enumerate() {
                let twiddle = self.twiddles[(k * i) % self.twiddles.len()];
                let twiddle = match direction {
                    FftDirection::Forward => twiddle,
                    FftDirection::Inverse => twiddle.conj(),
                };
                sum = sum + twiddle * signal_bin;
            }
            *spectrum_bin = sum;
        }
    }
}

impl<T: FftNum> Fft<T> for Dft<T> {
    fn process_with_scratch(
        &self,
        direction: FftDirection,
        buffer: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) {
        let len = self.len();
        if buffer.len() != len {
            fft_error_buffer(len, buffer.len());
        }
        if scratch.len() < self.scratch_len() {
            fft_error_scratch(self.scratch_len(), scratch.len());
        }
        if len < 2 {
            return;
        }

        let scratch = &mut scratch[..len];
        scratch.copy_from_slice(buffer);
        self.perform_dft(direction, scratch, buffer);
    }

    fn scratch_len(&self) -> usize {
        if self.len() < 2 {
            0
        } else {
            self.len()
        }
    }
}
impl<T> Length for Dft<T> {
    fn len(&self) -> usize {
        self.twiddles.len()
    }
}
