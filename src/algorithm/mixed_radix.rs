use num_complex::Complex;

use crate::algorithm::{butterflies, radixn};
use crate::array_utils;
use crate::common::{fft_error_buffer, fft_error_scratch, FftNum};
use crate::math_utils::Factors;
use crate::twiddles;
use crate::{Fft, FftDirection, Length};

/// Mixed-radix FFT plan for one transform length, in both directions.
///
/// `new` factors the length into radices and precomputes the trigonometric table for that
/// factorization; processing then runs one butterfly pass per radix, ping-ponging between the
/// caller's buffer and the scratch buffer. The plan itself is immutable after construction and
/// can be shared freely across threads; each in-flight transform needs its own buffer/scratch
/// pair.
pub struct MixedRadix<T> {
    len: usize,
    factors: Factors,
    twiddles: Box<[T]>,
}

impl<T: FftNum> MixedRadix<T> {
    /// Precomputes a plan for transforms of length `len`
    pub fn new(len: usize) -> Self {
        let factors = Factors::compute(len);
        let twiddles = twiddles::compute_twiddle_table(len, &factors);

        Self {
            len,
            factors,
            twiddles,
        }
    }

    // `buffer` and `scratch` are interleaved reals, 2 * len each. The stage reading the data
    // from one buffer writes into the other; `in_scratch` tracks where the live data is. The
    // specialized passes always leave their result in the destination, the generic pass
    // reports where its result landed.
    fn perform_fft(&self, direction: FftDirection, buffer: &mut [T], scratch: &mut [T]) {
        let n = self.len;
        let sign = match direction {
            FftDirection::Forward => -T::one(),
            FftDirection::Inverse => T::one(),
        };
        let wa = &self.twiddles;

        let mut in_scratch = false;
        let mut l1 = 1;
        let mut iw = 0;
        for &ip in self.factors.radices() {
            let l2 = ip * l1;
            let ido = 2 * (n / l2);
            let idl1 = ido * l1;

            let (src, dst) = if in_scratch {
                (&mut *scratch, &mut *buffer)
            } else {
                (&mut *buffer, &mut *scratch)
            };

            match ip {
                2 => {
                    butterflies::butterfly_2(ido, l1, src, dst, &wa[iw..], sign);
                    in_scratch = !in_scratch;
                }
                3 => {
                    let ix2 = iw + ido;
                    butterflies::butterfly_3(ido, l1, src, dst, &wa[iw..], &wa[ix2..], sign);
                    in_scratch = !in_scratch;
                }
                4 => {
                    let ix2 = iw + ido;
                    let ix3 = ix2 + ido;
                    butterflies::butterfly_4(
                        ido,
                        l1,
                        src,
                        dst,
                        &wa[iw..],
                        &wa[ix2..],
                        &wa[ix3..],
                        sign,
                    );
                    in_scratch = !in_scratch;
                }
                5 => {
                    let ix2 = iw + ido;
                    let ix3 = ix2 + ido;
                    let ix4 = ix3 + ido;
                    butterflies::butterfly_5(
                        ido,
                        l1,
                        src,
                        dst,
                        &wa[iw..],
                        &wa[ix2..],
                        &wa[ix3..],
                        &wa[ix4..],
                        sign,
                    );
                    in_scratch = !in_scratch;
                }
                _ => {
                    if radixn::butterfly_n(ido, ip, l1, idl1, src, dst, &wa[iw..], sign) {
                        in_scratch = !in_scratch;
                    }
                }
            }

            l1 = l2;
            iw += (ip - 1) * ido;
        }

        if in_scratch {
            buffer.copy_from_slice(scratch);
        }
    }
}

impl<T: FftNum> Fft<T> for MixedRadix<T> {
    fn process_with_scratch(
        &self,
        direction: FftDirection,
        buffer: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) {
        if buffer.len() != self.len {
            fft_error_buffer(self.len, buffer.len());
        }
        if scratch.len() < self.scratch_len() {
            fft_error_scratch(self.scratch_len(), scratch.len());
        }
        if self.len < 2 {
            return;
        }

        self.perform_fft(
            direction,
            array_utils::interleaved_mut(buffer),
            array_utils::interleaved_mut(&mut scratch[..self.len]),
        );
    }

    fn scratch_len(&self) -> usize {
        if self.len < 2 {
            0
        } else {
            self.len
        }
    }
}
impl<T> Length for MixedRadix<T> {
    fn len(&self) -> usize {
        self.len
    }
}
