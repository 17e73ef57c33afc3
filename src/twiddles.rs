use num_complex::Complex;

use crate::common::FftNum;
use crate::math_utils::Factors;
use crate::FftDirection;

/// Computes e^(-2πi·index/fft_len) for a forward transform, or its conjugate for an inverse
pub fn compute_twiddle<T: FftNum>(
    index: usize,
    fft_len: usize,
    direction: FftDirection,
) -> Complex<T> {
    let constant = -2f64 * std::f64::consts::PI / fft_len as f64;
    let angle = constant * index as f64;

    let result = Complex {
        re: T::from_f64(angle.cos()).unwrap(),
        im: T::from_f64(angle.sin()).unwrap(),
    };

    match direction {
        FftDirection::Forward => result,
        FftDirection::Inverse => result.conj(),
    }
}

/// Fills the per-stage trigonometric table consumed by the mixed-radix passes.
///
/// The table holds exactly 2n reals. Each stage owns one region, holding interleaved
/// (cos, sin) pairs for each of its radix − 1 nontrivial branches; a branch covers the
/// stage's columns with angles climbing in steps of the branch's ladder value, and leads with
/// the identity pair (1, 0). Branches of stages with radix > 5 instead lead with a copy of
/// their final pair, where the generic pass re-reads it.
///
/// The angles are unsigned; the passes negate the sines for a forward transform, so one table
/// serves both directions.
pub(crate) fn compute_twiddle_table<T: FftNum>(n: usize, factors: &Factors) -> Box<[T]> {
    let mut wa = vec![T::zero(); 2 * n];

    let argh = 2.0 * std::f64::consts::PI / n as f64;
    let mut i = 1;
    let mut l1 = 1;
    for &ip in factors.radices() {
        let l2 = l1 * ip;
        let ido = n / l2;
        let mut ld = 0;
        for _ in 1..ip {
            let i1 = i;
            wa[i - 1] = T::one();
            wa[i] = T::zero();
            ld += l1;
            let argld = ld as f64 * argh;
            let mut fi = 0.0;
            for _ in 0..ido {
                i += 2;
                fi += 1.0;
                let arg = fi * argld;
                wa[i - 1] = T::from_f64(arg.cos()).unwrap();
                wa[i] = T::from_f64(arg.sin()).unwrap();
            }
            if ip > 5 {
                wa[i1 - 1] = wa[i - 1];
                wa[i1] = wa[i];
            }
        }
        l1 = l2;
    }

    wa.into_boxed_slice()
}
