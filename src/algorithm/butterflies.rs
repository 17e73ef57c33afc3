//! Specialized butterfly passes for radices 2 through 5.
//!
//! Each pass applies one decomposition stage: it reads its input through an
//! `ido × radix × l1` view, combines the radix branches with the closed-form small-DFT
//! identities, and writes the result through an `ido × l1 × radix` view, transposing the radix
//! axis past the sub-transform axis in the same sweep. `ido` counts interleaved reals, so
//! `ido == 2` means the stage has a single complex column: that fast path needs no twiddles at
//! all. The general path rotates every column beyond the first by the stage's twiddle pairs.
//!
//! The passes are direction-neutral. `sign` is −1 for a forward transform and +1 for an
//! inverse transform; it folds into the twiddle sines and the sine-derived combine constants,
//! which is the only place the two directions differ.

use crate::array_utils::View3;
use crate::common::FftNum;

pub(crate) fn butterfly_2<T: FftNum>(
    ido: usize,
    l1: usize,
    input: &[T],
    output: &mut [T],
    wa1: &[T],
    sign: T,
) {
    let cc = View3::new(ido, 2, l1);
    let ch = View3::new(ido, l1, 2);

    if ido == 2 {
        for k in 0..l1 {
            output[ch.idx(0, k, 0)] = input[cc.idx(0, 0, k)] + input[cc.idx(0, 1, k)];
            output[ch.idx(0, k, 1)] = input[cc.idx(0, 0, k)] - input[cc.idx(0, 1, k)];
            output[ch.idx(1, k, 0)] = input[cc.idx(1, 0, k)] + input[cc.idx(1, 1, k)];
            output[ch.idx(1, k, 1)] = input[cc.idx(1, 0, k)] - input[cc.idx(1, 1, k)];
        }
        return;
    }
    for k in 0..l1 {
        for i in (1..ido).step_by(2) {
            output[ch.idx(i - 1, k, 0)] = input[cc.idx(i - 1, 0, k)] + input[cc.idx(i - 1, 1, k)];
            let tr2 = input[cc.idx(i - 1, 0, k)] - input[cc.idx(i - 1, 1, k)];
            output[ch.idx(i, k, 0)] = input[cc.idx(i, 0, k)] + input[cc.idx(i, 1, k)];
            let ti2 = input[cc.idx(i, 0, k)] - input[cc.idx(i, 1, k)];

            let w1r = wa1[i - 1];
            let w1i = sign * wa1[i];
            output[ch.idx(i, k, 1)] = w1r * ti2 + w1i * tr2;
            output[ch.idx(i - 1, k, 1)] = w1r * tr2 - w1i * ti2;
        }
    }
}

pub(crate) fn butterfly_3<T: FftNum>(
    ido: usize,
    l1: usize,
    input: &[T],
    output: &mut [T],
    wa1: &[T],
    wa2: &[T],
    sign: T,
) {
    let taur = T::from_f64(-0.5).unwrap();
    // sqrt(3)/2, negated for the forward direction
    let taui = sign * T::from_f64(0.866025403784439).unwrap();

    let cc = View3::new(ido, 3, l1);
    let ch = View3::new(ido, l1, 3);

    if ido == 2 {
        for k in 0..l1 {
            let tr2 = input[cc.idx(0, 1, k)] + input[cc.idx(0, 2, k)];
            let cr2 = input[cc.idx(0, 0, k)] + taur * tr2;
            output[ch.idx(0, k, 0)] = input[cc.idx(0, 0, k)] + tr2;
            let ti2 = input[cc.idx(1, 1, k)] + input[cc.idx(1, 2, k)];
            let ci2 = input[cc.idx(1, 0, k)] + taur * ti2;
            output[ch.idx(1, k, 0)] = input[cc.idx(1, 0, k)] + ti2;
            let cr3 = taui * (input[cc.idx(0, 1, k)] - input[cc.idx(0, 2, k)]);
            let ci3 = taui * (input[cc.idx(1, 1, k)] - input[cc.idx(1, 2, k)]);
            output[ch.idx(0, k, 1)] = cr2 - ci3;
            output[ch.idx(0, k, 2)] = cr2 + ci3;
            output[ch.idx(1, k, 1)] = ci2 + cr3;
            output[ch.idx(1, k, 2)] = ci2 - cr3;
        }
        return;
    }
    for k in 0..l1 {
        for i in (1..ido).step_by(2) {
            let tr2 = input[cc.idx(i - 1, 1, k)] + input[cc.idx(i - 1, 2, k)];
            let cr2 = input[cc.idx(i - 1, 0, k)] + taur * tr2;
            output[ch.idx(i - 1, k, 0)] = input[cc.idx(i - 1, 0, k)] + tr2;
            let ti2 = input[cc.idx(i, 1, k)] + input[cc.idx(i, 2, k)];
            let ci2 = input[cc.idx(i, 0, k)] + taur * ti2;
            output[ch.idx(i, k, 0)] = input[cc.idx(i, 0, k)] + ti2;
            let cr3 = taui * (input[cc.idx(i - 1, 1, k)] - input[cc.idx(i - 1, 2, k)]);
            let ci3 = taui * (input[cc.idx(i, 1, k)] - input[cc.idx(i, 2, k)]);
            let dr2 = cr2 - ci3;
            let dr3 = cr2 + ci3;
            let di2 = ci2 + cr3;
            let di3 = ci2 - cr3;

            let w1r = wa1[i - 1];
            let w1i = sign * wa1[i];
            let w2r = wa2[i - 1];
            let w2i = sign * wa2[i];
            output[ch.idx(i, k, 1)] = w1r * di2 + w1i * dr2;
            output[ch.idx(i - 1, k, 1)] = w1r * dr2 - w1i * di2;
            output[ch.idx(i, k, 2)] = w2r * di3 + w2i * dr3;
            output[ch.idx(i - 1, k, 2)] = w2r * dr3 - w2i * di3;
        }
    }
}

pub(crate) fn butterfly_4<T: FftNum>(
    ido: usize,
    l1: usize,
    input: &[T],
    output: &mut [T],
    wa1: &[T],
    wa2: &[T],
    wa3: &[T],
    sign: T,
) {
    let cc = View3::new(ido, 4, l1);
    let ch = View3::new(ido, l1, 4);

    if ido == 2 {
        for k in 0..l1 {
            let ti1 = input[cc.idx(1, 0, k)] - input[cc.idx(1, 2, k)];
            let ti2 = input[cc.idx(1, 0, k)] + input[cc.idx(1, 2, k)];
            let tr4 = sign * (input[cc.idx(1, 3, k)] - input[cc.idx(1, 1, k)]);
            let ti3 = input[cc.idx(1, 1, k)] + input[cc.idx(1, 3, k)];
            let tr1 = input[cc.idx(0, 0, k)] - input[cc.idx(0, 2, k)];
            let tr2 = input[cc.idx(0, 0, k)] + input[cc.idx(0, 2, k)];
            let ti4 = sign * (input[cc.idx(0, 1, k)] - input[cc.idx(0, 3, k)]);
            let tr3 = input[cc.idx(0, 1, k)] + input[cc.idx(0, 3, k)];
            output[ch.idx(0, k, 0)] = tr2 + tr3;
            output[ch.idx(0, k, 2)] = tr2 - tr3;
            output[ch.idx(1, k, 0)] = ti2 + ti3;
            output[ch.idx(1, k, 2)] = ti2 - ti3;
            output[ch.idx(0, k, 1)] = tr1 + tr4;
            output[ch.idx(0, k, 3)] = tr1 - tr4;
            output[ch.idx(1, k, 1)] = ti1 + ti4;
            output[ch.idx(1, k, 3)] = ti1 - ti4;
        }
        return;
    }
    for k in 0..l1 {
        for i in (1..ido).step_by(2) {
            let ti1 = input[cc.idx(i, 0, k)] - input[cc.idx(i, 2, k)];
            let ti2 = input[cc.idx(i, 0, k)] + input[cc.idx(i, 2, k)];
            let ti3 = input[cc.idx(i, 1, k)] + input[cc.idx(i, 3, k)];
            let tr4 = sign * (input[cc.idx(i, 3, k)] - input[cc.idx(i, 1, k)]);
            let tr1 = input[cc.idx(i - 1, 0, k)] - input[cc.idx(i - 1, 2, k)];
            let tr2 = input[cc.idx(i - 1, 0, k)] + input[cc.idx(i - 1, 2, k)];
            let ti4 = sign * (input[cc.idx(i - 1, 1, k)] - input[cc.idx(i - 1, 3, k)]);
            let tr3 = input[cc.idx(i - 1, 1, k)] + input[cc.idx(i - 1, 3, k)];
            output[ch.idx(i - 1, k, 0)] = tr2 + tr3;
            let cr3 = tr2 - tr3;
            output[ch.idx(i, k, 0)] = ti2 + ti3;
            let ci3 = ti2 - ti3;
            let cr2 = tr1 + tr4;
            let cr4 = tr1 - tr4;
            let ci2 = ti1 + ti4;
            let ci4 = ti1 - ti4;

            let w1r = wa1[i - 1];
            let w1i = sign * wa1[i];
            let w2r = wa2[i - 1];
            let w2i = sign * wa2[i];
            let w3r = wa3[i - 1];
            let w3i = sign * wa3[i];
            output[ch.idx(i - 1, k, 1)] = w1r * cr2 - w1i * ci2;
            output[ch.idx(i, k, 1)] = w1r * ci2 + w1i * cr2;
            output[ch.idx(i - 1, k, 2)] = w2r * cr3 - w2i * ci3;
            output[ch.idx(i, k, 2)] = w2r * ci3 + w2i * cr3;
            output[ch.idx(i - 1, k, 3)] = w3r * cr4 - w3i * ci4;
            output[ch.idx(i, k, 3)] = w3r * ci4 + w3i * cr4;
        }
    }
}

pub(crate) fn butterfly_5<T: FftNum>(
    ido: usize,
    l1: usize,
    input: &[T],
    output: &mut [T],
    wa1: &[T],
    wa2: &[T],
    wa3: &[T],
    wa4: &[T],
    sign: T,
) {
    // cos(2*pi/5) and cos(4*pi/5); the matching sines are negated for the forward direction
    let tr11 = T::from_f64(0.309016994374947).unwrap();
    let ti11 = sign * T::from_f64(0.951056516295154).unwrap();
    let tr12 = T::from_f64(-0.809016994374947).unwrap();
    let ti12 = sign * T::from_f64(0.587785252292473).unwrap();

    let cc = View3::new(ido, 5, l1);
    let ch = View3::new(ido, l1, 5);

    if ido == 2 {
        for k in 0..l1 {
            let ti5 = input[cc.idx(1, 1, k)] - input[cc.idx(1, 4, k)];
            let ti2 = input[cc.idx(1, 1, k)] + input[cc.idx(1, 4, k)];
            let ti4 = input[cc.idx(1, 2, k)] - input[cc.idx(1, 3, k)];
            let ti3 = input[cc.idx(1, 2, k)] + input[cc.idx(1, 3, k)];
            let tr5 = input[cc.idx(0, 1, k)] - input[cc.idx(0, 4, k)];
            let tr2 = input[cc.idx(0, 1, k)] + input[cc.idx(0, 4, k)];
            let tr4 = input[cc.idx(0, 2, k)] - input[cc.idx(0, 3, k)];
            let tr3 = input[cc.idx(0, 2, k)] + input[cc.idx(0, 3, k)];
            output[ch.idx(0, k, 0)] = input[cc.idx(0, 0, k)] + tr2 + tr3;
            output[ch.idx(1, k, 0)] = input[cc.idx(1, 0, k)] + ti2 + ti3;
            let cr2 = input[cc.idx(0, 0, k)] + tr11 * tr2 + tr12 * tr3;
            let ci2 = input[cc.idx(1, 0, k)] + tr11 * ti2 + tr12 * ti3;
            let cr3 = input[cc.idx(0, 0, k)] + tr12 * tr2 + tr11 * tr3;
            let ci3 = input[cc.idx(1, 0, k)] + tr12 * ti2 + tr11 * ti3;
            let cr5 = ti11 * tr5 + ti12 * tr4;
            let ci5 = ti11 * ti5 + ti12 * ti4;
            let cr4 = ti12 * tr5 - ti11 * tr4;
            let ci4 = ti12 * ti5 - ti11 * ti4;
            output[ch.idx(0, k, 1)] = cr2 - ci5;
            output[ch.idx(0, k, 4)] = cr2 + ci5;
            output[ch.idx(1, k, 1)] = ci2 + cr5;
            output[ch.idx(1, k, 2)] = ci3 + cr4;
            output[ch.idx(0, k, 2)] = cr3 - ci4;
            output[ch.idx(0, k, 3)] = cr3 + ci4;
            output[ch.idx(1, k, 3)] = ci3 - cr4;
            output[ch.idx(1, k, 4)] = ci2 - cr5;
        }
        return;
    }
    for k in 0..l1 {
        for i in (1..ido).step_by(2) {
            let ti5 = input[cc.idx(i, 1, k)] - input[cc.idx(i, 4, k)];
            let ti2 = input[cc.idx(i, 1, k)] + input[cc.idx(i, 4, k)];
            let ti4 = input[cc.idx(i, 2, k)] - input[cc.idx(i, 3, k)];
            let ti3 = input[cc.idx(i, 2, k)] + input[cc.idx(i, 3, k)];
            let tr5 = input[cc.idx(i - 1, 1, k)] - input[cc.idx(i - 1, 4, k)];
            let tr2 = input[cc.idx(i - 1, 1, k)] + input[cc.idx(i - 1, 4, k)];
            let tr4 = input[cc.idx(i - 1, 2, k)] - input[cc.idx(i - 1, 3, k)];
            let tr3 = input[cc.idx(i - 1, 2, k)] + input[cc.idx(i - 1, 3, k)];
            output[ch.idx(i - 1, k, 0)] = input[cc.idx(i - 1, 0, k)] + tr2 + tr3;
            output[ch.idx(i, k, 0)] = input[cc.idx(i, 0, k)] + ti2 + ti3;
            let cr2 = input[cc.idx(i - 1, 0, k)] + tr11 * tr2 + tr12 * tr3;
            let ci2 = input[cc.idx(i, 0, k)] + tr11 * ti2 + tr12 * ti3;
            let cr3 = input[cc.idx(i - 1, 0, k)] + tr12 * tr2 + tr11 * tr3;
            let ci3 = input[cc.idx(i, 0, k)] + tr12 * ti2 + tr11 * ti3;
            let cr5 = ti11 * tr5 + ti12 * tr4;
            let ci5 = ti11 * ti5 + ti12 * ti4;
            let cr4 = ti12 * tr5 - ti11 * tr4;
            let ci4 = ti12 * ti5 - ti11 * ti4;
            let dr3 = cr3 - ci4;
            let dr4 = cr3 + ci4;
            let di3 = ci3 + cr4;
            let di4 = ci3 - cr4;
            let dr5 = cr2 + ci5;
            let dr2 = cr2 - ci5;
            let di5 = ci2 - cr5;
            let di2 = ci2 + cr5;

            let w1r = wa1[i - 1];
            let w1i = sign * wa1[i];
            let w2r = wa2[i - 1];
            let w2i = sign * wa2[i];
            let w3r = wa3[i - 1];
            let w3i = sign * wa3[i];
            let w4r = wa4[i - 1];
            let w4i = sign * wa4[i];
            output[ch.idx(i - 1, k, 1)] = w1r * dr2 - w1i * di2;
            output[ch.idx(i, k, 1)] = w1r * di2 + w1i * dr2;
            output[ch.idx(i - 1, k, 2)] = w2r * dr3 - w2i * di3;
            output[ch.idx(i, k, 2)] = w2r * di3 + w2i * dr3;
            output[ch.idx(i - 1, k, 3)] = w3r * dr4 - w3i * di4;
            output[ch.idx(i, k, 3)] = w3r * di4 + w3i * dr4;
            output[ch.idx(i - 1, k, 4)] = w4r * dr5 - w4i * di5;
            output[ch.idx(i, k, 4)] = w4r * di5 + w4i * dr5;
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::algorithm::Dft;
    use crate::math_utils::Factors;
    use crate::test_utils::{compare_vectors, random_signal};
    use crate::{array_utils, twiddles, Fft, FftDirection};
    use num_complex::Complex;

    // A transform whose length is a single radix runs exactly one pass with one complex
    // column, so the pass output must equal the DFT of the input.
    fn check_single_pass(radix: usize, direction: FftDirection) {
        let factors = Factors::compute(radix);
        assert_eq!(factors.radices(), &[radix]);
        let wa: Box<[f64]> = twiddles::compute_twiddle_table(radix, &factors);
        let sign = match direction {
            FftDirection::Forward => -1.0,
            FftDirection::Inverse => 1.0,
        };

        let input = random_signal::<f64>(radix);
        let flat = array_utils::interleaved(&input);
        let mut out = vec![0.0f64; radix * 2];
        match radix {
            2 => butterfly_2(2, 1, flat, &mut out, &wa, sign),
            3 => butterfly_3(2, 1, flat, &mut out, &wa, &wa[2..], sign),
            4 => butterfly_4(2, 1, flat, &mut out, &wa, &wa[2..], &wa[4..], sign),
            5 => butterfly_5(2, 1, flat, &mut out, &wa, &wa[2..], &wa[4..], &wa[6..], sign),
            _ => unreachable!(),
        }

        let mut expected = input;
        Dft::new(radix).process(direction, &mut expected);

        let actual: Vec<Complex<f64>> = out
            .chunks_exact(2)
            .map(|pair| Complex {
                re: pair[0],
                im: pair[1],
            })
            .collect();
        assert!(
            compare_vectors(&expected, &actual),
            "radix = {}, direction = {}",
            radix,
            direction
        );
    }

    #[test]
    fn test_butterfly_passes() {
        for radix in 2..=5 {
            check_single_pass(radix, FftDirection::Forward);
            check_single_pass(radix, FftDirection::Inverse);
        }
    }
}
