use num_complex::Complex;
use num_traits::{Float, One, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::Dft;
use crate::{Fft, FftDirection, FftNum, Length};

pub fn random_signal<T: FftNum>(length: usize) -> Vec<Complex<T>> {
    random_signal_seeded(length, 5678)
}

/// Generates a deterministic pseudorandom complex signal for tests
pub fn random_signal_seeded<T: FftNum>(length: usize, seed: u64) -> Vec<Complex<T>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .map(|_| Complex {
            re: T::from_f64(rng.gen_range(-10.0..10.0)).unwrap(),
            im: T::from_f64(rng.gen_range(-10.0..10.0)).unwrap(),
        })
        .collect()
}

/// Compares expected against actual by relative RMS error, with a tolerance scaled to the
/// float type's precision
pub fn compare_vectors<T: FftNum + Float>(expected: &[Complex<T>], actual: &[Complex<T>]) -> bool {
    assert_eq!(expected.len(), actual.len());
    let mut error = T::zero();
    let mut norm = T::zero();
    for (&a, &b) in expected.iter().zip(actual.iter()) {
        error = error + (a - b).norm_sqr();
        norm = norm + a.norm_sqr();
    }
    if norm.is_zero() {
        return error.is_zero();
    }
    (error / norm).sqrt() < T::epsilon().sqrt()
}

/// Asserts that `fft` matches the naive DFT, transforms an impulse into a flat spectrum, and
/// scales the input by the length over an unnormalized round trip
pub fn check_fft_algorithm<T: FftNum + Float>(
    fft: &dyn Fft<T>,
    len: usize,
    direction: FftDirection,
) {
    assert_eq!(fft.len(), len, "wrong fft length");

    let reference = Dft::new(len);
    let signal = random_signal::<T>(len);

    let mut expected = signal.clone();
    reference.process(direction, &mut expected);

    let mut actual = signal.clone();
    fft.process(direction, &mut actual);
    assert!(
        compare_vectors(&expected, &actual),
        "process() disagrees with the DFT, len = {}, direction = {}",
        len,
        direction
    );

    // the scratch entry point must produce the same bits as the allocating one
    let mut with_scratch = signal.clone();
    let mut scratch = vec![Complex::zero(); fft.scratch_len()];
    fft.process_with_scratch(direction, &mut with_scratch, &mut scratch);
    assert_eq!(
        actual, with_scratch,
        "process_with_scratch() disagrees with process(), len = {}, direction = {}",
        len, direction
    );

    if len > 0 {
        let mut impulse = vec![Complex::zero(); len];
        impulse[0] = Complex::one();
        fft.process(direction, &mut impulse);
        let flat = vec![Complex::one(); len];
        assert!(
            compare_vectors(&flat, &impulse),
            "impulse response is not flat, len = {}, direction = {}",
            len,
            direction
        );
    }

    let mut roundtrip = signal.clone();
    fft.process(direction, &mut roundtrip);
    fft.process(direction.opposite_direction(), &mut roundtrip);
    let scaled: Vec<Complex<T>> = signal
        .iter()
        .map(|&x| x * T::from_usize(len).unwrap())
        .collect();
    assert!(
        compare_vectors(&scaled, &roundtrip),
        "round trip is not the input scaled by len, len = {}, direction = {}",
        len,
        direction
    );
}
