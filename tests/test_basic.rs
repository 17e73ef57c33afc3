use std::sync::Arc;

use mixedfft::algorithm::{Dft, MixedRadix};
use mixedfft::num_complex::Complex;
use mixedfft::{Fft, FftDirection, FftPlanner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_signal(length: usize, seed: u64) -> Vec<Complex<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..length)
        .map(|_| Complex {
            re: rng.gen_range(-10.0..10.0),
            im: rng.gen_range(-10.0..10.0),
        })
        .collect()
}

fn compare(expected: &[Complex<f64>], actual: &[Complex<f64>]) -> bool {
    assert_eq!(expected.len(), actual.len());
    let mut error = 0.0;
    let mut norm = 0.0;
    for (&a, &b) in expected.iter().zip(actual.iter()) {
        error += (a - b).norm_sqr();
        norm += a.norm_sqr();
    }
    if norm == 0.0 {
        return error == 0.0;
    }
    (error / norm).sqrt() < 1e-9
}

#[test]
fn test_planned_fft_matches_dft() {
    let mut planner = FftPlanner::new();
    for len in (1..=30).chain([49, 64, 120, 255, 1000]) {
        let fft = planner.plan_fft(len);
        let reference = Dft::new(len);
        let signal = random_signal(len, len as u64);

        for direction in [FftDirection::Forward, FftDirection::Inverse] {
            let mut expected = signal.clone();
            reference.process(direction, &mut expected);

            let mut actual = signal.clone();
            fft.process(direction, &mut actual);

            assert!(
                compare(&expected, &actual),
                "len = {}, direction = {}",
                len,
                direction
            );
        }
    }
}

#[test]
fn test_roundtrip_is_scaled_identity() {
    let mut planner = FftPlanner::new();
    for len in (1..=100).chain([127, 128, 720, 997, 1024, 2187, 3000]) {
        let fft = planner.plan_fft(len);
        let signal = random_signal(len, 99);

        let mut buffer = signal.clone();
        let mut scratch = vec![Complex { re: 0.0, im: 0.0 }; fft.scratch_len()];
        fft.process_with_scratch(FftDirection::Forward, &mut buffer, &mut scratch);
        fft.process_with_scratch(FftDirection::Inverse, &mut buffer, &mut scratch);

        let scaled: Vec<Complex<f64>> = signal.iter().map(|&x| x * len as f64).collect();
        assert!(compare(&scaled, &buffer), "len = {}", len);
    }
}

#[test]
fn test_known_spectra() {
    // a constant signal transforms to a single DC bin
    for len in [4usize, 9, 35] {
        let mut buffer = vec![Complex { re: 1.0, im: 0.0 }; len];
        MixedRadix::new(len).process(FftDirection::Forward, &mut buffer);

        let mut expected = vec![Complex { re: 0.0, im: 0.0 }; len];
        expected[0] = Complex {
            re: len as f64,
            im: 0.0,
        };
        assert!(compare(&expected, &buffer), "len = {}", len);
    }

    // a pure tone transforms to a single bin at the tone's frequency
    for len in [8usize, 15, 100] {
        for bin in [1, len / 2, len - 1] {
            let mut buffer: Vec<Complex<f64>> = (0..len)
                .map(|j| {
                    let angle = 2.0 * std::f64::consts::PI * (bin * j) as f64 / len as f64;
                    Complex::from_polar(1.0, angle)
                })
                .collect();
            MixedRadix::new(len).process(FftDirection::Forward, &mut buffer);

            let mut expected = vec![Complex { re: 0.0, im: 0.0 }; len];
            expected[bin] = Complex {
                re: len as f64,
                im: 0.0,
            };
            assert!(compare(&expected, &buffer), "len = {}, bin = {}", len, bin);
        }
    }
}

#[test]
fn test_plan_is_shareable_across_threads() {
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft(360);
    let signal = random_signal(360, 7);

    let mut baseline = signal.clone();
    fft.process(FftDirection::Forward, &mut baseline);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let fft: Arc<dyn Fft<f64>> = Arc::clone(&fft);
            let mut buffer = signal.clone();
            std::thread::spawn(move || {
                fft.process(FftDirection::Forward, &mut buffer);
                buffer
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result, baseline);
    }
}
