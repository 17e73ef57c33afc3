pub(crate) const MAX_FACTORS: usize = 13;

// Candidates tried before falling back to odd numbers. 4 is listed despite being composite:
// a fused radix-4 pass beats two radix-2 passes, so powers of two should come out as 4s.
const NTRYH: [usize; 4] = [3, 4, 2, 5];

/// The ordered radix decomposition of a transform length.
///
/// Radices are found by repeated trial division, trying 3, 4, 2 and 5 first and then every odd
/// number in turn. The search is unbounded, so a prime length always terminates with the length
/// itself as the sole radix. A radix of 2 found after other radices is moved in front of them.
///
/// At most 13 radices fit; lengths that need more (enormous powers of two) panic in `compute`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Factors {
    n: usize,
    count: usize,
    radices: [usize; MAX_FACTORS],
}

impl Factors {
    pub fn compute(n: usize) -> Self {
        let mut radices = [0usize; MAX_FACTORS];
        let mut count = 0;

        let mut remainder = n;
        let mut candidate = 0;
        let mut attempt = 0;
        while remainder > 1 {
            candidate = if attempt < NTRYH.len() {
                NTRYH[attempt]
            } else {
                candidate + 2
            };
            attempt += 1;

            while remainder % candidate == 0 {
                remainder /= candidate;
                assert!(
                    count < MAX_FACTORS,
                    "FFT length {} needs more than {} radices",
                    n,
                    MAX_FACTORS
                );
                radices[count] = candidate;
                count += 1;

                // a radix-2 stage, unless it's the first radix found, goes in front of the
                // radices found before it
                if candidate == 2 && count != 1 {
                    for i in (1..count).rev() {
                        radices[i] = radices[i - 1];
                    }
                    radices[0] = 2;
                }
            }
        }

        Self { n, count, radices }
    }

    /// The transform length this decomposition belongs to
    pub fn n(&self) -> usize {
        self.n
    }

    /// The radices, in the order the transform stages apply them. Empty for n < 2.
    pub fn radices(&self) -> &[usize] {
        &self.radices[..self.count]
    }
}
