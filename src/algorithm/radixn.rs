//! The generic butterfly pass, for any radix the specialized passes don't cover.
//!
//! The factor search only emits 4 and primes, so in practice this pass runs for prime radices
//! of 7 and up. It has no closed-form combine; instead it works in three phases over two
//! auxiliary 2D views of the stage buffers:
//!
//! 1. combine each pair of mirror branches (j, radix − j) into sums and differences,
//! 2. accumulate every output branch as a twiddle-weighted sum of those terms, walking the
//!    stage's twiddle region with an offset that wraps modulo radix · ido,
//! 3. rotate the columns beyond the first by their twiddle pairs, exactly like the general
//!    path of the specialized passes.
//!
//! Phase 3 has nothing to do when the stage has a single complex column (ido == 2), and the
//! phases above it alternate between the two buffers, so which buffer ends up holding the
//! result varies. The return value reports it: `true` means the result landed in `output`,
//! `false` means it landed back in `input`. The driver folds that into its buffer selector
//! instead of toggling unconditionally.

use num_integer::Integer;

use crate::array_utils::{View2, View3};
use crate::common::FftNum;

pub(crate) fn butterfly_n<T: FftNum>(
    ido: usize,
    ip: usize,
    l1: usize,
    idl1: usize,
    input: &mut [T],
    output: &mut [T],
    wa: &[T],
    sign: T,
) -> bool {
    let cc = View3::new(ido, ip, l1);
    let c1 = View3::new(ido, l1, ip);
    let ch = View3::new(ido, l1, ip);
    let c2 = View2::new(idl1, ip);
    let ch2 = View2::new(idl1, ip);

    let idot = ido / 2;
    let idp = ip * ido;
    let ipph = Integer::div_ceil(&ip, &2);

    // phase 1: conjugate-pair combine. The loop nesting follows the larger extent, the two
    // orders are functionally identical.
    if ido < l1 {
        for j in 1..ipph {
            let jc = ip - j;
            for i in 0..ido {
                for k in 0..l1 {
                    output[ch.idx(i, k, j)] = input[cc.idx(i, j, k)] + input[cc.idx(i, jc, k)];
                    output[ch.idx(i, k, jc)] = input[cc.idx(i, j, k)] - input[cc.idx(i, jc, k)];
                }
            }
        }
        for i in 0..ido {
            for k in 0..l1 {
                output[ch.idx(i, k, 0)] = input[cc.idx(i, 0, k)];
            }
        }
    } else {
        for j in 1..ipph {
            let jc = ip - j;
            for k in 0..l1 {
                for i in 0..ido {
                    output[ch.idx(i, k, j)] = input[cc.idx(i, j, k)] + input[cc.idx(i, jc, k)];
                    output[ch.idx(i, k, jc)] = input[cc.idx(i, j, k)] - input[cc.idx(i, jc, k)];
                }
            }
        }
        for k in 0..l1 {
            for i in 0..ido {
                output[ch.idx(i, k, 0)] = input[cc.idx(i, 0, k)];
            }
        }
    }

    // phase 2: accumulate each branch pair as a twiddle-weighted sum of the phase-1 terms.
    // Each mirror pair (l, lc) steps through the twiddle region with its own stride, wrapping
    // back once the offset passes the region's extent.
    for l in 1..ipph {
        let lc = ip - l;
        let widl = (l - 1) * ido;
        let war = wa[widl];
        let wai = sign * wa[widl + 1];
        for ik in 0..idl1 {
            input[c2.idx(ik, l)] = output[ch2.idx(ik, 0)] + war * output[ch2.idx(ik, 1)];
            input[c2.idx(ik, lc)] = wai * output[ch2.idx(ik, ip - 1)];
        }

        let inc = l * ido;
        let mut widlj = widl;
        for j in 2..ipph {
            let jc = ip - j;
            widlj += inc;
            if widlj + 2 > idp {
                widlj -= idp;
            }
            let war = wa[widlj];
            let wai = sign * wa[widlj + 1];
            for ik in 0..idl1 {
                input[c2.idx(ik, l)] = input[c2.idx(ik, l)] + war * output[ch2.idx(ik, j)];
                input[c2.idx(ik, lc)] = input[c2.idx(ik, lc)] + wai * output[ch2.idx(ik, jc)];
            }
        }
    }

    for j in 1..ipph {
        for ik in 0..idl1 {
            output[ch2.idx(ik, 0)] = output[ch2.idx(ik, 0)] + output[ch2.idx(ik, j)];
        }
    }

    for j in 1..ipph {
        let jc = ip - j;
        for ik in (1..idl1).step_by(2) {
            output[ch2.idx(ik - 1, j)] = input[c2.idx(ik - 1, j)] - input[c2.idx(ik, jc)];
            output[ch2.idx(ik - 1, jc)] = input[c2.idx(ik - 1, j)] + input[c2.idx(ik, jc)];
            output[ch2.idx(ik, j)] = input[c2.idx(ik, j)] + input[c2.idx(ik - 1, jc)];
            output[ch2.idx(ik, jc)] = input[c2.idx(ik, j)] - input[c2.idx(ik - 1, jc)];
        }
    }

    // a single complex column needs no rotation, and the result is already in `output`
    if ido == 2 {
        return true;
    }

    // phase 3: rotate the columns beyond the first, writing back into `input`
    for ik in 0..idl1 {
        input[c2.idx(ik, 0)] = output[ch2.idx(ik, 0)];
    }
    for j in 1..ip {
        for k in 0..l1 {
            input[c1.idx(0, k, j)] = output[ch.idx(0, k, j)];
            input[c1.idx(1, k, j)] = output[ch.idx(1, k, j)];
        }
    }

    if idot > l1 {
        for j in 1..ip {
            let base = (j - 1) * ido;
            for k in 0..l1 {
                for i in (3..ido).step_by(2) {
                    let war = wa[base + i - 1];
                    let wai = sign * wa[base + i];
                    input[c1.idx(i - 1, k, j)] =
                        war * output[ch.idx(i - 1, k, j)] - wai * output[ch.idx(i, k, j)];
                    input[c1.idx(i, k, j)] =
                        war * output[ch.idx(i, k, j)] + wai * output[ch.idx(i - 1, k, j)];
                }
            }
        }
    } else {
        for j in 1..ip {
            let base = (j - 1) * ido;
            for i in (3..ido).step_by(2) {
                let war = wa[base + i - 1];
                let wai = sign * wa[base + i];
                for k in 0..l1 {
                    input[c1.idx(i - 1, k, j)] =
                        war * output[ch.idx(i - 1, k, j)] - wai * output[ch.idx(i, k, j)];
                    input[c1.idx(i, k, j)] =
                        war * output[ch.idx(i, k, j)] + wai * output[ch.idx(i - 1, k, j)];
                }
            }
        }
    }
    false
}
