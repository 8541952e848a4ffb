//! Pyramid vector quantizer codebook enumeration.
//!
//! A codeword is a vector of `n` integers whose absolute values sum to `k`.
//! `U(n, k)` counts the codewords of `n` dimensions and `k` pulses whose
//! first coordinate is positive, and the size of the whole codebook is
//! `V(n, k) = U(n, k) + U(n, k + 1)`. Codewords are indexed in `[0, V(n, k))`.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use std::sync::OnceLock;

use crate::error::Result;
use crate::range::{RangeDecoder, RangeEncoder};
use crate::util::ilog;

/// Largest band dimension that is ever PVQ coded (22 bins at `LM = 3`).
pub const MAX_PVQ_N: usize = 176;

const TABLE_SIZE: usize = MAX_PVQ_N + 1;

/// `U(n, k)` for `n, k <= MAX_PVQ_N`, reduced modulo `2^32`.
///
/// Entries that overflow are never read: the pulse cache only allocates
/// `(n, k)` pairs whose codebook size fits in 32 bits.
struct PvqTable {
    u: Vec<u32>,
}

impl PvqTable {
    fn new() -> Self {
        let mut u = vec![0_u32; TABLE_SIZE * TABLE_SIZE];
        u[0] = 1;
        for n in 1..TABLE_SIZE {
            for k in 1..TABLE_SIZE {
                let above = u[(n - 1) * TABLE_SIZE + k];
                let left = u[n * TABLE_SIZE + k - 1];
                let diag = u[(n - 1) * TABLE_SIZE + k - 1];
                u[n * TABLE_SIZE + k] = above.wrapping_add(left).wrapping_add(diag);
            }
        }
        Self { u }
    }

    #[inline]
    fn get(&self, n: usize, k: usize) -> u32 {
        debug_assert!(n < TABLE_SIZE && k < TABLE_SIZE);
        self.u[n * TABLE_SIZE + k]
    }
}

fn table() -> &'static PvqTable {
    static TABLE: OnceLock<PvqTable> = OnceLock::new();
    TABLE.get_or_init(PvqTable::new)
}

/// `U(n, k)`.
#[must_use]
pub fn pvq_u(n: usize, k: usize) -> u32 {
    table().get(n, k)
}

/// `V(n, k)`: number of codewords with `n` dimensions and `k` pulses.
#[must_use]
pub fn pvq_v(n: usize, k: usize) -> u32 {
    let t = table();
    t.get(n, k).wrapping_add(t.get(n, k + 1))
}

/// Conservative estimate of `log2(val)` with `frac` fractional bits.
///
/// Never below the exact value, and exact for powers of two.
#[must_use]
pub fn log2_frac(val: u32, frac: u32) -> i32 {
    debug_assert!(val > 0);
    let l = ilog(val) as i32;
    if val & (val - 1) == 0 {
        return (l - 1) << frac;
    }
    // Normalize to a Q15 mantissa in [1, 2) with one bit of headroom.
    let mut val = if l > 16 {
        ((val - 1) >> (l - 16)) + 1
    } else {
        val << (16 - l)
    };
    let mut acc = (l - 1) << frac;
    let mut frac = frac as i32;
    loop {
        let b = (val >> 16) as i32;
        acc += b << frac;
        val = (val + b as u32) >> b;
        val = val.wrapping_mul(val).wrapping_add(0x7FFF) >> 15;
        if frac <= 0 {
            break;
        }
        frac -= 1;
    }
    acc + i32::from(val > 0x8000)
}

/// Bits needed to code each pulse count `1..=max_k` in `n` dimensions, in
/// `1 / (1 << frac)` bit units. `bits[0]` is zero.
#[must_use]
pub fn get_required_bits(n: usize, max_k: usize, frac: u32) -> Vec<i16> {
    debug_assert!(max_k > 0);
    let mut bits = vec![0_i16; max_k + 1];
    for (k, b) in bits.iter_mut().enumerate().skip(1) {
        *b = if n == 1 {
            1 << frac
        } else {
            log2_frac(pvq_v(n, k), frac) as i16
        };
    }
    bits
}

/// Inverts the codeword enumeration: writes the codeword with index `i` into
/// `y[..n]` and returns its squared norm.
pub fn cwrsi(n: usize, k: usize, i: u32, y: &mut [i32]) -> i32 {
    debug_assert!(k > 0);
    debug_assert!(n > 1);
    let t = table();
    let mut n = n;
    let mut k = k;
    let mut i = i;
    let mut yy = 0_i32;
    let mut pos = 0;

    while n > 2 {
        let val;
        if k >= n {
            // More pulses than dimensions left.
            let p = t.get(n, k + 1);
            let s = -i32::from(i >= p);
            i -= p & s as u32;
            let k0 = k;
            let q = t.get(n, n);
            let mut p;
            if q > i {
                k = n;
                loop {
                    k -= 1;
                    p = t.get(k, n);
                    if p <= i {
                        break;
                    }
                }
            } else {
                p = t.get(n, k);
                while p > i {
                    k -= 1;
                    p = t.get(n, k);
                }
            }
            i -= p;
            val = ((k0 - k) as i32 + s) ^ s;
        } else {
            let p = t.get(k, n);
            let q = t.get(k + 1, n);
            if p <= i && i < q {
                // No pulse in this dimension.
                i -= p;
                val = 0;
            } else {
                let s = -i32::from(i >= q);
                i -= q & s as u32;
                let k0 = k;
                let mut p;
                loop {
                    k -= 1;
                    p = t.get(k, n);
                    if p <= i {
                        break;
                    }
                }
                i -= p;
                val = ((k0 - k) as i32 + s) ^ s;
            }
        }
        y[pos] = val;
        pos += 1;
        yy += val * val;
        n -= 1;
    }

    // n == 2
    let p = 2 * k as u32 + 1;
    let s = -i32::from(i >= p);
    i -= p & s as u32;
    let k0 = k;
    k = ((i + 1) >> 1) as usize;
    if k != 0 {
        i -= 2 * k as u32 - 1;
    }
    let val = ((k0 - k) as i32 + s) ^ s;
    y[pos] = val;
    yy += val * val;

    // n == 1
    let s = -(i as i32);
    let val = (k as i32 + s) ^ s;
    y[pos + 1] = val;
    yy + val * val
}

/// Reads a codeword index and expands it into `y[..n]`, returning the
/// squared norm of the codeword.
///
/// # Errors
///
/// * If the range decoder rejects the read
pub fn decode_pulses(y: &mut [i32], n: usize, k: usize, dec: &mut RangeDecoder<'_>) -> Result<i32> {
    let index = dec.ec_dec_uint(pvq_v(n, k))?;
    Ok(cwrsi(n, k, index, y))
}

/// Enumerates a codeword; the inverse of [`cwrsi`].
#[must_use]
pub fn icwrs(y: &[i32]) -> u32 {
    let n = y.len();
    debug_assert!(n >= 2);
    let mut j = n - 1;
    let mut i = u32::from(y[j] < 0);
    let mut k = y[j].unsigned_abs() as usize;
    loop {
        j -= 1;
        i = i.wrapping_add(pvq_u(n - j, k));
        k += y[j].unsigned_abs() as usize;
        if y[j] < 0 {
            i = i.wrapping_add(pvq_u(n - j, k + 1));
        }
        if j == 0 {
            break;
        }
    }
    i
}

/// Writes the index of codeword `y` with `k` pulses.
///
/// # Errors
///
/// * If the range encoder rejects the write
pub fn encode_pulses(y: &[i32], k: usize, enc: &mut RangeEncoder) -> Result<()> {
    enc.enc_uint(icwrs(y), pvq_v(y.len(), k))
}
