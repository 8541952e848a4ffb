//! Fixed-point arithmetic kernel.
//!
//! Integer emulation of the Q-format helpers the CELT decoder is specified
//! with. 16-bit operands are taken as `i16` so that every narrowing the
//! reference arithmetic performs is an explicit `as i16` at the call site.
//! Anything marked "wrapping" is modular on purpose: the inverse FFT relies on
//! overflow cancelling out later.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use crate::util::ilog;

/// Largest Q15 value.
pub const Q15ONE: i16 = 32767;
/// Fractional bits of time-domain signals.
pub const SIG_SHIFT: u32 = 12;
/// Saturation bound applied to synthesized signals.
pub const SIG_SAT: i32 = 300_000_000;
/// Fractional bits of log-energy values.
pub const DB_SHIFT: u32 = 10;
/// Unit norm of normalized band coefficients (Q14).
pub const NORM_SCALING: i16 = 16384;

#[inline]
#[must_use]
pub const fn mult16_16(a: i16, b: i16) -> i32 {
    a as i32 * b as i32
}

#[inline]
#[must_use]
pub const fn mult16_16_q15(a: i16, b: i16) -> i32 {
    mult16_16(a, b) >> 15
}

#[inline]
#[must_use]
pub const fn mult16_16_q14(a: i16, b: i16) -> i32 {
    mult16_16(a, b) >> 14
}

#[inline]
#[must_use]
pub const fn mult16_16_q13(a: i16, b: i16) -> i32 {
    mult16_16(a, b) >> 13
}

#[inline]
#[must_use]
pub const fn mult16_16_p15(a: i16, b: i16) -> i32 {
    (mult16_16(a, b) + 16384) >> 15
}

/// `FRAC_MUL16`: rounded Q15 product used by the bit-exact trig helpers.
#[inline]
#[must_use]
pub const fn frac_mul16(a: i32, b: i32) -> i32 {
    (16384 + (a as i16 as i32) * (b as i16 as i32)) >> 15
}

#[inline]
#[must_use]
pub const fn mult16_32_q15(a: i16, b: i32) -> i32 {
    ((a as i64 * b as i64) >> 15) as i32
}

#[inline]
#[must_use]
pub const fn mult16_32_q16(a: i16, b: i32) -> i32 {
    ((a as i64 * b as i64) >> 16) as i32
}

/// `S_MUL`: signal times 16-bit twiddle.
#[inline]
#[must_use]
pub const fn s_mul(a: i32, b: i16) -> i32 {
    mult16_32_q15(b, a)
}

/// 32x32 product in Q31, computed from 16-bit halves.
#[inline]
#[must_use]
pub const fn mult32_32_q31(a: i32, b: i32) -> i32 {
    let hi = shl32(mult16_16((a >> 16) as i16, (b >> 16) as i16), 1);
    let ab = ((a >> 16) as i16 as i32 * (b & 0xFFFF)) >> 15;
    let ba = ((b >> 16) as i16 as i32 * (a & 0xFFFF)) >> 15;
    hi.wrapping_add(ab).wrapping_add(ba)
}

#[inline]
#[must_use]
pub const fn add16(a: i16, b: i16) -> i16 {
    a.wrapping_add(b)
}

#[inline]
#[must_use]
pub const fn sub16(a: i16, b: i16) -> i16 {
    a.wrapping_sub(b)
}

#[inline]
#[must_use]
pub const fn shl16(a: i16, shift: u32) -> i16 {
    ((a as u16) << shift) as i16
}

#[inline]
#[must_use]
pub const fn shl32(a: i32, shift: u32) -> i32 {
    ((a as u32) << shift) as i32
}

/// Shift right for positive `shift`, left for negative.
#[inline]
#[must_use]
pub const fn vshr32(a: i32, shift: i32) -> i32 {
    if shift > 0 {
        a >> shift
    } else {
        shl32(a, (-shift) as u32)
    }
}

/// Shift right with rounding to nearest.
#[inline]
#[must_use]
pub const fn pshr32(a: i32, shift: u32) -> i32 {
    (a + ((1 << shift) >> 1)) >> shift
}

#[inline]
#[must_use]
pub const fn add32_ovflw(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

#[inline]
#[must_use]
pub const fn sub32_ovflw(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

#[inline]
#[must_use]
pub const fn neg32_ovflw(a: i32) -> i32 {
    0_i32.wrapping_sub(a)
}

#[inline]
#[must_use]
pub const fn saturate(x: i32, a: i32) -> i32 {
    if x > a {
        a
    } else if x < -a {
        -a
    } else {
        x
    }
}

#[inline]
#[must_use]
pub const fn saturate16(x: i32) -> i16 {
    if x > 32767 {
        32767
    } else if x < -32768 {
        -32768
    } else {
        x as i16
    }
}

/// Converts a `SIG_SHIFT` signal to a saturated 16-bit sample.
#[inline]
#[must_use]
pub const fn sig2word16(x: i32) -> i16 {
    saturate16(pshr32(x, SIG_SHIFT))
}

/// Floor of log2 for `x > 0`.
#[inline]
#[must_use]
pub const fn celt_ilog2(x: i32) -> i32 {
    ilog(x as u32) as i32 - 1
}

/// Floor of log2, returning 0 for non-positive input.
#[inline]
#[must_use]
pub const fn celt_zlog2(x: i32) -> i32 {
    if x <= 0 { 0 } else { celt_ilog2(x) }
}

#[must_use]
pub fn celt_maxabs16(x: &[i16]) -> i32 {
    let (max, min) = x
        .iter()
        .fold((0_i16, 0_i16), |(max, min), &v| (max.max(v), min.min(v)));
    i32::from(max).max(-i32::from(min))
}

#[must_use]
pub fn celt_maxabs32(x: &[i32]) -> i32 {
    let (max, min) = x
        .iter()
        .fold((0_i32, 0_i32), |(max, min), &v| (max.max(v), min.min(v)));
    max.max(-min)
}

/// Inner product of two Q-format vectors with a 32-bit accumulator.
#[must_use]
pub fn celt_inner_prod(x: &[i16], y: &[i16]) -> i32 {
    x.iter()
        .zip(y)
        .fold(0_i32, |acc, (&a, &b)| acc.wrapping_add(mult16_16(a, b)))
}

/// Two inner products sharing the `x` operand.
#[must_use]
pub fn dual_inner_prod(x: &[i16], y01: &[i16], y02: &[i16]) -> (i32, i32) {
    x.iter()
        .zip(y01.iter().zip(y02))
        .fold((0_i32, 0_i32), |(xy1, xy2), (&a, (&b, &c))| {
            (
                xy1.wrapping_add(mult16_16(a, b)),
                xy2.wrapping_add(mult16_16(a, c)),
            )
        })
}

/// Linear congruential generator shared by folding and anti-collapse.
#[inline]
#[must_use]
pub const fn celt_lcg_rand(seed: u32) -> u32 {
    seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223)
}

/// Reciprocal square root of a Q16 value in `[0.25, 1)`, returned in Q14.
#[must_use]
pub const fn celt_rsqrt_norm(x: i32) -> i16 {
    let n = (x - 32768) as i16;
    let r = add16(
        23557,
        mult16_16_q15(n, add16(-13490, mult16_16_q15(n, 6713) as i16)) as i16,
    );
    let r2 = mult16_16_q15(r, r) as i16;
    let y = shl16(
        sub16(add16(mult16_16_q15(r2, n) as i16, r2), 16384),
        1,
    );
    add16(
        r,
        mult16_16_q15(
            r,
            mult16_16_q15(y, sub16(mult16_16_q15(y, 12288) as i16, 16384)) as i16,
        ) as i16,
    )
}

/// Square root of a QX value, returned in QX/2.
#[must_use]
pub const fn celt_sqrt(x: i32) -> i32 {
    const C: [i16; 5] = [23175, 11561, -3011, 1699, -664];
    if x == 0 {
        return 0;
    } else if x >= 1_073_741_824 {
        return 32767;
    }
    let k = (celt_ilog2(x) >> 1) - 7;
    let x = vshr32(x, 2 * k);
    let n = (x - 32768) as i16;
    let rt = add16(
        C[0],
        mult16_16_q15(
            n,
            add16(
                C[1],
                mult16_16_q15(
                    n,
                    add16(
                        C[2],
                        mult16_16_q15(n, add16(C[3], mult16_16_q15(n, C[4]) as i16)) as i16,
                    ),
                ) as i16,
            ),
        ) as i16,
    );
    vshr32(rt as i32, 7 - k)
}

/// Reciprocal of a positive value.
#[must_use]
pub const fn celt_rcp(x: i32) -> i32 {
    debug_assert!(x > 0);
    let i = celt_ilog2(x);
    let n = (vshr32(x, i - 15) - 32768) as i16;
    let r = add16(30840, mult16_16_q15(-15420, n) as i16);
    let r = sub16(
        r,
        mult16_16_q15(r, add16(mult16_16_q15(r, n) as i16, add16(r, -32768))) as i16,
    );
    let r = sub16(
        r,
        add16(
            1,
            mult16_16_q15(r, add16(mult16_16_q15(r, n) as i16, add16(r, -32768))) as i16,
        ),
    );
    vshr32(r as i32, i - 16)
}

const fn celt_cos_pi_2(x: i16) -> i16 {
    let x2 = mult16_16_p15(x, x) as i16;
    let inner = 8277 + mult16_16_p15(-626, x2);
    let inner = -7651 + mult16_16_p15(x2, inner as i16);
    let acc = (32767 - x2 as i32) + mult16_16_p15(x2, inner as i16);
    let acc = if acc < 32766 { acc } else { 32766 };
    add16(1, acc as i16)
}

/// Cosine with a period of `1 << 17` (input `x` maps to `cos(pi/2 * x / 2^16)`).
#[must_use]
pub const fn celt_cos_norm(x: i32) -> i16 {
    let mut x = x & 0x0001_FFFF;
    if x > 1 << 16 {
        x = (1 << 17) - x;
    }
    if x & 0x0000_7FFF != 0 {
        if x < 1 << 15 {
            celt_cos_pi_2(x as i16)
        } else {
            -celt_cos_pi_2((65536 - x) as i16)
        }
    } else if x & 0x0000_FFFF != 0 {
        0
    } else if x & 0x0001_FFFF != 0 {
        -32767
    } else {
        32767
    }
}

/// Fractional part of the base-2 exponential: Q10 input in `[0, 1)`, Q14 output.
#[must_use]
pub const fn celt_exp2_frac(x: i16) -> i16 {
    const D0: i16 = 16383;
    const D1: i16 = 22804;
    const D2: i16 = 14819;
    const D3: i16 = 10204;
    let frac = shl16(x, 4);
    add16(
        D0,
        mult16_16_q15(
            frac,
            add16(
                D1,
                mult16_16_q15(frac, add16(D2, mult16_16_q15(D3, frac) as i16)) as i16,
            ),
        ) as i16,
    )
}

/// Base-2 exponential: Q10 input, Q16 output.
#[must_use]
pub const fn celt_exp2(x: i16) -> i32 {
    let integer = x >> 10;
    if integer > 14 {
        return 0x7f00_0000;
    } else if integer < -15 {
        return 0;
    }
    let frac = celt_exp2_frac(x.wrapping_sub(shl16(integer, 10)));
    vshr32(frac as i32, -(integer as i32) - 2)
}

/// Bit-exact cosine used for stereo/split angles (Q14 in, Q15 out).
#[must_use]
pub const fn bitexact_cos(x: i16) -> i16 {
    let tmp = (4096 + x as i32 * x as i32) >> 13;
    let x2 = tmp as i16 as i32;
    let x2 = (32767 - x2)
        + frac_mul16(
            x2,
            -7651 + frac_mul16(x2, 8277 + frac_mul16(-626, x2)),
        );
    1 + x2 as i16
}

/// Bit-exact `log2(isin / icos)` in Q11.
#[must_use]
pub const fn bitexact_log2tan(isin: i32, icos: i32) -> i32 {
    let lc = ilog(icos as u32) as i32;
    let ls = ilog(isin as u32) as i32;
    let icos = icos << (15 - lc);
    let isin = isin << (15 - ls);
    (ls - lc) * (1 << 11) + frac_mul16(isin, frac_mul16(isin, -2597) + 7932)
        - frac_mul16(icos, frac_mul16(icos, -2597) + 7932)
}
