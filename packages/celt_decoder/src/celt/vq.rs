//! Shape reconstruction for PVQ-coded bands.
//!
//! Decoded pulse vectors are scaled to the band gain, then spread with a
//! series of 2-D rotations so that low pulse counts do not sound tonal.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::error::Result;
use crate::range::RangeDecoder;

use super::cwrs::decode_pulses;
use super::math::{
    Q15ONE, celt_cos_norm, celt_ilog2, celt_inner_prod, celt_rcp, celt_rsqrt_norm, mult16_16,
    mult16_16_p15, mult16_16_q15, mult32_32_q31, pshr32, sub16, vshr32,
};

/// Spreading strength signalled per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spread {
    None,
    Light,
    #[default]
    Normal,
    Aggressive,
}

impl Spread {
    pub const ICDF: [u8; 4] = [25, 23, 2, 0];

    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::None,
            1 => Self::Light,
            2 => Self::Normal,
            _ => Self::Aggressive,
        }
    }

    const fn factor(self) -> Option<i32> {
        match self {
            Self::None => None,
            Self::Light => Some(15),
            Self::Normal => Some(10),
            Self::Aggressive => Some(5),
        }
    }
}

fn exp_rotation1(x: &mut [i16], stride: usize, c: i16, s: i16) {
    let len = x.len();
    let ms = s.wrapping_neg();
    let rotate = |x: &mut [i16], i: usize| {
        let x1 = x[i];
        let x2 = x[i + stride];
        x[i + stride] = pshr32(mult16_16(c, x2) + mult16_16(s, x1), 15) as i16;
        x[i] = pshr32(mult16_16(c, x1) + mult16_16(ms, x2), 15) as i16;
    };
    for i in 0..len.saturating_sub(stride) {
        rotate(x, i);
    }
    if len > 2 * stride {
        for i in (0..len - 2 * stride).rev() {
            rotate(x, i);
        }
    }
}

/// Applies (`dir > 0`) or undoes (`dir < 0`) the spreading rotation on each
/// of the `stride` interleaved blocks of `x`.
pub fn exp_rotation(x: &mut [i16], dir: i32, stride: usize, k: i32, spread: Spread) {
    let len = x.len();
    let Some(factor) = spread.factor() else {
        return;
    };
    if 2 * k >= len as i32 {
        return;
    }

    let gain = mult32_32_q31(
        mult16_16(Q15ONE, len as i16),
        celt_rcp(len as i32 + factor * k),
    ) as i16;
    let theta = (mult16_16_q15(gain, gain) >> 1) as i16;
    let c = celt_cos_norm(i32::from(theta));
    let s = celt_cos_norm(i32::from(sub16(Q15ONE, theta)));

    let mut stride2 = 0;
    if len >= 8 * stride {
        stride2 = 1;
        // Rounded sqrt(len / stride).
        while (stride2 * stride2 + stride2) * stride + (stride >> 2) < len {
            stride2 += 1;
        }
    }

    let block = len / stride;
    for chunk in x.chunks_exact_mut(block).take(stride) {
        if dir < 0 {
            if stride2 != 0 {
                exp_rotation1(chunk, stride2, s, c);
            }
            exp_rotation1(chunk, 1, c, s);
        } else {
            exp_rotation1(chunk, 1, c, s.wrapping_neg());
            if stride2 != 0 {
                exp_rotation1(chunk, stride2, s, c.wrapping_neg());
            }
        }
    }
}

/// Scales pulse vector `iy` with energy `ryy` to norm `gain` (Q15) into `x`.
fn normalise_residual(iy: &[i32], x: &mut [i16], ryy: i32, gain: i16) {
    let k = celt_ilog2(ryy) >> 1;
    let t = vshr32(ryy, 2 * (k - 7));
    let g = mult16_16_p15(celt_rsqrt_norm(t), gain) as i16;
    for (out, &y) in x.iter_mut().zip(iy) {
        *out = pshr32(mult16_16(g, y as i16), (k + 1) as u32) as i16;
    }
}

/// Bit `i` is set when block `i` of the `b` interleaved blocks of `iy`
/// received at least one pulse.
#[must_use]
pub fn extract_collapse_mask(iy: &[i32], b: usize) -> u32 {
    if b <= 1 {
        return 1;
    }
    let n0 = iy.len() / b;
    iy.chunks_exact(n0)
        .take(b)
        .enumerate()
        .filter(|(_, block)| block.iter().any(|&v| v != 0))
        .fold(0, |mask, (i, _)| mask | (1 << i))
}

/// Decodes a band shape of `k` pulses into `x` at norm `gain` and returns
/// its collapse mask.
///
/// # Errors
///
/// * If the codeword index cannot be read
pub fn alg_unquant(
    x: &mut [i16],
    k: i32,
    spread: Spread,
    b: usize,
    dec: &mut RangeDecoder<'_>,
    gain: i16,
) -> Result<u32> {
    let n = x.len();
    debug_assert!(k > 0, "alg_unquant needs at least one pulse");
    debug_assert!(n > 1, "alg_unquant needs at least two dimensions");
    let mut iy = [0_i32; super::cwrs::MAX_PVQ_N];
    let iy = &mut iy[..n];
    let ryy = decode_pulses(iy, n, k as usize, dec)?;
    normalise_residual(iy, x, ryy, gain);
    exp_rotation(x, -1, b, k, spread);
    Ok(extract_collapse_mask(iy, b))
}

/// Rescales `x` to norm `gain` (Q15).
pub fn renormalise_vector(x: &mut [i16], gain: i16) {
    let e = 1 + celt_inner_prod(x, x);
    let k = celt_ilog2(e) >> 1;
    let t = vshr32(e, 2 * (k - 7));
    let g = mult16_16_p15(celt_rsqrt_norm(t), gain) as i16;
    for v in x.iter_mut() {
        *v = pshr32(mult16_16(g, *v), (k + 1) as u32) as i16;
    }
}
