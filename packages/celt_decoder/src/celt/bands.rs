//! Band shape decoding.
//!
//! Each band is either PVQ coded directly or split in two halves, with the
//! angle between the halves coded first and the bits shared according to
//! it. Stereo bands are split the same way into mid and side. Bands that
//! get no bits are filled by folding the already decoded spectrum below
//! them, or with noise.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::too_many_arguments,
    clippy::too_many_lines
)]

use crate::error::Result;
use crate::range::{BITRES, RangeDecoder};

use super::cwrs::MAX_PVQ_N;
use super::math::{
    DB_SHIFT, NORM_SCALING, Q15ONE, bitexact_cos, bitexact_log2tan, celt_exp2, celt_exp2_frac,
    celt_ilog2, celt_lcg_rand, celt_rsqrt_norm, celt_sqrt, dual_inner_prod, frac_mul16, mult16_16,
    mult16_16_p15, mult16_16_q14, mult16_16_q15, mult16_32_q15, pshr32, saturate16, shl32, vshr32,
};
use super::mode::{CeltMode, E_MEANS};
use super::rate::{
    Allocation, QTHETA_OFFSET, QTHETA_OFFSET_TWOPHASE, bits2pulses, get_pulses, pulses2bits,
};
use super::vq::{Spread, alg_unquant, renormalise_vector};

const ORDERY_TABLE: [usize; 30] = [
    1, 0, 3, 0, 2, 1, 7, 0, 4, 3, 6, 1, 5, 2, 15, 0, 8, 7, 12, 3, 11, 4, 14, 1, 9, 6, 13, 2, 10, 5,
];

const BIT_INTERLEAVE_TABLE: [u32; 16] = [0, 1, 1, 1, 2, 3, 3, 3, 2, 3, 3, 3, 2, 3, 3, 3];

const BIT_DEINTERLEAVE_TABLE: [u32; 16] = [
    0x00, 0x03, 0x0C, 0x0F, 0x30, 0x33, 0x3C, 0x3F, 0xC0, 0xC3, 0xCC, 0xCF, 0xF0, 0xF3, 0xFC, 0xFF,
];

/// Orders the `stride` interleaved sub-blocks of `x` one after the other,
/// in Hadamard order when `hadamard` is set.
fn deinterleave_hadamard(x: &mut [i16], n0: usize, stride: usize, hadamard: bool) {
    let n = n0 * stride;
    let mut tmp = [0_i16; MAX_PVQ_N];
    for i in 0..stride {
        let base = if hadamard {
            ORDERY_TABLE[stride - 2 + i] * n0
        } else {
            i * n0
        };
        for j in 0..n0 {
            tmp[base + j] = x[j * stride + i];
        }
    }
    x[..n].copy_from_slice(&tmp[..n]);
}

fn interleave_hadamard(x: &mut [i16], n0: usize, stride: usize, hadamard: bool) {
    let n = n0 * stride;
    let mut tmp = [0_i16; MAX_PVQ_N];
    for i in 0..stride {
        let base = if hadamard {
            ORDERY_TABLE[stride - 2 + i] * n0
        } else {
            i * n0
        };
        for j in 0..n0 {
            tmp[j * stride + i] = x[base + j];
        }
    }
    x[..n].copy_from_slice(&tmp[..n]);
}

/// One level of the orthonormal Haar transform over `stride` interleaved
/// sequences of `n0` samples.
pub fn haar1(x: &mut [i16], n0: usize, stride: usize) {
    const INV_SQRT2: i16 = 23170;
    for i in 0..stride {
        for j in 0..n0 >> 1 {
            let a = stride * 2 * j + i;
            let b = stride * (2 * j + 1) + i;
            let t1 = mult16_16(INV_SQRT2, x[a]);
            let t2 = mult16_16(INV_SQRT2, x[b]);
            x[a] = pshr32(t1 + t2, 15) as i16;
            x[b] = pshr32(t1 - t2, 15) as i16;
        }
    }
}

/// Number of steps the split angle is quantized to.
fn compute_qn(n: i32, b: i32, offset: i32, pulse_cap: i32, stereo: bool) -> i32 {
    const EXP2_TABLE8: [i16; 8] = [16384, 17866, 19483, 21247, 23170, 25267, 27554, 30048];
    let mut n2 = 2 * n - 1;
    if stereo && n == 2 {
        n2 -= 1;
    }
    // Keep enough bits for at least one pulse in the side of a hard split.
    let qb = ((b + n2 * offset) / n2)
        .min(b - pulse_cap - (4 << BITRES))
        .min(8 << BITRES);
    if qb < (1 << BITRES >> 1) {
        1
    } else {
        let qn = i32::from(EXP2_TABLE8[(qb & 0x7) as usize]) >> (14 - (qb >> BITRES));
        ((qn + 1) >> 1) << 1
    }
}

/// Restores left and right from mid `x` (scaled by `mid`) and side `y`.
fn stereo_merge(x: &mut [i16], y: &mut [i16], mid: i16) {
    let (xp, side) = dual_inner_prod(y, x, y);
    let xp = mult16_32_q15(mid, xp);
    // mid is Q15 while x and y are Q14.
    let mid2 = mid >> 1;
    let el = mult16_16(mid2, mid2) + side - 2 * xp;
    let er = mult16_16(mid2, mid2) + side + 2 * xp;
    // 6e-4 in Q28.
    if er < 161_061 || el < 161_061 {
        y.copy_from_slice(x);
        return;
    }

    let kl = celt_ilog2(el) >> 1;
    let kr = celt_ilog2(er) >> 1;
    let lgain = celt_rsqrt_norm(vshr32(el, (kl - 7) << 1));
    let rgain = celt_rsqrt_norm(vshr32(er, (kr - 7) << 1));
    let kl = kl.max(7);
    let kr = kr.max(7);

    for (xv, yv) in x.iter_mut().zip(y.iter_mut()) {
        let l = mult16_16_p15(mid, *xv) as i16;
        let r = *yv;
        *xv = pshr32(mult16_16(lgain, l.wrapping_sub(r)), (kl + 1) as u32) as i16;
        *yv = pshr32(mult16_16(rgain, l.wrapping_add(r)), (kr + 1) as u32) as i16;
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SplitResult {
    inv: bool,
    imid: i32,
    iside: i32,
    delta: i32,
    itheta: i32,
    qalloc: i32,
}

/// Decoding state shared across the recursive band split.
struct BandContext<'m, 'd, 'b> {
    mode: &'m CeltMode,
    dec: &'d mut RangeDecoder<'b>,
    band: usize,
    intensity: usize,
    spread: Spread,
    tf_change: i32,
    remaining_bits: i32,
    seed: u32,
    disable_inv: bool,
}

impl BandContext<'_, '_, '_> {
    /// Single-bin band: only signs are coded.
    fn quant_band_n1(
        &mut self,
        x: &mut [i16],
        y: Option<&mut [i16]>,
        lowband_out: Option<&mut [i16]>,
    ) -> Result<u32> {
        x[0] = self.decode_sign()?;
        if let Some(y) = y {
            y[0] = self.decode_sign()?;
        }
        if let Some(out) = lowband_out {
            out[0] = x[0] >> 4;
        }
        Ok(1)
    }

    fn decode_sign(&mut self) -> Result<i16> {
        let mut negative = false;
        if self.remaining_bits >= 1 << BITRES {
            negative = self.dec.ec_dec_bits(1)? != 0;
            self.remaining_bits -= 1 << BITRES;
        }
        Ok(if negative {
            -NORM_SCALING
        } else {
            NORM_SCALING
        })
    }

    /// Decodes the split angle of an `n`-bin half pair and charges its cost
    /// to `b`.
    fn compute_theta(
        &mut self,
        n: i32,
        b: &mut i32,
        big_b: u32,
        b0: u32,
        lm: i32,
        stereo: bool,
        fill: &mut u32,
    ) -> Result<SplitResult> {
        let i = self.band;
        let pulse_cap = i32::from(self.mode.log_n[i]) + lm * (1 << BITRES);
        let offset = (pulse_cap >> 1)
            - if stereo && n == 2 {
                QTHETA_OFFSET_TWOPHASE
            } else {
                QTHETA_OFFSET
            };
        let mut qn = compute_qn(n, *b, offset, pulse_cap, stereo);
        if stereo && i >= self.intensity {
            qn = 1;
        }

        let tell = self.dec.ec_tell_frac() as i32;
        let mut itheta = 0;
        let mut inv = false;
        if qn != 1 {
            if stereo && n > 2 {
                // Stepped pdf: the middle half of the range is three times
                // as likely.
                let p0 = 3;
                let x0 = qn / 2;
                let ft = (p0 * (x0 + 1) + x0) as u32;
                let fs = self.dec.ec_decode(ft)? as i32;
                let x = if fs < (x0 + 1) * p0 {
                    fs / p0
                } else {
                    x0 + 1 + (fs - (x0 + 1) * p0)
                };
                let (fl, fh) = if x <= x0 {
                    (p0 * x, p0 * (x + 1))
                } else {
                    ((x - 1 - x0) + (x0 + 1) * p0, (x - x0) + (x0 + 1) * p0)
                };
                self.dec.ec_dec_update(fl as u32, fh as u32, ft)?;
                itheta = x;
            } else if b0 > 1 || stereo {
                itheta = self.dec.ec_dec_uint((qn + 1) as u32)? as i32;
            } else {
                // Triangular pdf.
                let half = qn >> 1;
                let ft = (half + 1) * (half + 1);
                let fm = self.dec.ec_decode(ft as u32)? as i32;
                let (fl, fs);
                if fm < (half * (half + 1)) >> 1 {
                    itheta = ((8 * fm as u32 + 1).isqrt() as i32 - 1) >> 1;
                    fs = itheta + 1;
                    fl = (itheta * (itheta + 1)) >> 1;
                } else {
                    itheta =
                        (2 * (qn + 1) - (8 * (ft - fm - 1) as u32 + 1).isqrt() as i32) >> 1;
                    fs = qn + 1 - itheta;
                    fl = ft - (((qn + 1 - itheta) * (qn + 2 - itheta)) >> 1);
                }
                self.dec
                    .ec_dec_update(fl as u32, (fl + fs) as u32, ft as u32)?;
            }
            debug_assert!(itheta >= 0);
            itheta = itheta * 16384 / qn;
        } else if stereo {
            if *b > 2 << BITRES && self.remaining_bits > 2 << BITRES {
                inv = self.dec.ec_dec_bit_logp(2)?;
            }
            if self.disable_inv {
                inv = false;
            }
        }
        let qalloc = self.dec.ec_tell_frac() as i32 - tell;
        *b -= qalloc;

        let (imid, iside, delta);
        if itheta == 0 {
            imid = 32767;
            iside = 0;
            *fill &= (1 << big_b) - 1;
            delta = -16384;
        } else if itheta == 16384 {
            imid = 0;
            iside = 32767;
            *fill &= ((1 << big_b) - 1) << big_b;
            delta = 16384;
        } else {
            imid = i32::from(bitexact_cos(itheta as i16));
            iside = i32::from(bitexact_cos((16384 - itheta) as i16));
            // Bits to move from mid to side, from log2(side/mid).
            delta = frac_mul16((n - 1) << 7, bitexact_log2tan(iside, imid));
        }

        Ok(SplitResult {
            inv,
            imid,
            iside,
            delta,
            itheta,
            qalloc,
        })
    }

    /// Recursively decodes the shape of one band (or one half of it) with
    /// norm `gain`, returning its collapse mask.
    fn quant_partition(
        &mut self,
        x: &mut [i16],
        mut b: i32,
        mut big_b: u32,
        lowband: Option<&[i16]>,
        mut lm: i32,
        gain: i16,
        mut fill: u32,
    ) -> Result<u32> {
        let n = x.len();
        let b0 = big_b;
        let i = self.band;
        let cache = self.mode.cache.bits_for(i, lm);

        if lm != -1 && b > i32::from(cache[cache[0] as usize]) + 12 && n > 2 {
            let half = n >> 1;
            let n_half = half as i32;
            lm -= 1;
            if big_b == 1 {
                fill = (fill & 1) | (fill << 1);
            }
            big_b = (big_b + 1) >> 1;

            let split = self.compute_theta(n_half, &mut b, big_b, b0, lm, false, &mut fill)?;
            let mid = split.imid as i16;
            let side = split.iside as i16;
            let itheta = split.itheta;
            let mut delta = split.delta;

            // Transients give fewer bits to the quieter half.
            if b0 > 1 && itheta & 0x3fff != 0 {
                if itheta > 8192 {
                    delta -= delta >> (4 - lm);
                } else {
                    delta = (delta + ((n_half << BITRES) >> (5 - lm))).min(0);
                }
            }
            let mut mbits = ((b - delta) / 2).min(b).max(0);
            let mut sbits = b - mbits;
            self.remaining_bits -= split.qalloc;

            let (x_mid, x_side) = x.split_at_mut(half);
            let lowband_side = lowband.map(|l| &l[half..]);
            let mid_gain = mult16_16_p15(gain, mid) as i16;
            let side_gain = mult16_16_p15(gain, side) as i16;

            let mut rebalance = self.remaining_bits;
            let cm = if mbits >= sbits {
                let mut cm = self.quant_partition(x_mid, mbits, big_b, lowband, lm, mid_gain, fill)?;
                rebalance = mbits - (rebalance - self.remaining_bits);
                if rebalance > 3 << BITRES && itheta != 0 {
                    sbits += rebalance - (3 << BITRES);
                }
                cm |= self.quant_partition(
                    x_side,
                    sbits,
                    big_b,
                    lowband_side,
                    lm,
                    side_gain,
                    fill >> big_b,
                )? << (b0 >> 1);
                cm
            } else {
                let mut cm = self.quant_partition(
                    x_side,
                    sbits,
                    big_b,
                    lowband_side,
                    lm,
                    side_gain,
                    fill >> big_b,
                )? << (b0 >> 1);
                rebalance = sbits - (rebalance - self.remaining_bits);
                if rebalance > 3 << BITRES && itheta != 16384 {
                    mbits += rebalance - (3 << BITRES);
                }
                cm |= self.quant_partition(x_mid, mbits, big_b, lowband, lm, mid_gain, fill)?;
                cm
            };
            return Ok(cm);
        }

        // Leaf: spend the budget on pulses without ever going over.
        let mut q = bits2pulses(self.mode, i, lm, b);
        let mut curr_bits = pulses2bits(self.mode, i, lm, q);
        self.remaining_bits -= curr_bits;
        while self.remaining_bits < 0 && q > 0 {
            self.remaining_bits += curr_bits;
            q -= 1;
            curr_bits = pulses2bits(self.mode, i, lm, q);
            self.remaining_bits -= curr_bits;
        }

        if q != 0 {
            return alg_unquant(x, get_pulses(q), self.spread, big_b as usize, self.dec, gain);
        }

        // No pulses: fold or inject noise.
        let cm_mask = ((1_u64 << big_b) - 1) as u32;
        fill &= cm_mask;
        if fill == 0 {
            x.fill(0);
            return Ok(0);
        }
        let cm = if let Some(lowband) = lowband {
            // About 48 dB below the folded level (1/256 in Q10).
            for (v, &l) in x.iter_mut().zip(lowband) {
                self.seed = celt_lcg_rand(self.seed);
                let tmp = if self.seed & 0x8000 != 0 { 4 } else { -4 };
                *v = l.wrapping_add(tmp);
            }
            fill
        } else {
            for v in x.iter_mut() {
                self.seed = celt_lcg_rand(self.seed);
                *v = ((self.seed as i32) >> 20) as i16;
            }
            cm_mask
        };
        renormalise_vector(x, gain);
        Ok(cm)
    }

    /// Decodes a mono band (or the mid of a stereo band), applying the
    /// time-frequency changes around the split.
    fn quant_band(
        &mut self,
        x: &mut [i16],
        b: i32,
        mut big_b: u32,
        lowband: Option<&[i16]>,
        lm: i32,
        lowband_out: Option<&mut [i16]>,
        gain: i16,
        mut fill: u32,
    ) -> Result<u32> {
        let n0 = x.len();
        let mut n_b = n0 / big_b as usize;
        let long_blocks = big_b == 1;
        let mut tf_change = self.tf_change;

        if n0 == 1 {
            return self.quant_band_n1(x, None, lowband_out);
        }

        let recombine = tf_change.max(0) as u32;

        let mut scratch = [0_i16; MAX_PVQ_N];
        let mut lowband = match lowband {
            Some(l) => {
                scratch[..n0].copy_from_slice(&l[..n0]);
                Some(&mut scratch[..n0])
            }
            None => None,
        };

        // Trade time resolution for frequency resolution.
        for k in 0..recombine {
            if let Some(l) = lowband.as_deref_mut() {
                haar1(l, n0 >> k, 1 << k);
            }
            fill = BIT_INTERLEAVE_TABLE[(fill & 0xF) as usize]
                | (BIT_INTERLEAVE_TABLE[(fill >> 4) as usize] << 2);
        }
        big_b >>= recombine;
        n_b <<= recombine;

        // And the other way round.
        let mut time_divide = 0;
        while n_b & 1 == 0 && tf_change < 0 {
            if let Some(l) = lowband.as_deref_mut() {
                haar1(l, n_b, big_b as usize);
            }
            fill |= fill << big_b;
            big_b <<= 1;
            n_b >>= 1;
            time_divide += 1;
            tf_change += 1;
        }
        let b0 = big_b;
        let n_b0 = n_b;

        // Sub-blocks in time order.
        if b0 > 1 {
            if let Some(l) = lowband.as_deref_mut() {
                deinterleave_hadamard(l, n_b >> recombine, (b0 as usize) << recombine, long_blocks);
            }
        }

        let mut cm = self.quant_partition(x, b, big_b, lowband.as_deref(), lm, gain, fill)?;

        if b0 > 1 {
            interleave_hadamard(x, n_b >> recombine, (b0 as usize) << recombine, long_blocks);
        }

        n_b = n_b0;
        big_b = b0;
        for _ in 0..time_divide {
            big_b >>= 1;
            n_b <<= 1;
            cm |= cm >> big_b;
            haar1(x, n_b, big_b as usize);
        }

        for k in 0..recombine {
            cm = BIT_DEINTERLEAVE_TABLE[cm as usize];
            haar1(x, n0 >> k, 1 << k);
        }
        big_b <<= recombine;

        // Folding source for the bands above, scaled by sqrt(N0).
        if let Some(out) = lowband_out {
            let scale = celt_sqrt(shl32(n0 as i32, 22)) as i16;
            for (o, &v) in out.iter_mut().zip(x.iter()) {
                *o = mult16_16_q15(scale, v) as i16;
            }
        }
        Ok(cm & ((1 << big_b) - 1))
    }

    fn quant_band_stereo(
        &mut self,
        x: &mut [i16],
        y: &mut [i16],
        b: i32,
        big_b: u32,
        lowband: Option<&[i16]>,
        lm: i32,
        lowband_out: Option<&mut [i16]>,
        fill: u32,
    ) -> Result<u32> {
        let n = x.len();
        if n == 1 {
            return self.quant_band_n1(x, Some(y), lowband_out);
        }

        let orig_fill = fill;
        let mut b = b;
        let mut fill = fill;
        let split = self.compute_theta(n as i32, &mut b, big_b, big_b, lm, true, &mut fill)?;
        let mid = split.imid as i16;
        let side = split.iside as i16;
        let itheta = split.itheta;

        let cm;
        if n == 2 {
            // Mid and side are orthogonal, so the side costs one sign bit.
            let sbits = if itheta != 0 && itheta != 16384 {
                1 << BITRES
            } else {
                0
            };
            let mbits = b - sbits;
            let swap = itheta > 8192;
            self.remaining_bits -= split.qalloc + sbits;

            let mut sign = 0;
            if sbits != 0 {
                sign = self.dec.ec_dec_bits(1)? as i32;
            }
            let sign = 1 - 2 * sign;
            let (x2, y2) = if swap {
                (&mut *y, &mut *x)
            } else {
                (&mut *x, &mut *y)
            };
            // orig_fill: a hard split at 16384 cleared the bits the side
            // folds from.
            cm = self.quant_band(x2, mbits, big_b, lowband, lm, lowband_out, Q15ONE, orig_fill)?;
            y2[0] = (-sign * i32::from(x2[1])) as i16;
            y2[1] = (sign * i32::from(x2[0])) as i16;

            x[0] = mult16_16_q15(mid, x[0]) as i16;
            x[1] = mult16_16_q15(mid, x[1]) as i16;
            y[0] = mult16_16_q15(side, y[0]) as i16;
            y[1] = mult16_16_q15(side, y[1]) as i16;
            for j in 0..2 {
                let tmp = x[j];
                x[j] = tmp.wrapping_sub(y[j]);
                y[j] = tmp.wrapping_add(y[j]);
            }
        } else {
            let mut mbits = ((b - split.delta) / 2).min(b).max(0);
            let mut sbits = b - mbits;
            self.remaining_bits -= split.qalloc;

            let mut rebalance = self.remaining_bits;
            // The mid is decoded unscaled since it is the folding source.
            if mbits >= sbits {
                let mut c =
                    self.quant_band(x, mbits, big_b, lowband, lm, lowband_out, Q15ONE, fill)?;
                rebalance = mbits - (rebalance - self.remaining_bits);
                if rebalance > 3 << BITRES && itheta != 0 {
                    sbits += rebalance - (3 << BITRES);
                }
                // The side never folds: the high half of fill is zero here.
                c |= self.quant_band(y, sbits, big_b, None, lm, None, side, fill >> big_b)?;
                cm = c;
            } else {
                let mut c = self.quant_band(y, sbits, big_b, None, lm, None, side, fill >> big_b)?;
                rebalance = sbits - (rebalance - self.remaining_bits);
                if rebalance > 3 << BITRES && itheta != 16384 {
                    mbits += rebalance - (3 << BITRES);
                }
                c |= self.quant_band(x, mbits, big_b, lowband, lm, lowband_out, Q15ONE, fill)?;
                cm = c;
            }
        }

        if n != 2 {
            stereo_merge(x, y, mid);
        }
        if split.inv {
            for v in y.iter_mut() {
                *v = v.wrapping_neg();
            }
        }
        Ok(cm)
    }
}

/// Per-frame parameters of [`quant_all_bands`].
#[derive(Debug, Clone, Copy)]
pub struct BandParams<'a> {
    pub start: usize,
    pub end: usize,
    pub lm: usize,
    pub short_blocks: bool,
    pub spread: Spread,
    pub tf_res: &'a [i32],
    /// Frame budget in 1/8 bits, less the anti-collapse reservation.
    pub total_bits: i32,
    pub disable_inv: bool,
}

/// Decodes the normalized shapes of bands `start..end` into `x` (and `y` for
/// stereo), recording per-band collapse masks.
///
/// `seed` is the noise generator state carried between frames.
///
/// # Errors
///
/// * If the range decoder rejects a read
pub fn quant_all_bands(
    mode: &CeltMode,
    params: &BandParams<'_>,
    alloc: &Allocation,
    x: &mut [i16],
    mut y: Option<&mut [i16]>,
    collapse_masks: &mut [u8],
    dec: &mut RangeDecoder<'_>,
    seed: &mut u32,
) -> Result<()> {
    let BandParams {
        start,
        end,
        lm,
        short_blocks,
        spread,
        tf_res,
        total_bits,
        disable_inv,
    } = *params;
    let m = 1_usize << lm;
    let channels = if y.is_some() { 2 } else { 1 };
    let big_b: u32 = if short_blocks { m as u32 } else { 1 };
    let band_bin = |band: usize| m * mode.band_start(band);
    let norm_offset = band_bin(start);
    // One band past the last folded one: with a late start band the hybrid
    // fold copy and the second band's source run past the first band.
    let norm_len = band_bin(mode.nb_ebands) - norm_offset;

    // Folding sources: the scaled output of every band but the last, per
    // channel.
    let mut norm_buf = vec![0_i16; channels * norm_len];
    let (norm, norm2) = norm_buf.split_at_mut(norm_len);

    let mut balance = alloc.balance;
    let mut dual_stereo = alloc.dual_stereo;
    let mut lowband_offset = 0;
    let mut update_lowband = true;
    let mut ctx = BandContext {
        mode,
        dec,
        band: start,
        intensity: alloc.intensity,
        spread,
        tf_change: 0,
        remaining_bits: 0,
        seed: *seed,
        disable_inv,
    };

    for i in start..end {
        ctx.band = i;
        let last = i == end - 1;
        let band_range = band_bin(i)..band_bin(i + 1);
        let n = band_range.len();
        debug_assert!(n > 0);
        let tell = ctx.dec.ec_tell_frac() as i32;

        if i != start {
            balance -= tell;
        }
        let remaining_bits = total_bits - tell - 1;
        ctx.remaining_bits = remaining_bits;
        let b = if i < alloc.coded_bands {
            let curr_balance = balance / 3.min(alloc.coded_bands as i32 - i as i32);
            (remaining_bits + 1)
                .min(alloc.pulses[i] + curr_balance)
                .clamp(0, 16383)
        } else {
            0
        };

        if (band_bin(i) >= n + band_bin(start) || i == start + 1)
            && (update_lowband || lowband_offset == 0)
        {
            lowband_offset = i;
        }
        if i == start + 1 {
            special_hybrid_folding(mode, norm, norm2, start, m, dual_stereo);
        }

        ctx.tf_change = tf_res[i];

        // Conservative collapse masks of the region we fold from.
        let mut effective_lowband = None;
        let (mut x_cm, mut y_cm);
        if lowband_offset != 0 && (spread != Spread::Aggressive || big_b > 1 || ctx.tf_change < 0)
        {
            let eff = (band_bin(lowband_offset) as isize - norm_offset as isize - n as isize)
                .max(0) as usize;
            effective_lowband = Some(eff);
            let mut fold_start = lowband_offset;
            loop {
                fold_start -= 1;
                if band_bin(fold_start) <= eff + norm_offset {
                    break;
                }
            }
            let mut fold_end = lowband_offset - 1;
            loop {
                fold_end += 1;
                if !(fold_end < i && band_bin(fold_end) < eff + norm_offset + n) {
                    break;
                }
            }
            x_cm = 0_u32;
            y_cm = 0_u32;
            for fold_i in fold_start..fold_end.max(fold_start + 1) {
                x_cm |= u32::from(collapse_masks[fold_i * channels]);
                y_cm |= u32::from(collapse_masks[fold_i * channels + channels - 1]);
            }
        } else {
            // Noise fill, so every block ends up non-zero.
            x_cm = (1 << big_b) - 1;
            y_cm = x_cm;
        }

        if dual_stereo && i == alloc.intensity {
            // Intensity takes over from here: fold from the mid.
            dual_stereo = false;
            let upto = band_bin(i) - norm_offset;
            for (a, &b2) in norm[..upto].iter_mut().zip(norm2.iter()) {
                *a = ((i32::from(*a) + i32::from(b2)) >> 1) as i16;
            }
        }

        let out_range = band_bin(i) - norm_offset..band_bin(i) - norm_offset + n;
        let lowband_x = effective_lowband.map(|eff| norm[eff..eff + n].to_vec());
        let xb = &mut x[band_range.clone()];
        let lm_i = lm as i32;
        if let Some(y) = y.as_deref_mut().filter(|_| dual_stereo) {
            let lowband_y = effective_lowband.map(|eff| norm2[eff..eff + n].to_vec());
            let (out_x, out_y) = if last {
                (None, None)
            } else {
                (
                    Some(&mut norm[out_range.clone()]),
                    Some(&mut norm2[out_range]),
                )
            };
            x_cm = ctx.quant_band(xb, b / 2, big_b, lowband_x.as_deref(), lm_i, out_x, Q15ONE, x_cm)?;
            y_cm = ctx.quant_band(
                &mut y[band_range],
                b / 2,
                big_b,
                lowband_y.as_deref(),
                lm_i,
                out_y,
                Q15ONE,
                y_cm,
            )?;
        } else {
            let out = if last { None } else { Some(&mut norm[out_range]) };
            x_cm = if let Some(y) = y.as_deref_mut() {
                ctx.quant_band_stereo(
                    xb,
                    &mut y[band_range],
                    b,
                    big_b,
                    lowband_x.as_deref(),
                    lm_i,
                    out,
                    x_cm | y_cm,
                )?
            } else {
                ctx.quant_band(xb, b, big_b, lowband_x.as_deref(), lm_i, out, Q15ONE, x_cm | y_cm)?
            };
            y_cm = x_cm;
        }
        collapse_masks[i * channels] = x_cm as u8;
        collapse_masks[i * channels + channels - 1] = y_cm as u8;
        balance += alloc.pulses[i] + tell;

        // Keep moving the folding source while bands have at least one bit
        // per sample.
        update_lowband = b > (n as i32) << BITRES;
    }

    *seed = ctx.seed;
    Ok(())
}

/// Duplicates the end of the first band's folding data so that the second
/// band can fold from it when the first band is narrower.
fn special_hybrid_folding(
    mode: &CeltMode,
    norm: &mut [i16],
    norm2: &mut [i16],
    start: usize,
    m: usize,
    dual_stereo: bool,
) {
    let n1 = m * mode.band_width(start) as usize;
    let n2 = m * mode.band_width(start + 1) as usize;
    if n2 > n1 {
        norm.copy_within(2 * n1 - n2..n1, n1);
        if dual_stereo {
            norm2.copy_within(2 * n1 - n2..n1, n1);
        }
    }
}

/// Refills short blocks that received no pulses with noise no louder than
/// the two previous frames.
pub fn anti_collapse(
    mode: &CeltMode,
    x: &mut [i16],
    collapse_masks: &[u8],
    lm: usize,
    channels: usize,
    size: usize,
    start: usize,
    end: usize,
    log_e: &[i16],
    prev1_log_e: &[i16],
    prev2_log_e: &[i16],
    pulses: &[i32],
    mut seed: u32,
) {
    let nb = mode.nb_ebands;
    for i in start..end {
        let n0 = mode.band_width(i);
        let depth = ((1 + pulses[i]) / n0) >> lm;

        let thresh32 = celt_exp2(-((depth << (DB_SHIFT - BITRES)) as i16)) >> 1;
        let thresh = mult16_32_q15(16384, thresh32.min(32767)) as i16;
        let t = n0 << lm;
        let shift = celt_ilog2(t) >> 1;
        let sqrt_1 = celt_rsqrt_norm(shl32(t, ((7 - shift) << 1) as u32));

        for c in 0..channels {
            let mut prev1 = prev1_log_e[c * nb + i];
            let mut prev2 = prev2_log_e[c * nb + i];
            if channels == 1 {
                prev1 = prev1.max(prev1_log_e[nb + i]);
                prev2 = prev2.max(prev2_log_e[nb + i]);
            }
            let ediff = (i32::from(log_e[c * nb + i]) - i32::from(prev1.min(prev2))).max(0);

            let mut r: i16 = if ediff < 16384 {
                let r32 = celt_exp2(-(ediff as i16)) >> 1;
                (2 * r32.min(16383)) as i16
            } else {
                0
            };
            if lm == 3 {
                r = mult16_16_q14(23170, r.min(23169)) as i16;
            }
            r = thresh.min(r) >> 1;
            r = (mult16_16_q15(sqrt_1, r) >> shift) as i16;

            let band = &mut x[c * size + (mode.band_start(i) << lm)..][..(n0 as usize) << lm];
            let mut renormalize = false;
            for k in 0..1 << lm {
                if u32::from(collapse_masks[i * channels + c]) & (1 << k) == 0 {
                    for j in 0..n0 as usize {
                        seed = celt_lcg_rand(seed);
                        band[(j << lm) + k] = if seed & 0x8000 != 0 { r } else { -r };
                    }
                    renormalize = true;
                }
            }
            if renormalize {
                renormalise_vector(band, Q15ONE);
            }
        }
    }
}

/// Scales the unit-norm band shapes in `x` by their decoded energies into
/// the MDCT input `freq`, zeroing everything outside the coded bands.
pub fn denormalise_bands(
    mode: &CeltMode,
    x: &[i16],
    freq: &mut [i32],
    band_log_e: &[i16],
    start: usize,
    end: usize,
    m: usize,
    downsample: usize,
    silence: bool,
) {
    let n = m * mode.short_mdct_size;
    let mut bound = m * mode.band_start(end);
    if downsample != 1 {
        bound = bound.min(n / downsample);
    }
    let (start, end) = if silence {
        bound = 0;
        (0, 0)
    } else {
        (start, end)
    };

    freq[..m * mode.band_start(start)].fill(0);
    for i in start..end {
        let range = m * mode.band_start(i)..m * mode.band_start(i + 1);
        let lg = saturate16(i32::from(band_log_e[i]) + (i32::from(E_MEANS[i]) << 6));
        // Integer part as a shift, fraction through exp2.
        let mut shift = 16 - (i32::from(lg) >> DB_SHIFT);
        let mut g;
        if shift > 31 {
            shift = 0;
            g = 0;
        } else {
            g = celt_exp2_frac(lg & ((1 << DB_SHIFT) - 1));
        }
        if shift < 0 {
            // Cap at 18 on lg: only reachable with a corrupt stream.
            if shift <= -2 {
                g = 16384;
                shift = -2;
            }
            for (f, &v) in freq[range.clone()].iter_mut().zip(&x[range]) {
                *f = shl32(mult16_16(v, g), (-shift) as u32);
            }
        } else {
            for (f, &v) in freq[range.clone()].iter_mut().zip(&x[range]) {
                *f = mult16_16(v, g) >> shift;
            }
        }
    }
    debug_assert!(start <= end);
    freq[bound..n].fill(0);
}
