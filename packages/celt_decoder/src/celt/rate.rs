//! Band bit allocation.
//!
//! Turns the frame's remaining bit budget into per-band shape budgets, fine
//! energy depths and the stereo parameters, reading the few allocation
//! decisions the encoder signals explicitly (band skipping, intensity and
//! dual stereo) along the way.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::error::Result;
use crate::range::{BITRES, RangeDecoder};

use super::mode::{CeltMode, NB_EBANDS};

pub const FINE_OFFSET: i32 = 21;
pub const MAX_FINE_BITS: i32 = 8;
pub const MAX_PSEUDO: i32 = 40;
pub const LOG_MAX_PSEUDO: i32 = 6;
pub const CELT_MAX_PULSES: i32 = 128;
pub const QTHETA_OFFSET: i32 = 4;
pub const QTHETA_OFFSET_TWOPHASE: i32 = 16;

const ALLOC_STEPS: i32 = 6;
const BITRES_I: i32 = BITRES as i32;

/// `log2` of `1..=24` in 1/8 bits, rounded up; the cost of coding an
/// intensity band index.
const LOG2_FRAC_TABLE: [u8; 24] = [
    0, 8, 13, 16, 19, 21, 23, 24, 26, 27, 28, 29, 30, 31, 32, 32, 33, 34, 34, 35, 36, 36, 37, 37,
];

/// Largest `n` such that `V(n, k)` fits in 32 bits, for `k < 15`.
const MAX_N: [i32; 15] = [
    32767, 32767, 32767, 1476, 283, 109, 60, 40, 29, 24, 20, 18, 16, 14, 13,
];
/// Largest `k` such that `V(n, k)` fits in 32 bits, for `n < 15`.
const MAX_K: [i32; 15] = [
    32767, 32767, 32767, 32767, 1172, 238, 95, 53, 36, 27, 22, 18, 16, 15, 13,
];

/// Pulse count of pseudo-pulse index `i`: linear up to 8, then eight steps
/// per octave.
#[must_use]
pub const fn get_pulses(i: i32) -> i32 {
    if i < 8 { i } else { (8 + (i & 7)) << ((i >> 3) - 1) }
}

/// Whether the PVQ codebook of `n` dimensions and `k` pulses can be
/// enumerated with 32-bit indices.
#[must_use]
pub const fn fits_in32(n: i32, k: i32) -> bool {
    if n >= 14 {
        if k >= 14 { false } else { n <= MAX_N[k as usize] }
    } else {
        k <= MAX_K[n as usize]
    }
}

/// Largest pseudo-pulse count whose cost is closest to `bits` (1/8 bits).
#[must_use]
pub fn bits2pulses(mode: &CeltMode, band: usize, lm: i32, bits: i32) -> i32 {
    let cache = mode.cache.bits_for(band, lm);
    let mut lo = 0_i32;
    let mut hi = i32::from(cache[0]);
    let bits = bits - 1;
    for _ in 0..LOG_MAX_PSEUDO {
        let mid = (lo + hi + 1) >> 1;
        if i32::from(cache[mid as usize]) >= bits {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    let below = if lo == 0 { -1 } else { i32::from(cache[lo as usize]) };
    if bits - below <= i32::from(cache[hi as usize]) - bits {
        lo
    } else {
        hi
    }
}

/// Cost in 1/8 bits of coding `pulses` pseudo-pulses in `band`.
#[must_use]
pub fn pulses2bits(mode: &CeltMode, band: usize, lm: i32, pulses: i32) -> i32 {
    if pulses == 0 {
        0
    } else {
        i32::from(mode.cache.bits_for(band, lm)[pulses as usize]) + 1
    }
}

/// Per-band allocation ceilings in 1/8 bits.
#[must_use]
pub fn init_caps(mode: &CeltMode, lm: usize, channels: usize) -> [i32; NB_EBANDS] {
    let c = channels as i32;
    let row = NB_EBANDS * (2 * lm + channels - 1);
    std::array::from_fn(|i| {
        let n = mode.band_width(i) << lm;
        ((i32::from(mode.cache.caps[row + i]) + 64) * c * n) >> 2
    })
}

/// Result of [`compute_allocation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Bands past this one get no shape bits.
    pub coded_bands: usize,
    /// Bits left over after the last coded band, carried into band coding.
    pub balance: i32,
    /// First band coded as intensity stereo, or 0 when intensity is off.
    pub intensity: usize,
    pub dual_stereo: bool,
    /// Shape budget per band in 1/8 bits.
    pub pulses: [i32; NB_EBANDS],
    /// Fine energy bits per band and channel.
    pub fine_quant: [i32; NB_EBANDS],
    /// Whether each band gets a bit in the first finalise pass.
    pub fine_priority: [i32; NB_EBANDS],
}

/// Splits `total` 1/8 bits between the bands `start..end`.
///
/// `offsets` are the dynamic allocation boosts and `cap` the ceilings from
/// [`init_caps`].
///
/// # Errors
///
/// * If reading a signalled allocation decision fails
#[allow(clippy::too_many_arguments)]
pub fn compute_allocation(
    mode: &CeltMode,
    start: usize,
    end: usize,
    offsets: &[i32],
    cap: &[i32],
    alloc_trim: i32,
    total: i32,
    channels: usize,
    lm: usize,
    dec: &mut RangeDecoder<'_>,
) -> Result<Allocation> {
    let c = channels as i32;
    let lm_i = lm as i32;
    let len = mode.nb_ebands;
    let mut total = total.max(0);

    let skip_rsv = if total >= 1 << BITRES { 1 << BITRES } else { 0 };
    total -= skip_rsv;
    let mut intensity_rsv = 0;
    let mut dual_stereo_rsv = 0;
    if channels == 2 {
        intensity_rsv = i32::from(LOG2_FRAC_TABLE[end - start]);
        if intensity_rsv > total {
            intensity_rsv = 0;
        } else {
            total -= intensity_rsv;
            dual_stereo_rsv = if total >= 1 << BITRES { 1 << BITRES } else { 0 };
            total -= dual_stereo_rsv;
        }
    }

    let mut thresh = [0_i32; NB_EBANDS];
    let mut trim_offset = [0_i32; NB_EBANDS];
    for j in start..end {
        let n = mode.band_width(j);
        // Below this a band is not worth coding.
        thresh[j] = (c << BITRES).max(((3 * n) << lm << BITRES) >> 4);
        trim_offset[j] =
            (c * n * (alloc_trim - 5 - lm_i) * (end - j - 1) as i32 * (1 << (lm_i + BITRES_I)))
                >> 6;
        // Single-bin bands at LM=0 need a bit less.
        if n << lm == 1 {
            trim_offset[j] -= c << BITRES;
        }
    }

    let vector_bits = |row: usize, j: usize| {
        (c * mode.band_width(j) * i32::from(mode.alloc_vectors[row * len + j])) << lm >> 2
    };

    // Highest allocation vector that fits.
    let mut lo = 1_i32;
    let mut hi = mode.nb_alloc_vectors as i32 - 1;
    loop {
        let mid = (lo + hi) >> 1;
        let mut done = false;
        let mut psum = 0;
        for j in (start..end).rev() {
            let mut bits = vector_bits(mid as usize, j);
            if bits > 0 {
                bits = (bits + trim_offset[j]).max(0);
            }
            bits += offsets[j];
            if bits >= thresh[j] || done {
                done = true;
                psum += bits.min(cap[j]);
            } else if bits >= c << BITRES {
                psum += c << BITRES;
            }
        }
        if psum > total {
            hi = mid - 1;
        } else {
            lo = mid + 1;
        }
        if lo > hi {
            break;
        }
    }
    hi = lo;
    lo -= 1;

    let mut bits1 = [0_i32; NB_EBANDS];
    let mut bits2 = [0_i32; NB_EBANDS];
    let mut skip_start = start;
    for j in start..end {
        let mut b1 = vector_bits(lo as usize, j);
        let mut b2 = if hi as usize >= mode.nb_alloc_vectors {
            cap[j]
        } else {
            vector_bits(hi as usize, j)
        };
        if b1 > 0 {
            b1 = (b1 + trim_offset[j]).max(0);
        }
        if b2 > 0 {
            b2 = (b2 + trim_offset[j]).max(0);
        }
        if lo > 0 {
            b1 += offsets[j];
        }
        b2 += offsets[j];
        if offsets[j] > 0 {
            skip_start = j;
        }
        bits1[j] = b1;
        bits2[j] = (b2 - b1).max(0);
    }

    let reserves = Reserves {
        skip: skip_rsv,
        intensity: intensity_rsv,
        dual_stereo: dual_stereo_rsv,
    };
    interp_bits2pulses(
        mode,
        start,
        end,
        skip_start,
        &bits1,
        &bits2,
        &thresh,
        cap,
        total,
        reserves,
        channels,
        lm,
        dec,
    )
}

#[derive(Debug, Clone, Copy)]
struct Reserves {
    skip: i32,
    intensity: i32,
    dual_stereo: i32,
}

#[allow(clippy::too_many_arguments, clippy::too_many_lines)]
fn interp_bits2pulses(
    mode: &CeltMode,
    start: usize,
    end: usize,
    skip_start: usize,
    bits1: &[i32; NB_EBANDS],
    bits2: &[i32; NB_EBANDS],
    thresh: &[i32; NB_EBANDS],
    cap: &[i32],
    total: i32,
    reserves: Reserves,
    channels: usize,
    lm: usize,
    dec: &mut RangeDecoder<'_>,
) -> Result<Allocation> {
    let c = channels as i32;
    let stereo = i32::from(channels > 1);
    let log_m = (lm as i32) << BITRES;
    let alloc_floor = c << BITRES;
    let span = |from: usize, to: usize| i32::from(mode.ebands[to] - mode.ebands[from]);
    let mut total = total;
    let mut intensity_rsv = reserves.intensity;
    let mut dual_stereo_rsv = reserves.dual_stereo;

    // Bisect the interpolation weight between the two vectors.
    let mut lo = 0;
    let mut hi = 1 << ALLOC_STEPS;
    for _ in 0..ALLOC_STEPS {
        let mid = (lo + hi) >> 1;
        let mut psum = 0;
        let mut done = false;
        for j in (start..end).rev() {
            let tmp = bits1[j] + ((mid * bits2[j]) >> ALLOC_STEPS);
            if tmp >= thresh[j] || done {
                done = true;
                psum += tmp.min(cap[j]);
            } else if tmp >= alloc_floor {
                psum += alloc_floor;
            }
        }
        if psum > total {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    let mut bits = [0_i32; NB_EBANDS];
    let mut psum = 0;
    let mut done = false;
    for j in (start..end).rev() {
        let mut tmp = bits1[j] + ((lo * bits2[j]) >> ALLOC_STEPS);
        if tmp < thresh[j] && !done {
            tmp = if tmp >= alloc_floor { alloc_floor } else { 0 };
        } else {
            done = true;
        }
        tmp = tmp.min(cap[j]);
        bits[j] = tmp;
        psum += tmp;
    }

    // Drop bands from the top while the encoder says so.
    let mut coded_bands = end;
    loop {
        let j = coded_bands - 1;
        if j <= skip_start {
            // The skip flag was never coded, so its reservation is free.
            total += reserves.skip;
            break;
        }
        let mut left = total - psum;
        let percoeff = left / span(start, coded_bands);
        left -= span(start, coded_bands) * percoeff;
        let rem = (left - span(start, j)).max(0);
        let band_width = span(j, coded_bands);
        let mut band_bits = bits[j] + percoeff * band_width + rem;
        if band_bits >= thresh[j].max(alloc_floor + (1 << BITRES)) {
            if dec.ec_dec_bit_logp(1)? {
                break;
            }
            // Skipping costs the flag bit.
            psum += 1 << BITRES;
            band_bits -= 1 << BITRES;
        }
        psum -= bits[j] + intensity_rsv;
        if intensity_rsv > 0 {
            intensity_rsv = i32::from(LOG2_FRAC_TABLE[j - start]);
        }
        psum += intensity_rsv;
        if band_bits >= alloc_floor {
            psum += alloc_floor;
            bits[j] = alloc_floor;
        } else {
            bits[j] = 0;
        }
        coded_bands -= 1;
    }
    debug_assert!(coded_bands > start);

    let intensity = if intensity_rsv > 0 {
        start + dec.ec_dec_uint((coded_bands + 1 - start) as u32)? as usize
    } else {
        0
    };
    if intensity <= start {
        total += dual_stereo_rsv;
        dual_stereo_rsv = 0;
    }
    let dual_stereo = if dual_stereo_rsv > 0 {
        dec.ec_dec_bit_logp(1)?
    } else {
        false
    };

    // Spread what is left evenly over the coded bins, then the remainder
    // one bit per bin from the bottom.
    let mut left = total - psum;
    let percoeff = left / span(start, coded_bands);
    left -= span(start, coded_bands) * percoeff;
    for j in start..coded_bands {
        bits[j] += percoeff * span(j, j + 1);
    }
    for j in start..coded_bands {
        let tmp = left.min(span(j, j + 1));
        bits[j] += tmp;
        left -= tmp;
    }

    let mut ebits = [0_i32; NB_EBANDS];
    let mut fine_priority = [0_i32; NB_EBANDS];
    let mut balance = 0;
    for j in start..coded_bands {
        debug_assert!(bits[j] >= 0);
        let n = span(j, j + 1) << lm;
        let bit = bits[j] + balance;
        let mut excess;
        if n > 1 {
            excess = (bit - cap[j]).max(0);
            bits[j] = bit - excess;

            // One extra degree of freedom for the stereo angle.
            let den = c * n + i32::from(channels == 2 && n > 2 && !dual_stereo && j < intensity);
            let nc_log_n = den * (i32::from(mode.log_n[j]) + log_m);
            let mut offset = (nc_log_n >> 1) - den * FINE_OFFSET;
            if n == 2 {
                offset += (den << BITRES) >> 2;
            }
            // Favour fine energy at low rates.
            if bits[j] + offset < (den * 2) << BITRES {
                offset += nc_log_n >> 2;
            } else if bits[j] + offset < (den * 3) << BITRES {
                offset += nc_log_n >> 3;
            }

            ebits[j] = (bits[j] + offset + (den << (BITRES - 1))).max(0);
            ebits[j] = (ebits[j] / den) >> BITRES;
            if c * ebits[j] > bits[j] >> BITRES {
                ebits[j] = bits[j] >> stereo >> BITRES;
            }
            ebits[j] = ebits[j].min(MAX_FINE_BITS);
            fine_priority[j] = i32::from(ebits[j] * (den << BITRES) >= bits[j] + offset);
            bits[j] -= (c * ebits[j]) << BITRES;
        } else {
            // Single bins only carry a sign.
            excess = (bit - (c << BITRES)).max(0);
            bits[j] = bit - excess;
            ebits[j] = 0;
            fine_priority[j] = 1;
        }

        // Surplus goes to fine energy first, then rolls over.
        if excess > 0 {
            let extra_fine = (excess >> (stereo + BITRES_I)).min(MAX_FINE_BITS - ebits[j]);
            ebits[j] += extra_fine;
            let extra_bits = (extra_fine * c) << BITRES;
            fine_priority[j] = i32::from(extra_bits >= excess - balance);
            excess -= extra_bits;
        }
        balance = excess;
        debug_assert!(bits[j] >= 0);
        debug_assert!(ebits[j] >= 0);
    }

    // Skipped bands keep their floor as fine energy.
    for j in coded_bands..end {
        ebits[j] = bits[j] >> stereo >> BITRES;
        debug_assert_eq!((c * ebits[j]) << BITRES, bits[j]);
        bits[j] = 0;
        fine_priority[j] = i32::from(ebits[j] < 1);
    }

    log::trace!(
        "compute_allocation: coded_bands={coded_bands} intensity={intensity} dual_stereo={dual_stereo} balance={balance}"
    );

    Ok(Allocation {
        coded_bands,
        balance,
        intensity,
        dual_stereo,
        pulses: bits,
        fine_quant: ebits,
        fine_priority,
    })
}
