//! The standard 48 kHz CELT mode.
//!
//! Band layout and allocation vectors are fixed data. The derived tables
//! (pulse cache, `logN`, window, MDCT twiddles and FFT plans) are computed
//! once on first use and shared by every decoder.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use std::sync::OnceLock;

use crate::error::Result;
use crate::range::BITRES;

use super::cwrs::{get_required_bits, log2_frac};
use super::mdct::MdctLookup;
use super::rate::{
    FINE_OFFSET, MAX_FINE_BITS, MAX_PSEUDO, QTHETA_OFFSET, QTHETA_OFFSET_TWOPHASE, fits_in32,
    get_pulses,
};

pub const SAMPLE_RATE: u32 = 48_000;
pub const NB_EBANDS: usize = 21;
pub const OVERLAP: usize = 120;
pub const SHORT_MDCT_SIZE: usize = 120;
pub const MAX_LM: usize = 3;
pub const NB_SHORT_MDCTS: usize = 1 << MAX_LM;
pub const NB_ALLOC_VECTORS: usize = 11;
/// First pre-emphasis coefficient (0.85 in Q15).
pub const PREEMPH_COEF: i16 = 27853;

/// Band edges in bins of a 2.5 ms short MDCT.
pub const EBANDS: [i16; NB_EBANDS + 1] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 14, 16, 20, 24, 28, 34, 40, 48, 60, 78, 100,
];

/// Mean band log-energy removed before coarse coding (Q4).
pub const E_MEANS: [i16; 25] = [
    103, 100, 92, 85, 81, 77, 72, 70, 78, 75, 73, 71, 78, 74, 69, 72, 70, 74, 76, 71, 60, 60, 60,
    60, 60,
];

/// Allocation vectors, one row of `NB_EBANDS` per quality step, in 1/32 bit
/// per bin units.
pub const BAND_ALLOCATION: [u8; NB_ALLOC_VECTORS * NB_EBANDS] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
    90, 80, 75, 69, 63, 56, 49, 40, 34, 29, 20, 18, 10, 0, 0, 0, 0, 0, 0, 0, 0, //
    110, 100, 90, 84, 78, 71, 65, 58, 51, 45, 39, 32, 26, 20, 12, 0, 0, 0, 0, 0, 0, //
    118, 110, 103, 93, 86, 80, 75, 70, 65, 59, 53, 47, 40, 31, 23, 15, 4, 0, 0, 0, 0, //
    126, 119, 112, 104, 95, 89, 83, 78, 72, 66, 60, 54, 47, 39, 32, 25, 17, 12, 1, 0, 0, //
    134, 127, 120, 114, 103, 97, 91, 85, 78, 72, 66, 60, 54, 47, 41, 35, 29, 23, 16, 10, 1, //
    144, 137, 130, 124, 113, 107, 101, 95, 88, 82, 76, 70, 64, 57, 51, 45, 39, 33, 26, 15, 1, //
    152, 145, 138, 132, 123, 117, 111, 105, 98, 92, 86, 80, 74, 67, 61, 55, 49, 43, 36, 20, 1, //
    162, 155, 148, 142, 133, 127, 121, 115, 108, 102, 96, 90, 84, 77, 71, 65, 59, 53, 46, 30, 1, //
    172, 165, 158, 152, 143, 137, 131, 125, 118, 112, 106, 100, 94, 87, 81, 75, 69, 63, 56, 45, 20, //
    200, 200, 200, 200, 200, 200, 200, 200, 198, 193, 188, 183, 178, 173, 168, 163, 158, 153, 148, 129,
    104,
];

/// Per-band PVQ bit costs, shared between bands of equal size.
#[derive(Debug, Clone)]
pub struct PulseCache {
    /// Offset into `bits` per `(LM + 1, band)`, or -1 for empty bands.
    pub index: Vec<i16>,
    /// At each offset: the maximum pseudo-pulse index, followed by the cost
    /// (minus one, in 1/8 bits) of each pseudo-pulse count.
    pub bits: Vec<u8>,
    /// Highest useful allocation per `(LM, channels, band)`.
    pub caps: Vec<u8>,
}

impl PulseCache {
    /// Cost table for `band` at `LM`, starting with its length entry.
    ///
    /// `lm` may be -1 for the halves of a split 2.5 ms band.
    #[must_use]
    pub fn bits_for(&self, band: usize, lm: i32) -> &[u8] {
        debug_assert!(lm >= -1);
        let offset = self.index[(lm + 1) as usize * NB_EBANDS + band];
        debug_assert!(offset >= 0);
        &self.bits[offset as usize..]
    }
}

/// Immutable description of a CELT mode.
#[derive(Debug)]
pub struct CeltMode {
    pub sample_rate: u32,
    pub overlap: usize,
    pub nb_ebands: usize,
    pub eff_ebands: usize,
    pub preemph: i16,
    pub ebands: &'static [i16],
    pub max_lm: usize,
    pub nb_short_mdcts: usize,
    pub short_mdct_size: usize,
    pub nb_alloc_vectors: usize,
    pub alloc_vectors: &'static [u8],
    /// `log2` of each band width in 1/8 bits.
    pub log_n: Vec<i16>,
    /// Q15 power-complementary overlap window.
    pub window: Vec<i16>,
    pub mdct: MdctLookup,
    pub cache: PulseCache,
}

impl CeltMode {
    fn new() -> Result<Self> {
        let log_n: Vec<i16> = EBANDS
            .windows(2)
            .map(|w| log2_frac((w[1] - w[0]) as u32, BITRES) as i16)
            .collect();
        let cache = compute_pulse_cache(&EBANDS, &log_n, MAX_LM);
        let mdct = MdctLookup::new(2 * SHORT_MDCT_SIZE * NB_SHORT_MDCTS, MAX_LM)?;
        log::debug!(
            "CeltMode: built {} Hz mode, {} bands, pulse cache of {} entries",
            SAMPLE_RATE,
            NB_EBANDS,
            cache.bits.len()
        );
        Ok(Self {
            sample_rate: SAMPLE_RATE,
            overlap: OVERLAP,
            nb_ebands: NB_EBANDS,
            eff_ebands: NB_EBANDS,
            preemph: PREEMPH_COEF,
            ebands: &EBANDS,
            max_lm: MAX_LM,
            nb_short_mdcts: NB_SHORT_MDCTS,
            short_mdct_size: SHORT_MDCT_SIZE,
            nb_alloc_vectors: NB_ALLOC_VECTORS,
            alloc_vectors: &BAND_ALLOCATION,
            log_n,
            window: compute_window(OVERLAP),
            mdct,
            cache,
        })
    }

    /// First bin of `band` at `LM = 0`.
    #[must_use]
    pub fn band_start(&self, band: usize) -> usize {
        self.ebands[band] as usize
    }

    /// Number of bins in `band` at `LM = 0`.
    #[must_use]
    pub fn band_width(&self, band: usize) -> i32 {
        i32::from(self.ebands[band + 1] - self.ebands[band])
    }

    /// Log2 frame-size multiplier for `frame_size` samples at 48 kHz.
    #[must_use]
    pub fn lm_for_frame_size(&self, frame_size: usize) -> Option<usize> {
        (0..=self.max_lm).find(|&lm| self.short_mdct_size << lm == frame_size)
    }
}

/// Returns the shared 48 kHz mode, building it on first use.
///
/// # Errors
///
/// * If a derived table cannot be built
pub fn mode() -> Result<&'static CeltMode> {
    static MODE: OnceLock<Result<CeltMode>> = OnceLock::new();
    MODE.get_or_init(CeltMode::new).as_ref().map_err(Clone::clone)
}

fn compute_window(overlap: usize) -> Vec<i16> {
    use std::f64::consts::FRAC_PI_2;
    (0..overlap)
        .map(|i| {
            let s = (FRAC_PI_2 * (i as f64 + 0.5) / overlap as f64).sin();
            let w = (FRAC_PI_2 * s * s).sin();
            (0.5 + 32768.0 * w).floor().min(32767.0) as i16
        })
        .collect()
}

fn compute_pulse_cache(ebands: &[i16], log_n: &[i16], lm: usize) -> PulseCache {
    let nb = ebands.len() - 1;
    let width = |band: usize| i32::from(ebands[band + 1] - ebands[band]);

    let mut index = vec![-1_i16; nb * (lm + 2)];
    let mut entries = Vec::new();
    let mut curr = 0_usize;
    for i in 0..=lm + 1 {
        for j in 0..nb {
            let n = (width(j) << i) >> 1;
            let shared = (0..=i).find_map(|k| {
                let limit = if k == i { j } else { nb };
                (0..limit)
                    .find(|&b| (width(b) << k) >> 1 == n)
                    .map(|b| index[k * nb + b])
            });
            index[i * nb + j] = shared.unwrap_or(-1);
            if index[i * nb + j] == -1 && n != 0 {
                let mut k = 0;
                while k < MAX_PSEUDO && fits_in32(n, get_pulses(k + 1)) {
                    k += 1;
                }
                entries.push((n as usize, k, curr));
                index[i * nb + j] = curr as i16;
                curr += k as usize + 1;
            }
        }
    }

    let mut bits = vec![0_u8; curr];
    for &(n, k, offset) in &entries {
        let required = get_required_bits(n, get_pulses(k) as usize, BITRES);
        bits[offset] = k as u8;
        for j in 1..=k {
            bits[offset + j as usize] = (required[get_pulses(j) as usize] - 1) as u8;
        }
    }

    let bitres = BITRES as i32;
    let mut caps = Vec::with_capacity((lm + 1) * 2 * nb);
    for i in 0..=lm as i32 {
        for c in 1..=2_i32 {
            for j in 0..nb {
                let log_n = i32::from(log_n[j]);
                let mut max_bits;
                if width(j) << i == 1 {
                    max_bits = (c * (1 + MAX_FINE_BITS)) << bitres;
                } else {
                    let mut lm0 = 0;
                    let mut n0 = width(j);
                    if n0 > 2 {
                        n0 >>= 1;
                        lm0 -= 1;
                    } else if n0 <= 1 {
                        lm0 = i.min(1);
                        n0 <<= lm0;
                    }
                    // Cost of the lowest-level PVQ of a fully split band.
                    let offset = index[(lm0 + 1) as usize * nb + j] as usize;
                    let pcache = &bits[offset..];
                    max_bits = i32::from(pcache[pcache[0] as usize]) + 1;

                    // Plus the split angles on the way down.
                    let mut n = n0;
                    for k in 0..i - lm0 {
                        max_bits <<= 1;
                        let offset = ((log_n + ((lm0 + k) << bitres)) >> 1) - QTHETA_OFFSET;
                        let num = 459 * ((2 * n - 1) * offset + max_bits);
                        let den = ((2 * n - 1) << 9) - 459;
                        let qb = ((num + (den >> 1)) / den).min(57);
                        max_bits += qb;
                        n <<= 1;
                    }

                    if c == 2 {
                        max_bits <<= 1;
                        let offset = ((log_n + (i << bitres)) >> 1)
                            - if n == 2 {
                                QTHETA_OFFSET_TWOPHASE
                            } else {
                                QTHETA_OFFSET
                            };
                        let ndof = 2 * n - 1 - i32::from(n == 2);
                        let scale = if n == 2 { 512 } else { 487 };
                        let num = scale * (max_bits + ndof * offset);
                        let den = (ndof << 9) - scale;
                        let qb = ((num + (den >> 1)) / den).min(if n == 2 { 64 } else { 61 });
                        max_bits += qb;
                    }

                    // Fine energy bits, with the extra degree of freedom of
                    // stereo.
                    let ndof = c * n + i32::from(c == 2 && n > 2);
                    let mut offset = ((log_n + (i << bitres)) >> 1) - FINE_OFFSET;
                    if n == 2 {
                        offset += (1 << bitres) >> 2;
                    }
                    let num = max_bits + ndof * offset;
                    let den = (ndof - 1) << bitres;
                    let qb = ((num + (den >> 1)) / den).min(MAX_FINE_BITS);
                    max_bits += (c * qb) << bitres;
                }
                let max_bits = (4 * max_bits / (c * (width(j) << i))) - 64;
                debug_assert!((0..256).contains(&max_bits));
                caps.push(max_bits.clamp(0, 255) as u8);
            }
        }
    }

    PulseCache { index, bits, caps }
}
