//! Band energy decoding.
//!
//! Energies are log2 amplitudes in Q10 (`DB_SHIFT`), relative to the band
//! means. The coarse part is a 6 dB Laplace-coded prediction residual, refined
//! by raw fine bits and finally by any bits left over at the end of the frame.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::error::Result;
use crate::range::RangeDecoder;

use super::math::{DB_SHIFT, pshr32};
use super::mode::NB_EBANDS;
use super::rate::MAX_FINE_BITS;

/// Inter-frame prediction coefficient per `LM` (Q15).
const PRED_COEF: [i16; 4] = [29440, 26112, 21248, 16384];
/// Intra-frame prediction decay per `LM` (Q15).
const BETA_COEF: [i16; 4] = [30147, 22282, 12124, 6554];
const BETA_INTRA: i16 = 4915;

const SMALL_ENERGY_ICDF: [u8; 3] = [2, 1, 0];

/// Laplace parameters per `[LM][intra][band]`: the probability of zero and
/// the decay, interleaved.
const E_PROB_MODEL: [[[u8; 42]; 2]; 4] = [
    [
        [
            72, 127, 65, 129, 66, 128, 65, 128, 64, 128, 62, 128, 64, 128, 64, 128, 92, 78, 92, 79,
            92, 78, 90, 79, 116, 41, 115, 40, 114, 40, 132, 26, 132, 26, 145, 17, 161, 12, 176, 10,
            177, 11,
        ],
        [
            24, 179, 48, 138, 54, 135, 54, 132, 53, 134, 56, 133, 55, 132, 55, 132, 61, 114, 70,
            96, 74, 88, 75, 88, 87, 74, 89, 66, 91, 67, 100, 59, 108, 50, 120, 40, 122, 37, 97, 43,
            78, 50,
        ],
    ],
    [
        [
            83, 78, 84, 81, 88, 75, 86, 74, 87, 71, 90, 73, 93, 74, 93, 74, 109, 40, 114, 36, 117,
            34, 117, 34, 143, 17, 145, 18, 146, 19, 162, 12, 165, 10, 178, 7, 189, 6, 190, 8, 177,
            9,
        ],
        [
            23, 178, 54, 115, 63, 102, 66, 98, 69, 99, 74, 89, 71, 91, 73, 91, 78, 89, 86, 80, 92,
            66, 93, 64, 102, 59, 103, 60, 104, 60, 117, 52, 123, 44, 138, 35, 133, 31, 97, 38, 77,
            45,
        ],
    ],
    [
        [
            61, 90, 93, 60, 105, 42, 107, 41, 110, 45, 116, 38, 113, 38, 112, 38, 124, 26, 132, 27,
            136, 19, 140, 20, 155, 14, 159, 16, 158, 18, 170, 13, 177, 10, 187, 8, 192, 6, 175, 9,
            159, 10,
        ],
        [
            21, 178, 59, 110, 71, 86, 75, 85, 84, 83, 91, 66, 88, 73, 87, 72, 92, 75, 98, 72, 105,
            58, 107, 54, 115, 52, 114, 55, 112, 56, 129, 51, 132, 40, 150, 33, 140, 29, 98, 35, 77,
            42,
        ],
    ],
    [
        [
            42, 121, 96, 66, 108, 43, 111, 40, 117, 44, 123, 32, 120, 36, 119, 33, 127, 33, 134,
            34, 139, 21, 147, 23, 152, 20, 158, 25, 154, 26, 166, 21, 173, 16, 184, 13, 184, 10,
            150, 13, 139, 15,
        ],
        [
            22, 178, 63, 114, 74, 82, 84, 83, 92, 82, 103, 62, 96, 72, 96, 67, 101, 73, 107, 72,
            113, 55, 118, 52, 125, 52, 118, 52, 117, 55, 135, 49, 137, 39, 157, 32, 145, 29, 97,
            33, 77, 40,
        ],
    ],
];

/// Decodes the coarse energies of bands `start..end` on top of the
/// prediction from the previous frame's `old_e_bands` (`channels` rows of
/// `NB_EBANDS`).
///
/// Once the frame budget runs out the residual falls back to cheaper codes
/// and finally to a fixed -6 dB step.
///
/// # Errors
///
/// * If the range decoder rejects a read
pub fn unquant_coarse_energy(
    start: usize,
    end: usize,
    old_e_bands: &mut [i16],
    intra: bool,
    dec: &mut RangeDecoder<'_>,
    channels: usize,
    lm: usize,
) -> Result<()> {
    let prob_model = &E_PROB_MODEL[lm][usize::from(intra)];
    let mut prev = [0_i32; 2];
    let (coef, beta) = if intra {
        (0, BETA_INTRA)
    } else {
        (PRED_COEF[lm], BETA_COEF[lm])
    };
    let budget = dec.storage() as i32 * 8;

    for i in start..end {
        for (c, prev) in prev.iter_mut().enumerate().take(channels) {
            let left = budget - dec.ec_tell() as i32;
            let qi = if left >= 15 {
                let pi = 2 * i.min(20);
                dec.ec_laplace_decode(
                    u32::from(prob_model[pi]) << 7,
                    u32::from(prob_model[pi + 1]) << 6,
                )?
            } else if left >= 2 {
                let qi = dec.ec_dec_icdf(&SMALL_ENERGY_ICDF, 2)? as i32;
                (qi >> 1) ^ -(qi & 1)
            } else if left >= 1 {
                -i32::from(dec.ec_dec_bit_logp(1)?)
            } else {
                -1
            };
            let q = qi << DB_SHIFT;

            let old = &mut old_e_bands[c * NB_EBANDS + i];
            *old = (*old).max(-(9 << DB_SHIFT));
            let tmp = pshr32(i32::from(coef) * i32::from(*old), 8) + *prev + (q << 7);
            // Floor at -28 dB.
            let tmp = tmp.max(-(28 << (DB_SHIFT + 7)));
            *old = pshr32(tmp, 7) as i16;
            *prev += (q << 7) - i32::from(beta) * pshr32(q, 8);
        }
    }
    Ok(())
}

/// Adds `fine_quant[i]` raw bits of precision to each band energy.
///
/// # Errors
///
/// * If the range decoder rejects a read
pub fn unquant_fine_energy(
    start: usize,
    end: usize,
    old_e_bands: &mut [i16],
    fine_quant: &[i32],
    dec: &mut RangeDecoder<'_>,
    channels: usize,
) -> Result<()> {
    for i in start..end {
        let bits = fine_quant[i];
        if bits <= 0 {
            continue;
        }
        for c in 0..channels {
            let q2 = dec.ec_dec_bits(bits as u32)? as i32;
            let offset = (((q2 << DB_SHIFT) + (1 << (DB_SHIFT - 1))) >> bits) - (1 << (DB_SHIFT - 1));
            let e = &mut old_e_bands[c * NB_EBANDS + i];
            *e = e.wrapping_add(offset as i16);
        }
    }
    Ok(())
}

/// Spends the bits left at the end of the frame on one more bit of energy
/// precision per band, first for the bands with `fine_priority` 0, then 1.
///
/// # Errors
///
/// * If the range decoder rejects a read
pub fn unquant_energy_finalise(
    start: usize,
    end: usize,
    old_e_bands: &mut [i16],
    fine_quant: &[i32],
    fine_priority: &[i32],
    mut bits_left: i32,
    dec: &mut RangeDecoder<'_>,
    channels: usize,
) -> Result<()> {
    let channels_i = channels as i32;
    for prio in 0..2 {
        for i in start..end {
            if bits_left < channels_i {
                break;
            }
            if fine_quant[i] >= MAX_FINE_BITS || fine_priority[i] != prio {
                continue;
            }
            for c in 0..channels {
                let q2 = dec.ec_dec_bits(1)? as i32;
                let offset = ((q2 << DB_SHIFT) - (1 << (DB_SHIFT - 1))) >> (fine_quant[i] + 1);
                let e = &mut old_e_bands[c * NB_EBANDS + i];
                *e = e.wrapping_add(offset as i16);
                bits_left -= 1;
            }
        }
    }
    Ok(())
}
