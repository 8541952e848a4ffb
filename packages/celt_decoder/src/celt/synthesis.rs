//! Time-domain synthesis: inverse MDCT, pitch post-filter and deemphasis.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use super::bands::denormalise_bands;
use super::math::{Q15ONE, SIG_SAT, mult16_16_p15, mult16_16_q15, mult16_32_q15, saturate, sig2word16};
use super::mode::CeltMode;

/// Shortest pitch period the post-filter runs at.
pub const COMBFILTER_MINPERIOD: usize = 15;
pub const COMBFILTER_MAXPERIOD: usize = 1024;

/// Gain (Q15) of the centre tap and the two symmetric tap pairs per tapset.
const COMB_GAINS: [[i16; 3]; 3] = [[10048, 7112, 4248], [15200, 8784, 0], [26208, 3280, 0]];

/// Pitch post-filter parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub period: usize,
    /// Q15.
    pub gain: i16,
    pub tapset: usize,
}

impl PostFilter {
    fn taps(self) -> [i16; 3] {
        COMB_GAINS[self.tapset].map(|g| mult16_16_p15(self.gain, g) as i16)
    }
}

/// Runs the comb filter in place over `buf[start..start + n]`, reading the
/// pitch history from before `start`.
///
/// The first `overlap` samples cross-fade from the `old` filter to the
/// `new` one through the squared `window`.
pub fn comb_filter(
    buf: &mut [i32],
    start: usize,
    n: usize,
    old: PostFilter,
    new: PostFilter,
    window: &[i16],
    overlap: usize,
) {
    if old.gain == 0 && new.gain == 0 {
        return;
    }
    let t0 = old.period.max(COMBFILTER_MINPERIOD);
    let t1 = new.period.max(COMBFILTER_MINPERIOD);
    debug_assert!(start >= t0.max(t1) + 2);
    let [g00, g01, g02] = old.taps();
    let [g10, g11, g12] = new.taps();

    let mut x1 = buf[start - t1 + 1];
    let mut x2 = buf[start - t1];
    let mut x3 = buf[start - t1 - 1];
    let mut x4 = buf[start - t1 - 2];

    let overlap = if old.gain == new.gain && t0 == t1 && old.tapset == new.tapset {
        0
    } else {
        overlap.min(n)
    };

    for i in 0..overlap {
        let j = start + i;
        let x0 = buf[j - t1 + 2];
        let f = mult16_16_q15(window[i], window[i]) as i16;
        let one_minus_f = Q15ONE - f;
        let y = buf[j]
            + mult16_32_q15(mult16_16_q15(one_minus_f, g00) as i16, buf[j - t0])
            + mult16_32_q15(
                mult16_16_q15(one_minus_f, g01) as i16,
                buf[j - t0 + 1] + buf[j - t0 - 1],
            )
            + mult16_32_q15(
                mult16_16_q15(one_minus_f, g02) as i16,
                buf[j - t0 + 2] + buf[j - t0 - 2],
            )
            + mult16_32_q15(mult16_16_q15(f, g10) as i16, x2)
            + mult16_32_q15(mult16_16_q15(f, g11) as i16, x1 + x3)
            + mult16_32_q15(mult16_16_q15(f, g12) as i16, x0 + x4);
        buf[j] = saturate(y, SIG_SAT);
        x4 = x3;
        x3 = x2;
        x2 = x1;
        x1 = x0;
    }

    if new.gain == 0 {
        return;
    }

    // Constant filter for the rest.
    for j in start + overlap..start + n {
        let x0 = buf[j - t1 + 2];
        let y = buf[j]
            + mult16_32_q15(g10, x2)
            + mult16_32_q15(g11, x1 + x3)
            + mult16_32_q15(g12, x0 + x4);
        buf[j] = saturate(y, SIG_SAT);
        x4 = x3;
        x3 = x2;
        x2 = x1;
        x1 = x0;
    }
}

/// Frame layout shared by [`celt_synthesis`].
#[derive(Debug, Clone, Copy)]
pub struct SynthesisParams {
    pub start: usize,
    pub eff_end: usize,
    /// Channels coded in the stream.
    pub stream_channels: usize,
    pub lm: usize,
    pub transient: bool,
    pub downsample: usize,
    pub silence: bool,
}

/// Turns the normalized spectrum `x` (one `N`-bin row per stream channel)
/// and its band energies into `N` new time samples at the start of each
/// `out_syn` buffer, mixing mono to stereo or stereo to mono as needed.
///
/// Each `out_syn` buffer must hold the previous frame's overlap tail in its
/// first `overlap / 2` samples.
pub fn celt_synthesis(
    mode: &CeltMode,
    x: &[i16],
    out_syn: &mut [&mut [i32]],
    old_band_e: &[i16],
    params: &SynthesisParams,
) {
    let SynthesisParams {
        start,
        eff_end,
        stream_channels,
        lm,
        transient,
        downsample,
        silence,
    } = *params;
    let overlap = mode.overlap;
    let nb = mode.nb_ebands;
    let n = mode.short_mdct_size << lm;
    let m = 1 << lm;
    let (blocks, nb_block, shift) = if transient {
        (m, mode.short_mdct_size, mode.max_lm)
    } else {
        (1, n, mode.max_lm - lm)
    };
    let output_channels = out_syn.len();

    let mut freq = vec![0_i32; n];
    let inverse = |freq: &[i32], out: &mut [i32]| {
        for b in 0..blocks {
            mode.mdct
                .backward(&freq[b..], &mut out[nb_block * b..], &mode.window, overlap, shift, blocks);
        }
    };

    if output_channels == 2 && stream_channels == 1 {
        denormalise_bands(mode, x, &mut freq, old_band_e, start, eff_end, m, downsample, silence);
        for out in out_syn.iter_mut() {
            inverse(&freq, out);
        }
    } else if output_channels == 1 && stream_channels == 2 {
        let mut freq2 = vec![0_i32; n];
        denormalise_bands(mode, x, &mut freq, old_band_e, start, eff_end, m, downsample, silence);
        denormalise_bands(
            mode,
            &x[n..],
            &mut freq2,
            &old_band_e[nb..],
            start,
            eff_end,
            m,
            downsample,
            silence,
        );
        for (f, &f2) in freq.iter_mut().zip(&freq2) {
            *f = (*f >> 1) + (f2 >> 1);
        }
        inverse(&freq, &mut *out_syn[0]);
    } else {
        for (c, out) in out_syn.iter_mut().enumerate() {
            denormalise_bands(
                mode,
                &x[c * n..],
                &mut freq,
                &old_band_e[c * nb..],
                start,
                eff_end,
                m,
                downsample,
                silence,
            );
            inverse(&freq, out);
        }
    }

    // Keep the post-filter from overflowing.
    for out in out_syn.iter_mut() {
        for v in &mut out[..n] {
            *v = saturate(*v, SIG_SAT);
        }
    }
}

/// Undoes the encoder's pre-emphasis with a one-pole filter per channel and
/// writes interleaved 16-bit PCM, keeping every `downsample`-th sample.
///
/// `mem` holds one filter state per channel across frames.
pub fn deemphasis(
    input: &[&[i32]],
    pcm: &mut [i16],
    n: usize,
    downsample: usize,
    coef: i16,
    mem: &mut [i32],
) {
    let channels = input.len();
    let mut scratch = vec![0_i32; n];
    for (c, (x, m)) in input.iter().zip(mem.iter_mut()).enumerate() {
        let mut state = *m;
        for (s, &sample) in scratch.iter_mut().zip(&x[..n]) {
            *s = sample + state;
            state = mult16_32_q15(coef, *s);
        }
        *m = state;
        for (o, &tmp) in pcm[c..]
            .iter_mut()
            .step_by(channels)
            .zip(scratch.iter().step_by(downsample))
        {
            *o = sig2word16(tmp);
        }
    }
}
