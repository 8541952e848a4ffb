//! Inverse MDCT on top of the complex FFT.
//!
//! An `N`-point inverse MDCT is computed as an `N/4`-point complex FFT with
//! pre- and post-rotation. Real and imaginary parts are swapped on the way in
//! and out so that the forward FFT performs the inverse transform. The
//! windowed time-domain aliasing cancellation happens in place against the
//! unwindowed tail the previous call left at the start of `output`.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use crate::error::Result;

use super::fft::{Complex, FftState};
use super::math::{add32_ovflw, celt_cos_norm, mult16_32_q15, s_mul, sub32_ovflw};

#[derive(Debug, Clone)]
pub struct MdctLookup {
    n: usize,
    max_shift: usize,
    kfft: Vec<FftState>,
    trig: Vec<Vec<i16>>,
}

impl MdctLookup {
    /// Builds the lookup for transforms of size `n >> shift`, `shift` in
    /// `0..=max_shift`.
    ///
    /// # Errors
    ///
    /// * If `n / 4` cannot be factored into radices 2, 3, 4 and 5
    pub fn new(n: usize, max_shift: usize) -> Result<Self> {
        let base = FftState::new(n >> 2)?;
        let mut kfft = Vec::with_capacity(max_shift + 1);
        for shift in 1..=max_shift {
            kfft.push(FftState::with_base(n >> (2 + shift), &base)?);
        }
        kfft.insert(0, base);

        let trig = (0..=max_shift)
            .map(|shift| {
                let len = n >> shift;
                let half = len >> 1;
                (0..half)
                    .map(|i| {
                        let phase = ((i as i32) << 17) + half as i32 + 16384;
                        celt_cos_norm(phase / len as i32)
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            n,
            max_shift,
            kfft,
            trig,
        })
    }

    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub const fn max_shift(&self) -> usize {
        self.max_shift
    }

    #[must_use]
    pub fn fft(&self, shift: usize) -> &FftState {
        &self.kfft[shift]
    }

    #[must_use]
    pub fn trig(&self, shift: usize) -> &[i16] {
        &self.trig[shift]
    }

    /// Inverse transform of `(n >> shift) / 2` coefficients read from
    /// `input` with a stride of `stride`.
    ///
    /// Writes `overlap / 2 + (n >> shift) / 2` samples into `output`. The
    /// first `overlap / 2` samples of `output` must hold the raw tail left
    /// there by the previous block; they are overlap-added with the new
    /// block through `window`.
    pub fn backward(
        &self,
        input: &[i32],
        output: &mut [i32],
        window: &[i16],
        overlap: usize,
        shift: usize,
        stride: usize,
    ) {
        let n = self.n >> shift;
        let n2 = n >> 1;
        let n4 = n >> 2;
        let trig = &self.trig[shift];
        let fft = &self.kfft[shift];
        let half_overlap = overlap >> 1;
        debug_assert!(output.len() >= half_overlap + n2);
        debug_assert!(input.len() > stride * (n2 - 1));

        // Pre-rotation, stored straight into bit-reversed order with real and
        // imaginary swapped.
        let mut buf = vec![Complex::default(); n4];
        for (i, &rev) in fft.bitrev().iter().enumerate().take(n4) {
            let x1 = input[2 * stride * i];
            let x2 = input[stride * (n2 - 1 - 2 * i)];
            let yr = add32_ovflw(s_mul(x2, trig[i]), s_mul(x1, trig[n4 + i]));
            let yi = sub32_ovflw(s_mul(x1, trig[i]), s_mul(x2, trig[n4 + i]));
            buf[rev] = Complex::new(yi, yr);
        }

        fft.fft_impl(&mut buf);

        // Post-rotation from both ends at once.
        let out = &mut output[half_overlap..];
        for i in 0..(n4 + 1) >> 1 {
            let j = n4 - 1 - i;
            let (re, im) = (buf[i].i, buf[i].r);
            let yr = add32_ovflw(s_mul(re, trig[i]), s_mul(im, trig[n4 + i]));
            let yi = sub32_ovflw(s_mul(re, trig[n4 + i]), s_mul(im, trig[i]));
            let (re, im) = (buf[j].i, buf[j].r);
            out[2 * i] = yr;
            out[2 * j + 1] = yi;

            let t0 = trig[n4 - i - 1];
            let t1 = trig[n2 - i - 1];
            let yr = add32_ovflw(s_mul(re, t0), s_mul(im, t1));
            let yi = sub32_ovflw(s_mul(re, t1), s_mul(im, t0));
            out[2 * j] = yr;
            out[2 * i + 1] = yi;
        }

        // Mirror on both sides for TDAC.
        for i in 0..half_overlap {
            let k = overlap - 1 - i;
            let x1 = output[k];
            let x2 = output[i];
            let (w1, w2) = (window[i], window[k]);
            output[i] = sub32_ovflw(mult16_32_q15(w2, x2), mult16_32_q15(w1, x1));
            output[k] = add32_ovflw(mult16_32_q15(w1, x2), mult16_32_q15(w2, x1));
        }
    }
}
