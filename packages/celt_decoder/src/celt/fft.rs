//! Mixed-radix complex FFT used by the inverse MDCT.
//!
//! Radix 2, 3, 4 and 5 butterflies over 32-bit samples with 16-bit twiddles.
//! No scaling happens between stages. Sums use wrapping arithmetic: the
//! transform is allowed to overflow in the middle as long as it cancels out
//! by the end.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use std::sync::Arc;

use crate::error::{Error, Result};

use super::math::{add32_ovflw, celt_cos_norm, neg32_ovflw, s_mul, sub32_ovflw};

const MAX_FACTORS: usize = 8;

/// `sqrt(1/2)` in Q15.
const TW_SQRT_HALF: i16 = 23170;
/// `-sin(2pi/3)` in Q15.
const EPI3_I: i16 = -28378;
const YA: Twiddle = Twiddle { r: 10126, i: -31164 };
const YB: Twiddle = Twiddle {
    r: -26510,
    i: -19261,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Complex {
    pub r: i32,
    pub i: i32,
}

impl Complex {
    #[must_use]
    pub const fn new(r: i32, i: i32) -> Self {
        Self { r, i }
    }

    #[inline]
    const fn add(self, other: Self) -> Self {
        Self::new(add32_ovflw(self.r, other.r), add32_ovflw(self.i, other.i))
    }

    #[inline]
    const fn sub(self, other: Self) -> Self {
        Self::new(sub32_ovflw(self.r, other.r), sub32_ovflw(self.i, other.i))
    }

    #[inline]
    const fn mul(self, t: Twiddle) -> Self {
        Self::new(
            sub32_ovflw(s_mul(self.r, t.r), s_mul(self.i, t.i)),
            add32_ovflw(s_mul(self.r, t.i), s_mul(self.i, t.r)),
        )
    }

    #[inline]
    const fn scale(self, s: i16) -> Self {
        Self::new(s_mul(self.r, s), s_mul(self.i, s))
    }
}

/// Q15 twiddle factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Twiddle {
    pub r: i16,
    pub i: i16,
}

/// Precomputed plan for one FFT size.
///
/// Smaller transforms share the twiddles of the largest one and walk them
/// with a stride of `1 << shift`.
#[derive(Debug, Clone)]
pub struct FftState {
    nfft: usize,
    shift: usize,
    factors: Vec<(usize, usize)>,
    bitrev: Vec<usize>,
    twiddles: Arc<[Twiddle]>,
}

impl FftState {
    /// Builds a plan with its own twiddle table.
    ///
    /// # Errors
    ///
    /// * If `nfft` has a prime factor above 5
    pub fn new(nfft: usize) -> Result<Self> {
        let twiddles: Arc<[Twiddle]> = compute_twiddles(nfft).into();
        Self::build(nfft, 0, twiddles)
    }

    /// Builds a plan for `nfft` that reuses the twiddles of `base`.
    ///
    /// # Errors
    ///
    /// * If `base.nfft()` is not `nfft` times a power of two
    /// * If `nfft` has a prime factor above 5
    pub fn with_base(nfft: usize, base: &Self) -> Result<Self> {
        let shift = (0..32)
            .find(|&shift| nfft << shift == base.nfft)
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "FFT size {nfft} does not divide base size {}",
                    base.nfft
                ))
            })?;
        Self::build(nfft, shift, Arc::clone(&base.twiddles))
    }

    fn build(nfft: usize, shift: usize, twiddles: Arc<[Twiddle]>) -> Result<Self> {
        let factors = kf_factor(nfft)?;
        let mut bitrev = vec![0; nfft];
        compute_bitrev_table(0, &mut bitrev, 0, 1, &factors);
        Ok(Self {
            nfft,
            shift,
            factors,
            bitrev,
            twiddles,
        })
    }

    #[must_use]
    pub const fn nfft(&self) -> usize {
        self.nfft
    }

    #[must_use]
    pub fn bitrev(&self) -> &[usize] {
        &self.bitrev
    }

    /// `(radix, remaining length)` per stage, first stage first.
    #[must_use]
    pub fn factors(&self) -> &[(usize, usize)] {
        &self.factors
    }

    /// Runs the in-place transform on data already in bit-reversed order.
    pub fn fft_impl(&self, fout: &mut [Complex]) {
        debug_assert!(fout.len() >= self.nfft);
        let stages = self.factors.len();
        let mut fstride = [1_usize; MAX_FACTORS + 1];
        for (l, &(p, _)) in self.factors.iter().enumerate() {
            fstride[l + 1] = fstride[l] * p;
        }

        let mut m = self.factors[stages - 1].1;
        for i in (0..stages).rev() {
            let m2 = if i == 0 { 1 } else { self.factors[i - 1].1 };
            let stride = fstride[i] << self.shift;
            match self.factors[i].0 {
                2 => kf_bfly2(fout, m, fstride[i]),
                3 => self.kf_bfly3(fout, stride, m, fstride[i], m2),
                4 => self.kf_bfly4(fout, stride, m, fstride[i], m2),
                5 => self.kf_bfly5(fout, stride, m, fstride[i], m2),
                _ => {}
            }
            m = m2;
        }
    }

    fn kf_bfly3(&self, fout: &mut [Complex], fstride: usize, m: usize, n: usize, mm: usize) {
        let m2 = 2 * m;
        let tw = &self.twiddles;
        for i in 0..n {
            let base = i * mm;
            for k in 0..m {
                let s1 = fout[base + m + k].mul(tw[k * fstride]);
                let s2 = fout[base + m2 + k].mul(tw[2 * k * fstride]);
                let s3 = s1.add(s2);
                let s0 = s1.sub(s2).scale(EPI3_I);

                let fm = Complex::new(
                    sub32_ovflw(fout[base + k].r, s3.r >> 1),
                    sub32_ovflw(fout[base + k].i, s3.i >> 1),
                );
                fout[base + k] = fout[base + k].add(s3);
                fout[base + m2 + k] =
                    Complex::new(add32_ovflw(fm.r, s0.i), sub32_ovflw(fm.i, s0.r));
                fout[base + m + k] =
                    Complex::new(sub32_ovflw(fm.r, s0.i), add32_ovflw(fm.i, s0.r));
            }
        }
    }

    fn kf_bfly4(&self, fout: &mut [Complex], fstride: usize, m: usize, n: usize, mm: usize) {
        if m == 1 {
            // Degenerate last stage: every twiddle is one.
            for i in 0..n {
                let base = i * mm;
                let s0 = fout[base].sub(fout[base + 2]);
                let mut f0 = fout[base].add(fout[base + 2]);
                let s1 = fout[base + 1].add(fout[base + 3]);
                fout[base + 2] = f0.sub(s1);
                f0 = f0.add(s1);
                let s1 = fout[base + 1].sub(fout[base + 3]);

                fout[base] = f0;
                fout[base + 1] = Complex::new(add32_ovflw(s0.r, s1.i), sub32_ovflw(s0.i, s1.r));
                fout[base + 3] = Complex::new(sub32_ovflw(s0.r, s1.i), add32_ovflw(s0.i, s1.r));
            }
            return;
        }

        let m2 = 2 * m;
        let m3 = 3 * m;
        let tw = &self.twiddles;
        for i in 0..n {
            let base = i * mm;
            for j in 0..m {
                let s0 = fout[base + j + m].mul(tw[j * fstride]);
                let s1 = fout[base + j + m2].mul(tw[2 * j * fstride]);
                let s2 = fout[base + j + m3].mul(tw[3 * j * fstride]);

                let s5 = fout[base + j].sub(s1);
                let f0 = fout[base + j].add(s1);
                let s3 = s0.add(s2);
                let s4 = s0.sub(s2);

                fout[base + j + m2] = f0.sub(s3);
                fout[base + j] = f0.add(s3);
                fout[base + j + m] = Complex::new(add32_ovflw(s5.r, s4.i), sub32_ovflw(s5.i, s4.r));
                fout[base + j + m3] =
                    Complex::new(sub32_ovflw(s5.r, s4.i), add32_ovflw(s5.i, s4.r));
            }
        }
    }

    fn kf_bfly5(&self, fout: &mut [Complex], fstride: usize, m: usize, n: usize, mm: usize) {
        let tw = &self.twiddles;
        for i in 0..n {
            let base = i * mm;
            for u in 0..m {
                let s0 = fout[base + u];
                let s1 = fout[base + m + u].mul(tw[u * fstride]);
                let s2 = fout[base + 2 * m + u].mul(tw[2 * u * fstride]);
                let s3 = fout[base + 3 * m + u].mul(tw[3 * u * fstride]);
                let s4 = fout[base + 4 * m + u].mul(tw[4 * u * fstride]);

                let s7 = s1.add(s4);
                let s10 = s1.sub(s4);
                let s8 = s2.add(s3);
                let s9 = s2.sub(s3);

                fout[base + u] = Complex::new(
                    add32_ovflw(s0.r, add32_ovflw(s7.r, s8.r)),
                    add32_ovflw(s0.i, add32_ovflw(s7.i, s8.i)),
                );

                let s5 = Complex::new(
                    add32_ovflw(s0.r, add32_ovflw(s_mul(s7.r, YA.r), s_mul(s8.r, YB.r))),
                    add32_ovflw(s0.i, add32_ovflw(s_mul(s7.i, YA.r), s_mul(s8.i, YB.r))),
                );
                let s6 = Complex::new(
                    add32_ovflw(s_mul(s10.i, YA.i), s_mul(s9.i, YB.i)),
                    neg32_ovflw(add32_ovflw(s_mul(s10.r, YA.i), s_mul(s9.r, YB.i))),
                );
                fout[base + m + u] = s5.sub(s6);
                fout[base + 4 * m + u] = s5.add(s6);

                let s11 = Complex::new(
                    add32_ovflw(s0.r, add32_ovflw(s_mul(s7.r, YB.r), s_mul(s8.r, YA.r))),
                    add32_ovflw(s0.i, add32_ovflw(s_mul(s7.i, YB.r), s_mul(s8.i, YA.r))),
                );
                let s12 = Complex::new(
                    sub32_ovflw(s_mul(s9.i, YA.i), s_mul(s10.i, YB.i)),
                    sub32_ovflw(s_mul(s10.r, YB.i), s_mul(s9.r, YA.i)),
                );
                fout[base + 2 * m + u] = s11.add(s12);
                fout[base + 3 * m + u] = s11.sub(s12);
            }
        }
    }
}

/// Radix-2 stage. Only ever follows a radix-4 stage, so `m` is 4.
fn kf_bfly2(fout: &mut [Complex], m: usize, n: usize) {
    debug_assert_eq!(m, 4);
    for i in 0..n {
        let base = i * 8;

        let t = fout[base + 4];
        fout[base + 4] = fout[base].sub(t);
        fout[base] = fout[base].add(t);

        let f = fout[base + 5];
        let t = Complex::new(
            s_mul(add32_ovflw(f.r, f.i), TW_SQRT_HALF),
            s_mul(sub32_ovflw(f.i, f.r), TW_SQRT_HALF),
        );
        fout[base + 5] = fout[base + 1].sub(t);
        fout[base + 1] = fout[base + 1].add(t);

        let f = fout[base + 6];
        let t = Complex::new(f.i, neg32_ovflw(f.r));
        fout[base + 6] = fout[base + 2].sub(t);
        fout[base + 2] = fout[base + 2].add(t);

        let f = fout[base + 7];
        let t = Complex::new(
            s_mul(sub32_ovflw(f.i, f.r), TW_SQRT_HALF),
            s_mul(neg32_ovflw(add32_ovflw(f.i, f.r)), TW_SQRT_HALF),
        );
        fout[base + 7] = fout[base + 3].sub(t);
        fout[base + 3] = fout[base + 3].add(t);
    }
}

fn compute_twiddles(nfft: usize) -> Vec<Twiddle> {
    (0..nfft)
        .map(|i| {
            let phase = ((-(i as i32)) << 17) / nfft as i32;
            Twiddle {
                r: celt_cos_norm(phase),
                i: celt_cos_norm(phase - 32768),
            }
        })
        .collect()
}

/// Factors `n` into radices 4, 2, 3 and 5, then reverses the order so the
/// degenerate radix-4 stage runs last.
fn kf_factor(nfft: usize) -> Result<Vec<(usize, usize)>> {
    let mut radices = Vec::with_capacity(MAX_FACTORS);
    let mut n = nfft;
    let mut p = 4;
    while n > 1 {
        while n % p != 0 {
            p = match p {
                4 => 2,
                2 => 3,
                _ => p + 2,
            };
            if p * p > n {
                p = n;
            }
        }
        n /= p;
        if p > 5 || radices.len() == MAX_FACTORS {
            return Err(Error::InternalError(format!(
                "FFT size {nfft} is not a product of 2, 3, 4 and 5"
            )));
        }
        radices.push(p);
        if p == 2 && radices.len() > 2 {
            let last = radices.len() - 1;
            radices[last] = 4;
            radices[1] = 2;
        }
    }
    radices.reverse();

    let mut remaining = nfft;
    Ok(radices
        .into_iter()
        .map(|p| {
            remaining /= p;
            (p, remaining)
        })
        .collect())
}

fn compute_bitrev_table(
    fout: usize,
    table: &mut [usize],
    offset: usize,
    fstride: usize,
    factors: &[(usize, usize)],
) {
    let (p, m) = factors[0];
    let mut f = offset;
    let mut fout = fout;
    for j in 0..p {
        if m == 1 {
            table[f] = fout + j;
        } else {
            compute_bitrev_table(fout, table, f, fstride * p, &factors[1..]);
            fout += m;
        }
        f += fstride;
    }
}
