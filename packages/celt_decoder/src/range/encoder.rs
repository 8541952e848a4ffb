use crate::error::{Error, Result};
use crate::util::ilog;

use super::decoder::{LAPLACE_LOG_MINP, LAPLACE_MINP, laplace_get_freq1};
use super::{
    EC_CODE_BITS, EC_CODE_BOT, EC_CODE_SHIFT, EC_CODE_TOP, EC_SYM_BITS, EC_SYM_MAX, EC_UINT_BITS,
    EC_WINDOW_SIZE,
};

/// Range encoder producing bitstreams for [`super::RangeDecoder`].
///
/// Mirrors libopus `entenc.c`. Symbols are written to the front of a
/// fixed-size buffer, raw bits to the back; [`Self::done`] flushes both and
/// zero-fills the gap.
///
/// # Examples
///
/// ```rust
/// # use moosicbox_celt_decoder::range::{RangeDecoder, RangeEncoder};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut encoder = RangeEncoder::new(16);
/// encoder.enc_bit_logp(true, 3)?;
/// encoder.enc_uint(1234, 5000)?;
/// let bytes = encoder.done()?;
///
/// let mut decoder = RangeDecoder::new(&bytes);
/// assert!(decoder.ec_dec_bit_logp(3)?);
/// assert_eq!(decoder.ec_dec_uint(5000)?, 1234);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RangeEncoder {
    buffer: Vec<u8>,
    position: usize,
    end_position: usize,
    end_window: u32,
    end_bits_used: u32,
    total_bits: u32,
    range: u32,
    value: u32,
    remainder: Option<u32>,
    extra: u32,
    error: bool,
}

impl RangeEncoder {
    /// Creates an encoder writing into a buffer of exactly `storage` bytes.
    #[must_use]
    pub fn new(storage: usize) -> Self {
        Self {
            buffer: vec![0; storage],
            position: 0,
            end_position: 0,
            end_window: 0,
            end_bits_used: 0,
            total_bits: EC_CODE_BITS + 1,
            range: EC_CODE_TOP,
            value: 0,
            remainder: None,
            extra: 0,
            error: false,
        }
    }

    fn write_byte(&mut self, value: u32) {
        if self.position + self.end_position >= self.buffer.len() {
            self.error = true;
            return;
        }
        #[allow(clippy::cast_possible_truncation)]
        {
            self.buffer[self.position] = value as u8;
        }
        self.position += 1;
    }

    fn write_byte_at_end(&mut self, value: u32) {
        if self.position + self.end_position >= self.buffer.len() {
            self.error = true;
            return;
        }
        self.end_position += 1;
        let index = self.buffer.len() - self.end_position;
        #[allow(clippy::cast_possible_truncation)]
        {
            self.buffer[index] = value as u8;
        }
    }

    /// Outputs a symbol, with a carry bit, buffering runs of `0xFF` whose
    /// final value depends on a later carry.
    fn carry_out(&mut self, c: u32) {
        if c == EC_SYM_MAX {
            self.extra += 1;
            return;
        }
        let carry = c >> EC_SYM_BITS;
        if let Some(rem) = self.remainder {
            self.write_byte(rem + carry);
        }
        if self.extra > 0 {
            let sym = (EC_SYM_MAX + carry) & EC_SYM_MAX;
            while self.extra > 0 {
                self.write_byte(sym);
                self.extra -= 1;
            }
        }
        self.remainder = Some(c & EC_SYM_MAX);
    }

    fn normalize(&mut self) {
        while self.range <= EC_CODE_BOT {
            self.carry_out(self.value >> EC_CODE_SHIFT);
            self.value = (self.value << EC_SYM_BITS) & (EC_CODE_TOP - 1);
            self.range <<= EC_SYM_BITS;
            self.total_bits += EC_SYM_BITS;
        }
    }

    /// Encodes the interval `[fl, fh)` of a total of `ft`.
    ///
    /// # Errors
    ///
    /// * Returns an error if the interval is empty or exceeds `ft`.
    pub fn encode(&mut self, fl: u32, fh: u32, ft: u32) -> Result<()> {
        if ft == 0 || fl >= fh || fh > ft {
            return Err(Error::RangeDecoder(format!(
                "invalid symbol interval [{fl}, {fh}) of {ft}"
            )));
        }
        let r = self.range / ft;
        self.apply(r, fl, fh, ft);
        Ok(())
    }

    /// Encodes the interval `[fl, fh)` of a total of `1 << bits`.
    ///
    /// # Errors
    ///
    /// * Returns an error if the interval is empty or exceeds `1 << bits`.
    pub fn encode_bin(&mut self, fl: u32, fh: u32, bits: u32) -> Result<()> {
        if bits > 16 || fl >= fh || fh > 1 << bits {
            return Err(Error::RangeDecoder(format!(
                "invalid symbol interval [{fl}, {fh}) of 1<<{bits}"
            )));
        }
        let r = self.range >> bits;
        self.apply(r, fl, fh, 1 << bits);
        Ok(())
    }

    fn apply(&mut self, r: u32, fl: u32, fh: u32, ft: u32) {
        if fl > 0 {
            self.value = self
                .value
                .wrapping_add(self.range.wrapping_sub(r * (ft - fl)));
            self.range = r * (fh - fl);
        } else {
            self.range -= r * (ft - fh);
        }
        self.normalize();
    }

    /// Encodes a bit that is one with probability `1/(1<<logp)`.
    ///
    /// # Errors
    ///
    /// * Returns an error if `logp` is zero or at least 32.
    pub fn enc_bit_logp(&mut self, bit: bool, logp: u32) -> Result<()> {
        if logp == 0 || logp >= EC_CODE_BITS {
            return Err(Error::RangeDecoder(format!("invalid logp {logp}")));
        }
        let r = self.range;
        let l = self.value;
        let s = r >> logp;
        let r = r - s;
        if bit {
            self.value = l.wrapping_add(r);
        }
        self.range = if bit { s } else { r };
        self.normalize();
        Ok(())
    }

    /// Encodes symbol `s` of an inverse CDF table.
    ///
    /// # Errors
    ///
    /// * Returns an error if `s` is not a symbol of the table.
    pub fn enc_icdf(&mut self, s: usize, icdf: &[u8], ftb: u32) -> Result<()> {
        if s >= icdf.len() || icdf.last() != Some(&0) {
            return Err(Error::RangeDecoder(format!("symbol {s} not in icdf table")));
        }
        let r = self.range >> ftb;
        if s > 0 {
            let prev = u32::from(icdf[s - 1]);
            self.value = self
                .value
                .wrapping_add(self.range.wrapping_sub(r * prev));
            self.range = r * (prev - u32::from(icdf[s]));
        } else {
            self.range -= r * u32::from(icdf[s]);
        }
        self.normalize();
        Ok(())
    }

    /// Encodes `fl` uniformly in `[0, ft)`.
    ///
    /// # Errors
    ///
    /// * Returns an error if `ft < 1` or `fl >= ft`.
    pub fn enc_uint(&mut self, fl: u32, ft: u32) -> Result<()> {
        if ft == 0 || fl >= ft {
            return Err(Error::RangeDecoder(format!("value {fl} out of [0, {ft})")));
        }
        let ft = ft - 1;
        let ftb = ilog(ft);
        if ftb > EC_UINT_BITS {
            let ftb = ftb - EC_UINT_BITS;
            let ft_high = (ft >> ftb) + 1;
            let fl_high = fl >> ftb;
            self.encode(fl_high, fl_high + 1, ft_high)?;
            self.enc_bits(fl & ((1 << ftb) - 1), ftb)
        } else {
            self.encode(fl, fl + 1, ft + 1)
        }
    }

    /// Writes `bits` raw bits to the end of the buffer.
    ///
    /// # Errors
    ///
    /// * Returns an error if `bits > 25` or `fl` does not fit.
    pub fn enc_bits(&mut self, fl: u32, bits: u32) -> Result<()> {
        if bits > 25 || (bits < 32 && fl >> bits != 0) {
            return Err(Error::RangeDecoder(format!(
                "value {fl} does not fit in {bits} bits"
            )));
        }
        let mut window = self.end_window;
        let mut used = self.end_bits_used;
        if used + bits > EC_WINDOW_SIZE {
            loop {
                self.write_byte_at_end(window & EC_SYM_MAX);
                window >>= EC_SYM_BITS;
                used -= EC_SYM_BITS;
                if used < EC_SYM_BITS {
                    break;
                }
            }
        }
        window |= fl << used;
        used += bits;
        self.end_window = window;
        self.end_bits_used = used;
        self.total_bits += bits;
        Ok(())
    }

    /// Encodes a Laplace-distributed value.
    ///
    /// Values beyond the representable tail are clamped; the value actually
    /// coded is returned.
    ///
    /// # Errors
    ///
    /// * Returns an error if range encoding fails
    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn laplace_encode(&mut self, value: i32, fs: u32, decay: u32) -> Result<i32> {
        let mut coded = value;
        let mut fl = 0_u32;
        let mut fs = fs;
        if value != 0 {
            let s: i32 = -i32::from(value < 0);
            let val = (value + s) ^ s;
            fl = fs;
            fs = laplace_get_freq1(fs, decay);
            let mut i = 1;
            while fs > 0 && i < val {
                fs *= 2;
                fl += fs + 2 * LAPLACE_MINP;
                fs = (fs * decay) >> 15;
                i += 1;
            }
            if fs == 0 {
                let ndi_max = ((32768 - fl + LAPLACE_MINP - 1) >> LAPLACE_LOG_MINP) as i32;
                let ndi_max = (ndi_max - s) >> 1;
                let di = (val - i).min(ndi_max - 1);
                fl = (fl as i32 + (2 * di + 1 + s) * LAPLACE_MINP as i32) as u32;
                fs = LAPLACE_MINP.min(32768 - fl);
                coded = (i + di + s) ^ s;
            } else {
                fs += LAPLACE_MINP;
                fl += fs & !(s as u32);
            }
        }
        self.encode_bin(fl, fl + fs, 15)?;
        Ok(coded)
    }

    /// Whole bits written so far, by the same formula as the decoder.
    #[must_use]
    pub const fn tell(&self) -> u32 {
        self.total_bits - ilog(self.range)
    }

    /// Bits written so far in 1/8 bit units.
    #[must_use]
    pub const fn tell_frac(&self) -> u32 {
        super::tell_frac(self.total_bits, self.range)
    }

    /// Current range; after [`Self::done`] this equals the decoder's final range.
    #[must_use]
    pub const fn get_range(&self) -> u32 {
        self.range
    }

    /// Flushes all pending state and returns the finished buffer.
    ///
    /// # Errors
    ///
    /// * Returns an error if the symbols did not fit in the buffer.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn done(mut self) -> Result<Vec<u8>> {
        let mut l = (EC_CODE_BITS - ilog(self.range)) as i32;
        let mut msk = (EC_CODE_TOP - 1) >> l;
        let mut end = self.value.wrapping_add(msk) & !msk;
        if (end | msk) >= self.value.wrapping_add(self.range) {
            l += 1;
            msk >>= 1;
            end = self.value.wrapping_add(msk) & !msk;
        }
        while l > 0 {
            self.carry_out(end >> EC_CODE_SHIFT);
            end = (end << EC_SYM_BITS) & (EC_CODE_TOP - 1);
            l -= EC_SYM_BITS as i32;
        }
        if self.remainder.is_some() || self.extra > 0 {
            self.carry_out(0);
        }

        let mut window = self.end_window;
        let mut used = self.end_bits_used;
        while used >= EC_SYM_BITS {
            self.write_byte_at_end(window & EC_SYM_MAX);
            window >>= EC_SYM_BITS;
            used -= EC_SYM_BITS;
        }

        if !self.error {
            let gap_end = self.buffer.len() - self.end_position;
            self.buffer[self.position..gap_end].fill(0);
            if used > 0 {
                if self.end_position >= self.buffer.len() {
                    self.error = true;
                } else {
                    let l = (-l) as u32;
                    if self.position + self.end_position >= self.buffer.len() && l < used {
                        window &= (1 << l) - 1;
                        self.error = true;
                    }
                    let index = self.buffer.len() - self.end_position - 1;
                    #[allow(clippy::cast_possible_truncation)]
                    {
                        self.buffer[index] |= window as u8;
                    }
                }
            }
        }

        if self.error {
            return Err(Error::RangeDecoder(
                "encoded symbols do not fit in the buffer".to_string(),
            ));
        }
        Ok(self.buffer)
    }
}
