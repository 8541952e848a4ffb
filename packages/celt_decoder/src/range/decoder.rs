use crate::error::{Error, Result};
use crate::util::ilog;

use super::{
    EC_CODE_BITS, EC_CODE_BOT, EC_CODE_EXTRA, EC_CODE_TOP, EC_INITIAL_BITS, EC_SYM_BITS,
    EC_SYM_MAX, EC_UINT_BITS, EC_WINDOW_SIZE,
};

/// Range decoder for entropy decoding of CELT frames.
///
/// Implements the range decoder specified in RFC 6716 Section 4.1, matching
/// libopus `entdec.c` bit for bit. Range-coded symbols are read from the front
/// of the buffer and raw bits from the back; both cursors stop at the declared
/// buffer length and synthesize zero bytes past it.
///
/// The decoder borrows the frame bytes for its whole lifetime, so a hybrid
/// SILK/CELT packet can hand the same `&mut RangeDecoder` to both layers.
///
/// # Examples
///
/// ```rust
/// # use moosicbox_celt_decoder::range::RangeDecoder;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let frame = [0x00, 0x00, 0x00, 0x00];
/// let mut decoder = RangeDecoder::new(&frame);
///
/// // The CELT silence flag has a probability of 1/32768.
/// let silence = decoder.ec_dec_bit_logp(15)?;
/// assert!(!silence);
/// assert_eq!(decoder.ec_tell(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RangeDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
    end_position: usize,
    end_window: u32,
    end_bits_available: u32,
    total_bits: u32,
    range: u32,
    value: u32,
    remainder: u32,
    error: bool,
}

impl<'a> RangeDecoder<'a> {
    /// Creates a new range decoder and initializes it per RFC 6716 Section 4.1.1.
    ///
    /// An empty buffer is valid: every read then synthesizes zero bits.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        let mut decoder = Self {
            buffer: data,
            position: 0,
            end_position: 0,
            end_window: 0,
            end_bits_available: 0,
            total_bits: EC_INITIAL_BITS,
            range: 1 << EC_CODE_EXTRA,
            value: 0,
            remainder: 0,
            error: false,
        };

        decoder.remainder = u32::from(decoder.read_byte());
        decoder.value = decoder.range - 1 - (decoder.remainder >> (EC_SYM_BITS - EC_CODE_EXTRA));
        decoder.normalize();

        decoder
    }

    fn read_byte(&mut self) -> u8 {
        self.buffer.get(self.position).map_or(0, |&byte| {
            self.position += 1;
            byte
        })
    }

    fn read_byte_from_end(&mut self) -> u8 {
        if self.end_position < self.buffer.len() {
            self.end_position += 1;
            self.buffer[self.buffer.len() - self.end_position]
        } else {
            0
        }
    }

    fn normalize(&mut self) {
        while self.range <= EC_CODE_BOT {
            self.total_bits += EC_SYM_BITS;
            self.range <<= EC_SYM_BITS;

            let mut sym = self.remainder;
            self.remainder = u32::from(self.read_byte());
            sym = ((sym << EC_SYM_BITS) | self.remainder) >> (EC_SYM_BITS - EC_CODE_EXTRA);

            self.value = ((self.value << EC_SYM_BITS) + (EC_SYM_MAX & !sym)) & (EC_CODE_TOP - 1);
        }
    }

    /// Decodes a symbol with cumulative frequency `ft` per RFC 6716 Section 4.1.2.
    ///
    /// Must be followed by [`Self::ec_dec_update`] with the located symbol's interval.
    ///
    /// # Errors
    ///
    /// * Returns an error if `ft` is zero.
    pub fn ec_decode(&mut self, ft: u32) -> Result<u32> {
        if ft == 0 {
            return Err(Error::RangeDecoder("ft must be positive".to_string()));
        }
        let ext = self.range / ft;
        let s = self.value / ext;
        Ok(ft - (s + 1).min(ft))
    }

    /// Decodes a symbol from a power-of-two alphabet (`ft = 1 << bits`).
    ///
    /// Division by `ft` becomes a shift; the result is identical to
    /// `ec_decode(1 << bits)`.
    ///
    /// # Errors
    ///
    /// * Returns an error if `bits` is larger than 16.
    pub fn ec_decode_bin(&mut self, bits: u32) -> Result<u32> {
        if bits > 16 {
            return Err(Error::RangeDecoder(format!(
                "cannot decode a {bits}-bit binary symbol"
            )));
        }
        let ft = 1_u32 << bits;
        let ext = self.range >> bits;
        let s = self.value / ext;
        Ok(ft - (s + 1).min(ft))
    }

    /// Updates decoder state after decoding a symbol per RFC 6716 Section 4.1.2.
    ///
    /// # Errors
    ///
    /// * Returns an error if the interval `[fl, fh)` is not inside `[0, ft]`.
    pub fn ec_dec_update(&mut self, fl: u32, fh: u32, ft: u32) -> Result<()> {
        if ft == 0 || fl >= fh || fh > ft {
            return Err(Error::RangeDecoder(format!(
                "invalid symbol interval [{fl}, {fh}) of {ft}"
            )));
        }
        let ext = self.range / ft;
        let s = ext * (ft - fh);
        self.value = self.value.wrapping_sub(s);
        self.range = if fl > 0 { ext * (fh - fl) } else { self.range - s };
        self.normalize();
        Ok(())
    }

    /// Decodes a single bit with probability `1/(1<<logp)` of being one,
    /// per RFC 6716 Section 4.1.3.2.
    ///
    /// # Errors
    ///
    /// * Returns an error if `logp` is zero or at least 32.
    pub fn ec_dec_bit_logp(&mut self, logp: u32) -> Result<bool> {
        if logp == 0 || logp >= EC_CODE_BITS {
            return Err(Error::RangeDecoder(format!("invalid logp {logp}")));
        }
        let r = self.range;
        let d = self.value;
        let s = r >> logp;
        let ret = d < s;
        if !ret {
            self.value = d - s;
        }
        self.range = if ret { s } else { r - s };
        self.normalize();
        Ok(ret)
    }

    /// Decodes a symbol using an inverse CDF table per RFC 6716 Section 4.1.3.3.
    ///
    /// The table MUST be terminated with a value of 0.
    ///
    /// # Errors
    ///
    /// * Returns an error if the table is empty or does not end in 0.
    pub fn ec_dec_icdf(&mut self, icdf: &[u8], ftb: u32) -> Result<usize> {
        if icdf.last() != Some(&0) {
            return Err(Error::RangeDecoder(
                "icdf table must be terminated by 0".to_string(),
            ));
        }
        let mut s = self.range;
        let d = self.value;
        let r = s >> ftb;

        let mut ret = 0;
        let mut t;
        loop {
            t = s;
            s = r * u32::from(icdf[ret]);
            if d >= s {
                break;
            }
            ret += 1;
        }

        self.value = d - s;
        self.range = t - s;
        self.normalize();

        Ok(ret)
    }

    /// Decodes a uniformly distributed integer in `[0, ft)` per RFC 6716 Section 4.1.5.
    ///
    /// Values above 8 bits are split into a range-coded high part and raw low
    /// bits. A decoded value outside `[0, ft)` cannot come from a valid
    /// encoder: the sticky error flag is raised and `ft - 1` is returned, so
    /// decoding continues with a bounded value.
    ///
    /// # Errors
    ///
    /// * Returns an error if `ft` is zero.
    pub fn ec_dec_uint(&mut self, ft: u32) -> Result<u32> {
        if ft == 0 {
            return Err(Error::RangeDecoder("ft must be positive".to_string()));
        }

        let ft = ft - 1;
        let ftb = ilog(ft);
        if ftb > EC_UINT_BITS {
            let ftb = ftb - EC_UINT_BITS;
            let ft_high = (ft >> ftb) + 1;
            let s = self.ec_decode(ft_high)?;
            self.ec_dec_update(s, s + 1, ft_high)?;
            let t = (s << ftb) | self.ec_dec_bits(ftb)?;
            if t <= ft {
                return Ok(t);
            }
            log::trace!("ec_dec_uint: decoded {t} > {ft}, flagging corrupt frame");
            self.error = true;
            Ok(ft)
        } else {
            let ft = ft + 1;
            let s = self.ec_decode(ft)?;
            self.ec_dec_update(s, s + 1, ft)?;
            Ok(s)
        }
    }

    /// Extracts raw bits from the end of the frame per RFC 6716 Section 4.1.4.
    ///
    /// # Errors
    ///
    /// * Returns an error if `bits > 25`.
    pub fn ec_dec_bits(&mut self, bits: u32) -> Result<u32> {
        if bits > 25 {
            return Err(Error::RangeDecoder(
                "cannot decode more than 25 bits at once".to_string(),
            ));
        }

        let mut window = self.end_window;
        let mut available = self.end_bits_available;
        if available < bits {
            loop {
                window |= u32::from(self.read_byte_from_end()) << available;
                available += EC_SYM_BITS;
                if available > EC_WINDOW_SIZE - EC_SYM_BITS {
                    break;
                }
            }
        }

        let result = window & ((1_u32 << bits) - 1);
        self.end_window = window.checked_shr(bits).unwrap_or(0);
        self.end_bits_available = available - bits;
        self.total_bits += bits;

        Ok(result)
    }

    /// Decodes a Laplace-distributed value per RFC 6716 Section 4.3.2.1.
    ///
    /// Reference: <https://gitlab.xiph.org/xiph/opus/-/blob/34bba701ae97c913de719b1f7c10686f62cddb15/celt/laplace.c#L101-142>
    ///
    /// # Arguments
    ///
    /// * `fs` - Probability of zero (Q15)
    /// * `decay` - Decay parameter of the geometric tails (Q14)
    ///
    /// # Errors
    ///
    /// * Returns an error if range decoding fails
    #[allow(clippy::cast_possible_wrap)]
    pub fn ec_laplace_decode(&mut self, fs: u32, decay: u32) -> Result<i32> {
        let mut val: i32 = 0;
        let fm = self.ec_decode_bin(15)?;
        let mut fl: u32 = 0;
        let mut fs = fs;

        if fm >= fs {
            val += 1;
            fl = fs;
            fs = laplace_get_freq1(fs, decay) + LAPLACE_MINP;

            while fs > LAPLACE_MINP && fm >= fl + 2 * fs {
                fs *= 2;
                fl += fs;
                fs = ((fs - 2 * LAPLACE_MINP) * decay) >> 15;
                fs += LAPLACE_MINP;
                val += 1;
            }

            if fs <= LAPLACE_MINP {
                let di = (fm - fl) >> (LAPLACE_LOG_MINP + 1);
                val += di as i32;
                fl += 2 * di * LAPLACE_MINP;
            }

            if fm < fl + fs {
                val = -val;
            } else {
                fl += fs;
            }
        }

        self.ec_dec_update(fl, (fl + fs).min(32768), 32768)?;

        Ok(val)
    }

    /// Returns the number of whole bits consumed so far (`ec_tell`).
    #[must_use]
    pub const fn ec_tell(&self) -> u32 {
        self.total_bits - ilog(self.range)
    }

    /// Returns the number of bits consumed so far in 1/8 bit units (`ec_tell_frac`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use moosicbox_celt_decoder::range::RangeDecoder;
    /// let packet = vec![0x80, 0x00, 0x00, 0x00];
    /// let decoder = RangeDecoder::new(&packet);
    ///
    /// assert_eq!(decoder.ec_tell(), 1);
    /// assert_eq!(decoder.ec_tell_frac(), 8);
    /// ```
    #[must_use]
    pub const fn ec_tell_frac(&self) -> u32 {
        super::tell_frac(self.total_bits, self.range)
    }

    /// Size of the frame in bytes.
    #[must_use]
    pub const fn storage(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the current range value (`ec_range_final` once the frame is done).
    #[must_use]
    pub const fn get_range(&self) -> u32 {
        self.range
    }

    /// Whether a coding inconsistency was detected in this frame.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error
    }

    /// Accounts every remaining bit of the frame as read, so that
    /// [`Self::ec_tell`] reports exactly `8 * storage` afterwards.
    ///
    /// Used for silence frames, which carry nothing past the silence flag.
    #[allow(clippy::cast_possible_truncation)]
    pub fn consume_remaining(&mut self) {
        let frame_bits = (self.buffer.len() * 8) as u32;
        self.total_bits = self
            .total_bits
            .wrapping_add(frame_bits.wrapping_sub(self.ec_tell()));
    }

    /// Shrinks the declared buffer length (`storage`).
    ///
    /// Used when the trailing bytes of a packet belong to another layer, such
    /// as a redundancy frame in hybrid packets.
    pub fn shrink_storage(&mut self, storage: usize) {
        if storage < self.buffer.len() {
            self.buffer = &self.buffer[..storage];
        }
    }
}

pub(crate) const LAPLACE_LOG_MINP: u32 = 0;
pub(crate) const LAPLACE_MINP: u32 = 1 << LAPLACE_LOG_MINP;
const LAPLACE_NMIN: u32 = 16;

/// Probability of the first non-zero magnitude, excluding the minimum mass
/// reserved for the tails.
pub(crate) const fn laplace_get_freq1(fs0: u32, decay: u32) -> u32 {
    let ft = 32768 - LAPLACE_MINP * (2 * LAPLACE_NMIN) - fs0;
    (ft * (16384 - decay)) >> 15
}
