//! Range coder (RFC 6716 Section 4.1).
//!
//! The decoder is the entropy primitive every CELT stage consumes. One
//! [`RangeDecoder`] exists per in-flight packet; in hybrid mode the SILK and
//! CELT layers borrow the same instance in turn.
//!
//! [`RangeEncoder`] is the exact complement and exists so that bitstreams can
//! be produced for round-trip verification.

mod decoder;
mod encoder;

pub use decoder::RangeDecoder;
pub use encoder::RangeEncoder;

/// Bits per output symbol.
pub const EC_SYM_BITS: u32 = 8;
/// Total bits in the state registers.
pub const EC_CODE_BITS: u32 = 32;
/// Maximum symbol value.
pub const EC_SYM_MAX: u32 = (1 << EC_SYM_BITS) - 1;
/// Bits to shift by to move a symbol into the high-order position.
pub const EC_CODE_SHIFT: u32 = EC_CODE_BITS - EC_SYM_BITS - 1;
/// Carry bit of the high-order range symbol.
pub const EC_CODE_TOP: u32 = 1 << (EC_CODE_BITS - 1);
/// Low-order bit of the high-order range symbol.
pub const EC_CODE_BOT: u32 = EC_CODE_TOP >> EC_SYM_BITS;
/// Number of bits available for the last, partial symbol in the code field.
pub const EC_CODE_EXTRA: u32 = (EC_CODE_BITS - 2) % EC_SYM_BITS + 1;
/// Size of the raw-bits window in bits.
pub const EC_WINDOW_SIZE: u32 = 32;
/// Number of bits to code with the range coder in `ec_dec_uint`; the rest are raw.
pub const EC_UINT_BITS: u32 = 8;
/// Fractional precision of `ec_tell_frac` (1/8 bit).
pub const BITRES: u32 = 3;

/// Initial whole-bit count after `ec_dec_init`.
pub(crate) const EC_INITIAL_BITS: u32 =
    EC_CODE_BITS + 1 - ((EC_CODE_BITS - EC_CODE_EXTRA) / EC_SYM_BITS) * EC_SYM_BITS;

const TELL_FRAC_CORRECTION: [u32; 8] = [35733, 38967, 42495, 46340, 50535, 55109, 60097, 65535];

/// Shared `ec_tell_frac` formula.
///
/// Approximates `nbits_total*8 - 8*log2(rng)` with a lookup table so that the
/// encoder and the decoder agree on every bit-budget decision.
pub(crate) const fn tell_frac(nbits_total: u32, rng: u32) -> u32 {
    let nbits = nbits_total << BITRES;
    let l = crate::util::ilog(rng);
    let r = rng >> (l - 16);
    let mut b = (r >> 12) - 8;
    if r > TELL_FRAC_CORRECTION[b as usize] {
        b += 1;
    }
    nbits - ((l << 3) + b)
}
