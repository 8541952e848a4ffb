//! CELT layer (RFC 6716 Section 4.3), fixed-point.
//!
//! The submodules follow the decode pipeline from the bottom up: arithmetic
//! kernel, transforms, mode tables, bit allocation, shape and energy
//! decoding, synthesis and finally the frame decoder itself.

pub mod bands;
pub mod cwrs;
pub mod decoder;
pub mod energy;
pub mod fft;
pub mod math;
pub mod mdct;
pub mod mode;
pub mod rate;
pub mod synthesis;
pub mod vq;

pub use decoder::{
    CeltDecoder, CeltRequest, CtlReply, DECODE_BUFFER_SIZE, DecoderConfig, MAX_FRAME_BYTES,
};
pub use mode::{CeltMode, NB_EBANDS};
