#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Fixed-point CELT decoder core for Opus.
//!
//! Decodes CELT frames bit-exactly with the fixed-point reference decoder,
//! including the range decoder the SILK layer shares in hybrid packets.
//!
//! ```
//! use moosicbox_celt_decoder::{CeltDecoder, Channels, DecoderConfig, SampleRate};
//!
//! let mut decoder = CeltDecoder::new(DecoderConfig::new(SampleRate::Hz48000, Channels::Stereo))?;
//! let mut pcm = vec![0_i16; 2 * 960];
//! // A missing frame plays out the previous one's tail.
//! let samples = decoder.decode(&[], &mut pcm, 960)?;
//! assert_eq!(samples, 960);
//! # Ok::<(), moosicbox_celt_decoder::Error>(())
//! ```

pub mod celt;
pub mod error;
pub mod range;
mod util;

pub use celt::{CeltDecoder, CeltRequest, CtlReply, DecoderConfig};
pub use error::{Error, Result};

/// Output channel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Mono = 1,
    Stereo = 2,
}

/// Output sample rate. CELT always decodes at 48 kHz and decimates to the
/// lower rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleRate {
    Hz8000 = 8000,
    Hz12000 = 12000,
    Hz16000 = 16000,
    Hz24000 = 24000,
    Hz48000 = 48000,
}
