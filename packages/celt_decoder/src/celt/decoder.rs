//! CELT frame decoder.
//!
//! [`CeltDecoder`] owns everything that persists between frames (overlap
//! and pitch history, energy history, post-filter and deemphasis state) and
//! runs one frame through the pipeline per call: global flags, energies,
//! allocation, band shapes, anti-collapse, synthesis, post-filter and
//! deemphasis.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::error::{Error, Result};
use crate::range::{BITRES, RangeDecoder};
use crate::{Channels, SampleRate};

use super::bands::{BandParams, anti_collapse, quant_all_bands};
use super::energy::{unquant_coarse_energy, unquant_energy_finalise, unquant_fine_energy};
use super::math::DB_SHIFT;
use super::mode::{CeltMode, NB_EBANDS, mode};
use super::rate::{compute_allocation, init_caps};
use super::synthesis::{
    COMBFILTER_MAXPERIOD, PostFilter, SynthesisParams, celt_synthesis, comb_filter, deemphasis,
};
use super::vq::Spread;

/// Samples of time-domain history kept per channel.
pub const DECODE_BUFFER_SIZE: usize = 2048;
/// Largest frame a single Opus packet can carry.
pub const MAX_FRAME_BYTES: usize = 1275;

/// -28 dB, the floor energies are reset to.
const ENERGY_FLOOR: i16 = -(28 << DB_SHIFT);

const TAPSET_ICDF: [u8; 3] = [2, 1, 0];
const TRIM_ICDF: [u8; 11] = [126, 124, 119, 109, 87, 41, 19, 9, 4, 2, 0];

/// TF resolution change per `[LM][4 * transient + 2 * tf_select + tf_res]`.
const TF_SELECT_TABLE: [[i8; 8]; 4] = [
    [0, -1, 0, -1, 0, -1, 0, -1],
    [0, -1, 0, -2, 1, 0, 1, -1],
    [0, -2, 0, -3, 2, 0, 1, -1],
    [0, -2, 0, -3, 3, 0, 1, -1],
];

/// Output format of a [`CeltDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    pub sample_rate: SampleRate,
    pub channels: Channels,
}

impl DecoderConfig {
    #[must_use]
    pub const fn new(sample_rate: SampleRate, channels: Channels) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Decimation factor from the 48 kHz decoding rate.
    #[must_use]
    pub const fn downsample(&self) -> usize {
        48_000 / self.sample_rate as usize
    }
}

/// Multiplexed control requests, for callers bridging a C-style control
/// interface. Each maps onto one of the typed methods of [`CeltDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeltRequest {
    SetStartBand(i32),
    SetEndBand(i32),
    SetChannels(i32),
    GetAndClearError,
    GetLookahead,
    GetPitch,
    GetMode,
    SetSignalling(i32),
    GetFinalRange,
    SetPhaseInversionDisabled(i32),
    GetPhaseInversionDisabled,
    ResetState,
}

impl CeltRequest {
    /// Maps a libopus request code and its argument to a request.
    ///
    /// # Errors
    ///
    /// * `Error::Unimplemented` for request codes this decoder does not know
    pub fn from_code(request: i32, value: i32) -> Result<Self> {
        Ok(match request {
            10_010 => Self::SetStartBand(value),
            10_012 => Self::SetEndBand(value),
            10_008 => Self::SetChannels(value),
            10_007 => Self::GetAndClearError,
            4027 => Self::GetLookahead,
            4033 => Self::GetPitch,
            10_015 => Self::GetMode,
            10_016 => Self::SetSignalling(value),
            4031 => Self::GetFinalRange,
            4046 => Self::SetPhaseInversionDisabled(value),
            4047 => Self::GetPhaseInversionDisabled,
            4028 => Self::ResetState,
            _ => return Err(Error::Unimplemented(format!("control request {request}"))),
        })
    }
}

/// Reply to a [`CeltRequest`].
#[derive(Debug, Clone, Copy)]
pub enum CtlReply {
    Done,
    Value(i32),
    FinalRange(u32),
    Mode(&'static CeltMode),
}

/// Everything a reset clears.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DecoderState {
    rng: u32,
    error: bool,
    loss_count: u32,
    postfilter: PostFilter,
    postfilter_old: PostFilter,
    preemph_mem: [i32; 2],
    /// Per output channel: pitch history, the current frame and the
    /// overlap tail.
    decode_mem: Vec<Vec<i32>>,
    old_band_e: [i16; 2 * NB_EBANDS],
    old_log_e: [i16; 2 * NB_EBANDS],
    old_log_e2: [i16; 2 * NB_EBANDS],
    background_log_e: [i16; 2 * NB_EBANDS],
}

impl DecoderState {
    fn new(channels: usize, overlap: usize) -> Self {
        Self {
            rng: 0,
            error: false,
            loss_count: 0,
            postfilter: PostFilter::default(),
            postfilter_old: PostFilter::default(),
            preemph_mem: [0; 2],
            decode_mem: vec![vec![0; DECODE_BUFFER_SIZE + overlap]; channels],
            old_band_e: [0; 2 * NB_EBANDS],
            old_log_e: [ENERGY_FLOOR; 2 * NB_EBANDS],
            old_log_e2: [ENERGY_FLOOR; 2 * NB_EBANDS],
            background_log_e: [0; 2 * NB_EBANDS],
        }
    }

    /// Drops the oldest `n` samples of history to make room for a frame.
    fn shift_history(&mut self, n: usize, overlap: usize) {
        for mem in &mut self.decode_mem {
            mem.copy_within(n..DECODE_BUFFER_SIZE + overlap / 2, 0);
        }
    }

    /// Filters the `n` samples of the new frame, fading from the previous
    /// post-filter to the current one over the first short block, then to
    /// `next` over the rest, and makes `next` current.
    fn run_postfilter(&mut self, mode: &CeltMode, n: usize, lm: usize, next: PostFilter) {
        let short = mode.short_mdct_size;
        let start = DECODE_BUFFER_SIZE - n;
        for mem in &mut self.decode_mem {
            comb_filter(mem, start, short, self.postfilter_old, self.postfilter, &mode.window, mode.overlap);
            if lm != 0 {
                comb_filter(mem, start + short, n - short, self.postfilter, next, &mode.window, mode.overlap);
            }
        }
        self.postfilter_old = self.postfilter;
        self.postfilter = next;
        if lm != 0 {
            self.postfilter_old = self.postfilter;
        }
    }

    fn deemphasis(&mut self, mode: &CeltMode, pcm: &mut [i16], n: usize, downsample: usize) {
        let out: Vec<&[i32]> = self
            .decode_mem
            .iter()
            .map(|mem| &mem[DECODE_BUFFER_SIZE - n..DECODE_BUFFER_SIZE])
            .collect();
        deemphasis(&out, pcm, n, downsample, mode.preemph, &mut self.preemph_mem);
    }

    /// Energy bookkeeping once a frame is decoded.
    fn roll_energy_history(&mut self, stream_channels: usize, transient: bool, m: i32, start: usize, end: usize) {
        let nb = NB_EBANDS;
        if stream_channels == 1 {
            self.old_band_e.copy_within(0..nb, nb);
        }
        if transient {
            for (log_e, &e) in self.old_log_e.iter_mut().zip(&self.old_band_e) {
                *log_e = (*log_e).min(e);
            }
        } else {
            self.old_log_e2 = self.old_log_e;
            self.old_log_e = self.old_band_e;
            // Background noise rises by at most 2.4 dB/s, unless the stream has
            // been mostly lost.
            let increase = if self.loss_count < 10 { m } else { 1 << DB_SHIFT };
            for (bg, &e) in self.background_log_e.iter_mut().zip(&self.old_band_e) {
                *bg = (i32::from(*bg) + increase).min(i32::from(e)) as i16;
            }
        }
        for c in 0..2 {
            for i in (0..start).chain(end..nb) {
                self.old_band_e[c * nb + i] = 0;
                self.old_log_e[c * nb + i] = ENERGY_FLOOR;
                self.old_log_e2[c * nb + i] = ENERGY_FLOOR;
            }
        }
    }
}

/// Fixed-point CELT decoder for the standard 48 kHz mode.
#[derive(Debug, Clone)]
pub struct CeltDecoder {
    mode: &'static CeltMode,
    config: DecoderConfig,
    /// Output channels.
    channels: usize,
    /// Channels coded in the stream.
    stream_channels: usize,
    downsample: usize,
    start: usize,
    end: usize,
    signalling: bool,
    disable_inv: bool,
    state: DecoderState,
    /// 16-bit output of `decode_float` before scaling.
    pcm_scratch: Vec<i16>,
}

impl CeltDecoder {
    /// Creates a decoder producing `config.channels` channels at
    /// `config.sample_rate`.
    ///
    /// # Errors
    ///
    /// * If the mode tables cannot be built
    pub fn new(config: DecoderConfig) -> Result<Self> {
        let mode = mode()?;
        let channels = config.channels as usize;
        let decoder = Self {
            mode,
            config,
            channels,
            stream_channels: channels,
            downsample: config.downsample(),
            start: 0,
            end: mode.eff_ebands,
            signalling: true,
            disable_inv: channels == 1,
            state: DecoderState::new(channels, mode.overlap),
            pcm_scratch: Vec::new(),
        };
        log::debug!(
            "CeltDecoder: created {:?} {:?} decoder (downsample {})",
            config.sample_rate,
            config.channels,
            decoder.downsample
        );
        Ok(decoder)
    }

    #[must_use]
    pub const fn config(&self) -> DecoderConfig {
        self.config
    }

    /// Decodes one frame of `data` into `frame_size` interleaved samples per
    /// channel of `pcm`, returning the number of samples per channel.
    ///
    /// Frames of at most one byte decode as silence.
    ///
    /// # Errors
    ///
    /// * `Error::BadArg` if `frame_size` is not a CELT frame size at the
    ///   output rate, `data` is longer than an Opus frame, or `pcm` is too
    ///   short. The decoder state is left untouched.
    /// * `Error::InternalError` if decoding read past the end of `data`
    /// * If the range decoder rejects a read
    pub fn decode(&mut self, data: &[u8], pcm: &mut [i16], frame_size: usize) -> Result<usize> {
        let lm = self.validate(data.len(), pcm.len(), frame_size)?;
        self.decode_validated(data, pcm, lm)
    }

    fn decode_validated(&mut self, data: &[u8], pcm: &mut [i16], lm: usize) -> Result<usize> {
        if data.len() <= 1 {
            return Ok(self.decode_lost(pcm, lm));
        }
        let mut dec = RangeDecoder::new(data);
        self.decode_frame(&mut dec, pcm, lm)
    }

    /// Like [`Self::decode`], reading the frame from a range decoder that
    /// may already have consumed the start of the packet (hybrid packets).
    ///
    /// # Errors
    ///
    /// * As for [`Self::decode`]
    pub fn decode_with_ec(
        &mut self,
        dec: &mut RangeDecoder<'_>,
        pcm: &mut [i16],
        frame_size: usize,
    ) -> Result<usize> {
        let lm = self.validate(dec.storage(), pcm.len(), frame_size)?;
        if dec.storage() <= 1 {
            return Ok(self.decode_lost(pcm, lm));
        }
        self.decode_frame(dec, pcm, lm)
    }

    /// Like [`Self::decode`], with samples scaled to `[-1, 1)`.
    ///
    /// # Errors
    ///
    /// * As for [`Self::decode`]
    pub fn decode_float(&mut self, data: &[u8], pcm: &mut [f32], frame_size: usize) -> Result<usize> {
        let lm = self.validate(data.len(), pcm.len(), frame_size)?;
        let mut scratch = std::mem::take(&mut self.pcm_scratch);
        scratch.resize(frame_size * self.channels, 0);
        let result = self.decode_validated(data, &mut scratch, lm);
        if let Ok(samples) = &result {
            for (out, &s) in pcm.iter_mut().zip(&scratch[..samples * self.channels]) {
                *out = f32::from(s) * (1.0 / 32768.0);
            }
        }
        self.pcm_scratch = scratch;
        result
    }

    fn validate(&self, len: usize, pcm_len: usize, frame_size: usize) -> Result<usize> {
        let lm = self
            .mode
            .lm_for_frame_size(frame_size * self.downsample)
            .ok_or_else(|| {
                Error::BadArg(format!(
                    "frame size {frame_size} at {:?}",
                    self.config.sample_rate
                ))
            })?;
        if len > MAX_FRAME_BYTES {
            return Err(Error::BadArg(format!("frame of {len} bytes")));
        }
        if pcm_len < frame_size * self.channels {
            return Err(Error::BadArg(format!(
                "output holds {pcm_len} samples, {} needed",
                frame_size * self.channels
            )));
        }
        if self.start >= self.end {
            return Err(Error::BadArg(format!(
                "empty band range {}..{}",
                self.start, self.end
            )));
        }
        Ok(lm)
    }

    /// Missing frame: the spectrum is taken as silent while the overlap,
    /// post-filter and deemphasis tails play out.
    fn decode_lost(&mut self, pcm: &mut [i16], lm: usize) -> usize {
        let mode = self.mode;
        let n = mode.short_mdct_size << lm;
        log::trace!("CeltDecoder: lost frame of {n} samples");

        let st = &mut self.state;
        st.shift_history(n, mode.overlap);
        let x = vec![0_i16; self.stream_channels * n];
        let params = SynthesisParams {
            start: self.start,
            eff_end: self.end.min(mode.eff_ebands),
            stream_channels: self.stream_channels,
            lm,
            transient: false,
            downsample: self.downsample,
            silence: true,
        };
        let mut out_syn: Vec<&mut [i32]> = st
            .decode_mem
            .iter_mut()
            .map(|mem| &mut mem[DECODE_BUFFER_SIZE - n..])
            .collect();
        celt_synthesis(mode, &x, &mut out_syn, &st.old_band_e, &params);
        let current = st.postfilter;
        st.run_postfilter(mode, n, lm, current);
        st.deemphasis(mode, pcm, n, self.downsample);
        st.loss_count = st.loss_count.saturating_add(1);
        n / self.downsample
    }

    #[allow(clippy::too_many_lines)]
    fn decode_frame(&mut self, dec: &mut RangeDecoder<'_>, pcm: &mut [i16], lm: usize) -> Result<usize> {
        let mode = self.mode;
        let nb = mode.nb_ebands;
        let overlap = mode.overlap;
        let c = self.stream_channels;
        let (start, end) = (self.start, self.end);
        let eff_end = end.min(mode.eff_ebands);
        let m = 1_usize << lm;
        let n = mode.short_mdct_size << lm;
        let len = dec.storage();
        let st = &mut self.state;

        if c == 1 {
            for i in 0..nb {
                st.old_band_e[i] = st.old_band_e[i].max(st.old_band_e[nb + i]);
            }
        }

        let mut total_bits = (len * 8) as i32;
        let mut tell = dec.ec_tell() as i32;
        let silence = if tell >= total_bits {
            true
        } else if tell == 1 {
            dec.ec_dec_bit_logp(15)?
        } else {
            false
        };
        if silence {
            // Nothing else is coded: account the rest of the frame as read.
            dec.consume_remaining();
            tell = total_bits;
        }

        let mut postfilter = PostFilter::default();
        if start == 0 && tell + 16 <= total_bits {
            if dec.ec_dec_bit_logp(1)? {
                let octave = dec.ec_dec_uint(6)?;
                let period = (16_usize << octave) + dec.ec_dec_bits(4 + octave)? as usize - 1;
                let qg = dec.ec_dec_bits(3)? as i16;
                let tapset = if dec.ec_tell() as i32 + 2 <= total_bits {
                    dec.ec_dec_icdf(&TAPSET_ICDF, 2)?
                } else {
                    0
                };
                // 3/32 per step.
                postfilter = PostFilter {
                    period,
                    gain: 3072 * (qg + 1),
                    tapset,
                };
                debug_assert!(period < COMBFILTER_MAXPERIOD);
            }
            tell = dec.ec_tell() as i32;
        }

        let transient = if lm > 0 && tell + 3 <= total_bits {
            let transient = dec.ec_dec_bit_logp(3)?;
            tell = dec.ec_tell() as i32;
            transient
        } else {
            false
        };
        let intra = tell + 3 <= total_bits && dec.ec_dec_bit_logp(3)?;

        unquant_coarse_energy(start, end, &mut st.old_band_e, intra, dec, c, lm)?;

        let mut tf_res = [0_i32; NB_EBANDS];
        tf_decode(start, end, transient, &mut tf_res, lm, dec)?;

        tell = dec.ec_tell() as i32;
        let spread = if tell + 4 <= total_bits {
            Spread::from_index(dec.ec_dec_icdf(&Spread::ICDF, 5)?)
        } else {
            Spread::Normal
        };

        let cap = init_caps(mode, lm, c);
        let mut offsets = [0_i32; NB_EBANDS];
        let mut dynalloc_logp = 6;
        total_bits <<= BITRES;
        let mut tell_frac = dec.ec_tell_frac() as i32;
        for i in start..end {
            let width = (c as i32 * mode.band_width(i)) << lm;
            // Six bits, but between 1/8 and 1 bit per sample.
            let quanta = (width << BITRES).min((6 << BITRES).max(width));
            let mut loop_logp = dynalloc_logp;
            let mut boost = 0;
            while tell_frac + (loop_logp << BITRES) < total_bits && boost < cap[i] {
                let flag = dec.ec_dec_bit_logp(loop_logp as u32)?;
                tell_frac = dec.ec_tell_frac() as i32;
                if !flag {
                    break;
                }
                boost += quanta;
                total_bits -= quanta;
                loop_logp = 1;
            }
            offsets[i] = boost;
            if boost > 0 {
                dynalloc_logp = (dynalloc_logp - 1).max(2);
            }
        }

        let alloc_trim = if tell_frac + (6 << BITRES) <= total_bits {
            dec.ec_dec_icdf(&TRIM_ICDF, 7)? as i32
        } else {
            5
        };

        let frame_bits = ((len * 8) as i32) << BITRES;
        let mut bits = frame_bits - dec.ec_tell_frac() as i32 - 1;
        let anti_collapse_rsv = if transient && lm >= 2 && bits >= (lm as i32 + 2) << BITRES {
            1 << BITRES
        } else {
            0
        };
        bits -= anti_collapse_rsv;

        let alloc = compute_allocation(mode, start, end, &offsets, &cap, alloc_trim, bits, c, lm, dec)?;
        unquant_fine_energy(start, end, &mut st.old_band_e, &alloc.fine_quant, dec, c)?;

        st.shift_history(n, overlap);

        let mut collapse_masks = [0_u8; 2 * NB_EBANDS];
        let mut x = vec![0_i16; c * n];
        {
            let (x_first, x_second) = x.split_at_mut(n);
            let params = BandParams {
                start,
                end,
                lm,
                short_blocks: transient,
                spread,
                tf_res: &tf_res,
                total_bits: frame_bits - anti_collapse_rsv,
                disable_inv: self.disable_inv,
            };
            quant_all_bands(
                mode,
                &params,
                &alloc,
                x_first,
                (c == 2).then_some(x_second),
                &mut collapse_masks[..c * nb],
                dec,
                &mut st.rng,
            )?;
        }

        let anti_collapse_on = anti_collapse_rsv > 0 && dec.ec_dec_bits(1)? != 0;

        unquant_energy_finalise(
            start,
            end,
            &mut st.old_band_e,
            &alloc.fine_quant,
            &alloc.fine_priority,
            (len * 8) as i32 - dec.ec_tell() as i32,
            dec,
            c,
        )?;

        if anti_collapse_on {
            anti_collapse(
                mode,
                &mut x,
                &collapse_masks,
                lm,
                c,
                n,
                start,
                end,
                &st.old_band_e,
                &st.old_log_e,
                &st.old_log_e2,
                &alloc.pulses,
                st.rng,
            );
        }

        if silence {
            st.old_band_e[..c * nb].fill(ENERGY_FLOOR);
        }

        log::trace!(
            "CeltDecoder: {len} bytes lm={lm} silence={silence} postfilter={postfilter:?} \
             transient={transient} intra={intra} spread={spread:?} coded_bands={} \
             anti_collapse={anti_collapse_on}",
            alloc.coded_bands
        );

        let params = SynthesisParams {
            start,
            eff_end,
            stream_channels: c,
            lm,
            transient,
            downsample: self.downsample,
            silence,
        };
        {
            let mut out_syn: Vec<&mut [i32]> = st
                .decode_mem
                .iter_mut()
                .map(|mem| &mut mem[DECODE_BUFFER_SIZE - n..])
                .collect();
            celt_synthesis(mode, &x, &mut out_syn, &st.old_band_e, &params);
        }

        st.run_postfilter(mode, n, lm, postfilter);
        st.roll_energy_history(c, transient, m as i32, start, end);
        st.rng = dec.get_range();
        st.deemphasis(mode, pcm, n, self.downsample);
        st.loss_count = 0;

        log::trace!("CeltDecoder: final range {:#010x}", st.rng);

        if dec.ec_tell() as usize > 8 * len {
            log::warn!(
                "CeltDecoder: frame over-read ({} bits of {})",
                dec.ec_tell(),
                8 * len
            );
            return Err(Error::InternalError(format!(
                "read {} bits from a {len} byte frame",
                dec.ec_tell()
            )));
        }
        if dec.has_error() {
            log::warn!("CeltDecoder: range decoder reported an inconsistent frame");
            st.error = true;
        }
        Ok(n / self.downsample)
    }

    /// First band decoded; the bands below it belong to SILK in hybrid
    /// packets.
    ///
    /// # Errors
    ///
    /// * `Error::BadArg` if `band` is not a band index
    pub fn set_start_band(&mut self, band: usize) -> Result<()> {
        if band >= self.mode.nb_ebands {
            return Err(Error::BadArg(format!("start band {band}")));
        }
        log::debug!("CeltDecoder: start band {band}");
        self.start = band;
        Ok(())
    }

    #[must_use]
    pub const fn start_band(&self) -> usize {
        self.start
    }

    /// One past the last band decoded.
    ///
    /// # Errors
    ///
    /// * `Error::BadArg` if `band` is not in `1..=21`
    pub fn set_end_band(&mut self, band: usize) -> Result<()> {
        if band < 1 || band > self.mode.nb_ebands {
            return Err(Error::BadArg(format!("end band {band}")));
        }
        log::debug!("CeltDecoder: end band {band}");
        self.end = band;
        Ok(())
    }

    #[must_use]
    pub const fn end_band(&self) -> usize {
        self.end
    }

    /// Channels coded in the stream, which may differ from the output.
    ///
    /// # Errors
    ///
    /// * `Error::BadArg` unless `channels` is 1 or 2
    pub fn set_stream_channels(&mut self, channels: usize) -> Result<()> {
        if !(1..=2).contains(&channels) {
            return Err(Error::BadArg(format!("{channels} stream channels")));
        }
        log::debug!("CeltDecoder: {channels} stream channels");
        self.stream_channels = channels;
        Ok(())
    }

    #[must_use]
    pub const fn stream_channels(&self) -> usize {
        self.stream_channels
    }

    pub fn set_signalling(&mut self, signalling: bool) {
        log::debug!("CeltDecoder: signalling {signalling}");
        self.signalling = signalling;
    }

    #[must_use]
    pub const fn signalling(&self) -> bool {
        self.signalling
    }

    pub fn set_phase_inversion_disabled(&mut self, disabled: bool) {
        log::debug!("CeltDecoder: phase inversion disabled {disabled}");
        self.disable_inv = disabled;
    }

    #[must_use]
    pub const fn phase_inversion_disabled(&self) -> bool {
        self.disable_inv
    }

    #[must_use]
    pub const fn mode(&self) -> &'static CeltMode {
        self.mode
    }

    /// Post-filter pitch period of the last frame, 0 when it was off.
    #[must_use]
    pub const fn pitch(&self) -> usize {
        self.state.postfilter.period
    }

    /// Range coder state after the last frame, for conformance checks.
    #[must_use]
    pub const fn final_range(&self) -> u32 {
        self.state.rng
    }

    /// Whether a frame since the last call was internally inconsistent.
    pub fn get_and_clear_error(&mut self) -> bool {
        std::mem::take(&mut self.state.error)
    }

    /// Back to the state of a new decoder, keeping the configuration and
    /// the band range.
    pub fn reset(&mut self) {
        log::debug!("CeltDecoder: reset");
        self.state = DecoderState::new(self.channels, self.mode.overlap);
    }

    /// Serves a multiplexed control request.
    ///
    /// # Errors
    ///
    /// * `Error::BadArg` for out-of-range values
    /// * `Error::Unimplemented` for requests this decoder does not serve
    pub fn ctl(&mut self, request: CeltRequest) -> Result<CtlReply> {
        let arg = |value: i32| {
            usize::try_from(value).map_err(|_| Error::BadArg(format!("{request:?}")))
        };
        let flag = |value: i32| match value {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::BadArg(format!("{request:?}"))),
        };
        Ok(match request {
            CeltRequest::SetStartBand(value) => {
                self.set_start_band(arg(value)?)?;
                CtlReply::Done
            }
            CeltRequest::SetEndBand(value) => {
                self.set_end_band(arg(value)?)?;
                CtlReply::Done
            }
            CeltRequest::SetChannels(value) => {
                self.set_stream_channels(arg(value)?)?;
                CtlReply::Done
            }
            CeltRequest::GetAndClearError => CtlReply::Value(i32::from(self.get_and_clear_error())),
            CeltRequest::GetPitch => CtlReply::Value(self.pitch() as i32),
            CeltRequest::GetMode => CtlReply::Mode(self.mode),
            CeltRequest::SetSignalling(value) => {
                self.set_signalling(value != 0);
                CtlReply::Done
            }
            CeltRequest::GetFinalRange => CtlReply::FinalRange(self.final_range()),
            CeltRequest::SetPhaseInversionDisabled(value) => {
                self.set_phase_inversion_disabled(flag(value)?);
                CtlReply::Done
            }
            CeltRequest::GetPhaseInversionDisabled => {
                CtlReply::Value(i32::from(self.phase_inversion_disabled()))
            }
            CeltRequest::ResetState => {
                self.reset();
                CtlReply::Done
            }
            CeltRequest::GetLookahead => {
                return Err(Error::Unimplemented(format!("{request:?}")));
            }
        })
    }
}

/// Reads the per-band time-frequency resolution changes into `tf_res`.
///
/// # Errors
///
/// * If the range decoder rejects a read
fn tf_decode(
    start: usize,
    end: usize,
    transient: bool,
    tf_res: &mut [i32],
    lm: usize,
    dec: &mut RangeDecoder<'_>,
) -> Result<()> {
    let mut budget = dec.storage() as u32 * 8;
    let mut tell = dec.ec_tell();
    let mut logp = if transient { 2 } else { 4 };
    let tf_select_rsv = lm > 0 && tell + logp + 1 <= budget;
    budget -= u32::from(tf_select_rsv);

    let mut changed = 0;
    let mut curr = 0;
    for res in &mut tf_res[start..end] {
        if tell + logp <= budget {
            curr ^= i32::from(dec.ec_dec_bit_logp(logp)?);
            tell = dec.ec_tell();
            changed |= curr;
        }
        *res = curr;
        logp = if transient { 4 } else { 5 };
    }

    let row = &TF_SELECT_TABLE[lm];
    let base = 4 * usize::from(transient);
    let changed = changed as usize;
    let tf_select = if tf_select_rsv && row[base + changed] != row[base + 2 + changed] {
        usize::from(dec.ec_dec_bit_logp(1)?)
    } else {
        0
    };
    for res in &mut tf_res[start..end] {
        *res = i32::from(row[base + 2 * tf_select + *res as usize]);
    }
    Ok(())
}
