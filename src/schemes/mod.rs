//! Frequency encoding schemes.
//!
//! Each scheme maps 8-bit character codes into its own frequency band.
//! Encoding is pure and deterministic: the same chunk and configuration
//! always produce the identical tone event sequence, which a future
//! frequency-domain decoder depends on.

pub mod dtmf;
pub mod fsk;
pub mod ultrasonic;

use crate::config::EncodingSchemeConfig;
use crate::error::TfspError;
use serde::{Deserialize, Serialize};

/// One or two simultaneous frequencies in Hz, unit amplitude implied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrequencyDescriptor {
    Single(f64),
    /// Row and column tone of a DTMF pair.
    Dual(f64, f64),
}

impl FrequencyDescriptor {
    pub fn frequency_count(&self) -> usize {
        match self {
            FrequencyDescriptor::Single(_) => 1,
            FrequencyDescriptor::Dual(_, _) => 2,
        }
    }
}

/// A scheduled tone representing one symbol. Created by a scheme, rendered
/// exactly once by the synthesizer, immutable after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ToneEvent {
    pub descriptor: FrequencyDescriptor,
    pub duration_ms: u32,
    /// Position of this tone in the chunk's output sequence.
    pub ordinal: usize,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    /// Dual-tone over the 16-key keypad table, two tones per character.
    Dtmf,
    /// Single tone, linear map into 400-2000Hz.
    #[default]
    Fsk,
    /// Single tone, linear map into the 15-20kHz band. Inaudible to most
    /// adults, so much shorter tone durations are practical.
    Ultrasonic,
}

impl SchemeKind {
    /// Inclusive frequency band (low, high) in Hz this scheme emits into.
    pub fn band(&self) -> (f64, f64) {
        match self {
            SchemeKind::Dtmf => (dtmf::ROW_FREQUENCIES[0], dtmf::COL_FREQUENCIES[3]),
            SchemeKind::Fsk => (fsk::MIN_FREQUENCY, fsk::MAX_FREQUENCY),
            SchemeKind::Ultrasonic => (ultrasonic::MIN_FREQUENCY, ultrasonic::MAX_FREQUENCY),
        }
    }

    /// How many tone events one input character expands to.
    pub fn tones_per_char(&self) -> usize {
        match self {
            SchemeKind::Dtmf => 2,
            SchemeKind::Fsk | SchemeKind::Ultrasonic => 1,
        }
    }

    pub fn default_tone_duration_ms(&self) -> u32 {
        match self {
            SchemeKind::Dtmf | SchemeKind::Fsk => 100,
            SchemeKind::Ultrasonic => ultrasonic::DEFAULT_TONE_DURATION_MS,
        }
    }

    /// Theoretical throughput at the given tone duration, for benchmark
    /// reporting. DTMF carries 4 bits per tone, the others a full byte.
    pub fn bits_per_second(&self, tone_duration_ms: u32) -> f64 {
        let tones_per_sec = 1000.0 / tone_duration_ms as f64;
        let bits_per_tone = 8.0 / self.tones_per_char() as f64;
        tones_per_sec * bits_per_tone
    }
}

/// Encode a chunk of text into an ordered tone event sequence.
///
/// A character code outside 0-255 fails the whole chunk: no partial event
/// list is returned, so already-processed symbols are never emitted in a
/// corrupted order.
pub fn encode(chunk: &str, config: &EncodingSchemeConfig) -> Result<Vec<ToneEvent>, TfspError> {
    let mut events = Vec::with_capacity(chunk.len() * config.scheme.tones_per_char());

    for (position, symbol) in chunk.chars().enumerate() {
        let code = symbol as u32;
        let code: u8 = code.try_into().map_err(|_| TfspError::UnsupportedSymbol {
            symbol,
            code,
            position,
        })?;

        match config.scheme {
            SchemeKind::Dtmf => {
                for descriptor in dtmf::byte_descriptors(code) {
                    push_event(&mut events, descriptor, config.tone_duration_ms);
                }
            }
            SchemeKind::Fsk => {
                let descriptor = FrequencyDescriptor::Single(fsk::frequency(code));
                push_event(&mut events, descriptor, config.tone_duration_ms);
            }
            SchemeKind::Ultrasonic => {
                let descriptor = FrequencyDescriptor::Single(ultrasonic::frequency(code));
                push_event(&mut events, descriptor, config.tone_duration_ms);
            }
        }
    }

    Ok(events)
}

fn push_event(events: &mut Vec<ToneEvent>, descriptor: FrequencyDescriptor, duration_ms: u32) {
    events.push(ToneEvent {
        descriptor,
        duration_ms,
        ordinal: events.len(),
    });
}
