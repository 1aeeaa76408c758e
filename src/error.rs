//! Error taxonomy for the encode pipeline.
//!
//! Encoding errors abort the current chunk only and carry the offending
//! symbol and its position, so that a caller (or a future decoder) never
//! sees silently substituted tones. Resource errors are fatal to the run.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TfspError {
    /// Character code does not fit in 8 bits and cannot be mapped to a
    /// frequency by any scheme.
    #[error("unsupported symbol {symbol:?} (code {code}) at position {position}")]
    UnsupportedSymbol {
        symbol: char,
        code: u32,
        position: usize,
    },

    /// Tone duration cannot fit enough periods of the scheme's lowest band
    /// frequency to be resolvable by a frequency-domain decoder.
    #[error(
        "{duration_ms}ms tone too short for {band_low}Hz band floor, need at least {required_ms}ms"
    )]
    ToneTooShort {
        duration_ms: u32,
        band_low: u32,
        required_ms: u32,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("audio sink unavailable: {0}")]
    SinkUnavailable(String),
}
