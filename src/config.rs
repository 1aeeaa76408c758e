use crate::constants::DEFAULT_SAMPLE_RATE;
use crate::error::TfspError;
use crate::schemes::SchemeKind;
use crate::tone;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Encoding scheme: "dtmf", "fsk" or "ultrasonic".
    #[serde(default)]
    pub scheme: SchemeKind,

    /// Per-tone duration override. Defaults to the scheme's native
    /// duration (100ms audible, 5ms ultrasonic).
    pub tone_duration_ms: Option<u32>,

    /// Number of fragments to buffer before encoding a chunk.
    /// 0 flushes every fragment immediately.
    #[serde(default)]
    pub buffer_tokens: usize,

    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Where the WAV sink writes its output.
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_output() -> String {
    "tfsp.wav".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: SchemeKind::default(),
            tone_duration_ms: None,
            buffer_tokens: 0,
            sample_rate: default_sample_rate(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Resolve and validate the immutable per-stream encoding config.
    pub fn scheme_config(&self) -> Result<EncodingSchemeConfig, TfspError> {
        let tone_duration_ms = self
            .tone_duration_ms
            .unwrap_or_else(|| self.scheme.default_tone_duration_ms());
        EncodingSchemeConfig::new(self.scheme, tone_duration_ms, self.sample_rate)
    }
}

/// Immutable configuration for one pipeline run. Selected once at start
/// and never mutated mid-stream; construction validates everything, so a
/// held value is always usable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodingSchemeConfig {
    pub scheme: SchemeKind,
    pub tone_duration_ms: u32,
    pub sample_rate: u32,
}

impl EncodingSchemeConfig {
    pub fn new(
        scheme: SchemeKind,
        tone_duration_ms: u32,
        sample_rate: u32,
    ) -> Result<Self, TfspError> {
        if tone_duration_ms == 0 {
            return Err(TfspError::InvalidConfig(
                "tone_duration_ms must be positive".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(TfspError::InvalidConfig(
                "sample_rate must be positive".to_string(),
            ));
        }

        let (band_low, band_high) = scheme.band();

        // Nyquist: the band's top frequency must be representable.
        if (sample_rate as f64) < 2.0 * band_high {
            return Err(TfspError::InvalidConfig(format!(
                "sample_rate {sample_rate} cannot represent {band_high}Hz, need at least {}",
                (2.0 * band_high) as u32
            )));
        }

        let required_ms = tone::duration_floor_ms(band_low);
        if tone_duration_ms < required_ms {
            return Err(TfspError::ToneTooShort {
                duration_ms: tone_duration_ms,
                band_low: band_low as u32,
                required_ms,
            });
        }

        Ok(Self {
            scheme,
            tone_duration_ms,
            sample_rate,
        })
    }
}

pub async fn load() -> Result<Config> {
    match read_to_string("Config.toml").await {
        Ok(raw) => Ok(toml::from_str(&raw)?),
        Err(e) => {
            info!("No Config.toml ({e}), falling back to defaults");
            Ok(Config::default())
        }
    }
}
