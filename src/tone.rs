//! Tone synthesis: renders a tone event into a buffer of audio samples.

use crate::schemes::{FrequencyDescriptor, ToneEvent};

/// A stereo sample pair (left, right) as 16-bit signed integers.
pub type Sample = (i16, i16);

/// Rendered audio for one tone event. Ownership transfers to the audio
/// sink on playback; the ordinal carries the FIFO position of the source
/// event so reordering is detectable downstream.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer {
    pub samples: Vec<Sample>,
    pub ordinal: usize,
}

const AMPLITUDE: f64 = 0.5; // 50% amplitude

/// Nominal fade-in/fade-out length. Clamped to half the buffer for short
/// tones so every buffer still tapers at both edges; an abrupt edge would
/// smear the spectrum and defeat frequency detection.
const FADE_MS: f64 = 10.0;

/// Minimum number of full periods of the band's lowest frequency a tone
/// must contain to stay resolvable by a frequency-domain decoder.
pub const MIN_PERIODS: u32 = 4;

/// Shortest usable tone duration in milliseconds for a band starting at
/// `band_low` Hz. Independent of sample rate: the sample count and the
/// period length scale together.
pub fn duration_floor_ms(band_low: f64) -> u32 {
    (MIN_PERIODS as f64 / band_low * 1000.0).ceil() as u32
}

/// Render one tone event at the given sample rate.
///
/// Single-frequency descriptors produce a plain sine; dual descriptors the
/// superposition of two sines scaled so the combined peak stays in range.
/// Output length is exactly `round(duration_ms * sample_rate / 1000)`.
pub fn render(event: &ToneEvent, sample_rate: u32) -> SampleBuffer {
    let num_samples =
        ((event.duration_ms as f64 * sample_rate as f64) / 1000.0).round() as usize;
    let fade_samples =
        ((sample_rate as f64 * FADE_MS / 1000.0) as usize).min(num_samples / 2);

    let mut samples = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 / sample_rate as f64;

        let value = match event.descriptor {
            FrequencyDescriptor::Single(f) => sine(f, t),
            FrequencyDescriptor::Dual(f1, f2) => (sine(f1, t) + sine(f2, t)) / 2.0,
        };

        let value = value * envelope(i, num_samples, fade_samples);
        let sample = (value * AMPLITUDE * i16::MAX as f64) as i16;
        samples.push((sample, sample));
    }

    SampleBuffer {
        samples,
        ordinal: event.ordinal,
    }
}

fn sine(frequency: f64, t: f64) -> f64 {
    (2.0 * std::f64::consts::PI * frequency * t).sin()
}

/// Linear amplitude ramp at both buffer edges, 1.0 in between.
fn envelope(i: usize, num_samples: usize, fade_samples: usize) -> f64 {
    if fade_samples == 0 {
        return 1.0;
    }
    if i < fade_samples {
        return i as f64 / fade_samples as f64;
    }
    let remaining = num_samples - 1 - i;
    if remaining < fade_samples {
        return remaining as f64 / fade_samples as f64;
    }
    1.0
}
