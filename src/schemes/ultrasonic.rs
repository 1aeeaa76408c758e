//! Ultrasonic single-tone encoding in the 15-20kHz band.
//!
//! Same linear shape as the FSK map, shifted to a band that is inaudible
//! to most adults yet still representable at a 44.1kHz sample rate.
//! Adjacent codes sit about 19.6Hz apart, so short tones remain separable
//! by a frequency-domain decoder; at the 5ms default this carries a full
//! byte per tone, roughly 1600 bits per second.

pub const MIN_FREQUENCY: f64 = 15000.0;
pub const MAX_FREQUENCY: f64 = 20000.0;

/// Much shorter than the audible schemes; nobody has to listen to it.
pub const DEFAULT_TONE_DURATION_MS: u32 = 5;

pub fn frequency(code: u8) -> f64 {
    MIN_FREQUENCY + (code as f64 / 255.0) * (MAX_FREQUENCY - MIN_FREQUENCY)
}
