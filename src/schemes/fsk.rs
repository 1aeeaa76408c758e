//! FSK single-tone encoding: each 8-bit code is linearly interpolated into
//! the 400-2000Hz band. The map is strictly monotonic and therefore
//! invertible: `code = round((frequency - 400) / 1600 * 255)`.

pub const MIN_FREQUENCY: f64 = 400.0;
pub const MAX_FREQUENCY: f64 = 2000.0;

pub fn frequency(code: u8) -> f64 {
    MIN_FREQUENCY + (code as f64 / 255.0) * (MAX_FREQUENCY - MIN_FREQUENCY)
}
