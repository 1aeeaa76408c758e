// Define some constants for the audio parameters
pub const DEFAULT_SAMPLE_RATE: u32 = 44100; // 44.1 kHz sample rate
pub const BIT_DEPTH: u16 = 16; // 16 bits per sample
pub const CHANNELS: u16 = 2; // Stereo channel
