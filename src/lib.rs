//! tfsp-rs library crate
//!
//! Token-to-frequency streaming pipeline: buffers text fragments arriving
//! from a token source, encodes them into tone events under one of three
//! frequency encoding schemes, synthesizes the tones as audio samples and
//! feeds them to an audio sink in strict order.
//!
//! This module exposes internal types for integration testing.
//! The main binary is in main.rs.

#[macro_use]
extern crate log;

pub mod buffer;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod schemes;
pub mod sink;
pub mod stdin;
pub mod tone;

// Test modules
#[cfg(test)]
mod buffer_tests;
