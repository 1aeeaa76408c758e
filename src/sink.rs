//! Audio sinks: consumers of rendered sample buffers.
//!
//! The pipeline requires a single `play` method of its sink; buffers
//! arrive in strict ordinal order and ownership transfers with the call.
//! Shipped implementations write a WAV file (hound) or collect buffers in
//! memory for tests and benchmarks. Network transport is deliberately not
//! provided here; a sink implementation may do whatever it wants with the
//! samples it owns.

use crate::constants::{BIT_DEPTH, CHANNELS};
use crate::error::TfspError;
use crate::tone::SampleBuffer;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub trait AudioSink: Send {
    /// Consume one buffer for playback. Must not block beyond normal
    /// device/file buffering latency.
    fn play(&mut self, buffer: SampleBuffer) -> Result<(), TfspError>;

    /// Release the underlying playback resource. Called exactly once on
    /// every pipeline exit path, normal or not.
    fn finalize(&mut self) -> Result<(), TfspError> {
        Ok(())
    }
}

/// WAV file sink backed by hound.
pub struct WavFileSink {
    writer: Option<WavWriter<BufWriter<File>>>,
}

impl WavFileSink {
    pub fn create<P: AsRef<Path>>(path: P, sample_rate: u32) -> Result<Self, TfspError> {
        let spec = WavSpec {
            channels: CHANNELS,
            sample_rate,
            bits_per_sample: BIT_DEPTH,
            sample_format: SampleFormat::Int,
        };

        let writer = WavWriter::create(path, spec)
            .map_err(|e| TfspError::SinkUnavailable(e.to_string()))?;

        Ok(Self {
            writer: Some(writer),
        })
    }
}

impl AudioSink for WavFileSink {
    fn play(&mut self, buffer: SampleBuffer) -> Result<(), TfspError> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| TfspError::SinkUnavailable("wav writer already finalized".to_string()))?;

        for (left, right) in buffer.samples {
            writer
                .write_sample(left)
                .and_then(|_| writer.write_sample(right))
                .map_err(|e| TfspError::SinkUnavailable(e.to_string()))?;
        }

        Ok(())
    }

    fn finalize(&mut self) -> Result<(), TfspError> {
        if let Some(writer) = self.writer.take() {
            writer
                .finalize()
                .map_err(|e| TfspError::SinkUnavailable(e.to_string()))?;
        }
        Ok(())
    }
}

/// In-memory sink that records every buffer it is handed. The handles
/// survive the pipeline taking ownership of the sink, so tests can assert
/// on ordering and on deterministic release.
#[derive(Default)]
pub struct CollectSink {
    buffers: Arc<Mutex<Vec<SampleBuffer>>>,
    finalized: Arc<AtomicBool>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffers(&self) -> Arc<Mutex<Vec<SampleBuffer>>> {
        self.buffers.clone()
    }

    pub fn finalized_flag(&self) -> Arc<AtomicBool> {
        self.finalized.clone()
    }
}

impl AudioSink for CollectSink {
    fn play(&mut self, buffer: SampleBuffer) -> Result<(), TfspError> {
        self.buffers
            .lock()
            .map_err(|_| TfspError::SinkUnavailable("collect sink poisoned".to_string()))?
            .push(buffer);
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), TfspError> {
        self.finalized.store(true, Ordering::SeqCst);
        Ok(())
    }
}
