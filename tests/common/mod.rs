//! Test infrastructure for tfsp-rs integration tests.
//!
//! Provides a collecting-sink pipeline harness and event helpers for
//! testing the streaming flow without a real audio device.

use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::mpsc;

// Re-export key types from the main crate
pub use tfsp_rs::config::EncodingSchemeConfig;
pub use tfsp_rs::event::{Event, EventBus, Subscriber};
pub use tfsp_rs::pipeline::{self, PipelineAction, PipelineSummary};
pub use tfsp_rs::schemes::SchemeKind;
pub use tfsp_rs::sink::{AudioSink, CollectSink};
pub use tfsp_rs::tone::SampleBuffer;

/// Scheme config with the scheme's native tone duration at 44.1kHz.
pub fn test_scheme_config(scheme: SchemeKind) -> EncodingSchemeConfig {
    EncodingSchemeConfig::new(scheme, scheme.default_tone_duration_ms(), 44100)
        .expect("native scheme config should validate")
}

/// Expected sample count for one tone under `config`.
pub fn samples_per_tone(config: &EncodingSchemeConfig) -> usize {
    ((config.tone_duration_ms as f64 * config.sample_rate as f64) / 1000.0).round() as usize
}

/// Everything a finished harness run observed.
pub struct HarnessResult {
    pub summary: PipelineSummary,
    pub buffers: Vec<SampleBuffer>,
    pub sink_finalized: bool,
}

/// Runs the pipeline over a fixed fragment sequence with a collecting
/// sink, waiting for completion.
pub async fn run_with_fragments(
    config: EncodingSchemeConfig,
    buffer_tokens: usize,
    fragments: &[&str],
) -> HarnessResult {
    let bus = EventBus::new();
    let sink = CollectSink::new();
    let collected = sink.buffers();
    let finalized = sink.finalized_flag();

    let (tx, rx) = mpsc::channel(fragments.len().max(1));
    for fragment in fragments {
        tx.send(fragment.to_string())
            .await
            .expect("harness channel should accept all fragments");
    }
    drop(tx);

    let summary = tokio::time::timeout(
        Duration::from_secs(5),
        pipeline::run(config, buffer_tokens, rx, Box::new(sink), &bus),
    )
    .await
    .expect("pipeline should finish well before the timeout")
    .expect("pipeline run should succeed");

    let buffers = collected.lock().unwrap().clone();
    HarnessResult {
        summary,
        buffers,
        sink_finalized: finalized.load(Ordering::SeqCst),
    }
}

/// Drains everything currently buffered on a subscriber.
pub fn drain_events(subscriber: &mut Subscriber) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match subscriber.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(n)) => {
                eprintln!("Warning: subscriber lagged, missed {n} events");
            }
            Err(_) => break,
        }
    }
    events
}

/// Filters pipeline progress events.
pub fn filter_progress_events(events: &[Event]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Pipeline(PipelineAction::Progress { buffers_played }) => Some(*buffers_played),
            _ => None,
        })
        .collect()
}
