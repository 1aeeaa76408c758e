//! Pipeline coordinator: drives fragments through buffering, encoding,
//! synthesis and playback.
//!
//! The encode/render stage and the playback stage are decoupled by a
//! bounded FIFO queue, so synthesis may run ahead of the sink by at most
//! `QUEUE_CAPACITY` buffers but can never reorder them. The coordinator
//! holds no symbol-level state across chunks; each chunk is encoded
//! independently under the immutable config chosen at start.

use crate::buffer::TokenBuffer;
use crate::config::EncodingSchemeConfig;
use crate::error::TfspError;
use crate::event::{Event, EventBus};
use crate::schemes;
use crate::sink::AudioSink;
use crate::tone::{self, SampleBuffer};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Bound on how far encode/render may run ahead of playback.
pub const QUEUE_CAPACITY: usize = 32;

#[derive(Clone, Debug)]
pub enum PipelineAction {
    /// Abort the stream: stop pulling fragments, let already-queued
    /// buffers play out, release the sink.
    Cancel,

    /// Notification that the playback stage has consumed another buffer.
    Progress { buffers_played: usize },
}

/// What a finished (or cancelled) run did.
#[derive(Clone, Debug, Default)]
pub struct PipelineSummary {
    pub chunks_encoded: usize,
    pub chars_encoded: usize,
    pub buffers_played: usize,
    pub cancelled: bool,
    /// Chunks whose encoding failed. The failed chunk is dropped whole;
    /// the stream continues with the next chunk.
    pub chunk_errors: Vec<ChunkError>,
}

#[derive(Clone, Debug)]
pub struct ChunkError {
    pub chunk_index: usize,
    pub error: TfspError,
}

/// Run the pipeline until the fragment source closes or a Cancel event
/// arrives, then flush and wait for playback to finish.
pub async fn run(
    config: EncodingSchemeConfig,
    buffer_tokens: usize,
    mut fragments: mpsc::Receiver<String>,
    sink: Box<dyn AudioSink>,
    bus: &EventBus,
) -> Result<PipelineSummary, TfspError> {
    let (queue_tx, queue_rx) = mpsc::channel(QUEUE_CAPACITY);
    let playback = spawn_playback(queue_rx, sink, bus.clone());

    let mut token_buffer = TokenBuffer::new(buffer_tokens);
    let mut subscriber = bus.subscribe();
    let mut summary = PipelineSummary::default();
    let mut chunk_index = 0usize;
    let mut fatal = None;

    loop {
        tokio::select! {
            fragment = fragments.recv() => {
                let Some(fragment) = fragment else { break };

                if token_buffer.push(&fragment) {
                    let chunk = token_buffer.drain();
                    if let Err(e) =
                        process_chunk(&chunk, chunk_index, &config, &queue_tx, &mut summary).await
                    {
                        fatal = Some(e);
                        break;
                    }
                    chunk_index += 1;
                }
            }
            event = subscriber.recv() => {
                if matches!(event, Event::Pipeline(PipelineAction::Cancel)) {
                    info!("Cancel received, stopping fragment intake");
                    summary.cancelled = true;
                    break;
                }
            }
        }
    }

    // Flush the remaining partial chunk through the same path on normal
    // stream end.
    if !summary.cancelled && fatal.is_none() {
        let rest = token_buffer.drain();
        if let Err(e) = process_chunk(&rest, chunk_index, &config, &queue_tx, &mut summary).await {
            fatal = Some(e);
        }
    }

    // Closing the queue lets the playback stage drain in-flight buffers
    // and release the sink.
    drop(queue_tx);

    let played = playback
        .await
        .map_err(|e| TfspError::SinkUnavailable(format!("playback task panicked: {e}")))?;

    match (played, fatal) {
        (Err(e), _) => Err(e),
        (Ok(_), Some(e)) => Err(e),
        (Ok(buffers_played), None) => {
            summary.buffers_played = buffers_played;
            info!(
                "Pipeline finished: {} chunks ({} chars) encoded, {} buffers played, {} chunk errors",
                summary.chunks_encoded,
                summary.chars_encoded,
                summary.buffers_played,
                summary.chunk_errors.len()
            );
            Ok(summary)
        }
    }
}

/// Encode one chunk and queue its rendered buffers in ordinal order.
///
/// Encoding failures are recorded in the summary and drop the chunk whole;
/// only a dead playback stage is fatal.
async fn process_chunk(
    chunk: &str,
    chunk_index: usize,
    config: &EncodingSchemeConfig,
    queue: &mpsc::Sender<SampleBuffer>,
    summary: &mut PipelineSummary,
) -> Result<(), TfspError> {
    if chunk.is_empty() {
        return Ok(());
    }

    let events = match schemes::encode(chunk, config) {
        Ok(events) => events,
        Err(error) => {
            error!("Chunk {chunk_index} failed encoding: {error}");
            summary.chunk_errors.push(ChunkError { chunk_index, error });
            return Ok(());
        }
    };

    debug!(
        "Chunk {chunk_index}: {} chars -> {} tone events",
        chunk.chars().count(),
        events.len()
    );

    for event in &events {
        let buffer = tone::render(event, config.sample_rate);
        if queue.send(buffer).await.is_err() {
            // Playback stage is gone; its join result carries the real error.
            return Err(TfspError::SinkUnavailable(
                "playback queue closed".to_string(),
            ));
        }
    }

    summary.chunks_encoded += 1;
    summary.chars_encoded += chunk.chars().count();
    Ok(())
}

/// Playback stage: exclusively owns the sink for the whole run and
/// releases it deterministically on every exit path.
fn spawn_playback(
    mut queue: mpsc::Receiver<SampleBuffer>,
    mut sink: Box<dyn AudioSink>,
    bus: EventBus,
) -> JoinHandle<Result<usize, TfspError>> {
    tokio::spawn(async move {
        let mut buffers_played = 0usize;
        let mut result = Ok(());

        while let Some(buffer) = queue.recv().await {
            trace!(
                "Playing buffer {} ({} samples)",
                buffer.ordinal,
                buffer.samples.len()
            );

            if let Err(e) = sink.play(buffer) {
                error!("Audio sink rejected buffer: {e}");
                result = Err(e);
                break;
            }

            buffers_played += 1;
            bus.send(Event::Pipeline(PipelineAction::Progress { buffers_played }));
        }

        let finalized = sink.finalize();
        result.and(finalized).map(|_| buffers_played)
    })
}
