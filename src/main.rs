use anyhow::Result;
use tfsp_rs::config;
use tfsp_rs::event::{self, Event, EventBus};
use tfsp_rs::pipeline::{self, PipelineAction};
use tfsp_rs::sink::WavFileSink;
use tfsp_rs::stdin;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = config::load().await?;
    let scheme_config = config.scheme_config()?;

    log::info!(
        "Encoding with {:?} ({}ms tones, {}Hz, ~{:.0} bps) to {}",
        scheme_config.scheme,
        scheme_config.tone_duration_ms,
        scheme_config.sample_rate,
        scheme_config
            .scheme
            .bits_per_second(scheme_config.tone_duration_ms),
        config.output
    );

    let bus = EventBus::new();
    event::debug(&bus);

    // Ctrl-c aborts the stream; queued audio still plays out.
    {
        let bus = bus.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                bus.send(Event::Pipeline(PipelineAction::Cancel));
            }
        });
    }

    let sink = WavFileSink::create(&config.output, scheme_config.sample_rate)?;
    let fragments = stdin::start();

    let summary = pipeline::run(
        scheme_config,
        config.buffer_tokens,
        fragments,
        Box::new(sink),
        &bus,
    )
    .await?;

    for chunk_error in &summary.chunk_errors {
        log::warn!(
            "Chunk {} was dropped: {}",
            chunk_error.chunk_index,
            chunk_error.error
        );
    }

    Ok(())
}
