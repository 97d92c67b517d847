//! # microwaved — microwave panel daemon
//!
//! Composition root that wires the panel core to the console and runs it.
//!
//! ## Responsibilities
//! - Load configuration (`microwave.toml`, env vars)
//! - Initialize `tracing` (logs go to stderr, the panel draws on stdout)
//! - Construct the event bus, the panel and the console adapter
//! - Run the panel loop until stdin closes, `quit` is typed or Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use microwave_adapter_console::ConsoleRenderer;
use microwave_adapter_console::input::read_inputs;
use microwave_app::event_bus::InProcessEventBus;
use microwave_app::panel::Panel;
use microwave_app::ports::SystemClock;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        tick_interval_ms = config.timers.tick_interval_ms,
        idle_timeout_ms = config.timers.idle_timeout_ms,
        time_format = config.display.time_format.as_setting(),
        "microwave panel starting"
    );

    // Event bus
    let event_bus = InProcessEventBus::new(256);

    // Display surface + screen router
    let renderer = ConsoleRenderer::new(tokio::io::stdout(), config.display.output);
    let renderer_task = tokio::spawn(renderer.run(event_bus.subscribe()));

    // Keypad input
    let (input_tx, input_rx) = mpsc::channel(32);
    let input_task = tokio::spawn(read_inputs(BufReader::new(tokio::io::stdin()), input_tx));

    // Panel core; owns the last bus handles so the renderer ends with it
    let panel = Panel::new(event_bus, SystemClock, config.idle_clock());
    tokio::select! {
        () = panel.run(input_rx) => {}
        result = tokio::signal::ctrl_c() => {
            result.context("failed to listen for Ctrl-C")?;
            tracing::info!("interrupted, shutting down");
            input_task.abort();
        }
    }

    if let Ok(result) = input_task.await {
        result.context("console input failed")?;
    }
    renderer_task
        .await
        .context("console renderer task failed")?
        .context("console rendering failed")?;

    Ok(())
}
