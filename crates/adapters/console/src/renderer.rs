//! Console renderer — display surface and screen router on a terminal.
//!
//! In `text` mode only the active screen is drawn, and only when something
//! on it changed. In `json` mode every event is written as one JSON line.

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use microwave_domain::clock::ClockReading;
use microwave_domain::event::PanelEvent;
use microwave_domain::idle::Screen;

use crate::error::ConsoleError;

/// How the renderer writes events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What each screen currently shows, and which one is active.
#[derive(Debug, Clone)]
pub struct Screens {
    active: Screen,
    time: String,
    date: String,
    cook_time: Option<String>,
}

impl Default for Screens {
    fn default() -> Self {
        let reading = ClockReading::default();
        Self {
            active: Screen::Main,
            time: reading.time,
            date: reading.date,
            cook_time: None,
        }
    }
}

impl Screens {
    #[must_use]
    pub fn active(&self) -> Screen {
        self.active
    }

    /// Apply an event. Returns a line to draw when the visible output changed.
    pub fn apply(&mut self, event: &PanelEvent) -> Option<String> {
        match event {
            PanelEvent::TimeChanged { text } => {
                let changed = replace_if_changed(&mut self.time, text);
                (changed && self.active == Screen::Idle).then(|| self.frame())
            }
            PanelEvent::DateChanged { text } => {
                let changed = replace_if_changed(&mut self.date, text);
                (changed && self.active == Screen::Idle).then(|| self.frame())
            }
            PanelEvent::CookTimeDisplay { text, visible } => {
                self.cook_time = visible.then(|| text.clone());
                (self.active == Screen::Main).then(|| self.frame())
            }
            PanelEvent::SwitchScreen { screen } => {
                if *screen == self.active {
                    return None;
                }
                self.active = *screen;
                Some(self.frame())
            }
            PanelEvent::CookTimeFinalized { time } => Some(format!(
                "cooking for {time} ({} s)",
                time.total_seconds()
            )),
            PanelEvent::KeyPressed { .. } => None,
        }
    }

    /// Draw the active screen.
    #[must_use]
    pub fn frame(&self) -> String {
        match (self.active, &self.cook_time) {
            (Screen::Idle, _) => format!("[ {} | {} ]", self.time, self.date),
            (Screen::Main, Some(cook_time)) => format!("[ {cook_time} ]"),
            (Screen::Main, None) => "[       ]".to_string(),
        }
    }
}

fn replace_if_changed(slot: &mut String, text: &str) -> bool {
    if slot == text {
        return false;
    }
    text.clone_into(slot);
    true
}

/// Event bus subscriber writing the panel to `writer`.
pub struct ConsoleRenderer<W> {
    writer: W,
    format: OutputFormat,
    screens: Screens,
}

impl<W: AsyncWrite + Unpin> ConsoleRenderer<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            screens: Screens::default(),
        }
    }

    #[must_use]
    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    /// Render a single event.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if writing fails or
    /// [`ConsoleError::Encode`] if JSON encoding fails.
    pub async fn render(&mut self, event: &PanelEvent) -> Result<(), ConsoleError> {
        let frame = self.screens.apply(event);
        let line = match self.format {
            OutputFormat::Text => frame,
            OutputFormat::Json => Some(serde_json::to_string(event)?),
        };
        if let Some(line) = line {
            self.writer.write_all(line.as_bytes()).await?;
            self.writer.write_all(b"\n").await?;
            self.writer.flush().await?;
        }
        Ok(())
    }

    /// Render events until the bus closes, then hand the writer back.
    ///
    /// # Errors
    ///
    /// Stops at the first rendering failure.
    pub async fn run(mut self, events: broadcast::Receiver<PanelEvent>) -> Result<W, ConsoleError> {
        let mut stream = BroadcastStream::new(events);
        while let Some(result) = stream.next().await {
            match result {
                Ok(event) => self.render(&event).await?,
                Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "console renderer lagged, some events were dropped");
                }
            }
        }
        Ok(self.writer)
    }
}
