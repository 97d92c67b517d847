//! # microwave-adapter-console
//!
//! Terminal front-end for the microwave panel.
//!
//! ## Provided pieces
//!
//! | Piece | Role |
//! |-------|------|
//! | [`renderer::ConsoleRenderer`] | Display surface and screen router: subscribes to the event bus and draws the active screen |
//! | [`input::read_inputs`] | Reads whitespace-separated tokens from a line reader and forwards them as panel inputs |
//!
//! Input tokens are the key identifiers (`0`–`9`, `start`, `stop`) plus
//! `touch` (press the screen), `done` (cooking finished) and `quit`.
//!
//! ## Dependency rule
//!
//! Depends on `microwave-app` (ports, panel input) and `microwave-domain` only.

pub mod error;
pub mod input;
pub mod renderer;

pub use error::ConsoleError;
pub use renderer::{ConsoleRenderer, OutputFormat};
