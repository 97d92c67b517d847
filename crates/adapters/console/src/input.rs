//! Console input — tokens on stdin become panel inputs.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use microwave_app::panel::PanelInput;
use microwave_domain::key::Key;

use crate::error::ConsoleError;

/// One parsed input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Input(PanelInput),
    Quit,
}

/// Parse a single whitespace-free token.
///
/// # Errors
///
/// Returns [`ConsoleError::UnknownInput`] when the token is neither a key
/// identifier nor one of `touch`, `done`, `quit`.
pub fn parse_token(token: &str) -> Result<Command, ConsoleError> {
    match token {
        "touch" => Ok(Command::Input(PanelInput::Touch)),
        "done" => Ok(Command::Input(PanelInput::CookingFinished)),
        "quit" => Ok(Command::Quit),
        other => {
            let key: Key = other.parse()?;
            Ok(Command::Input(PanelInput::Key(key)))
        }
    }
}

/// Forward every token read from `reader` to the panel until end of input
/// or `quit`.
///
/// Unknown tokens are logged and skipped.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] when reading fails, or
/// [`ConsoleError::PanelClosed`] when the panel stopped listening.
pub async fn read_inputs<R>(reader: R, inputs: mpsc::Sender<PanelInput>) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        for token in line.split_whitespace() {
            match parse_token(token) {
                Ok(Command::Input(input)) => {
                    inputs
                        .send(input)
                        .await
                        .map_err(|_| ConsoleError::PanelClosed)?;
                }
                Ok(Command::Quit) => {
                    tracing::info!("quit requested");
                    return Ok(());
                }
                Err(err) => tracing::warn!(%err, "ignoring input"),
            }
        }
    }
    tracing::debug!("end of input");
    Ok(())
}
