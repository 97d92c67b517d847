//! Console adapter error types.

use microwave_domain::error::InvalidKeyError;

/// Errors specific to the console adapter.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console I/O error")]
    Io(#[from] std::io::Error),

    /// Failed to encode an event as JSON.
    #[error("failed to encode event")]
    Encode(#[from] serde_json::Error),

    /// An input token is neither a key nor a console command.
    #[error("unrecognised input {0:?}")]
    UnknownInput(String),

    /// The panel stopped accepting input.
    #[error("panel input channel closed")]
    PanelClosed,
}

impl From<InvalidKeyError> for ConsoleError {
    fn from(err: InvalidKeyError) -> Self {
        Self::UnknownInput(err.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unknown_input() {
        let err = ConsoleError::UnknownInput("pause".to_string());
        assert_eq!(err.to_string(), "unrecognised input \"pause\"");
    }

    #[test]
    fn should_convert_invalid_key() {
        let err: ConsoleError = InvalidKeyError {
            id: "11".to_string(),
        }
        .into();
        assert!(matches!(err, ConsoleError::UnknownInput(ref id) if id == "11"));
    }

    #[test]
    fn should_display_panel_closed() {
        assert_eq!(
            ConsoleError::PanelClosed.to_string(),
            "panel input channel closed"
        );
    }
}
