//! Common error types used across the workspace.
//!
//! Each failure kind has its own typed error; [`MicrowaveError`] wraps them
//! via `#[from]` so callers can propagate with `?`.

/// Top-level error for the microwave core.
#[derive(Debug, thiserror::Error)]
pub enum MicrowaveError {
    #[error("invalid key")]
    InvalidKey(#[from] InvalidKeyError),

    #[error("invalid cook time")]
    InvalidCookTime(#[from] CookTimeError),
}

/// A key identifier outside `0`–`9`, `start`, `stop`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key identifier {id:?}")]
pub struct InvalidKeyError {
    pub id: String,
}

/// Failure to parse a `MM:SS` cook time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookTimeError {
    #[error("cook time must have the form MM:SS, got {0:?}")]
    Malformed(String),
    #[error("cook time contains a non-digit character {0:?}")]
    NonDigit(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_invalid_key_error() {
        let err: MicrowaveError = InvalidKeyError {
            id: "pause".to_string(),
        }
        .into();
        assert!(matches!(err, MicrowaveError::InvalidKey(ref e) if e.id == "pause"));
    }

    #[test]
    fn should_mention_identifier_in_message() {
        let err = InvalidKeyError {
            id: "pause".to_string(),
        };
        assert_eq!(err.to_string(), "unknown key identifier \"pause\"");
    }

    #[test]
    fn should_wrap_cook_time_error() {
        let err: MicrowaveError = CookTimeError::NonDigit('x').into();
        assert!(matches!(
            err,
            MicrowaveError::InvalidCookTime(CookTimeError::NonDigit('x'))
        ));
    }
}
