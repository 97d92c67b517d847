//! Keypad keys.
//!
//! The panel has twelve keys laid out as:
//!
//! ```text
//!  1 | 2 | 3
//!  4 | 5 | 6
//!  7 | 8 | 9
//!  C | 0 | S
//! ```
//!
//! where `C` is `stop` (clear) and `S` is `start`. Keys are identified on the
//! wire by the strings `"0"`–`"9"`, `"start"` and `"stop"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidKeyError;

/// A single decimal digit in `0..=9`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);

    /// Build a digit, returning `None` when `value > 9`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Parse an ASCII decimal character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Self)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A key on the panel keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Digit(Digit),
    Start,
    Stop,
}

impl Key {
    /// Every key on the keypad, in reading order of the identifiers.
    #[must_use]
    pub fn all() -> Vec<Key> {
        (0..=9)
            .filter_map(Digit::new)
            .map(Key::Digit)
            .chain([Key::Start, Key::Stop])
            .collect()
    }

    /// The wire identifier of this key.
    #[must_use]
    pub fn id(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => DIGITS.get(usize::from(d.value())).copied().unwrap_or("0"),
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

impl From<Digit> for Key {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Key {
    type Err = InvalidKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            _ => {
                let mut chars = s.chars();
                match (chars.next().and_then(Digit::from_char), chars.next()) {
                    (Some(digit), None) => Ok(Self::Digit(digit)),
                    _ => Err(InvalidKeyError { id: s.to_string() }),
                }
            }
        }
    }
}

impl TryFrom<String> for Key {
    type Error = InvalidKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.id().to_string()
    }
}
