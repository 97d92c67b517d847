//! Cook time buffer — four digit slots rendered as `MM:SS`.
//!
//! Digits fill from the right like a rolling microwave keypad: each new digit
//! is appended to the seconds-ones slot and the oldest (minutes-tens) digit
//! falls off the left. No range check is applied, so `99:99` is a valid
//! buffer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CookTimeError;
use crate::key::Digit;

/// Four digit slots `[M1, M2, S1, S2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CookTime([Digit; 4]);

impl CookTime {
    /// A buffer holding a single digit: `00:0d`.
    #[must_use]
    pub fn from_digit(digit: Digit) -> Self {
        Self([Digit::ZERO, Digit::ZERO, Digit::ZERO, digit])
    }

    /// Shift every slot left by one and append `digit`.
    ///
    /// `[M1, M2, S1, S2]` becomes `[M2, S1, S2, digit]`.
    #[must_use]
    pub fn push(self, digit: Digit) -> Self {
        let [_, m2, s1, s2] = self.0;
        Self([m2, s1, s2, digit])
    }

    #[must_use]
    pub fn digits(&self) -> [Digit; 4] {
        self.0
    }

    #[must_use]
    pub fn minutes(&self) -> u32 {
        let [m1, m2, _, _] = self.0;
        u32::from(m1.value()) * 10 + u32::from(m2.value())
    }

    /// The seconds field as entered, which may exceed 59.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        let [_, _, s1, s2] = self.0;
        u32::from(s1.value()) * 10 + u32::from(s2.value())
    }

    /// Total duration in seconds, counting an overflowing seconds field as-is.
    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.minutes() * 60 + self.seconds()
    }
}

impl fmt::Display for CookTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [m1, m2, s1, s2] = self.0;
        write!(f, "{m1}{m2}:{s1}{s2}")
    }
}

impl FromStr for CookTime {
    type Err = CookTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [m1, m2, ':', s1, s2] = chars.as_slice() else {
            return Err(CookTimeError::Malformed(s.to_string()));
        };
        let digit = |c: char| Digit::from_char(c).ok_or(CookTimeError::NonDigit(c));
        Ok(Self([digit(*m1)?, digit(*m2)?, digit(*s1)?, digit(*s2)?]))
    }
}

impl TryFrom<String> for CookTime {
    type Error = CookTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CookTime> for String {
    fn from(time: CookTime) -> Self {
        time.to_string()
    }
}
