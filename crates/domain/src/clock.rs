//! Clock readings shown on the idle screen.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Pattern used for the time of day.
const TIME_PATTERN_12H: &str = "%I:%M";

/// Pattern used for the date, e.g. `Sun Jan 01`.
const DATE_PATTERN: &str = "%a %b %d";

/// Time-of-day preference stored in settings as `"12"` or `"24"`.
///
/// Any other stored value falls back to [`TimeFormat::TwelveHour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeFormat {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl TimeFormat {
    /// Interpret a stored setting value.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        match value.trim() {
            "24" => Self::TwentyFourHour,
            _ => Self::TwelveHour,
        }
    }

    #[must_use]
    pub fn as_setting(self) -> &'static str {
        match self {
            Self::TwelveHour => "12",
            Self::TwentyFourHour => "24",
        }
    }

    /// The strftime pattern for this preference.
    ///
    /// The 24-hour preference renders with the 12-hour pattern too; there is
    /// no 24-hour rendering yet.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::TwelveHour | Self::TwentyFourHour => TIME_PATTERN_12H,
        }
    }
}

impl From<String> for TimeFormat {
    fn from(value: String) -> Self {
        Self::from_setting(&value)
    }
}

impl From<TimeFormat> for String {
    fn from(format: TimeFormat) -> Self {
        format.as_setting().to_string()
    }
}

/// Time of day and date text derived from a wall-clock instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    pub time: String,
    pub date: String,
}

impl ClockReading {
    /// Render `now` with the given time-of-day preference.
    #[must_use]
    pub fn at(now: NaiveDateTime, format: TimeFormat) -> Self {
        Self {
            time: now.format(format.pattern()).to_string(),
            date: now.format(DATE_PATTERN).to_string(),
        }
    }
}

impl Default for ClockReading {
    fn default() -> Self {
        Self {
            time: "12:00".to_string(),
            date: "Sun Jan 1".to_string(),
        }
    }
}
