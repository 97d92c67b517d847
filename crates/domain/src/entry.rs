//! Cook time entry machine — turns keypad presses into a cook time.
//!
//! | State | Input | Next | Effect |
//! |---|---|---|---|
//! | `Idle` | digit `d` | `EnteringTime` | show `00:0d` |
//! | `Idle` | `start` / `stop` | `Idle` | none |
//! | `EnteringTime` | digit `d` | `EnteringTime` | roll `d` into the buffer |
//! | `EnteringTime` | `start` | `Cooking` | finalize the buffer |
//! | `EnteringTime` | `stop` | `Idle` | hide the display |
//! | `Cooking` | `stop` | `Idle` | hide the display |
//! | `Cooking` | digit / `start` | `Cooking` | rejected |
//!
//! The machine is pure: every transition returns an [`EntryEffect`] that the
//! caller turns into display updates and log lines.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cook_time::CookTime;
use crate::key::Key;

/// Which phase of cook time entry the panel is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    #[default]
    Idle,
    EnteringTime,
    Cooking,
}

impl fmt::Display for EntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::EnteringTime => f.write_str("entering_time"),
            Self::Cooking => f.write_str("cooking"),
        }
    }
}

/// Observable outcome of feeding one input to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEffect {
    /// Nothing changed and nothing is worth reporting.
    None,
    /// The buffer changed; show it.
    Show(CookTime),
    /// Entry was cancelled or cooking ended; hide the display.
    Hide,
    /// `start` accepted; hand the cook time to the executor.
    Finalize(CookTime),
    /// The input is not valid in the current state.
    Rejected { state: EntryState, key: Key },
}

/// The cook time entry state machine.
#[derive(Debug, Clone, Default)]
pub struct CookEntryMachine {
    state: EntryState,
    buffer: Option<CookTime>,
}

impl CookEntryMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> EntryState {
        self.state
    }

    /// The buffer being entered, present only while [`EntryState::EnteringTime`].
    #[must_use]
    pub fn buffer(&self) -> Option<CookTime> {
        self.buffer
    }

    /// Feed one keypad press.
    pub fn press(&mut self, key: Key) -> EntryEffect {
        match (self.state, key) {
            (EntryState::Idle, Key::Digit(digit)) => {
                let time = CookTime::from_digit(digit);
                self.enter(EntryState::EnteringTime, Some(time));
                EntryEffect::Show(time)
            }
            (EntryState::Idle, Key::Start | Key::Stop) => EntryEffect::None,
            (EntryState::EnteringTime, Key::Digit(digit)) => {
                let time = self.buffer.unwrap_or_default().push(digit);
                self.buffer = Some(time);
                EntryEffect::Show(time)
            }
            (EntryState::EnteringTime, Key::Start) => {
                let time = self.buffer.unwrap_or_default();
                self.enter(EntryState::Cooking, None);
                EntryEffect::Finalize(time)
            }
            (EntryState::EnteringTime | EntryState::Cooking, Key::Stop) => {
                self.enter(EntryState::Idle, None);
                EntryEffect::Hide
            }
            (EntryState::Cooking, Key::Digit(_) | Key::Start) => EntryEffect::Rejected {
                state: self.state,
                key,
            },
        }
    }

    /// The cooking executor reported completion (or an external cancel).
    ///
    /// Returns [`EntryEffect::None`] when the machine was not cooking.
    pub fn finish_cooking(&mut self) -> EntryEffect {
        if self.state != EntryState::Cooking {
            return EntryEffect::None;
        }
        self.enter(EntryState::Idle, None);
        EntryEffect::Hide
    }

    fn enter(&mut self, state: EntryState, buffer: Option<CookTime>) {
        self.state = state;
        self.buffer = buffer;
    }
}
