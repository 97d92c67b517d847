//! Idle tracking — which screen the panel should show.
//!
//! The tracker only knows about transitions. Scheduling the inactivity
//! timeout is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the user has interacted with the panel recently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdleState {
    #[default]
    Awake,
    Idle,
}

/// The two screens of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Clock and date.
    Idle,
    /// Keypad and cook time display.
    Main,
}

impl fmt::Display for IdleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Awake => f.write_str("awake"),
            Self::Idle => f.write_str("idle"),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Main => f.write_str("main"),
        }
    }
}

/// Awake/idle state holder.
#[derive(Debug, Clone, Default)]
pub struct IdleTracker {
    state: IdleState,
}

impl IdleTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> IdleState {
        self.state
    }

    /// User activity. Returns the screen to switch to when waking up.
    pub fn activity(&mut self) -> Option<Screen> {
        match self.state {
            IdleState::Awake => None,
            IdleState::Idle => {
                self.state = IdleState::Awake;
                Some(Screen::Main)
            }
        }
    }

    /// The inactivity delay elapsed. Returns the screen to switch to, or
    /// `None` when already idle.
    pub fn timeout(&mut self) -> Option<Screen> {
        match self.state {
            IdleState::Awake => {
                self.state = IdleState::Idle;
                Some(Screen::Idle)
            }
            IdleState::Idle => None,
        }
    }
}
