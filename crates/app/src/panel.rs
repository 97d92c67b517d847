//! Panel — the single-task event loop tying keypad, entry and idle clock together.
//!
//! Inputs arrive on an mpsc channel; the clock tick and inactivity timer are
//! polled on the same task, so every handler runs to completion before the
//! next one starts and no state needs locking.

use tokio::sync::mpsc;

use microwave_domain::entry::EntryState;
use microwave_domain::idle::IdleState;
use microwave_domain::key::Key;

use crate::ports::{Clock, EventPublisher};
use crate::services::cook_entry_service::CookEntryService;
use crate::services::idle_clock_service::{IdleClockConfig, IdleClockController};
use crate::services::keypad_service::Keypad;

/// Something the user (or the cooking executor) did to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInput {
    /// A keypad key was pressed.
    Key(Key),
    /// The screen was pressed outside the keypad.
    Touch,
    /// The cooking executor finished (or was cancelled externally).
    CookingFinished,
}

impl From<Key> for PanelInput {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

/// The whole control panel core.
pub struct Panel<P, C> {
    keypad: Keypad<P>,
    cook_entry: CookEntryService<P>,
    idle_clock: IdleClockController<P, C>,
}

impl<P, C> Panel<P, C>
where
    P: EventPublisher + Clone,
    C: Clock,
{
    /// Wire a panel publishing every event through `publisher`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(publisher: P, clock: C, config: IdleClockConfig) -> Self {
        Self {
            keypad: Keypad::new(publisher.clone()),
            cook_entry: CookEntryService::new(publisher.clone()),
            idle_clock: IdleClockController::new(publisher, clock, config),
        }
    }

    #[must_use]
    pub fn entry_state(&self) -> EntryState {
        self.cook_entry.state()
    }

    #[must_use]
    pub fn idle_state(&self) -> IdleState {
        self.idle_clock.state()
    }

    /// Handle a single input synchronously.
    ///
    /// Key presses are announced first, then count as activity (which may
    /// switch to the main screen), then drive the entry machine.
    pub fn handle_input(&mut self, input: PanelInput) {
        match input {
            PanelInput::Key(key) => {
                self.keypad.press(key);
                self.idle_clock.on_activity();
                self.cook_entry.handle_key(key);
            }
            PanelInput::Touch => self.idle_clock.on_activity(),
            PanelInput::CookingFinished => {
                self.cook_entry.finish_cooking();
            }
        }
    }

    /// Run until the input channel closes.
    pub async fn run(mut self, mut inputs: mpsc::Receiver<PanelInput>) {
        self.idle_clock.start();
        loop {
            tokio::select! {
                input = inputs.recv() => match input {
                    Some(input) => self.handle_input(input),
                    None => {
                        tracing::info!("input channel closed, stopping panel");
                        break;
                    }
                },
                timer = self.idle_clock.next_timer() => self.idle_clock.handle_timer(timer),
            }
        }
    }
}
