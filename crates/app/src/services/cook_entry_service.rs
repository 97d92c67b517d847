//! Cook entry service — runs the entry machine and publishes its effects.

use microwave_domain::entry::{CookEntryMachine, EntryEffect, EntryState};
use microwave_domain::event::PanelEvent;
use microwave_domain::key::Key;

use crate::ports::EventPublisher;

/// Application service owning the [`CookEntryMachine`].
///
/// Display updates go out as [`PanelEvent::CookTimeDisplay`]; an accepted
/// `start` goes out as [`PanelEvent::CookTimeFinalized`] for the cooking
/// executor.
pub struct CookEntryService<P> {
    machine: CookEntryMachine,
    publisher: P,
}

impl<P: EventPublisher> CookEntryService<P> {
    /// Create a service in [`EntryState::Idle`].
    pub fn new(publisher: P) -> Self {
        Self {
            machine: CookEntryMachine::new(),
            publisher,
        }
    }

    #[must_use]
    pub fn state(&self) -> EntryState {
        self.machine.state()
    }

    /// Feed a keypad press to the machine and publish the outcome.
    #[tracing::instrument(skip(self), fields(state = %self.machine.state()))]
    pub fn handle_key(&mut self, key: Key) -> EntryEffect {
        let effect = self.machine.press(key);
        self.apply(effect);
        effect
    }

    /// The cooking executor is done; return to idle.
    pub fn finish_cooking(&mut self) -> EntryEffect {
        let effect = self.machine.finish_cooking();
        match effect {
            EntryEffect::None => {
                tracing::warn!(state = %self.machine.state(), "cooking finished while not cooking");
            }
            _ => {
                tracing::info!("cooking finished");
                self.apply(effect);
            }
        }
        effect
    }

    fn apply(&self, effect: EntryEffect) {
        match effect {
            EntryEffect::None => tracing::debug!("key ignored"),
            EntryEffect::Show(time) => {
                tracing::debug!(cook_time = %time, "cook time updated");
                self.publisher.publish(PanelEvent::show_cook_time(time));
            }
            EntryEffect::Hide => {
                tracing::debug!("cook time cleared");
                self.publisher.publish(PanelEvent::hide_cook_time());
            }
            EntryEffect::Finalize(time) => {
                tracing::info!(cook_time = %time, "cooking started");
                self.publisher.publish(PanelEvent::CookTimeFinalized { time });
            }
            EntryEffect::Rejected { state, key } => {
                tracing::warn!(%state, %key, "key rejected");
            }
        }
    }
}
