//! Keypad service — one press in, one `KeyPressed` event out.

use microwave_domain::error::MicrowaveError;
use microwave_domain::event::PanelEvent;
use microwave_domain::key::Key;

use crate::ports::EventPublisher;

/// Stateless keypad that announces every press on the event bus.
pub struct Keypad<P> {
    publisher: P,
}

impl<P: EventPublisher> Keypad<P> {
    /// Create a keypad publishing through `publisher`.
    pub fn new(publisher: P) -> Self {
        Self { publisher }
    }

    /// Press `key`, publishing exactly one [`PanelEvent::KeyPressed`].
    pub fn press(&self, key: Key) -> Key {
        tracing::info!(%key, "button pressed");
        self.publisher.publish(PanelEvent::KeyPressed { key });
        key
    }

    /// Press the key named by its wire identifier (`"0"`–`"9"`, `"start"`, `"stop"`).
    ///
    /// # Errors
    ///
    /// Returns [`MicrowaveError::InvalidKey`] for any other identifier; nothing
    /// is published in that case.
    pub fn press_id(&self, id: &str) -> Result<Key, MicrowaveError> {
        let key: Key = id.parse()?;
        Ok(self.press(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::InProcessEventBus;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn should_publish_exactly_one_event_per_press() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();
        let keypad = Keypad::new(bus);

        keypad.press(Key::Start);

        assert_eq!(
            rx.try_recv().unwrap(),
            PanelEvent::KeyPressed { key: Key::Start }
        );
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn should_publish_every_key() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();
        let keypad = Keypad::new(&bus);

        for key in Key::all() {
            keypad.press(key);
            assert_eq!(rx.try_recv().unwrap(), PanelEvent::KeyPressed { key });
        }
    }

    #[test]
    fn should_press_by_identifier() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();
        let keypad = Keypad::new(&bus);

        let key = keypad.press_id("stop").unwrap();

        assert_eq!(key, Key::Stop);
        assert_eq!(rx.try_recv().unwrap(), PanelEvent::KeyPressed { key });
    }

    #[test]
    fn should_reject_unknown_identifier_without_publishing() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();
        let keypad = Keypad::new(&bus);

        let result = keypad.press_id("pause");

        assert!(matches!(result, Err(MicrowaveError::InvalidKey(_))));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
