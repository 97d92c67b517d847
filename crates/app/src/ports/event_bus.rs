//! Event bus port — publish/subscribe for panel events.

use microwave_domain::event::PanelEvent;

/// Publishes panel events to interested subscribers.
///
/// Publishing is synchronous and never fails: a display that is not
/// listening simply misses the event.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: PanelEvent);
}

impl<T: EventPublisher + ?Sized> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: PanelEvent) {
        (**self).publish(event);
    }
}

impl<T: EventPublisher + ?Sized> EventPublisher for &T {
    fn publish(&self, event: PanelEvent) {
        (**self).publish(event);
    }
}
