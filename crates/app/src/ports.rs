//! Port definitions — traits at the edge of the panel core.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the service layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod clock;
pub mod event_bus;

pub use clock::{Clock, SystemClock};
pub use event_bus::EventPublisher;
