//! # microwave-app
//!
//! Application layer — services, the panel event loop and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement or consume:
//!   - `EventPublisher` — outbound panel events (display, screen router, cooking executor)
//!   - `Clock` — wall-clock source for the idle screen
//! - Provide the **services** that wrap the domain state machines:
//!   - `Keypad` — turns a press into a `KeyPressed` event
//!   - `CookEntryService` — cook time entry, display updates, finalization
//!   - `IdleClockController` — clock tick and inactivity timer
//! - Provide the **panel** loop multiplexing input and timers on one task
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `microwave-domain` only (plus `tokio` for channels and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod panel;
pub mod ports;
pub mod services;
