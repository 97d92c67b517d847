//! # microwave-domain
//!
//! Pure domain model for the microwave control panel.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, keypad keys, the `MM:SS` cook time buffer
//! - Define the **cook time entry machine** (idle → entering time → cooking)
//! - Define the **idle tracker** (awake ↔ idle screen switching)
//! - Define **clock readings** (time-of-day and date text)
//! - Define **panel events** (everything the core tells the outside world)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO/async crates.
//! Timers, channels and logging live in the `app` crate.

pub mod error;

pub mod clock;
pub mod cook_time;
pub mod entry;
pub mod event;
pub mod idle;
pub mod key;
