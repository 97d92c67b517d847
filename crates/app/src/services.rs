//! Application services — the panel's use-cases.

pub mod cook_entry_service;
pub mod idle_clock_service;
pub mod keypad_service;
