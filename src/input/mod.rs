//! Input adapters that translate user input into engine updates.

#[cfg(feature = "gui")]
pub mod gui;
