//! # Booking desk views
//!
//! Headless screens over [`booking_client::BookingApi`]. Each view owns its
//! state (data, loading flag, message) and exposes the transitions a user can
//! trigger; `render` turns the current state into text for the terminal
//! shell.

pub mod messages;
pub mod mock;
pub mod prompt;
pub mod render;
pub mod router;
pub mod shell;
pub mod views;

pub use prompt::{Prompt, TerminalPrompt};
pub use router::Route;
