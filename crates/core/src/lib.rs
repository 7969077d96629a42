//! Shared types for the booking desk: the wire model exchanged with the
//! booking backend, the error taxonomy, and date/time helpers used by the
//! views.

pub mod errors;
pub mod models;
pub mod time;
