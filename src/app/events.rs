//! # Application Events
//!
//! Event types for async task communication back to the main thread.

use crate::app::state::Ticket;

/// Async task results sent to the main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The simulated booking API call completed; carries the final ticket.
    ///
    /// Deliberately unconditional: the confirmation applies even if the user
    /// navigated away while the delay was pending (see `tasks::booking`).
    BookingConfirmed(Ticket),
}
