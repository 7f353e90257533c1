//! # Event Handler
//!
//! Applies `AppEvent` results from background tasks to application state.
//! Acquires the write lock per-event for minimal duration.

use crate::app::{App, AppEvent, NoticeLevel, Screen};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::BookingConfirmed(ticket) => {
                let mut state = self.state.write();
                // The confirmation lands regardless of the current screen;
                // the pending delay has no cancellation path.
                if state.current_screen != Screen::Booking {
                    tracing::warn!(
                        screen = state.current_screen.title(),
                        "booking confirmation arrived after navigating away"
                    );
                }
                tracing::info!(passenger = %ticket.passenger, "booking confirmed");
                state.booking_in_progress = false;
                state.ticket = Some(ticket);
                state.current_screen = Screen::Success;
                state.scroll_to_top = true;
                state
                    .pending_notices
                    .push((NoticeLevel::Success, "Booking confirmed".to_string()));
            }
        }
    }
}
