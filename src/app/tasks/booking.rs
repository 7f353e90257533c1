//! # Booking Task
//!
//! The simulated booking-API call: a fixed non-blocking delay on the tokio
//! runtime, after which the final ticket is delivered back to the main
//! thread as an event.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Ticket};
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Fixed delay standing in for an external payment/booking API.
const BOOKING_DELAY_MS: u64 = 1500;

/// Handle booking form submission.
///
/// Snapshots the ticket content up front, flips the processing flag so the
/// confirm button reads "Processing..." and is disabled, then sleeps on the
/// tokio runtime and sends [`AppEvent::BookingConfirmed`]. There is no
/// cancellation: if the user navigates away before the timer fires, the
/// confirmation still lands and switches the view.
pub(crate) fn confirm_booking(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let ticket = {
        let mut state = state.write();
        if state.booking_in_progress {
            return;
        }
        let Some(selection) = state.selection.as_ref() else {
            tracing::warn!("booking submitted with no selection");
            return;
        };
        let ticket = Ticket::from_parts(selection, &state.passenger_form);
        state.booking_in_progress = true;
        ticket
    };

    tracing::info!(passenger = %ticket.passenger, "booking submitted, simulating confirmation");

    TOKIO_RT.spawn(async move {
        tokio::time::sleep(Duration::from_millis(BOOKING_DELAY_MS)).await;
        if event_tx
            .send(AppEvent::BookingConfirmed(ticket))
            .await
            .is_err()
        {
            tracing::warn!("booking confirmation dropped, event channel closed");
        }
    });
}
