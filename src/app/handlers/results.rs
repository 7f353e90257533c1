//! # Results Handlers
//!
//! Flight card expansion and fare selection on the results screen.

use crate::app::state::{AppState, FareQuote, Screen, Selection};
use crate::flights::{compute_price, FareClassName, FARE_CLASSES};
use parking_lot::RwLock;
use std::sync::Arc;

/// Toggle a flight card's fare options.
///
/// At most one card is expanded at a time: expanding one collapses the rest,
/// and clicking the already-expanded card's header collapses it.
pub(crate) fn handle_flight_toggle(state: Arc<RwLock<AppState>>, index: usize) {
    let mut state = state.write();
    state.results.expanded = if state.results.expanded == Some(index) {
        None
    } else {
        Some(index)
    };
}

/// Select a fare class on a flight card and enter the booking screen.
///
/// Replaces any prior selection.
pub(crate) fn handle_fare_select(
    state: Arc<RwLock<AppState>>,
    flight_index: usize,
    class: FareClassName,
) {
    let mut state = state.write();

    let Some(flight) = state.results.flights.get(flight_index).cloned() else {
        tracing::warn!(flight_index, "fare selected for unknown flight");
        return;
    };
    let Some(fare_class) = FARE_CLASSES.iter().find(|c| c.name == class) else {
        return;
    };

    let price = compute_price(flight.base_price, fare_class.multiplier);
    tracing::info!(
        airline = flight.airline,
        class = class.label(),
        price,
        "fare selected"
    );

    state.selection = Some(Selection {
        flight,
        fare: FareQuote { class, price },
    });
    state.current_screen = Screen::Booking;
    state.scroll_to_top = true;
}
