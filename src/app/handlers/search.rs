//! # Search Handlers
//!
//! Search submission (validate, generate a fresh batch, enter results) and
//! the origin/destination swap control.

use crate::app::state::{AppState, NoticeLevel, ResultsState, Screen, SearchCriteria};
use crate::core::AppError;
use crate::flights::generate_flights;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle search form submission.
///
/// On a validation failure the screen stays Search, no batch is generated,
/// and the notice is surfaced both inline and as a toast. On success the
/// criteria replace the previous search wholesale, a fresh batch is
/// generated, and any stale selection is dropped.
pub(crate) fn handle_search_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    let criteria = match SearchCriteria::from_form(&state.search_form) {
        Ok(criteria) => criteria,
        Err(err) => {
            let message = match err {
                AppError::Validation(msg) | AppError::State(msg) => msg,
            };
            tracing::info!(%message, "search rejected");
            state.search_form.error = Some(message.clone());
            state.pending_notices.push((NoticeLevel::Warning, message));
            return;
        }
    };
    state.search_form.error = None;

    let flights = generate_flights(&criteria.origin, &criteria.destination);
    tracing::info!(
        origin = %criteria.origin,
        destination = %criteria.destination,
        count = flights.len(),
        "generated flight batch"
    );

    state.results = ResultsState { flights, expanded: None };
    state.selection = None;
    state.search = Some(criteria);
    state.current_screen = Screen::Results;
    state.scroll_to_top = true;
}

/// Swap the origin and destination form fields.
pub(crate) fn handle_swap_route(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let form = &mut state.search_form;
    std::mem::swap(&mut form.origin, &mut form.destination);
}
