//! # Navigation Handlers
//!
//! Screen transitions. Entering a screen deactivates whatever was active
//! (the `Screen` enum admits exactly one) and requests a scroll to the top.

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Enter a screen.
///
/// Internal handler function - use the [`crate::app::App`] action methods
/// instead.
pub(crate) fn enter_screen(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    state.current_screen = screen;
    state.scroll_to_top = true;
    tracing::debug!(screen = screen.title(), "screen change");
}

/// Go-home action from the success screen: reset everything and return to
/// the search screen with fresh forms.
pub(crate) fn handle_go_home(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.reset();
    state.scroll_to_top = true;
    tracing::info!("returned home, state reset");
}
