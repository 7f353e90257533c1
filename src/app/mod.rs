//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the UI rendering layer, the user-action
//! handlers, and the single background task (the simulated booking delay).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                Main Thread (egui)                   │
//! │  App (orchestrator)                                 │
//! │  - on_tick()   - drains the event channel per frame │
//! │  - handle_*()  - named user-action commands         │
//! │                                                     │
//! │  State: Arc<RwLock<AppState>>                       │
//! │  - renderers clone a snapshot, handlers take short  │
//! │    write locks                                      │
//! └──────────────────────┬──────────────────────────────┘
//!                        │ async_channel (unbounded)
//! ┌──────────────────────▼──────────────────────────────┐
//! │           Tokio runtime (utils::runtime)            │
//! │  tasks::booking - 1500 ms simulated confirmation    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Every user action the UI can produce maps to one named `handle_*` method
//! here, so the renderers never bind state mutations themselves.

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::flights::FareClassName;

/// Main application orchestrator.
///
/// Owns the shared [`AppState`] and the event channel that background tasks
/// use to report results back to the main thread.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Renderers clone a snapshot for the frame; handlers acquire the write
    /// lock briefly. Never hold a lock across a frame.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in [`App::on_tick`]
    /// with `try_recv()` (non-blocking).
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into background tasks.
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create a new application instance: search screen active, empty forms,
    /// date field pre-populated with today.
    pub fn new() -> Self {
        let (event_tx, event_rx) = unbounded();

        let app = App {
            state: Arc::new(RwLock::new(AppState::new())),
            event_rx,
            event_tx,
        };

        tracing::info!("app state initialized, event channel created");
        app
    }

    /// Called every frame to process pending async events.
    ///
    /// Non-blocking: drains whatever the booking task has sent and applies
    /// it to state. The UI stays responsive during the simulated delay.
    pub fn on_tick(&mut self) {
        use event_handler::AppEventHandler;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_impl(event);
        }
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Submit the search form. Stays on the search screen if validation
    /// fails; otherwise generates a fresh batch and enters results.
    pub fn handle_search_submit(&mut self) {
        handlers::search::handle_search_submit(self.state.clone());
    }

    /// Swap the origin and destination fields.
    pub fn handle_swap_route(&mut self) {
        handlers::search::handle_swap_route(self.state.clone());
    }

    /// Toggle a flight card's fare options (mutually exclusive expansion).
    pub fn handle_flight_toggle(&mut self, index: usize) {
        handlers::results::handle_flight_toggle(self.state.clone(), index);
    }

    /// Pick a fare class on a flight card and enter the booking screen.
    pub fn handle_fare_select(&mut self, flight_index: usize, class: FareClassName) {
        handlers::results::handle_fare_select(self.state.clone(), flight_index, class);
    }

    /// Back action from the results screen.
    pub fn handle_back_to_search(&mut self) {
        handlers::navigation::enter_screen(self.state.clone(), Screen::Search);
    }

    /// Back action from the booking screen.
    pub fn handle_back_to_results(&mut self) {
        handlers::navigation::enter_screen(self.state.clone(), Screen::Results);
    }

    /// Submit the booking form, starting the simulated confirmation delay.
    pub fn handle_booking_submit(&mut self) {
        tasks::booking::confirm_booking(self.state.clone(), self.event_tx.clone());
    }

    /// Go-home action from the success screen: full state reset.
    pub fn handle_go_home(&mut self) {
        handlers::navigation::handle_go_home(self.state.clone());
    }

    /// Drain pending notices for toast display.
    pub fn take_notices(&mut self) -> Vec<(NoticeLevel, String)> {
        std::mem::take(&mut self.state.write().pending_notices)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fill_search_form(app: &App, origin: &str, destination: &str) {
        let mut state = app.state.write();
        state.search_form.origin = origin.to_string();
        state.search_form.destination = destination.to_string();
    }

    // ========== Screen Tests ==========

    #[test]
    fn test_initial_state() {
        let app = App::new();
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Search);
        assert!(state.search.is_none());
        assert!(state.selection.is_none());
        assert!(state.results.flights.is_empty());
        // Date field is pre-populated with the current date
        assert_eq!(state.search_form.date, Some(chrono::Local::now().date_naive()));
    }

    #[test]
    fn test_screen_title() {
        assert_eq!(Screen::Search.title(), "Find Your Flight");
        assert_eq!(Screen::Results.title(), "Select a Flight");
        assert_eq!(Screen::Booking.title(), "Complete Your Booking");
        assert_eq!(Screen::Success.title(), "Booking Confirmed");
    }

    // ========== Search Tests ==========

    #[test]
    fn test_valid_search_enters_results_with_batch() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");

        app.handle_search_submit();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Results);
        assert!((4..=6).contains(&state.results.flights.len()));
        assert!(state.search_form.error.is_none());
        let criteria = state.search.as_ref().unwrap();
        assert_eq!(criteria.origin, "NYC");
        assert_eq!(criteria.destination, "LON");
    }

    #[test]
    fn test_search_with_empty_origin_stays_on_search() {
        let mut app = App::new();
        fill_search_form(&app, "", "LON");

        app.handle_search_submit();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Search);
        assert!(state.results.flights.is_empty());
        assert!(state.search_form.error.is_some());
        assert!(!state.pending_notices.is_empty());
    }

    #[test]
    fn test_search_with_empty_destination_stays_on_search() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "   ");

        app.handle_search_submit();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Search);
        assert!(state.results.flights.is_empty());
    }

    #[test]
    fn test_search_with_no_date_stays_on_search() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.state.write().search_form.date = None;

        app.handle_search_submit();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Search);
        assert!(state.results.flights.is_empty());
    }

    #[test]
    fn test_new_search_replaces_batch_and_clears_selection() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();
        app.handle_fare_select(0, FareClassName::Economy);
        assert!(app.state.read().selection.is_some());

        app.handle_back_to_results();
        app.handle_back_to_search();
        fill_search_form(&app, "PAR", "TOK");
        app.handle_search_submit();

        let state = app.state.read();
        assert!(state.selection.is_none());
        assert_eq!(state.results.expanded, None);
        assert_eq!(state.results.flights[0].origin, "PAR");
    }

    #[test]
    fn test_swap_route() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");

        app.handle_swap_route();

        let state = app.state.read();
        assert_eq!(state.search_form.origin, "LON");
        assert_eq!(state.search_form.destination, "NYC");
    }

    // ========== Results Tests ==========

    #[test]
    fn test_flight_card_expansion_is_mutually_exclusive() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();

        app.handle_flight_toggle(0);
        assert_eq!(app.state.read().results.expanded, Some(0));

        // Expanding another card collapses the first
        app.handle_flight_toggle(1);
        assert_eq!(app.state.read().results.expanded, Some(1));

        // Clicking the expanded card again collapses it
        app.handle_flight_toggle(1);
        assert_eq!(app.state.read().results.expanded, None);
    }

    #[test]
    fn test_fare_select_enters_booking_with_computed_price() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();

        let base_price = app.state.read().results.flights[0].base_price;
        app.handle_fare_select(0, FareClassName::Business);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Booking);
        let selection = state.selection.as_ref().unwrap();
        assert_eq!(selection.fare.class, FareClassName::Business);
        assert_eq!(selection.fare.price, ((base_price as f64) * 2.2).round() as u32);
        assert_eq!(selection.total(), selection.fare.price + 45);
    }

    #[test]
    fn test_fare_select_out_of_range_is_ignored() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();

        app.handle_fare_select(99, FareClassName::Economy);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Results);
        assert!(state.selection.is_none());
    }

    // ========== Navigation Tests ==========

    #[test]
    fn test_back_navigation() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();
        app.handle_fare_select(0, FareClassName::Economy);
        assert_eq!(app.state.read().current_screen, Screen::Booking);

        app.handle_back_to_results();
        assert_eq!(app.state.read().current_screen, Screen::Results);

        app.handle_back_to_search();
        assert_eq!(app.state.read().current_screen, Screen::Search);
    }

    #[test]
    fn test_entering_a_screen_requests_scroll_to_top() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();
        assert!(app.state.read().scroll_to_top);
    }

    // ========== Booking Tests ==========

    #[test]
    fn test_booking_flow_end_to_end() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();
        app.handle_fare_select(0, FareClassName::Business);

        app.handle_booking_submit();
        assert!(app.state.read().booking_in_progress);
        assert_eq!(app.state.read().current_screen, Screen::Booking);

        // Simulated confirmation fires after 1500 ms
        std::thread::sleep(Duration::from_millis(1800));
        app.on_tick();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Success);
        assert!(!state.booking_in_progress);
        let ticket = state.ticket.as_ref().unwrap();
        assert_eq!(ticket.origin_code, "NYC");
        assert_eq!(ticket.destination_code, "LON");
        assert_eq!(ticket.class_name, "Business");
        assert_eq!(ticket.passenger, "Guest");
    }

    #[test]
    fn test_booking_submit_without_selection_is_ignored() {
        let mut app = App::new();
        app.handle_booking_submit();
        assert!(!app.state.read().booking_in_progress);
    }

    #[test]
    fn test_booking_confirmation_lands_after_navigating_away() {
        // Documented quirk: the pending delay has no cancellation, so the
        // confirmation switches the view even if the user went back.
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();
        app.handle_fare_select(0, FareClassName::Economy);
        app.handle_booking_submit();

        app.handle_back_to_results();
        assert_eq!(app.state.read().current_screen, Screen::Results);

        std::thread::sleep(Duration::from_millis(1800));
        app.on_tick();
        assert_eq!(app.state.read().current_screen, Screen::Success);
    }

    // ========== Reset Tests ==========

    #[test]
    fn test_go_home_resets_state() {
        let mut app = App::new();
        fill_search_form(&app, "NYC", "LON");
        app.handle_search_submit();
        app.handle_fare_select(0, FareClassName::FirstClass);
        app.handle_booking_submit();
        std::thread::sleep(Duration::from_millis(1800));
        app.on_tick();
        assert_eq!(app.state.read().current_screen, Screen::Success);

        app.handle_go_home();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Search);
        assert!(state.search.is_none());
        assert!(state.selection.is_none());
        assert!(state.ticket.is_none());
        assert!(state.results.flights.is_empty());
        assert!(state.search_form.origin.is_empty());
        assert!(state.passenger_form.first_name.is_empty());
    }
}
