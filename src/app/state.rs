//! # Application State Types
//!
//! All state-related types for the application: the screen enum, search
//! criteria, the current results batch, the pending selection, form buffers,
//! and the final ticket.

use chrono::NaiveDate;

use crate::core::AppError;
use crate::flights::{FareClassName, Flight, TAXES_AND_FEES};
use crate::utils::validation;

/// Application screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Flight search form (start screen)
    Search,
    /// Generated flight results with expandable fare options
    Results,
    /// Booking summary and passenger details
    Booking,
    /// Confirmation with the rendered boarding pass
    Success,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Search => "Find Your Flight",
            Screen::Results => "Select a Flight",
            Screen::Booking => "Complete Your Booking",
            Screen::Success => "Booking Confirmed",
        }
    }
}

/// Search criteria captured on a valid search submission.
///
/// Immutable once created; replaced wholesale on each new search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    /// Always >= 1 (clamped by the form widget).
    pub passengers: u32,
}

impl SearchCriteria {
    /// Build criteria from the form buffers, enforcing the single validation
    /// rule: origin, destination, and date are all required.
    pub fn from_form(form: &SearchFormState) -> crate::core::Result<Self> {
        let check = validation::validate_search(&form.origin, &form.destination, form.date);
        if let Some(message) = check.error {
            return Err(AppError::Validation(message));
        }
        let date = form
            .date
            .ok_or_else(|| AppError::Validation("Please choose a travel date".to_string()))?;
        Ok(Self {
            origin: form.origin.trim().to_string(),
            destination: form.destination.trim().to_string(),
            date,
            passengers: form.passengers.max(1),
        })
    }
}

/// Severity of a queued toast notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// Search form input buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormState {
    pub origin: String,
    pub destination: String,
    /// Pre-populated with the current date at startup. The picker cannot
    /// clear it, but validation still covers the empty case.
    pub date: Option<NaiveDate>,
    pub passengers: u32,
    /// Inline validation error shown under the form.
    pub error: Option<String>,
}

impl Default for SearchFormState {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            date: Some(chrono::Local::now().date_naive()),
            passengers: 1,
            error: None,
        }
    }
}

/// Passenger name form on the booking screen. Both fields are optional;
/// the ticket falls back to "Guest" when both are blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerFormState {
    pub first_name: String,
    pub last_name: String,
}

/// The current results batch and which card (if any) is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsState {
    /// Flights sorted ascending by base price; discarded on the next search.
    pub flights: Vec<Flight>,
    /// Index of the expanded card. At most one card is expanded at a time.
    pub expanded: Option<usize>,
}

/// A computed fare for one class of one flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareQuote {
    pub class: FareClassName,
    pub price: u32,
}

/// The user's chosen (flight, fare class) pair pending booking.
///
/// Replaces any prior selection; cleared on the go-home reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub flight: Flight,
    pub fare: FareQuote,
}

impl Selection {
    /// Booking total: fare price plus the fixed tax/fee surcharge.
    pub fn total(&self) -> u32 {
        self.fare.price + TAXES_AND_FEES
    }
}

/// The final boarding pass content shown on the success screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub passenger: String,
    pub airline: String,
    pub class_name: &'static str,
    /// First 3 characters of the origin, uppercased.
    pub origin_code: String,
    /// First 3 characters of the destination, uppercased.
    pub destination_code: String,
    pub departs: String,
    /// Placeholder; this demo has no real gate assignment.
    pub gate: &'static str,
}

impl Ticket {
    /// Build the ticket from the pending selection and the passenger form.
    pub fn from_parts(selection: &Selection, passenger: &PassengerFormState) -> Self {
        let full_name = format!(
            "{} {}",
            passenger.first_name.trim(),
            passenger.last_name.trim()
        );
        let name = full_name.trim();
        Self {
            passenger: if name.is_empty() { "Guest".to_string() } else { name.to_string() },
            airline: selection.flight.airline.to_string(),
            class_name: selection.fare.class.label(),
            origin_code: route_code(&selection.flight.origin),
            destination_code: route_code(&selection.flight.destination),
            departs: selection.flight.departs.clone(),
            gate: "Gate A4",
        }
    }
}

/// First three characters of a city name, uppercased, for the ticket route.
fn route_code(city: &str) -> String {
    city.chars().take(3).collect::<String>().to_uppercase()
}

/// Global application state.
///
/// A single instance lives behind `Arc<RwLock<_>>` inside [`crate::app::App`]
/// and is passed into handlers and renderers; nothing reads it ambiently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Search form buffers
    pub search_form: SearchFormState,
    /// Criteria of the last valid search (None until the first search)
    pub search: Option<SearchCriteria>,
    /// Results batch generated from `search`
    pub results: ResultsState,
    /// Pending (flight, fare) selection
    pub selection: Option<Selection>,
    /// Passenger name form on the booking screen
    pub passenger_form: PassengerFormState,
    /// True while the simulated booking API call is in flight; the confirm
    /// button reads "Processing..." and is disabled.
    pub booking_in_progress: bool,
    /// Final boarding pass, set when the booking confirmation lands
    pub ticket: Option<Ticket>,
    /// One-shot request to scroll the active screen to the top
    pub scroll_to_top: bool,
    /// Notices to surface as toasts (drained by the renderer)
    pub pending_notices: Vec<(NoticeLevel, String)>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Search,
            search_form: SearchFormState::default(),
            search: None,
            results: ResultsState::default(),
            selection: None,
            passenger_form: PassengerFormState::default(),
            booking_in_progress: false,
            ticket: None,
            scroll_to_top: false,
            pending_notices: Vec::new(),
        }
    }

    /// Reset to the initial state (go-home action): fresh forms, no search,
    /// no batch, no selection, no ticket, back on the search screen.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
