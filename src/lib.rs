//! # SkyBook - Flight Booking Demo
//!
//! A native desktop GUI demo that simulates searching flights, picking a fare
//! class, and booking a ticket. All flight data is randomly generated on each
//! search; there is no backend.
//!
//! ## Architecture
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, action handlers)
//!   │   ├── flights::generator (randomized flight batches)
//!   │   └── app::tasks (simulated booking-API delay)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (search, results, booking, success)
//!       ├── widgets::* (form components, notifications)
//!       └── theme (colors, styles)
//! ```
//!
//! ## Core Concepts
//!
//! The application is event-driven. The main thread renders with egui and
//! handles all user input; the only background work is the simulated booking
//! confirmation, which sleeps on a tokio runtime and reports back through an
//! `AppEvent` channel drained every frame by [`App::on_tick`].
//!
//! Application state lives in a single [`AppState`] behind
//! `Arc<parking_lot::RwLock<_>>`. Screens render from a cloned snapshot and
//! mutate state through the `App::handle_*` action methods, never directly.
//!
//! ## Screen Flow
//!
//! Exactly one of four screens is active at a time:
//!
//! 1. **Search**: origin/destination/date/passengers form
//! 2. **Results**: price-sorted flight cards with expandable fare options
//! 3. **Booking**: summary, passenger names, simulated confirmation
//! 4. **Success**: the rendered boarding pass

pub mod app;
pub mod core;
pub mod flights;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result};
