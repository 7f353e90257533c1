//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one screen in the
//! booking flow. All follow the same pattern:
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // Read from the cloned state snapshot
//!     // Write user edits back through short locks
//!     // Call app.handle_* methods for named actions
//! }
//! ```
//!
//! Screens never mutate navigation or domain state directly; every
//! transition goes through an `App::handle_*` command.

pub mod booking;
pub mod results;
pub mod search;
pub mod success;
