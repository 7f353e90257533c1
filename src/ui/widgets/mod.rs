//! Reusable UI components shared across screens.

pub mod forms;
pub mod notifications;
