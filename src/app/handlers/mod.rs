//! User-action handlers. Each named action from the UI maps to one handler
//! that takes the shared state and applies the transition.

pub(crate) mod navigation;
pub(crate) mod results;
pub(crate) mod search;
