//! Utility modules: input validation and the shared tokio runtime.

pub mod runtime;
pub mod validation;
