/// Validation utilities for user input
use chrono::NaiveDate;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate the flight search form.
///
/// The single hard rule in the app: origin, destination, and travel date are
/// all required. Whitespace-only fields count as empty. Passenger names are
/// not validated anywhere; they degrade to a placeholder at ticket time.
pub fn validate_search(origin: &str, destination: &str, date: Option<NaiveDate>) -> ValidationResult {
    if origin.trim().is_empty() {
        return ValidationResult::err("Please enter a departure city");
    }

    if destination.trim().is_empty() {
        return ValidationResult::err("Please enter a destination city");
    }

    if date.is_none() {
        return ValidationResult::err("Please choose a travel date");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 9, 5)
    }

    #[test]
    fn test_valid_search() {
        assert!(validate_search("New York", "London", some_date()).is_valid);
    }

    #[test]
    fn test_empty_origin() {
        let result = validate_search("", "London", some_date());
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Please enter a departure city"));
    }

    #[test]
    fn test_blank_destination() {
        assert!(!validate_search("New York", "   ", some_date()).is_valid);
    }

    #[test]
    fn test_missing_date() {
        let result = validate_search("New York", "London", None);
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Please choose a travel date"));
    }
}
