//! Error types for the rental pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during checkout calculation,
//! inventory parsing, and configuration loading.

use thiserror::Error;

/// The main error type for the rental pricing engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Every
/// variant is a local, recoverable failure; none is fatal to the process.
///
/// # Example
///
/// ```
/// use rental_engine::error::RentalError;
///
/// let error = RentalError::InvalidDiscount { percent: 101 };
/// assert_eq!(
///     error.to_string(),
///     "Discount percent must be a whole number between 0 and 100, got 101"
/// );
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// The discount percent was outside the 0-100 range.
    #[error("Discount percent must be a whole number between 0 and 100, got {percent}")]
    InvalidDiscount {
        /// The rejected discount percent.
        percent: i32,
    },

    /// The rental day count was less than one.
    #[error("Rental day count must be 1 or more, got {count}")]
    InvalidDayCount {
        /// The rejected day count.
        count: i64,
    },

    /// A tool specification line was malformed.
    #[error("Invalid tool spec '{line}': {message}")]
    InvalidToolSpec {
        /// The offending specification line, trimmed.
        line: String,
        /// A description of what made the line invalid.
        message: String,
    },

    /// No tool with the given code exists in the inventory.
    #[error("Tool not found: {code}")]
    ToolNotFound {
        /// The tool code that was not found.
        code: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_discount_displays_percent() {
        let error = RentalError::InvalidDiscount { percent: -5 };
        assert_eq!(
            error.to_string(),
            "Discount percent must be a whole number between 0 and 100, got -5"
        );
    }

    #[test]
    fn test_invalid_day_count_displays_count() {
        let error = RentalError::InvalidDayCount { count: 0 };
        assert_eq!(error.to_string(), "Rental day count must be 1 or more, got 0");
    }

    #[test]
    fn test_invalid_tool_spec_displays_line_and_message() {
        let error = RentalError::InvalidToolSpec {
            line: "Ladder,Werner".to_string(),
            message: "expected 6 comma-separated fields".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid tool spec 'Ladder,Werner': expected 6 comma-separated fields"
        );
    }

    #[test]
    fn test_tool_not_found_displays_code() {
        let error = RentalError::ToolNotFound {
            code: "XXXX".to_string(),
        };
        assert_eq!(error.to_string(), "Tool not found: XXXX");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = RentalError::ConfigNotFound {
            path: "/missing/store.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/store.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = RentalError::ConfigParseError {
            path: "/config/store.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/store.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RentalError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_tool_not_found() -> RentalResult<()> {
            Err(RentalError::ToolNotFound {
                code: "LADW".to_string(),
            })
        }

        fn propagates_error() -> RentalResult<()> {
            returns_tool_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
