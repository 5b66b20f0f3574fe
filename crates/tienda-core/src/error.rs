//! # Error Types
//!
//! Domain-specific error types for tienda-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tienda-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  tienda-session errors (separate crate)                                 │
//! │  └── SessionError     - Session/checkout orchestration failures         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SessionError → REST layer          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the cart engine itself is deliberately infallible: precondition
//! violations (absent product id, non-positive quantity) are silent no-ops
//! or removals per its contract, never error values. These types exist for
//! the caller-side [`crate::validation`] toolkit and the session layer.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, id, ...)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business rule violations.
///
/// These should be caught and translated to user-facing messages by the
/// presentation layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id does not resolve against the fetched catalog snapshot.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Discount id does not resolve against the fetched discount list.
    #[error("Discount not found: {0}")]
    DiscountNotFound(String),

    /// A sale would consume more of a supply than is on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// Complete Sale (3 × Americano, each uses 0.02 kg coffee)
    ///      │
    ///      ▼
    /// Check stock: available 0.04 kg
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Café", available: 0.04, requested: 0.06 }
    ///      │
    ///      ▼
    /// UI shows: "Stock insuficiente de Café. Disponible: 0.04 kg"
    /// ```
    #[error("Insufficient stock for {name}: available {available} {unit}, requested {requested} {unit}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
        unit: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation at the boundary, before the pricing engine is invoked - the
/// engine's contract assumes already-validated input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Raw text did not parse as an integer (quantity input fields).
    #[error("{field} must be a whole number, got '{raw}'")]
    NotAnInteger { field: String, raw: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Café".to_string(),
            available: 3,
            requested: 5,
            unit: "kg".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Café: available 3 kg, requested 5 kg"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NotAnInteger {
            field: "quantity".to_string(),
            raw: "2.5".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be a whole number, got '2.5'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
