//! # Validation Module
//!
//! Caller-side input validation for Tienda POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                         │
//! │  ├── Basic format checks (empty, length)                                │
//! │  └── Immediate user feedback                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                            │
//! │  ├── Type validation (parse raw input fields)                           │
//! │  └── Business rule validation                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart engine                                                   │
//! │  └── Assumes well-formed calls; no precondition signalling              │
//! │                                                                         │
//! │  The pricing engine's contract makes malformed input the CALLER's       │
//! │  problem. This module is the caller's toolkit for meeting that          │
//! │  contract before invoking an operation.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::DiscountKind;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an entity id (product, discount, supply).
///
/// Ids are opaque strings at the type level, but the backing system issues
/// UUID v4s, so anything non-UUID is a malformed request.
///
/// ## Example
/// ```rust
/// use tienda_core::validation::validate_id;
///
/// assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_id("not-a-uuid").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (returns all/default results)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses and validates the raw text of a quantity input field.
///
/// The cart quantity box is free text in the UI; whatever the user typed
/// arrives here as a string. Non-integer input is rejected before it ever
/// reaches the cart - [`crate::cart::Cart::set_quantity`] assumes an
/// already-validated integer.
///
/// Any integer is accepted, including zero and negatives: the cart treats
/// those as removal, which is a legitimate caller intent (the "-" stepper
/// below quantity 1).
///
/// ## Example
/// ```rust
/// use tienda_core::validation::validate_quantity_input;
///
/// assert_eq!(validate_quantity_input("5").unwrap(), 5);
/// assert_eq!(validate_quantity_input(" 0 ").unwrap(), 0);
/// assert!(validate_quantity_input("2.5").is_err());
/// assert!(validate_quantity_input("").is_err());
/// ```
pub fn validate_quantity_input(raw: &str) -> ValidationResult<i64> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    trimmed.parse::<i64>().map_err(|_| ValidationError::NotAnInteger {
        field: "quantity".to_string(),
        raw: trimmed.to_string(),
    })
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (unpriced catalog entries sell for free)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount rule.
///
/// ## Rules
/// - Percentage: 0 to 10000 basis points (0% to 100%)
/// - FixedPerUnit: non-negative cents
pub fn validate_discount_kind(kind: &DiscountKind) -> ValidationResult<()> {
    match *kind {
        DiscountKind::Percentage { bps } => {
            if bps > 10000 {
                return Err(ValidationError::OutOfRange {
                    field: "discount percentage".to_string(),
                    min: 0,
                    max: 10000,
                });
            }
        }
        DiscountKind::FixedPerUnit { amount_cents } => {
            if amount_cents < 0 {
                return Err(ValidationError::OutOfRange {
                    field: "discount amount".to_string(),
                    min: 0,
                    max: i64::MAX,
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("not-a-uuid").is_err());
        assert!(validate_id("123").is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Café Americano").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  café  ").unwrap(), "café");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_quantity_input() {
        assert_eq!(validate_quantity_input("5").unwrap(), 5);
        assert_eq!(validate_quantity_input(" 12 ").unwrap(), 12);
        // Zero and negatives are valid input: the cart removes the line.
        assert_eq!(validate_quantity_input("0").unwrap(), 0);
        assert_eq!(validate_quantity_input("-1").unwrap(), -1);

        assert!(validate_quantity_input("").is_err());
        assert!(validate_quantity_input("2.5").is_err());
        assert!(validate_quantity_input("abc").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_discount_kind() {
        assert!(validate_discount_kind(&DiscountKind::Percentage { bps: 0 }).is_ok());
        assert!(validate_discount_kind(&DiscountKind::Percentage { bps: 10000 }).is_ok());
        assert!(validate_discount_kind(&DiscountKind::Percentage { bps: 10001 }).is_err());

        assert!(validate_discount_kind(&DiscountKind::FixedPerUnit { amount_cents: 0 }).is_ok());
        assert!(
            validate_discount_kind(&DiscountKind::FixedPerUnit { amount_cents: -1 }).is_err()
        );
    }
}
