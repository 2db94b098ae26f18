//! # Validation Module
//!
//! Order validation for ShipRate.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Contract                                │
//! │                                                                         │
//! │  Pass 1: validate_order() — every line, in order                        │
//! │  ├── qty absent?            → MissingQuantity { line }                  │
//! │  ├── qty negative?          → NegativeValue { line, "qty" }             │
//! │  └── weight negative?       → NegativeValue { line, "weight_grams" }    │
//! │           │                                                             │
//! │           ▼  only if EVERY line passed                                  │
//! │  Pass 2: accumulation (engine module)                                   │
//! │                                                                         │
//! │  One bad line voids the whole order. No cent is accumulated before     │
//! │  the full validation pass completes, so a failure can never leak a     │
//! │  partial total.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shiprate_core::types::LineItem;
//! use shiprate_core::validation::validate_order;
//!
//! let order = vec![LineItem { qty: Some(2), ..Default::default() }];
//! assert!(validate_order(&order).is_ok());
//! ```

use crate::error::{QuoteResult, ValidationError};
use crate::types::LineItem;

// =============================================================================
// Line Validator
// =============================================================================

/// Validates a single line item.
///
/// ## Rules
/// - `qty` must be present (`Some`); zero is fine, absence is not
/// - `qty`, when present, must be ≥ 0
/// - `weight_grams`, when present, must be ≥ 0
///
/// An absent weight, fragile flag, or order date is valid and simply
/// contributes nothing.
///
/// ## Example
/// ```rust
/// use shiprate_core::types::LineItem;
/// use shiprate_core::validation::validate_line;
///
/// let good = LineItem { qty: Some(0), ..Default::default() };
/// assert!(validate_line(0, &good).is_ok());
///
/// let bad = LineItem { qty: None, ..Default::default() };
/// assert!(validate_line(0, &bad).is_err());
/// ```
pub fn validate_line(line: usize, item: &LineItem) -> QuoteResult<()> {
    let qty = match item.qty {
        Some(qty) => qty,
        None => return Err(ValidationError::MissingQuantity { line }),
    };

    if qty < 0 {
        return Err(ValidationError::NegativeValue { line, field: "qty" });
    }

    if matches!(item.weight_grams, Some(w) if w < 0) {
        return Err(ValidationError::NegativeValue {
            line,
            field: "weight_grams",
        });
    }

    Ok(())
}

// =============================================================================
// Order Validator
// =============================================================================

/// Validates every line of an order before any accumulation happens.
///
/// Fail-fast on the first violation in line order; the returned error
/// carries the offending line index so callers can prompt precisely.
/// An empty order is valid (it prices to zero, not an error).
pub fn validate_order(items: &[LineItem]) -> QuoteResult<()> {
    for (line, item) in items.iter().enumerate() {
        validate_line(line, item)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(qty: Option<i64>, weight_grams: Option<i64>) -> LineItem {
        LineItem {
            qty,
            weight_grams,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_lines() {
        assert!(validate_line(0, &line(Some(3), Some(1000))).is_ok());
        assert!(validate_line(0, &line(Some(0), None)).is_ok());
        assert!(validate_line(0, &line(Some(1), Some(0))).is_ok());
    }

    #[test]
    fn test_missing_qty() {
        let err = validate_line(4, &line(None, Some(500))).unwrap_err();
        assert_eq!(err, ValidationError::MissingQuantity { line: 4 });
    }

    #[test]
    fn test_negative_qty() {
        let err = validate_line(1, &line(Some(-1), None)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeValue {
                line: 1,
                field: "qty"
            }
        );
    }

    #[test]
    fn test_negative_weight() {
        let err = validate_line(2, &line(Some(1), Some(-500))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeValue {
                line: 2,
                field: "weight_grams"
            }
        );
    }

    #[test]
    fn test_empty_order_is_valid() {
        assert!(validate_order(&[]).is_ok());
    }

    #[test]
    fn test_order_reports_first_violation_in_line_order() {
        let order = vec![
            line(Some(1), Some(100)),
            line(None, None),
            line(Some(-2), None),
        ];
        let err = validate_order(&order).unwrap_err();
        assert_eq!(err, ValidationError::MissingQuantity { line: 1 });
    }

    #[test]
    fn test_one_bad_line_voids_valid_neighbours() {
        let order = vec![line(Some(5), Some(250)), line(Some(2), Some(-1))];
        assert!(validate_order(&order).is_err());
    }
}
