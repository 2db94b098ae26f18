//! # Error Types
//!
//! Domain-specific error types for shiprate-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  shiprate-core errors (this file)                                       │
//! │  └── ValidationError                                                    │
//! │      ├── MissingQuantity  - a line has no qty at all                    │
//! │      └── NegativeValue    - a line has negative qty or weight           │
//! │                                                                         │
//! │  That is the complete set. Every other irregular input (missing         │
//! │  weight, missing fragile flag, missing order date) is VALID and         │
//! │  defaults to "contributes nothing".                                     │
//! │                                                                         │
//! │  Flow: ValidationError → caller → input-correction prompt to the user   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending line index)
//! 3. Errors are enum variants, never String
//! 4. Detection is fail-fast and whole-order: one bad line voids the
//!    entire quote, no partial totals ever escape

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Order validation errors.
///
/// Raised before any charge is accumulated; a single invalid line aborts
/// the whole computation. The engine is pure, so re-pricing the same
/// invalid order deterministically reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A line item carries no quantity.
    ///
    /// ## When This Occurs
    /// - An order deserialized from JSON omitted the `qty` field
    /// - An upstream caller built a `LineItem` without setting `qty`
    ///
    /// Note the difference from `qty = 0`: zero is a valid placeholder
    /// quantity (reserved but not billed); absence is a malformed order.
    #[error("line {line}: qty required")]
    MissingQuantity {
        /// Zero-based index of the offending line.
        line: usize,
    },

    /// A line item carries a negative quantity or weight.
    ///
    /// ## When This Occurs
    /// - `qty < 0` or `weight_grams < 0` on any line
    ///
    /// ## User Workflow
    /// ```text
    /// Price order
    ///      │
    ///      ▼
    /// Line 2 has qty = -1
    ///      │
    ///      ▼
    /// NegativeValue { line: 2, field: "qty" }
    ///      │
    ///      ▼
    /// UI shows: "line 2: negative qty not allowed"
    /// ```
    #[error("line {line}: negative {field} not allowed")]
    NegativeValue {
        /// Zero-based index of the offending line.
        line: usize,
        /// Which field was negative: `"qty"` or `"weight_grams"`.
        field: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type QuoteResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_quantity_message() {
        let err = ValidationError::MissingQuantity { line: 0 };
        assert_eq!(err.to_string(), "line 0: qty required");
    }

    #[test]
    fn test_negative_value_message() {
        let err = ValidationError::NegativeValue {
            line: 2,
            field: "qty",
        };
        assert_eq!(err.to_string(), "line 2: negative qty not allowed");

        let err = ValidationError::NegativeValue {
            line: 5,
            field: "weight_grams",
        };
        assert_eq!(err.to_string(), "line 5: negative weight_grams not allowed");
    }

    #[test]
    fn test_errors_are_comparable() {
        // Callers match on the variant to choose a correction prompt
        let a = ValidationError::MissingQuantity { line: 1 };
        let b = ValidationError::MissingQuantity { line: 1 };
        assert_eq!(a, b);
        assert!(matches!(a, ValidationError::MissingQuantity { line: 1 }));
    }
}
