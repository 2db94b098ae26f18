//! # Domain Types
//!
//! Core domain types used throughout ShipRate.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    RateCard     │   │     Quote       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  qty (Option)   │   │  kg_rate_cents  │   │  weight_cents   │       │
//! │  │  weight_grams   │   │  fragile_fee_.. │   │  fragile_cents  │       │
//! │  │  fragile        │   │  sunday_rate_.. │   │  surcharge_..   │       │
//! │  │  order_date     │   │                 │   │  total_cents    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  items + rate card go IN, one quote comes OUT. Nothing is retained.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Units Convention
//! Money is integer cents and weight is integer grams, always. The smallest
//! unit of each dimension keeps every intermediate exact: a gram priced in
//! cents-per-kilogram is exactly one millicent, so weight charges accumulate
//! without a single lossy operation until the final rounding.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::GRAMS_PER_KG;

// =============================================================================
// Line Item
// =============================================================================

/// One entry in an order's basket.
///
/// ## Optionality Rules
/// - `qty` is **required by contract** but optional in the type: orders
///   arrive from external callers (often JSON) where the field may simply
///   be absent, and absence must surface as a typed validation error
///   rather than a deserialization panic.
/// - Everything else genuinely is optional and defaults to "contributes
///   nothing": no weight means no weight charge (0, not 1 unit), no
///   fragile flag means no handling fee, no date means no Sunday check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Units ordered. `Some(0)` marks a non-chargeable placeholder line
    /// (e.g., an out-of-stock item reserved but not billed); `None` is a
    /// validation error.
    pub qty: Option<i64>,

    /// Per-unit weight in grams. Absent means the line contributes no
    /// weight charge.
    pub weight_grams: Option<i64>,

    /// Whether the line needs fragile handling. One fixed fee per fragile
    /// line, regardless of quantity.
    #[serde(default)]
    pub fragile: bool,

    /// Calendar date attached to the line, used only to test for Sunday.
    /// Callers converting from an instant must take the UTC calendar date;
    /// the engine never reads a clock.
    #[ts(as = "Option<String>")]
    pub order_date: Option<NaiveDate>,
}

impl LineItem {
    /// Per-unit weight, defaulting an absent weight to zero grams.
    #[inline]
    pub fn weight_grams_or_zero(&self) -> i64 {
        self.weight_grams.unwrap_or(0)
    }

    /// Whether this line contributes charges.
    ///
    /// A `qty = 0` placeholder contributes nothing at all: no weight
    /// charge, no fragile fee, and it cannot gate the Sunday surcharge.
    /// Only call after validation; an absent qty is treated as
    /// non-chargeable here.
    #[inline]
    pub fn is_chargeable(&self) -> bool {
        matches!(self.qty, Some(q) if q > 0)
    }

    /// Whether the line's order date falls on a Sunday.
    ///
    /// Day-of-week comes from the plain calendar date (proleptic
    /// Gregorian), so the check is pure and reproducible; there is no
    /// ambient timezone involved.
    #[inline]
    pub fn is_sunday_dated(&self) -> bool {
        matches!(self.order_date, Some(d) if d.weekday() == Weekday::Sun)
    }
}

// =============================================================================
// Rate Card
// =============================================================================

/// Order-independent pricing configuration, supplied by the caller on
/// every call.
///
/// ## Why Per-Call?
/// Rates are a value, never a process-wide singleton: concurrent orders
/// priced against different rate cards must not interfere, and a pure
/// function cannot reach into shared mutable configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateCard {
    /// Charge in cents per (kilogram × unit): a line adds
    /// `qty × weight × kg_rate`.
    pub kg_rate_cents: i64,

    /// Fixed fee in cents, charged once per fragile chargeable line.
    pub fragile_fee_cents: i64,

    /// Fixed fee in cents, charged at most once per order when any
    /// chargeable line is Sunday-dated.
    pub sunday_rate_cents: i64,
}

impl RateCard {
    /// Creates a rate card from the three cent amounts.
    #[inline]
    pub const fn new(kg_rate_cents: i64, fragile_fee_cents: i64, sunday_rate_cents: i64) -> Self {
        RateCard {
            kg_rate_cents,
            fragile_fee_cents,
            sunday_rate_cents,
        }
    }

    /// Returns the per-kilogram rate as Money.
    #[inline]
    pub fn kg_rate(&self) -> Money {
        Money::from_cents(self.kg_rate_cents)
    }

    /// Returns the fragile-handling fee as Money.
    #[inline]
    pub fn fragile_fee(&self) -> Money {
        Money::from_cents(self.fragile_fee_cents)
    }

    /// Returns the Sunday surcharge as Money.
    #[inline]
    pub fn sunday_rate(&self) -> Money {
        Money::from_cents(self.sunday_rate_cents)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// The priced result of one order.
///
/// Components always reconcile: `weight + fragile + surcharge == total`.
/// The weight component carries the order's single rounding step (fixed
/// fees are whole cents already), so summing the parts reproduces the
/// total exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    /// Weight charge across all chargeable lines, rounded to the cent.
    pub weight: Money,

    /// Fragile-handling fees (fee × number of fragile chargeable lines).
    pub fragile: Money,

    /// Sunday surcharge: either zero or exactly one `sunday_rate`.
    pub surcharge: Money,

    /// Grand total; what `compute_shipping_cost` returns.
    pub total: Money,

    /// Number of chargeable lines (`qty > 0`) seen in the order.
    pub chargeable_lines: usize,

    /// Number of fragile chargeable lines billed a handling fee.
    pub fragile_lines: usize,

    /// Whether the per-order Sunday surcharge was applied.
    pub sunday_surcharge: bool,
}

// =============================================================================
// Weight Helpers
// =============================================================================

/// Converts whole kilograms to grams, for callers whose catalogs store
/// kilogram weights.
#[inline]
pub const fn kilograms(kg: i64) -> i64 {
    kg * GRAMS_PER_KG
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_defaults() {
        let line = LineItem::default();
        assert_eq!(line.qty, None);
        assert_eq!(line.weight_grams_or_zero(), 0);
        assert!(!line.fragile);
        assert!(!line.is_chargeable());
        assert!(!line.is_sunday_dated());
    }

    #[test]
    fn test_chargeable_requires_positive_qty() {
        let mut line = LineItem {
            qty: Some(1),
            ..Default::default()
        };
        assert!(line.is_chargeable());

        line.qty = Some(0);
        assert!(!line.is_chargeable());

        line.qty = None;
        assert!(!line.is_chargeable());
    }

    #[test]
    fn test_sunday_detection() {
        // 2024-06-02 was a Sunday, 2024-06-03 a Monday
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        let line = LineItem {
            qty: Some(1),
            order_date: Some(sunday),
            ..Default::default()
        };
        assert!(line.is_sunday_dated());

        let line = LineItem {
            qty: Some(1),
            order_date: Some(monday),
            ..Default::default()
        };
        assert!(!line.is_sunday_dated());
    }

    #[test]
    fn test_line_item_from_json_missing_fields() {
        // External callers send sparse JSON; only what is present counts
        let line: LineItem = serde_json::from_str(r#"{"qty": 3}"#).unwrap();
        assert_eq!(line.qty, Some(3));
        assert_eq!(line.weight_grams, None);
        assert!(!line.fragile);
        assert_eq!(line.order_date, None);

        // A missing qty deserializes cleanly and fails later, in validation
        let line: LineItem = serde_json::from_str(r#"{"weight_grams": 500}"#).unwrap();
        assert_eq!(line.qty, None);
    }

    #[test]
    fn test_rate_card_accessors() {
        let rates = RateCard::new(200, 500, 1000);
        assert_eq!(rates.kg_rate().cents(), 200);
        assert_eq!(rates.fragile_fee().cents(), 500);
        assert_eq!(rates.sunday_rate().cents(), 1000);
    }

    #[test]
    fn test_kilograms_helper() {
        assert_eq!(kilograms(1), 1000);
        assert_eq!(kilograms(50), 50_000);
    }
}
