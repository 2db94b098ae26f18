//! # Cost Engine
//!
//! The pricing function that turns an order's line items into a single
//! shipping charge.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cost Engine                                     │
//! │                                                                         │
//! │  items + rate card                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_order()  ── any bad line ──► ValidationError (whole order)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  single pass over lines (skip qty = 0):                                 │
//! │    • weight:   qty × grams × kg_rate   (exact millicents)               │
//! │    • fragile:  + fragile_fee per fragile line                           │
//! │    • sunday:   remember if any chargeable line is Sunday-dated          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  + sunday_rate once, if the order is chargeable AND Sunday-dated        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  round millicents → Money (the only rounding step)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! No I/O, no clock reads, no state between calls. The same order and
//! rate card always price to the same charge, which also makes the engine
//! trivially safe to call concurrently over distinct inputs.

use crate::error::QuoteResult;
use crate::money::Money;
use crate::types::{LineItem, Quote, RateCard};
use crate::validation::validate_order;

// =============================================================================
// Public Entry Points
// =============================================================================

/// Computes the total shipping cost of an order.
///
/// This is the engine's whole surface: an ordered sequence of line items
/// and a rate card in, one rounded Money total (or a typed validation
/// error) out. The total is always ≥ 0 for non-negative rates and is a
/// whole number of cents, i.e. exactly two decimal places.
///
/// ## Example
/// ```rust
/// use shiprate_core::engine::compute_shipping_cost;
/// use shiprate_core::types::{LineItem, RateCard};
///
/// // 3 units of 1 kg at $2/kg = $6.00
/// let order = vec![LineItem {
///     qty: Some(3),
///     weight_grams: Some(1000),
///     ..Default::default()
/// }];
/// let rates = RateCard::new(200, 0, 0);
///
/// let total = compute_shipping_cost(&order, &rates).unwrap();
/// assert_eq!(total.cents(), 600);
/// ```
pub fn compute_shipping_cost(items: &[LineItem], rates: &RateCard) -> QuoteResult<Money> {
    Ok(quote(items, rates)?.total)
}

/// Prices an order and returns the full component breakdown.
///
/// Same contract as [`compute_shipping_cost`], but the result also carries
/// the weight/fragile/surcharge components and per-order counters, the way
/// an invoice renderer wants them. Components always sum to the total.
///
/// ## Rules Applied
/// 1. Every line is validated before a single cent is accumulated; one
///    invalid line voids the whole order.
/// 2. `qty = 0` lines are skipped entirely: no weight charge, no fragile
///    fee, and they never make the order "chargeable".
/// 3. Each chargeable line adds `qty × weight × kg_rate`; an absent
///    weight counts as zero.
/// 4. Each fragile chargeable line adds the full fragile fee once,
///    regardless of quantity.
/// 5. The Sunday surcharge is added exactly once if at least one
///    chargeable line exists and at least one of them is Sunday-dated.
/// 6. The exact millicent sum is rounded half-up to whole cents, once.
pub fn quote(items: &[LineItem], rates: &RateCard) -> QuoteResult<Quote> {
    validate_order(items)?;

    // Weight charges accumulate exactly: grams × cents-per-kg = millicents.
    // i128 because qty × grams × rate of a hostile-but-valid order can
    // overflow 64 bits long before the rounded total does.
    let mut weight_millicents: i128 = 0;
    let mut chargeable_lines = 0usize;
    let mut fragile_lines = 0usize;
    let mut sunday_dated = false;

    for item in items {
        if !item.is_chargeable() {
            // qty = 0 placeholder: contributes nothing, gates nothing
            continue;
        }

        // Validated above: qty is Some and non-negative here
        let qty = item.qty.unwrap_or(0);
        let grams = item.weight_grams_or_zero();

        weight_millicents += qty as i128 * grams as i128 * rates.kg_rate_cents as i128;
        chargeable_lines += 1;

        if item.fragile {
            fragile_lines += 1;
        }

        if item.is_sunday_dated() {
            sunday_dated = true;
        }
    }

    let fragile = rates.fragile_fee() * fragile_lines as i64;

    let sunday_surcharge = chargeable_lines > 0 && sunday_dated;
    let surcharge = if sunday_surcharge {
        rates.sunday_rate()
    } else {
        Money::zero()
    };

    // Fixed fees are whole cents; only the weight component can carry a
    // fraction, so rounding it rounds the total.
    let weight = Money::from_millicents(weight_millicents);
    let total = weight + fragile + surcharge;

    Ok(Quote {
        weight,
        fragile,
        surcharge,
        total,
        chargeable_lines,
        fragile_lines,
        sunday_surcharge,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
