//! # shiprate-core: Pure Shipping-Cost Pricing for ShipRate
//!
//! This crate is the **heart** of ShipRate. It contains the whole pricing
//! engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ShipRate Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 External Callers (not this repo)                │   │
//! │  │    Checkout API ── Invoice Renderer ── Ops Tooling ── UI        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ LineItem[] + RateCard                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ shiprate-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  engine   │  │   │
//! │  │   │ LineItem  │  │   Money   │  │   rules   │  │  quote()  │  │   │
//! │  │   │ RateCard  │  │ millicent │  │  checks   │  │ compute_  │  │   │
//! │  │   │  Quote    │  │  rounding │  │           │  │ shipping_ │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  │  cost()   │  │   │
//! │  │                                                 └───────────┘  │   │
//! │  │   NO I/O • NO CLOCK • NO STATE • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Money total (or ValidationError)       │
//! │                                ▼                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, RateCard, Quote)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Typed validation errors
//! - [`validation`] - Whole-order input validation
//! - [`engine`] - The Cost Engine: `compute_shipping_cost` / `quote`
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same order + rate card = same charge, always
//! 2. **No I/O, No Clock**: Dates arrive as data; the engine never asks
//!    what time it is, so tests need no fake clock
//! 3. **Integer Money**: Cents (i64) everywhere; weight charges carried
//!    exactly in millicents and rounded once at the end
//! 4. **Explicit Errors**: Typed variants with the offending line index,
//!    never strings, never panics
//! 5. **Per-Call Rates**: The rate card is a parameter, never a
//!    process-wide singleton, so concurrent orders with different rate
//!    cards cannot interfere
//!
//! ## Example Usage
//!
//! ```rust
//! use shiprate_core::{compute_shipping_cost, LineItem, RateCard};
//!
//! let order = vec![LineItem {
//!     qty: Some(3),
//!     weight_grams: Some(1000), // 1 kg per unit
//!     ..Default::default()
//! }];
//! let rates = RateCard::new(200, 500, 1000); // $2/kg, $5 fragile, $10 Sunday
//!
//! let total = compute_shipping_cost(&order, &rates).unwrap();
//! assert_eq!(total.cents(), 600); // $6.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shiprate_core::Money` instead of
// `use shiprate_core::money::Money`

pub use engine::{compute_shipping_cost, quote};
pub use error::{QuoteResult, ValidationError};
pub use money::Money;
pub use types::{LineItem, Quote, RateCard};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Grams per kilogram: weights are carried in grams (the smallest weight
/// unit) so that a gram priced in cents-per-kilogram is an exact
/// millicent and no intermediate ever loses precision.
pub const GRAMS_PER_KG: i64 = 1_000;

/// Millicents per cent, the engine's internal accumulation unit.
///
/// ## Why Millicents?
/// `grams × cents-per-kg` lands naturally at 1/1000 of a cent. Summing in
/// that unit keeps the whole order exact; the one rounding step happens
/// when the finished sum becomes a [`Money`].
pub const MILLICENTS_PER_CENT: i64 = 1_000;
