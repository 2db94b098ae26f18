//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a shipping quote summed over a million lines, those ulps            │
//! │  accumulate into visible cents — and two runs over the same order       │
//! │  can disagree depending on summation order.                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every charge is an i64 number of cents. The only fractional          │
//! │    quantity in the system (grams × cents-per-kg) is carried exactly     │
//! │    in millicents and rounded ONCE, at the very end.                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shiprate_core::money::Money;
//!
//! // Create from cents (preferred)
//! let charge = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = charge * 2;                    // $21.98
//! let total = charge + Money::from_cents(500); // $15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::MILLICENTS_PER_CENT;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediates (adjustments, credits)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  RateCard.kg_rate ──► weight charge (millicents) ─┐                     │
/// │  RateCard.fragile_fee ──► per-line fragile fee ───┼──► Quote.total      │
/// │  RateCard.sunday_rate ──► per-order surcharge ────┘                     │
/// │                                                                         │
/// │  EVERY monetary value in the engine flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shiprate_core::money::Money;
    ///
    /// let charge = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(charge.cents(), 1099);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Rate cards, accumulation, and the final quote all use cents.
    /// Only a UI converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use shiprate_core::money::Money;
    ///
    /// let rate = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(rate.cents(), 1099);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Rounds an exact millicent amount to the nearest cent, ties away
    /// from zero.
    ///
    /// This is the single rounding point in the engine. Weight charges are
    /// accumulated exactly in millicents (1 g × 1 ¢/kg = 1/1000 ¢); fixed
    /// fees are whole cents and contribute exact multiples of 1000. One
    /// call here at the end of the quote keeps the result at exactly two
    /// decimal places without any intermediate loss.
    ///
    /// ## Implementation
    /// Integer math: `(millicents + 500) / 1000` for non-negative input.
    /// The +500 provides the half-up behaviour (500/1000 = 0.5 ¢).
    ///
    /// ## Example
    /// ```rust
    /// use shiprate_core::money::Money;
    ///
    /// // 66.6 cents rounds up to 67 cents
    /// assert_eq!(Money::from_millicents(66_600).cents(), 67);
    /// // 66.4 cents rounds down to 66 cents
    /// assert_eq!(Money::from_millicents(66_400).cents(), 66);
    /// ```
    pub fn from_millicents(millicents: i128) -> Money {
        // i128 input: a million-line order multiplies qty × grams × rate
        // before ever dividing, which can exceed i64.
        let half = (MILLICENTS_PER_CENT / 2) as i128;
        let cents = if millicents >= 0 {
            (millicents + half) / MILLICENTS_PER_CENT as i128
        } else {
            (millicents - half) / MILLICENTS_PER_CENT as i128
        };
        Money(cents as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in millicents, for exact accumulation.
    #[inline]
    pub const fn millicents(&self) -> i128 {
        self.0 as i128 * MILLICENTS_PER_CENT as i128
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use shiprate_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.cents(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Currency formatting and localization are
/// explicitly out of scope for the engine; callers own display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for per-line fee counts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_millicent_rounding_half_up() {
        // 66.6 ¢ → 67 ¢ (the 333 g × $2/kg case)
        assert_eq!(Money::from_millicents(66_600).cents(), 67);
        // 66.5 ¢ → 67 ¢ (ties away from zero)
        assert_eq!(Money::from_millicents(66_500).cents(), 67);
        // 66.4 ¢ → 66 ¢
        assert_eq!(Money::from_millicents(66_400).cents(), 66);
        // Exact cents pass through untouched
        assert_eq!(Money::from_millicents(600_000).cents(), 600);
        assert_eq!(Money::from_millicents(0).cents(), 0);
    }

    #[test]
    fn test_millicent_rounding_negative() {
        // Symmetric: -66.6 ¢ → -67 ¢
        assert_eq!(Money::from_millicents(-66_600).cents(), -67);
        assert_eq!(Money::from_millicents(-66_400).cents(), -66);
    }

    #[test]
    fn test_millicents_round_trip() {
        let money = Money::from_cents(1099);
        assert_eq!(money.millicents(), 1_099_000);
        assert_eq!(Money::from_millicents(money.millicents()), money);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }
}
