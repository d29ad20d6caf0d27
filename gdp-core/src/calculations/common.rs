//! Common helpers shared by the calculations and their presentation.
//!
//! Display values are rounded through [`Decimal`] so that amounts such as
//! `2.675` round the way a reader expects (`2.68`) instead of following the
//! binary representation of the float.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use gdp_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(20.454)), dec!(20.45));
/// assert_eq!(round_half_up(dec!(20.455)), dec!(20.46));
/// assert_eq!(round_half_up(dec!(-20.455)), dec!(-20.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a float to a two-place [`Decimal`].
///
/// Returns `None` for NaN, infinities and magnitudes outside the range
/// `Decimal` can represent.
pub fn to_amount(value: f64) -> Option<Decimal> {
    // The shortest round-trip representation, so 2.675 stays 2.675.
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .map(round_half_up)
}

/// Formats a value with two decimals, e.g. `"20.00"`.
///
/// Values that cannot be represented as an amount fall back to the float's
/// own formatting (`NaN`, `inf`, ...).
pub fn format_amount(value: f64) -> String {
    match to_amount(value) {
        Some(amount) => format!("{amount:.2}"),
        None => value.to_string(),
    }
}
