//! Fixed-point rounding helpers
//!
//! Every rounding step in billing is half-up: midpoints move away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round half-up to exactly `scale` fractional digits.
///
/// Values with fewer digits are padded, so the result's scale is always
/// `scale`.
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// Divide and round half-up to `scale` fractional digits.
///
/// Returns `None` when `divisor` is zero.
pub fn div_half_up(dividend: Decimal, divisor: Decimal, scale: u32) -> Option<Decimal> {
    dividend
        .checked_div(divisor)
        .map(|quotient| round_half_up(quotient, scale))
}

/// Sum a sequence of decimals, starting from zero.
///
/// Returns `None` when the total overflows `Decimal`.
pub fn checked_sum<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}
