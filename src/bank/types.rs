//! Types used throughout the banking system.

/// Decimal precision for monetary values.
/// One unit of [`Money`] is one thousandth of a dollar, matching the three
/// decimal digits used in every printed amount.
pub const DECIMAL_PRECISION: Money = 1000;

/// Money type, representing a fixed-point monetary value.
pub type Money = i64;

/// Formats a monetary value with exactly three decimal digits and a `.` separator.
pub fn format_money(amount: Money) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let units = (amount / DECIMAL_PRECISION).abs();
    let thousandths = (amount % DECIMAL_PRECISION).abs();
    format!("{sign}{units}.{thousandths:03}")
}
