//! Permissive numeric coercion for form input.
//!
//! Blank input and text that does not parse as a number both coerce to zero. Nothing here ever
//! fails.

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Upper bound for percentage fields.
pub const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Coerce raw input into a decimal. Blank or unparsable input is zero.
pub fn decimal(raw: &str) -> Decimal {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Coerce raw input into a non-negative count.
///
/// Fractions are truncated; negative, blank, unparsable or out-of-range input is zero.
pub fn count(raw: &str) -> u32 {
    decimal(raw).trunc().to_u32().unwrap_or(0)
}

/// Coerce raw input into a percentage clamped to `[0, 100]`.
pub fn percentage(raw: &str) -> Decimal {
    decimal(raw).clamp(Decimal::ZERO, MAX_PERCENTAGE)
}
