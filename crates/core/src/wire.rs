//! Serde helpers for the products wire format.

use serde::{Deserialize, Deserializer};

/// Deserialize a value that may be absent or `null`, falling back to its default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decimals travel as JSON numbers. Reads accept numbers, numeric strings and `null` (zero).
pub(crate) mod decimal_number {
    use rust_decimal::Decimal;
    use serde::{Deserializer, Serializer};

    pub(crate) fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        rust_decimal::serde::float::serialize(value, serializer)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::nullable(deserializer)
    }
}

/// Counts may arrive as integers, fractional numbers, numeric strings or `null`.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use rust_decimal::{Decimal, prelude::ToPrimitive};

    let value: Decimal = nullable(deserializer)?;

    Ok(value.trunc().to_u32().unwrap_or(0))
}
