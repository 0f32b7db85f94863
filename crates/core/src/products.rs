//! Products
//!
//! Wire model for products as the catalog backend stores and returns them.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wire::{decimal_number, lenient_count, nullable};

/// Backend identity of a persisted product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a backend identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Named color with its swatch value (e.g. `#aa0000`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Display name
    pub name: String,

    /// Swatch value
    #[serde(rename = "value", default, deserialize_with = "nullable")]
    pub swatch: String,
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Optional color
    #[serde(default)]
    pub color: Option<Color>,

    /// Optional weight label, e.g. `500g`
    #[serde(default)]
    pub weight: Option<String>,

    /// Unit price
    #[serde(default, with = "decimal_number")]
    pub price: Decimal,

    /// Units in stock
    #[serde(default, deserialize_with = "lenient_count")]
    pub stock: u32,
}

/// An alternate product configuration with its own ingredients.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flavor {
    /// Flavor name
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Unit price
    #[serde(default, with = "decimal_number")]
    pub price: Decimal,

    /// Units in stock
    #[serde(default, deserialize_with = "lenient_count")]
    pub stock: u32,

    /// Ingredient tags
    #[serde(default, deserialize_with = "nullable")]
    pub ingredients: Vec<String>,
}

/// A product as persisted by the backend.
///
/// Every field other than the identity is optional on the wire; absent or `null` values read as
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Backend identity
    #[serde(rename = "_id", default)]
    pub id: ProductId,

    /// Human-facing product code
    #[serde(rename = "ID", default, deserialize_with = "nullable")]
    pub external_id: String,

    /// Title
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,

    /// Description
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,

    /// Category code
    #[serde(rename = "category", default, deserialize_with = "nullable")]
    pub category_code: String,

    /// Brand
    #[serde(default, deserialize_with = "nullable")]
    pub brand: String,

    /// Variants
    #[serde(default, deserialize_with = "nullable")]
    pub variants: Vec<Variant>,

    /// Sale percentage
    #[serde(rename = "sale", default, with = "decimal_number")]
    pub sale_rate: Decimal,

    /// Units sold
    #[serde(rename = "selled_count", default, deserialize_with = "lenient_count")]
    pub sold_count: u32,

    /// Photo URLs
    #[serde(default, deserialize_with = "nullable")]
    pub photos: Vec<String>,

    /// Ingredient tags
    #[serde(default, deserialize_with = "nullable")]
    pub ingredients: Vec<String>,

    /// Flavors
    #[serde(default, deserialize_with = "nullable")]
    pub flavors: Vec<Flavor>,

    /// Rating
    #[serde(default, deserialize_with = "nullable")]
    pub rating: f64,

    /// Raw expiry timestamp
    #[serde(rename = "expiryDate", default)]
    pub expiry: Option<String>,

    /// Raw creation timestamp
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Raw update timestamp
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ProductRecord {
    /// Expiry as a UTC calendar date, if present and readable.
    pub fn expiry_date(&self) -> Option<Date> {
        self.expiry.as_deref().and_then(calendar_date)
    }

    /// Creation day as a UTC calendar date, if present and readable.
    pub fn created_on(&self) -> Option<Date> {
        self.created_at.as_deref().and_then(calendar_date)
    }
}

/// Read a timestamp or a plain date as a UTC calendar date, dropping any time of day.
pub fn calendar_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(TimeZone::UTC).date());
    }

    raw.parse::<Date>().ok()
}
