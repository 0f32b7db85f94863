//! Product drafts
//!
//! A draft is the in-progress, not yet persisted representation of a product being authored.

use jiff::{Timestamp, tz::TimeZone};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    products::{Flavor, ProductRecord, Variant, calendar_date},
    wire::decimal_number,
};

pub mod builders;
pub mod errors;
pub mod store;

pub use builders::{DraftBuilder, FlavorBuilder, IngredientBuilder, VariantBuilder};
pub use errors::DraftError;
pub use store::DraftStore;

/// Description given to products that have none.
pub const DEFAULT_DESCRIPTION: &str = "N/A";

/// Rating given to products that have none.
pub const DEFAULT_RATING: f64 = 5.0;

/// Free-text fields that are assigned directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Title
    Title,

    /// Description
    Description,

    /// Category code
    CategoryCode,

    /// Brand
    Brand,

    /// Product code
    ExternalId,

    /// Expiry date text, `YYYY-MM-DD` or empty
    Expiry,
}

/// Numeric fields that take raw text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// Sale percentage
    SaleRate,

    /// Rating
    Rating,
}

/// The product being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// Category code
    pub category_code: String,

    /// Brand
    pub brand: String,

    /// Product code, empty until assigned
    pub external_id: String,

    /// Sale percentage in `[0, 100]`
    pub sale_rate: Decimal,

    /// Units sold
    pub sold_count: u32,

    /// Rating
    pub rating: f64,

    /// Expiry as date-only text; empty when absent
    pub expiry: String,

    /// Photo URLs
    pub photos: Vec<String>,

    /// Ingredient tags
    pub ingredients: Vec<String>,

    /// Variants
    pub variants: Vec<Variant>,

    /// Flavors
    pub flavors: Vec<Flavor>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
            category_code: String::new(),
            brand: String::new(),
            external_id: String::new(),
            sale_rate: Decimal::ZERO,
            sold_count: 0,
            rating: DEFAULT_RATING,
            expiry: String::new(),
            photos: Vec::new(),
            ingredients: Vec::new(),
            variants: Vec::new(),
            flavors: Vec::new(),
        }
    }
}

impl From<&ProductRecord> for ProductDraft {
    fn from(record: &ProductRecord) -> Self {
        let description = if record.description.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            record.description.clone()
        };

        // NaN fails the comparison too
        let rating = if record.rating.abs() > 0.0 {
            record.rating
        } else {
            DEFAULT_RATING
        };

        Self {
            title: record.title.clone(),
            description,
            category_code: record.category_code.clone(),
            brand: record.brand.clone(),
            external_id: record.external_id.clone(),
            sale_rate: record.sale_rate,
            sold_count: record.sold_count,
            rating,
            expiry: record
                .expiry_date()
                .map(|date| date.to_string())
                .unwrap_or_default(),
            photos: record.photos.clone(),
            ingredients: record.ingredients.clone(),
            variants: record.variants.clone(),
            flavors: record.flavors.clone(),
        }
    }
}

/// Submission-normalized draft, as sent to the backend on create or update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// Product code, always populated
    #[serde(rename = "ID")]
    pub external_id: String,

    /// Category code
    #[serde(rename = "category")]
    pub category_code: String,

    /// Brand
    pub brand: String,

    /// Variants
    pub variants: Vec<Variant>,

    /// Sale percentage
    #[serde(rename = "sale", with = "decimal_number")]
    pub sale_rate: Decimal,

    /// Units sold
    #[serde(rename = "selled_count")]
    pub sold_count: u32,

    /// Photo URLs
    pub photos: Vec<String>,

    /// Ingredient tags
    pub ingredients: Vec<String>,

    /// Flavors
    pub flavors: Vec<Flavor>,

    /// Expiry at midnight UTC, or explicitly `null`
    #[serde(rename = "expiryDate")]
    pub expiry: Option<Timestamp>,

    /// Rating
    pub rating: f64,
}

/// Convert date-only expiry text into midnight UTC. Blank or unreadable text is absent.
pub(crate) fn expiry_timestamp(raw: &str) -> Option<Timestamp> {
    calendar_date(raw)
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use serde_json::json;
    use testresult::TestResult;

    use crate::products::ProductId;

    use super::*;

    #[test]
    fn new_draft_defaults() {
        let draft = ProductDraft::default();

        assert_eq!(draft.description, "N/A");
        assert!((draft.rating - 5.0).abs() < f64::EPSILON);
        assert_eq!(draft.sale_rate, Decimal::ZERO);
        assert!(draft.expiry.is_empty());
    }

    #[test]
    fn hydration_truncates_expiry_to_date() {
        let record = ProductRecord {
            id: ProductId::new("1"),
            expiry: Some("2024-05-01T00:00:00Z".to_string()),
            ..ProductRecord::default()
        };

        let draft = ProductDraft::from(&record);

        assert_eq!(draft.expiry, "2024-05-01");
    }

    #[test]
    fn hydration_applies_fallbacks() {
        let record = ProductRecord {
            id: ProductId::new("1"),
            title: "Halva".to_string(),
            sale_rate: dec!(5),
            ..ProductRecord::default()
        };

        let draft = ProductDraft::from(&record);

        assert_eq!(draft.title, "Halva");
        assert_eq!(draft.description, "N/A");
        assert!((draft.rating - 5.0).abs() < f64::EPSILON);
        assert_eq!(draft.sale_rate, dec!(5));
        assert!(draft.expiry.is_empty());
    }

    #[test]
    fn hydration_keeps_existing_rating() {
        let record = ProductRecord {
            rating: 3.5,
            ..ProductRecord::default()
        };

        let draft = ProductDraft::from(&record);

        assert!((draft.rating - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn expiry_timestamp_is_midnight_utc() -> TestResult {
        let expected: Timestamp = "2024-05-01T00:00:00Z".parse()?;

        assert_eq!(expiry_timestamp("2024-05-01"), Some(expected));
        assert_eq!(expiry_timestamp(""), None);
        assert_eq!(expiry_timestamp("soon"), None);

        Ok(())
    }

    #[test]
    fn payload_uses_wire_names() -> TestResult {
        let payload = ProductPayload {
            title: "Halva".to_string(),
            description: "N/A".to_string(),
            external_id: "PRD-1-ABCDEFGH".to_string(),
            category_code: "sweets".to_string(),
            brand: String::new(),
            variants: Vec::new(),
            sale_rate: dec!(10),
            sold_count: 0,
            photos: vec!["https://img.example/a.png".to_string()],
            ingredients: Vec::new(),
            flavors: Vec::new(),
            expiry: None,
            rating: 5.0,
        };

        let value = serde_json::to_value(&payload)?;

        assert_eq!(value.get("ID"), Some(&json!("PRD-1-ABCDEFGH")));
        assert_eq!(value.get("category"), Some(&json!("sweets")));
        assert_eq!(value.get("sale"), Some(&json!(10.0)));
        assert_eq!(value.get("selled_count"), Some(&json!(0)));
        assert_eq!(value.get("expiryDate"), Some(&serde_json::Value::Null));

        Ok(())
    }
}
