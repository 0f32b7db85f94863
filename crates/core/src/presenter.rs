//! Detail presenter
//!
//! Display values derived from a persisted product. Nothing here mutates or fails.

use std::cmp::Ordering;

use jiff::civil::Date;
use rust_decimal::Decimal;
use rusty_money::{Money, iso, iso::Currency};

use crate::products::{Color, ProductRecord};

/// Rendered when no variant has a positive price.
pub const NO_PRICE: &str = "no price available";

/// Rendered for blank text fields.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Formats a single price for display.
pub trait PriceFormatter {
    /// Render `price`.
    fn format_price(&self, price: Decimal) -> String;
}

impl<F> PriceFormatter for F
where
    F: Fn(Decimal) -> String,
{
    fn format_price(&self, price: Decimal) -> String {
        self(price)
    }
}

/// Formats prices as money in a fixed currency, with the currency's separators.
#[derive(Debug, Clone, Copy)]
pub struct MoneyFormatter {
    currency: &'static Currency,
}

impl MoneyFormatter {
    /// Formatter for `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self { currency }
    }

    /// Formatter for an ISO 4217 code such as `UZS`, if the code is known.
    pub fn from_code(code: &str) -> Option<Self> {
        iso::find(code).map(Self::new)
    }

    /// Configured currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl PriceFormatter for MoneyFormatter {
    fn format_price(&self, price: Decimal) -> String {
        Money::from_decimal(price, self.currency).to_string()
    }
}

/// Spread of variant prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    /// No variant has a positive price.
    Unavailable,

    /// Every priced variant costs the same.
    Single(Decimal),

    /// Cheapest and dearest variant.
    Range {
        /// Lowest positive price
        min: Decimal,

        /// Highest price
        max: Decimal,
    },
}

impl PriceRange {
    /// Render with `formatter`, as `min - max` for a range.
    pub fn render<F: PriceFormatter + ?Sized>(&self, formatter: &F) -> String {
        match self {
            Self::Unavailable => NO_PRICE.to_string(),
            Self::Single(price) => formatter.format_price(*price),
            Self::Range { min, max } => format!(
                "{} - {}",
                formatter.format_price(*min),
                formatter.format_price(*max)
            ),
        }
    }
}

/// Sum of variant stock; absent stock counts as zero.
pub fn total_stock(product: &ProductRecord) -> u64 {
    product
        .variants
        .iter()
        .map(|variant| u64::from(variant.stock))
        .sum()
}

/// Lowest and highest strictly positive variant price.
pub fn price_range(product: &ProductRecord) -> PriceRange {
    let mut prices = product
        .variants
        .iter()
        .map(|variant| variant.price)
        .filter(|price| *price > Decimal::ZERO);

    let Some(first) = prices.next() else {
        return PriceRange::Unavailable;
    };

    let (min, max) = prices.fold((first, first), |(min, max), price| {
        (min.min(price), max.max(price))
    });

    match min.cmp(&max) {
        Ordering::Equal => PriceRange::Single(min),
        Ordering::Less | Ordering::Greater => PriceRange::Range { min, max },
    }
}

/// One variant as shown in the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantLine {
    /// Color, when named
    pub color: Option<Color>,

    /// Weight label
    pub weight: Option<String>,

    /// Formatted price
    pub price: String,

    /// Units in stock
    pub stock: u32,
}

/// One flavor as shown in the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavorLine {
    /// Name
    pub name: String,

    /// Formatted price
    pub price: String,

    /// Units in stock
    pub stock: u32,

    /// Ingredient tags
    pub ingredients: Vec<String>,
}

/// Everything the product details view displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    /// Title or placeholder
    pub title: String,

    /// Rating, when positive
    pub rating: Option<f64>,

    /// Description
    pub description: String,

    /// Product code or placeholder
    pub external_id: String,

    /// Category or placeholder
    pub category: String,

    /// Brand or placeholder
    pub brand: String,

    /// Rendered price range
    pub price: String,

    /// Sale percentage, when positive
    pub sale_rate: Option<Decimal>,

    /// Stock across variants
    pub total_stock: u64,

    /// Units sold
    pub sold_count: u32,

    /// Expiry day
    pub expiry: Option<Date>,

    /// First photo
    pub cover_photo: Option<String>,

    /// Photos beyond the cover
    pub extra_photos: usize,

    /// Variants
    pub variants: Vec<VariantLine>,

    /// Flavors
    pub flavors: Vec<FlavorLine>,

    /// Ingredient tags
    pub ingredients: Vec<String>,

    /// Creation day
    pub created_on: Option<Date>,
}

impl ProductDetails {
    /// Derive the details view for `product`.
    pub fn from_record<F>(product: &ProductRecord, formatter: &F) -> Self
    where
        F: PriceFormatter + ?Sized,
    {
        let or_placeholder = |value: &str| {
            if value.is_empty() {
                NOT_SPECIFIED.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            title: or_placeholder(&product.title),
            rating: (product.rating > 0.0).then_some(product.rating),
            description: product.description.clone(),
            external_id: or_placeholder(&product.external_id),
            category: or_placeholder(&product.category_code),
            brand: or_placeholder(&product.brand),
            price: price_range(product).render(formatter),
            sale_rate: (product.sale_rate > Decimal::ZERO).then_some(product.sale_rate),
            total_stock: total_stock(product),
            sold_count: product.sold_count,
            expiry: product.expiry_date(),
            cover_photo: product.photos.first().cloned(),
            extra_photos: product.photos.len().saturating_sub(1),
            variants: product
                .variants
                .iter()
                .map(|variant| VariantLine {
                    color: variant
                        .color
                        .clone()
                        .filter(|color| !color.name.is_empty()),
                    weight: variant.weight.clone().filter(|weight| !weight.is_empty()),
                    price: formatter.format_price(variant.price),
                    stock: variant.stock,
                })
                .collect(),
            flavors: product
                .flavors
                .iter()
                .map(|flavor| FlavorLine {
                    name: flavor.name.clone(),
                    price: formatter.format_price(flavor.price),
                    stock: flavor.stock,
                    ingredients: flavor.ingredients.clone(),
                })
                .collect(),
            ingredients: product.ingredients.clone(),
            created_on: product.created_on(),
        }
    }
}
