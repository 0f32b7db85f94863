//! Transient builders
//!
//! Input that is being typed but not yet committed to one of the draft's collections. Each
//! builder validates and normalizes its input on [`DraftBuilder::commit`] and resets itself
//! only when the commit succeeds.

use rust_decimal::Decimal;

use crate::{
    coerce,
    draft::DraftError,
    products::{Color, Flavor, Variant},
    sequences::remove_at,
};

/// Default swatch offered for a new variant color.
pub const DEFAULT_SWATCH: &str = "#000000";

/// In-progress input for one entry of a draft collection.
pub trait DraftBuilder {
    /// Value appended to the owning collection.
    type Committed;

    /// Validate and normalize the input into a committed value.
    ///
    /// On success the builder is reset to its default shape. On failure it is left untouched.
    ///
    /// # Errors
    ///
    /// Returns the first required-field check that fails.
    fn commit(&mut self) -> Result<Self::Committed, DraftError>;
}

/// Raw input for a new variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantBuilder {
    /// Color name; the color is dropped when blank.
    pub color_name: String,

    /// Color swatch
    pub swatch: String,

    /// Weight label; dropped when blank.
    pub weight: String,

    /// Raw price text
    pub price: String,

    /// Raw stock text
    pub stock: String,
}

impl Default for VariantBuilder {
    fn default() -> Self {
        Self {
            color_name: String::new(),
            swatch: DEFAULT_SWATCH.to_string(),
            weight: String::new(),
            price: String::new(),
            stock: String::new(),
        }
    }
}

impl DraftBuilder for VariantBuilder {
    type Committed = Variant;

    fn commit(&mut self) -> Result<Variant, DraftError> {
        let price = coerce::decimal(&self.price);

        if price <= Decimal::ZERO {
            return Err(DraftError::VariantPriceRequired);
        }

        let color = (!self.color_name.is_empty()).then(|| Color {
            name: self.color_name.clone(),
            swatch: self.swatch.clone(),
        });

        let weight = (!self.weight.is_empty()).then(|| self.weight.clone());

        let variant = Variant {
            color,
            weight,
            price,
            stock: coerce::count(&self.stock),
        };

        *self = Self::default();

        Ok(variant)
    }
}

/// Raw input for a single ingredient tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientBuilder {
    /// Raw text
    pub text: String,
}

impl DraftBuilder for IngredientBuilder {
    type Committed = String;

    fn commit(&mut self) -> Result<String, DraftError> {
        let trimmed = self.text.trim();

        if trimmed.is_empty() {
            return Err(DraftError::IngredientRequired);
        }

        let ingredient = trimmed.to_string();
        self.text.clear();

        Ok(ingredient)
    }
}

/// Raw input for a new flavor, including its own ingredient list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlavorBuilder {
    /// Flavor name
    pub name: String,

    /// Raw price text
    pub price: String,

    /// Raw stock text
    pub stock: String,

    /// Ingredient being typed for this flavor
    pub ingredient: IngredientBuilder,

    ingredients: Vec<String>,
}

impl FlavorBuilder {
    /// Ingredients collected so far for this flavor.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Commit the pending ingredient text to this flavor's list.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::IngredientRequired`] when the text is blank.
    pub fn add_ingredient(&mut self) -> Result<(), DraftError> {
        let ingredient = self.ingredient.commit()?;
        self.ingredients.push(ingredient);

        Ok(())
    }

    /// Remove an ingredient from this flavor's list; stale indices are ignored.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.ingredients, index)
    }
}

impl DraftBuilder for FlavorBuilder {
    type Committed = Flavor;

    fn commit(&mut self) -> Result<Flavor, DraftError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(DraftError::FlavorNameRequired);
        }

        let price = coerce::decimal(&self.price);

        if price <= Decimal::ZERO {
            return Err(DraftError::FlavorPriceRequired);
        }

        let flavor = Flavor {
            name: name.to_string(),
            price,
            stock: coerce::count(&self.stock),
            ingredients: std::mem::take(&mut self.ingredients),
        };

        *self = Self::default();

        Ok(flavor)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn variant_requires_positive_price() {
        for price in ["", "0", "-3", "abc"] {
            let mut builder = VariantBuilder {
                price: price.to_string(),
                ..VariantBuilder::default()
            };

            assert_eq!(
                builder.commit(),
                Err(DraftError::VariantPriceRequired),
                "price {price:?} should be rejected"
            );
            assert_eq!(builder.price, price, "failed commit must not reset");
        }
    }

    #[test]
    fn variant_drops_blank_color_and_weight() -> TestResult {
        let mut builder = VariantBuilder {
            swatch: "#ffffff".to_string(),
            price: "1500".to_string(),
            ..VariantBuilder::default()
        };

        let variant = builder.commit()?;

        assert_eq!(variant.color, None);
        assert_eq!(variant.weight, None);
        assert_eq!(variant.price, dec!(1500));
        assert_eq!(variant.stock, 0);
        assert_eq!(builder, VariantBuilder::default());

        Ok(())
    }

    #[test]
    fn variant_keeps_named_color() -> TestResult {
        let mut builder = VariantBuilder {
            color_name: "Red".to_string(),
            swatch: "#ff0000".to_string(),
            weight: "250g".to_string(),
            price: "12.5".to_string(),
            stock: "4".to_string(),
        };

        let variant = builder.commit()?;

        assert_eq!(
            variant.color,
            Some(Color {
                name: "Red".to_string(),
                swatch: "#ff0000".to_string(),
            })
        );
        assert_eq!(variant.weight.as_deref(), Some("250g"));
        assert_eq!(variant.stock, 4);

        Ok(())
    }

    #[test]
    fn ingredient_is_trimmed_and_reset() -> TestResult {
        let mut builder = IngredientBuilder {
            text: "  sugar ".to_string(),
        };

        assert_eq!(builder.commit()?, "sugar");
        assert!(builder.text.is_empty());

        Ok(())
    }

    #[test]
    fn blank_ingredient_is_rejected() {
        let mut builder = IngredientBuilder {
            text: "   ".to_string(),
        };

        assert_eq!(builder.commit(), Err(DraftError::IngredientRequired));
        assert_eq!(builder.text, "   ");
    }

    #[test]
    fn flavor_name_is_checked_before_price() {
        let mut builder = FlavorBuilder::default();

        assert_eq!(builder.commit(), Err(DraftError::FlavorNameRequired));

        builder.name = "Mint".to_string();

        assert_eq!(builder.commit(), Err(DraftError::FlavorPriceRequired));
    }

    #[test]
    fn flavor_commit_takes_nested_ingredients() -> TestResult {
        let mut builder = FlavorBuilder {
            name: "Mint".to_string(),
            price: "9000".to_string(),
            stock: "3".to_string(),
            ..FlavorBuilder::default()
        };

        builder.ingredient.text = "mint".to_string();
        builder.add_ingredient()?;
        builder.ingredient.text = "sugar".to_string();
        builder.add_ingredient()?;
        builder.remove_ingredient(5);

        let flavor = builder.commit()?;

        assert_eq!(flavor.ingredients, vec!["mint", "sugar"]);
        assert_eq!(flavor.price, dec!(9000));
        assert_eq!(flavor.stock, 3);
        assert_eq!(builder, FlavorBuilder::default());

        Ok(())
    }
}
