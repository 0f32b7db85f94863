//! Draft store
//!
//! Owns the draft plus the transient builders feeding its collections, and knows how to validate
//! and normalize the draft for submission.

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    coerce,
    draft::{
        DraftError, NumericField, ProductDraft, ProductPayload, TextField,
        builders::{DraftBuilder, FlavorBuilder, IngredientBuilder, VariantBuilder},
        expiry_timestamp,
    },
    external_id,
    products::{Flavor, ProductRecord, Variant},
    sequences::remove_at,
};

/// Mutable state of one product being authored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftStore {
    draft: ProductDraft,
    external_id_locked: bool,
    variant: VariantBuilder,
    ingredient: IngredientBuilder,
    flavor: FlavorBuilder,
}

impl DraftStore {
    /// Empty store for authoring a new product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store hydrated from a persisted product for editing.
    ///
    /// A product code that is already assigned becomes read-only.
    pub fn hydrated(record: &ProductRecord) -> Self {
        Self {
            draft: ProductDraft::from(record),
            external_id_locked: !record.external_id.is_empty(),
            ..Self::default()
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Consume the store, keeping only the draft.
    pub fn into_draft(self) -> ProductDraft {
        self.draft
    }

    /// Discard the draft and all builder input.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Assign a free-text field.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::ExternalIdLocked`] when changing the product code of a hydrated
    /// product that already has one.
    pub fn set_field(
        &mut self,
        field: TextField,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        let value = value.into();

        match field {
            TextField::Title => self.draft.title = value,
            TextField::Description => self.draft.description = value,
            TextField::CategoryCode => self.draft.category_code = value,
            TextField::Brand => self.draft.brand = value,
            TextField::Expiry => self.draft.expiry = value,
            TextField::ExternalId => {
                if self.external_id_locked && value != self.draft.external_id {
                    return Err(DraftError::ExternalIdLocked);
                }

                self.draft.external_id = value;
            }
        }

        Ok(())
    }

    /// Assign a numeric field from raw input. Blank or unparsable input is zero.
    pub fn set_numeric_field(&mut self, field: NumericField, raw: &str) {
        match field {
            NumericField::SaleRate => self.draft.sale_rate = coerce::percentage(raw),
            NumericField::Rating => {
                self.draft.rating = coerce::decimal(raw).to_f64().unwrap_or(0.0);
            }
        }
    }

    /// Input for the next variant.
    pub fn variant_builder(&self) -> &VariantBuilder {
        &self.variant
    }

    /// Input for the next variant, mutably.
    pub fn variant_builder_mut(&mut self) -> &mut VariantBuilder {
        &mut self.variant
    }

    /// Input for the next ingredient.
    pub fn ingredient_builder(&self) -> &IngredientBuilder {
        &self.ingredient
    }

    /// Input for the next ingredient, mutably.
    pub fn ingredient_builder_mut(&mut self) -> &mut IngredientBuilder {
        &mut self.ingredient
    }

    /// Input for the next flavor.
    pub fn flavor_builder(&self) -> &FlavorBuilder {
        &self.flavor
    }

    /// Input for the next flavor, mutably.
    pub fn flavor_builder_mut(&mut self) -> &mut FlavorBuilder {
        &mut self.flavor
    }

    /// Commit the variant builder to the end of the variants.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::VariantPriceRequired`] without touching the variants when the price
    /// is blank, zero or unreadable.
    pub fn add_variant(&mut self) -> Result<(), DraftError> {
        let variant = self.variant.commit()?;
        self.draft.variants.push(variant);

        Ok(())
    }

    /// Remove the variant at `index`; stale indices are ignored.
    pub fn remove_variant(&mut self, index: usize) -> Option<Variant> {
        remove_at(&mut self.draft.variants, index)
    }

    /// Commit the ingredient builder to the end of the ingredients.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::IngredientRequired`] when the input is blank.
    pub fn add_ingredient(&mut self) -> Result<(), DraftError> {
        let ingredient = self.ingredient.commit()?;
        self.draft.ingredients.push(ingredient);

        Ok(())
    }

    /// Remove the ingredient at `index`; stale indices are ignored.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.draft.ingredients, index)
    }

    /// Commit the flavor builder to the end of the flavors.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::FlavorNameRequired`] or [`DraftError::FlavorPriceRequired`],
    /// whichever check fails first.
    pub fn add_flavor(&mut self) -> Result<(), DraftError> {
        let flavor = self.flavor.commit()?;
        self.draft.flavors.push(flavor);

        Ok(())
    }

    /// Remove the flavor at `index`; stale indices are ignored.
    pub fn remove_flavor(&mut self, index: usize) -> Option<Flavor> {
        remove_at(&mut self.draft.flavors, index)
    }

    /// Add the pending flavor ingredient to the flavor being built.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::IngredientRequired`] when the input is blank.
    pub fn add_flavor_ingredient(&mut self) -> Result<(), DraftError> {
        self.flavor.add_ingredient()
    }

    /// Remove an ingredient from the flavor being built; stale indices are ignored.
    pub fn remove_flavor_ingredient(&mut self, index: usize) -> Option<String> {
        self.flavor.remove_ingredient(index)
    }

    /// Append confirmed photo URLs in order.
    pub fn append_photos(&mut self, urls: impl IntoIterator<Item = String>) {
        self.draft.photos.extend(urls);
    }

    /// Remove the photo at `index`; stale indices are ignored.
    pub fn remove_photo(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.draft.photos, index)
    }

    /// Check the draft is submittable.
    ///
    /// # Errors
    ///
    /// Returns the first failing check of: title, category, variants, photos.
    pub fn validate_for_submit(&self) -> Result<(), DraftError> {
        if self.draft.title.trim().is_empty() {
            return Err(DraftError::TitleRequired);
        }

        if self.draft.category_code.trim().is_empty() {
            return Err(DraftError::CategoryRequired);
        }

        if self.draft.variants.is_empty() {
            return Err(DraftError::VariantsRequired);
        }

        if self.draft.photos.is_empty() {
            return Err(DraftError::PhotosRequired);
        }

        Ok(())
    }

    /// Normalize the draft into the payload sent to the backend.
    ///
    /// A missing product code is generated here and kept on the draft, so a retried submission
    /// reuses it.
    pub fn build_submission_payload(&mut self) -> ProductPayload {
        if self.draft.external_id.trim().is_empty() {
            self.draft.external_id = external_id::generate();
        }

        let draft = &self.draft;

        ProductPayload {
            title: draft.title.clone(),
            description: draft.description.clone(),
            external_id: draft.external_id.clone(),
            category_code: draft.category_code.clone(),
            brand: draft.brand.clone(),
            variants: draft.variants.clone(),
            sale_rate: draft.sale_rate.clamp(Decimal::ZERO, coerce::MAX_PERCENTAGE),
            sold_count: draft.sold_count,
            photos: draft.photos.clone(),
            ingredients: draft.ingredients.clone(),
            flavors: draft.flavors.clone(),
            expiry: expiry_timestamp(&draft.expiry),
            rating: draft.rating,
        }
    }
}
