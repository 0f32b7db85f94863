//! Draft errors.

use thiserror::Error;

/// Local validation failures raised while editing or submitting a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A variant needs a positive price.
    #[error("variant price is required")]
    VariantPriceRequired,

    /// Blank ingredient input.
    #[error("ingredient is required")]
    IngredientRequired,

    /// A flavor needs a name.
    #[error("flavor name is required")]
    FlavorNameRequired,

    /// A flavor needs a positive price.
    #[error("flavor price is required")]
    FlavorPriceRequired,

    /// The product code of a persisted product cannot change.
    #[error("product code cannot be changed once assigned")]
    ExternalIdLocked,

    /// Blank title.
    #[error("product title is required")]
    TitleRequired,

    /// Blank category.
    #[error("category is required")]
    CategoryRequired,

    /// No variants.
    #[error("at least one variant is required")]
    VariantsRequired,

    /// No photos.
    #[error("at least one photo is required")]
    PhotosRequired,
}
