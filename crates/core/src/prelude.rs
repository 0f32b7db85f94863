//! Catalog prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    draft::{
        DraftBuilder, DraftError, DraftStore, FlavorBuilder, IngredientBuilder, NumericField,
        ProductDraft, ProductPayload, TextField, VariantBuilder,
    },
    lifecycle::{AuthoringState, Lifecycle, LifecycleAction, LifecycleError},
    presenter::{
        MoneyFormatter, PriceFormatter, PriceRange, ProductDetails, price_range, total_stock,
    },
    products::{Color, Flavor, ProductId, ProductRecord, Variant},
    uploads::{BatchState, Preview, PreviewSequence, UploadBatch, UploadBatchError},
};
