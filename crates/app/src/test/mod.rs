//! Test helpers

use std::{sync::Arc, time::Duration};

use catalog::{
    draft::{DraftError, DraftStore, TextField},
    presenter::MoneyFormatter,
    products::{ProductId, ProductRecord, Variant},
};
use rust_decimal::dec;
use rusty_money::iso::USD;

use crate::{
    context::AppContext,
    images::{ImageFile, MockImageHost},
    products::MockProductsApi,
};

pub(crate) const TEST_CLOSE_DELAY: Duration = Duration::from_millis(1_500);

pub(crate) fn context(products: MockProductsApi, images: MockImageHost) -> AppContext {
    AppContext::new(
        Arc::new(products),
        Arc::new(images),
        TEST_CLOSE_DELAY,
        MoneyFormatter::new(USD),
    )
}

pub(crate) fn product(id: &str) -> ProductRecord {
    ProductRecord {
        id: ProductId::new(id),
        external_id: "PRD-LX2A1B-ABCDEFGH".to_string(),
        title: "Chocolate".to_string(),
        category_code: "sweets".to_string(),
        variants: vec![Variant {
            price: dec!(12000),
            stock: 4,
            ..Variant::default()
        }],
        photos: vec!["https://img.example/cover.png".to_string()],
        ..ProductRecord::default()
    }
}

pub(crate) fn image(name: &str) -> ImageFile {
    ImageFile::new(name, name.as_bytes().to_vec())
}

/// Fill a draft until it passes submit validation.
pub(crate) fn submittable(store: &mut DraftStore) -> Result<(), DraftError> {
    store.set_field(TextField::Title, "Halva")?;
    store.set_field(TextField::CategoryCode, "sweets")?;
    store.variant_builder_mut().price = "12000".to_string();
    store.add_variant()?;
    store.append_photos(["https://img.example/halva.png".to_string()]);

    Ok(())
}
