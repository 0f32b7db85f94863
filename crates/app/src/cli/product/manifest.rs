//! YAML product manifests

use std::{io, path::Path};

use catalog::draft::{DraftError, DraftStore, NumericField, TextField};
use serde::{Deserialize, Deserializer};
use serde_norway::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ManifestError {
    #[error("failed to read manifest: {0}")]
    Read(#[from] io::Error),

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_norway::Error),
}

/// Product fields as written by hand. Numbers may be given bare or quoted.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ProductManifest {
    title: Option<String>,
    description: Option<String>,
    category: Option<String>,
    brand: Option<String>,
    #[serde(rename = "id")]
    external_id: Option<String>,
    #[serde(deserialize_with = "scalar")]
    sale: Option<String>,
    #[serde(deserialize_with = "scalar")]
    rating: Option<String>,
    #[serde(deserialize_with = "scalar")]
    expiry: Option<String>,
    photos: Vec<String>,
    ingredients: Vec<String>,
    variants: Vec<VariantEntry>,
    flavors: Vec<FlavorEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct VariantEntry {
    color: Option<String>,
    swatch: Option<String>,
    #[serde(deserialize_with = "scalar")]
    weight: Option<String>,
    #[serde(deserialize_with = "scalar")]
    price: Option<String>,
    #[serde(deserialize_with = "scalar")]
    stock: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FlavorEntry {
    name: Option<String>,
    #[serde(deserialize_with = "scalar")]
    price: Option<String>,
    #[serde(deserialize_with = "scalar")]
    stock: Option<String>,
    ingredients: Vec<String>,
}

impl ProductManifest {
    pub(crate) async fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = tokio::fs::read_to_string(path).await?;

        Self::parse(&text)
    }

    fn parse(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_norway::from_str(text)?)
    }

    /// Feed the manifest through the draft operations. Collections are appended to.
    pub(crate) fn apply(&self, store: &mut DraftStore) -> Result<(), DraftError> {
        let text_fields = [
            (TextField::Title, &self.title),
            (TextField::Description, &self.description),
            (TextField::CategoryCode, &self.category),
            (TextField::Brand, &self.brand),
            (TextField::ExternalId, &self.external_id),
            (TextField::Expiry, &self.expiry),
        ];

        for (field, value) in text_fields {
            if let Some(value) = value {
                store.set_field(field, value.clone())?;
            }
        }

        for (field, raw) in [
            (NumericField::SaleRate, &self.sale),
            (NumericField::Rating, &self.rating),
        ] {
            if let Some(raw) = raw {
                store.set_numeric_field(field, raw);
            }
        }

        for ingredient in &self.ingredients {
            store.ingredient_builder_mut().text.clone_from(ingredient);
            store.add_ingredient()?;
        }

        for variant in &self.variants {
            let builder = store.variant_builder_mut();

            builder.color_name = variant.color.clone().unwrap_or_default();
            if let Some(swatch) = &variant.swatch {
                builder.swatch.clone_from(swatch);
            }
            builder.weight = variant.weight.clone().unwrap_or_default();
            builder.price = variant.price.clone().unwrap_or_default();
            builder.stock = variant.stock.clone().unwrap_or_default();

            store.add_variant()?;
        }

        for flavor in &self.flavors {
            let builder = store.flavor_builder_mut();

            builder.name = flavor.name.clone().unwrap_or_default();
            builder.price = flavor.price.clone().unwrap_or_default();
            builder.stock = flavor.stock.clone().unwrap_or_default();

            for ingredient in &flavor.ingredients {
                store.flavor_builder_mut().ingredient.text.clone_from(ingredient);
                store.add_flavor_ingredient()?;
            }

            store.add_flavor()?;
        }

        store.append_photos(self.photos.iter().cloned());

        Ok(())
    }
}

fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(value.and_then(|value| match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }))
}
