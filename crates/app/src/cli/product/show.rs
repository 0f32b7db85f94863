use catalog::{
    presenter::{NOT_SPECIFIED, ProductDetails},
    products::ProductId,
};
use catalog_app::context::AppContext;
use clap::Args;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// Backend identity of the product
    id: String,
}

#[derive(Debug, Tabled)]
struct VariantRow {
    #[tabled(rename = "Color")]
    color: String,

    #[tabled(rename = "Weight")]
    weight: String,

    #[tabled(rename = "Price")]
    price: String,

    #[tabled(rename = "Stock")]
    stock: u32,
}

#[derive(Debug, Tabled)]
struct FlavorRow {
    #[tabled(rename = "Flavor")]
    name: String,

    #[tabled(rename = "Price")]
    price: String,

    #[tabled(rename = "Stock")]
    stock: u32,

    #[tabled(rename = "Ingredients")]
    ingredients: String,
}

pub(crate) async fn run(args: ShowProductArgs, ctx: &AppContext) -> Result<(), String> {
    let product = ctx
        .products
        .get_product(&ProductId::new(args.id))
        .await
        .map_err(|error| format!("failed to load product: {error}"))?;

    let details = ProductDetails::from_record(&product, &ctx.formatter);

    print_details(&details);

    Ok(())
}

fn print_details(details: &ProductDetails) {
    println!("title: {}", details.title);
    println!(
        "rating: {}",
        details
            .rating
            .map_or_else(|| NOT_SPECIFIED.to_string(), |rating| format!("{rating:.1}"))
    );
    println!("code: {}", details.external_id);
    println!("category: {}", details.category);
    println!("brand: {}", details.brand);
    println!("price: {}", details.price);

    if let Some(sale_rate) = details.sale_rate {
        println!("sale: {sale_rate}%");
    }

    println!("in_stock: {}", details.total_stock);
    println!("sold: {}", details.sold_count);
    println!(
        "expires: {}",
        details
            .expiry
            .map_or_else(|| NOT_SPECIFIED.to_string(), |date| date.to_string())
    );
    println!(
        "cover_photo: {}",
        details.cover_photo.as_deref().unwrap_or(NOT_SPECIFIED)
    );

    if details.extra_photos > 0 {
        println!("more_photos: {}", details.extra_photos);
    }

    println!("description: {}", details.description);

    if !details.ingredients.is_empty() {
        println!("ingredients: {}", details.ingredients.join(", "));
    }

    if let Some(created_on) = details.created_on {
        println!("created: {created_on}");
    }

    if !details.variants.is_empty() {
        let rows = details.variants.iter().map(|variant| VariantRow {
            color: variant.color.as_ref().map_or_else(
                || "-".to_string(),
                |color| format!("{} ({})", color.name, color.swatch),
            ),
            weight: variant.weight.clone().unwrap_or_else(|| "-".to_string()),
            price: variant.price.clone(),
            stock: variant.stock,
        });

        let mut table = Table::new(rows);
        table.with(Style::rounded());

        println!();
        println!("{table}");
    }

    if !details.flavors.is_empty() {
        let rows = details.flavors.iter().map(|flavor| FlavorRow {
            name: flavor.name.clone(),
            price: flavor.price.clone(),
            stock: flavor.stock,
            ingredients: flavor.ingredients.join(", "),
        });

        let mut table = Table::new(rows);
        table.with(Style::rounded());

        println!();
        println!("{table}");
    }
}
