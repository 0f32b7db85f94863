use catalog::presenter::{price_range, total_stock};
use catalog_app::context::AppContext;
use clap::Args;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {}

#[derive(Debug, Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "Code")]
    code: String,

    #[tabled(rename = "Title")]
    title: String,

    #[tabled(rename = "Price")]
    price: String,

    #[tabled(rename = "Stock")]
    stock: u64,
}

pub(crate) async fn run(_args: ListProductsArgs, ctx: &AppContext) -> Result<(), String> {
    let products = ctx
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    let rows = products.iter().map(|product| ProductRow {
        id: product.id.to_string(),
        code: product.external_id.clone(),
        title: product.title.clone(),
        price: price_range(product).render(&ctx.formatter),
        stock: total_stock(product),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    println!("{table}");

    Ok(())
}
