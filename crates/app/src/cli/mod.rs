use catalog_app::{config::AppConfig, context::AppContext, observability};
use clap::{Parser, Subcommand};

mod product;

#[derive(Debug, Parser)]
#[command(name = "catalog-app", about = "Catalog authoring CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.config.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let ctx = AppContext::from_config(&self.config)
            .map_err(|error| format!("invalid configuration: {error}"))?;

        match self.command {
            Commands::Product(command) => product::run(command, &ctx).await,
        }
    }
}
