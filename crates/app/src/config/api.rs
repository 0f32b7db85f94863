//! Catalog API Config

use clap::Args;

/// Catalog backend settings.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Base URL of the catalog backend, e.g. `https://shop.example/api`
    #[arg(long, env = "CATALOG_API_URL")]
    pub api_url: String,

    /// Bearer token sent with every catalog request
    #[arg(long, env = "CATALOG_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,
}
