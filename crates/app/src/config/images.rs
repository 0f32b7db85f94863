//! Image Host Config

use clap::Args;

/// Image host settings.
#[derive(Debug, Clone, Args)]
pub struct ImageHostConfig {
    /// Upload endpoint of the image host
    #[arg(
        long,
        env = "IMAGE_HOST_URL",
        default_value = "https://api.imgbb.com/1/upload"
    )]
    pub image_host_url: String,

    /// API key passed to the image host as the `key` query parameter
    #[arg(long, env = "IMAGE_HOST_KEY", hide_env_values = true)]
    pub image_host_key: Option<String>,
}
