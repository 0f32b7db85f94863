use std::path::PathBuf;

use catalog_app::{context::AppContext, session::AuthoringSession};
use clap::Args;

use super::author;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// YAML manifest describing the product
    #[arg(long)]
    manifest: PathBuf,

    /// Image to upload; repeat for several, uploaded in the given order
    #[arg(long = "image")]
    images: Vec<PathBuf>,
}

pub(crate) async fn run(args: CreateProductArgs, ctx: &AppContext) -> Result<(), String> {
    let session = AuthoringSession::for_create(ctx)
        .map_err(|error| format!("failed to open session: {error}"))?;

    author(session, Some(&args.manifest), &args.images).await
}
