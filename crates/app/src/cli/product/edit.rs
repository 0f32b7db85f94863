use std::path::PathBuf;

use catalog::products::ProductId;
use catalog_app::{context::AppContext, session::AuthoringSession};
use clap::Args;

use super::{author, describe};

#[derive(Debug, Args)]
pub(crate) struct EditProductArgs {
    /// Backend identity of the product
    id: String,

    /// YAML manifest applied on top of the stored product
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Image to append; repeat for several, uploaded in the given order
    #[arg(long = "image")]
    images: Vec<PathBuf>,
}

pub(crate) async fn run(args: EditProductArgs, ctx: &AppContext) -> Result<(), String> {
    let mut session = AuthoringSession::for_edit(ctx, ProductId::new(args.id));

    session.hydrate().await.map_err(|error| describe(&error))?;

    author(session, args.manifest.as_deref(), &args.images).await
}
