use std::{
    error::Error,
    path::{Path, PathBuf},
};

use catalog_app::{
    context::AppContext,
    images::ImageFile,
    session::{AuthoringSession, SessionEvent},
};
use clap::{Args, Subcommand};
use tokio::sync::broadcast;
use tracing::info;

use self::manifest::ProductManifest;

mod create;
mod edit;
mod list;
mod manifest;
mod show;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    Show(show::ShowProductArgs),
    List(list::ListProductsArgs),
    Create(create::CreateProductArgs),
    Edit(edit::EditProductArgs),
}

pub(crate) async fn run(command: ProductCommand, ctx: &AppContext) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Show(args) => show::run(args, ctx).await,
        ProductSubcommand::List(args) => list::run(args, ctx).await,
        ProductSubcommand::Create(args) => create::run(args, ctx).await,
        ProductSubcommand::Edit(args) => edit::run(args, ctx).await,
    }
}

/// Apply the manifest, upload the images as one batch, submit, then wait for the close signal.
async fn author(
    mut session: AuthoringSession,
    manifest: Option<&Path>,
    images: &[PathBuf],
) -> Result<(), String> {
    let mut events = session.subscribe();

    if let Some(path) = manifest {
        let manifest = ProductManifest::load(path)
            .await
            .map_err(|error| describe(&error))?;

        session
            .edit(|store| manifest.apply(store))
            .map_err(|error| format!("invalid manifest: {error}"))?;
    }

    let mut files = Vec::with_capacity(images.len());

    for path in images {
        let file = ImageFile::read(path)
            .await
            .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

        files.push(file);
    }

    session
        .upload_images(&files)
        .await
        .map_err(|error| describe(&error))?;

    session.submit().await.map_err(|error| describe(&error))?;

    println!("product_code: {}", session.store().draft().external_id);
    println!("photos: {}", session.store().draft().photos.len());

    wait_for_close(&mut events).await;

    Ok(())
}

async fn wait_for_close(events: &mut broadcast::Receiver<SessionEvent>) {
    while let Ok(event) = events.recv().await {
        match event {
            SessionEvent::CacheInvalidated { key } => info!(key, "cache invalidated"),
            SessionEvent::CloseRequested => break,
        }
    }
}

/// Render an error with its sources, outermost first.
fn describe(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
