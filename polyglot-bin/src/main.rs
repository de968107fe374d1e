use clap::{Parser, Subcommand};
use polyglot_common::AppContext;
use polyglot_error::{PGError, PGResult};
use polyglot_models::{constants::DEFAULT_CONFIG_FILE_NAME, domain::prelude::SetAppLocales};
use polyglot_storage::{PGCacheProvider, PGDbManager};
use serde::Serialize;
use std::{env::current_dir, path::PathBuf};
use tracing::info;

/// Polyglot - localized text service
///
/// Resolves locale tags, manages the locale sets of apps and serves the
/// aggregated translation tree of an app.
#[derive(Parser)]
#[command(name = "polyglot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Polyglot", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, 'polyglot.toml' in the current working directory is
    /// used when present.
    #[arg(short, long, env = "PG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create or upgrade the database schema
    Migrate,
    /// Resolve a BCP-47 tag to the most specific stored locale
    Resolve { tag: String },
    /// Print the translation tree of an app as JSON
    Translations {
        #[arg(long)]
        app: String,
        tag: String,
    },
    /// Replace the locale set of an app
    SetLocales {
        app: String,
        #[arg(required = true)]
        locales: Vec<String>,
    },
    /// Register a new app
    CreateApp { name: String },
    /// Drop every cached translation tree
    FlushTranslations,
}

fn print_json<T: Serialize>(value: &T) -> PGResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> PGResult<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| PGError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    // Migrations run while the database manager starts
    let ctx = AppContext::init::<PGDbManager, PGCacheProvider>(
        config_path.to_string_lossy().to_string(),
    )
    .await?;
    let services = ctx.services();

    let result = match cli.command {
        Command::Migrate => {
            info!("Schema is up to date");
            Ok(())
        }
        Command::Resolve { tag } => services
            .locales
            .resolve(&tag)
            .await
            .map(|locale_id| println!("{locale_id}"))
            .map_err(PGError::from),
        Command::Translations { app, tag } => services
            .translations
            .translations(&app, &tag)
            .await
            .map_err(PGError::from)
            .and_then(|tree| print_json(&tree)),
        Command::SetLocales { app, locales } => services
            .apps
            .set_locales(SetAppLocales {
                app_name: app,
                locales,
            })
            .await
            .map_err(PGError::from)
            .and_then(|outcome| print_json(&outcome)),
        Command::CreateApp { name } => services
            .apps
            .create(&name)
            .await
            .map_err(PGError::from)
            .and_then(|app| print_json(&app)),
        Command::FlushTranslations => services
            .translations
            .drop_all()
            .await
            .map(|count| info!(count, "translation trees flushed"))
            .map_err(PGError::from),
    };

    ctx.shutdown().await?;
    result
}
