mod refresh;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "wynndb-cli")]
#[command(about = "Builds the static crafting ingredient catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch both sources, rebuild the catalog, and replace the output file.
    Refresh {
        /// Output path. Overrides `WYNNDB_OUTPUT_PATH`.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Build the catalog and log the summary without writing it.
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = wynndb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Refresh { output, dry_run } => {
            let output_path = output.unwrap_or_else(|| config.output_path.clone());
            let client = wynndb_ingest::WynnClient::from_config(&config)?;

            let summary = match refresh::run_refresh(&client, &output_path, dry_run).await {
                Ok(summary) => summary,
                Err(e) => {
                    tracing::error!(error = %format!("{e:#}"), "data refresh failed");
                    return Err(e);
                }
            };

            if !summary.written {
                println!(
                    "dry-run: would write {} ingredients ({} with a nearest place) to {}",
                    summary.stats.ingredients,
                    summary.stats.enriched,
                    output_path.display()
                );
            }
        }
    }

    Ok(())
}
