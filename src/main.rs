//! Contribhub CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contribhub::cli::{Cli, Commands};
use contribhub::domain::models::LoggingConfig;
use contribhub::infrastructure::config::ConfigLoader;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        contribhub::cli::handle_error(&err, json);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ConfigLoader::load()?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    init_tracing(&config.logging);

    match cli.command {
        Commands::Opportunities(args) => {
            contribhub::cli::commands::opportunities::execute(args, &config, cli.json).await
        }
        Commands::Collection(args) => {
            contribhub::cli::commands::collection::execute(args, &config, cli.json).await
        }
        Commands::Admin(args) => {
            contribhub::cli::commands::admin::execute(args, &config, cli.json).await
        }
    }
}

/// Install the global tracing subscriber on stderr, honoring `RUST_LOG`
/// over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));
    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
