//! Command-line interface for the contributor dashboard.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Command-line interface to the contributor dashboard API.
#[derive(Debug, Parser)]
#[command(name = "contribhub", version, about = "Browse contribution opportunities, collections, and admin roles")]
pub struct Cli {
    /// Emit machine-readable JSON instead of human-readable output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the configured API base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List contribution opportunities.
    Opportunities(commands::opportunities::OpportunitiesArgs),
    /// Inspect collections.
    Collection(commands::collection::CollectionArgs),
    /// Administer user roles.
    Admin(commands::admin::AdminArgs),
}

/// Report a command failure and exit non-zero.
pub fn handle_error(err: &anyhow::Error, json: bool) -> ! {
    if json {
        eprintln!(
            "{}",
            serde_json::json!({ "error": format!("{err:#}") })
        );
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }
    std::process::exit(1);
}
