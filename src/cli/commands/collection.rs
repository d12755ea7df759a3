//! The `collection` command: inspect collections.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::cli::output::progress::maybe_spinner;
use crate::domain::models::Config;
use crate::infrastructure::api::{ApiClient, CollectionClient};

/// Arguments for the `collection` command.
#[derive(Debug, Args)]
pub struct CollectionArgs {
    /// The collection operation to run.
    #[command(subcommand)]
    pub command: CollectionCommands,
}

/// Collection subcommands.
#[derive(Debug, Subcommand)]
pub enum CollectionCommands {
    /// Fetch a collection and show it.
    Show {
        /// The collection id.
        id: String,
    },
}

/// Run a collection subcommand.
pub async fn execute(args: CollectionArgs, config: &Config, json: bool) -> Result<()> {
    let api = ApiClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("Failed to create API client")?;
    let client = CollectionClient::new(api);

    match args.command {
        CollectionCommands::Show { id } => {
            let spinner = maybe_spinner("Loading collection...", json);
            let collection = client
                .load_collection(&id)
                .await
                .with_context(|| format!("Failed to load collection {id}"))?;
            spinner.finish_and_clear();

            // Details are recorded by the load that just succeeded.
            let details = client.collection_details(&id)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "collection": collection,
                        "details": details,
                    }))?
                );
                return Ok(());
            }

            println!("\nCollection Details:");
            println!("─────────────────────────────────────────");
            println!("Id:         {}", collection.id);
            println!("Title:      {}", collection.title);
            if let Some(objective) = &collection.objective {
                println!("Objective:  {objective}");
            }
            if let Some(category) = &collection.category {
                println!("Category:   {category}");
            }
            if let Some(language_code) = &collection.language_code {
                println!("Language:   {language_code}");
            }
            if let Some(version) = collection.version {
                println!("Version:    {version}");
            }
            println!("Editable:   {}", if details.can_edit { "yes" } else { "no" });

            if collection.nodes.is_empty() {
                println!("\nNo explorations in this collection.");
            } else {
                println!("\nExplorations:");
                for (index, node) in collection.nodes.iter().enumerate() {
                    println!("  {}. {}", index + 1, node.exploration_id);
                }
            }
        }
    }

    Ok(())
}
