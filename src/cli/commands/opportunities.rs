//! The `opportunities` command: list contribution opportunities.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::cli::output::progress::maybe_spinner;
use crate::cli::output::table::format_opportunities;
use crate::domain::models::{Config, OpportunityKind};
use crate::infrastructure::api::{ApiClient, OpportunityClient};
use crate::services::{LoadOutcome, OpportunityFeed};

/// Arguments for the `opportunities` command.
#[derive(Debug, Args)]
pub struct OpportunitiesArgs {
    /// Which kind of opportunities to list.
    #[arg(value_enum)]
    pub kind: OpportunityKindArg,

    /// Language filter for translation and voiceover opportunities.
    /// Defaults to the configured language; ignored for skills.
    #[arg(long)]
    pub language: Option<String>,

    /// Number of pages to fetch.
    #[arg(long, default_value_t = 1, conflicts_with = "all")]
    pub pages: usize,

    /// Keep fetching until the backend reports no more results.
    #[arg(long)]
    pub all: bool,
}

/// CLI-side opportunity kind selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OpportunityKindArg {
    /// Translation opportunities.
    Translation,
    /// Voiceover opportunities.
    Voiceover,
    /// Skill question opportunities.
    Skill,
}

impl From<OpportunityKindArg> for OpportunityKind {
    fn from(arg: OpportunityKindArg) -> Self {
        match arg {
            OpportunityKindArg::Translation => Self::Translation,
            OpportunityKindArg::Voiceover => Self::Voiceover,
            OpportunityKindArg::Skill => Self::Skill,
        }
    }
}

/// Fetch and print opportunities.
pub async fn execute(args: OpportunitiesArgs, config: &Config, json: bool) -> Result<()> {
    let kind = OpportunityKind::from(args.kind);
    let language = if kind.is_language_filtered() {
        Some(
            args.language
                .clone()
                .unwrap_or_else(|| config.language.default_code.clone()),
        )
    } else {
        None
    };

    let api = ApiClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("Failed to create API client")?;
    let mut feed = OpportunityFeed::new(OpportunityClient::new(api), kind, language);

    let spinner = maybe_spinner("Loading opportunities...", json);
    let mut pages_fetched = 0usize;
    while feed.has_more() && (args.all || pages_fetched < args.pages) {
        match feed
            .load_more()
            .await
            .context("Failed to load opportunities")?
        {
            LoadOutcome::Loaded { .. } => pages_fetched += 1,
            LoadOutcome::AlreadyLoading | LoadOutcome::Exhausted => break,
        }
    }
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(feed.items())?);
        return Ok(());
    }

    if feed.items().is_empty() {
        println!("No {} opportunities found.", feed.kind());
        return Ok(());
    }

    println!("{}", format_opportunities(feed.items()));
    let count = feed.items().len();
    println!(
        "\n{count} opportunit{} fetched{}",
        if count == 1 { "y" } else { "ies" },
        if feed.has_more() {
            " (more available, rerun with --all)"
        } else {
            ""
        }
    );

    Ok(())
}
