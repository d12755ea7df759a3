//! The `admin` command: role queries and assignments.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use crate::cli::output::table::format_roles;
use crate::domain::models::{Config, RoleForm, RoleUpdateForm, RoleViewForm, RoleViewMethod};
use crate::infrastructure::api::{AdminClient, ApiClient};

/// Arguments for the `admin` command.
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// The admin operation to run.
    #[command(subcommand)]
    pub command: AdminCommands,
}

/// Admin subcommands.
#[derive(Debug, Subcommand)]
pub enum AdminCommands {
    /// Look up user role assignments.
    ViewRoles {
        /// Query by role or by username.
        #[arg(long, value_enum)]
        method: ViewMethodArg,
        /// Role to query for (required with `--method role`).
        #[arg(long)]
        role: Option<String>,
        /// Username to query for (required with `--method username`).
        #[arg(long)]
        username: Option<String>,
    },
    /// Assign a new role to a user.
    UpdateRole {
        /// User whose role is being changed.
        #[arg(long)]
        username: String,
        /// Role to assign.
        #[arg(long)]
        role: String,
        /// Topic id, for topic-scoped roles.
        #[arg(long)]
        topic_id: Option<String>,
    },
}

/// CLI-side view method selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewMethodArg {
    /// List all users holding a role.
    Role,
    /// Look up one user's role.
    Username,
}

impl From<ViewMethodArg> for RoleViewMethod {
    fn from(arg: ViewMethodArg) -> Self {
        match arg {
            ViewMethodArg::Role => Self::Role,
            ViewMethodArg::Username => Self::Username,
        }
    }
}

/// Run an admin subcommand.
pub async fn execute(args: AdminArgs, config: &Config, json: bool) -> Result<()> {
    let api = ApiClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )
    .context("Failed to create API client")?;
    let client = AdminClient::new(api);

    let form = match args.command {
        AdminCommands::ViewRoles {
            method,
            role,
            username,
        } => RoleForm::View(RoleViewForm {
            method: method.into(),
            role,
            username,
        }),
        AdminCommands::UpdateRole {
            username,
            role,
            topic_id,
        } => RoleForm::Update(RoleUpdateForm {
            username,
            new_role: role,
            topic_id,
        }),
    };

    match form {
        RoleForm::View(form) => {
            let result = client
                .view_roles(&form)
                .await
                .context("Failed to query roles")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.is_empty() {
                println!("No results.");
            } else {
                let sorted: BTreeMap<String, String> = result.into_iter().collect();
                println!("{}", format_roles(&sorted));
            }
        }
        RoleForm::Update(form) => {
            client
                .update_role(&form)
                .await
                .context("Failed to update role")?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "username": form.username, "role": form.new_role })
                );
            } else {
                println!(
                    "Role of {} successfully updated to {}",
                    form.username, form.new_role
                );
            }
        }
    }

    Ok(())
}
