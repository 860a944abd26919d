//! Implementation of the `authdomains list` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::Config;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project id (defaults to config, then the key file's project_id)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Service-account key file (overrides the configured path)
    #[arg(long)]
    pub credentials: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
pub struct ListOutput {
    pub project_id: String,
    pub authorized_domains: Option<Vec<String>>,
}

impl CommandOutput for ListOutput {
    fn to_human(&self) -> String {
        match &self.authorized_domains {
            Some(domains) if domains.is_empty() => {
                format!("No authorized domains configured for {}", self.project_id)
            }
            Some(domains) => {
                let mut lines = vec![format!(
                    "Authorized domains for {} ({}):",
                    style(&self.project_id).bold(),
                    domains.len()
                )];
                for domain in domains {
                    lines.push(format!("  - {domain}"));
                }
                lines.join("\n")
            }
            None => format!(
                "{} project config exposes no authorizedDomains field; the list may only be managed through the console",
                style("!").yellow()
            ),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: ListArgs, config: Config, json_mode: bool) -> Result<()> {
    let (client, project_id) =
        super::connect(&config, args.credentials.as_ref(), args.project.as_deref()).await?;

    let identity_config = client
        .get_config(&project_id)
        .await
        .context("Failed to fetch project config")?;

    let output_data = ListOutput {
        project_id,
        authorized_domains: identity_config.authorized_domains,
    };
    output(&output_data, json_mode);

    Ok(())
}
