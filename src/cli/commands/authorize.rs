//! Implementation of the `authdomains authorize` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::Config;
use crate::services::{DomainAuthorizer, EnsureOutcome};

#[derive(Args, Debug)]
pub struct AuthorizeArgs {
    /// Domain to authorize (e.g. myapp.web.app)
    pub domain: String,

    /// Project id (defaults to config, then the key file's project_id)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Service-account key file (overrides the configured path)
    #[arg(long)]
    pub credentials: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
pub struct AuthorizeOutput {
    pub project_id: String,
    pub domain: String,
    pub added: bool,
    pub authorized_domains: Vec<String>,
}

impl CommandOutput for AuthorizeOutput {
    fn to_human(&self) -> String {
        let check = style("✓").green();
        let headline = if self.added {
            format!(
                "{check} Added {} to the authorized domains of {}",
                style(&self.domain).bold(),
                self.project_id
            )
        } else {
            format!(
                "{check} {} is already authorized for {}",
                style(&self.domain).bold(),
                self.project_id
            )
        };

        let mut lines = vec![headline, String::new(), "Authorized domains:".to_string()];
        for domain in &self.authorized_domains {
            lines.push(format!("  - {domain}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: AuthorizeArgs, config: Config, json_mode: bool) -> Result<()> {
    let (client, project_id) =
        super::connect(&config, args.credentials.as_ref(), args.project.as_deref()).await?;

    let authorizer = DomainAuthorizer::new(client);
    let outcome = authorizer
        .ensure_domain_authorized(&project_id, &args.domain)
        .await
        .context("Failed to ensure domain is authorized")?;

    let (added, authorized_domains) = match outcome {
        EnsureOutcome::Added { domains } => (true, domains),
        EnsureOutcome::AlreadyPresent { domains } => (false, domains),
    };

    let output_data = AuthorizeOutput {
        project_id,
        domain: args.domain,
        added,
        authorized_domains,
    };
    output(&output_data, json_mode);

    Ok(())
}
