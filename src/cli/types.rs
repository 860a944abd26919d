//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use super::commands::authorize::AuthorizeArgs;
pub use super::commands::list::ListArgs;

#[derive(Parser)]
#[command(name = "authdomains")]
#[command(about = "Manage Identity Platform authorized domains", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Config file path (defaults to authdomains.yaml in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ensure a domain is present in the project's authorized-domain list
    Authorize(AuthorizeArgs),

    /// List the project's currently authorized domains
    List(ListArgs),
}
