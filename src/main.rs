//! Authdomains CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use authdomains::cli::{Cli, Commands};
use authdomains::infrastructure::config::{ConfigLoader, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => authdomains::cli::handle_error(err, cli.json),
    };

    init_tracing(&config.logging);

    let result = match cli.command {
        Commands::Authorize(args) => {
            authdomains::cli::commands::authorize::execute(args, config, cli.json).await
        }
        Commands::List(args) => {
            authdomains::cli::commands::list::execute(args, config, cli.json).await
        }
    };

    if let Err(err) = result {
        authdomains::cli::handle_error(err, cli.json);
    }
}
