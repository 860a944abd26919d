use std::path::PathBuf;

use authdomains::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_parse_authorize() {
    let cli = Cli::try_parse_from(vec!["authdomains", "authorize", "myapp.web.app"]).unwrap();

    assert!(!cli.json);
    assert!(cli.config.is_none());
    match cli.command {
        Commands::Authorize(args) => {
            assert_eq!(args.domain, "myapp.web.app");
            assert!(args.project.is_none());
            assert!(args.credentials.is_none());
        }
        Commands::List(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_authorize_with_overrides() {
    let cli = Cli::try_parse_from(vec![
        "authdomains",
        "authorize",
        "myapp.web.app",
        "--project",
        "demo-project",
        "--credentials",
        "/etc/keys/svc.json",
        "--json",
    ])
    .unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Authorize(args) => {
            assert_eq!(args.project.as_deref(), Some("demo-project"));
            assert_eq!(args.credentials, Some(PathBuf::from("/etc/keys/svc.json")));
        }
        Commands::List(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_list() {
    let cli =
        Cli::try_parse_from(vec!["authdomains", "list", "--project", "demo-project"]).unwrap();

    match cli.command {
        Commands::List(args) => {
            assert_eq!(args.project.as_deref(), Some("demo-project"));
        }
        Commands::Authorize(_) => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_global_config_flag() {
    let cli = Cli::try_parse_from(vec!["authdomains", "--config", "custom.yaml", "list"]).unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
}

#[test]
fn test_authorize_requires_domain() {
    let result = Cli::try_parse_from(vec!["authdomains", "authorize"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_command_rejected() {
    let result = Cli::try_parse_from(vec!["authdomains", "revoke", "myapp.web.app"]);
    assert!(result.is_err());
}
