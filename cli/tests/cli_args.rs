//! Argument parsing tests

use clap::Parser;
use std::path::PathBuf;

use nf_cli::{Cli, Command};
use nf_shared::{ClientConfig, StoreBackend};

#[test]
fn test_login_arguments() {
    let cli = Cli::try_parse_from([
        "newsfeed",
        "login",
        "--email",
        "ann@example.com",
        "--password",
        "secret",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Command::Login {
            email: "ann@example.com".to_string(),
            password: "secret".to_string(),
        }
    );
}

#[test]
fn test_signup_requires_name() {
    let result = Cli::try_parse_from([
        "newsfeed",
        "signup",
        "--email",
        "ann@example.com",
        "--password",
        "password123",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_news_watch_with_interval() {
    let cli = Cli::try_parse_from(["newsfeed", "news", "--watch", "--interval", "30"]).unwrap();

    assert_eq!(
        cli.command,
        Command::News {
            id: None,
            watch: true,
            interval: Some(30),
        }
    );
}

#[test]
fn test_interval_requires_watch() {
    assert!(Cli::try_parse_from(["newsfeed", "news", "--interval", "30"]).is_err());
    assert!(Cli::try_parse_from(["newsfeed", "news", "--id", "n1", "--watch"]).is_err());
}

#[test]
fn test_zero_interval_is_rejected() {
    let result = Cli::try_parse_from(["newsfeed", "news", "--watch", "--interval", "0"]);

    assert!(result.is_err());
}

#[test]
fn test_global_overrides_apply_to_config() {
    let cli = Cli::try_parse_from([
        "newsfeed",
        "status",
        "--base-url",
        "https://api.example.com",
        "--session-file",
        "/tmp/newsfeed-session.json",
    ])
    .unwrap();
    let mut config = ClientConfig::default();

    cli.apply_overrides(&mut config);

    assert_eq!(config.api.base_url, "https://api.example.com");
    assert_eq!(config.session.backend, StoreBackend::File);
    assert_eq!(
        config.session.path,
        Some(PathBuf::from("/tmp/newsfeed-session.json"))
    );
}

#[test]
fn test_ephemeral_uses_memory_store() {
    let cli = Cli::try_parse_from(["newsfeed", "me", "--ephemeral"]).unwrap();
    let mut config = ClientConfig::default();

    cli.apply_overrides(&mut config);

    assert_eq!(config.session.backend, StoreBackend::Memory);
    assert!(Cli::try_parse_from(["newsfeed", "me", "--ephemeral", "--session-file", "x"]).is_err());
}
