use clap::Parser;
use github_dashboard::cli::{Cli, Command};
use github_dashboard::config::Config;
use github_dashboard::error::DashboardError;
use std::time::Duration;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["github-dashboard"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("Failed to parse arguments")
}

#[test]
fn test_explicit_flags() {
    let cli = parse(&[
        "--github-username",
        "octocat",
        "--github-token",
        "secret",
        "--port",
        "9090",
        "--api-url",
        "http://localhost:3000",
        "--refresh-interval-secs",
        "60",
        "watch",
    ]);
    let config = Config::from(&cli);

    assert_eq!(cli.command, Some(Command::Watch));
    assert_eq!(config.github_username.as_deref(), Some("octocat"));
    assert_eq!(config.github_token.as_deref(), Some("secret"));
    assert_eq!(config.port, 9090);
    assert_eq!(config.api_base_url, "http://localhost:3000");
    assert_eq!(config.refresh_interval, Duration::from_secs(60));
    assert_eq!(config.require_username().unwrap(), "octocat");
}

#[test]
fn test_serve_subcommand() {
    let cli = parse(&["--github-username", "octocat", "serve"]);
    assert_eq!(cli.command, Some(Command::Serve));
}

#[test]
fn test_empty_values_count_as_unset() {
    let cli = parse(&["--github-username", "  ", "--github-token", ""]);
    let config = Config::from(&cli);

    assert!(config.github_username.is_none());
    assert!(config.github_token.is_none());
    assert!(matches!(
        config.require_username(),
        Err(DashboardError::MissingConfig(_))
    ));
}

#[test]
fn test_invalid_port_rejected() {
    let result = Cli::try_parse_from(["github-dashboard", "--port", "not-a-port"]);
    assert!(result.is_err());
}
