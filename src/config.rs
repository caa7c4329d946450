use crate::cli::Cli;
use crate::error::{DashboardError, Result};
use std::time::Duration;

/// Process-wide settings, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub github_username: Option<String>,
    pub github_token: Option<String>,
    pub port: u16,
    pub api_base_url: String,
    pub refresh_interval: Duration,
}

impl Config {
    /// The configured username, or a `MissingConfig` error
    pub fn require_username(&self) -> Result<&str> {
        self.github_username
            .as_deref()
            .ok_or_else(|| DashboardError::MissingConfig("GITHUB_USERNAME".to_string()))
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            github_username: non_empty(cli.github_username.as_deref()),
            github_token: non_empty(cli.github_token.as_deref()),
            port: cli.port,
            api_base_url: cli.api_url.clone(),
            refresh_interval: Duration::from_secs(cli.refresh_interval_secs.max(1)),
        }
    }
}

// An exported-but-empty variable counts as unset
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
