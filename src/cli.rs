use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "github-dashboard")]
#[command(about = "GitHub Dashboard - Shows a user's latest commits and recently updated repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub user whose activity is shown
    #[arg(long, env = "GITHUB_USERNAME")]
    pub github_username: Option<String>,

    /// GitHub API token (optional, raises rate limits)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// GitHub API root URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Seconds between automatic refreshes in watch mode
    #[arg(long, env = "REFRESH_INTERVAL_SECS", default_value_t = 300)]
    pub refresh_interval_secs: u64,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Serve the dashboard over HTTP (default)
    Serve,
    /// Show the dashboard in the terminal and refresh it periodically
    Watch,
}
