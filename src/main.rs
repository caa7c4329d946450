use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use github_dashboard::actors::{DashboardWatcher, DashboardWatcherArgs, WatcherMessage};
use github_dashboard::cli::{Cli, Command};
use github_dashboard::config::Config;
use github_dashboard::dashboard::Dashboard;
use github_dashboard::github::GitHubClient;
use github_dashboard::server::{start_server, AppState};
use github_dashboard::terminal::run_renderer;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve);

    // The watcher owns the terminal, so keep logs quiet there unless asked
    let default_filter = match command {
        Command::Serve => "info",
        Command::Watch => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::from(&cli);

    let github = GitHubClient::with_base_url(config.github_token.clone(), &config.api_base_url)
        .context("Failed to create GitHub client")?;
    let dashboard = Arc::new(Dashboard::new(Arc::new(github)));

    match command {
        Command::Serve => serve(&config, dashboard).await,
        Command::Watch => watch(&config, dashboard).await,
    }
}

async fn serve(config: &Config, dashboard: Arc<Dashboard>) -> Result<()> {
    println!("{}", "GitHub Dashboard Server".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    if config.github_username.is_none() {
        println!(
            "{}",
            "⚠️ GITHUB_USERNAME is not set; dashboard requests will fail with 400".yellow()
        );
    }

    println!("🚀 Server starting on port {}", config.port);
    println!("📊 Dashboard: http://localhost:{}", config.port);
    println!("🔗 API: http://localhost:{}/api/dashboard", config.port);
    println!("\nPress Ctrl+C to stop the server\n");

    let state = AppState {
        dashboard,
        username: config.github_username.clone(),
    };

    tokio::select! {
        result = start_server(state, config.port) => {
            result.context("Dashboard server failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n🛑 Shutting down server...");
        }
    }

    println!("✅ Server stopped");
    Ok(())
}

async fn watch(config: &Config, dashboard: Arc<Dashboard>) -> Result<()> {
    let username = config.require_username()?.to_string();

    let (updates_tx, updates_rx) = mpsc::channel(16);
    let renderer = tokio::spawn(run_renderer(username.clone(), updates_rx));

    let (watcher, watcher_handle) = DashboardWatcher::spawn(DashboardWatcherArgs {
        dashboard,
        username,
        refresh_interval: config.refresh_interval,
        updates: updates_tx,
    })
    .await
    .context("Failed to start dashboard watcher")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(input) if input.trim().eq_ignore_ascii_case("q") => break,
                    Some(_) => {
                        if watcher.send_message(WatcherMessage::Refresh).is_err() {
                            break;
                        }
                    }
                    // stdin closed, keep running on the timer alone
                    None => {
                        tokio::signal::ctrl_c().await?;
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    println!("\n🛑 Stopping watcher...");
    // Jumps ahead of any refreshes still queued; final stats arrive via the renderer
    watcher.stop(Some("Quit requested".to_string()));
    watcher_handle.await.context("Watcher task failed")?;
    renderer.await.context("Renderer task failed")?;

    Ok(())
}
