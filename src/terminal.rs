use crate::actors::WatchUpdate;
use crate::models::{Commit, DashboardData, Repository};
use crate::render::{format_date, COMMIT_DATE_FORMAT, REPO_DATE_FORMAT};
use colored::*;
use std::fmt::Write;
use tokio::sync::mpsc;

/// Status line shown above the panels
pub fn render_status(update: &WatchUpdate) -> String {
    match update {
        WatchUpdate::Loading => "⏳ Loading...".yellow().to_string(),
        WatchUpdate::Loaded { refreshed_at, .. } => {
            format!("✅ Updated at {}", refreshed_at.format("%H:%M:%S"))
                .green()
                .to_string()
        }
        WatchUpdate::Failed(message) => format!("❌ Error: {}", message).red().to_string(),
        WatchUpdate::Stopped(stats) => format!(
            "🛑 Stopped after {} refreshes ({} failed)",
            stats.refreshes, stats.failures
        )
        .dimmed()
        .to_string(),
    }
}

/// Both panels as plain terminal text
pub fn render_panels(data: &DashboardData) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "📝 Latest Commits".bold());
    let _ = writeln!(out, "{}", "-".repeat(50).dimmed());
    if data.commits.is_empty() {
        let _ = writeln!(out, "No commits found");
    }
    for commit in &data.commits {
        push_commit_card(&mut out, commit);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "📚 Recent Repositories".bold());
    let _ = writeln!(out, "{}", "-".repeat(50).dimmed());
    if data.repositories.is_empty() {
        let _ = writeln!(out, "No repositories found");
    }
    for repo in &data.repositories {
        push_repository_card(&mut out, repo);
    }

    out
}

fn push_commit_card(out: &mut String, commit: &Commit) {
    // Only the subject line fits on a card
    let subject = commit.message.lines().next().unwrap_or_default();
    let _ = writeln!(out, "{}", subject.bold());
    let _ = writeln!(
        out,
        "  📁 {} • {}",
        commit.repository,
        format_date(&commit.date, COMMIT_DATE_FORMAT)
    );
    let _ = writeln!(out, "  🔗 {}", commit.url.dimmed());
}

fn push_repository_card(out: &mut String, repo: &Repository) {
    if repo.private {
        let _ = writeln!(out, "{} 🔒", repo.name.bold());
    } else {
        let _ = writeln!(out, "{}", repo.name.bold());
    }
    if !repo.description.is_empty() {
        let _ = writeln!(out, "  {}", repo.description);
    }
    let mut meta = String::new();
    if !repo.language.is_empty() {
        let _ = write!(meta, "🏷️ {} • ", repo.language);
    }
    let _ = write!(meta, "Updated on {}", format_date(&repo.updated_at, REPO_DATE_FORMAT));
    let _ = writeln!(out, "  {}", meta);
    let _ = writeln!(out, "  🔗 {}", repo.url.dimmed());
}

/// Drain watcher updates and redraw until the channel closes.
///
/// This task is the only writer to the terminal, so redraws never interleave.
pub async fn run_renderer(username: String, mut updates: mpsc::Receiver<WatchUpdate>) {
    while let Some(update) = updates.recv().await {
        if let WatchUpdate::Loaded { data, .. } = &update {
            // Clear screen and move the cursor home before a full redraw
            print!("\x1B[2J\x1B[H");
            println!("{}", "🐙 GitHub Dashboard".bold().green());
            println!("User: {}", username);
            println!("{}\n", "=".repeat(50).dimmed());
            println!("{}", render_panels(data));
        }
        println!("{}", render_status(&update));
        if !matches!(update, WatchUpdate::Loading | WatchUpdate::Stopped(_)) {
            println!("{}", "Press Enter to refresh, q + Enter to quit".dimmed());
        }
    }
}
