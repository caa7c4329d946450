use crate::models::{Commit, DashboardData, Repository};
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub const COMMIT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";
pub const REPO_DATE_FORMAT: &str = "%d/%m/%Y";

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 20px; background: #f6f8fa; }
        .container { max-width: 1200px; margin: 0 auto; }
        .header { text-align: center; margin-bottom: 30px; }
        .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
        .card { background: white; border-radius: 8px; padding: 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
        .card h2 { margin-top: 0; color: #24292f; border-bottom: 1px solid #d1d9e0; padding-bottom: 10px; }
        .commit, .repo { padding: 12px 0; border-bottom: 1px solid #f0f0f0; }
        .commit:last-child, .repo:last-child { border-bottom: none; }
        .commit-message, .repo-name { font-weight: 500; color: #0969da; margin-bottom: 4px; }
        .commit-message a, .repo-name a { color: inherit; text-decoration: none; }
        .commit-meta, .repo-meta { font-size: 0.9em; color: #656d76; }
        .language { display: inline-block; padding: 2px 6px; border-radius: 12px; font-size: 0.8em; background: #f3f4f6; }
        .private { color: #8b5cf6; }
        .date { color: #8b949e; }
        @media (max-width: 768px) { .grid { grid-template-columns: 1fr; } }
"#;

/// Render the full HTML dashboard page
pub fn render_dashboard_html(data: &DashboardData) -> String {
    let username = html_escape(&data.username);
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
    <title>GitHub Dashboard - {username}</title>
    <meta charset="UTF-8">
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🐙 GitHub Dashboard</h1>
            <p>Latest activity of <strong>{username}</strong></p>
        </div>
        <div class="grid">
            <div class="card">
                <h2>📝 Latest Commits</h2>
"#
    );

    if data.commits.is_empty() {
        html.push_str("                <p>No commits found</p>\n");
    }
    for commit in &data.commits {
        push_commit(&mut html, commit);
    }

    html.push_str(
        r#"            </div>
            <div class="card">
                <h2>📚 Recent Repositories</h2>
"#,
    );

    if data.repositories.is_empty() {
        html.push_str("                <p>No repositories found</p>\n");
    }
    for repo in &data.repositories {
        push_repository(&mut html, repo);
    }

    html.push_str(
        r#"            </div>
        </div>
    </div>
</body>
</html>
"#,
    );

    html
}

fn push_commit(html: &mut String, commit: &Commit) {
    let _ = write!(
        html,
        r#"                <div class="commit">
                    <div class="commit-message"><a href="{url}">{message}</a></div>
                    <div class="commit-meta">
                        📁 {repository} • <span class="date">{date}</span>
                    </div>
                </div>
"#,
        url = html_escape(&commit.url),
        message = html_escape(&commit.message),
        repository = html_escape(&commit.repository),
        date = format_date(&commit.date, COMMIT_DATE_FORMAT),
    );
}

fn push_repository(html: &mut String, repo: &Repository) {
    let _ = write!(
        html,
        r#"                <div class="repo">
                    <div class="repo-name">
                        <a href="{url}">{name}</a>"#,
        url = html_escape(&repo.url),
        name = html_escape(&repo.name),
    );
    if repo.private {
        html.push_str(r#" <span class="private">🔒</span>"#);
    }
    html.push_str("\n                    </div>\n                    <div class=\"repo-meta\">\n");

    if !repo.description.is_empty() {
        let _ = writeln!(
            html,
            "                        {}<br>",
            html_escape(&repo.description)
        );
    }
    if !repo.language.is_empty() {
        let _ = writeln!(
            html,
            r#"                        <span class="language">{}</span>"#,
            html_escape(&repo.language)
        );
    }
    let _ = write!(
        html,
        r#"                        <span class="date">Updated on {}</span>
                    </div>
                </div>
"#,
        format_date(&repo.updated_at, REPO_DATE_FORMAT)
    );
}

pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    date.format(format).to_string()
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
