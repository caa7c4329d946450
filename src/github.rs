use crate::error::{DashboardError, Result};
use crate::models::{Commit, Repository};
use crate::types::{GitHubEvent, GitHubRepo};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
const EVENTS_PER_PAGE: u32 = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const PUSH_EVENT: &str = "PushEvent";

/// Read-only view of a user's GitHub activity
#[async_trait]
pub trait GitHubService: Send + Sync {
    /// Most recent commits pushed by `username`, newest first, at most `limit`
    async fn get_user_commits(&self, username: &str, limit: usize) -> Result<Vec<Commit>>;

    /// Repositories of `username` ordered by last update, at most `limit`
    async fn get_user_repositories(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<Vec<Repository>>;
}

pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(token, API_BASE_URL)
    }

    /// Create a client against a different API root, e.g. GitHub Enterprise
    pub fn with_base_url(token: Option<String>, base_url: &str) -> Result<Self> {
        // Reject a malformed base before any request is built
        Url::parse(base_url)?;

        let client = Client::builder()
            .user_agent(concat!("github-dashboard/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(GitHubClient {
            client,
            token: token.filter(|t| !t.is_empty()),
            base_url: base_url.to_string(),
        })
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "GitHub API request failed: {}", body);
            return Err(DashboardError::ApiStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl GitHubService for GitHubClient {
    async fn get_user_commits(&self, username: &str, limit: usize) -> Result<Vec<Commit>> {
        let url = self.endpoint(
            &["users", username, "events"],
            &[("per_page", EVENTS_PER_PAGE.to_string())],
        )?;
        let events: Vec<GitHubEvent> = self.get_json(url).await?;
        let commits = commits_from_events(events, limit);

        debug!(username, count = commits.len(), "Fetched commits");
        Ok(commits)
    }

    async fn get_user_repositories(
        &self,
        username: &str,
        limit: usize,
    ) -> Result<Vec<Repository>> {
        let url = self.endpoint(
            &["users", username, "repos"],
            &[("sort", "updated".to_string()), ("per_page", limit.to_string())],
        )?;
        let repos: Vec<GitHubRepo> = self.get_json(url).await?;
        let repositories = repositories_from_api(repos, limit);

        debug!(username, count = repositories.len(), "Fetched repositories");
        Ok(repositories)
    }
}

/// Flatten push events into commits, newest first, truncated to `limit`.
///
/// The events API carries no per-commit timestamp, so every commit gets the
/// `created_at` of the push that delivered it.
pub fn commits_from_events(events: Vec<GitHubEvent>, limit: usize) -> Vec<Commit> {
    let mut commits: Vec<Commit> = events
        .into_iter()
        .filter(|event| event.event_type == PUSH_EVENT)
        .flat_map(|event| {
            let date = parse_timestamp(&event.created_at);
            let repository = event.repo.name;
            event
                .payload
                .commits
                .unwrap_or_default()
                .into_iter()
                .map(move |commit| Commit {
                    url: format!("https://github.com/{}/commit/{}", repository, commit.sha),
                    message: commit.message,
                    repository: repository.clone(),
                    date,
                    sha: commit.sha,
                })
        })
        .collect();

    // Stable sort keeps commits of one push in payload order
    commits.sort_by(|a, b| b.date.cmp(&a.date));
    commits.truncate(limit);
    commits
}

/// Map API repositories, newest update first, truncated to `limit`.
///
/// `sort` and `per_page` are only requests; not every API root honors them.
pub fn repositories_from_api(repos: Vec<GitHubRepo>, limit: usize) -> Vec<Repository> {
    let mut repositories: Vec<Repository> = repos.into_iter().map(Repository::from).collect();

    repositories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repositories.truncate(limit);
    repositories
}

/// Parse an RFC 3339 timestamp, falling back to the Unix epoch
pub fn parse_timestamp(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

impl From<GitHubRepo> for Repository {
    fn from(repo: GitHubRepo) -> Self {
        Repository {
            updated_at: repo.updated_at.as_deref().map(parse_timestamp).unwrap_or_default(),
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description.unwrap_or_default(),
            language: repo.language.unwrap_or_default(),
            private: repo.private,
            url: repo.html_url,
        }
    }
}
