use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single commit taken from a push event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub message: String,
    /// `owner/name` label of the repository the commit was pushed to
    pub repository: String,
    /// Timestamp of the enclosing push event
    pub date: DateTime<Utc>,
    pub sha: String,
    pub url: String,
}

/// Repository information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub updated_at: DateTime<Utc>,
    pub description: String,
    pub language: String,
    pub private: bool,
    pub url: String,
}

/// Commits and repositories for one user, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub username: String,
    pub commits: Vec<Commit>,
    pub repositories: Vec<Repository>,
}
