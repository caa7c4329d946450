#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use github_dashboard::error::{DashboardError, Result};
use github_dashboard::github::GitHubService;
use github_dashboard::models::{Commit, Repository};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// In-memory `GitHubService` that counts calls and records requested limits
pub struct FakeGitHub {
    commits: std::result::Result<Vec<Commit>, u16>,
    repositories: std::result::Result<Vec<Repository>, u16>,
    pub commit_calls: AtomicUsize,
    pub repository_calls: AtomicUsize,
    pub limits: Mutex<Vec<(&'static str, usize)>>,
    delay: Duration,
}

impl FakeGitHub {
    pub fn new(commits: Vec<Commit>, repositories: Vec<Repository>) -> Self {
        Self {
            commits: Ok(commits),
            repositories: Ok(repositories),
            commit_calls: AtomicUsize::new(0),
            repository_calls: AtomicUsize::new(0),
            limits: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    /// Make every call take at least `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Commits fail with the given API status
    pub fn failing_commits(status: u16) -> Self {
        Self {
            commits: Err(status),
            ..Self::new(vec![], vec![])
        }
    }

    /// Repositories fail with the given API status
    pub fn failing_repositories(commits: Vec<Commit>, status: u16) -> Self {
        Self {
            repositories: Err(status),
            ..Self::new(commits, vec![])
        }
    }

    pub fn total_calls(&self) -> usize {
        self.commit_calls.load(Ordering::SeqCst) + self.repository_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubService for FakeGitHub {
    async fn get_user_commits(&self, _username: &str, limit: usize) -> Result<Vec<Commit>> {
        self.commit_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.limits.lock().unwrap().push(("commits", limit));
        match &self.commits {
            Ok(commits) => Ok(commits.clone()),
            Err(status) => Err(DashboardError::ApiStatus(*status)),
        }
    }

    async fn get_user_repositories(
        &self,
        _username: &str,
        limit: usize,
    ) -> Result<Vec<Repository>> {
        self.repository_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.limits.lock().unwrap().push(("repositories", limit));
        match &self.repositories {
            Ok(repositories) => Ok(repositories.clone()),
            Err(status) => Err(DashboardError::ApiStatus(*status)),
        }
    }
}

pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

pub fn commit(sha: &str, repository: &str, hour: u32) -> Commit {
    Commit {
        message: format!("Commit {}", sha),
        repository: repository.to_string(),
        date: at(hour),
        sha: sha.to_string(),
        url: format!("https://github.com/{}/commit/{}", repository, sha),
    }
}

pub fn repository(name: &str, hour: u32) -> Repository {
    Repository {
        name: name.to_string(),
        full_name: format!("octocat/{}", name),
        updated_at: at(hour),
        description: format!("The {} project", name),
        language: "Rust".to_string(),
        private: false,
        url: format!("https://github.com/octocat/{}", name),
    }
}
