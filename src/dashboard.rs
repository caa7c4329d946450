use crate::error::Result;
use crate::github::GitHubService;
use crate::models::DashboardData;
use std::sync::Arc;
use tracing::debug;

pub const COMMIT_LIMIT: usize = 10;
pub const REPOSITORY_LIMIT: usize = 10;

/// Builds the commits + repositories aggregate for a user
#[derive(Clone)]
pub struct Dashboard {
    github: Arc<dyn GitHubService>,
}

impl Dashboard {
    pub fn new(github: Arc<dyn GitHubService>) -> Self {
        Self { github }
    }

    /// Fetch commits, then repositories. The first failure is returned as-is
    /// and nothing after it is requested.
    pub async fn get_dashboard_data(&self, username: &str) -> Result<DashboardData> {
        debug!(username, "Loading dashboard data");

        let commits = self.github.get_user_commits(username, COMMIT_LIMIT).await?;
        let repositories = self
            .github
            .get_user_repositories(username, REPOSITORY_LIMIT)
            .await?;

        Ok(DashboardData {
            username: username.to_string(),
            commits,
            repositories,
        })
    }
}
