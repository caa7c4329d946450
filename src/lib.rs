pub mod actors;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod github;
pub mod models;
pub mod render;
pub mod server;
pub mod terminal;
pub mod types;

pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use github::{GitHubClient, GitHubService};
pub use models::{Commit, DashboardData, Repository};
