use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("GitHub API error: {0}")]
    ApiStatus(u16),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing configuration: {0} environment variable is required")]
    MissingConfig(String),
}

impl DashboardError {
    /// Status code returned by GitHub, if this is an API status error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DashboardError::ApiStatus(status) => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
