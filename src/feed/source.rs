use std::fmt;

use async_trait::async_trait;

use super::types::Post;

/// Why a fetch did not produce a list of posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never completed (DNS, connection refused, reset) or the
    /// body could not be decoded as a list of posts.
    Transport(String),
    /// A response arrived with a status outside 2xx.
    Status(u16),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => f.write_str(msg),
            FetchError::Status(status) => write!(f, "HTTP error! status: {status}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Somewhere posts can be fetched from.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Short human-readable location (shown in the status bar).
    fn describe(&self) -> &str;

    /// Fetches the full list of posts in server order.
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}
