//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::feed::{FetchError, Post, PostId, PostSource};

/// A source that answers every fetch with the same canned result.
pub struct StubSource {
    pub result: Result<Vec<Post>, FetchError>,
}

impl StubSource {
    pub fn empty() -> Self {
        Self { result: Ok(Vec::new()) }
    }
}

#[async_trait]
impl PostSource for StubSource {
    fn describe(&self) -> &str {
        "stub"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.result.clone()
    }
}

/// Creates a test App backed by an empty StubSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubSource::empty()))
}

pub fn sample_post(id: i64, title: &str) -> Post {
    Post {
        id: PostId::Int(id),
        title: title.to_string(),
        sentiment: "POSITIVE".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}
