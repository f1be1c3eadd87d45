//! # Application State
//!
//! Core business state for sentiview. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── source: Arc<dyn PostSource>   // where posts come from
//! ├── view: ViewState               // Loading | Failed | Loaded
//! ├── fetch_started: bool           // one fetch per mount
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::feed::{FetchError, Post, PostSource};

/// What the view is currently showing.
///
/// Starts as `Loading` and settles exactly once into `Failed` or `Loaded`.
/// An empty `Loaded` is a real answer ("nothing collected yet"), distinct
/// from `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Failed(FetchError),
    Loaded(Vec<Post>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ViewState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Posts received so far. Empty while loading or after a failure.
    pub fn posts(&self) -> &[Post] {
        match self {
            ViewState::Loaded(posts) => posts,
            _ => &[],
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }
}

pub struct App {
    pub source: Arc<dyn PostSource>,
    pub view: ViewState,
    /// Set once the fetch for this mount has been requested.
    pub fetch_started: bool,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self {
            source,
            view: ViewState::Loading,
            fetch_started: false,
            status_message: String::from("Loading..."),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_post, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.view.is_loading());
        assert!(!app.fetch_started);
        assert_eq!(app.source_name(), "stub");
    }

    #[test]
    fn loading_exposes_no_posts_or_error() {
        let view = ViewState::default();
        assert!(view.is_loading());
        assert!(view.error().is_none());
        assert!(view.posts().is_empty());
        assert!(!view.is_settled());
    }

    #[test]
    fn failed_exposes_only_error() {
        let view = ViewState::Failed(FetchError::Status(500));
        assert!(!view.is_loading());
        assert_eq!(view.error(), Some(&FetchError::Status(500)));
        assert!(view.posts().is_empty());
    }

    #[test]
    fn loaded_empty_is_settled() {
        let view = ViewState::Loaded(Vec::new());
        assert!(view.is_settled());
        assert!(view.error().is_none());
        assert!(view.posts().is_empty());
    }

    #[test]
    fn loaded_keeps_order() {
        let posts = vec![sample_post(2, "b"), sample_post(1, "a")];
        let view = ViewState::Loaded(posts.clone());
        assert_eq!(view.posts(), posts.as_slice());
    }
}
