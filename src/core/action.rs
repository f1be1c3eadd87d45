//! # Actions
//!
//! Everything that can happen in sentiview becomes an `Action`.
//! The view mounts? That's `Action::Mount`.
//! The fetch settles? That's `Action::PostsFetched(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what I/O to perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{info, warn};

use crate::core::state::{App, ViewState};
use crate::feed::{FetchError, Post};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The view was displayed for the first time.
    Mount,
    /// The fetch for this mount finished.
    PostsFetched(Result<Vec<Post>, FetchError>),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start the one fetch for this mount.
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => {
            if app.fetch_started {
                warn!("Mount received twice, fetch already started");
                return Effect::None;
            }
            app.fetch_started = true;
            app.view = ViewState::Loading;
            app.status_message = String::from("Loading...");
            Effect::SpawnFetch
        }
        Action::PostsFetched(result) => {
            if app.view.is_settled() {
                warn!("Ignoring fetch result, view already settled");
                return Effect::None;
            }
            match result {
                Ok(posts) => {
                    info!("View loaded with {} posts", posts.len());
                    app.status_message = format!("{} posts", posts.len());
                    app.view = ViewState::Loaded(posts);
                }
                Err(err) => {
                    warn!("View failed: {}", err);
                    app.status_message = String::from("Fetch failed");
                    app.view = ViewState::Failed(err);
                }
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
