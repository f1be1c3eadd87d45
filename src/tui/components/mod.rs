//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top line with the source and fetch status
//! - `StatusView`: centered loading / error / empty message
//! - `PostCard`: one post as a bordered card
//!
//! ## Stateful Components
//!
//! - `PostList`: scrollable card column with a layout cache keyed by post id
//!
//! Each component file holds its state types, rendering, event handling and
//! tests together. Components receive external data as props rather than
//! reading the `App` directly:
//!
//! ```rust,ignore
//! TitleBar::new(app.source_name(), &app.status_message, false).render(frame, area);
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod post_card;
pub mod post_list;
pub mod status_view;
pub use post_card::PostCard;
pub use post_list::{PostList, PostListState};
pub use status_view::StatusView;
