//! # PostList Component
//!
//! Scrollable column of [`PostCard`]s, in the order the server returned them.
//!
//! ## Architecture
//!
//! `PostList` is a transient component (created each frame) that wraps
//! `&'a mut PostListState` (persistent state) and the post slice (props).
//!
//! Card heights are cached in a [`LayoutCache`] keyed by the ordered list of
//! post ids plus the content width. Same ids in the same order at the same
//! width means the cached heights are still right; anything else rebuilds.
//!
//! ## Windowed Rendering
//!
//! Row positions are `usize`, so a feed may be taller than a `u16` canvas.
//! Each frame only the cards in [`LayoutCache::visible_range`] are drawn, into
//! a `ScrollView` sized to that window. The scrollbar is drawn separately
//! against the full content height.

use std::collections::HashSet;
use std::ops::Range;

use log::{debug, warn};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::feed::{Post, PostId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::post_card::PostCard;
use crate::tui::event::TuiEvent;

/// Scroll and layout state for the post list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct PostListState {
    /// Content row shown at the top of the viewport
    pub scroll_offset: usize,
    pub layout: LayoutCache,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// True when cards extend below the viewport
    pub has_unseen_content: bool,
}

impl PostListState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_scroll(&self) -> usize {
        self.layout
            .total_height()
            .saturating_sub(usize::from(self.viewport_height))
    }

    fn page(&self) -> usize {
        usize::from(self.viewport_height.max(1))
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }
}

impl EventHandler for PostListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        self.scroll_offset = match event {
            TuiEvent::ScrollUp => self.scroll_offset.saturating_sub(1),
            TuiEvent::ScrollDown => self.scroll_offset.saturating_add(1),
            TuiEvent::ScrollPageUp => self.scroll_offset.saturating_sub(self.page()),
            TuiEvent::ScrollPageDown => self.scroll_offset.saturating_add(self.page()),
            TuiEvent::ScrollToTop => 0,
            TuiEvent::ScrollToBottom => self.max_scroll(),
            _ => return None,
        };
        self.clamp_scroll();
        None
    }
}

/// Cached card heights, valid for one id sequence at one width.
#[derive(Default)]
pub struct LayoutCache {
    pub keys: Vec<PostId>,
    pub heights: Vec<u16>,
    /// Running total of `heights`: entry `i` is the row just below card `i`
    pub prefix_heights: Vec<usize>,
    content_width: u16,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid_for(&self, posts: &[Post], content_width: u16) -> bool {
        self.content_width == content_width
            && self.keys.len() == posts.len()
            && self.keys.iter().zip(posts).all(|(key, post)| *key == post.id)
    }

    /// Measure every post at `content_width`.
    pub fn rebuild(&mut self, posts: &[Post], content_width: u16) {
        debug!("Rebuilding post layout: {} cards at width {}", posts.len(), content_width);
        self.keys = posts.iter().map(|post| post.id.clone()).collect();
        self.heights = posts
            .iter()
            .map(|post| PostCard::new(post).calculate_height(content_width))
            .collect();
        self.content_width = content_width;
        self.rebuild_prefix_heights();

        let mut seen = HashSet::new();
        for key in &self.keys {
            if !seen.insert(key) {
                warn!("Duplicate post id {} in feed", key);
            }
        }
    }

    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0usize, |acc, &h| {
                *acc += usize::from(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total_height(&self) -> usize {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Content row at which card `index` starts.
    pub fn row_start(&self, index: usize) -> usize {
        match index {
            0 => 0,
            i => self.prefix_heights[i - 1],
        }
    }

    /// Indices of cards that overlap the viewport, padded by half a screen
    /// on each side.
    pub fn visible_range(&self, scroll_offset: usize, viewport_height: u16) -> Range<usize> {
        let viewport_height = usize::from(viewport_height);
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}

/// Scrollable post column.
/// Created fresh each frame with references to state and data.
pub struct PostList<'a> {
    pub state: &'a mut PostListState,
    pub posts: &'a [Post],
}

impl<'a> PostList<'a> {
    pub fn new(state: &'a mut PostListState, posts: &'a [Post]) -> Self {
        Self { state, posts }
    }
}

impl Component for PostList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, scrollbar_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let content_width = list_area.width;

        if !self.state.layout.is_valid_for(self.posts, content_width) {
            self.state.layout.rebuild(self.posts, content_width);
        }

        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let layout = &self.state.layout;
        let scroll_offset = self.state.scroll_offset;
        let visible_range = layout.visible_range(scroll_offset, area.height);
        let window_top = layout.row_start(visible_range.start);
        let window_bottom = layout.row_start(visible_range.end);
        let window_height = u16::try_from(window_bottom - window_top).unwrap_or(u16::MAX);

        let mut window = ScrollView::new(Size::new(content_width, window_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        let posts = &self.posts[visible_range.clone()];
        for (post, &height) in posts.iter().zip(&layout.heights[visible_range]) {
            let card_rect = Rect::new(0, y_offset, content_width, height);
            window.render_widget(PostCard::new(post), card_rect);
            y_offset = y_offset.saturating_add(height);
        }

        let mut window_state = ScrollViewState::default();
        window_state.set_offset(Position {
            x: 0,
            y: u16::try_from(scroll_offset - window_top).unwrap_or(u16::MAX),
        });
        frame.render_stateful_widget(window, list_area, &mut window_state);

        let max_scroll = self.state.max_scroll();
        if max_scroll > 0 {
            let mut scrollbar_state = ScrollbarState::new(max_scroll)
                .position(scroll_offset)
                .viewport_content_length(usize::from(area.height));
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                scrollbar_area,
                &mut scrollbar_state,
            );
        }

        self.state.has_unseen_content = scroll_offset < max_scroll;
    }
}
