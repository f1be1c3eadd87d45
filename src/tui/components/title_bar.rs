//! # TitleBar Component
//!
//! Top status bar: where the posts come from and how the fetch went.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.source_name(), &app.status_message, tui.has_unseen_content);
//! title_bar.render(frame, area);
//! ```
//!
//! The text changes based on state:
//!
//! 1. **Unseen content**: `"sentiview (http://…) | 12 posts | ↓ More"`
//! 2. **Status message**: `"sentiview (http://…) | Loading..."`
//! 3. **Default**: `"sentiview (http://…)"`
//!
//! When the line is wider than the terminal it is cut on a character
//! boundary and ends in `…`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct TitleBar<'a> {
    /// Where posts are fetched from
    pub source_name: &'a str,
    /// Status message (e.g., "Loading...", "12 posts")
    pub status_message: &'a str,
    /// Whether there are cards below the current scroll position
    pub has_unseen_content: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(source_name: &'a str, status_message: &'a str, has_unseen_content: bool) -> Self {
        Self {
            source_name,
            status_message,
            has_unseen_content,
        }
    }

    pub fn text(&self) -> String {
        let base = format!("sentiview ({})", self.source_name);
        match (self.status_message.is_empty(), self.has_unseen_content) {
            (true, false) => base,
            (true, true) => format!("{base} | ↓ More"),
            (false, false) => format!("{base} | {}", self.status_message),
            (false, true) => format!("{base} | {} | ↓ More", self.status_message),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = fit_to_width(&self.text(), area.width as usize);
        frame.render_widget(Span::raw(text), area);
    }
}

/// Cut `text` to at most `width` display columns, marking the cut with `…`.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
