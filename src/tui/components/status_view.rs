//! # Status View Component
//!
//! A single centered message filling the main area. Used for every state that
//! is not a list of cards: loading, failure, and an empty feed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

pub const LOADING_TEXT: &str = "Loading Reddit sentiment data...";
pub const EMPTY_TEXT: &str = "No Reddit posts found. Run the collector to populate the database.";

#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub message: String,
    pub style: Style,
}

impl StatusView {
    pub fn loading() -> Self {
        Self {
            message: LOADING_TEXT.to_string(),
            style: Style::default().fg(Color::Yellow),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            message: format!("Error: {message}"),
            style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    pub fn empty() -> Self {
        Self {
            message: EMPTY_TEXT.to_string(),
            style: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Component for StatusView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.message.as_str())
            .style(self.style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        let height = (paragraph.line_count(area.width) as u16).min(area.height);
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FetchError;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_lines(view: &mut StatusView, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| view.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn loading_is_centered_vertically() {
        let lines = render_lines(&mut StatusView::loading(), 60, 5);
        assert!(lines[2].contains(LOADING_TEXT));
        assert!(lines[0].trim().is_empty());
    }

    #[test]
    fn error_includes_status_code() {
        let view = StatusView::error(&FetchError::Status(503).to_string());
        assert_eq!(view.message, "Error: HTTP error! status: 503");
        assert_eq!(view.style.fg, Some(Color::Red));
    }

    #[test]
    fn error_includes_transport_description() {
        let view = StatusView::error(&FetchError::Transport("connection refused".into()).to_string());
        assert_eq!(view.message, "Error: connection refused");
    }

    #[test]
    fn empty_message_wraps_on_narrow_terminal() {
        let lines = render_lines(&mut StatusView::empty(), 30, 10);
        let joined = lines.join(" ");
        assert!(joined.contains("No Reddit posts"));
        assert!(joined.contains("collector"));
    }
}
