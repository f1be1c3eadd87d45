use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::feed::{Post, Tone, timestamp};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// One post rendered as a bordered card: title, sentiment label, creation time.
///
/// Like every per-item component here, `PostCard` is transient: it is built
/// fresh each frame from a borrowed `Post`. The card's border title carries
/// the post id, the key the list uses for identity.
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap` options that match `Paragraph` wrapping, so the list can
/// lay out its scroll canvas without rendering.
#[derive(Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    /// Already formatted creation time.
    pub created: String,
}

impl<'a> PostCard<'a> {
    /// Card with the creation time formatted in the local timezone.
    pub fn new(post: &'a Post) -> Self {
        Self {
            post,
            created: timestamp::format_local(&post.created_at),
        }
    }

    pub fn with_created(post: &'a Post, created: String) -> Self {
        Self { post, created }
    }

    /// Rows needed at `width`, borders included.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let sentiment = format!("Sentiment: {}", self.post.sentiment);
        let created = format!("Created: {}", self.created);
        let content_lines: u16 = [self.post.title.trim(), sentiment.as_str(), created.as_str()]
            .iter()
            .map(|text| (textwrap::wrap(text, &options).len() as u16).max(1))
            .sum();

        content_lines + VERTICAL_OVERHEAD
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let label_style = tone_style(self.post.tone()).add_modifier(Modifier::BOLD);
        vec![
            Line::from(Span::styled(
                self.post.title.trim(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("Sentiment: "),
                Span::styled(self.post.sentiment.as_str(), label_style),
            ]),
            Line::from(Span::styled(
                format!("Created: {}", self.created),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Positive => Style::default().fg(Color::Green),
        Tone::Negative => Style::default().fg(Color::Red),
        Tone::Neutral => Style::default().fg(Color::Yellow),
        Tone::Unknown => Style::default(),
    }
}

impl Widget for PostCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = tone_style(self.post.tone()).add_modifier(Modifier::DIM);
        let block = Block::bordered()
            .title(format!(" #{} ", self.post.id))
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        let lines = self.lines();
        block.render(area, buf);

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

impl Component for PostCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.clone(), area);
    }
}
