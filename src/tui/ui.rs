use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, ViewState};
use crate::feed::Post;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{PostList, StatusView, TitleBar};

pub const HEADER_TEXT: &str = "Reddit Sentiment Analysis";

/// Which of the renderings a view state maps to.
#[derive(Debug, PartialEq)]
pub enum Screen<'a> {
    Loading,
    Error(String),
    Empty,
    Cards(&'a [Post]),
}

impl<'a> Screen<'a> {
    pub fn for_view(view: &'a ViewState) -> Self {
        match view {
            ViewState::Loading => Screen::Loading,
            ViewState::Failed(err) => Screen::Error(err.to_string()),
            ViewState::Loaded(posts) if posts.is_empty() => Screen::Empty,
            ViewState::Loaded(posts) => Screen::Cards(posts),
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    match Screen::for_view(&app.view) {
        Screen::Loading => StatusView::loading().render(frame, main_area),
        Screen::Error(message) => StatusView::error(&message).render(frame, main_area),
        Screen::Empty => {
            let body_area = draw_header(frame, main_area);
            StatusView::empty().render(frame, body_area);
        }
        Screen::Cards(posts) => {
            let body_area = draw_header(frame, main_area);
            PostList::new(&mut tui.post_list, posts).render(frame, body_area);
        }
    }

    let has_unseen_content =
        !app.view.posts().is_empty() && tui.post_list.has_unseen_content;
    TitleBar::new(app.source_name(), &app.status_message, has_unseen_content)
        .render(frame, title_area);
}

/// Draws the header at the top of `area` and returns the space below it.
fn draw_header(frame: &mut Frame, area: Rect) -> Rect {
    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    let header = Paragraph::new(HEADER_TEXT)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(header, header_area);
    body_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FetchError;
    use crate::test_support::{sample_post, test_app};
    use crate::tui::components::status_view::{EMPTY_TEXT, LOADING_TEXT};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..30)
            .map(|y| (0..100).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn screen_for_each_state() {
        assert_eq!(Screen::for_view(&ViewState::Loading), Screen::Loading);
        assert_eq!(
            Screen::for_view(&ViewState::Failed(FetchError::Status(500))),
            Screen::Error("HTTP error! status: 500".to_string())
        );
        assert_eq!(Screen::for_view(&ViewState::Loaded(vec![])), Screen::Empty);
        let posts = vec![sample_post(1, "a")];
        let view = ViewState::Loaded(posts.clone());
        assert_eq!(Screen::for_view(&view), Screen::Cards(&posts));
    }

    #[test]
    fn loading_shows_only_placeholder() {
        let app = test_app();
        let text = draw(&app);
        assert!(text.contains(LOADING_TEXT));
        assert!(!text.contains(HEADER_TEXT));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn failure_shows_message() {
        let mut app = test_app();
        app.view = ViewState::Failed(FetchError::Status(500));
        let text = draw(&app);
        assert!(text.contains("Error: HTTP error! status: 500"));
        assert!(!text.contains(LOADING_TEXT));
    }

    #[test]
    fn empty_shows_no_data_under_header() {
        let mut app = test_app();
        app.view = ViewState::Loaded(Vec::new());
        let text = draw(&app);
        assert!(text.contains(HEADER_TEXT));
        assert!(text.contains(EMPTY_TEXT));
        assert!(!text.contains(LOADING_TEXT));
    }

    #[test]
    fn loaded_shows_cards() {
        let mut app = test_app();
        app.view = ViewState::Loaded(vec![sample_post(1, "First"), sample_post(2, "Second")]);
        let text = draw(&app);
        assert!(text.contains(HEADER_TEXT));
        assert!(text.contains("First"));
        assert!(text.contains("Second"));
        assert!(!text.contains(EMPTY_TEXT));
    }
}
