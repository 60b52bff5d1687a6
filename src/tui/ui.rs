use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BookList, LoadingOverlay, TitleBar};

fn heading(screen: Screen) -> &'static str {
    match screen {
        Screen::Searching | Screen::Loading => "Search",
        Screen::Results => "Search results",
    }
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Searching => " Tab next field · Enter search · Esc quit",
        Screen::Loading => " Ctrl+C quit",
        Screen::Results => " Esc/b back · ↑↓ PgUp PgDn scroll · Ctrl+C quit",
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(heading(app.screen).to_string(), app.status_message.clone())
        .render(frame, title_area);

    match app.screen {
        Screen::Searching | Screen::Loading => {
            tui.search_form.locked = app.is_loading();
            tui.search_form.render(frame, main_area);
            if app.is_loading() {
                LoadingOverlay::new(spinner_frame).render(frame, main_area);
            }
        }
        Screen::Results => {
            BookList::new(&mut tui.book_list, &app.books, app.shows_no_results())
                .render(frame, main_area);
        }
    }

    frame.render_widget(
        Span::styled(key_hints(app.screen), Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}
