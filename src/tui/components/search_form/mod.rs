//! # SearchForm Component
//!
//! The three criteria fields plus the Search button.
//!
//! ## Responsibilities
//!
//! - Capture text for title, author and genre
//! - Move focus between fields (Tab/Shift+Tab, Up/Down)
//! - Emit `FormEvent::Submit` with a snapshot of the fields (Enter)
//!
//! ## State Management
//!
//! The buffers are internal state and survive a search, so the loading
//! overlay still shows what was asked for. `locked` is a prop: while a search
//! is running the form renders dimmed, hides the cursor and ignores input.

mod text_field;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::book::SearchCriteria;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use text_field::TextField;

/// Border (2) + padding (2) consumed horizontally by each field box
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Height of one bordered single-line field
const FIELD_HEIGHT: u16 = 3;
/// Widest the form gets on large terminals
const MAX_FORM_WIDTH: u16 = 64;

const HEADING: &str = "The Super Average and Improvised Book Search Engine";

/// Which element has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Author,
    Genre,
    SearchButton,
}

impl Focus {
    fn next(self) -> Focus {
        match self {
            Focus::Title => Focus::Author,
            Focus::Author => Focus::Genre,
            Focus::Genre => Focus::SearchButton,
            Focus::SearchButton => Focus::Title,
        }
    }

    fn prev(self) -> Focus {
        match self {
            Focus::Title => Focus::SearchButton,
            Focus::Author => Focus::Title,
            Focus::Genre => Focus::Author,
            Focus::SearchButton => Focus::Genre,
        }
    }
}

/// High-level events emitted by the SearchForm
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User pressed Enter: run a search with these fields
    Submit(SearchCriteria),
    /// User pressed Esc on the form
    Quit,
}

pub struct SearchForm {
    title: TextField,
    author: TextField,
    genre: TextField,
    pub focus: Focus,
    /// Locked while a search is running (Prop)
    pub locked: bool,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            title: TextField::new(),
            author: TextField::new(),
            genre: TextField::new(),
            focus: Focus::default(),
            locked: false,
        }
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria::new(
            self.title.buffer.clone(),
            self.author.buffer.clone(),
            self.genre.buffer.clone(),
        )
    }

    /// Empties all three fields and focuses Title.
    pub fn reset(&mut self) {
        self.title.clear();
        self.author.clear();
        self.genre.clear();
        self.focus = Focus::Title;
        self.locked = false;
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::Title => Some(&mut self.title),
            Focus::Author => Some(&mut self.author),
            Focus::Genre => Some(&mut self.genre),
            Focus::SearchButton => None,
        }
    }

    fn render_field(
        frame: &mut Frame,
        area: Rect,
        label: &str,
        field: &TextField,
        focused: bool,
        locked: bool,
    ) -> Option<Position> {
        let border_style = if locked {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Search {label} "))
            .title_style(border_style)
            .padding(Padding::horizontal(1));

        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let (visible, cursor_col) = field.visible_window(inner_width);
        let text_style = if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let inner = block.inner(area);
        frame.render_widget(
            Paragraph::new(visible.to_string())
                .style(text_style)
                .block(block),
            area,
        );

        (focused && !locked).then(|| Position::new(inner.x + cursor_col, inner.y))
    }
}

impl Component for SearchForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.min(MAX_FORM_WIDTH);
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);

        let [heading_area, _, title_area, author_area, genre_area, _, button_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .flex(Flex::Center)
            .areas(column);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                HEADING,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            heading_area,
        );

        let locked = self.locked;
        let cursor = [
            Self::render_field(
                frame,
                title_area,
                "Title",
                &self.title,
                self.focus == Focus::Title,
                locked,
            ),
            Self::render_field(
                frame,
                author_area,
                "Author",
                &self.author,
                self.focus == Focus::Author,
                locked,
            ),
            Self::render_field(
                frame,
                genre_area,
                "Genre",
                &self.genre,
                self.focus == Focus::Genre,
                locked,
            ),
        ]
        .into_iter()
        .flatten()
        .next();

        let button_style = if locked {
            Style::default().fg(Color::DarkGray)
        } else if self.focus == Focus::SearchButton {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(
            Paragraph::new(Span::styled("[ Search ]", button_style)).alignment(Alignment::Center),
            button_area,
        );

        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}

impl EventHandler for SearchForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.locked {
            return None;
        }

        match event {
            TuiEvent::Submit => return Some(FormEvent::Submit(self.criteria())),
            TuiEvent::Escape => return Some(FormEvent::Quit),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                return None;
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        // Typing while the button is focused goes back to the title field
        if self.focus == Focus::SearchButton
            && matches!(event, TuiEvent::InputChar(_) | TuiEvent::Paste(_))
        {
            self.focus = Focus::Title;
        }

        let field = self.focused_field()?;
        match event {
            TuiEvent::InputChar(c) => field.insert_char(*c),
            TuiEvent::Paste(text) => field.insert_str(text),
            TuiEvent::Backspace => {
                field.backspace();
            }
            TuiEvent::Delete => {
                field.delete();
            }
            TuiEvent::CursorLeft => field.move_left(),
            TuiEvent::CursorRight => field.move_right(),
            TuiEvent::Home => field.move_home(),
            TuiEvent::End => field.move_end(),
            _ => {}
        }
        None
    }
}
