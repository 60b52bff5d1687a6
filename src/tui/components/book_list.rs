//! # BookList Component
//!
//! Scrollable result view.
//!
//! `BookList` is a transient component (created each frame) that wraps
//! `&'a mut BookListState` (persistent state) and the result slice (props).
//! Card heights are measured up front with [`BookCard::calculate_height`] so
//! the `ScrollView` canvas can be sized before anything is drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::book::Book;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::BookCard;
use crate::tui::event::TuiEvent;

pub const NO_RESULTS_TEXT: &str = "No books found.";

/// Scroll state for the result list.
/// Must be persisted in the parent TuiState.
pub struct BookListState {
    pub scroll_state: ScrollViewState,
    /// Card heights from the last render
    pub heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for BookListState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            heights: Vec::new(),
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let total: u16 = self.heights.iter().sum();
        let max_y = total.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Events emitted by the result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsEvent {
    Back,
}

/// EventHandler lives on `BookListState` because `BookList` is rebuilt every
/// frame and can't hold the scroll position.
impl EventHandler for BookListState {
    type Event = ResultsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('b') => {
                Some(ResultsEvent::Back)
            }
            TuiEvent::ScrollUp | TuiEvent::CursorUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown | TuiEvent::CursorDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::Home => {
                self.scroll_state.scroll_to_top();
                None
            }
            _ => None,
        }
    }
}

pub struct BookList<'a> {
    pub state: &'a mut BookListState,
    pub books: &'a [Book],
    /// Show the "No books found." notice instead of an empty canvas
    pub no_results: bool,
}

impl<'a> BookList<'a> {
    pub fn new(state: &'a mut BookListState, books: &'a [Book], no_results: bool) -> Self {
        Self {
            state,
            books,
            no_results,
        }
    }
}

impl<'a> Component for BookList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.books.is_empty() {
            self.state.heights.clear();
            if self.no_results {
                let [line] = Layout::vertical([Constraint::Length(1)])
                    .flex(Flex::Center)
                    .areas(area);
                let notice = Paragraph::new(NO_RESULTS_TEXT)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center);
                frame.render_widget(notice, line);
            }
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar

        self.state.heights = self
            .books
            .iter()
            .map(|book| BookCard::calculate_height(book, content_width))
            .collect();
        let total_height: u16 = self.state.heights.iter().sum();

        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (book, &height) in self.books.iter().zip(&self.state.heights) {
            let card_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(BookCard::new(book), card_rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
