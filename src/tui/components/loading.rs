//! # Loading Overlay
//!
//! Centered spinner box drawn over the locked search form while a search is
//! in flight. Follows the overlay pattern: `Clear` the rect, then draw.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const OVERLAY_WIDTH: u16 = 36;
const OVERLAY_HEIGHT: u16 = 5;

pub struct LoadingOverlay {
    spinner_frame: usize,
}

impl LoadingOverlay {
    pub fn new(spinner_frame: usize) -> Self {
        Self { spinner_frame }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

impl Component for LoadingOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(OVERLAY_WIDTH, OVERLAY_HEIGHT, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));

        let lines = vec![
            Line::default(),
            Line::from(vec![
                Span::styled(self.spinner(), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(
                    "Searching the shelves...",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, overlay);
    }
}

/// A rect of at most `width` x `height`, centered in `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(outer.width)),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}
