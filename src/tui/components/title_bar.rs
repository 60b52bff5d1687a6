//! # TitleBar Component
//!
//! Top status line: app name, the current screen's heading and the status
//! message from core state.
//!
//! 1. **Status message**: `"koob | Search results | 3 books"`
//! 2. **Default**: `"koob | Search results"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Stateless top bar. All fields are props.
pub struct TitleBar {
    /// Heading for the active screen (e.g. "Search results")
    pub heading: String,
    /// Status message (e.g. "Searching...", "3 books")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(heading: String, status_message: String) -> Self {
        Self {
            heading,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("koob | {}", self.heading)
        } else {
            format!("koob | {} | {}", self.heading, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
