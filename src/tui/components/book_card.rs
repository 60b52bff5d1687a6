use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::book::Book;
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders one search result:
///
/// ```text
/// ╭──────────────────────────────╮
/// │ Dune                         │
/// │ Authors: Frank Herbert       │
/// │ Genres: Fiction              │
/// ╰──────────────────────────────╯
/// ```
#[derive(Clone, Copy)]
pub struct BookCard<'a> {
    pub book: &'a Book,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a Book) -> Self {
        Self { book }
    }

    fn text_lines(book: &Book) -> [String; 3] {
        [
            book.title.clone(),
            format!("Authors: {}", book.authors_label()),
            format!("Genres: {}", book.genres_label()),
        ]
    }

    /// Predicts the rendered height at `width` without rendering.
    ///
    /// The textwrap options mirror Ratatui's `Paragraph` word wrapping so the
    /// parent list can size its scroll canvas up front.
    pub fn calculate_height(book: &Book, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let content_lines: usize = Self::text_lines(book)
            .iter()
            .map(|line| textwrap::wrap(line.trim(), &options).len().max(1))
            .sum();

        content_lines as u16 + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for BookCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, authors, genres] = Self::text_lines(self.book);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green).add_modifier(Modifier::DIM))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(authors, label)),
            Line::from(Span::styled(genres, label)),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

impl<'a> Component for BookCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn book(title: &str, authors: &[&str], genres: &[&str]) -> Book {
        Book {
            id: "1".to_string(),
            title: title.to_string(),
            authors: authors.iter().map(|s| s.to_string()).collect(),
            genres: genres.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_height_short_book() {
        let b = book("Dune", &["Frank Herbert"], &["Fiction"]);
        // 3 content lines + 2 borders
        assert_eq!(BookCard::calculate_height(&b, 80), 5);
    }

    #[test]
    fn test_height_wraps_long_title() {
        let b = book("one two three four five six", &["A"], &["B"]);
        // content width = 14 - 4 = 10: title wraps to 3 lines
        assert_eq!(BookCard::calculate_height(&b, 14), 3 + 1 + 1 + 2);
    }

    #[test]
    fn test_height_empty_title_keeps_a_row() {
        let b = book("", &["A"], &["B"]);
        assert_eq!(BookCard::calculate_height(&b, 80), 5);
    }

    #[test]
    fn test_height_degenerate_width() {
        let b = book("Dune", &["A"], &["B"]);
        assert_eq!(BookCard::calculate_height(&b, 3), 1);
    }

    #[test]
    fn test_render_shows_joined_lists() {
        let backend = TestBackend::new(60, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let b = book("Good Omens", &["Terry Pratchett", "Neil Gaiman"], &["Fantasy", "Humor"]);
        let mut card = BookCard::new(&b);

        terminal
            .draw(|f| Component::render(&mut card, f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Good Omens"));
        assert!(text.contains("Authors: Terry Pratchett, Neil Gaiman"));
        assert!(text.contains("Genres: Fantasy, Humor"));
    }
}
