//! Single-line text buffer with a byte-offset cursor.
//!
//! Rendering needs display columns, not bytes, so the visible window is
//! computed with `unicode-width`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) struct TextField {
    pub buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl TextField {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            pos: 0,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pos = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.pos, c);
        self.pos += c.len_utf8();
    }

    /// Inserts pasted text on one line: newlines and tabs become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
            .collect();
        self.buffer.insert_str(self.pos, &flattened);
        self.pos += flattened.len();
    }

    pub fn backspace(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        let start = prev_char_boundary(&self.buffer, self.pos);
        self.buffer.drain(start..self.pos);
        self.pos = start;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.pos >= self.buffer.len() {
            return false;
        }
        let end = next_char_boundary(&self.buffer, self.pos);
        self.buffer.drain(self.pos..end);
        true
    }

    pub fn move_left(&mut self) {
        self.pos = prev_char_boundary(&self.buffer, self.pos);
    }

    pub fn move_right(&mut self) {
        if self.pos < self.buffer.len() {
            self.pos = next_char_boundary(&self.buffer, self.pos);
        }
    }

    pub fn move_home(&mut self) {
        self.pos = 0;
    }

    pub fn move_end(&mut self) {
        self.pos = self.buffer.len();
    }

    /// Returns the slice to show in a box `width` columns wide and the
    /// cursor column inside it. Scrolls so the cursor stays visible.
    pub fn visible_window(&self, width: u16) -> (&str, u16) {
        let width = width as usize;
        if width == 0 {
            return ("", 0);
        }

        let mut start = 0;
        // Leave one column for the cursor itself when it sits at the end.
        while self.buffer[start..self.pos].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }

        let cursor_col = self.buffer[start..self.pos].width() as u16;

        let mut end = start;
        let mut used = 0;
        for c in self.buffer[start..].chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end += c.len_utf8();
        }

        (&self.buffer[start..end], cursor_col)
    }
}
