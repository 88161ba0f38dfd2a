//! Editable buffer behind the helpdesk input field.

/// Maximum number of characters the input accepts.
const MAX_INPUT_CHARS: usize = 4096;

/// Single-line text buffer with a character-indexed cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageInputState {
    chars: Vec<char>,
    cursor: usize,
}

impl MessageInputState {
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Cursor position counted in characters.
    #[cfg(test)]
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Text left of the cursor, used to place the terminal cursor.
    pub fn text_before_cursor(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns false when the buffer is full and the character was dropped.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.chars.len() >= MAX_INPUT_CHARS {
            return false;
        }

        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
        true
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }

        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    pub fn delete_char_at(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }
}
