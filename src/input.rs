//! Editable text field state.

use unicode_width::UnicodeWidthChar;

/// A single-line text field with a movable cursor.
#[derive(Debug, Default)]
pub struct InputField {
    value: String,
    /// Cursor position as a char index into `value`.
    cursor: usize,
}

impl InputField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field pre-filled with `text`, cursor at the end.
    pub fn with_value(text: impl Into<String>) -> Self {
        let value = text.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Get the current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_value(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.cursor = self.value.chars().count();
    }

    /// Clear the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index();
        self.value.insert(index, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.value.remove(index);
    }

    /// Remove the character at the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.chars().count() {
            let index = self.byte_index();
            self.value.remove(index);
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the field.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the field.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> u16 {
        let width: usize = self
            .value
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        width.min(u16::MAX as usize) as u16
    }

    /// Horizontal scroll needed to keep the cursor inside `width` columns.
    pub fn scroll_offset(&self, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let column = self.cursor_column();
        if column < width {
            0
        } else {
            column + 1 - width
        }
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.value.len())
    }
}
