/// A text input field with encapsulated state.
///
/// Wraps the text and cursor position, providing a cleaner API for
/// managing text input in forms. Cursor positions are in characters, not
/// bytes, so multi-byte input behaves correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the trimmed text.
    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Clear the text and reset cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let byte_idx = self.byte_index(self.cursor - 1);
        self.text.remove(byte_idx);
        self.cursor -= 1;
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let byte_idx = self.byte_index(self.cursor);
        self.text.remove(byte_idx);
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        let len = self.text.chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the text.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the text.
    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Byte index of the given character position.
    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map_or(self.text.len(), |(idx, _)| idx)
    }
}
