//! Single-line text input field: buffer, cursor, placeholder.
//!
//! Pure data and editing operations, no terminal knowledge. The event
//! loop maps key presses to [`EditOp`]s; the rendering layer reads
//! `value()` and `cursor()` to draw the field and position the caret.
//!
//! The cursor is a char index, not a byte index — all edits go through
//! a char-boundary-safe byte offset so multi-byte input cannot panic.

// ============================================================================
// EDIT OPERATIONS
// ============================================================================

/// One editing operation on the input field.
///
/// Decoupled from raw key events so the transition layer stays
/// independent of crossterm key types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Jump to the start of the buffer.
    Home,
    /// Jump to the end of the buffer.
    End,
}

// ============================================================================
// INPUT FIELD
// ============================================================================

/// A single-line editable text buffer with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    value: String,
    /// Cursor position as a char index into `value`.
    cursor: usize,
    placeholder: &'static str,
}

impl InputField {
    /// Create an empty field with the given placeholder text.
    pub fn new(placeholder: &'static str) -> Self {
        InputField {
            value: String::new(),
            cursor: 0,
            placeholder,
        }
    }

    /// Current buffer contents.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Placeholder shown while the buffer is empty.
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Clear the buffer and reset the cursor.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Apply one editing operation.
    pub fn apply(&mut self, op: &EditOp) {
        match op {
            EditOp::Insert(c) => self.insert(*c),
            EditOp::Backspace => self.backspace(),
            EditOp::Delete => self.delete(),
            EditOp::Left => self.cursor = self.cursor.saturating_sub(1),
            EditOp::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            EditOp::Home => self.cursor = 0,
            EditOp::End => self.cursor = self.char_count(),
        }
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        let _ = self.value.remove(at);
        self.cursor -= 1;
    }

    fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        let _ = self.value.remove(at);
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the given char index (buffer length if past the end).
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

// ============================================================================
// TESTS
// ============================================================================
