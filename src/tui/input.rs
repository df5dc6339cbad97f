//! Single-line text input with a character limit and placeholder.

/// A one-line input field.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    char_limit: usize,
    placeholder: String,
}

impl TextInput {
    /// Create an empty input holding at most `char_limit` characters.
    pub fn new(placeholder: &str, char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
            placeholder: placeholder.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor. Ignored once the limit is reached.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() || self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let input = TextInput::new("E", 5);
        assert!(input.is_empty());
        assert_eq!(input.placeholder(), "E");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn insert_respects_limit() {
        let mut input = TextInput::new("E", 5);
        for c in "C#/Db/X".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value(), "C#/Db");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn control_chars_ignored() {
        let mut input = TextInput::new("", 5);
        input.insert_char('\n');
        input.insert_char('\t');
        assert!(input.is_empty());
    }

    #[test]
    fn insert_mid_value() {
        let mut input = TextInput::new("", 5);
        input.insert_char('C');
        input.insert_char('b');
        input.move_left();
        input.insert_char('#');
        assert_eq!(input.value(), "C#b");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_and_delete() {
        let mut input = TextInput::new("", 5);
        for c in "ABC".chars() {
            input.insert_char(c);
        }
        input.backspace();
        assert_eq!(input.value(), "AB");
        input.home();
        input.delete();
        assert_eq!(input.value(), "B");
        input.backspace(); // at start, no-op
        assert_eq!(input.value(), "B");
    }

    #[test]
    fn cursor_bounds() {
        let mut input = TextInput::new("", 5);
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.insert_char('G');
        input.move_right();
        assert_eq!(input.cursor(), 1);
        input.home();
        assert_eq!(input.cursor(), 0);
        input.end();
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn multibyte_chars() {
        let mut input = TextInput::new("", 5);
        input.insert_char('♯');
        input.insert_char('F');
        input.home();
        input.delete();
        assert_eq!(input.value(), "F");
    }
}
