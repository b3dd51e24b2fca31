/// Single-line text buffer with a cursor, used for both the new-task input
/// and the draft of an edit session.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Default, Clone)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replaces the content and puts the cursor at the end.
    pub fn set(&mut self, content: &str) {
        self.buffer = content.to_string();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor)
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let start = self.prev_boundary();
            self.buffer.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            let end = self.next_boundary();
            self.buffer.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Deletes trailing whitespace before the cursor and then the word before it.
    pub fn delete_word_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let before = self.buffer[..self.cursor].trim_end();
        let start = before
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());

        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_with(content: &str) -> LineEditor {
        let mut editor = LineEditor::new();
        editor.set(content);
        editor
    }

    #[test]
    fn test_set_puts_cursor_at_end() {
        let editor = line_with("Hello World");
        assert_eq!(editor.text(), "Hello World");
        assert_eq!(editor.cursor(), "Hello World".len());
    }

    #[test]
    fn test_clear() {
        let mut editor = line_with("Hello");
        editor.clear();
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut editor = line_with("Hello");
        editor.insert_char('!');
        assert_eq!(editor.text(), "Hello!");
        assert_eq!(editor.cursor(), 6);

        editor.backspace();
        editor.backspace();
        assert_eq!(editor.text(), "Hell");
        assert_eq!(editor.cursor(), 4);
    }

    #[test]
    fn test_delete_at_start() {
        let mut editor = line_with("Hello");
        editor.move_cursor_home();
        editor.delete();
        assert_eq!(editor.text(), "ello");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut editor = line_with("café");
        editor.move_cursor_left();
        assert_eq!(editor.cursor(), 3);
        editor.delete();
        assert_eq!(editor.text(), "caf");

        editor.insert_char('é');
        editor.insert_char('s');
        assert_eq!(editor.text(), "cafés");
        editor.move_cursor_left();
        editor.backspace();
        assert_eq!(editor.text(), "cafs");
        assert_eq!(editor.split_at_cursor(), ("caf", "s"));
    }

    #[test]
    fn test_cursor_movement_stops_at_edges() {
        let mut editor = line_with("Hi");
        editor.move_cursor_right();
        assert_eq!(editor.cursor(), 2);

        editor.move_cursor_left();
        editor.move_cursor_left();
        editor.move_cursor_left();
        assert_eq!(editor.cursor(), 0);

        editor.move_cursor_end();
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut editor = line_with("Hello world");
        editor.delete_word_backward();
        assert_eq!(editor.text(), "Hello ");
        assert_eq!(editor.cursor(), 6);

        editor.delete_word_backward();
        assert_eq!(editor.text(), "");
        assert_eq!(editor.cursor(), 0);

        let mut editor = line_with("foo bar baz");
        editor.move_cursor_home();
        for _ in 0..7 {
            editor.move_cursor_right();
        }
        editor.delete_word_backward();
        assert_eq!(editor.text(), "foo  baz");
        assert_eq!(editor.cursor(), 4);

        let mut editor = line_with("word   test");
        editor.delete_word_backward();
        assert_eq!(editor.text(), "word   ");

        editor.move_cursor_home();
        editor.delete_word_backward();
        assert_eq!(editor.text(), "word   ");
    }
}
