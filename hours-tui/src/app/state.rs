/// Which panel receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Search,
    History,
    Today,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Form => Focus::Search,
            Focus::Search => Focus::History,
            Focus::History => Focus::Today,
            Focus::Today => Focus::Form,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Form => Focus::Today,
            Focus::Search => Focus::Form,
            Focus::History => Focus::Search,
            Focus::Today => Focus::History,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    StartHour,
    StartMinute,
    EndHour,
    EndMinute,
    Note,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Date,
        FormField::StartHour,
        FormField::StartMinute,
        FormField::EndHour,
        FormField::EndMinute,
        FormField::Note,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_start(self) -> bool {
        matches!(self, FormField::StartHour | FormField::StartMinute)
    }
}

/// A text input with mid-string cursor support and an optional length cap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
    limit: Option<usize>,
}

impl TextInput {
    /// Input holding at most `limit` characters.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Replace the value, keeping the length cap, and move the cursor to the end.
    pub fn set(&mut self, s: &str) {
        self.value = match self.limit {
            Some(limit) => s.chars().take(limit).collect(),
            None => s.to_string(),
        };
        self.cursor = self.value.len();
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Insert a character at the cursor position. Returns false when full.
    pub fn insert(&mut self, c: char) -> bool {
        if self
            .limit
            .is_some_and(|limit| self.value.chars().count() >= limit)
        {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos - 1;
        while !self.value.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}
