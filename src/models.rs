use serde::{Deserialize, Serialize};

/// Sentinel the presentation layer uses for the "no filter" choice.
pub const SHOW_ALL: &str = "ShowAll";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: String,
}

impl Flashcard {
    pub fn new(question: &str, answer: &str, category: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// Map the UI sentinel to `All`, anything else to a category filter.
    pub fn parse(value: &str) -> Self {
        if value == SHOW_ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => card.category == *category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Cards",
            CategoryFilter::Category(category) => category,
        }
    }
}

/// What the clear confirmation popup is about to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearTarget {
    All,
    Category(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Splash,
    Study,
    AddCard,
    Categories,
    ConfirmClear(ClearTarget),
}

/// Which input field of the add-card dialog has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddCardField {
    #[default]
    Question,
    Answer,
    Category,
}

#[derive(Debug, Default)]
pub struct AddCardForm {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub focused: AddCardField,
    pub cursor_position: usize,
    pub hint: Option<String>,
}

impl AddCardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_text(&self) -> &str {
        match self.focused {
            AddCardField::Question => &self.question,
            AddCardField::Answer => &self.answer,
            AddCardField::Category => &self.category,
        }
    }

    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focused {
            AddCardField::Question => &mut self.question,
            AddCardField::Answer => &mut self.answer,
            AddCardField::Category => &mut self.category,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            AddCardField::Question => AddCardField::Answer,
            AddCardField::Answer => AddCardField::Category,
            AddCardField::Category => AddCardField::Question,
        };
        self.cursor_position = self.focused_text().len();
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor_position;
        self.focused_text_mut().insert(at, c);
        self.cursor_position = at + c.len_utf8();
    }

    pub fn backspace(&mut self) {
        let at = self.cursor_position;
        if at == 0 {
            return;
        }
        let text = self.focused_text_mut();
        // Step back one full character, not one byte.
        let prev_len = text[..at]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        text.remove(at - prev_len);
        self.cursor_position = at - prev_len;
    }

    pub fn move_cursor_left(&mut self) {
        let at = self.cursor_position;
        if at == 0 {
            return;
        }
        let prev_len = self.focused_text()[..at]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_position = at - prev_len;
    }

    pub fn move_cursor_right(&mut self) {
        let at = self.cursor_position;
        let text = self.focused_text();
        if at >= text.len() {
            return;
        }
        let next_len = text[at..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.cursor_position = at + next_len;
    }
}
