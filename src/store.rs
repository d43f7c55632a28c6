use crate::logger;
use crate::models::{CategoryFilter, Flashcard};
use crate::prefs::Storage;
use std::io;

/// Preference key the whole card list is persisted under.
pub const FLASHCARDS_KEY: &str = "flashcards_list";

/// Ordered flashcard collection with a cursor into the active category
/// view. Every mutation serializes the full list back through the storage
/// backend; there is no incremental persistence.
pub struct CardStore<S: Storage> {
    cards: Vec<Flashcard>,
    cursor: usize,
    filter: CategoryFilter,
    storage: S,
}

impl<S: Storage> CardStore<S> {
    /// Restore the card list from storage. A missing or malformed value is
    /// treated as an empty store, never an error.
    pub fn load(storage: S) -> Self {
        let cards: Vec<Flashcard> = match storage.get(FLASHCARDS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
                logger::log(&format!("discarding unreadable card list: {}", e));
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                logger::log(&format!("storage read failed: {}", e));
                Vec::new()
            }
        };

        Self {
            cards,
            cursor: 0,
            filter: CategoryFilter::All,
            storage,
        }
    }

    fn persist(&mut self) -> io::Result<()> {
        let json = serde_json::to_string(&self.cards)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.storage.put(FLASHCARDS_KEY, &json)
    }

    /// Keep the cursor inside the active view. Empty view pins it at 0.
    fn clamp_cursor(&mut self) {
        let len = self.view().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Append a card and persist. A blank question or answer is a
    /// validation failure, not an error: the store is left untouched and
    /// `Ok(false)` is returned.
    pub fn add(&mut self, question: &str, answer: &str, category: &str) -> io::Result<bool> {
        if question.trim().is_empty() || answer.trim().is_empty() {
            return Ok(false);
        }

        self.cards.push(Flashcard::new(question, answer, category));
        self.persist()?;
        Ok(true)
    }

    pub fn clear_all(&mut self) -> io::Result<()> {
        self.cards.clear();
        self.cursor = 0;
        self.filter = CategoryFilter::All;
        self.persist()
    }

    /// Remove every card in the given category and persist. The cursor is
    /// clamped back into the surviving view.
    pub fn clear_category(&mut self, category: &str) -> io::Result<()> {
        self.cards.retain(|card| card.category != category);
        self.clamp_cursor();
        self.persist()
    }

    /// Distinct categories in first-seen order across all cards.
    pub fn list_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for card in &self.cards {
            if !categories.contains(&card.category) {
                categories.push(card.category.clone());
            }
        }
        categories
    }

    /// Cards matching the filter, preserving insertion order.
    pub fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&Flashcard> {
        self.cards
            .iter()
            .filter(|card| filter.matches(card))
            .collect()
    }

    /// Switch the active view. The cursor restarts at the first card of
    /// the new view.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.cursor = 0;
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn view(&self) -> Vec<&Flashcard> {
        self.filter_by_category(&self.filter)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the cursor can still move forward in the active view.
    pub fn has_next(&self) -> bool {
        let len = self.view().len();
        len > 0 && self.cursor < len - 1
    }

    /// Move to the next card in the active view. Returns the new cursor
    /// index, or `None` at the end of the view (cursor unchanged).
    pub fn advance(&mut self) -> Option<usize> {
        if self.has_next() {
            self.cursor += 1;
            Some(self.cursor)
        } else {
            None
        }
    }

    /// The card at the cursor within the active view, `None` when the
    /// view is empty.
    pub fn current(&self) -> Option<&Flashcard> {
        self.view().get(self.cursor).copied()
    }
}
