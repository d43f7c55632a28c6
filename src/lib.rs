pub mod logger;
pub mod models;
pub mod prefs;
pub mod session;
pub mod store;
pub mod timer;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use models::{AppState, CategoryFilter, ClearTarget, Flashcard, SHOW_ALL};
pub use prefs::{MemPrefs, Prefs, Storage, default_prefs_path};
pub use session::{App, handle_key};
pub use store::{CardStore, FLASHCARDS_KEY};
pub use timer::Delay;
pub use ui::{draw_add_card, draw_categories, draw_clear_confirmation, draw_splash, draw_study};
