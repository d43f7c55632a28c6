pub mod layout;

mod add_card;
mod card;
mod categories;
mod confirm;
mod splash;

pub use add_card::draw_add_card;
pub use card::draw_study;
pub use categories::draw_categories;
pub use confirm::draw_clear_confirmation;
pub use layout::calculate_study_chunks;
pub use splash::draw_splash;
