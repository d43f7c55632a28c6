use crate::logger;
use crate::models::{AddCardForm, AppState, CategoryFilter, ClearTarget};
use crate::prefs::Storage;
use crate::store::CardStore;
use crate::timer::Delay;
use crossterm::event::{KeyCode, KeyEvent};
use std::io;
use std::time::{Duration, Instant};

pub const SPLASH_DURATION: Duration = Duration::from_secs(3);
pub const FLIP_DURATION: Duration = Duration::from_millis(500);

pub struct App<S: Storage> {
    pub store: CardStore<S>,
    pub state: AppState,
    pub flipped: bool,
    pub notice: Option<String>,
    pub splash_delay: Delay,
    pub flip_delay: Delay,
    pub form: AddCardForm,
    pub selected_category: usize,
    pub should_quit: bool,
}

impl<S: Storage> App<S> {
    pub fn new(store: CardStore<S>) -> Self {
        let mut splash_delay = Delay::idle();
        splash_delay.start(SPLASH_DURATION);

        Self {
            store,
            state: AppState::Splash,
            flipped: false,
            notice: None,
            splash_delay,
            flip_delay: Delay::idle(),
            form: AddCardForm::new(),
            selected_category: 0,
            should_quit: false,
        }
    }

    /// Soonest pending deadline, used as the event poll timeout.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        match (self.splash_delay.remaining(now), self.flip_delay.remaining(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }

    /// Run deferred transitions whose deadline has passed.
    pub fn on_tick(&mut self, now: Instant) {
        if self.splash_delay.fire(now) && self.state == AppState::Splash {
            self.state = AppState::Study;
        }
        if self.flip_delay.fire(now) && self.state == AppState::Study {
            self.finish_card_transition();
        }
    }

    fn finish_card_transition(&mut self) {
        if self.store.advance().is_some() {
            self.flipped = false;
        }
    }

    pub fn flip_card(&mut self) {
        if self.store.current().is_some() {
            self.flipped = !self.flipped;
            self.notice = None;
        }
    }

    /// Start the flip transition towards the next card, or report
    /// end-of-sequence without moving the cursor.
    pub fn show_next_card(&mut self) {
        if self.store.has_next() {
            self.notice = None;
            self.flip_delay.start(FLIP_DURATION);
        } else {
            logger::log("no more flashcards to show");
            self.notice = Some("No more cards to show".to_string());
        }
    }

    /// Entries for the category picker: the show-all sentinel first, then
    /// every category in first-seen order.
    pub fn category_choices(&self) -> Vec<String> {
        let mut choices = vec!["Show All".to_string()];
        choices.extend(self.store.list_categories());
        choices
    }

    fn leave_study(&mut self, state: AppState) {
        // A pending card transition dies with the view it was started in.
        self.flip_delay.cancel();
        self.notice = None;
        self.state = state;
    }
}

pub fn handle_key<S: Storage>(app: &mut App<S>, key: KeyEvent) -> io::Result<()> {
    match app.state.clone() {
        AppState::Splash => {
            // Any key skips the splash screen.
            app.splash_delay.cancel();
            app.state = AppState::Study;
            Ok(())
        }
        AppState::Study => handle_study_input(app, key),
        AppState::AddCard => handle_add_card_input(app, key),
        AppState::Categories => handle_categories_input(app, key),
        AppState::ConfirmClear(target) => handle_confirm_input(app, key, target),
    }
}

fn handle_study_input<S: Storage>(app: &mut App<S>, key: KeyEvent) -> io::Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('f') | KeyCode::Char(' ') => {
            app.flip_card();
        }
        KeyCode::Char('n') | KeyCode::Enter => {
            app.show_next_card();
        }
        KeyCode::Char('a') => {
            app.form = AddCardForm::new();
            app.leave_study(AppState::AddCard);
        }
        KeyCode::Char('c') => {
            app.selected_category = 0;
            app.leave_study(AppState::Categories);
        }
        KeyCode::Char('x') => {
            app.leave_study(AppState::ConfirmClear(ClearTarget::All));
        }
        _ => {}
    }
    Ok(())
}

fn handle_add_card_input<S: Storage>(app: &mut App<S>, key: KeyEvent) -> io::Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Study;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
        }
        KeyCode::Enter => {
            let added = app
                .store
                .add(&app.form.question, &app.form.answer, &app.form.category)?;
            if added {
                logger::log(&format!(
                    "added card in category '{}'",
                    app.form.category.trim()
                ));
                app.state = AppState::Study;
            } else {
                app.form.hint = Some("Question and answer are required".to_string());
            }
        }
        KeyCode::Backspace => {
            app.form.backspace();
        }
        KeyCode::Left => {
            app.form.move_cursor_left();
        }
        KeyCode::Right => {
            app.form.move_cursor_right();
        }
        KeyCode::Char(c) => {
            app.form.insert_char(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_categories_input<S: Storage>(app: &mut App<S>, key: KeyEvent) -> io::Result<()> {
    let choices = app.category_choices();
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Study;
        }
        KeyCode::Up => {
            if app.selected_category > 0 {
                app.selected_category -= 1;
            }
        }
        KeyCode::Down => {
            if app.selected_category < choices.len().saturating_sub(1) {
                app.selected_category += 1;
            }
        }
        KeyCode::Enter => {
            let filter = if app.selected_category == 0 {
                CategoryFilter::All
            } else {
                CategoryFilter::Category(choices[app.selected_category].clone())
            };
            app.store.set_filter(filter);
            app.flipped = false;
            app.state = AppState::Study;
        }
        KeyCode::Char('d') => {
            // The show-all entry is not deletable.
            if app.selected_category > 0 {
                let category = choices[app.selected_category].clone();
                app.state = AppState::ConfirmClear(ClearTarget::Category(category));
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input<S: Storage>(
    app: &mut App<S>,
    key: KeyEvent,
    target: ClearTarget,
) -> io::Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match &target {
                ClearTarget::All => {
                    app.store.clear_all()?;
                    logger::log("cleared all flashcards");
                }
                ClearTarget::Category(category) => {
                    app.store.clear_category(category)?;
                    logger::log(&format!("cleared category '{}'", category));
                    // The highlighted entry may no longer exist.
                    app.selected_category = 0;
                }
            }
            app.flipped = false;
            app.state = AppState::Study;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.state = match target {
                ClearTarget::All => AppState::Study,
                ClearTarget::Category(_) => AppState::Categories,
            };
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemPrefs;

    fn app_with(cards: &[(&str, &str, &str)]) -> App<MemPrefs> {
        let mut store = CardStore::load(MemPrefs::new());
        for (q, a, c) in cards {
            store.add(q, a, c).unwrap();
        }
        let mut app = App::new(store);
        app.state = AppState::Study;
        app.splash_delay.cancel();
        app
    }

    fn press<S: Storage>(app: &mut App<S>, code: KeyCode) {
        handle_key(app, KeyEvent::from(code)).unwrap();
    }

    #[test]
    fn test_any_key_skips_splash() {
        let mut store = CardStore::load(MemPrefs::new());
        store.add("Q", "A", "").unwrap();
        let mut app = App::new(store);
        assert_eq!(app.state, AppState::Splash);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.state, AppState::Study);
        assert!(!app.splash_delay.is_pending());
    }

    #[test]
    fn test_splash_auto_transition() {
        let mut app = app_with(&[]);
        app.state = AppState::Splash;
        app.splash_delay.start(Duration::from_secs(3));

        let now = Instant::now();
        app.on_tick(now);
        assert_eq!(app.state, AppState::Splash);

        app.on_tick(now + Duration::from_secs(4));
        assert_eq!(app.state, AppState::Study);
    }

    #[test]
    fn test_flip_toggles_only_with_a_card() {
        let mut app = app_with(&[("Q", "A", "Math")]);
        press(&mut app, KeyCode::Char('f'));
        assert!(app.flipped);
        press(&mut app, KeyCode::Char('f'));
        assert!(!app.flipped);

        let mut empty = app_with(&[]);
        press(&mut empty, KeyCode::Char('f'));
        assert!(!empty.flipped);
    }

    #[test]
    fn test_next_card_waits_for_flip_delay() {
        let mut app = app_with(&[("Q1", "A1", ""), ("Q2", "A2", "")]);
        app.flipped = true;

        press(&mut app, KeyCode::Char('n'));
        assert!(app.flip_delay.is_pending());
        assert_eq!(app.store.cursor(), 0);

        app.on_tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(app.store.cursor(), 1);
        assert!(!app.flipped);
    }

    #[test]
    fn test_next_at_end_shows_notice() {
        let mut app = app_with(&[("Q1", "A1", "")]);
        press(&mut app, KeyCode::Char('n'));

        assert!(!app.flip_delay.is_pending());
        assert_eq!(app.store.cursor(), 0);
        assert!(app.notice.is_some());
    }

    #[test]
    fn test_leaving_study_cancels_pending_transition() {
        let mut app = app_with(&[("Q1", "A1", ""), ("Q2", "A2", "")]);
        press(&mut app, KeyCode::Char('n'));
        assert!(app.flip_delay.is_pending());

        press(&mut app, KeyCode::Char('a'));
        assert!(!app.flip_delay.is_pending());
        assert_eq!(app.store.cursor(), 0);
    }

    #[test]
    fn test_add_dialog_saves_card() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state, AppState::AddCard);

        for c in "Q1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "A1".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        for c in "Math".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Study);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.current().unwrap().category, "Math");
    }

    #[test]
    fn test_add_dialog_rejects_blank_answer() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('a'));
        for c in "Question".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::AddCard);
        assert_eq!(app.store.len(), 0);
        assert!(app.form.hint.is_some());
    }

    #[test]
    fn test_add_dialog_cancel_discards() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('a'));
        for c in "Q".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.state, AppState::Study);
        assert_eq!(app.store.len(), 0);
    }

    #[test]
    fn test_category_picker_applies_filter() {
        let mut app = app_with(&[("Q1", "A1", "Math"), ("Q2", "A2", "Science")]);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.state, AppState::Categories);
        assert_eq!(app.category_choices(), vec!["Show All", "Math", "Science"]);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Study);
        assert_eq!(app.store.view().len(), 1);
        assert_eq!(app.store.current().unwrap().question, "Q2");
    }

    #[test]
    fn test_category_picker_show_all() {
        let mut app = app_with(&[("Q1", "A1", "Math")]);
        app.store
            .set_filter(CategoryFilter::Category("Math".to_string()));

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(*app.store.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_delete_category_needs_confirmation() {
        let mut app = app_with(&[("Q1", "A1", "Math"), ("Q2", "A2", "Science")]);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.state,
            AppState::ConfirmClear(ClearTarget::Category("Math".to_string()))
        );

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Categories);
        assert_eq!(app.store.len(), 2);

        // Still highlighting "Math"; this time confirm.
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state, AppState::Study);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.current().unwrap().category, "Science");
    }

    #[test]
    fn test_empty_category_keeps_raw_value_in_picker() {
        // The picker shows a placeholder label for the empty category,
        // but filter and delete must still target the raw value.
        let mut app = app_with(&[("Q1", "A1", ""), ("Q2", "A2", "Math")]);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.category_choices(), vec!["Show All", "", "Math"]);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            *app.store.filter(),
            CategoryFilter::Category(String::new())
        );
        assert_eq!(app.store.current().unwrap().question, "Q1");

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.state,
            AppState::ConfirmClear(ClearTarget::Category(String::new()))
        );
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.len(), 1);
        // The active filter still targets the deleted category, so the
        // view is empty while the Math card survives.
        assert!(app.store.current().is_none());
        let all = app.store.filter_by_category(&CategoryFilter::All);
        assert_eq!(all[0].question, "Q2");
    }

    #[test]
    fn test_show_all_entry_is_not_deletable() {
        let mut app = app_with(&[("Q1", "A1", "Math")]);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state, AppState::Categories);
    }

    #[test]
    fn test_clear_all_flow() {
        let mut app = app_with(&[("Q1", "A1", "Math"), ("Q2", "A2", "Science")]);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state, AppState::ConfirmClear(ClearTarget::All));

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state, AppState::Study);
        assert!(app.store.is_empty());
        assert!(app.store.current().is_none());
    }

    #[test]
    fn test_quit_from_study() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_poll_timeout_picks_soonest_deadline() {
        let mut app = app_with(&[("Q1", "A1", ""), ("Q2", "A2", "")]);
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), None);

        app.flip_delay.start(Duration::from_millis(500));
        let timeout = app.poll_timeout(now).unwrap();
        assert!(timeout <= Duration::from_millis(500));
    }
}
