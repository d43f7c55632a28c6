use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flashcard_study::{
    App, AppState, CardStore, Prefs, Storage, default_prefs_path, draw_add_card, draw_categories,
    draw_clear_confirmation, draw_splash, draw_study, handle_key, logger,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    logger::init();

    let prefs = Prefs::open(&default_prefs_path());
    let store = CardStore::load(prefs);
    let mut app = App::new(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<S: Storage>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| match &app.state {
            AppState::Splash => draw_splash(f),
            AppState::Study => draw_study(f, app),
            AppState::AddCard => {
                draw_study(f, app);
                draw_add_card(f, &app.form);
            }
            AppState::Categories => {
                draw_study(f, app);
                draw_categories(f, &app.category_choices(), app.selected_category);
            }
            AppState::ConfirmClear(target) => {
                draw_study(f, app);
                draw_clear_confirmation(f, target);
            }
        })?;

        // Wake up in time for the next deferred transition even when no
        // key arrives.
        let timeout = app
            .poll_timeout(Instant::now())
            .unwrap_or(Duration::from_millis(250));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key)?;
            }
        }
        app.on_tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
