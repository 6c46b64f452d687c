pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

/// Run the interactive calculator until the user quits.
pub fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Query the terminal background before entering raw mode.
    let theme = resolve_theme().colors();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(250); // 250ms tick

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app, &theme)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => handle_key_event(&mut app, key),
            Ok(Event::Tick) => app.update_flash(),
            Err(e) => break Err(e),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    result
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Field selection
                KeyCode::Char('j') | KeyCode::Down => app.next_field(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_field(),

                // Adjust the selected reading
                KeyCode::Char('h') | KeyCode::Left => app.adjust_selected(-1.0),
                KeyCode::Char('l') | KeyCode::Right => app.adjust_selected(1.0),
                KeyCode::Char('H') => app.adjust_selected(-10.0),
                KeyCode::Char('L') => app.adjust_selected(10.0),
                KeyCode::Char('-') => app.adjust_selected(-1.0),
                KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_selected(1.0),

                // Clear / reset
                KeyCode::Char('0') => app.reset_selected(),
                KeyCode::Char('r') => {
                    app.reset_all();
                    app.show_flash("Readings reset".to_string());
                }

                // Score breakdown
                KeyCode::Char('b') => app.toggle_breakdown(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        app::InputMode::Breakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => app.toggle_breakdown(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
