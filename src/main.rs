mod app;
mod data;
mod page;
mod search;
mod ui;

use app::{App, InputMode};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use data::Dataset;
use page::Page;

/// TUI explorer for a travel recommendation dataset
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Route to open; classified by filename suffix (about.html,
    /// contact.html, anything else is the home page)
    route: Option<String>,

    /// Path or URL of the recommendation dataset
    #[arg(short, long, default_value = "travel_recommendation.json")]
    data: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let page = Page::from_path(cli.route.as_deref().unwrap_or(""));
    let dataset = Dataset::load_or_none(&cli.data).await;

    let mut app = App::new(dataset, page);

    // Init terminal
    let mut terminal = ratatui::init();

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if crossterm::event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                handle_key(app, key);
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Help toggle (global)
    if key.code == KeyCode::Char('?') && app.input_mode == InputMode::Normal {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.input_mode == InputMode::Editing {
        handle_query_input(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        // Search keys exist only where the search UI does
        KeyCode::Char('/') if app.search_enabled => {
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Enter if app.search_enabled => {
            app.run_search();
        }
        KeyCode::Char('c') if app.search_enabled => {
            app.clear_search();
        }
        _ => {}
    }
}

fn handle_query_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.run_search();
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.query.pop();
        }
        KeyCode::Char(c) => {
            app.query.push(c);
        }
        _ => {}
    }
}
