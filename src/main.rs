use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use indic_flashcards::{
    load_catalog, logger, ui, App, AppError, Catalog, Config, Silent, Speaker, SystemSpeaker,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<(), AppError> {
    let config = Config::parse();
    logger::init(&config.log_file)?;

    let catalog = match &config.catalog {
        Some(path) => {
            logger::log(&format!("Loading catalog from {}", path.display()));
            load_catalog(path)?
        }
        None => Catalog::embedded()?,
    };
    let start_language = match &config.language {
        Some(id) => Some(
            catalog
                .position(id)
                .ok_or_else(|| AppError::UnknownLanguage(id.clone()))?,
        ),
        None => None,
    };
    let speaker: Box<dyn Speaker> = if config.mute {
        Box::new(Silent)
    } else {
        Box::new(SystemSpeaker::detect())
    };
    logger::log(&format!(
        "Starting with {} languages, audio {}",
        catalog.languages().len(),
        if speaker.is_available() { "on" } else { "off" }
    ));

    let mut app = App::new(&catalog, config.learner(), speaker);
    if let Some(index) = start_language {
        app.open_language(index);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    logger::log("Exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            indic_flashcards::handle_key(app, key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
