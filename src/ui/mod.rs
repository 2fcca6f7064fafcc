pub mod layout;
mod flashcard;
mod languages;
mod menu;
mod quiz;
mod summary;

use crate::app::App;
use crate::models::AppState;
use crate::orchestrator::Mode;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub use flashcard::draw_flashcard;
pub use languages::draw_languages;
pub use layout::{calculate_card_chunks, calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

/// Renders whichever screen the app is on.
pub fn draw(f: &mut Frame, app: &mut App) {
    match app.state {
        AppState::Languages => draw_languages(f, app),
        AppState::Learning | AppState::QuizQuitConfirm => {
            let Some(session) = app.session.as_ref() else {
                draw_languages(f, app);
                return;
            };
            match session.mode() {
                Mode::Menu => draw_menu(f, session, &app.learner, app.notice.as_deref()),
                Mode::Flashcards(cards) => {
                    draw_flashcard(f, cards, session.language(), app.speaker.is_available())
                }
                Mode::Quiz(engine) => draw_quiz(
                    f,
                    engine,
                    session.language(),
                    app.highlighted_option,
                    app.notice.as_deref(),
                ),
                Mode::Results(report) => {
                    app.scroll = draw_summary(f, report, session.language(), app.scroll);
                }
            }
            if app.state == AppState::QuizQuitConfirm {
                draw_quit_confirmation(f);
            }
        }
    }
}

fn key_hint(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn difficulty_color(difficulty: crate::models::Difficulty) -> Color {
    use crate::models::Difficulty;
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Learner;
    use crate::speech::Silent;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn press(app: &mut App, code: KeyCode) {
        crate::session::handle_key(app, KeyEvent::new(code, KeyModifiers::empty()));
    }

    #[test]
    fn test_every_screen_renders() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        assert!(render(&mut app).contains("Hindi"));

        app.open_language(0);
        assert!(render(&mut app).contains("Start"));

        press(&mut app, KeyCode::Char('f'));
        assert!(render(&mut app).contains("Card 1"));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('q'));
        assert!(render(&mut app).contains("Question 1"));

        press(&mut app, KeyCode::Esc);
        assert!(render(&mut app).contains("Quit Quiz"));
        press(&mut app, KeyCode::Char('n'));

        for _ in 0..5 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }
        assert!(render(&mut app).contains("Grade"));
    }

    #[test]
    fn test_menu_shows_notice() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('q'));
        assert!(render(&mut app).contains("Need at least 4 words"));
    }

    #[test]
    fn test_results_scroll_is_clamped() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('q'));
        for _ in 0..5 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }
        app.scroll = 500;
        render(&mut app);
        assert!(app.scroll < 500);
    }
}
