use crate::app::App;
use crate::error::SessionError;
use crate::flashcard::CardStep;
use crate::models::{AppState, Difficulty};
use crate::orchestrator::{Mode, ModeKind, WordFilter};
use crate::quiz::Progress;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.state {
        AppState::Languages => handle_language_input(app, key),
        AppState::Learning => handle_learning_input(app, key),
        AppState::QuizQuitConfirm => handle_quit_confirm_input(app, key),
    }
}

fn handle_language_input(app: &mut App, key: KeyEvent) {
    let count = app.catalog.languages().len();
    match key.code {
        KeyCode::Up => {
            if app.selected_language > 0 {
                app.selected_language -= 1;
            }
        }
        KeyCode::Down => {
            if app.selected_language < count.saturating_sub(1) {
                app.selected_language += 1;
            }
        }
        KeyCode::Enter => app.open_language(app.selected_language),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_learning_input(app: &mut App, key: KeyEvent) {
    let Some(kind) = app.session.as_ref().map(|s| s.mode_kind()) else {
        app.state = AppState::Languages;
        return;
    };

    match kind {
        ModeKind::Menu => handle_menu_input(app, key),
        ModeKind::Flashcards => handle_flashcard_input(app, key),
        ModeKind::Quiz => handle_quiz_input(app, key),
        ModeKind::Results => handle_results_input(app, key),
    }
}

fn handle_menu_input(app: &mut App, key: KeyEvent) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    app.notice = None;

    let result = match key.code {
        KeyCode::Char('a') => session.set_filter(WordFilter::All),
        KeyCode::Char('c') => {
            if matches!(session.filter(), WordFilter::Category(_)) {
                Ok(())
            } else {
                session.set_filter(WordFilter::first_category(session.language()))
            }
        }
        KeyCode::Char('d') => {
            if matches!(session.filter(), WordFilter::Difficulty(_)) {
                Ok(())
            } else {
                session.set_filter(WordFilter::Difficulty(Difficulty::Easy))
            }
        }
        KeyCode::Left | KeyCode::Right => {
            let filter = session
                .filter()
                .cycled(session.language(), key.code == KeyCode::Right);
            session.set_filter(filter)
        }
        KeyCode::Char('f') => session.start_flashcards(),
        KeyCode::Char('q') => {
            app.highlighted_option = 0;
            session.start_quiz()
        }
        KeyCode::Esc => {
            app.close_language();
            return;
        }
        _ => Ok(()),
    };

    if let Err(err) = result {
        app.report(&err);
    }
}

fn handle_flashcard_input(app: &mut App, key: KeyEvent) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let Mode::Flashcards(cards) = session.mode_mut() else {
        return;
    };

    let step = match key.code {
        KeyCode::Char(' ') => {
            cards.flip();
            None
        }
        KeyCode::Char('m') => {
            cards.toggle_meaning();
            None
        }
        KeyCode::Char('p') => {
            if app.speaker.is_available() {
                app.speaker.speak(&cards.current_word().pronunciation);
            }
            None
        }
        KeyCode::Char('k') => Some(cards.know_it()),
        KeyCode::Char('n') => Some(cards.need_practice()),
        KeyCode::Right | KeyCode::Enter => Some(cards.next_card()),
        KeyCode::Left => {
            cards.previous_card();
            None
        }
        KeyCode::Esc => {
            session.back_to_menu();
            None
        }
        _ => None,
    };

    if let Some(CardStep::Completed(_)) = step
        && let Err(err) = session.finish_flashcards()
    {
        app.report(&err);
    }
}

fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let Mode::Quiz(engine) = session.mode() else {
        return;
    };
    app.notice = None;
    let answered = engine.is_current_answered();
    let option_count = engine.current_question().options.len();
    let pronunciation = engine.current_question().word.pronunciation.clone();

    let result: Result<(), SessionError> = match key.code {
        KeyCode::Esc => {
            app.state = AppState::QuizQuitConfirm;
            Ok(())
        }
        KeyCode::Char('p') => {
            app.speak(&pronunciation);
            Ok(())
        }
        KeyCode::Char('r') => {
            app.highlighted_option = 0;
            session.restart_quiz()
        }
        KeyCode::Up if !answered => {
            app.highlighted_option = app.highlighted_option.saturating_sub(1);
            Ok(())
        }
        KeyCode::Down if !answered => {
            if app.highlighted_option + 1 < option_count {
                app.highlighted_option += 1;
            }
            Ok(())
        }
        KeyCode::Char(c @ '1'..='9') if !answered => {
            let index = c as usize - '1' as usize;
            if index >= option_count {
                return;
            }
            app.highlighted_option = index;
            session.answer_quiz(index).map(|_| ())
        }
        KeyCode::Enter if !answered => session.answer_quiz(app.highlighted_option).map(|_| ()),
        KeyCode::Enter => {
            app.highlighted_option = 0;
            session.advance_quiz().map(|progress| {
                if let Progress::Finished { .. } = progress {
                    app.scroll = 0;
                }
            })
        }
        _ => Ok(()),
    };

    if let Err(err) = result {
        app.report(&err);
    }
}

fn handle_results_input(app: &mut App, key: KeyEvent) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    app.notice = None;

    let result = match key.code {
        KeyCode::Up => {
            app.scroll = app.scroll.saturating_sub(1);
            Ok(())
        }
        KeyCode::Down => {
            app.scroll = app.scroll.saturating_add(1);
            Ok(())
        }
        KeyCode::Char('r') => {
            app.highlighted_option = 0;
            session.retake_quiz()
        }
        KeyCode::Char('f') => session.start_flashcards(),
        KeyCode::Char('m') | KeyCode::Esc => {
            session.back_to_menu();
            Ok(())
        }
        _ => Ok(()),
    };

    if let Err(err) = result {
        app.report(&err);
    }
}

fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some(session) = app.session.as_mut() {
                session.back_to_menu();
            }
            app.state = AppState::Learning;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.state = AppState::Learning;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::Learner;
    use crate::speech::Silent;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn mode_kind(app: &App) -> Option<ModeKind> {
        app.session.as_ref().map(|s| s.mode_kind())
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        press(&mut app, KeyCode::Char('f'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_language_navigation_bounds() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_language, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_language, 5);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Learning);
        assert_eq!(app.session.as_ref().unwrap().language().id, "malayalam");
    }

    #[test]
    fn test_menu_filter_keys() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(
            app.session.as_ref().unwrap().filter(),
            &WordFilter::Category("actions".to_string())
        );
        press(&mut app, KeyCode::Right);
        assert_eq!(
            app.session.as_ref().unwrap().filter(),
            &WordFilter::Category("basic".to_string())
        );

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Left);
        assert_eq!(
            app.session.as_ref().unwrap().filter(),
            &WordFilter::Difficulty(Difficulty::Hard)
        );

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.as_ref().unwrap().filter(), &WordFilter::All);
    }

    #[test]
    fn test_quiz_blocked_on_small_pool_shows_notice() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        // Hindi "basic" has two words.
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('q'));

        assert_eq!(mode_kind(&app), Some(ModeKind::Menu));
        assert!(app.notice.as_ref().unwrap().starts_with("Need at least 4 words"));

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(mode_kind(&app), Some(ModeKind::Flashcards));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_flashcard_keys_complete_session() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('f'));

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('n'));

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.mode_kind(), ModeKind::Menu);
        let outcome = session.last_flashcards().unwrap();
        assert_eq!(outcome.known, 1);
        assert_eq!(outcome.total, 2);
    }

    #[test]
    fn test_flashcard_escape_returns_to_menu() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(1);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.mode_kind(), ModeKind::Menu);
        assert!(session.last_flashcards().is_none());
    }

    #[test]
    fn test_quiz_keys_run_to_results() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        press(&mut app, KeyCode::Char('c'));
        // actions -> basic -> body
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(mode_kind(&app), Some(ModeKind::Quiz));

        // Enter before answering does nothing harmful; advancing needs an answer.
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }

        let Mode::Results(report) = app.session.as_ref().unwrap().mode() else {
            panic!("expected results");
        };
        assert_eq!(report.summary.total_count, 5);
        assert_eq!(report.results.len(), 5);
        assert_eq!(report.summary.category_breakdown.len(), 1);
    }

    #[test]
    fn test_digit_keys_answer_directly() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('3'));

        let Mode::Quiz(engine) = app.session.as_ref().unwrap().mode() else {
            panic!("expected quiz");
        };
        assert!(engine.is_current_answered());
        assert_eq!(
            engine.results()[0].selected_answer,
            engine.current_question().options[2]
        );
        assert_eq!(app.highlighted_option, 2);
    }

    #[test]
    fn test_stale_notice_cleared_through_quiz_and_results() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('q'));

        press(&mut app, KeyCode::Char('7'));
        assert!(app.notice.is_none());
        let Mode::Quiz(engine) = app.session.as_ref().unwrap().mode() else {
            panic!("expected quiz");
        };
        assert!(!engine.is_current_answered());

        app.notice = Some("left over".to_string());
        press(&mut app, KeyCode::Down);
        assert!(app.notice.is_none());

        for _ in 0..5 {
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(mode_kind(&app), Some(ModeKind::Results));
        app.notice = Some("left over".to_string());
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(mode_kind(&app), Some(ModeKind::Menu));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_quiz_quit_confirmation() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(0);
        press(&mut app, KeyCode::Char('q'));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::QuizQuitConfirm);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Learning);
        assert_eq!(mode_kind(&app), Some(ModeKind::Quiz));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.state, AppState::Learning);
        assert_eq!(mode_kind(&app), Some(ModeKind::Menu));
    }

    #[test]
    fn test_results_keys() {
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
        assert_eq!(mode_kind(&app), Some(ModeKind::Results));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(mode_kind(&app), Some(ModeKind::Quiz));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(mode_kind(&app), Some(ModeKind::Menu));
    }

    #[test]
    fn test_escape_from_menu_returns_to_languages() {
        let catalog = Catalog::embedded().unwrap();
        let mut app = App::new(&catalog, Learner::default(), Box::new(Silent));
        app.open_language(3);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Languages);
        assert!(app.session.is_none());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
