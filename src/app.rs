use crate::catalog::Catalog;
use crate::error::{QuizError, SessionError};
use crate::logger;
use crate::models::{AppState, Language, Learner};
use crate::orchestrator::LearningSession;
use crate::speech::Speaker;

/// Everything the terminal loop needs between key presses.
pub struct App<'c> {
    pub catalog: &'c Catalog,
    pub learner: Learner,
    pub speaker: Box<dyn Speaker>,
    pub state: AppState,
    pub selected_language: usize,
    pub session: Option<LearningSession<'c>>,
    pub notice: Option<String>,
    pub highlighted_option: usize,
    pub scroll: u16,
    pub should_quit: bool,
}

impl<'c> App<'c> {
    pub fn new(catalog: &'c Catalog, learner: Learner, speaker: Box<dyn Speaker>) -> Self {
        Self {
            catalog,
            learner,
            speaker,
            state: AppState::Languages,
            selected_language: 0,
            session: None,
            notice: None,
            highlighted_option: 0,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn selected_language(&self) -> Option<&'c Language> {
        self.catalog.languages().get(self.selected_language)
    }

    pub fn open_language(&mut self, index: usize) {
        if let Some(language) = self.catalog.languages().get(index) {
            self.selected_language = index;
            self.session = Some(LearningSession::new(language));
            self.state = AppState::Learning;
            self.notice = None;
            self.highlighted_option = 0;
        }
    }

    pub fn close_language(&mut self) {
        self.session = None;
        self.state = AppState::Languages;
        self.notice = None;
    }

    /// Turns a rejected action into the message shown on the menu.
    pub fn report(&mut self, err: &SessionError) {
        logger::log(&format!("Action rejected: {}", err));
        self.notice = Some(notice_for(err));
    }

    pub fn speak(&self, text: &str) {
        if self.speaker.is_available() {
            self.speaker.speak(text);
        }
    }
}

pub fn notice_for(err: &SessionError) -> String {
    match err {
        SessionError::NoWords => {
            "No words available for the selected filter. Please choose a different option."
                .to_string()
        }
        SessionError::Quiz(QuizError::InsufficientWords { required, .. }) => format!(
            "Need at least {} words to start a quiz. Please choose a different filter.",
            required
        ),
        SessionError::Quiz(QuizError::DegeneratePool { required, .. }) => format!(
            "Need at least {} different meanings to build quiz options. Please choose a different filter.",
            required
        ),
        other => other.to_string(),
    }
}
