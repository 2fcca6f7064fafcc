//! Per-language learning session: word filter plus the menu/flashcards/quiz/results modes.

use crate::error::{QuizError, SessionError};
use crate::flashcard::{FlashcardOutcome, FlashcardSession};
use crate::logger;
use crate::models::{Difficulty, Language, Word};
use crate::quiz::{Progress, QuizEngine, check_pool};
use crate::results::QuizReport;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordFilter {
    #[default]
    All,
    Category(String),
    Difficulty(Difficulty),
}

impl WordFilter {
    /// Derived view of the language's words; the catalog is never touched.
    pub fn apply(&self, language: &Language) -> Vec<Word> {
        match self {
            WordFilter::All => language.words.clone(),
            WordFilter::Category(category) => language
                .words_by_category(category)
                .into_iter()
                .cloned()
                .collect(),
            WordFilter::Difficulty(difficulty) => language
                .words_by_difficulty(*difficulty)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    pub fn first_category(language: &Language) -> WordFilter {
        language
            .categories()
            .first()
            .map(|c| WordFilter::Category(c.to_string()))
            .unwrap_or(WordFilter::All)
    }

    /// Step to the neighbouring category or difficulty, wrapping around.
    pub fn cycled(&self, language: &Language, forward: bool) -> WordFilter {
        match self {
            WordFilter::All => WordFilter::All,
            WordFilter::Category(current) => {
                let categories = language.categories();
                if categories.is_empty() {
                    return WordFilter::All;
                }
                let index = categories
                    .iter()
                    .position(|c| c == current)
                    .unwrap_or(0);
                let next = step(index, categories.len(), forward);
                WordFilter::Category(categories[next].to_string())
            }
            WordFilter::Difficulty(current) => {
                let index = Difficulty::ALL
                    .iter()
                    .position(|d| d == current)
                    .unwrap_or(0);
                let next = step(index, Difficulty::ALL.len(), forward);
                WordFilter::Difficulty(Difficulty::ALL[next])
            }
        }
    }
}

fn step(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

impl fmt::Display for WordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordFilter::All => write!(f, "all words"),
            WordFilter::Category(category) => write!(f, "category: {}", category),
            WordFilter::Difficulty(difficulty) => write!(f, "{} level", difficulty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Menu,
    Flashcards,
    Quiz,
    Results,
}

#[derive(Debug)]
pub enum Mode {
    Menu,
    Flashcards(FlashcardSession),
    Quiz(QuizEngine),
    Results(QuizReport),
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Menu => ModeKind::Menu,
            Mode::Flashcards(_) => ModeKind::Flashcards,
            Mode::Quiz(_) => ModeKind::Quiz,
            Mode::Results(_) => ModeKind::Results,
        }
    }
}

#[derive(Debug)]
pub struct LearningSession<'c, R: Rng = ThreadRng> {
    language: &'c Language,
    filter: WordFilter,
    mode: Mode,
    rng: R,
    last_flashcards: Option<FlashcardOutcome>,
}

impl<'c> LearningSession<'c, ThreadRng> {
    pub fn new(language: &'c Language) -> Self {
        Self::with_rng(language, rand::thread_rng())
    }
}

impl<'c, R: Rng> LearningSession<'c, R> {
    pub fn with_rng(language: &'c Language, rng: R) -> Self {
        logger::log(&format!("Opened language {}", language.id));
        Self {
            language,
            filter: WordFilter::All,
            mode: Mode::Menu,
            rng,
            last_flashcards: None,
        }
    }

    pub fn language(&self) -> &'c Language {
        self.language
    }

    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mode_mut(&mut self) -> &mut Mode {
        &mut self.mode
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn last_flashcards(&self) -> Option<FlashcardOutcome> {
        self.last_flashcards
    }

    pub fn filtered_words(&self) -> Vec<Word> {
        self.filter.apply(self.language)
    }

    /// Why a quiz cannot start with the current filter, if it cannot.
    pub fn quiz_blocker(&self) -> Option<QuizError> {
        check_pool(&self.filtered_words()).err()
    }

    pub fn set_filter(&mut self, filter: WordFilter) -> Result<(), SessionError> {
        self.require(ModeKind::Menu, "change the word filter")?;
        logger::log(&format!("Filter set to {}", filter));
        self.filter = filter;
        Ok(())
    }

    pub fn start_flashcards(&mut self) -> Result<(), SessionError> {
        match self.mode_kind() {
            ModeKind::Menu | ModeKind::Results => {}
            from => {
                return Err(SessionError::InvalidTransition {
                    from,
                    action: "start flashcards",
                });
            }
        }
        let session = FlashcardSession::new(self.filtered_words()).inspect_err(|_| {
            logger::log(&format!("Flashcards rejected: no words for {}", self.filter));
        })?;
        logger::log(&format!(
            "Flashcards started with {} words",
            session.card_count()
        ));
        self.mode = Mode::Flashcards(session);
        Ok(())
    }

    /// Records the outcome of the running flashcard session and returns to the menu.
    pub fn finish_flashcards(&mut self) -> Result<FlashcardOutcome, SessionError> {
        let Mode::Flashcards(session) = &self.mode else {
            return Err(SessionError::InvalidTransition {
                from: self.mode_kind(),
                action: "finish flashcards",
            });
        };
        let outcome = session.outcome();
        logger::log(&format!(
            "Flashcards finished: {}/{} known",
            outcome.known, outcome.total
        ));
        self.last_flashcards = Some(outcome);
        self.mode = Mode::Menu;
        Ok(outcome)
    }

    pub fn start_quiz(&mut self) -> Result<(), SessionError> {
        self.require(ModeKind::Menu, "start a quiz")?;
        self.begin_quiz()
    }

    pub fn retake_quiz(&mut self) -> Result<(), SessionError> {
        self.require(ModeKind::Results, "retake quiz")?;
        self.begin_quiz()
    }

    fn begin_quiz(&mut self) -> Result<(), SessionError> {
        let words = self.filtered_words();
        let engine = QuizEngine::start(words, &mut self.rng).inspect_err(|e| {
            logger::log(&format!("Quiz rejected: {}", e));
        })?;
        logger::log(&format!(
            "Quiz started with {} questions ({})",
            engine.question_count(),
            self.filter
        ));
        self.mode = Mode::Quiz(engine);
        Ok(())
    }

    /// Regenerates the running quiz from scratch.
    pub fn restart_quiz(&mut self) -> Result<(), SessionError> {
        let from = self.mode_kind();
        let Mode::Quiz(engine) = &mut self.mode else {
            return Err(SessionError::InvalidTransition {
                from,
                action: "restart quiz",
            });
        };
        engine.restart(&mut self.rng);
        logger::log("Quiz restarted");
        Ok(())
    }

    pub fn answer_quiz(&mut self, option: usize) -> Result<bool, SessionError> {
        let engine = self.quiz_engine_mut("answer a question")?;
        let result = engine.select_option(option)?;
        Ok(result.is_correct)
    }

    /// Moves to the next question, or to the results screen after the last one.
    pub fn advance_quiz(&mut self) -> Result<Progress, SessionError> {
        let engine = self.quiz_engine_mut("advance the quiz")?;
        let progress = engine.advance()?;

        if let Progress::Finished { score } = progress {
            logger::log(&format!("Quiz finished with score {}%", score));
            if let Mode::Quiz(engine) = std::mem::replace(&mut self.mode, Mode::Menu) {
                self.mode = Mode::Results(QuizReport::new(engine.into_results())?);
            }
        }
        Ok(progress)
    }

    /// Abandons whatever is running. Unfinished sessions are discarded.
    pub fn back_to_menu(&mut self) {
        if self.mode_kind() != ModeKind::Menu {
            logger::log(&format!("Back to menu from {:?}", self.mode_kind()));
        }
        self.mode = Mode::Menu;
    }

    fn quiz_engine_mut(&mut self, action: &'static str) -> Result<&mut QuizEngine, SessionError> {
        let from = self.mode_kind();
        match &mut self.mode {
            Mode::Quiz(engine) => Ok(engine),
            _ => Err(SessionError::InvalidTransition { from, action }),
        }
    }

    fn require(&self, expected: ModeKind, action: &'static str) -> Result<(), SessionError> {
        let from = self.mode_kind();
        if from == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition { from, action })
        }
    }
}
