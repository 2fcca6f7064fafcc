//! Error types for the vocabulary trainer.

use thiserror::Error;

use crate::orchestrator::ModeKind;

/// Errors raised while building or running a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("need at least {required} words to start a quiz, got {available}")]
    InsufficientWords { required: usize, available: usize },

    #[error("need at least {required} distinct meanings to build options, got {available}")]
    DegeneratePool { required: usize, available: usize },

    #[error("question {index} was already answered")]
    AlreadyAnswered { index: usize },

    #[error("question {index} has not been answered yet")]
    Unanswered { index: usize },

    #[error("option {index} does not exist")]
    InvalidOption { index: usize },

    #[error("quiz is already finished")]
    QuizFinished,

    #[error("no quiz results to summarize")]
    EmptyResults,
}

/// Errors raised while loading the vocabulary catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog contains no languages")]
    Empty,

    #[error("duplicate language id {id}")]
    DuplicateLanguage { id: String },

    #[error("language {language} has no words")]
    EmptyLanguage { language: String },

    #[error("duplicate word id {id} in language {language}")]
    DuplicateWord { language: String, id: String },
}

/// Errors raised by the learning-session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no words available for the selected filter")]
    NoWords,

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("cannot {action} while in {from:?}")]
    InvalidTransition { from: ModeKind, action: &'static str },
}

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("unknown language {0}")]
    UnknownLanguage(String),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
