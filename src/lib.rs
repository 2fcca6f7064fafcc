pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flashcard;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod quiz;
pub mod results;
pub mod session;
pub mod speech;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use catalog::{load_catalog, Catalog};
pub use config::Config;
pub use error::{AppError, CatalogError, QuizError, SessionError};
pub use flashcard::{CardStep, FlashcardOutcome, FlashcardSession};
pub use models::{AppState, Difficulty, Language, Learner, QuizQuestion, QuizResult, Word};
pub use orchestrator::{LearningSession, Mode, ModeKind, WordFilter};
pub use quiz::{generate_questions, score_percent, Progress, QuizEngine};
pub use results::{summarize, Grade, QuizReport, QuizSummary};
pub use session::handle_key;
pub use speech::{Silent, Speaker, SystemSpeaker};
