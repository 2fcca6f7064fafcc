use crate::logger::DEFAULT_LOG_FILE;
use crate::models::Learner;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "indic-flashcards")]
#[command(about = "Flashcards and quizzes for six Indian languages")]
#[command(version)]
pub struct Config {
    /// Open this language directly (e.g. hindi, tamil)
    #[arg(short, long, env = "INDIC_FLASHCARDS_LANGUAGE")]
    pub language: Option<String>,

    /// Load vocabulary from a JSON file instead of the built-in catalog
    #[arg(short, long, env = "INDIC_FLASHCARDS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Where to append the debug log
    #[arg(long, default_value = DEFAULT_LOG_FILE, env = "INDIC_FLASHCARDS_LOG_FILE")]
    pub log_file: PathBuf,

    /// Learner display name
    #[arg(short, long, env = "INDIC_FLASHCARDS_NAME")]
    pub name: Option<String>,

    /// Learner email
    #[arg(short, long, env = "INDIC_FLASHCARDS_EMAIL")]
    pub email: Option<String>,

    /// Disable pronunciation playback
    #[arg(long, env = "INDIC_FLASHCARDS_MUTE")]
    pub mute: bool,
}

impl Config {
    pub fn learner(&self) -> Learner {
        Learner {
            name: self
                .name
                .clone()
                .or_else(|| std::env::var("USER").ok())
                .filter(|n| !n.trim().is_empty()),
            email: self.email.clone(),
        }
    }
}
