use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single vocabulary entry. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: String,
    pub native: String,
    pub pronunciation: String,
    pub meaning: String,
    pub category: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub native: String,
    pub script: String,
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub word: Word,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub word: Word,
    pub selected_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub time_spent_ms: u64,
}

/// Who is studying. Supplied by the identity provider, never validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Learner {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Learner {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Guest")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Languages,
    Learning,
    QuizQuitConfirm,
}
