use crate::error::CatalogError;
use crate::models::{Difficulty, Language, Word};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../data/languages.json");

/// Read-only vocabulary catalog, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    languages: Vec<Language>,
}

impl Catalog {
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn new(languages: Vec<Language>) -> Result<Self, CatalogError> {
        let catalog = Catalog { languages };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.languages.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut language_ids = HashSet::new();
        for language in &self.languages {
            if !language_ids.insert(language.id.as_str()) {
                return Err(CatalogError::DuplicateLanguage {
                    id: language.id.clone(),
                });
            }
            if language.words.is_empty() {
                return Err(CatalogError::EmptyLanguage {
                    language: language.id.clone(),
                });
            }
            let mut word_ids = HashSet::new();
            for word in &language.words {
                if !word_ids.insert(word.id.as_str()) {
                    return Err(CatalogError::DuplicateWord {
                        language: language.id.clone(),
                        id: word.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn language(&self, id: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.languages.iter().position(|lang| lang.id == id)
    }
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    Catalog::from_json(&content)
}

impl Language {
    pub fn words_by_category(&self, category: &str) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| word.category == category)
            .collect()
    }

    pub fn words_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| word.difficulty == difficulty)
            .collect()
    }

    /// Distinct categories, sorted alphabetically.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.words.iter().map(|w| w.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    pub fn word(&self, id: &str) -> Option<&Word> {
        self.words.iter().find(|word| word.id == id)
    }
}
