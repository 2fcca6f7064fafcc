//! Summary statistics over a finished quiz.

use crate::error::QuizError;
use crate::models::QuizResult;
use crate::quiz::score_percent;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Encouragement shown next to the score.
pub fn score_badge(score: u8) -> &'static str {
    match score {
        90.. => "Excellent!",
        70..=89 => "Good Job!",
        50..=69 => "Keep Practicing",
        _ => "Need More Practice",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub correct: usize,
    pub total: usize,
}

impl CategoryStats {
    pub fn percent(&self) -> u8 {
        score_percent(self.correct, self.total).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSummary {
    pub score_percent: u8,
    pub correct_count: usize,
    pub incorrect_count: usize,
    pub total_count: usize,
    pub average_time_secs: f64,
    /// Categories in order of first appearance.
    pub category_breakdown: Vec<(String, CategoryStats)>,
    pub grade: Grade,
    pub badge: &'static str,
}

pub fn summarize(results: &[QuizResult]) -> Result<QuizSummary, QuizError> {
    let total_count = results.len();
    let correct_count = results.iter().filter(|r| r.is_correct).count();
    let score = score_percent(correct_count, total_count).ok_or(QuizError::EmptyResults)?;

    let total_ms: u64 = results.iter().map(|r| r.time_spent_ms).sum();
    let average_time_secs = total_ms as f64 / total_count as f64 / 1000.0;

    let mut category_breakdown: Vec<(String, CategoryStats)> = Vec::new();
    for result in results {
        let category = &result.word.category;
        let index = match category_breakdown.iter().position(|(c, _)| c == category) {
            Some(index) => index,
            None => {
                category_breakdown.push((category.clone(), CategoryStats::default()));
                category_breakdown.len() - 1
            }
        };
        let stats = &mut category_breakdown[index].1;
        stats.total += 1;
        if result.is_correct {
            stats.correct += 1;
        }
    }

    Ok(QuizSummary {
        score_percent: score,
        correct_count,
        incorrect_count: total_count - correct_count,
        total_count,
        average_time_secs,
        category_breakdown,
        grade: Grade::from_score(score),
        badge: score_badge(score),
    })
}

/// A finished quiz with its summary, kept for the results screen.
#[derive(Debug, Clone)]
pub struct QuizReport {
    pub results: Vec<QuizResult>,
    pub summary: QuizSummary,
}

impl QuizReport {
    pub fn new(results: Vec<QuizResult>) -> Result<Self, QuizError> {
        let summary = summarize(&results)?;
        Ok(Self { results, summary })
    }
}
