use crate::error::QuizError;
use crate::models::{QuizQuestion, QuizResult, Word};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::time::{Duration, Instant};

pub const OPTION_COUNT: usize = 4;
pub const MIN_QUIZ_WORDS: usize = OPTION_COUNT;
const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Integer percentage, rounded half up. `None` when `total` is zero.
pub fn score_percent(correct: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let correct = correct.min(total);
    Some(((200 * correct + total) / (2 * total)) as u8)
}

pub fn distinct_meanings(words: &[Word]) -> usize {
    words
        .iter()
        .map(|w| w.meaning.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Checks a pool can produce questions with four distinct options.
pub fn check_pool(words: &[Word]) -> Result<(), QuizError> {
    if words.len() < MIN_QUIZ_WORDS {
        return Err(QuizError::InsufficientWords {
            required: MIN_QUIZ_WORDS,
            available: words.len(),
        });
    }
    let meanings = distinct_meanings(words);
    if meanings < OPTION_COUNT {
        return Err(QuizError::DegeneratePool {
            required: OPTION_COUNT,
            available: meanings,
        });
    }
    Ok(())
}

/// One question per word, in shuffled order, each with shuffled options.
pub fn generate_questions<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Vec<QuizQuestion> {
    let mut order: Vec<&Word> = words.iter().collect();
    order.shuffle(rng);

    order
        .into_iter()
        .map(|word| build_question(word, words, rng))
        .collect()
}

fn build_question<R: Rng + ?Sized>(word: &Word, pool: &[Word], rng: &mut R) -> QuizQuestion {
    let mut distractors: Vec<&str> = pool
        .iter()
        .filter(|w| w.id != word.id && w.meaning != word.meaning)
        .map(|w| w.meaning.as_str())
        .collect();
    distractors.sort_unstable();
    distractors.dedup();

    let mut options: Vec<String> = distractors
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|m| m.to_string())
        .collect();
    options.push(word.meaning.clone());
    options.shuffle(rng);

    QuizQuestion {
        word: word.clone(),
        options,
        correct_answer: word.meaning.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Next,
    Finished { score: u8 },
}

/// A running multiple-choice quiz over a fixed word pool.
#[derive(Debug)]
pub struct QuizEngine {
    words: Vec<Word>,
    questions: Vec<QuizQuestion>,
    results: Vec<QuizResult>,
    current_index: usize,
    question_started_at: Instant,
    quiz_started_at: Instant,
    score: Option<u8>,
}

impl QuizEngine {
    pub fn start<R: Rng + ?Sized>(words: Vec<Word>, rng: &mut R) -> Result<Self, QuizError> {
        check_pool(&words)?;
        let questions = generate_questions(&words, rng);
        let now = Instant::now();
        Ok(Self {
            words,
            questions,
            results: Vec::new(),
            current_index: 0,
            question_started_at: now,
            quiz_started_at: now,
            score: None,
        })
    }

    /// Fresh questions from the same pool; all answers and timers are discarded.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions = generate_questions(&self.words, rng);
        self.results.clear();
        self.current_index = 0;
        self.score = None;
        let now = Instant::now();
        self.question_started_at = now;
        self.quiz_started_at = now;
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<QuizResult> {
        self.results
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    pub fn current_result(&self) -> Option<&QuizResult> {
        self.results.get(self.current_index)
    }

    pub fn is_current_answered(&self) -> bool {
        self.results.len() > self.current_index
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.score.is_some()
    }

    pub fn score(&self) -> Option<u8> {
        self.score
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_correct).count()
    }

    pub fn progress_percent(&self) -> u16 {
        (((self.current_index + 1) * 100) / self.questions.len()) as u16
    }

    pub fn elapsed(&self) -> Duration {
        self.quiz_started_at.elapsed()
    }

    pub fn submit_answer(&mut self, selected: &str) -> Result<&QuizResult, QuizError> {
        let elapsed_ms = self.question_started_at.elapsed().as_millis() as u64;
        self.record_answer(selected, elapsed_ms)
    }

    pub fn select_option(&mut self, index: usize) -> Result<&QuizResult, QuizError> {
        let selected = self
            .current_question()
            .options
            .get(index)
            .cloned()
            .ok_or(QuizError::InvalidOption { index })?;
        self.submit_answer(&selected)
    }

    fn record_answer(&mut self, selected: &str, elapsed_ms: u64) -> Result<&QuizResult, QuizError> {
        if self.is_finished() {
            return Err(QuizError::QuizFinished);
        }
        if self.is_current_answered() {
            return Err(QuizError::AlreadyAnswered {
                index: self.current_index,
            });
        }

        let question = &self.questions[self.current_index];
        self.results.push(QuizResult {
            word: question.word.clone(),
            selected_answer: selected.to_string(),
            correct_answer: question.correct_answer.clone(),
            is_correct: selected == question.correct_answer,
            time_spent_ms: elapsed_ms,
        });
        Ok(&self.results[self.current_index])
    }

    pub fn advance(&mut self) -> Result<Progress, QuizError> {
        if self.is_finished() {
            return Err(QuizError::QuizFinished);
        }
        if !self.is_current_answered() {
            return Err(QuizError::Unanswered {
                index: self.current_index,
            });
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.question_started_at = Instant::now();
            return Ok(Progress::Next);
        }

        let score = score_percent(self.correct_count(), self.results.len()).unwrap_or(0);
        self.score = Some(score);
        Ok(Progress::Finished { score })
    }
}
