use crate::error::SessionError;
use crate::models::Word;
use crate::quiz::score_percent;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashcardOutcome {
    pub known: usize,
    pub total: usize,
    pub score_percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStep {
    Moved,
    Completed(FlashcardOutcome),
}

/// Walks through a word list one card at a time.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    words: Vec<Word>,
    current_index: usize,
    flipped: bool,
    showing_meaning: bool,
    known: HashSet<String>,
    studied: HashSet<String>,
}

impl FlashcardSession {
    pub fn new(words: Vec<Word>) -> Result<Self, SessionError> {
        if words.is_empty() {
            return Err(SessionError::NoWords);
        }
        Ok(Self {
            words,
            current_index: 0,
            flipped: false,
            showing_meaning: false,
            known: HashSet::new(),
            studied: HashSet::new(),
        })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn current_word(&self) -> &Word {
        &self.words[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn card_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn is_showing_meaning(&self) -> bool {
        self.showing_meaning
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn studied_count(&self) -> usize {
        self.studied.len()
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.words.len()
    }

    pub fn progress_percent(&self) -> u16 {
        (((self.current_index + 1) * 100) / self.words.len()) as u16
    }

    pub fn flip(&mut self) {
        if !self.flipped {
            let id = self.current_word().id.clone();
            self.studied.insert(id);
        }
        self.flipped = !self.flipped;
    }

    pub fn toggle_meaning(&mut self) {
        self.showing_meaning = !self.showing_meaning;
    }

    pub fn know_it(&mut self) -> CardStep {
        let id = self.current_word().id.clone();
        self.known.insert(id.clone());
        self.studied.insert(id);
        self.next_card()
    }

    pub fn need_practice(&mut self) -> CardStep {
        let id = self.current_word().id.clone();
        self.known.remove(&id);
        self.studied.insert(id);
        self.next_card()
    }

    pub fn next_card(&mut self) -> CardStep {
        if self.is_last() {
            return CardStep::Completed(self.outcome());
        }
        self.current_index += 1;
        self.reset_card();
        CardStep::Moved
    }

    pub fn previous_card(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.reset_card();
        }
    }

    pub fn outcome(&self) -> FlashcardOutcome {
        let total = self.words.len();
        FlashcardOutcome {
            known: self.known.len(),
            total,
            score_percent: score_percent(self.known.len(), total).unwrap_or(0),
        }
    }

    fn reset_card(&mut self) {
        self.flipped = false;
        self.showing_meaning = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::word;
    use crate::models::Difficulty;

    fn words(n: usize) -> Vec<Word> {
        (0..n)
            .map(|i| word(&i.to_string(), &format!("M{}", i), "food", Difficulty::Easy))
            .collect()
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(
            FlashcardSession::new(vec![]).unwrap_err(),
            SessionError::NoWords
        );
    }

    #[test]
    fn test_single_word_session() {
        let mut session = FlashcardSession::new(words(1)).unwrap();
        assert!(session.is_last());
        assert_eq!(session.progress_percent(), 100);
        assert_eq!(
            session.know_it(),
            CardStep::Completed(FlashcardOutcome {
                known: 1,
                total: 1,
                score_percent: 100
            })
        );
    }

    #[test]
    fn test_flip_marks_studied_once() {
        let mut session = FlashcardSession::new(words(3)).unwrap();
        session.flip();
        assert!(session.is_flipped());
        session.flip();
        assert!(!session.is_flipped());
        session.flip();
        assert_eq!(session.studied_count(), 1);
        assert_eq!(session.known_count(), 0);
    }

    #[test]
    fn test_navigation_resets_card_state() {
        let mut session = FlashcardSession::new(words(3)).unwrap();
        session.flip();
        session.toggle_meaning();
        assert_eq!(session.next_card(), CardStep::Moved);
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_flipped());
        assert!(!session.is_showing_meaning());

        session.toggle_meaning();
        session.previous_card();
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_showing_meaning());

        session.previous_card();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_tally_and_outcome() {
        let mut session = FlashcardSession::new(words(4)).unwrap();
        assert_eq!(session.know_it(), CardStep::Moved);
        assert_eq!(session.need_practice(), CardStep::Moved);
        assert_eq!(session.know_it(), CardStep::Moved);
        assert_eq!(session.progress_percent(), 100);
        let step = session.need_practice();
        assert_eq!(
            step,
            CardStep::Completed(FlashcardOutcome {
                known: 2,
                total: 4,
                score_percent: 50
            })
        );
        assert_eq!(session.studied_count(), 4);
    }

    #[test]
    fn test_revisiting_card_does_not_double_count() {
        let mut session = FlashcardSession::new(words(3)).unwrap();
        session.know_it();
        session.previous_card();
        session.know_it();
        assert_eq!(session.known_count(), 1);

        session.previous_card();
        session.need_practice();
        assert_eq!(session.known_count(), 0);
    }
}
