#![allow(dead_code)]
//! Playing-screen state
//!
//! Wraps the [`GameEngine`] with what the screen itself needs: the input
//! buffer, the feedback line, the revealed detail text and the short pause
//! between a correct guess and the next word.

use crate::game::catalog::{CatalogError, WordCatalog};
use crate::game::engine::GameEngine;
use crate::game::round::RoundState;
use crate::game::GameMode;
use std::time::{Duration, Instant};

/// Pause shown after a correct guess before the next word appears
const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Feedback line contents after a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

impl Feedback {
    pub fn message_key(&self) -> &'static str {
        match self {
            Feedback::Correct => "correct_guess",
            Feedback::Wrong => "wrong_guess",
        }
    }
}

/// How the session reached its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The timer hit zero
    TimeUp,
    /// Every word in the sequence was played
    Completed,
    /// The player stopped early
    Stopped,
}

impl Outcome {
    pub fn message_key(&self) -> &'static str {
        match self {
            Outcome::TimeUp => "time_up",
            Outcome::Completed => "all_words_completed",
            Outcome::Stopped => "game_ended_by_user",
        }
    }
}

/// One playthrough from start until the player returns to the menu.
pub struct PlaySession {
    engine: GameEngine,
    mode: GameMode,
    input: String,
    feedback: Option<Feedback>,
    /// Detail hint text once revealed, shown until the word changes
    detail: Option<String>,
    /// When set, the session advances to the next word at this instant
    advance_at: Option<Instant>,
    outcome: Option<Outcome>,
    score_recorded: bool,
}

impl PlaySession {
    /// Start a session in the given mode. Catalog failures propagate so the
    /// caller can show an error instead of a broken game screen.
    pub fn start(mode: GameMode, catalog: &dyn WordCatalog) -> Result<Self, CatalogError> {
        let mut engine = GameEngine::new();
        engine.start(mode, catalog)?;
        Ok(Self {
            engine,
            mode,
            input: String::new(),
            feedback: None,
            detail: None,
            advance_at: None,
            outcome: None,
            score_recorded: false,
        })
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.engine.state()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn score(&self) -> u32 {
        self.engine.state().map(|s| s.score()).unwrap_or(0)
    }

    /// Whether the between-words pause is active (input is locked).
    pub fn is_waiting_for_next_word(&self) -> bool {
        self.advance_at.is_some()
    }

    /// Handle character input (locked during the pause and after the end)
    pub fn on_char(&mut self, c: char) {
        if self.outcome.is_some() || self.advance_at.is_some() {
            return;
        }
        self.input.push(c);
        self.feedback = None;
    }

    /// Handle backspace (same locking as typing)
    pub fn on_backspace(&mut self) {
        if self.outcome.is_some() || self.advance_at.is_some() {
            return;
        }
        self.input.pop();
        self.feedback = None;
    }

    /// Submit the current input as a guess.
    pub fn on_submit(&mut self) {
        if self.outcome.is_some() || self.advance_at.is_some() {
            return;
        }
        let guess = self.input.trim().to_string();
        if guess.is_empty() {
            return;
        }

        if self.engine.submit_guess(&guess) {
            self.feedback = Some(Feedback::Correct);
            self.advance_at = Some(Instant::now() + ADVANCE_DELAY);
        } else {
            self.feedback = Some(Feedback::Wrong);
        }
        self.input.clear();
    }

    /// Spend a character joker.
    pub fn on_char_hint(&mut self) {
        if self.outcome.is_some() || self.advance_at.is_some() {
            return;
        }
        self.engine.request_char_hint();
    }

    /// Spend the detail joker.
    pub fn on_detail_hint(&mut self) {
        if self.outcome.is_some() || self.advance_at.is_some() {
            return;
        }
        if let Some(detail) = self.engine.request_detail_hint() {
            self.detail = Some(detail);
        }
    }

    /// Stop the session early (player intent).
    pub fn on_finish(&mut self) {
        if self.outcome.is_none() {
            self.engine.finish();
            self.outcome = Some(Outcome::Stopped);
        }
    }

    /// Per-frame update: complete a pending word advance once its pause has
    /// elapsed. Exhausting the sequence here ends the session.
    pub fn poll(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        if let Some(at) = self.advance_at {
            if Instant::now() >= at {
                self.advance_at = None;
                self.feedback = None;
                self.detail = None;
                if !self.engine.advance_word() {
                    self.outcome = Some(Outcome::Completed);
                }
            }
        }
    }

    /// Once-a-second update: refresh the timer and catch time-up.
    pub fn on_tick(&mut self) {
        let remaining = self.engine.tick();
        if remaining == 0 && self.outcome.is_none() && !self.engine.is_running() {
            self.advance_at = None;
            self.outcome = Some(Outcome::TimeUp);
        }
    }

    /// True exactly once, the first time it is called after the session
    /// ended; the caller persists the score on that edge.
    pub fn take_unrecorded_end(&mut self) -> Option<(GameMode, u32)> {
        if self.outcome.is_some() && !self.score_recorded {
            self.score_recorded = true;
            Some((self.mode, self.score()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Difficulty, Word};

    struct FixedCatalog;

    impl WordCatalog for FixedCatalog {
        fn fetch(&self, tier: Difficulty, count: usize) -> Result<Vec<Word>, CatalogError> {
            Ok((0..count)
                .map(|i| Word::new(format!("{}{}", tier.key(), i), "tanım", "detay"))
                .collect())
        }
    }

    struct BrokenCatalog;

    impl WordCatalog for BrokenCatalog {
        fn fetch(&self, _tier: Difficulty, _count: usize) -> Result<Vec<Word>, CatalogError> {
            Err(CatalogError::Unavailable("down".into()))
        }
    }

    fn session() -> PlaySession {
        PlaySession::start(GameMode::Classic, &FixedCatalog).unwrap()
    }

    fn type_current_word(session: &mut PlaySession) {
        let text = session.round().unwrap().current_word().unwrap().text.clone();
        for c in text.chars() {
            session.on_char(c);
        }
    }

    fn expire_pending_advance(session: &mut PlaySession) {
        session.advance_at = Some(Instant::now() - Duration::from_secs(1));
        session.poll();
    }

    #[test]
    fn test_start_failure_propagates() {
        assert!(PlaySession::start(GameMode::Classic, &BrokenCatalog).is_err());
    }

    #[test]
    fn test_typing_builds_input_and_clears_feedback() {
        let mut s = session();
        s.on_char('a');
        s.on_char('b');
        assert_eq!(s.input(), "ab");

        s.on_submit();
        assert_eq!(s.feedback(), Some(Feedback::Wrong));

        s.on_char('c');
        assert_eq!(s.feedback(), None);
        s.on_backspace();
        assert_eq!(s.input(), "");
    }

    #[test]
    fn test_empty_submit_does_nothing() {
        let mut s = session();
        s.on_submit();
        assert_eq!(s.feedback(), None);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_correct_guess_schedules_advance() {
        let mut s = session();
        type_current_word(&mut s);
        s.on_submit();

        assert_eq!(s.feedback(), Some(Feedback::Correct));
        assert!(s.is_waiting_for_next_word());
        assert_eq!(s.score(), 100);
        // Still on the same word until the pause elapses
        assert_eq!(s.round().unwrap().current_index(), 0);

        // Input is locked during the pause
        s.on_char('x');
        assert_eq!(s.input(), "");

        expire_pending_advance(&mut s);
        assert!(!s.is_waiting_for_next_word());
        assert_eq!(s.round().unwrap().current_index(), 1);
        assert_eq!(s.feedback(), None);
    }

    #[test]
    fn test_detail_hint_shown_until_word_changes() {
        let mut s = session();
        s.on_detail_hint();
        assert_eq!(s.detail(), Some("detay"));

        type_current_word(&mut s);
        s.on_submit();
        // Detail halved the word's value
        assert_eq!(s.score(), 50);

        expire_pending_advance(&mut s);
        assert_eq!(s.detail(), None);
    }

    #[test]
    fn test_playing_every_word_completes_session() {
        let mut s = session();
        let total = s.round().unwrap().sequence_len();

        for _ in 0..total {
            type_current_word(&mut s);
            s.on_submit();
            expire_pending_advance(&mut s);
        }

        assert_eq!(s.outcome(), Some(Outcome::Completed));
        assert_eq!(s.score(), (total as u32) * 100);
    }

    #[test]
    fn test_finish_is_terminal_and_locks_input() {
        let mut s = session();
        s.on_finish();

        assert_eq!(s.outcome(), Some(Outcome::Stopped));
        s.on_char('a');
        assert_eq!(s.input(), "");
        s.on_submit();
        assert_eq!(s.score(), 0);

        // Finishing again does not change the outcome
        s.on_finish();
        assert_eq!(s.outcome(), Some(Outcome::Stopped));
    }

    #[test]
    fn test_end_is_reported_exactly_once() {
        let mut s = session();
        assert_eq!(s.take_unrecorded_end(), None);

        type_current_word(&mut s);
        s.on_submit();
        s.on_finish();

        assert_eq!(
            s.take_unrecorded_end(),
            Some((GameMode::Classic, 100))
        );
        assert_eq!(s.take_unrecorded_end(), None);
    }

    #[test]
    fn test_hints_locked_during_advance_pause() {
        let mut s = session();
        type_current_word(&mut s);
        s.on_submit();
        assert!(s.is_waiting_for_next_word());

        s.on_char_hint();
        s.on_detail_hint();
        assert_eq!(s.detail(), None);
        // Next word still starts with a full allowance
        expire_pending_advance(&mut s);
        assert_eq!(s.round().unwrap().char_hints(), 3);
    }
}
