//! Session lifecycle orchestration
//!
//! The engine owns the [`RoundState`] for the active session and is the only
//! place timer-derived fields and the cumulative score are mutated. Intents
//! arriving while no session is running are silent no-ops so a stray late
//! tick or keypress can never corrupt state.

use super::catalog::{CatalogError, WordCatalog};
use super::round::RoundState;
use super::{Difficulty, GameMode, TierCounts, DEFAULT_TIME_LIMIT};
use std::time::Instant;

/// Praise tier for a finished session's total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 800 points and up
    Excellent,
    /// 600..=799
    VeryGood,
    /// 400..=599
    Good,
    /// Everything below 400
    TryHarder,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        if score >= 800 {
            ScoreBand::Excellent
        } else if score >= 600 {
            ScoreBand::VeryGood
        } else if score >= 400 {
            ScoreBand::Good
        } else {
            ScoreBand::TryHarder
        }
    }

    /// Translation key for the band's praise line
    pub fn message_key(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "score_praise_5",
            ScoreBand::VeryGood => "score_praise_4",
            ScoreBand::Good => "score_praise_3",
            ScoreBand::TryHarder => "score_praise_2",
        }
    }
}

/// Drives one game session at a time: Idle until `start`, Running while the
/// timer and word sequence last, Finished on time-up, exhaustion or `finish`.
pub struct GameEngine {
    state: Option<RoundState>,
    started_at: Option<Instant>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            state: None,
            started_at: None,
        }
    }

    /// Start a fresh session, replacing any prior one.
    ///
    /// Samples the default tier counts from the catalog. A catalog failure
    /// propagates and leaves the engine exactly as it was; no partial
    /// session is created.
    pub fn start(
        &mut self,
        mode: GameMode,
        catalog: &dyn WordCatalog,
    ) -> Result<(), CatalogError> {
        let counts = TierCounts::default();
        let mut tiers = Vec::new();
        for tier in Difficulty::all() {
            tiers.push(catalog.fetch(*tier, counts.for_tier(*tier))?);
        }

        self.state = Some(RoundState::new(mode, tiers, DEFAULT_TIME_LIMIT));
        self.started_at = Some(Instant::now());
        Ok(())
    }

    /// The active session's state, if any.
    pub fn state(&self) -> Option<&RoundState> {
        self.state.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.is_running())
    }

    /// Recompute remaining time from the wall clock.
    ///
    /// Hitting zero is a terminal transition. Calling again after any
    /// terminal transition returns 0 and changes nothing.
    pub fn tick(&mut self) -> u32 {
        let Some(state) = self.state.as_mut() else {
            return 0;
        };
        if !state.is_running() {
            return 0;
        }

        let elapsed = self
            .started_at
            .map(|t| t.elapsed().as_secs())
            .unwrap_or(0)
            .min(u64::from(state.time_limit())) as u32;
        let remaining = state.time_limit() - elapsed;
        state.set_remaining(remaining);
        if remaining == 0 {
            state.stop();
        }
        remaining
    }

    /// Evaluate a guess. On success the current per-word score (reduced by
    /// any hints used) is added to the session total.
    ///
    /// The engine does not advance to the next word; the presentation layer
    /// calls [`GameEngine::advance_word`] after its feedback delay.
    pub fn submit_guess(&mut self, guess: &str) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if !state.is_running() {
            return false;
        }

        if state.check_guess(guess) {
            state.bank_word_score();
            true
        } else {
            false
        }
    }

    /// Spend a character joker and reveal one hidden letter.
    pub fn request_char_hint(&mut self) -> Option<char> {
        let state = self.state.as_mut()?;
        if !state.is_running() || state.char_hints() == 0 {
            return None;
        }
        state.consume_char_hint();
        state.reveal_character()
    }

    /// Spend the detail joker and return the word's detail text.
    pub fn request_detail_hint(&mut self) -> Option<String> {
        let state = self.state.as_mut()?;
        if !state.is_running() {
            return None;
        }
        state.use_detail_hint()
    }

    /// Move to the next word. Returns false, ending the session, when
    /// the sequence is exhausted.
    pub fn advance_word(&mut self) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };

        state.advance();
        if state.current_index() >= state.sequence_len() {
            state.stop();
            false
        } else {
            true
        }
    }

    /// Player-initiated early stop. Returns the final score; equivalent to
    /// time-up or sequence exhaustion for leaderboard purposes.
    pub fn finish(&mut self) -> u32 {
        match self.state.as_mut() {
            Some(state) => {
                state.stop();
                state.score()
            }
            None => 0,
        }
    }

    /// Shift the session start into the past (test clock control).
    #[cfg(test)]
    fn backdate(&mut self, secs: u64) {
        if let Some(started) = self.started_at.as_mut() {
            *started -= std::time::Duration::from_secs(secs);
        }
    }
}
