//! Per-session round state
//!
//! Owns everything that changes while a session is played: the shuffled word
//! sequence, the reveal set, hint counters and scores. All mutation goes
//! through the methods here; the engine never pokes at fields.

use super::{GameMode, HintAllowance, Word, CHAR_HINT_COST, WORD_START_SCORE};
use once_cell::unsync::OnceCell;
use rand::prelude::*;
use std::collections::HashSet;

/// Reserved guess that always matches, letting the player skip a word.
/// Surfaced to players as the "pas" command; kept from the original game.
pub const PASS_TOKEN: &str = "pas";

/// Placeholder shown for a hidden character cell in classic mode
const MASK_CHAR: char = '_';

/// Mutable state of one game session.
pub struct RoundState {
    sequence: Vec<Word>,
    mode: GameMode,
    current_index: usize,
    score: u32,
    time_limit: u32,
    remaining: u32,
    running: bool,
    revealed: HashSet<usize>,
    per_word_score: u32,
    hints: HintAllowance,
    /// Cached anagram permutation, built on first display and stable per word
    shuffled: OnceCell<String>,
}

impl RoundState {
    /// Build a round from per-tier word samples.
    ///
    /// Tiers are flattened into one sequence, entries containing whitespace
    /// are dropped (they cannot be shuffled into an anagram), and the result
    /// is uniformly shuffled.
    pub fn new(mode: GameMode, tiers: Vec<Vec<Word>>, time_limit: u32) -> Self {
        Self::new_with_rng(mode, tiers, time_limit, &mut rand::rng())
    }

    /// Build a round using a specific RNG (for testing/seeding).
    pub fn new_with_rng<R: Rng>(
        mode: GameMode,
        tiers: Vec<Vec<Word>>,
        time_limit: u32,
        rng: &mut R,
    ) -> Self {
        let mut sequence: Vec<Word> = tiers
            .into_iter()
            .flatten()
            .filter(|w| !w.text.chars().any(char::is_whitespace))
            .collect();
        sequence.shuffle(rng);

        Self {
            sequence,
            mode,
            current_index: 0,
            score: 0,
            time_limit,
            remaining: time_limit,
            running: true,
            revealed: HashSet::new(),
            per_word_score: WORD_START_SCORE,
            hints: mode.hint_allowance(),
            shuffled: OnceCell::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn per_word_score(&self) -> u32 {
        self.per_word_score
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn char_hints(&self) -> u8 {
        self.hints.chars
    }

    pub fn detail_hints(&self) -> u8 {
        self.hints.detail
    }

    /// The word being played, or `None` once the sequence is exhausted.
    pub fn current_word(&self) -> Option<&Word> {
        self.sequence.get(self.current_index)
    }

    /// What the player sees for the current word, cells joined by spaces.
    ///
    /// Classic mode masks unrevealed positions; anagram mode shows a random
    /// permutation of the uppercased word, shuffled once and then stable for
    /// the rest of the word.
    pub fn display_string(&self) -> String {
        let Some(word) = self.current_word() else {
            return String::new();
        };

        match self.mode {
            GameMode::Anagram => self
                .shuffled
                .get_or_init(|| {
                    let mut letters: Vec<String> = word
                        .text
                        .chars()
                        .map(|c| c.to_uppercase().to_string())
                        .collect();
                    letters.shuffle(&mut rand::rng());
                    letters.join(" ")
                })
                .clone(),
            GameMode::Classic => word
                .text
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if self.revealed.contains(&i) {
                        c.to_string()
                    } else {
                        MASK_CHAR.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Reveal one hidden character at a uniformly random position.
    ///
    /// Classic mode only. Costs [`CHAR_HINT_COST`] points (floored at zero)
    /// and never reveals the same position twice; returns `None` when the
    /// mode forbids it, no word is left, or every position is already shown.
    pub fn reveal_character(&mut self) -> Option<char> {
        if self.mode != GameMode::Classic {
            return None;
        }
        let word = self.sequence.get(self.current_index)?;

        let hidden: Vec<(usize, char)> = word
            .text
            .chars()
            .enumerate()
            .filter(|(i, _)| !self.revealed.contains(i))
            .collect();
        let (index, ch) = *hidden.choose(&mut rand::rng())?;

        self.revealed.insert(index);
        self.per_word_score = self.per_word_score.saturating_sub(CHAR_HINT_COST);
        Some(ch)
    }

    /// Show the current word's detail text, halving its remaining points.
    ///
    /// Classic mode only, at most once per word.
    pub fn use_detail_hint(&mut self) -> Option<String> {
        if self.mode != GameMode::Classic || self.hints.detail == 0 {
            return None;
        }
        let detail = self.sequence.get(self.current_index)?.detail.clone();

        self.hints.detail -= 1;
        self.per_word_score /= 2;
        Some(detail)
    }

    /// Case-insensitive match against the current word.
    ///
    /// The [`PASS_TOKEN`] matches unconditionally.
    pub fn check_guess(&self, guess: &str) -> bool {
        let guess = guess.to_lowercase();
        if guess == PASS_TOKEN {
            return true;
        }
        match self.current_word() {
            Some(word) => guess == word.text.to_lowercase(),
            None => false,
        }
    }

    /// Move to the next word, resetting all per-word state.
    pub fn advance(&mut self) {
        self.current_index += 1;
        self.revealed.clear();
        self.shuffled = OnceCell::new();
        self.hints = self.mode.hint_allowance();
        self.per_word_score = WORD_START_SCORE;
    }

    /// Bank the current per-word score into the session total.
    pub(crate) fn bank_word_score(&mut self) -> u32 {
        let banked = self.per_word_score;
        self.score += banked;
        banked
    }

    pub(crate) fn consume_char_hint(&mut self) {
        self.hints.chars = self.hints.chars.saturating_sub(1);
    }

    pub(crate) fn set_remaining(&mut self, secs: u32) {
        self.remaining = secs;
    }

    pub(crate) fn stop(&mut self) {
        self.running = false;
    }
}
