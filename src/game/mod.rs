#![allow(dead_code)]
//! Game logic: words, modes, the round state machine and the session engine

pub mod catalog;
pub mod engine;
pub mod round;

/// Points a fresh word is worth before any hints are used
pub const WORD_START_SCORE: u32 = 100;

/// Points deducted for revealing a single character
pub const CHAR_HINT_COST: u32 = 20;

/// Default round duration in seconds
pub const DEFAULT_TIME_LIMIT: u32 = 200;

/// A word in the catalog: the text to guess plus its two hint strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word itself
    pub text: String,
    /// Short description shown alongside the masked word
    pub description: String,
    /// Longer hint, revealed only through the detail joker
    pub detail: String,
}

impl Word {
    pub fn new(
        text: impl Into<String>,
        description: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
            detail: detail.into(),
        }
    }

    /// Length in characters, not bytes (catalog words are Turkish)
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The two ways to play a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Letters hidden behind mask cells, revealed by hints or solved outright
    Classic,
    /// All letters visible but shuffled; no hints
    Anagram,
}

impl GameMode {
    /// Stable identifier used as the high-score key
    pub fn key(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Anagram => "anagram",
        }
    }

    /// Hint allowance a word starts with in this mode
    pub fn hint_allowance(&self) -> HintAllowance {
        match self {
            GameMode::Classic => HintAllowance { chars: 3, detail: 1 },
            GameMode::Anagram => HintAllowance { chars: 0, detail: 0 },
        }
    }
}

/// Per-word hint budget, reset on every word advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintAllowance {
    /// Reveal-a-character jokers
    pub chars: u8,
    /// Show-the-detail jokers
    pub detail: u8,
}

/// Word difficulty tier in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Stable identifier used in the words table
    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// How many words each tier contributes to a session sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl TierCounts {
    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }

    pub fn for_tier(&self, tier: Difficulty) -> usize {
        match tier {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for TierCounts {
    fn default() -> Self {
        Self {
            easy: 3,
            medium: 4,
            hard: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_length_counts_chars() {
        let word = Word::new("kitap", "basılı yayın", "sayfalardan oluşur");
        assert_eq!(word.len(), 5);

        // Turkish letters are multi-byte but single chars
        let word = Word::new("ağaç", "bitki", "gövdesi odunsu");
        assert_eq!(word.len(), 4);
        assert!(word.text.len() > 4);
    }

    #[test]
    fn test_mode_keys_are_distinct() {
        assert_eq!(GameMode::Classic.key(), "classic");
        assert_eq!(GameMode::Anagram.key(), "anagram");
    }

    #[test]
    fn test_hint_allowance_per_mode() {
        let classic = GameMode::Classic.hint_allowance();
        assert_eq!(classic.chars, 3);
        assert_eq!(classic.detail, 1);

        let anagram = GameMode::Anagram.hint_allowance();
        assert_eq!(anagram.chars, 0);
        assert_eq!(anagram.detail, 0);
    }

    #[test]
    fn test_difficulty_key_roundtrip() {
        for tier in Difficulty::all() {
            assert_eq!(Difficulty::from_key(tier.key()), Some(*tier));
        }
        assert_eq!(Difficulty::from_key("impossible"), None);
    }

    #[test]
    fn test_default_tier_counts() {
        let counts = TierCounts::default();
        assert_eq!(counts.easy, 3);
        assert_eq!(counts.medium, 4);
        assert_eq!(counts.hard, 3);
        assert_eq!(counts.total(), 10);
    }
}
