//! Word catalog access
//!
//! The engine only sees the [`WordCatalog`] trait; the production
//! implementation lives in the storage layer. This module also embeds the
//! seed word list the database is initialized from.

use super::{Difficulty, Word};
use once_cell::sync::Lazy;

/// Embedded seed catalog, tab-separated: difficulty, word, description, detail.
/// One entry per line; lines starting with '#' are comments.
static WORDS_DATA: &str = include_str!("../../data/words.tsv");

static EMBEDDED: Lazy<Vec<(Difficulty, Word)>> = Lazy::new(|| {
    WORDS_DATA
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .filter_map(parse_line)
        .collect()
});

fn parse_line(line: &str) -> Option<(Difficulty, Word)> {
    let mut fields = line.splitn(4, '\t');
    let tier = Difficulty::from_key(fields.next()?)?;
    let text = fields.next()?;
    let description = fields.next()?;
    let detail = fields.next()?;
    Some((tier, Word::new(text, description, detail)))
}

/// The built-in words used to seed an empty database.
pub fn embedded_words() -> &'static [(Difficulty, Word)] {
    &EMBEDDED
}

/// Errors from a word catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The backing store could not be reached or queried
    Unavailable(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Unavailable(reason) => {
                write!(f, "word catalog unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Source of words for a session.
///
/// Returns up to `count` words from the tier in unspecified (random) order;
/// fewer when the tier is exhausted.
pub trait WordCatalog {
    fn fetch(&self, tier: Difficulty, count: usize) -> Result<Vec<Word>, CatalogError>;
}
