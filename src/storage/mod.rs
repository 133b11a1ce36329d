//! Persistent storage using SQLite (rusqlite)
//!
//! One database in the OS-standard data directory holds everything the game
//! persists:
//! - `meta`: schema version, username and the two saved settings
//! - `words`: the word catalog, seeded once from the embedded list
//! - `highscores`: best score per username per mode
//!
//! Translation tables and theme palettes are built-in statics and are never
//! written here; only the language/theme names are.

use crate::game::catalog::{embedded_words, CatalogError, WordCatalog};
use crate::game::{Difficulty, GameMode, Word};
use crate::i18n::Language;
use crate::tui::theme::Theme;
use directories::ProjectDirs;
use rusqlite::{params, Connection, Result as SqlResult};
use std::path::PathBuf;

/// Current schema version. Bump this when making schema changes.
/// Version history:
/// - v1: meta, words and highscores tables
const SCHEMA_VERSION: u32 = 1;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StoreError {
    /// Database error from SQLite
    Database(rusqlite::Error),
    /// Could not determine data directory
    NoDataDirectory,
    /// Schema version mismatch (future version)
    FutureSchemaVersion { found: u32, supported: u32 },
    /// Failed to create data directory
    CreateDirFailed(std::io::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "database error: {}", e),
            StoreError::NoDataDirectory => write!(f, "could not determine data directory"),
            StoreError::FutureSchemaVersion { found, supported } => {
                write!(
                    f,
                    "database schema version {} is newer than supported version {}",
                    found, supported
                )
            }
            StoreError::CreateDirFailed(e) => write!(f, "failed to create data directory: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e)
    }
}

/// The persisted settings subset: exactly language and theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub language: Language,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Tr,
            theme: Theme::Blue,
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub username: String,
    pub score: u32,
}

/// The main storage handle.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create the database and make sure it is seeded.
    ///
    /// Uses OS-standard directories:
    /// - Linux: `$XDG_DATA_HOME/wordhunt/` or `~/.local/share/wordhunt/`
    /// - macOS: `~/Library/Application Support/wordhunt/`
    pub fn open() -> Result<Self, StoreError> {
        let data_dir = Self::data_dir()?;
        std::fs::create_dir_all(&data_dir).map_err(StoreError::CreateDirFailed)?;

        let db_path = data_dir.join("wordhunt.db");
        let conn = Connection::open(&db_path)?;

        let store = Store { conn };
        store.initialize_schema()?;
        store.seed_words_if_empty()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Store { conn };
        store.initialize_schema()?;
        store.seed_words_if_empty()?;
        Ok(store)
    }

    /// Get the OS-standard data directory.
    pub fn data_dir() -> Result<PathBuf, StoreError> {
        ProjectDirs::from("", "", "wordhunt")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StoreError::NoDataDirectory)
    }

    // === Settings and identity ===

    /// Get the saved username.
    pub fn username(&self) -> SqlResult<Option<String>> {
        self.conn
            .query_row("SELECT username FROM meta LIMIT 1", [], |row| {
                row.get::<_, Option<String>>(0)
            })
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                _ => Err(e),
            })
    }

    /// Save the username.
    pub fn set_username(&self, username: &str) -> SqlResult<()> {
        self.conn
            .execute("UPDATE meta SET username = ?1", params![username])?;
        Ok(())
    }

    /// Load the saved settings. Unknown or missing values degrade to the
    /// defaults rather than erroring.
    pub fn settings(&self) -> Result<Settings, StoreError> {
        let row = self.conn.query_row(
            "SELECT language, theme FROM meta LIMIT 1",
            [],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        );

        let defaults = Settings::default();
        match row {
            Ok((language, theme)) => Ok(Settings {
                language: Language::from_key(&language).unwrap_or(defaults.language),
                theme: Theme::from_key(&theme).unwrap_or(defaults.theme),
            }),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(defaults),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    /// Persist the settings subset.
    pub fn save_settings(&self, settings: Settings) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE meta SET language = ?1, theme = ?2",
            params![settings.language.key(), settings.theme.key()],
        )?;
        Ok(())
    }

    // === High scores ===

    /// Record a finished score if it strictly beats the stored best for this
    /// username and mode. A blank username is a silent no-op.
    ///
    /// Returns whether anything was written.
    pub fn record_if_better(
        &self,
        username: &str,
        mode: GameMode,
        score: u32,
    ) -> Result<bool, StoreError> {
        let username = username.trim();
        if username.is_empty() {
            return Ok(false);
        }

        let written = self.conn.execute(
            "INSERT INTO highscores (username, mode, score, updated_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (username, mode) DO UPDATE
             SET score = excluded.score, updated_at = excluded.updated_at
             WHERE excluded.score > highscores.score",
            params![username, mode.key(), score, now_millis()],
        )?;
        Ok(written > 0)
    }

    /// Top scores for a mode, best first, ties broken by username.
    pub fn top_scores(&self, mode: GameMode, limit: usize) -> Result<Vec<ScoreRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT username, score FROM highscores WHERE mode = ?1
             ORDER BY score DESC, username ASC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![mode.key(), limit as i64], |row| {
            Ok(ScoreRow {
                username: row.get(0)?,
                score: row.get(1)?,
            })
        })?;

        let mut scores = Vec::new();
        for row in rows {
            scores.push(row?);
        }
        Ok(scores)
    }

    // === Word catalog ===

    /// Number of catalog words in the store.
    pub fn word_count(&self) -> Result<i64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Fill the words table from the embedded list when it is empty.
    fn seed_words_if_empty(&self) -> Result<(), StoreError> {
        if self.word_count()? > 0 {
            return Ok(());
        }

        let mut stmt = self.conn.prepare(
            "INSERT INTO words (difficulty, word, description, detail) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (tier, word) in embedded_words() {
            stmt.execute(params![
                tier.key(),
                &word.text,
                &word.description,
                &word.detail
            ])?;
        }
        Ok(())
    }

    // === Schema ===

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let current_version = self.get_schema_version()?;

        if current_version == 0 {
            self.create_schema_v1()?;
        } else if current_version > SCHEMA_VERSION {
            // Database is from a newer build
            return Err(StoreError::FutureSchemaVersion {
                found: current_version,
                supported: SCHEMA_VERSION,
            });
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Result<u32, StoreError> {
        let table_exists: bool = self.conn.query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='meta'",
            [],
            |row| row.get(0),
        )?;

        if !table_exists {
            return Ok(0);
        }

        let version: u32 = self
            .conn
            .query_row("SELECT schema_version FROM meta LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        Ok(version)
    }

    fn create_schema_v1(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            -- Meta table: schema version, identity and saved settings
            CREATE TABLE meta (
                schema_version INTEGER NOT NULL,
                username TEXT,
                language TEXT NOT NULL,
                theme TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );

            -- Word catalog, sampled per difficulty at session start
            CREATE TABLE words (
                id INTEGER PRIMARY KEY,
                difficulty TEXT NOT NULL,
                word TEXT NOT NULL,
                description TEXT NOT NULL,
                detail TEXT NOT NULL
            );

            -- Index for per-tier sampling
            CREATE INDEX idx_words_difficulty ON words (difficulty);

            -- Best score per username per mode
            CREATE TABLE highscores (
                username TEXT NOT NULL,
                mode TEXT NOT NULL,
                score INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (username, mode)
            );
            "#,
        )?;

        let defaults = Settings::default();
        self.conn.execute(
            "INSERT INTO meta (schema_version, username, language, theme, created_at)
             VALUES (?1, NULL, ?2, ?3, ?4)",
            params![
                SCHEMA_VERSION,
                defaults.language.key(),
                defaults.theme.key(),
                now_millis()
            ],
        )?;

        Ok(())
    }
}

impl WordCatalog for Store {
    /// Random per-tier sample, the SQLite spelling of the original
    /// repository's `ORDER BY NEWID()`.
    fn fetch(&self, tier: Difficulty, count: usize) -> Result<Vec<Word>, CatalogError> {
        let fetch_rows = || -> Result<Vec<Word>, rusqlite::Error> {
            let mut stmt = self.conn.prepare(
                "SELECT word, description, detail FROM words
                 WHERE difficulty = ?1 ORDER BY RANDOM() LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![tier.key(), count as i64], |row| {
                Ok(Word {
                    text: row.get(0)?,
                    description: row.get(1)?,
                    detail: row.get(2)?,
                })
            })?;
            rows.collect()
        };

        fetch_rows().map_err(|e| CatalogError::Unavailable(e.to_string()))
    }
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_has_default_settings() {
        let store = Store::open_in_memory().unwrap();
        let settings = store.settings().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(store.username().unwrap().is_none());
    }

    #[test]
    fn test_settings_roundtrip() {
        let store = Store::open_in_memory().unwrap();

        let saved = Settings {
            language: Language::En,
            theme: Theme::Dark,
        };
        store.save_settings(saved).unwrap();
        assert_eq!(store.settings().unwrap(), saved);
    }

    #[test]
    fn test_username_roundtrip() {
        let store = Store::open_in_memory().unwrap();

        store.set_username("ayse").unwrap();
        assert_eq!(store.username().unwrap(), Some("ayse".to_string()));

        store.set_username("mehmet").unwrap();
        assert_eq!(store.username().unwrap(), Some("mehmet".to_string()));
    }

    #[test]
    fn test_record_if_better_keeps_best_score() {
        let store = Store::open_in_memory().unwrap();

        assert!(store.record_if_better("ayse", GameMode::Classic, 500).unwrap());
        // A lower score is ignored
        assert!(!store.record_if_better("ayse", GameMode::Classic, 300).unwrap());

        let top = store.top_scores(GameMode::Classic, 10).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].score, 500);

        // A strictly higher score replaces it
        assert!(store.record_if_better("ayse", GameMode::Classic, 700).unwrap());
        let top = store.top_scores(GameMode::Classic, 10).unwrap();
        assert_eq!(top[0].score, 700);

        // An equal score does not
        assert!(!store.record_if_better("ayse", GameMode::Classic, 700).unwrap());
    }

    #[test]
    fn test_record_if_better_ignores_blank_usernames() {
        let store = Store::open_in_memory().unwrap();

        assert!(!store.record_if_better("", GameMode::Classic, 500).unwrap());
        assert!(!store.record_if_better("   ", GameMode::Classic, 500).unwrap());
        assert!(store.top_scores(GameMode::Classic, 10).unwrap().is_empty());
    }

    #[test]
    fn test_record_if_better_trims_username() {
        let store = Store::open_in_memory().unwrap();

        assert!(store.record_if_better("  ayse  ", GameMode::Classic, 100).unwrap());
        let top = store.top_scores(GameMode::Classic, 10).unwrap();
        assert_eq!(top[0].username, "ayse");
    }

    #[test]
    fn test_modes_have_separate_scores() {
        let store = Store::open_in_memory().unwrap();

        store.record_if_better("ayse", GameMode::Classic, 500).unwrap();
        store.record_if_better("ayse", GameMode::Anagram, 200).unwrap();

        let classic = store.top_scores(GameMode::Classic, 10).unwrap();
        let anagram = store.top_scores(GameMode::Anagram, 10).unwrap();
        assert_eq!(classic[0].score, 500);
        assert_eq!(anagram[0].score, 200);
    }

    #[test]
    fn test_top_scores_ordering_and_limit() {
        let store = Store::open_in_memory().unwrap();

        store.record_if_better("cem", GameMode::Classic, 300).unwrap();
        store.record_if_better("ayse", GameMode::Classic, 700).unwrap();
        store.record_if_better("deniz", GameMode::Classic, 300).unwrap();
        store.record_if_better("banu", GameMode::Classic, 900).unwrap();

        let top = store.top_scores(GameMode::Classic, 10).unwrap();
        let names: Vec<&str> = top.iter().map(|r| r.username.as_str()).collect();
        // Score descending, ties by username ascending
        assert_eq!(names, vec!["banu", "ayse", "cem", "deniz"]);

        let top2 = store.top_scores(GameMode::Classic, 2).unwrap();
        assert_eq!(top2.len(), 2);
        assert_eq!(top2[0].username, "banu");
    }

    #[test]
    fn test_words_are_seeded_once() {
        let store = Store::open_in_memory().unwrap();

        let count = store.word_count().unwrap();
        assert!(count > 0);

        // Re-running the seed pass changes nothing
        store.seed_words_if_empty().unwrap();
        assert_eq!(store.word_count().unwrap(), count);
    }

    #[test]
    fn test_fetch_respects_tier_and_count() {
        let store = Store::open_in_memory().unwrap();

        let words = store.fetch(Difficulty::Medium, 4).unwrap();
        assert_eq!(words.len(), 4);

        // All four are distinct catalog entries
        let mut texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 4);
    }

    #[test]
    fn test_fetch_returns_fewer_when_tier_is_exhausted() {
        let store = Store::open_in_memory().unwrap();

        let available = store.fetch(Difficulty::Hard, 10_000).unwrap();
        assert!(!available.is_empty());
        assert!((available.len() as i64) < store.word_count().unwrap());
    }
}
