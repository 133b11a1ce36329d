//! Static string localization
//!
//! A typed `(language, key) -> text` lookup over a built-in table, with the
//! key itself as the fallback when a translation is missing. Parameterized
//! strings (score lines, word lengths) get explicit formatting helpers
//! instead of template placeholders in the table.

use crate::game::engine::ScoreBand;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Tr,
    En,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::Tr, Language::En]
    }

    /// Stable identifier used in the settings table
    pub fn key(&self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "tr" => Some(Language::Tr),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Translation key for the language's own display name
    pub fn name_key(&self) -> &'static str {
        match self {
            Language::Tr => "turkish",
            Language::En => "english",
        }
    }
}

/// (key, Turkish, English)
const TABLE: &[(&str, &str, &str)] = &[
    ("app_title", "Kelime Avı", "Word Hunt"),
    ("menu_start_classic", "Klasik Mod Başlat", "Start Classic Mode"),
    ("menu_start_anagram", "Anagram Mod Başlat", "Start Anagram Mode"),
    ("menu_settings", "Ayarlar", "Settings"),
    ("menu_quit", "Çıkış", "Quit"),
    ("word_label", "Kelime", "Word"),
    ("unscramble_label", "Harfleri Diz", "Unscramble"),
    ("remaining_time", "Kalan Süre", "Time Left"),
    ("score", "Puan", "Score"),
    ("word_length", "Kelime Uzunluğu", "Word Length"),
    ("letters_suffix", "Harf", "Letters"),
    ("description", "Açıklama", "Description"),
    ("detail_prefix", "[Detay]", "[Detail]"),
    ("hint_button", "Harf Al", "Get Letter"),
    ("detail_button", "Detay Aç", "Show Detail"),
    ("guess_label", "Tahmininiz", "Your Guess"),
    ("correct_guess", "TEBRİKLER! Doğru Tahmin", "CONGRATULATIONS! Correct Guess"),
    ("wrong_guess", "Yanlış tahmin! Tekrar deneyin.", "Wrong guess! Try again."),
    ("time_up", "ZAMAN DOLDU!", "TIME'S UP!"),
    ("all_words_completed", "TÜM KELİMELER TAMAMLANDI!", "ALL WORDS COMPLETED!"),
    ("game_ended_by_user", "Oyun sonlandırıldı.", "Game ended."),
    ("finish_game", "Oyunu Bitir", "Finish Game"),
    ("final_score_base", "OYUN SONU - TOPLAM PUAN", "GAME OVER - TOTAL SCORE"),
    ("score_praise_5", "★★★★★ MÜKEMMEL! Harika bir skor!", "★★★★★ EXCELLENT! Great score!"),
    (
        "score_praise_4",
        "★★★★☆ ÇOK İYİ! Biraz daha çalışmalısın.",
        "★★★★☆ VERY GOOD! Keep practicing.",
    ),
    ("score_praise_3", "★★★☆☆ İYİ! Orta seviye skor.", "★★★☆☆ GOOD! Average score."),
    (
        "score_praise_2",
        "★★☆☆☆ DAHA İYİSİNİ YAPABİLİRSİN!",
        "★★☆☆☆ YOU CAN DO BETTER!",
    ),
    ("leaderboard_classic_title", "Klasik Mod Skorları", "Classic Mode Scores"),
    ("leaderboard_anagram_title", "Anagram Mod Skorları", "Anagram Mode Scores"),
    ("no_scores_for_mode", "Bu mod için skor yok.", "No scores for this mode."),
    ("username_label", "Kullanıcı Adı", "Username"),
    ("language", "Dil", "Language"),
    ("theme", "Tema", "Theme"),
    ("turkish", "Türkçe", "Turkish"),
    ("english", "İngilizce", "English"),
    ("blue_theme", "Mavi", "Blue"),
    ("dark_theme", "Koyu", "Dark"),
    ("light_theme", "Açık", "Light"),
    ("green_theme", "Yeşil", "Green"),
    ("settings_saved", "Ayarlar kaydedildi ve uygulandı!", "Settings saved and applied!"),
    ("settings_save_error", "Ayarlar kaydedilemedi!", "Could not save settings!"),
    (
        "footer_menu",
        "↑↓ Gezin  Enter Seç  Tab İsim Düzenle  Esc Çıkış",
        "↑↓ Navigate  Enter Select  Tab Edit Name  Esc Quit",
    ),
    (
        "footer_game",
        "Enter Tahmin Et  F1 Harf Al  F2 Detay Aç  Esc Oyunu Bitir",
        "Enter Guess  F1 Get Letter  F2 Show Detail  Esc Finish Game",
    ),
    (
        "footer_settings",
        "↑↓ Gezin  ←→ Değiştir  Enter Kaydet  Esc Geri",
        "↑↓ Navigate  ←→ Change  Enter Save  Esc Back",
    ),
    (
        "footer_game_over",
        "Enter Menüye Dön",
        "Enter Back to Menu",
    ),
];

static LOOKUP: Lazy<HashMap<(Language, &'static str), &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(TABLE.len() * 2);
    for (key, tr, en) in TABLE {
        map.insert((Language::Tr, *key), *tr);
        map.insert((Language::En, *key), *en);
    }
    map
});

/// Look up a translated string, falling back to the key itself.
pub fn text(lang: Language, key: &'static str) -> &'static str {
    LOOKUP.get(&(lang, key)).copied().unwrap_or(key)
}

/// "Kalan Süre: 137s" style formatting for the timer line.
pub fn remaining_line(lang: Language, secs: u32) -> String {
    format!("{}: {}s", text(lang, "remaining_time"), secs)
}

/// "Kelime Uzunluğu: 5 Harf" style formatting.
pub fn word_length_line(lang: Language, length: usize) -> String {
    format!(
        "{}: {} {}",
        text(lang, "word_length"),
        length,
        text(lang, "letters_suffix")
    )
}

/// The end-of-game banner: final score plus the banded praise line.
pub fn summary_message(lang: Language, score: u32) -> String {
    let band = ScoreBand::for_score(score);
    format!(
        "{}: {}\n\n{}",
        text(lang, "final_score_base"),
        score,
        text(lang, band.message_key())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_in_both_languages() {
        assert_eq!(text(Language::Tr, "app_title"), "Kelime Avı");
        assert_eq!(text(Language::En, "app_title"), "Word Hunt");
    }

    #[test]
    fn test_missing_key_falls_back_to_literal() {
        assert_eq!(text(Language::Tr, "no_such_key"), "no_such_key");
        assert_eq!(text(Language::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_table_is_complete_and_unique() {
        let mut keys = Vec::new();
        for (key, tr, en) in TABLE {
            assert!(!tr.is_empty(), "empty Turkish text for {}", key);
            assert!(!en.is_empty(), "empty English text for {}", key);
            keys.push(*key);
        }
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total, "duplicate translation keys");
    }

    #[test]
    fn test_language_key_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_key(lang.key()), Some(*lang));
        }
        assert_eq!(Language::from_key("de"), None);
    }

    #[test]
    fn test_parameterized_lines() {
        assert_eq!(remaining_line(Language::Tr, 137), "Kalan Süre: 137s");
        assert_eq!(word_length_line(Language::En, 5), "Word Length: 5 Letters");
    }

    #[test]
    fn test_summary_message_bands() {
        let top = summary_message(Language::En, 850);
        assert!(top.starts_with("GAME OVER - TOTAL SCORE: 850"));
        assert!(top.contains("EXCELLENT"));

        let low = summary_message(Language::Tr, 120);
        assert!(low.contains("DAHA İYİSİNİ"));
    }
}
