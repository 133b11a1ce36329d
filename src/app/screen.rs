//! Application screen state management
//!
//! Handles transitions between the screens:
//! - Menu (mode selection, username editing, leaderboards)
//! - Playing (one game session, including its end summary)
//! - Settings (language and theme)
//! - Error (session start failure)

use crate::game::GameMode;
use crate::i18n::Language;
use crate::storage::{ScoreRow, Settings, Store};
use crate::tui::theme::Theme;
use crossterm::event::KeyCode;

use super::state::PlaySession;

/// Maximum username length accepted in the menu editor
const MAX_USERNAME_LEN: usize = 12;

/// Menu option on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    StartClassic,
    StartAnagram,
    Settings,
    Quit,
}

impl MenuOption {
    /// All menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[
            MenuOption::StartClassic,
            MenuOption::StartAnagram,
            MenuOption::Settings,
            MenuOption::Quit,
        ]
    }

    /// Translation key for the option's label
    pub fn label_key(&self) -> &'static str {
        match self {
            MenuOption::StartClassic => "menu_start_classic",
            MenuOption::StartAnagram => "menu_start_anagram",
            MenuOption::Settings => "menu_settings",
            MenuOption::Quit => "menu_quit",
        }
    }
}

/// Which row is selected on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Language,
    Theme,
}

/// Top-10 rows for both modes, shown on the menu screen.
#[derive(Debug, Clone, Default)]
pub struct Leaderboards {
    pub classic: Vec<ScoreRow>,
    pub anagram: Vec<ScoreRow>,
}

/// The current application screen
pub enum Screen {
    /// Main menu
    Menu {
        selected: usize,
        username_input: String,
        editing_username: bool,
    },
    /// Playing a session (also covers its end summary)
    Playing { session: PlaySession },
    /// Settings editor; `draft` is applied and saved on Enter
    Settings {
        row: SettingsRow,
        draft: Settings,
        status: Option<Result<(), ()>>,
    },
    /// Session could not be started
    Error { message: String },
}

/// Main application coordinator: owns the store, the saved settings and the
/// current screen.
pub struct Shell {
    pub screen: Screen,
    pub should_quit: bool,
    pub settings: Settings,
    pub leaderboards: Leaderboards,
    username: String,
    store: Store,
}

impl Shell {
    pub fn new(store: Store) -> Self {
        let settings = store.settings().unwrap_or_default();
        let username = match store.username() {
            Ok(Some(name)) if !name.trim().is_empty() => name,
            _ => std::env::var("USER")
                .unwrap_or_else(|_| "oyuncu".to_string())
                .chars()
                .take(MAX_USERNAME_LEN)
                .collect(),
        };

        let mut shell = Self {
            screen: Screen::Menu {
                selected: 0,
                username_input: username.clone(),
                editing_username: false,
            },
            should_quit: false,
            settings,
            leaderboards: Leaderboards::default(),
            username,
            store,
        };
        shell.refresh_leaderboards();
        shell
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Dispatch a key press to the active screen.
    pub fn handle_key(&mut self, code: KeyCode) {
        match &mut self.screen {
            Screen::Menu { .. } => self.menu_key(code),
            Screen::Playing { .. } => self.playing_key(code),
            Screen::Settings { .. } => self.settings_key(code),
            Screen::Error { .. } => {
                if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                    self.go_to_menu();
                }
            }
        }
    }

    /// Per-frame update: word-advance pauses and end-of-session bookkeeping.
    pub fn poll(&mut self) {
        if let Screen::Playing { session } = &mut self.screen {
            session.poll();
        }
        self.record_finished_session();
    }

    /// Once-a-second update: the session timer.
    pub fn on_tick(&mut self) {
        if let Screen::Playing { session } = &mut self.screen {
            session.on_tick();
        }
        self.record_finished_session();
    }

    /// Go back to the main menu
    pub fn go_to_menu(&mut self) {
        self.screen = Screen::Menu {
            selected: 0,
            username_input: self.username.clone(),
            editing_username: false,
        };
    }

    // === Menu ===

    fn menu_key(&mut self, code: KeyCode) {
        let Screen::Menu {
            selected,
            username_input,
            editing_username,
        } = &mut self.screen
        else {
            return;
        };

        if *editing_username {
            match code {
                KeyCode::Char(c) => {
                    if username_input.chars().count() < MAX_USERNAME_LEN && !c.is_whitespace() {
                        username_input.push(c);
                    }
                }
                KeyCode::Backspace => {
                    username_input.pop();
                }
                KeyCode::Tab | KeyCode::Enter => {
                    if username_input.trim().is_empty() {
                        *username_input = self.username.clone();
                    } else {
                        self.username = username_input.clone();
                        let _ = self.store.set_username(&self.username);
                    }
                    *editing_username = false;
                }
                KeyCode::Esc => {
                    *username_input = self.username.clone();
                    *editing_username = false;
                }
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Up => {
                if *selected > 0 {
                    *selected -= 1;
                }
            }
            KeyCode::Down => {
                if *selected < MenuOption::all().len() - 1 {
                    *selected += 1;
                }
            }
            KeyCode::Tab => {
                *editing_username = true;
            }
            KeyCode::Enter => {
                let option = MenuOption::all()[*selected];
                self.menu_select(option);
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn menu_select(&mut self, option: MenuOption) {
        match option {
            MenuOption::StartClassic => self.start_session(GameMode::Classic),
            MenuOption::StartAnagram => self.start_session(GameMode::Anagram),
            MenuOption::Settings => {
                self.screen = Screen::Settings {
                    row: SettingsRow::Language,
                    draft: self.settings,
                    status: None,
                };
            }
            MenuOption::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn start_session(&mut self, mode: GameMode) {
        match PlaySession::start(mode, &self.store) {
            Ok(session) => {
                self.screen = Screen::Playing { session };
            }
            Err(e) => {
                self.screen = Screen::Error {
                    message: e.to_string(),
                };
            }
        }
    }

    // === Playing ===

    fn playing_key(&mut self, code: KeyCode) {
        let Screen::Playing { session } = &mut self.screen else {
            return;
        };

        if session.outcome().is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc) {
                self.go_to_menu();
            }
            return;
        }

        match code {
            KeyCode::Char(c) => session.on_char(c),
            KeyCode::Backspace => session.on_backspace(),
            KeyCode::Enter => session.on_submit(),
            KeyCode::F(1) => session.on_char_hint(),
            KeyCode::F(2) => session.on_detail_hint(),
            KeyCode::Esc => session.on_finish(),
            _ => {}
        }
    }

    /// Persist the score the first time a session reports its end, then
    /// refresh the menu leaderboards. Persistence failures are swallowed:
    /// the in-memory summary stays authoritative for this session.
    fn record_finished_session(&mut self) {
        let Screen::Playing { session } = &mut self.screen else {
            return;
        };
        if let Some((mode, score)) = session.take_unrecorded_end() {
            let _ = self.store.record_if_better(&self.username, mode, score);
            self.refresh_leaderboards();
        }
    }

    fn refresh_leaderboards(&mut self) {
        self.leaderboards = Leaderboards {
            classic: self.store.top_scores(GameMode::Classic, 10).unwrap_or_default(),
            anagram: self.store.top_scores(GameMode::Anagram, 10).unwrap_or_default(),
        };
    }

    // === Settings ===

    fn settings_key(&mut self, code: KeyCode) {
        let Screen::Settings { row, draft, status } = &mut self.screen else {
            return;
        };

        match code {
            KeyCode::Up | KeyCode::Down => {
                *row = match row {
                    SettingsRow::Language => SettingsRow::Theme,
                    SettingsRow::Theme => SettingsRow::Language,
                };
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = code == KeyCode::Right;
                match row {
                    SettingsRow::Language => {
                        draft.language = cycle(Language::all(), draft.language, forward);
                    }
                    SettingsRow::Theme => {
                        draft.theme = cycle(Theme::all(), draft.theme, forward);
                    }
                }
                *status = None;
            }
            KeyCode::Enter => {
                let chosen = *draft;
                let saved = self.store.save_settings(chosen).map_err(|_| ());
                // Applied immediately either way; the store may catch up later
                self.settings = chosen;
                *status = Some(saved);
            }
            KeyCode::Esc => {
                self.go_to_menu();
            }
            _ => {}
        }
    }
}

/// Step through a fixed option list, wrapping at both ends.
fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(Store::open_in_memory().unwrap())
    }

    fn select(shell: &mut Shell, option: MenuOption) {
        let index = MenuOption::all()
            .iter()
            .position(|o| *o == option)
            .unwrap();
        if let Screen::Menu { selected, .. } = &mut shell.screen {
            *selected = index;
        }
        shell.handle_key(KeyCode::Enter);
    }

    #[test]
    fn test_starts_on_menu_with_defaults() {
        let shell = shell();
        assert!(matches!(shell.screen, Screen::Menu { .. }));
        assert_eq!(shell.settings, Settings::default());
        assert!(!shell.should_quit);
        assert!(!shell.username().is_empty());
    }

    #[test]
    fn test_menu_navigation_clamps() {
        let mut shell = shell();
        shell.handle_key(KeyCode::Up);
        if let Screen::Menu { selected, .. } = &shell.screen {
            assert_eq!(*selected, 0);
        }

        for _ in 0..10 {
            shell.handle_key(KeyCode::Down);
        }
        if let Screen::Menu { selected, .. } = &shell.screen {
            assert_eq!(*selected, MenuOption::all().len() - 1);
        }
    }

    #[test]
    fn test_menu_quit() {
        let mut shell = shell();
        select(&mut shell, MenuOption::Quit);
        assert!(shell.should_quit);
    }

    #[test]
    fn test_username_editing_persists() {
        let mut shell = shell();
        shell.handle_key(KeyCode::Tab);

        // Clear the prefilled name, type a new one
        for _ in 0..MAX_USERNAME_LEN {
            shell.handle_key(KeyCode::Backspace);
        }
        for c in "ayse".chars() {
            shell.handle_key(KeyCode::Char(c));
        }
        shell.handle_key(KeyCode::Tab);

        assert_eq!(shell.username(), "ayse");
        assert_eq!(shell.store.username().unwrap(), Some("ayse".to_string()));
    }

    #[test]
    fn test_blank_username_edit_restores_previous() {
        let mut shell = shell();
        let before = shell.username().to_string();

        shell.handle_key(KeyCode::Tab);
        for _ in 0..MAX_USERNAME_LEN {
            shell.handle_key(KeyCode::Backspace);
        }
        shell.handle_key(KeyCode::Tab);

        assert_eq!(shell.username(), before);
    }

    #[test]
    fn test_start_classic_session() {
        let mut shell = shell();
        select(&mut shell, MenuOption::StartClassic);

        let Screen::Playing { session } = &shell.screen else {
            panic!("expected playing screen");
        };
        assert_eq!(session.mode(), GameMode::Classic);
        assert!(session.round().unwrap().is_running());
        assert_eq!(session.round().unwrap().sequence_len(), 10);
    }

    #[test]
    fn test_finish_records_score_and_returns_to_menu() {
        let mut shell = shell();
        select(&mut shell, MenuOption::StartClassic);

        // Solve the first word, then stop early
        let word = {
            let Screen::Playing { session } = &shell.screen else {
                unreachable!()
            };
            session.round().unwrap().current_word().unwrap().text.clone()
        };
        for c in word.chars() {
            shell.handle_key(KeyCode::Char(c));
        }
        shell.handle_key(KeyCode::Enter);
        shell.handle_key(KeyCode::Esc);
        shell.poll();

        let top = shell.store.top_scores(GameMode::Classic, 10).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].score, 100);
        assert_eq!(shell.leaderboards.classic.len(), 1);

        // Enter on the summary goes back to the menu
        shell.handle_key(KeyCode::Enter);
        assert!(matches!(shell.screen, Screen::Menu { .. }));
    }

    #[test]
    fn test_score_recorded_only_once() {
        let mut shell = shell();
        select(&mut shell, MenuOption::StartClassic);
        shell.handle_key(KeyCode::Esc);

        shell.poll();
        shell.poll();
        shell.on_tick();

        // The zero-point finish is written once; later polls must not
        // attempt (or duplicate) the write
        let top = shell.store.top_scores(GameMode::Classic, 10).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].score, 0);
    }

    #[test]
    fn test_settings_cycle_and_save() {
        let mut shell = shell();
        select(&mut shell, MenuOption::Settings);

        // Language: tr -> en
        shell.handle_key(KeyCode::Right);
        // Theme row: blue -> green (backwards wraps)
        shell.handle_key(KeyCode::Down);
        shell.handle_key(KeyCode::Left);
        shell.handle_key(KeyCode::Enter);

        assert_eq!(shell.settings.language, Language::En);
        assert_eq!(shell.settings.theme, Theme::Green);
        assert_eq!(shell.store.settings().unwrap(), shell.settings);

        let Screen::Settings { status, .. } = &shell.screen else {
            panic!("expected settings screen");
        };
        assert_eq!(*status, Some(Ok(())));

        shell.handle_key(KeyCode::Esc);
        assert!(matches!(shell.screen, Screen::Menu { .. }));
    }

    #[test]
    fn test_cycle_wraps_both_directions() {
        let options = [1, 2, 3];
        assert_eq!(cycle(&options, 3, true), 1);
        assert_eq!(cycle(&options, 1, false), 3);
        assert_eq!(cycle(&options, 2, true), 3);
    }
}
