//! UI rendering using ratatui
//!
//! One render function per screen:
//! - Menu: mode selection, username editing and the two leaderboards
//! - Playing: the word panel, jokers, guess input and end-of-game summary
//! - Settings: language and theme pickers
//! - Error: session start failure

use crate::app::{Feedback, PlaySession, Screen, SettingsRow, Shell};
use crate::game::round::RoundState;
use crate::game::GameMode;
use crate::i18n::{self, Language};
use crate::storage::ScoreRow;
use crate::tui::theme::Palette;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, shell: &Shell) {
    let lang = shell.language();
    let palette = shell.theme().palette();

    match &shell.screen {
        Screen::Menu {
            selected,
            username_input,
            editing_username,
        } => {
            render_menu(
                frame,
                shell,
                lang,
                palette,
                *selected,
                username_input,
                *editing_username,
            );
        }
        Screen::Playing { session } => {
            render_game(frame, session, lang, palette);
        }
        Screen::Settings { row, draft, status } => {
            render_settings(frame, lang, palette, *row, draft, *status);
        }
        Screen::Error { message } => {
            render_error(frame, lang, palette, message);
        }
    }
}

/// Render the main menu
fn render_menu(
    frame: &mut Frame,
    shell: &Shell,
    lang: Language,
    palette: Palette,
    selected: usize,
    username_input: &str,
    editing_username: bool,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Username
            Constraint::Length(6),  // Menu options
            Constraint::Min(8),     // Leaderboards
            Constraint::Length(2),  // Footer
        ])
        .margin(2)
        .split(area);

    let title = Paragraph::new(format!("· {} ·", i18n::text(lang, "app_title")))
        .style(Style::default().fg(palette.title).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout[0]);

    // Username line, editable via Tab
    let username_display = if editing_username {
        format!("{}: [{}]_", i18n::text(lang, "username_label"), username_input)
    } else {
        format!("{}: {}", i18n::text(lang, "username_label"), shell.username())
    };
    let username_style = if editing_username {
        Style::default().fg(palette.highlight)
    } else {
        Style::default().fg(palette.dim)
    };
    let username = Paragraph::new(username_display)
        .style(username_style)
        .alignment(Alignment::Center);
    frame.render_widget(username, layout[1]);

    // Menu options
    let items: Vec<ListItem> = crate::app::MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(palette.highlight).bold()
            } else {
                Style::default().fg(palette.text)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, i18n::text(lang, opt.label_key())))
                .style(style)
        })
        .collect();
    frame.render_widget(List::new(items), layout[2]);

    // Leaderboards, one column per mode
    let boards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[3]);
    render_leaderboard(
        frame,
        boards[0],
        lang,
        palette,
        "leaderboard_classic_title",
        &shell.leaderboards.classic,
    );
    render_leaderboard(
        frame,
        boards[1],
        lang,
        palette,
        "leaderboard_anagram_title",
        &shell.leaderboards.anagram,
    );

    render_footer(frame, layout[4], lang, palette, "footer_menu");
}

/// Render one mode's top-10 column
fn render_leaderboard(
    frame: &mut Frame,
    area: Rect,
    lang: Language,
    palette: Palette,
    title_key: &'static str,
    rows: &[ScoreRow],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.dim))
        .title(i18n::text(lang, title_key));

    if rows.is_empty() {
        let empty = Paragraph::new(i18n::text(lang, "no_scores_for_mode"))
            .style(Style::default().fg(palette.dim))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i == 0 {
                Style::default().fg(palette.highlight)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(format!("{:>2}. {} - {}", i + 1, row.username, row.score)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Render the in-game screen
fn render_game(frame: &mut Frame, session: &PlaySession, lang: Language, palette: Palette) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with progress and timer
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_game_header(frame, layout[0], session, lang, palette);

    if session.outcome().is_some() {
        render_end_summary(frame, layout[1], session, lang, palette);
    } else {
        render_word_panel(frame, layout[1], session, lang, palette);
    }
}

/// Header: title, word progress, timer
fn render_game_header(
    frame: &mut Frame,
    area: Rect,
    session: &PlaySession,
    lang: Language,
    palette: Palette,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.dim));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Title
            Constraint::Min(10),    // Progress
            Constraint::Length(10), // Timer
        ])
        .split(inner);

    let title = Paragraph::new(i18n::text(lang, "app_title"))
        .style(Style::default().fg(palette.title).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header[0]);

    if let Some(round) = session.round() {
        let progress = Paragraph::new(word_progress(lang, round))
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center);
        frame.render_widget(progress, header[1]);

        let timer = Paragraph::new(format_timer(round.remaining()))
            .style(Style::default().fg(timer_color(round.remaining())).bold())
            .alignment(Alignment::Right);
        frame.render_widget(timer, header[2]);
    }
}

/// Main play area: stats, description, word cells, jokers, input, feedback
fn render_word_panel(
    frame: &mut Frame,
    area: Rect,
    session: &PlaySession,
    lang: Language,
    palette: Palette,
) {
    let Some(round) = session.round() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Score line
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Description + detail
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Word label
            Constraint::Length(2), // Word cells
            Constraint::Length(1), // Jokers
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Feedback
            Constraint::Min(0),    // Remaining space
            Constraint::Length(1), // Footer
        ])
        .split(area);

    // Score / time / length line
    let word_length = round.current_word().map(|w| w.len()).unwrap_or(0);
    let stats = format!(
        "{}: {}   {}   {}",
        i18n::text(lang, "score"),
        round.score(),
        i18n::remaining_line(lang, round.remaining()),
        i18n::word_length_line(lang, word_length),
    );
    let stats_line = Paragraph::new(stats).style(Style::default().fg(palette.text));
    frame.render_widget(stats_line, layout[0]);

    // Description, classic mode only; the detail joker appends a second line
    if round.mode() == GameMode::Classic {
        if let Some(word) = round.current_word() {
            let mut lines = vec![Line::from(format!(
                "{}: {}",
                i18n::text(lang, "description"),
                word.description
            ))];
            if let Some(detail) = session.detail() {
                lines.push(
                    Line::from(format!(
                        "{} {}",
                        i18n::text(lang, "detail_prefix"),
                        detail
                    ))
                    .style(Style::default().fg(palette.accent)),
                );
            }
            let description =
                Paragraph::new(lines).style(Style::default().fg(palette.text));
            frame.render_widget(description, layout[2]);
        }
    }

    // Word label with the current word's value
    let label = match round.mode() {
        GameMode::Classic => format!(
            "{} ({} {}):",
            i18n::text(lang, "word_label"),
            round.per_word_score(),
            i18n::text(lang, "score"),
        ),
        GameMode::Anagram => format!("{}:", i18n::text(lang, "unscramble_label")),
    };
    let label_line = Paragraph::new(label).style(Style::default().fg(palette.dim));
    frame.render_widget(label_line, layout[4]);

    // The masked or shuffled cells
    let cells = Paragraph::new(round.display_string())
        .style(Style::default().fg(palette.highlight).bold())
        .alignment(Alignment::Center);
    frame.render_widget(cells, layout[5]);

    // Joker counters, classic mode only
    if round.mode() == GameMode::Classic {
        let jokers = Paragraph::new(format_jokers(lang, round))
            .style(Style::default().fg(palette.accent));
        frame.render_widget(jokers, layout[6]);
    }

    // Input line with cursor indicator
    let input = Paragraph::new(format!("> {}_", session.input()))
        .style(Style::default().fg(palette.text));
    frame.render_widget(input, layout[8]);

    // Feedback line
    if let Some(feedback) = session.feedback() {
        let color = match feedback {
            Feedback::Correct => Color::Green,
            Feedback::Wrong => Color::Red,
        };
        let line = Paragraph::new(i18n::text(lang, feedback.message_key()))
            .style(Style::default().fg(color).bold());
        frame.render_widget(line, layout[9]);
    }

    render_footer(frame, layout[11], lang, palette, "footer_game");
}

/// End-of-game summary: how it ended, the score and the praise band
fn render_end_summary(
    frame: &mut Frame,
    area: Rect,
    session: &PlaySession,
    lang: Language,
    palette: Palette,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // How the game ended
            Constraint::Length(4), // Score + praise
            Constraint::Length(2), // Instructions
            Constraint::Min(0),
        ])
        .split(area);

    let Some(outcome) = session.outcome() else {
        return;
    };

    let ended = Paragraph::new(i18n::text(lang, outcome.message_key()))
        .style(Style::default().fg(palette.title).bold())
        .alignment(Alignment::Center);
    frame.render_widget(ended, layout[0]);

    let summary = Paragraph::new(i18n::summary_message(lang, session.score()))
        .style(Style::default().fg(palette.highlight))
        .alignment(Alignment::Center);
    frame.render_widget(summary, layout[1]);

    render_footer(frame, layout[2], lang, palette, "footer_game_over");
}

/// Render the settings screen
fn render_settings(
    frame: &mut Frame,
    lang: Language,
    palette: Palette,
    row: SettingsRow,
    draft: &crate::storage::Settings,
    status: Option<Result<(), ()>>,
) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(2), // Language row
            Constraint::Length(2), // Theme row
            Constraint::Length(2), // Status
            Constraint::Min(0),
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let title = Paragraph::new(i18n::text(lang, "menu_settings"))
        .style(Style::default().fg(palette.title).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout[0]);

    let row_style = |active: bool| {
        if active {
            Style::default().fg(palette.highlight).bold()
        } else {
            Style::default().fg(palette.text)
        }
    };

    let language_line = format!(
        "{}: ← {} →",
        i18n::text(lang, "language"),
        i18n::text(lang, draft.language.name_key()),
    );
    frame.render_widget(
        Paragraph::new(language_line)
            .style(row_style(row == SettingsRow::Language))
            .alignment(Alignment::Center),
        layout[1],
    );

    let theme_line = format!(
        "{}: ← {} →",
        i18n::text(lang, "theme"),
        i18n::text(lang, draft.theme.name_key()),
    );
    frame.render_widget(
        Paragraph::new(theme_line)
            .style(row_style(row == SettingsRow::Theme))
            .alignment(Alignment::Center),
        layout[2],
    );

    if let Some(saved) = status {
        let (key, color) = match saved {
            Ok(()) => ("settings_saved", Color::Green),
            Err(()) => ("settings_save_error", Color::Red),
        };
        frame.render_widget(
            Paragraph::new(i18n::text(lang, key))
                .style(Style::default().fg(color))
                .alignment(Alignment::Center),
            layout[3],
        );
    }

    render_footer(frame, layout[5], lang, palette, "footer_settings");
}

/// Render error screen
fn render_error(frame: &mut Frame, lang: Language, palette: Palette, message: &str) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Percentage(40),
        ])
        .margin(2)
        .split(area);

    let error = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(error, layout[1]);

    render_footer(frame, layout[2], lang, palette, "footer_game_over");
}

/// Dim centered footer with the screen's key hints
fn render_footer(frame: &mut Frame, area: Rect, lang: Language, palette: Palette, key: &'static str) {
    let footer = Paragraph::new(i18n::text(lang, key))
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// "Kelime: 3/10" progress indicator; index is 1-based while words remain
fn word_progress(lang: Language, round: &RoundState) -> String {
    let shown = (round.current_index() + 1).min(round.sequence_len());
    format!(
        "{}: {}/{}",
        i18n::text(lang, "word_label"),
        shown,
        round.sequence_len()
    )
}

/// Format the timer display as m:ss
fn format_timer(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Timer color by urgency
fn timer_color(seconds: u32) -> Color {
    if seconds <= 10 {
        Color::Red
    } else if seconds <= 30 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// "Harf Al (2/3)  Detay Aç (1/1)" joker counter line
fn format_jokers(lang: Language, round: &RoundState) -> String {
    let allowance = round.mode().hint_allowance();
    format!(
        "F1 {} ({}/{})   F2 {} ({}/{})",
        i18n::text(lang, "hint_button"),
        round.char_hints(),
        allowance.chars,
        i18n::text(lang, "detail_button"),
        round.detail_hints(),
        allowance.detail,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timer() {
        assert_eq!(format_timer(0), "0:00");
        assert_eq!(format_timer(9), "0:09");
        assert_eq!(format_timer(75), "1:15");
        assert_eq!(format_timer(200), "3:20");
    }

    #[test]
    fn test_timer_color_thresholds() {
        assert_eq!(timer_color(5), Color::Red);
        assert_eq!(timer_color(10), Color::Red);
        assert_eq!(timer_color(11), Color::Yellow);
        assert_eq!(timer_color(30), Color::Yellow);
        assert_eq!(timer_color(31), Color::Green);
    }
}
