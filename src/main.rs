//! Word Hunt (Kelime Avı) - timed word-guessing game for the terminal
//!
//! Guess the masked word from its description, or unscramble the anagram.
//! Ten words, two hundred seconds, three letter jokers.

mod app;
mod game;
mod i18n;
mod storage;
mod tui;

use app::Shell;
use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};
use storage::Store;
use tui::Tui;

fn main() -> io::Result<()> {
    // Open storage before touching the terminal so failures stay readable
    let store = match Store::open() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("wordhunt: {}", e);
            std::process::exit(1);
        }
    };

    let mut shell = Shell::new(store);
    let mut terminal = Tui::setup()?;

    // Main event loop
    let tick_rate = Duration::from_secs(1);
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, &shell))?;

        // Calculate timeout for next tick
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Poll for events with timeout
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    shell.handle_key(key.code);
                }
            }
        }

        // Word-advance pauses and end-of-session bookkeeping
        shell.poll();

        // Handle timer tick
        if last_tick.elapsed() >= tick_rate {
            shell.on_tick();
            last_tick = Instant::now();
        }

        // Check for quit
        if shell.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
