//! Application state: the screen coordinator and per-session screen state

mod screen;
mod state;

pub use screen::{Leaderboards, MenuOption, Screen, SettingsRow, Shell};
pub use state::{Feedback, Outcome, PlaySession};
