//! Terminal User Interface
//!
//! Full-screen shell for the mansion using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use crate::game::Tone;

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub border: Color,
    pub prompt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            border: Color::DarkGray,
            prompt: Color::Green,
        }
    }
}

/// Get color and boldness for a message tone
pub fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Room => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Tone::Clue => Style::default().fg(Color::Yellow),
        Tone::Info => Style::default().fg(Color::White),
        Tone::Warning => Style::default().fg(Color::Red),
        Tone::Success => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Tone::Failure => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Smaller logo for header
pub const SMALL_LOGO: &str = " MANSION MYSTERY ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════╗
║                 CONTROLS                  ║
╠═══════════════════════════════════════════╣
║  l / ←   Go through the left door         ║
║  r / →   Go through the right door        ║
║  s       Stop exploring and accuse        ║
║  ?       Toggle this help                 ║
╠═══════════════════════════════════════════╣
║               ACCUSATION                  ║
╠═══════════════════════════════════════════╣
║  Type the suspect's full name             ║
║  Enter   Accuse                           ║
║  Backspace  Erase                         ║
╠═══════════════════════════════════════════╣
║  Once you go through a door there is no   ║
║  way back.                                ║
╚═══════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Prompt
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (narrative + side panel)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),  // Narrative
            Constraint::Percentage(35),  // Exits and clues
        ])
        .split(area)
        .to_vec()
}

/// Create the side panel layout (exits + clue notebook)
pub fn create_side_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),   // Exits
            Constraint::Length(3),   // Evidence meter
            Constraint::Min(3),      // Notebook
        ])
        .split(area)
        .to_vec()
}
