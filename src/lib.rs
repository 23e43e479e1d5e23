//! Mansion Mystery
//!
//! A text mystery game where you walk the rooms of a mansion, pick up
//! clues, and finally accuse the suspect you believe is responsible.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Start in the entrance hall and descend left or right
//! - **Clues**: Every room may hide one clue, collected automatically
//! - **Accusation**: Two or more clues pointing at the accused sustain the case
//!
//! # Architecture
//!
//! - `data` - Room tree, clue collection, suspect index, mansion blueprints
//! - `game` - Exploration controller, accusation scoring, narrative, session
//! - `tui` - Terminal user interface with ratatui
//! - `console` - Plain line-based shell for pipes and dumb terminals

pub mod console;
pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MansionError {
    #[error("A room needs a name")]
    EmptyName,

    #[error("{kind} is {len} bytes long, the limit is {max}")]
    TextTooLong {
        kind: &'static str,
        len: usize,
        max: usize,
    },

    #[error("Out of memory while storing {0}")]
    OutOfMemory(&'static str),

    #[error("A suspect index needs at least one bucket")]
    ZeroBuckets,

    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Input closed before the investigator answered")]
    InputClosed,
}
