//! Narrative text for everything that happens in a game
//!
//! Shells receive [`Narration`] events and turn them into player-facing
//! messages with [`describe`], so every shell tells the same story.

use super::accusation::{Accusation, Verdict};
use super::{GameMessage, Tone};

/// Something the player should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration<'a> {
    Welcome,
    Arrived {
        room: &'a str,
        clue: Option<&'a str>,
    },
    InvalidChoice,
    LeftExploration,
    /// Collected clues, in alphabetical order
    EvidenceReview {
        clues: &'a [&'a str],
    },
    InsufficientEvidence,
    Verdict(&'a Accusation),
}

pub const FAREWELL: &str = "The case is closed. Thank you for investigating!";

pub fn describe(event: &Narration<'_>) -> Vec<GameMessage> {
    match event {
        Narration::Welcome => vec![
            GameMessage::new(Tone::Info, "=== INVESTIGATION: EXPLORING THE MANSION ==="),
            GameMessage::new(Tone::Info, "You begin at the entrance. Explore and collect clues."),
        ],
        Narration::Arrived { room, clue } => {
            let found = match clue {
                Some(clue) => GameMessage::new(Tone::Clue, &format!("Clue found here: '{}'", clue)),
                None => GameMessage::new(Tone::Info, "There is no clue in this room."),
            };
            vec![GameMessage::new(Tone::Room, &format!("You are in: {}", room)), found]
        }
        Narration::InvalidChoice => vec![GameMessage::new(
            Tone::Warning,
            "Invalid option or no passage that way. Try again.",
        )],
        Narration::LeftExploration => {
            vec![GameMessage::new(Tone::Info, "You chose to stop exploring.")]
        }
        Narration::EvidenceReview { clues } => {
            let mut messages = vec![GameMessage::new(
                Tone::Info,
                "--- Collected clues (alphabetical order) ---",
            )];
            messages.extend(
                clues
                    .iter()
                    .map(|clue| GameMessage::new(Tone::Clue, &format!("- {}", clue))),
            );
            messages
        }
        Narration::InsufficientEvidence => vec![GameMessage::new(
            Tone::Failure,
            "You did not collect enough clues to accuse anyone.",
        )],
        Narration::Verdict(accusation) => verdict_messages(accusation),
    }
}

fn verdict_messages(accusation: &Accusation) -> Vec<GameMessage> {
    let tally = GameMessage::new(
        Tone::Info,
        &format!(
            "Clues pointing to '{}': {}",
            accusation.accused, accusation.count
        ),
    );
    let decision = match accusation.verdict {
        Verdict::Sustained => GameMessage::new(
            Tone::Success,
            &format!(
                "Decision: accusation {}! There is enough evidence to hold {} responsible.",
                accusation.verdict, accusation.accused
            ),
        ),
        Verdict::Weak => GameMessage::new(
            Tone::Failure,
            &format!(
                "Decision: accusation {}. Not enough clues to support the case against {}.",
                accusation.verdict, accusation.accused
            ),
        ),
    };
    vec![tally, decision]
}
