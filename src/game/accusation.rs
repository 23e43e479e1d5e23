//! Scoring an accusation against the collected clues

use serde::{Deserialize, Serialize};

use crate::data::{ClueCollection, SuspectIndex, DEFAULT_SUSTAIN_THRESHOLD};

/// Outcome of an accusation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Sustained,
    Weak,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Sustained => write!(f, "SUSTAINED"),
            Verdict::Weak => write!(f, "WEAK"),
        }
    }
}

/// A scored accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accusation {
    pub accused: String,
    /// Collected clues pointing at the accused
    pub count: usize,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// No clues were collected, so nobody can be accused
    InsufficientEvidence,
    Scored(Accusation),
}

/// Score `accused` with the standard threshold of two clues.
pub fn evaluate(clues: &ClueCollection, index: &SuspectIndex, accused: &str) -> Evaluation {
    evaluate_with_threshold(clues, index, accused, DEFAULT_SUSTAIN_THRESHOLD)
}

pub fn evaluate_with_threshold(
    clues: &ClueCollection,
    index: &SuspectIndex,
    accused: &str,
    threshold: usize,
) -> Evaluation {
    if clues.is_empty() {
        return Evaluation::InsufficientEvidence;
    }

    let count = clues
        .iter()
        .filter(|clue| index.lookup(clue) == Some(accused))
        .count();
    let verdict = if count >= threshold {
        Verdict::Sustained
    } else {
        Verdict::Weak
    };

    Evaluation::Scored(Accusation {
        accused: accused.to_string(),
        count,
        verdict,
    })
}
