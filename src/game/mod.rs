//! Core game logic and session management

pub mod accusation;
pub mod exploration;
pub mod narrative;

pub use accusation::{evaluate, evaluate_with_threshold, Accusation, Evaluation, Verdict};
pub use exploration::{Command, Crossroads, ExplorationController, ExplorationState, Expedition, Investigator};
pub use narrative::{describe, Narration};

use crate::data::{MansionBlueprint, RoomTree, Rules, SuspectIndex};
use crate::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// How a message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Room,
    Clue,
    Info,
    Warning,
    Success,
    Failure,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub tone: Tone,
    pub text: String,
}

impl GameMessage {
    pub fn new(tone: Tone, text: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            tone,
            text: text.to_string(),
        }
    }
}

/// One game over one mansion
///
/// Rules are fixed once the blueprint has been validated. Fields drop in
/// declaration order: the suspect index goes before the room tree.
pub struct Game {
    rules: Rules,
    suspects: SuspectIndex,
    mansion: RoomTree,
    journal: Vec<GameMessage>,
}

impl Game {
    pub fn from_blueprint(blueprint: &MansionBlueprint) -> Result<Self> {
        blueprint.validate()?;
        Ok(Self {
            rules: blueprint.rules,
            suspects: blueprint.build_index()?,
            mansion: blueprint.build_tree()?,
            journal: Vec::new(),
        })
    }

    /// The classic eight-room mansion
    pub fn classic() -> Result<Self> {
        Self::from_blueprint(&MansionBlueprint::default())
    }

    /// A copy of the validated rules
    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn mansion(&self) -> &RoomTree {
        &self.mansion
    }

    pub fn suspects(&self) -> &SuspectIndex {
        &self.suspects
    }

    /// Everything the player has been told so far
    pub fn journal(&self) -> &[GameMessage] {
        &self.journal
    }

    /// Explore the mansion, then accuse a suspect.
    ///
    /// The accusation is skipped when no clue was found.
    pub fn play<I: Investigator>(&mut self, investigator: &mut I) -> Result<Evaluation> {
        let mut recorder = Recorder {
            inner: investigator,
            journal: &mut self.journal,
        };
        recorder.narrate(&Narration::Welcome)?;

        let expedition = ExplorationController::new(&self.mansion).run(&mut recorder)?;
        let clues = expedition.clues;
        if clues.is_empty() {
            recorder.narrate(&Narration::InsufficientEvidence)?;
            return Ok(Evaluation::InsufficientEvidence);
        }

        let sorted: Vec<&str> = clues.iter().collect();
        recorder.narrate(&Narration::EvidenceReview { clues: &sorted })?;

        let accused = recorder.name_suspect(&self.suspects.suspects())?;
        let evaluation = evaluate_with_threshold(
            &clues,
            &self.suspects,
            &accused,
            self.rules.sustain_threshold,
        );
        if let Evaluation::Scored(accusation) = &evaluation {
            info!(
                "accused {:?}: {} matching clues, {}",
                accusation.accused, accusation.count, accusation.verdict
            );
            recorder.narrate(&Narration::Verdict(accusation))?;
        }
        Ok(evaluation)
    }
}

/// Copies every narration into the journal before passing it on
struct Recorder<'g, I> {
    inner: I,
    journal: &'g mut Vec<GameMessage>,
}

impl<I: Investigator> Investigator for Recorder<'_, I> {
    fn narrate(&mut self, event: &Narration<'_>) -> Result<()> {
        self.journal.extend(describe(event));
        self.inner.narrate(event)
    }

    fn choose(&mut self, crossroads: &Crossroads<'_>) -> Result<Command> {
        self.inner.choose(crossroads)
    }

    fn name_suspect(&mut self, suspects: &[&str]) -> Result<String> {
        self.inner.name_suspect(suspects)
    }
}
