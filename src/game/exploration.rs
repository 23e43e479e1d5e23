//! Walking the mansion
//!
//! The controller starts at the entrance and asks an [`Investigator`] where
//! to go next. Descending is a commitment: once the player enters a child
//! room the parent's other branch is never offered again.

use log::debug;

use crate::data::{ClueCollection, Room, RoomTree};
use crate::game::narrative::Narration;
use crate::Result;

/// A navigation decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Stop,
    /// Anything the player typed that is not a known key
    Unrecognized(String),
}

impl Command {
    /// Map a single key to a command
    pub fn from_key(key: char) -> Self {
        match key {
            'l' | 'L' => Command::Left,
            'r' | 'R' => Command::Right,
            's' | 'S' => Command::Stop,
            other => Command::Unrecognized(other.to_string()),
        }
    }
}

/// The exits offered in the current room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossroads<'a> {
    pub room: &'a str,
    pub left: Option<&'a str>,
    pub right: Option<&'a str>,
}

impl<'a> Crossroads<'a> {
    pub fn of(room: &'a Room) -> Self {
        Self {
            room: room.name(),
            left: room.left().map(Room::name),
            right: room.right().map(Room::name),
        }
    }
}

/// The player's side of the game: answers prompts and hears narration.
///
/// Calls block until the player answers.
pub trait Investigator {
    fn narrate(&mut self, event: &Narration<'_>) -> Result<()>;

    fn choose(&mut self, crossroads: &Crossroads<'_>) -> Result<Command>;

    /// Name of the suspect to accuse
    fn name_suspect(&mut self, suspects: &[&str]) -> Result<String>;
}

impl<I: Investigator + ?Sized> Investigator for &mut I {
    fn narrate(&mut self, event: &Narration<'_>) -> Result<()> {
        (**self).narrate(event)
    }

    fn choose(&mut self, crossroads: &Crossroads<'_>) -> Result<Command> {
        (**self).choose(crossroads)
    }

    fn name_suspect(&mut self, suspects: &[&str]) -> Result<String> {
        (**self).name_suspect(suspects)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationState<'t> {
    AtRoom(&'t Room),
    Finished,
}

/// What one exploration produced
#[derive(Debug, Default)]
pub struct Expedition {
    pub clues: ClueCollection,
    pub path: Vec<String>,
}

pub struct ExplorationController<'t> {
    state: ExplorationState<'t>,
    pending_arrival: bool,
    expedition: Expedition,
}

impl<'t> ExplorationController<'t> {
    pub fn new(tree: &'t RoomTree) -> Self {
        Self {
            state: ExplorationState::AtRoom(tree.root()),
            pending_arrival: true,
            expedition: Expedition::default(),
        }
    }

    pub fn state(&self) -> ExplorationState<'t> {
        self.state
    }

    /// Names of the rooms entered so far, in order
    pub fn path(&self) -> &[String] {
        &self.expedition.path
    }

    /// Run one prompt cycle. Does nothing once finished.
    pub fn step<I: Investigator>(&mut self, investigator: &mut I) -> Result<ExplorationState<'t>> {
        let room = match self.state {
            ExplorationState::AtRoom(room) => room,
            ExplorationState::Finished => return Ok(ExplorationState::Finished),
        };

        if self.pending_arrival {
            self.arrive(room, investigator)?;
            self.pending_arrival = false;
        }

        let command = investigator.choose(&Crossroads::of(room))?;
        let next = match &command {
            Command::Left => room.left(),
            Command::Right => room.right(),
            Command::Stop => {
                investigator.narrate(&Narration::LeftExploration)?;
                self.state = ExplorationState::Finished;
                return Ok(self.state);
            }
            Command::Unrecognized(_) => None,
        };

        match next {
            Some(child) => {
                self.state = ExplorationState::AtRoom(child);
                self.pending_arrival = true;
            }
            None => {
                debug!("rejected {:?} in {}", command, room.name());
                investigator.narrate(&Narration::InvalidChoice)?;
            }
        }
        Ok(self.state)
    }

    /// Explore until the player stops.
    pub fn run<I: Investigator>(mut self, investigator: &mut I) -> Result<Expedition> {
        while self.step(investigator)? != ExplorationState::Finished {}
        debug!(
            "exploration finished after {} rooms with {} clues",
            self.expedition.path.len(),
            self.expedition.clues.len()
        );
        Ok(self.expedition)
    }

    fn arrive<I: Investigator>(&mut self, room: &'t Room, investigator: &mut I) -> Result<()> {
        debug!("entered {}", room.name());
        self.expedition.path.push(room.name().to_string());
        if let Some(clue) = room.clue() {
            self.expedition.clues.insert(clue)?;
        }
        investigator.narrate(&Narration::Arrived {
            room: room.name(),
            clue: room.clue(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MansionBlueprint;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;

    /// Plays back a fixed list of commands and records what it was told
    #[derive(Default)]
    struct Script {
        commands: VecDeque<Command>,
        offered: Vec<(String, Option<String>, Option<String>)>,
        invalid: usize,
    }

    impl Script {
        fn new(commands: Vec<Command>) -> Self {
            Self {
                commands: commands.into(),
                ..Self::default()
            }
        }
    }

    impl Investigator for Script {
        fn narrate(&mut self, event: &Narration<'_>) -> Result<()> {
            if matches!(event, Narration::InvalidChoice) {
                self.invalid += 1;
            }
            Ok(())
        }

        fn choose(&mut self, crossroads: &Crossroads<'_>) -> Result<Command> {
            self.offered.push((
                crossroads.room.to_string(),
                crossroads.left.map(str::to_string),
                crossroads.right.map(str::to_string),
            ));
            Ok(self.commands.pop_front().unwrap_or(Command::Stop))
        }

        fn name_suspect(&mut self, _suspects: &[&str]) -> Result<String> {
            Ok(String::new())
        }
    }

    fn mansion() -> RoomTree {
        MansionBlueprint::default().build_tree().unwrap()
    }

    #[test]
    fn test_left_then_stop_visits_two_rooms() {
        let tree = mansion();
        let mut script = Script::new(vec![Command::Left, Command::Stop]);
        let expedition = ExplorationController::new(&tree).run(&mut script).unwrap();

        assert_eq!(expedition.path, vec!["Entrance Hall", "Living Room"]);
        let clues: Vec<&str> = expedition.clues.iter().collect();
        assert_eq!(clues, vec!["Broken glass", "Wet footprints on the rug"]);
    }

    #[test]
    fn test_stop_at_entrance_collects_entrance_clue() {
        let tree = mansion();
        let mut script = Script::new(vec![Command::Stop]);
        let expedition = ExplorationController::new(&tree).run(&mut script).unwrap();
        assert_eq!(expedition.path, vec!["Entrance Hall"]);
        assert_eq!(expedition.clues.len(), 1);
    }

    #[test]
    fn test_clueless_room_adds_nothing() {
        let tree = mansion();
        let mut script = Script::new(vec![Command::Right, Command::Right]);
        let expedition = ExplorationController::new(&tree).run(&mut script).unwrap();
        assert_eq!(expedition.path, vec!["Entrance Hall", "Kitchen", "Attic"]);
        assert_eq!(expedition.clues.len(), 2);
    }

    #[test]
    fn test_invalid_choice_reprompts_same_room() {
        let tree = mansion();
        let mut script = Script::new(vec![
            Command::Unrecognized("x".to_string()),
            Command::Right,
            Command::Right,
            Command::Left,
            Command::Stop,
        ]);
        let expedition = ExplorationController::new(&tree).run(&mut script).unwrap();

        assert_eq!(script.invalid, 2);
        assert_eq!(expedition.path, vec!["Entrance Hall", "Kitchen", "Attic"]);
        let rooms: Vec<&str> = script.offered.iter().map(|(room, _, _)| room.as_str()).collect();
        assert_eq!(rooms, vec!["Entrance Hall", "Entrance Hall", "Kitchen", "Attic", "Attic"]);
    }

    #[test]
    fn test_only_existing_exits_are_offered() {
        let tree = mansion();
        let mut script = Script::new(vec![Command::Left, Command::Left, Command::Left, Command::Stop]);
        ExplorationController::new(&tree).run(&mut script).unwrap();

        let library = &script.offered[2];
        assert_eq!(library.0, "Library");
        assert_eq!(library.1.as_deref(), Some("Master Bedroom"));
        assert_eq!(library.2, None);

        let bedroom = &script.offered[3];
        assert_eq!((bedroom.1.as_deref(), bedroom.2.as_deref()), (None, None));
    }

    #[test]
    fn test_descending_never_returns_to_parent() {
        let tree = mansion();
        let mut script = Script::new(vec![Command::Left, Command::Right, Command::Stop]);
        let expedition = ExplorationController::new(&tree).run(&mut script).unwrap();
        assert_eq!(expedition.path, vec!["Entrance Hall", "Living Room", "Garden"]);
        assert!(script.offered.iter().filter(|(room, _, _)| room == "Entrance Hall").count() == 1);
    }

    #[test]
    fn test_finished_is_terminal() {
        let tree = mansion();
        let mut script = Script::new(vec![Command::Stop, Command::Left]);
        let mut controller = ExplorationController::new(&tree);
        assert_eq!(controller.step(&mut script).unwrap(), ExplorationState::Finished);
        assert_eq!(controller.step(&mut script).unwrap(), ExplorationState::Finished);
        assert_eq!(controller.path().len(), 1);
        assert_eq!(script.offered.len(), 1);
    }

    #[test]
    fn test_keys_map_to_commands() {
        assert_eq!(Command::from_key('l'), Command::Left);
        assert_eq!(Command::from_key('R'), Command::Right);
        assert_eq!(Command::from_key('s'), Command::Stop);
        assert_eq!(Command::from_key('e'), Command::Unrecognized("e".to_string()));
    }
}
