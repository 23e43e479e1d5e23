//! Mansion blueprints
//!
//! A blueprint describes the room layout, which suspect each clue points
//! at, and the rules of the accusation. The classic mansion is built in;
//! others can be loaded from JSON.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{Room, RoomTree, SuspectIndex, DEFAULT_BUCKETS};
use crate::{MansionError, Result};

/// Minimum matching clues for a sustained accusation
pub const DEFAULT_SUSTAIN_THRESHOLD: usize = 2;

/// Tunable rules of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub bucket_count: usize,
    pub sustain_threshold: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKETS,
            sustain_threshold: DEFAULT_SUSTAIN_THRESHOLD,
        }
    }
}

/// One room and the rooms beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPlan {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<RoomPlan>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<RoomPlan>>,
}

impl RoomPlan {
    pub fn new(name: &str, clue: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            clue: clue.map(str::to_string),
            left: None,
            right: None,
        }
    }

    pub fn left(mut self, plan: RoomPlan) -> Self {
        self.left = Some(Box::new(plan));
        self
    }

    pub fn right(mut self, plan: RoomPlan) -> Self {
        self.right = Some(Box::new(plan));
        self
    }

    fn build(&self) -> std::result::Result<Room, MansionError> {
        let mut room = Room::new(&self.name, self.clue.as_deref())?;
        if let Some(plan) = &self.left {
            room.set_left(plan.build()?);
        }
        if let Some(plan) = &self.right {
            room.set_right(plan.build()?);
        }
        Ok(room)
    }
}

/// A clue and the suspect it incriminates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueLink {
    pub clue: String,
    pub suspect: String,
}

impl ClueLink {
    pub fn new(clue: &str, suspect: &str) -> Self {
        Self {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        }
    }
}

/// Everything needed to set up a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MansionBlueprint {
    #[serde(default)]
    pub rules: Rules,
    pub mansion: RoomPlan,
    #[serde(default)]
    pub suspects: Vec<ClueLink>,
}

impl MansionBlueprint {
    pub fn from_json(json: &str) -> Result<Self> {
        let blueprint: Self = serde_json::from_str(json).context("Failed to parse blueprint")?;
        blueprint.validate()?;
        Ok(blueprint)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read blueprint {}", path.display()))?;
        let blueprint = Self::from_json(&json)
            .with_context(|| format!("Failed to load blueprint {}", path.display()))?;
        info!("loaded blueprint {} ({} clue links)", path.display(), blueprint.suspects.len());
        Ok(blueprint)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> std::result::Result<(), MansionError> {
        if self.rules.bucket_count == 0 {
            return Err(MansionError::ZeroBuckets);
        }
        if self.rules.sustain_threshold == 0 {
            return Err(MansionError::InvalidBlueprint(
                "sustain_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_tree(&self) -> std::result::Result<RoomTree, MansionError> {
        let tree = RoomTree::new(self.mansion.build()?);
        debug!("built mansion of {} rooms", tree.len());
        Ok(tree)
    }

    pub fn build_index(&self) -> std::result::Result<SuspectIndex, MansionError> {
        let mut index = SuspectIndex::with_buckets(self.rules.bucket_count)?;
        for link in &self.suspects {
            index.upsert(&link.clue, &link.suspect)?;
        }
        debug!("indexed {} clues over {} buckets", index.len(), index.bucket_count());
        Ok(index)
    }
}

impl Default for MansionBlueprint {
    /// The classic mansion: eight rooms, seven incriminating clues
    fn default() -> Self {
        let mansion = RoomPlan::new("Entrance Hall", Some("Wet footprints on the rug"))
            .left(
                RoomPlan::new("Living Room", Some("Broken glass"))
                    .left(
                        RoomPlan::new("Library", Some("Torn book with notes in the margin"))
                            .left(RoomPlan::new("Master Bedroom", Some("red fabric thread"))),
                    )
                    .right(RoomPlan::new("Garden", Some("Muddy boots"))),
            )
            .right(
                RoomPlan::new("Kitchen", Some("Knife with traces of paint"))
                    .left(RoomPlan::new("Study", Some("Letter bearing the name of Suspect A")))
                    .right(RoomPlan::new("Attic", None)),
            );

        let suspects = vec![
            ClueLink::new("Wet footprints on the rug", "Suspect B"),
            ClueLink::new("Broken glass", "Suspect A"),
            ClueLink::new("Knife with traces of paint", "Suspect A"),
            ClueLink::new("Torn book with notes in the margin", "Suspect C"),
            ClueLink::new("Muddy boots", "Suspect B"),
            ClueLink::new("Letter bearing the name of Suspect A", "Suspect A"),
            ClueLink::new("red fabric thread", "Suspect C"),
        ];

        Self {
            rules: Rules::default(),
            mansion,
            suspects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classic_mansion_shape() {
        let tree = MansionBlueprint::default().build_tree().unwrap();
        let hall = tree.root();
        assert_eq!(tree.len(), 8);
        assert_eq!(hall.name(), "Entrance Hall");

        let living = hall.left().unwrap();
        let kitchen = hall.right().unwrap();
        assert_eq!(living.left().unwrap().left().unwrap().name(), "Master Bedroom");
        assert_eq!(living.right().unwrap().name(), "Garden");
        assert_eq!(kitchen.left().unwrap().name(), "Study");

        let attic = kitchen.right().unwrap();
        assert!(!attic.has_clue());
        assert!(!attic.has_left() && !attic.has_right());
    }

    #[test]
    fn test_classic_index_maps_every_clue() {
        let blueprint = MansionBlueprint::default();
        let index = blueprint.build_index().unwrap();
        assert_eq!(index.len(), 7);
        assert_eq!(index.bucket_count(), 31);
        assert_eq!(index.lookup("Muddy boots"), Some("Suspect B"));
        assert_eq!(index.suspects(), vec!["Suspect A", "Suspect B", "Suspect C"]);
    }

    #[test]
    fn test_rules_default_when_omitted() {
        let json = r#"{ "mansion": { "name": "Shed" } }"#;
        let blueprint = MansionBlueprint::from_json(json).unwrap();
        assert_eq!(blueprint.rules, Rules::default());
        assert!(blueprint.suspects.is_empty());
        assert_eq!(blueprint.build_tree().unwrap().len(), 1);
    }

    #[test]
    fn test_partial_rules_keep_other_defaults() {
        let json = r#"{ "rules": { "sustain_threshold": 3 }, "mansion": { "name": "Shed" } }"#;
        let blueprint = MansionBlueprint::from_json(json).unwrap();
        assert_eq!(blueprint.rules.sustain_threshold, 3);
        assert_eq!(blueprint.rules.bucket_count, DEFAULT_BUCKETS);
    }

    #[test]
    fn test_json_round_trip_of_classic_mansion() {
        let blueprint = MansionBlueprint::default();
        let json = blueprint.to_json_pretty().unwrap();
        assert!(!json.contains("\"clue\": null"));
        assert_eq!(MansionBlueprint::from_json(&json).unwrap(), blueprint);
    }

    #[test]
    fn test_zero_threshold_is_invalid() {
        let json = r#"{ "rules": { "sustain_threshold": 0 }, "mansion": { "name": "Shed" } }"#;
        let err = MansionBlueprint::from_json(json).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MansionError>(),
            Some(MansionError::InvalidBlueprint(_))
        ));
    }

    #[test]
    fn test_unnamed_room_fails_to_build() {
        let json = r#"{ "mansion": { "name": "Hall", "left": { "name": "" } } }"#;
        let blueprint = MansionBlueprint::from_json(json).unwrap();
        assert_eq!(blueprint.build_tree().unwrap_err(), MansionError::EmptyName);
    }
}
