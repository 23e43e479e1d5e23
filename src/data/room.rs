//! Rooms of the mansion, arranged as a binary tree

use super::{owned_text, MAX_CLUE_LEN, MAX_NAME_LEN};
use crate::MansionError;

/// A room the player can stand in
#[derive(Debug, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with no exits. An empty clue means the room has none.
    pub fn new(name: &str, clue: Option<&str>) -> Result<Self, MansionError> {
        if name.is_empty() {
            return Err(MansionError::EmptyName);
        }
        let name = owned_text("room name", name, MAX_NAME_LEN)?;
        let clue = match clue {
            Some(text) if !text.is_empty() => Some(owned_text("clue", text, MAX_CLUE_LEN)?),
            _ => None,
        };

        Ok(Self {
            name,
            clue,
            left: None,
            right: None,
        })
    }

    /// Attach `child` as the left exit, replacing any previous one
    pub fn with_left(mut self, child: Room) -> Self {
        self.set_left(child);
        self
    }

    /// Attach `child` as the right exit, replacing any previous one
    pub fn with_right(mut self, child: Room) -> Self {
        self.set_right(child);
        self
    }

    /// Wire `child` in as the left exit of an existing room
    pub fn set_left(&mut self, child: Room) {
        self.left = Some(Box::new(child));
    }

    /// Wire `child` in as the right exit of an existing room
    pub fn set_right(&mut self, child: Room) {
        self.right = Some(Box::new(child));
    }

    /// Name shown to the player
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The clue hidden here, if any
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    /// Whether the room holds a clue
    pub fn has_clue(&self) -> bool {
        self.clue.is_some()
    }

    /// Room behind the left exit
    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    /// Room behind the right exit
    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    /// Whether there is a passage to the left
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Whether there is a passage to the right
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }
}

impl Drop for Room {
    // Post-order release with an explicit stack; children are detached
    // before each box is dropped, so no drop recurses.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Room>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut room) = pending.pop() {
            pending.extend(room.left.take());
            pending.extend(room.right.take());
        }
    }
}

/// The whole mansion, rooted at the entrance
#[derive(Debug, PartialEq, Eq)]
pub struct RoomTree {
    root: Room,
}

impl RoomTree {
    /// Wrap a fully wired entrance room
    pub fn new(root: Room) -> Self {
        Self { root }
    }

    /// The entrance, where every exploration starts
    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Number of rooms in the mansion
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];
        while let Some(room) = pending.pop() {
            count += 1;
            pending.extend(room.left());
            pending.extend(room.right());
        }
        count
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }
}
