//! Data structures for the mansion
//!
//! Rooms, collected clues, the suspect directory and the blueprint that
//! describes how they are assembled.

pub mod blueprint;
pub mod clues;
pub mod room;
pub mod suspects;

pub use blueprint::*;
pub use clues::*;
pub use room::*;
pub use suspects::*;

use crate::MansionError;

/// Longest room or suspect name, in bytes
pub const MAX_NAME_LEN: usize = 79;

/// Longest clue text, in bytes
pub const MAX_CLUE_LEN: usize = 119;

/// Copy `text` into a fresh `String`, checking its length and reporting
/// allocation failure as an error.
pub(crate) fn owned_text(
    kind: &'static str,
    text: &str,
    max: usize,
) -> Result<String, MansionError> {
    if text.len() > max {
        return Err(MansionError::TextTooLong {
            kind,
            len: text.len(),
            max,
        });
    }

    let mut owned = String::new();
    owned
        .try_reserve_exact(text.len())
        .map_err(|_| MansionError::OutOfMemory(kind))?;
    owned.push_str(text);
    Ok(owned)
}
