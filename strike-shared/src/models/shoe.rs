use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Longest size a shoe field accepts.
pub const MAX_SIZE_LEN: usize = 2;

/// Opaque identity of a shoe entry, stable across edits and removals of others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoeId(Uuid);

impl ShoeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShoeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShoeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// One player's rented-shoe size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeEntry {
    pub id: ShoeId,
    pub size: String,
}

impl ShoeEntry {
    pub fn new(id: ShoeId) -> Self {
        Self {
            id,
            size: String::new(),
        }
    }

    /// Replace the size, keeping at most [`MAX_SIZE_LEN`] characters.
    pub fn set_size(&mut self, value: &str) {
        self.size = value.chars().take(MAX_SIZE_LEN).collect();
    }

    pub fn is_filled(&self) -> bool {
        !self.size.is_empty()
    }
}
