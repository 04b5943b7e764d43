use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque stable participant identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ParticipantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Binary participant category (the original roster used a gender tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::A, Category::B]
    }

    /// Stable array index for per-category bookkeeping.
    pub(crate) fn index(self) -> usize {
        match self {
            Category::A => 0,
            Category::B => 1,
        }
    }
}

/// One roster entry as the draw engine sees it.
///
/// The roster collaborator owns the record and validates the skill range
/// (1..=5); the engine only reads these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub category: Category,
    pub skill: u8,
    #[serde(default)]
    pub present: bool,
}

impl Participant {
    pub fn skill_gap(&self, other: &Participant) -> u8 {
        self.skill.abs_diff(other.skill)
    }
}
