//! Session pool: who is eligible for a draw.

use crate::models::Participant;

/// Participants eligible for the current draw.
///
/// Presence is session-scoped: the pool takes everyone flagged `present`,
/// falling back to the whole roster when nobody was marked (the host's
/// attendance list may simply not have been filled in).
#[derive(Debug, Clone)]
pub struct Pool {
    members: Vec<Participant>,
}

impl Pool {
    pub fn from_roster(roster: &[Participant]) -> Self {
        let present: Vec<Participant> =
            roster.iter().filter(|p| p.present).cloned().collect();
        let members = if present.is_empty() {
            roster.to_vec()
        } else {
            present
        };
        Self { members }
    }

    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
