use serde::{Deserialize, Serialize};

/// One scheduled pairing, identified by group names. The home/away split is
/// presentation order only; no side advantage exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

impl Matchup {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    pub fn involves(&self, group_name: &str) -> bool {
        self.home == group_name || self.away == group_name
    }
}
