use serde::{Deserialize, Serialize};

use super::participant::{Category, Participant, ParticipantId};

/// Name of the overflow group holding participants without a court slot.
pub const RESERVE_GROUP_NAME: &str = "Reserva";

/// Display color assigned to a drawn group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Fixed palette the draw cycles through, in order.
pub const PALETTE: [PaletteColor; 7] = [
    PaletteColor { name: "Laranja", hex: "#FF7043" },
    PaletteColor { name: "Verde", hex: "#66BB6A" },
    PaletteColor { name: "Azul", hex: "#42A5F5" },
    PaletteColor { name: "Rosa", hex: "#EC407A" },
    PaletteColor { name: "Roxo", hex: "#AB47BC" },
    PaletteColor { name: "Amarelo", hex: "#FFEE58" },
    PaletteColor { name: "Ciano", hex: "#26C6DA" },
];

pub fn palette_color(index: usize) -> &'static PaletteColor {
    &PALETTE[index % PALETTE.len()]
}

/// How a group participates in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKind {
    /// Full roster; cedes players to rotating groups during breaks.
    #[serde(rename = "completo")]
    Full,
    /// Short a few members; receives players between sets.
    #[serde(rename = "revezamento")]
    Rotating,
    /// Too few to play; waits for the next round.
    #[serde(rename = "reserva")]
    Reserve,
}

impl GroupKind {
    /// Classification for a drawn bucket.
    pub fn for_member_count(count: usize, team_size: usize) -> Self {
        if count == team_size {
            GroupKind::Full
        } else if count >= 3 {
            GroupKind::Rotating
        } else {
            GroupKind::Reserve
        }
    }

    /// Classification for the overflow group: with 3+ members it can rotate
    /// into play, otherwise it sits the round out.
    pub fn for_reserve(count: usize) -> Self {
        if count >= 3 {
            GroupKind::Rotating
        } else {
            GroupKind::Reserve
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupKind::Full => "completo",
            GroupKind::Rotating => "revezamento",
            GroupKind::Reserve => "reserva",
        }
    }
}

/// A drawn group: name, display color and members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub color: String,
    pub hex: String,
    pub kind: GroupKind,
    pub members: Vec<Participant>,
}

impl Group {
    pub fn new(
        name: impl Into<String>,
        color: &PaletteColor,
        kind: GroupKind,
        members: Vec<Participant>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.name.to_string(),
            hex: color.hex.to_string(),
            kind,
            members,
        }
    }

    /// Reserve groups never appear on the schedule.
    pub fn is_play_eligible(&self) -> bool {
        self.kind != GroupKind::Reserve
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    pub fn skill_total(&self) -> u32 {
        self.members.iter().map(|m| u32::from(m.skill)).sum()
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.members.iter().filter(|m| m.category == category).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classification_matches_member_count() {
        assert_eq!(GroupKind::for_member_count(6, 6), GroupKind::Full);
        assert_eq!(GroupKind::for_member_count(4, 6), GroupKind::Rotating);
        assert_eq!(GroupKind::for_member_count(3, 6), GroupKind::Rotating);
        assert_eq!(GroupKind::for_member_count(2, 6), GroupKind::Reserve);
        assert_eq!(GroupKind::for_member_count(0, 6), GroupKind::Reserve);
    }

    #[test]
    fn reserve_kind_rotates_with_three_or_more() {
        assert_eq!(GroupKind::for_reserve(3), GroupKind::Rotating);
        assert_eq!(GroupKind::for_reserve(2), GroupKind::Reserve);
        assert_eq!(GroupKind::for_reserve(0), GroupKind::Reserve);
    }

    #[test]
    fn kind_serializes_with_original_labels() {
        assert_eq!(serde_json::to_string(&GroupKind::Full).unwrap(), r#""completo""#);
        assert_eq!(
            serde_json::to_string(&GroupKind::Rotating).unwrap(),
            r#""revezamento""#
        );
        assert_eq!(serde_json::to_string(&GroupKind::Reserve).unwrap(), r#""reserva""#);
    }

    #[test]
    fn palette_cycles_past_its_length() {
        assert_eq!(palette_color(0).name, "Laranja");
        assert_eq!(palette_color(6).name, "Ciano");
        assert_eq!(palette_color(7).name, "Laranja");
        assert_eq!(palette_color(8).name, "Verde");
    }
}
