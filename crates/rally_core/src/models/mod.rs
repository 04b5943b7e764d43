pub mod group;
pub mod matchup;
pub mod participant;

pub use group::{palette_color, Group, GroupKind, PaletteColor, PALETTE, RESERVE_GROUP_NAME};
pub use matchup::Matchup;
pub use participant::{Category, Participant, ParticipantId};
