//! # rally_core - Deterministic Volleyball Session Draw Engine
//!
//! This library organizes ad-hoc volleyball sessions: it partitions the
//! participants who showed up into balanced fixed-size groups, builds a fair
//! matchup schedule for them, and suggests like-for-like substitutions
//! during live play.
//!
//! ## Features
//! - 100% deterministic draws (same roster + seed = same groups)
//! - Category and skill balancing via serpentine draft
//! - Streak-aware greedy scheduling with explicit shortfall reporting
//! - JSON API for easy integration with UI hosts
//!
//! The engine is pure and synchronous: it performs no I/O, keeps no global
//! state, and leaves persistence, rendering and confirmation prompts to its
//! host.

pub mod api;
pub mod config;
pub mod draft;
pub mod error;
pub mod models;
pub mod pool;
pub mod schedule;
pub mod substitute;

// Re-export the JSON host surface
pub use api::{
    apply_substitution_json, draw_session_json, suggest_substitute_json, ApplyRequest,
    ApplyResponse, DrawRequest, DrawResponse, SuggestRequest, SuggestResponse,
};

// Re-export the core types and operations
pub use config::{SessionConfig, DEFAULT_TARGET_GAMES, DEFAULT_TEAM_SIZE, DEFAULT_WIN_SCORE};
pub use draft::{draw_groups, DrawOutcome};
pub use error::{Result, SessionError};
pub use models::{
    palette_color, Category, Group, GroupKind, Matchup, PaletteColor, Participant,
    ParticipantId, PALETTE, RESERVE_GROUP_NAME,
};
pub use pool::Pool;
pub use schedule::{build_schedule, ScheduleOutcome};
pub use substitute::{apply_swap, suggest_replacement, SwapReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
