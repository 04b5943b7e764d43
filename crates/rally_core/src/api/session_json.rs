//! JSON entry points for session hosts.
//!
//! Hosts hand over the roster (and, for substitutions, the current groups)
//! as JSON strings and get JSON back; nothing here touches storage or UI.
//! Requests carry a `schema_version` so a stale host fails loudly instead of
//! getting a silently reshaped response.

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::draft::draw_groups;
use crate::error::{Result, SessionError};
use crate::models::{Group, Matchup, Participant, ParticipantId};
use crate::pool::Pool;
use crate::schedule::build_schedule;
use crate::substitute::{apply_swap, suggest_replacement, SwapReport};
use crate::SCHEMA_VERSION;

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(SessionError::UnsupportedSchema {
            found,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct DrawRequest {
    pub schema_version: u8,
    /// Tie-breaking seed; the same roster and seed reproduce the draw.
    pub seed: u64,
    pub roster: Vec<Participant>,
    #[serde(default)]
    pub config: SessionConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DrawResponse {
    pub schema_version: u8,
    /// All groups in draw order, reserve last.
    pub groups: Vec<Group>,
    pub matchups: Vec<Matchup>,
    /// Matchups needed for every group to reach its game target.
    pub target_games: usize,
    /// False when the greedy scheduler fell short; redrawing is the host's
    /// call.
    pub target_met: bool,
}

/// Draw groups and a matchup schedule for one session.
pub fn draw_session_json(request: &str) -> Result<String> {
    let request: DrawRequest = serde_json::from_str(request)?;
    check_schema(request.schema_version)?;

    let pool = Pool::from_roster(&request.roster);
    let outcome = draw_groups(pool.members(), &request.config, request.seed)?;
    let groups = outcome.into_groups();
    let schedule = build_schedule(&groups, &request.config);

    let response = DrawResponse {
        schema_version: SCHEMA_VERSION,
        target_games: schedule.target,
        target_met: schedule.met_target(),
        matchups: schedule.matchups,
        groups,
    };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub schema_version: u8,
    pub outgoing_id: ParticipantId,
    pub roster: Vec<Participant>,
    pub groups: Vec<Group>,
    /// Names of the groups in the live matchup; their members stay on court.
    #[serde(default)]
    pub excluded_groups: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub schema_version: u8,
    /// `null` when no replacement is possible; the host tells the user.
    pub candidate: Option<Participant>,
}

/// Suggest a replacement for a drawn participant.
pub fn suggest_substitute_json(request: &str) -> Result<String> {
    let request: SuggestRequest = serde_json::from_str(request)?;
    check_schema(request.schema_version)?;

    for name in &request.excluded_groups {
        if !request.groups.iter().any(|g| g.name == *name) {
            return Err(SessionError::UnknownGroup(name.clone()));
        }
    }
    let outgoing = request
        .groups
        .iter()
        .flat_map(|g| g.members.iter())
        .find(|m| m.id == request.outgoing_id)
        .cloned()
        .ok_or(SessionError::UnknownParticipant(request.outgoing_id))?;

    let candidate = suggest_replacement(
        &outgoing,
        &request.roster,
        &request.groups,
        &request.excluded_groups,
    )
    .cloned();

    let response = SuggestResponse {
        schema_version: SCHEMA_VERSION,
        candidate,
    };
    Ok(serde_json::to_string(&response)?)
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub schema_version: u8,
    pub outgoing_id: ParticipantId,
    pub candidate_id: ParticipantId,
    pub roster: Vec<Participant>,
    pub groups: Vec<Group>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub schema_version: u8,
    pub groups: Vec<Group>,
    pub report: SwapReport,
}

/// Apply a confirmed substitution and return the updated groups.
pub fn apply_substitution_json(request: &str) -> Result<String> {
    let request: ApplyRequest = serde_json::from_str(request)?;
    check_schema(request.schema_version)?;

    let mut groups = request.groups;
    let report = apply_swap(
        &mut groups,
        &request.roster,
        request.outgoing_id,
        request.candidate_id,
    )?;

    let response = ApplyResponse {
        schema_version: SCHEMA_VERSION,
        groups,
        report,
    };
    Ok(serde_json::to_string(&response)?)
}
