//! Substitution advice: a like-for-like replacement for an outgoing player.
//!
//! Suggestion and application are split on purpose. The host shows the
//! suggested candidate, asks for confirmation, and only then applies the
//! swap; the group mutation happens here as one atomic update.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SessionError};
use crate::models::{Group, Participant, ParticipantId};

/// Where the swap moved people, for host display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapReport {
    /// Group the outgoing participant left.
    pub outgoing_group: String,
    /// Group the candidate came from, when the swap was reciprocal.
    pub candidate_group: Option<String>,
}

/// Pick a replacement for `outgoing`.
///
/// The eligible pool prefers participants marked present (whole roster when
/// nobody is), minus `outgoing` and minus anyone in an excluded group (the
/// two groups on court). Selection prefers the same category within one
/// skill point, then the same category by closest skill, then anyone by
/// closest skill. `None` means no swap is possible.
pub fn suggest_replacement<'a>(
    outgoing: &Participant,
    roster: &'a [Participant],
    groups: &[Group],
    excluded_groups: &[String],
) -> Option<&'a Participant> {
    let anyone_present = roster.iter().any(|p| p.present);
    let group_of = |id: ParticipantId| groups.iter().find(|g| g.contains(id));

    let available: Vec<&Participant> = roster
        .iter()
        .filter(|p| !anyone_present || p.present)
        .filter(|p| p.id != outgoing.id)
        .filter(|p| match group_of(p.id) {
            Some(group) => !excluded_groups.contains(&group.name),
            None => true,
        })
        .collect();

    let same_category: Vec<&Participant> = available
        .iter()
        .copied()
        .filter(|p| p.category == outgoing.category)
        .collect();

    if let Some(candidate) = same_category
        .iter()
        .copied()
        .find(|p| p.skill_gap(outgoing) <= 1)
    {
        return Some(candidate);
    }

    if !same_category.is_empty() {
        debug!("no same-category candidate within one skill point, widening the gap");
        let mut ranked = same_category;
        ranked.sort_by_key(|p| p.skill_gap(outgoing));
        return ranked.first().copied();
    }

    if !available.is_empty() {
        debug!("no same-category candidate at all, falling back to the full pool");
        let mut ranked = available;
        ranked.sort_by_key(|p| p.skill_gap(outgoing));
        return ranked.first().copied();
    }

    None
}

/// Apply a confirmed substitution.
///
/// If the candidate belongs to another group the two participants trade
/// places, keeping every group at its drawn size; an unassigned candidate
/// simply takes the outgoing participant's slot (the record is looked up in
/// `roster`). An `outgoing_id` that is in no group is a caller bug.
pub fn apply_swap(
    groups: &mut [Group],
    roster: &[Participant],
    outgoing_id: ParticipantId,
    candidate_id: ParticipantId,
) -> Result<SwapReport> {
    let mut outgoing_loc = None;
    let mut candidate_loc = None;
    for (gi, group) in groups.iter().enumerate() {
        for (mi, member) in group.members.iter().enumerate() {
            if member.id == outgoing_id {
                outgoing_loc = Some((gi, mi));
            }
            if member.id == candidate_id {
                candidate_loc = Some((gi, mi));
            }
        }
    }
    let (out_gi, out_mi) =
        outgoing_loc.ok_or(SessionError::UnknownParticipant(outgoing_id))?;

    match candidate_loc {
        Some((cand_gi, cand_mi)) => {
            let outgoing = groups[out_gi].members.remove(out_mi);
            let cand_mi = if cand_gi == out_gi && cand_mi > out_mi {
                cand_mi - 1
            } else {
                cand_mi
            };
            let candidate = groups[cand_gi].members.remove(cand_mi);
            groups[cand_gi].members.push(outgoing);
            groups[out_gi].members.push(candidate);
            Ok(SwapReport {
                outgoing_group: groups[out_gi].name.clone(),
                candidate_group: Some(groups[cand_gi].name.clone()),
            })
        }
        None => {
            let candidate = roster
                .iter()
                .find(|p| p.id == candidate_id)
                .cloned()
                .ok_or(SessionError::UnknownParticipant(candidate_id))?;
            let group = &mut groups[out_gi];
            group.members.remove(out_mi);
            group.members.push(candidate);
            Ok(SwapReport {
                outgoing_group: group.name.clone(),
                candidate_group: None,
            })
        }
    }
}
