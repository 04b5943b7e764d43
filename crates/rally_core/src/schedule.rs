//! Match scheduling: a fair matchup sequence for the drawn groups.
//!
//! Greedy selection over the pool of group pairings, keeping every group at
//! or under its game target and never more than two games back-to-back. When
//! the streak constraint wedges the schedule, it is relaxed rather than
//! failing; the outcome records whether the target was reached so the host
//! can decide between accepting the short schedule and redrawing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SessionConfig;
use crate::models::{Group, Matchup};

/// A generated schedule plus the matchup count it was aiming for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub matchups: Vec<Matchup>,
    /// Matchups needed for every group to reach its game target.
    pub target: usize,
}

impl ScheduleOutcome {
    /// Whether every group got its target number of games. A short schedule
    /// is a valid outcome; whether to redraw is the caller's decision.
    pub fn met_target(&self) -> bool {
        self.matchups.len() >= self.target
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }
}

/// Build the matchup sequence for the play-eligible groups.
pub fn build_schedule(groups: &[Group], config: &SessionConfig) -> ScheduleOutcome {
    let eligible: Vec<&Group> = groups.iter().filter(|g| g.is_play_eligible()).collect();
    if eligible.len() < 2 {
        return ScheduleOutcome {
            matchups: Vec::new(),
            target: 0,
        };
    }

    let target_per_group = config.target_games_per_group as usize;
    let total_needed = (eligible.len() * target_per_group).div_ceil(2);

    let mut base_pairs = Vec::new();
    for i in 0..eligible.len() {
        for j in (i + 1)..eligible.len() {
            base_pairs.push((i, j));
        }
    }

    // Cycle the base pairs until the candidate pool can cover the target.
    let mut candidates = base_pairs.clone();
    let mut wrap = 0;
    while candidates.len() < total_needed {
        candidates.push(base_pairs[wrap % base_pairs.len()]);
        wrap += 1;
    }

    let mut played = vec![0usize; eligible.len()];
    let mut consecutive = vec![0usize; eligible.len()];
    let mut matchups = Vec::with_capacity(total_needed);

    while matchups.len() < total_needed && !candidates.is_empty() {
        let strict = candidates.iter().position(|&(a, b)| {
            played[a] < target_per_group
                && played[b] < target_per_group
                && consecutive[a] < 2
                && consecutive[b] < 2
        });
        let pick = strict.or_else(|| {
            let relaxed = candidates
                .iter()
                .position(|&(a, b)| played[a] < target_per_group && played[b] < target_per_group);
            if relaxed.is_some() {
                debug!("no pair satisfies the streak cap, relaxing it for this slot");
            }
            relaxed
        });
        let Some(index) = pick else { break };
        let (a, b) = candidates.remove(index);
        matchups.push(Matchup::new(eligible[a].name.clone(), eligible[b].name.clone()));
        for (i, streak) in consecutive.iter_mut().enumerate() {
            if i == a || i == b {
                *streak += 1;
            } else {
                // A round on the bench clears the streak.
                *streak = 0;
            }
        }
        played[a] += 1;
        played[b] += 1;
    }

    if matchups.len() < total_needed {
        debug!(
            scheduled = matchups.len(),
            total_needed, "schedule fell short of the game target"
        );
    }

    ScheduleOutcome {
        matchups,
        target: total_needed,
    }
}
