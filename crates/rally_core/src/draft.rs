//! Group draft: partition the session pool into balanced groups.
//!
//! The draw splits the pool by category, gives every bucket a per-category
//! headcount target, deals each category out in serpentine order so the
//! strongest players spread across buckets, then tops buckets up from the
//! spillover by weakest-bucket-first. Whoever is left lands in the reserve
//! group.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::models::{
    palette_color, Category, Group, GroupKind, Participant, RESERVE_GROUP_NAME,
};

/// Result of one draw: the numbered groups plus the overflow group, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub groups: Vec<Group>,
    pub reserve: Option<Group>,
}

impl DrawOutcome {
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().chain(self.reserve.iter())
    }

    /// All groups in draw order, reserve last.
    pub fn into_groups(self) -> Vec<Group> {
        let mut groups = self.groups;
        groups.extend(self.reserve);
        groups
    }

    pub fn participant_count(&self) -> usize {
        self.iter().map(|g| g.members.len()).sum()
    }
}

/// In-progress group under construction.
struct Bucket {
    members: Vec<Participant>,
    // per-category headcount targets, indexed by Category::index()
    targets: [usize; 2],
}

impl Bucket {
    fn new() -> Self {
        Self {
            members: Vec::new(),
            targets: [0, 0],
        }
    }

    fn target(&self, category: Category) -> usize {
        self.targets[category.index()]
    }

    fn count(&self, category: Category) -> usize {
        self.members.iter().filter(|m| m.category == category).count()
    }

    fn skill_total(&self) -> u32 {
        self.members.iter().map(|m| u32::from(m.skill)).sum()
    }
}

/// Partition `pool` into `pool.len() / team_size` balanced groups plus a
/// reserve. Deterministic for a given pool order and seed; the seed only
/// drives the member display shuffle.
pub fn draw_groups(
    pool: &[Participant],
    config: &SessionConfig,
    seed: u64,
) -> Result<DrawOutcome> {
    config.validate()?;
    let team_size = config.team_size;
    let full_count = pool.len() / team_size;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    debug!(pool = pool.len(), team_size, full_count, "drawing groups");

    // Not enough for a single full group: everyone waits together.
    if full_count == 0 {
        let mut members = pool.to_vec();
        members.shuffle(&mut rng);
        let kind = GroupKind::for_reserve(members.len());
        let reserve = Group::new(RESERVE_GROUP_NAME, palette_color(0), kind, members);
        return Ok(DrawOutcome {
            groups: Vec::new(),
            reserve: Some(reserve),
        });
    }

    let mut category_a: Vec<Participant> = pool
        .iter()
        .filter(|p| p.category == Category::A)
        .cloned()
        .collect();
    let mut category_b: Vec<Participant> = pool
        .iter()
        .filter(|p| p.category == Category::B)
        .cloned()
        .collect();
    category_a.sort_by(|x, y| y.skill.cmp(&x.skill));
    category_b.sort_by(|x, y| y.skill.cmp(&x.skill));

    let (majority, minority, majority_cat, minority_cat) = if category_b.len() > category_a.len() {
        (category_b, category_a, Category::B, Category::A)
    } else {
        (category_a, category_b, Category::A, Category::B)
    };

    let capacity = full_count * team_size;
    let majority_cap = team_size / 2;
    let minority_cap = team_size - majority_cap;

    let mut buckets: Vec<Bucket> = (0..full_count).map(|_| Bucket::new()).collect();

    // Majority targets: an even share of the usable majority pool, remainder
    // to the first buckets, never past half a group.
    let majority_usable = majority.len().min(capacity);
    let majority_base = majority_cap.min(majority_usable / full_count);
    let majority_rem = majority_usable % full_count;
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.targets[majority_cat.index()] =
            (majority_base + usize::from(i < majority_rem)).min(majority_cap);
    }
    let majority_assigned: usize = buckets.iter().map(|b| b.target(majority_cat)).sum();

    // Minority targets fill the remaining ideal headcount the same way.
    let minority_ideal = minority.len().min(capacity - majority_assigned);
    let minority_base = minority_ideal / full_count;
    let minority_rem = minority_ideal % full_count;
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.targets[minority_cat.index()] =
            (minority_base + usize::from(i < minority_rem)).min(minority_cap);
    }

    debug!(
        ?majority_cat,
        majority_usable, minority_ideal, "bucket category targets computed"
    );

    let mut spill: Vec<Participant> = Vec::new();
    snake_assign(&mut buckets, &majority, majority_cat, team_size, &mut spill);
    snake_assign(&mut buckets, &minority, minority_cat, team_size, &mut spill);

    if !spill.is_empty() {
        trace!(spill = spill.len(), "participants left over after snake pass");
    }
    let leftovers = fill_remainder(&mut buckets, spill, team_size);

    let mut groups = Vec::with_capacity(full_count);
    for (index, bucket) in buckets.into_iter().enumerate() {
        if bucket.members.is_empty() {
            continue;
        }
        let mut members = bucket.members;
        members.shuffle(&mut rng);
        let kind = GroupKind::for_member_count(members.len(), team_size);
        let color = palette_color(index);
        groups.push(Group::new(
            format!("{} - {}", index + 1, color.name),
            color,
            kind,
            members,
        ));
    }

    let reserve = if leftovers.is_empty() {
        None
    } else {
        let mut members = leftovers;
        members.shuffle(&mut rng);
        let kind = GroupKind::for_reserve(members.len());
        debug!(reserve = members.len(), ?kind, "overflow goes to the reserve group");
        Some(Group::new(
            RESERVE_GROUP_NAME,
            palette_color(full_count),
            kind,
            members,
        ))
    };

    Ok(DrawOutcome { groups, reserve })
}

/// Deal one category's sub-pool (sorted by descending skill) into the buckets
/// in chunks of one-per-bucket, flipping traversal direction every chunk so
/// top skill does not pile up in the first bucket. A participant probes up to
/// `buckets.len()` buckets starting at their chunk slot; buckets at their
/// category target or at full size are skipped. Unplaced participants spill.
fn snake_assign(
    buckets: &mut [Bucket],
    subpool: &[Participant],
    category: Category,
    team_size: usize,
    spill: &mut Vec<Participant>,
) {
    let width = buckets.len();
    let mut forward = true;
    for chunk in subpool.chunks(width) {
        let ordered: Vec<&Participant> = if forward {
            chunk.iter().collect()
        } else {
            chunk.iter().rev().collect()
        };
        for (slot, participant) in ordered.into_iter().enumerate() {
            let mut index = slot;
            let mut probes = 0;
            while probes < width
                && (buckets[index].count(category) >= buckets[index].target(category)
                    || buckets[index].members.len() >= team_size)
            {
                index = (index + 1) % width;
                probes += 1;
            }
            if probes < width {
                buckets[index].members.push(participant.clone());
            } else {
                spill.push(participant.clone());
            }
        }
        forward = !forward;
    }
}

/// Top buckets up from the spillover: strongest spill first, serpentine per
/// chunk, each into the weakest bucket that still has room. Anyone who finds
/// no room is returned for the reserve group.
fn fill_remainder(
    buckets: &mut [Bucket],
    mut remaining: Vec<Participant>,
    team_size: usize,
) -> Vec<Participant> {
    remaining.sort_by(|x, y| y.skill.cmp(&x.skill));
    let width = buckets.len();
    let mut leftovers = Vec::new();
    let mut forward = true;
    while !remaining.is_empty() && buckets.iter().any(|b| b.members.len() < team_size) {
        let take = remaining.len().min(width);
        let chunk: Vec<Participant> = remaining.drain(..take).collect();
        let ordered: Vec<Participant> = if forward {
            chunk
        } else {
            chunk.into_iter().rev().collect()
        };
        for participant in ordered {
            match weakest_open_bucket(buckets, team_size) {
                Some(index) => buckets[index].members.push(participant),
                None => leftovers.push(participant),
            }
        }
        forward = !forward;
    }
    leftovers.extend(remaining);
    leftovers
}

/// Index of the open bucket with the lowest total skill; ties go to the
/// bucket with fewer members, then to the first in draw order.
fn weakest_open_bucket(buckets: &[Bucket], team_size: usize) -> Option<usize> {
    let mut best: Option<(usize, (u32, usize))> = None;
    for (index, bucket) in buckets.iter().enumerate() {
        if bucket.members.len() >= team_size {
            continue;
        }
        let key = (bucket.skill_total(), bucket.members.len());
        match best {
            Some((_, best_key)) if key >= best_key => {}
            _ => best = Some((index, key)),
        }
    }
    best.map(|(index, _)| index)
}
