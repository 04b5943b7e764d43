//! Property tests for the draw, schedule and substitution invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use uuid::Uuid;

use rally_core::{
    build_schedule, draw_groups, suggest_replacement, Category, GroupKind, Participant,
    ParticipantId, SessionConfig,
};

fn pool_strategy(max: usize) -> impl Strategy<Value = Vec<Participant>> {
    prop::collection::vec((any::<bool>(), 1u8..=5, any::<bool>()), 0..max).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (is_b, skill, present))| Participant {
                id: ParticipantId(Uuid::from_u128(i as u128 + 1)),
                name: format!("p{i}"),
                category: if is_b { Category::B } else { Category::A },
                skill,
                present,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn draw_conserves_every_participant(
        pool in pool_strategy(40),
        team_size in 1usize..8,
        seed in any::<u64>(),
    ) {
        let config = SessionConfig { team_size, ..SessionConfig::default() };
        let outcome = draw_groups(&pool, &config, seed).unwrap();

        let total: usize = outcome.iter().map(|g| g.members.len()).sum();
        prop_assert_eq!(total, pool.len());

        let drawn: HashSet<ParticipantId> =
            outcome.iter().flat_map(|g| g.members.iter().map(|m| m.id)).collect();
        let original: HashSet<ParticipantId> = pool.iter().map(|p| p.id).collect();
        prop_assert_eq!(drawn, original);
    }

    #[test]
    fn drawn_groups_respect_size_and_kind_bounds(
        pool in pool_strategy(40),
        team_size in 1usize..8,
        seed in any::<u64>(),
    ) {
        let config = SessionConfig { team_size, ..SessionConfig::default() };
        let outcome = draw_groups(&pool, &config, seed).unwrap();

        for group in &outcome.groups {
            prop_assert!(group.members.len() <= team_size);
            match group.kind {
                GroupKind::Full => prop_assert_eq!(group.members.len(), team_size),
                GroupKind::Rotating => {
                    prop_assert!(group.members.len() >= 3);
                    prop_assert!(group.members.len() < team_size);
                }
                GroupKind::Reserve => prop_assert!(group.members.len() < 3),
            }
        }
        if let Some(reserve) = &outcome.reserve {
            prop_assert_ne!(reserve.kind, GroupKind::Full);
        }
    }

    #[test]
    fn schedule_pairs_are_distinct_and_known(
        pool in pool_strategy(40),
        seed in any::<u64>(),
        target in 1u32..5,
    ) {
        let config = SessionConfig {
            target_games_per_group: target,
            ..SessionConfig::default()
        };
        let groups = draw_groups(&pool, &config, seed).unwrap().into_groups();
        let outcome = build_schedule(&groups, &config);

        let eligible: HashSet<&str> = groups
            .iter()
            .filter(|g| g.is_play_eligible())
            .map(|g| g.name.as_str())
            .collect();

        prop_assert!(outcome.matchups.len() <= outcome.target);
        for matchup in &outcome.matchups {
            prop_assert_ne!(&matchup.home, &matchup.away);
            prop_assert!(eligible.contains(matchup.home.as_str()));
            prop_assert!(eligible.contains(matchup.away.as_str()));
        }
        for name in &eligible {
            let played = outcome.matchups.iter().filter(|m| m.involves(name)).count();
            prop_assert!(played <= target as usize, "{} played {} games", name, played);
        }
    }

    #[test]
    fn advisor_never_breaks_its_exclusions(
        pool in pool_strategy(30),
        seed in any::<u64>(),
    ) {
        let config = SessionConfig::default();
        let groups = draw_groups(&pool, &config, seed).unwrap().into_groups();

        let eligible: Vec<String> = groups
            .iter()
            .filter(|g| g.is_play_eligible())
            .map(|g| g.name.clone())
            .collect();
        prop_assume!(eligible.len() >= 2);
        let excluded = vec![eligible[0].clone(), eligible[1].clone()];

        let outgoing = groups
            .iter()
            .find(|g| g.name == eligible[0])
            .and_then(|g| g.members.first())
            .cloned();
        prop_assume!(outgoing.is_some());
        let outgoing = outgoing.unwrap();

        if let Some(candidate) = suggest_replacement(&outgoing, &pool, &groups, &excluded) {
            prop_assert_ne!(candidate.id, outgoing.id);
            for name in &excluded {
                let group = groups.iter().find(|g| &g.name == name).unwrap();
                prop_assert!(
                    !group.contains(candidate.id),
                    "candidate {} is on court in {}",
                    candidate.name,
                    name
                );
            }
        }
    }
}
