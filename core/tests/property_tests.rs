//! Property-based tests over randomly generated small conventions (§8).
//!
//! Feasibility itself is not asserted — plenty of random inputs are
//! legitimately infeasible — but whenever a schedule does come back, it
//! must respect coverage, play-once, bounds, ownership, and the
//! configured table/shared-copy limits.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use table_scheduler_core::build_schedule;
use table_scheduler_core::models::*;

const N_GAMES: usize = 2;
const N_SESSIONS: usize = 2;

fn arb_game(idx: usize) -> impl Strategy<Value = GameRecord> {
    (2u32..=4, 0u32..=2, 60i64..=180, 0i64..=120).prop_map(move |(min_p, extra_p, min_t, extra_t)| {
        GameRecord {
            id: idx as i64,
            name: format!("G{idx}"),
            full_name: format!("Game {idx}"),
            min_players: min_p as i64,
            max_players: (min_p + extra_p) as i64,
            min_playtime: min_t,
            max_playtime: min_t + extra_t,
            popularity: HashMap::new(),
            owned: 1,
        }
    })
}

fn arb_session(idx: usize) -> impl Strategy<Value = SessionDef> {
    (60i64..=300).prop_map(move |length| SessionDef {
        name: format!("S{idx}"),
        length,
    })
}

fn arb_player(idx: usize) -> impl Strategy<Value = PlayerDef> {
    (
        prop::collection::vec(any::<bool>(), N_GAMES),
        prop::collection::vec(any::<bool>(), N_GAMES),
        prop::collection::vec(any::<bool>(), N_SESSIONS),
    )
        .prop_map(move |(owns_mask, interest_mask, session_mask)| {
            let owns: Vec<String> = owns_mask
                .iter()
                .enumerate()
                .filter(|(_, &b)| b)
                .map(|(i, _)| format!("G{i}"))
                .collect();
            let interests: Vec<String> = interest_mask
                .iter()
                .enumerate()
                .filter(|(_, &b)| b)
                .map(|(i, _)| format!("G{i}"))
                .collect();
            let sessions: Vec<i64> = session_mask
                .iter()
                .enumerate()
                .filter(|(_, &b)| b)
                .map(|(i, _)| i as i64)
                .collect();
            PlayerDef {
                name: format!("P{idx}"),
                owns,
                interests,
                sessions,
            }
        })
}

fn arb_input() -> impl Strategy<Value = ScheduleInput> {
    (
        (arb_game(0), arb_game(1), arb_session(0), arb_session(1)),
        (arb_player(0), arb_player(1), arb_player(2), arb_player(3)),
        prop::option::of(0u32..=2),
    )
        .prop_map(|((g0, g1, s0, s1), (p0, p1, p2, p3), table_limit)| ScheduleInput {
            games: vec![g0, g1],
            sessions: vec![s0, s1],
            players: vec![p0, p1, p2, p3],
            config: ScheduleConfig {
                table_limit,
                shared_games: Vec::new(),
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Coverage, play-once, bounds, ownership, and table-limit all hold on
    /// every feasible schedule, whatever the random input looked like.
    #[test]
    fn invariants_hold_on_any_feasible_schedule(input in arb_input()) {
        let outcome = match build_schedule(&input) {
            Ok(o) => o,
            Err(_) => return Ok(()),
        };

        let game_by_name: HashMap<&str, &GameRecord> =
            input.games.iter().map(|g| (g.name.as_str(), g)).collect();

        // Coverage: every attending player appears in exactly one table of
        // each session they attend.
        for (session_idx, session) in outcome.schedule.sessions.iter().enumerate() {
            let mut assigned: HashMap<&str, u32> = HashMap::new();
            for table in &session.tables {
                for p in &table.players {
                    *assigned.entry(p.name.as_str()).or_insert(0) += 1;
                }
            }
            for player in &input.players {
                if player.sessions.contains(&(session_idx as i64)) {
                    prop_assert_eq!(
                        assigned.get(player.name.as_str()).copied().unwrap_or(0),
                        1,
                        "player {} should appear exactly once in session {}",
                        player.name,
                        session_idx
                    );
                }
            }
        }

        // Play-once: no player is ever seated at the same game twice across
        // the whole convention.
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for session in &outcome.schedule.sessions {
            for table in &session.tables {
                for p in &table.players {
                    prop_assert!(
                        seen.insert((p.name.as_str(), table.game.as_str())),
                        "player {} played {} more than once",
                        p.name,
                        table.game
                    );
                }
            }
        }

        // Bounds + ownership: every seated table is within its game's
        // player-count bounds and has at least one attending owner.
        for (session_idx, session) in outcome.schedule.sessions.iter().enumerate() {
            for table in &session.tables {
                let game = game_by_name[table.game.as_str()];
                prop_assert!(table.players.len() as i64 >= game.min_players);
                prop_assert!(table.players.len() as i64 <= game.max_players);
                prop_assert!(
                    table.players.iter().any(|p| p.owner),
                    "table {} in session {} has no attending owner",
                    table.game,
                    session_idx
                );
            }
        }

        // Table limit: no session ever runs more tables than configured.
        let limit = input.config.table_limit.unwrap_or(u32::MAX);
        for session in &outcome.schedule.sessions {
            prop_assert!(session.tables.len() as u32 <= limit);
        }
    }
}

fn arb_input_with_shared_cap() -> impl Strategy<Value = (ScheduleInput, u32)> {
    (arb_input(), 0u32..=2).prop_map(|(mut input, cap)| {
        input.config.shared_games = vec![SharedGameDecl {
            game: "G0".into(),
            cap,
        }];
        (input, cap)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// A shared-copy cap on G0 is never exceeded across the whole
    /// convention, regardless of how attendance and interest fall out.
    #[test]
    fn shared_cap_is_never_exceeded((input, cap) in arb_input_with_shared_cap()) {
        if let Ok(outcome) = build_schedule(&input) {
            let count = outcome
                .schedule
                .sessions
                .iter()
                .filter(|s| s.tables.iter().any(|t| t.game == "G0"))
                .count() as u32;
            prop_assert!(count <= cap);
        }
    }
}
