/// PROPERTY-BASED TESTS: reconciliation invariants
///
/// Key invariants:
/// 1. Every action id is dispatched exactly once, whatever the delivery pattern
/// 2. The mirror matches the ledger board once board and history settle
/// 3. Decoding never panics on arbitrary bytes

use proptest::prelude::*;
use tilesync_client::{dispatched_ids, ReconciledActionEvent};
use tilesync_shared::{
    decode, encode,
    games::{city_builder, seven_seas},
    ActionId, TileRecord,
};
use tilesync_test::{
    city_session,
    fixtures::city_builder::{player, CityLedger},
    BOARD_ADDRESS, HISTORY_ADDRESS,
};

// (x, y, building type) for one placement
fn placement_strategy() -> impl Strategy<Value = (u8, u8, u8)> {
    (
        0u8..10,
        0u8..10,
        prop_oneof![
            Just(city_builder::BUILDING_TYPE_TREE),
            Just(city_builder::BUILDING_TYPE_SAWMILL),
            Just(city_builder::BUILDING_TYPE_MINE),
            Just(city_builder::BUILDING_TYPE_GOOD),
        ],
    )
}

// batches of placements, each followed by a delivery; the flag repeats it
fn rounds_strategy(max_batch: usize) -> impl Strategy<Value = Vec<(Vec<(u8, u8, u8)>, bool)>> {
    prop::collection::vec(
        (
            prop::collection::vec(placement_strategy(), 0..max_batch),
            any::<bool>(),
        ),
        1..8,
    )
}

proptest! {
    #[test]
    fn prop_actions_dispatch_exactly_once(rounds in rounds_strategy(30)) {
        let mut ledger = CityLedger::new();
        let mut session = city_session();
        session.receive(HISTORY_ADDRESS, ledger.history_bytes()).unwrap();
        session.process().unwrap();

        let mut dispatched: Vec<ActionId> = Vec::new();
        let mut placed: ActionId = 0;
        for (batch, repeat) in rounds {
            for (x, y, building_type) in batch {
                placed = ledger.place(x, y, building_type);
            }
            session.receive(HISTORY_ADDRESS, ledger.history_bytes()).unwrap();
            if repeat {
                session.receive(HISTORY_ADDRESS, ledger.history_bytes()).unwrap();
            }
            let mut events = session.process().unwrap();
            let reconciled: Vec<_> = events.read::<ReconciledActionEvent>().collect();
            dispatched.extend(dispatched_ids(&reconciled));
        }

        // batches fit the ring, so nothing is lost either
        let mut sorted = dispatched.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), dispatched.len());
        let expected: Vec<ActionId> = (1..=placed).collect();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_mirror_converges_to_board(rounds in rounds_strategy(45)) {
        let mut ledger = CityLedger::new();
        let mut session = city_session();
        session.receive(BOARD_ADDRESS, ledger.board_bytes()).unwrap();
        session.receive(HISTORY_ADDRESS, ledger.history_bytes()).unwrap();
        session.process().unwrap();

        for (batch, board_first) in rounds {
            for (x, y, building_type) in batch {
                ledger.place(x, y, building_type);
            }
            if board_first {
                session.receive(BOARD_ADDRESS, ledger.board_bytes()).unwrap();
                session.receive(HISTORY_ADDRESS, ledger.history_bytes()).unwrap();
            } else {
                session.receive(HISTORY_ADDRESS, ledger.history_bytes()).unwrap();
                session.receive(BOARD_ADDRESS, ledger.board_bytes()).unwrap();
            }
            session.process().unwrap();

            for (position, tile) in ledger.board().data.iter() {
                let expected = tile.is_occupied().then(|| tile.building_type());
                prop_assert_eq!(session.mirror().building_type_at(position), expected);
            }
        }
    }

    #[test]
    fn prop_player_names_survive(name in "\\PC{0,40}") {
        let record = player(&name);
        let decoded = decode::<city_builder::PlayerData>(&encode(&record));
        prop_assert_eq!(decoded, Ok(Some(record)));
    }

    #[test]
    fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let _ = decode::<city_builder::BoardAccount>(&bytes);
        let _ = decode::<city_builder::GameActionHistory>(&bytes);
        let _ = decode::<city_builder::PlayerData>(&bytes);
        let _ = decode::<seven_seas::GameDataAccount>(&bytes);
        let _ = decode::<seven_seas::GameActionHistory>(&bytes);
    }

    #[test]
    fn prop_counted_log_rejects_lying_counts(count in 1u32..1000) {
        let mut bytes = encode(&seven_seas::GameActionHistory::default());
        let tail = bytes.len() - 4;
        bytes[tail..].copy_from_slice(&count.to_le_bytes());
        prop_assert!(decode::<seven_seas::GameActionHistory>(&bytes).is_err());
    }
}
