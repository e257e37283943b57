/// Integration tests for the discriminator gate
/// A buffer of one known account type is never decoded as another

use tilesync_shared::{
    decode, discriminator_of, encode,
    games::{city_builder, seven_seas},
    Account, DecodeError,
};
use tilesync_test::fixtures::city_builder::{player, BoardBuilder, CityLedger};

/// Tries `bytes` under every known account type, returning the names that
/// accepted it
fn accepted_by(bytes: &[u8]) -> Vec<&'static str> {
    fn check<A: Account>(bytes: &[u8], accepted: &mut Vec<&'static str>) {
        if let Ok(Some(_)) = decode::<A>(bytes) {
            accepted.push(A::NAME);
        }
    }

    let mut accepted = Vec::new();
    check::<city_builder::BoardAccount>(bytes, &mut accepted);
    check::<city_builder::GameActionHistory>(bytes, &mut accepted);
    check::<city_builder::PlayerData>(bytes, &mut accepted);
    check::<seven_seas::GameDataAccount>(bytes, &mut accepted);
    check::<seven_seas::ChestVaultAccount>(bytes, &mut accepted);
    accepted
}

#[test]
fn each_buffer_decodes_only_as_its_own_type() {
    let mut ledger = CityLedger::new();
    ledger.place(0, 0, city_builder::BUILDING_TYPE_SAWMILL);

    assert_eq!(accepted_by(&BoardBuilder::new().bytes()), vec!["BoardAccount"]);
    assert_eq!(accepted_by(&encode(&player("Ana"))), vec!["PlayerData"]);
    assert_eq!(
        accepted_by(&encode(&seven_seas::GameDataAccount::default())),
        vec!["GameDataAccount"]
    );
    assert_eq!(
        accepted_by(&encode(&seven_seas::ChestVaultAccount)),
        vec!["ChestVaultAccount"]
    );
    // both games call their log GameActionHistory, so the tag is shared
    assert!(accepted_by(&ledger.history_bytes()).contains(&"GameActionHistory"));
}

#[test]
fn both_history_forms_share_one_discriminator() {
    assert_eq!(
        city_builder::GameActionHistory::DISCRIMINATOR,
        seven_seas::GameActionHistory::DISCRIMINATOR
    );
    let counted = encode(&seven_seas::GameActionHistory::default());
    assert_eq!(
        discriminator_of(&counted),
        Some(city_builder::GameActionHistory::DISCRIMINATOR)
    );
}

#[test]
fn counted_history_is_too_short_for_the_fixed_form() {
    let counted = encode(&seven_seas::GameActionHistory::default());
    assert!(matches!(
        decode::<city_builder::GameActionHistory>(&counted),
        Err(DecodeError::TruncatedBuffer { .. })
    ));
}

#[test]
fn discriminators_are_distinct_across_account_types() {
    let discriminators = [
        city_builder::BoardAccount::DISCRIMINATOR,
        city_builder::GameActionHistory::DISCRIMINATOR,
        city_builder::PlayerData::DISCRIMINATOR,
        seven_seas::GameDataAccount::DISCRIMINATOR,
        seven_seas::ChestVaultAccount::DISCRIMINATOR,
    ];
    for (index, discriminator) in discriminators.iter().enumerate() {
        assert!(!discriminators[index + 1..].contains(discriminator));
    }
}

#[test]
fn board_layout_is_x_major_on_the_wire() {
    let bytes = BoardBuilder::new()
        .building(1, 0, city_builder::BUILDING_TYPE_MINE)
        .building(0, 1, city_builder::BUILDING_TYPE_SAWMILL)
        .bytes();
    let tile = 69;
    // (0, 1) is the second tile record, (1, 0) the eleventh
    assert_eq!(bytes[8 + tile], city_builder::BUILDING_TYPE_SAWMILL);
    assert_eq!(bytes[8 + 10 * tile], city_builder::BUILDING_TYPE_MINE);
}
