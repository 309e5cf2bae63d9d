#![cfg(test)]

use super::*;
use soroban_sdk::testutils::Address as _;

fn setup() -> (Env, Address, MembershipLedgerClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(MembershipLedger, (&admin,));
    let client = MembershipLedgerClient::new(&env, &contract_id);

    (env, admin, client)
}

#[test]
fn test_mint_assigns_sequential_units() {
    let (env, _admin, client) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(client.mint(&alice), 1);
    assert_eq!(client.mint(&bob), 2);
    assert_eq!(client.mint(&alice), 3);

    assert_eq!(client.unit_count_held_by(&alice), 2);
    assert_eq!(client.unit_count_held_by(&bob), 1);
    assert_eq!(client.current_holder_of(&3), Some(alice));
    assert_eq!(client.total_units(), 3);
}

#[test]
fn test_unknown_unit_has_no_holder() {
    let (env, _admin, client) = setup();
    let stranger = Address::generate(&env);

    assert_eq!(client.unit_count_held_by(&stranger), 0);
    assert_eq!(client.current_holder_of(&7), None);
    assert_eq!(client.current_holder_of(&0), None);
    assert_eq!(
        client.try_transfer(&stranger, &stranger, &7),
        Err(Ok(MembershipError::UnitNotFound))
    );
}

#[test]
fn test_transfer_moves_unit_and_balances() {
    let (env, _admin, client) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let unit = client.mint(&alice);
    client.transfer(&alice, &bob, &unit);

    assert_eq!(client.current_holder_of(&unit), Some(bob.clone()));
    assert_eq!(client.unit_count_held_by(&alice), 0);
    assert_eq!(client.unit_count_held_by(&bob), 1);
}

#[test]
fn test_transfer_by_non_holder_fails() {
    let (env, _admin, client) = setup();
    let alice = Address::generate(&env);
    let mallory = Address::generate(&env);

    let unit = client.mint(&alice);

    assert_eq!(
        client.try_transfer(&mallory, &mallory, &unit),
        Err(Ok(MembershipError::NotHolder))
    );
    assert_eq!(
        client.try_transfer(&alice, &alice, &unit),
        Err(Ok(MembershipError::SameHolder))
    );
    assert_eq!(client.current_holder_of(&unit), Some(alice));
}
