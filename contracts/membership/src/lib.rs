#![no_std]
//! Reference membership ledger
//!
//! Tracks which address holds each membership unit. It answers the two
//! queries the governance registry needs and offers the minimal mint and
//! transfer operations required to move units between members.

use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, Address, Env, Symbol,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum MembershipError {
    Unauthorized = 1,
    UnitNotFound = 2,
    NotHolder = 3,
    SameHolder = 4,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    UnitCount,
    Holder(u64),
    Balance(Address),
}

#[contract]
pub struct MembershipLedger;

fn get_admin(env: &Env) -> Result<Address, MembershipError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(MembershipError::Unauthorized)
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn get_holder(env: &Env, unit_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Holder(unit_id))
}

fn set_holder(env: &Env, unit_id: u64, holder: &Address) {
    let key = DataKey::Holder(unit_id);
    env.storage().persistent().set(&key, holder);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn get_balance(env: &Env, holder: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, holder: &Address, balance: u32) {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

#[contractimpl]
impl MembershipLedger {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::UnitCount, &0u64);
        bump_instance(&env);
    }

    /// Issue a new membership unit to `to`. Unit ids start at 1.
    pub fn mint(env: Env, to: Address) -> Result<u64, MembershipError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        let unit_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::UnitCount)
            .unwrap_or(0u64)
            + 1;

        set_holder(&env, unit_id, &to);
        set_balance(&env, &to, get_balance(&env, &to) + 1);
        env.storage().instance().set(&DataKey::UnitCount, &unit_id);
        bump_instance(&env);

        env.events()
            .publish((Symbol::new(&env, "unit_minted"), unit_id), to.clone());
        log!(&env, "membership unit minted", unit_id, to);

        Ok(unit_id)
    }

    /// Move a unit from its current holder to another address
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        unit_id: u64,
    ) -> Result<(), MembershipError> {
        from.require_auth();

        let holder = get_holder(&env, unit_id).ok_or(MembershipError::UnitNotFound)?;
        if holder != from {
            return Err(MembershipError::NotHolder);
        }
        if from == to {
            return Err(MembershipError::SameHolder);
        }

        set_holder(&env, unit_id, &to);
        set_balance(&env, &from, get_balance(&env, &from) - 1);
        set_balance(&env, &to, get_balance(&env, &to) + 1);

        env.events()
            .publish((Symbol::new(&env, "unit_transferred"), unit_id), (from, to));

        Ok(())
    }

    pub fn unit_count_held_by(env: Env, holder: Address) -> u32 {
        get_balance(&env, &holder)
    }

    pub fn current_holder_of(env: Env, unit_id: u64) -> Option<Address> {
        get_holder(&env, unit_id)
    }

    pub fn total_units(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::UnitCount)
            .unwrap_or(0u64)
    }
}

#[cfg(test)]
mod test;
