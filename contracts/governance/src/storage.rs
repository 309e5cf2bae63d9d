use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::{ApprovalRule, GovernanceError, Proposal};
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Bootstrap admin, removed once the registry is configured
    Admin,
    Config,
    ProposalCount,
    Proposal(u64),
    Vote(u64, u64), // (proposal_id, unit_id)
}

/// Wiring fixed by the one-shot bootstrap
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub membership_oracle: Address,
    pub agent: Address,
    pub rule: ApprovalRule,
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Bootstrap ────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn remove_admin(env: &Env) {
    env.storage().instance().remove(&DataKey::Admin);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<RegistryConfig, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(GovernanceError::NotInitialized)
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64)
}

/// Allocate the next proposal id. Ids start at 1 and are never reused.
pub fn next_proposal_id(env: &Env) -> u64 {
    let id = get_proposal_count(env) + 1;
    env.storage().instance().set(&DataKey::ProposalCount, &id);
    id
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, GovernanceError> {
    if proposal_id == 0 || proposal_id > get_proposal_count(env) {
        return Err(GovernanceError::ProposalNotFound);
    }
    let key = DataKey::Proposal(proposal_id);
    let proposal = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(GovernanceError::ProposalNotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    Ok(proposal)
}

// ── Vote Records ─────────────────────────────────────────────────────────────

pub fn record_vote(env: &Env, proposal_id: u64, unit_id: u64) {
    let key = DataKey::Vote(proposal_id, unit_id);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_voted(env: &Env, proposal_id: u64, unit_id: u64) -> bool {
    let key = DataKey::Vote(proposal_id, unit_id);
    if !env.storage().persistent().has(&key) {
        return false;
    }
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    true
}
