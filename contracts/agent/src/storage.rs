use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::GovernanceError;
use soroban_sdk::{contracttype, Address, Env, Map, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Set by the constructor only; no dispatch entry writes it
    Registry,
    Modules,
    Module(Address),
    Executed(u64),
    ExecutedCount,
}

/// State of one governed module
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleState {
    pub fee_rate_bps: u32,
    pub paused: bool,
    pub parameters: Map<u32, i128>,
}

impl ModuleState {
    pub fn new(env: &Env) -> Self {
        Self {
            fee_rate_bps: 0,
            paused: false,
            parameters: Map::new(env),
        }
    }
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Registry ─────────────────────────────────────────────────────────────────

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn get_registry(env: &Env) -> Result<Address, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .ok_or(GovernanceError::NotInitialized)
}

// ── Modules ──────────────────────────────────────────────────────────────────

pub fn set_modules(env: &Env, modules: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Modules, modules);
}

pub fn get_modules(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Modules)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_module(env: &Env, module: &Address, state: &ModuleState) {
    let key = DataKey::Module(module.clone());
    env.storage().persistent().set(&key, state);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_module(env: &Env, module: &Address) -> Option<ModuleState> {
    env.storage()
        .persistent()
        .get(&DataKey::Module(module.clone()))
}

// ── Execution Record ─────────────────────────────────────────────────────────

pub fn is_executed(env: &Env, proposal_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Executed(proposal_id))
}

pub fn record_executed(env: &Env, proposal_id: u64) {
    let key = DataKey::Executed(proposal_id);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    let count = get_executed_count(env) + 1;
    env.storage().instance().set(&DataKey::ExecutedCount, &count);
}

pub fn get_executed_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ExecutedCount)
        .unwrap_or(0u64)
}
