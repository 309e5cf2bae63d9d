//! Cross-contract boundaries
//!
//! The registry talks to the membership oracle and the agent talks to the
//! registry only through the clients generated here.

use soroban_sdk::{contractclient, Address, Env};

use crate::errors::GovernanceError;
use crate::types::ExecutionPayload;

/// Read-only view of membership ownership consulted by the registry
#[contractclient(name = "MembershipOracleClient")]
pub trait MembershipOracle {
    /// Number of membership units currently held by `holder`
    fn unit_count_held_by(env: Env, holder: Address) -> u32;

    /// Current holder of membership unit `unit_id`, `None` for unknown units
    fn current_holder_of(env: Env, unit_id: u64) -> Option<Address>;
}

/// Registry operations the execution agent relies on
#[contractclient(name = "RegistryClient")]
pub trait ExecutionRegistry {
    /// Payload of an approved proposal that carries a target and a signature
    fn get_proposal_for_execution(
        env: Env,
        proposal_id: u64,
    ) -> Result<ExecutionPayload, GovernanceError>;

    /// Records completion; only the agent identity may call this
    fn mark_executed(env: Env, caller: Address, proposal_id: u64) -> Result<(), GovernanceError>;

    /// Public executed flag, `false` for unknown ids
    fn is_executed(env: Env, proposal_id: u64) -> bool;
}
