#![no_std]
//! Execution Agent
//!
//! The governed system. It holds the state of a fixed set of modules and
//! mutates it only by running payloads of proposals the registry reports as
//! approved. Execution is open to any caller; the proposal, not the caller,
//! is what gets authorized.

use shared::interfaces::RegistryClient;
use shared::GovernanceError;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, Env, Symbol, Vec,
};

mod dispatch;
mod storage;

pub use dispatch::{Command, DispatchError, PAUSE, SET_FEE_RATE, SET_PARAMETER, UNPAUSE};
pub use storage::ModuleState;

#[contract]
pub struct ExecutionAgent;

#[contractimpl]
impl ExecutionAgent {
    /// The registry address is fixed here for the lifetime of the contract.
    /// No dispatch entry can reach it, so an approved payload cannot redirect
    /// later authorization queries.
    pub fn __constructor(env: Env, registry: Address, modules: Vec<Address>) {
        let agent = env.current_contract_address();

        for module in modules.iter() {
            if module == registry || module == agent {
                panic_with_error!(&env, GovernanceError::InvalidTarget);
            }
            storage::save_module(&env, &module, &ModuleState::new(&env));
        }

        storage::set_registry(&env, &registry);
        storage::set_modules(&env, &modules);
        storage::bump_instance(&env);
    }

    /// Run the payload of proposal `proposal_id`.
    ///
    /// The registry is asked for the authorized payload, the local execution
    /// record is checked, the payload is applied to the target module and the
    /// registry is told about completion. A failing payload leaves the
    /// proposal approved but not executed, so execution may be retried.
    pub fn execute_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<(), GovernanceError> {
        caller.require_auth();

        let registry = RegistryClient::new(&env, &storage::get_registry(&env)?);

        let payload = match registry.try_get_proposal_for_execution(&proposal_id) {
            Ok(Ok(payload)) => payload,
            Err(Ok(err)) => return Err(err),
            _ => return Err(GovernanceError::RegistryUnavailable),
        };

        if storage::is_executed(&env, proposal_id) || registry.is_executed(&proposal_id) {
            return Err(GovernanceError::AlreadyExecuted);
        }

        if let Err(err) = dispatch::dispatch(&env, &payload) {
            log!(&env, "payload rejected", proposal_id, err as u32);
            return Err(err.into());
        }

        storage::record_executed(&env, proposal_id);
        storage::bump_instance(&env);

        match registry.try_mark_executed(&env.current_contract_address(), &proposal_id) {
            Ok(Ok(())) => {}
            Err(Ok(err)) => return Err(err),
            _ => return Err(GovernanceError::RegistryUnavailable),
        }

        env.events().publish(
            (Symbol::new(&env, "payload_applied"), proposal_id),
            (payload.target, payload.function_signature, caller),
        );

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Read-only Queries
    // ------------------------------------------------------------------------

    pub fn registry(env: Env) -> Result<Address, GovernanceError> {
        storage::get_registry(&env)
    }

    pub fn modules(env: Env) -> Vec<Address> {
        storage::get_modules(&env)
    }

    pub fn module_state(env: Env, module: Address) -> Option<ModuleState> {
        storage::get_module(&env, &module)
    }

    pub fn is_executed(env: Env, proposal_id: u64) -> bool {
        storage::is_executed(&env, proposal_id)
    }

    pub fn executed_count(env: Env) -> u64 {
        storage::get_executed_count(&env)
    }
}
