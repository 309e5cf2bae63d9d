#![no_std]
//! Governance Registry
//!
//! Owns every proposal and vote record. Members submit and vote on proposals,
//! anyone may record the approval decision once voting closes, and the
//! execution agent asks the registry whether a payload may run before it
//! applies it.

use shared::constants::MAX_PAGE_SIZE;
use shared::interfaces::MembershipOracleClient;
use shared::{
    safe_increment, validate_proposal_input, validate_rule, validate_target, ApprovalRule,
    ExecutionPayload, GovernanceError, Proposal, ProposalStatus,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, Vec};

mod approval;
mod storage;

pub use storage::RegistryConfig;

#[contract]
pub struct GovernanceRegistry;

// ============================================================================
// Helper Functions
// ============================================================================

/// Membership check. An unreachable oracle counts as no membership.
fn require_member(env: &Env, oracle: &Address, who: &Address) -> Result<(), GovernanceError> {
    let client = MembershipOracleClient::new(env, oracle);
    let units = match client.try_unit_count_held_by(who) {
        Ok(Ok(count)) => count,
        _ => 0,
    };
    if units == 0 {
        return Err(GovernanceError::Unauthorized);
    }
    Ok(())
}

/// The unit, not the caller's address, is the voting key.
fn require_unit_holder(
    env: &Env,
    oracle: &Address,
    who: &Address,
    unit_id: u64,
) -> Result<(), GovernanceError> {
    let client = MembershipOracleClient::new(env, oracle);
    match client.try_current_holder_of(&unit_id) {
        Ok(Ok(Some(holder))) if holder == *who => Ok(()),
        _ => Err(GovernanceError::NotTokenOwner),
    }
}

/// Checks shared by execution authorization and completion.
fn executable_payload(proposal: &Proposal) -> Result<ExecutionPayload, GovernanceError> {
    let target = proposal.target.clone().ok_or(GovernanceError::NoTarget)?;
    if proposal.function_signature.len() == 0 {
        return Err(GovernanceError::NoSignature);
    }
    if !proposal.approved {
        return Err(GovernanceError::NotApproved);
    }
    Ok(ExecutionPayload {
        proposal_id: proposal.id,
        target,
        function_signature: proposal.function_signature.clone(),
        arguments: proposal.arguments.clone(),
    })
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contractimpl]
impl GovernanceRegistry {
    /// Records the only address allowed to run `bootstrap`.
    pub fn __constructor(env: Env, admin: Address) {
        storage::set_admin(&env, &admin);
        storage::bump_instance(&env);
    }

    /// One-shot wiring of the membership oracle, the agent identity and the
    /// approval rule. The bootstrap admin is dropped afterwards, so the
    /// configuration can never change again.
    pub fn bootstrap(
        env: Env,
        membership_oracle: Address,
        agent: Address,
        rule: ApprovalRule,
    ) -> Result<(), GovernanceError> {
        if storage::has_config(&env) {
            return Err(GovernanceError::AlreadyInitialized);
        }
        let admin = storage::get_admin(&env).ok_or(GovernanceError::AlreadyInitialized)?;
        admin.require_auth();

        validate_rule(&rule)?;
        let registry = env.current_contract_address();
        if agent == registry || membership_oracle == registry {
            return Err(GovernanceError::InvalidTarget);
        }

        storage::set_config(
            &env,
            &RegistryConfig {
                membership_oracle: membership_oracle.clone(),
                agent: agent.clone(),
                rule,
            },
        );
        storage::remove_admin(&env);
        storage::bump_instance(&env);

        env.events().publish(
            (Symbol::new(&env, "oracle_configured"), membership_oracle),
            agent,
        );

        Ok(())
    }

    /// Submit a proposal. The caller must hold at least one membership unit
    /// and the target may be neither the registry nor the agent.
    pub fn submit_proposal(
        env: Env,
        proposer: Address,
        outline: String,
        target: Option<Address>,
        function_signature: String,
        arguments: Vec<i128>,
    ) -> Result<u64, GovernanceError> {
        proposer.require_auth();

        let config = storage::get_config(&env)?;
        validate_proposal_input(&outline, &function_signature, &arguments)?;
        validate_target(&target, &env.current_contract_address(), &config.agent)?;
        require_member(&env, &config.membership_oracle, &proposer)?;

        let proposal_id = storage::next_proposal_id(&env);
        let now = env.ledger().timestamp();

        let proposal = Proposal {
            id: proposal_id,
            proposer,
            outline: outline.clone(),
            target: target.clone(),
            function_signature: function_signature.clone(),
            arguments,
            total_votes: 0,
            votes_in_favor: 0,
            approved: false,
            denied: false,
            executed: false,
            created_at: now,
            deadline: now.saturating_add(config.rule.voting_period),
        };
        storage::save_proposal(&env, &proposal);
        storage::bump_instance(&env);

        env.events().publish(
            (Symbol::new(&env, "proposal_created"), proposal_id),
            (outline, target, function_signature),
        );

        Ok(proposal_id)
    }

    /// Cast the vote of membership unit `unit_id`, held by `voter`.
    pub fn vote_on_proposal(
        env: Env,
        voter: Address,
        proposal_id: u64,
        unit_id: u64,
        in_favor: bool,
    ) -> Result<(), GovernanceError> {
        voter.require_auth();

        let config = storage::get_config(&env)?;
        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if !approval::voting_open(&proposal, env.ledger().timestamp()) {
            return Err(GovernanceError::VotingClosed);
        }

        require_member(&env, &config.membership_oracle, &voter)?;
        require_unit_holder(&env, &config.membership_oracle, &voter, unit_id)?;

        if storage::has_voted(&env, proposal_id, unit_id) {
            return Err(GovernanceError::AlreadyVoted);
        }

        proposal.total_votes = safe_increment(proposal.total_votes)?;
        if in_favor {
            proposal.votes_in_favor = safe_increment(proposal.votes_in_favor)?;
        }

        storage::record_vote(&env, proposal_id, unit_id);
        storage::save_proposal(&env, &proposal);

        env.events().publish(
            (Symbol::new(&env, "vote_cast"), proposal_id),
            (unit_id, in_favor, proposal.total_votes, proposal.votes_in_favor),
        );

        Ok(())
    }

    /// Apply the approval rule once the deadline has passed. Returns whether
    /// the proposal was approved. The decision is recorded exactly once.
    pub fn decide_approval(env: Env, proposal_id: u64) -> Result<bool, GovernanceError> {
        let config = storage::get_config(&env)?;
        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if proposal.is_decided() {
            return Err(GovernanceError::AlreadyDecided);
        }
        if env.ledger().timestamp() < proposal.deadline {
            return Err(GovernanceError::VotingOpen);
        }

        let approved =
            approval::is_approved(&config.rule, proposal.total_votes, proposal.votes_in_favor);
        if approved {
            proposal.approved = true;
        } else {
            proposal.denied = true;
        }
        storage::save_proposal(&env, &proposal);

        let topic = if approved {
            Symbol::new(&env, "proposal_approved")
        } else {
            Symbol::new(&env, "proposal_denied")
        };
        env.events().publish(
            (topic, proposal_id),
            (proposal.total_votes, proposal.votes_in_favor),
        );
        log!(&env, "approval decided", proposal_id, approved);

        Ok(approved)
    }

    /// Payload of an approved proposal. Does not look at `executed`; the
    /// agent guards against duplicate application.
    pub fn get_proposal_for_execution(
        env: Env,
        proposal_id: u64,
    ) -> Result<ExecutionPayload, GovernanceError> {
        let proposal = storage::get_proposal(&env, proposal_id)?;
        executable_payload(&proposal)
    }

    /// Record that the agent applied the payload. Only the agent may call
    /// this; repeating it is a no-op.
    pub fn mark_executed(env: Env, caller: Address, proposal_id: u64) -> Result<(), GovernanceError> {
        let config = storage::get_config(&env)?;
        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if caller != config.agent {
            return Err(GovernanceError::Unauthorized);
        }
        caller.require_auth();

        if proposal.executed {
            return Ok(());
        }
        executable_payload(&proposal)?;

        proposal.executed = true;
        storage::save_proposal(&env, &proposal);

        env.events()
            .publish((Symbol::new(&env, "proposal_executed"), proposal_id), caller);

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Read-only Queries
    // ------------------------------------------------------------------------

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, GovernanceError> {
        storage::get_proposal(&env, proposal_id)
    }

    pub fn votes_against(env: Env, proposal_id: u64) -> Result<u32, GovernanceError> {
        Ok(storage::get_proposal(&env, proposal_id)?.votes_against())
    }

    pub fn has_voted(env: Env, proposal_id: u64, unit_id: u64) -> bool {
        storage::has_voted(&env, proposal_id, unit_id)
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    pub fn proposal_status(env: Env, proposal_id: u64) -> Result<ProposalStatus, GovernanceError> {
        let proposal = storage::get_proposal(&env, proposal_id)?;
        Ok(approval::status(&proposal, env.ledger().timestamp()))
    }

    /// Ids of proposals still accepting votes, taken from the `limit` ids
    /// starting at `start`. `limit` is capped at `MAX_PAGE_SIZE`.
    pub fn open_proposals(env: Env, start: u64, limit: u32) -> Vec<u64> {
        let now = env.ledger().timestamp();
        let mut open = Vec::new(&env);

        let first = start.max(1);
        let last = first
            .saturating_add(u64::from(limit.min(MAX_PAGE_SIZE)))
            .saturating_sub(1)
            .min(storage::get_proposal_count(&env));

        for proposal_id in first..=last {
            if let Ok(proposal) = storage::get_proposal(&env, proposal_id) {
                if approval::voting_open(&proposal, now) {
                    open.push_back(proposal_id);
                }
            }
        }

        open
    }

    pub fn is_approved(env: Env, proposal_id: u64) -> bool {
        storage::get_proposal(&env, proposal_id)
            .map(|proposal| proposal.approved)
            .unwrap_or(false)
    }

    pub fn is_executed(env: Env, proposal_id: u64) -> bool {
        storage::get_proposal(&env, proposal_id)
            .map(|proposal| proposal.executed)
            .unwrap_or(false)
    }

    pub fn approval_rule(env: Env) -> Result<ApprovalRule, GovernanceError> {
        Ok(storage::get_config(&env)?.rule)
    }

    pub fn membership_oracle(env: Env) -> Result<Address, GovernanceError> {
        Ok(storage::get_config(&env)?.membership_oracle)
    }

    pub fn agent(env: Env) -> Result<Address, GovernanceError> {
        Ok(storage::get_config(&env)?.agent)
    }
}
