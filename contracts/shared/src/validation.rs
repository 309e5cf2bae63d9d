//! Validation helpers shared by the governance contracts

use crate::constants::{
    BASIS_POINTS, MAX_OUTLINE_LEN, MAX_PAYLOAD_ARGS, MAX_SIGNATURE_LEN,
    MAX_VOTING_PERIOD_SECONDS,
};
use crate::errors::GovernanceError;
use crate::types::ApprovalRule;
use soroban_sdk::{Address, String, Vec};

// ===== Proposal Validation =====

/// Validate outline, signature and argument bounds of a new proposal
pub fn validate_proposal_input(
    outline: &String,
    function_signature: &String,
    arguments: &Vec<i128>,
) -> Result<(), GovernanceError> {
    if outline.len() > MAX_OUTLINE_LEN {
        return Err(GovernanceError::InvalidInput);
    }
    if function_signature.len() > MAX_SIGNATURE_LEN {
        return Err(GovernanceError::InvalidInput);
    }
    if arguments.len() > MAX_PAYLOAD_ARGS {
        return Err(GovernanceError::InvalidInput);
    }
    Ok(())
}

/// Reject a target that points back at governance itself
///
/// A missing target is the "no execution" sentinel and is always accepted.
pub fn validate_target(
    target: &Option<Address>,
    registry: &Address,
    agent: &Address,
) -> Result<(), GovernanceError> {
    match target {
        Some(address) if address == registry || address == agent => {
            Err(GovernanceError::InvalidTarget)
        }
        _ => Ok(()),
    }
}

// ===== Rule Validation =====

/// Validate approval rule parameters
pub fn validate_rule(rule: &ApprovalRule) -> Result<(), GovernanceError> {
    if rule.quorum == 0 {
        return Err(GovernanceError::InvalidRule);
    }
    // A threshold of 100% could never be exceeded.
    if rule.threshold_bps >= BASIS_POINTS {
        return Err(GovernanceError::InvalidRule);
    }
    if rule.voting_period == 0 || rule.voting_period > MAX_VOTING_PERIOD_SECONDS {
        return Err(GovernanceError::InvalidRule);
    }
    Ok(())
}

// ===== Safe Math =====

/// Increment a vote counter, failing on overflow
pub fn safe_increment(value: u32) -> Result<u32, GovernanceError> {
    value.checked_add(1).ok_or(GovernanceError::Overflow)
}
