//! Common error types for the governance contracts
//!
//! One error enum is shared by the registry and the execution agent so that
//! an error raised by the registry reaches the agent's caller unchanged.

use soroban_sdk::contracterror;

/// Error taxonomy for proposal submission, voting, approval and execution
///
/// Error ranges are organized by category:
/// - 1-19: Authorization and lifecycle errors
/// - 20-39: Execution authorization errors
/// - 40-59: Configuration errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum GovernanceError {
    // ===== Authorization / Lifecycle Errors (1-19) =====
    /// Caller lacks the required membership or identity
    Unauthorized = 1,

    /// Caller is not the current holder of the voting unit
    NotTokenOwner = 2,

    /// Proposal id is outside the allocated range
    ProposalNotFound = 3,

    /// Proposal target is the registry or the agent itself
    InvalidTarget = 4,

    /// Membership unit already voted on this proposal
    AlreadyVoted = 5,

    /// Vote arrived after the deadline or after the decision
    VotingClosed = 6,

    /// Decision requested before the deadline
    VotingOpen = 7,

    /// Approval decision was already recorded
    AlreadyDecided = 8,

    /// Input exceeds a length or arity limit
    InvalidInput = 9,

    /// Vote counter overflow
    Overflow = 10,

    // ===== Execution Authorization Errors (20-39) =====
    /// Proposal has not been approved
    NotApproved = 20,

    /// Proposal carries no target
    NoTarget = 21,

    /// Proposal carries no function signature
    NoSignature = 22,

    /// Proposal payload was already applied
    AlreadyExecuted = 23,

    /// Payload application failed inside the agent
    PayloadFailed = 24,

    /// Registry could not be reached or returned an undecodable answer
    RegistryUnavailable = 25,

    // ===== Configuration Errors (40-59) =====
    /// Contract has not been bootstrapped
    NotInitialized = 40,

    /// Bootstrap already happened
    AlreadyInitialized = 41,

    /// Approval rule parameters are out of range
    InvalidRule = 42,
}

impl GovernanceError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            GovernanceError::Unauthorized => "Caller is not authorized",
            GovernanceError::NotTokenOwner => "Caller does not hold the membership unit",
            GovernanceError::ProposalNotFound => "Proposal not found",
            GovernanceError::InvalidTarget => "Proposal target is self-referential",
            GovernanceError::AlreadyVoted => "Membership unit already voted",
            GovernanceError::VotingClosed => "Voting is closed",
            GovernanceError::VotingOpen => "Voting is still open",
            GovernanceError::AlreadyDecided => "Approval already decided",
            GovernanceError::InvalidInput => "Invalid input provided",
            GovernanceError::Overflow => "Arithmetic overflow",
            GovernanceError::NotApproved => "Proposal not approved",
            GovernanceError::NoTarget => "Proposal has no target",
            GovernanceError::NoSignature => "Proposal has no function signature",
            GovernanceError::AlreadyExecuted => "Proposal already executed",
            GovernanceError::PayloadFailed => "Payload application failed",
            GovernanceError::RegistryUnavailable => "Registry unavailable",
            GovernanceError::NotInitialized => "Contract not initialized",
            GovernanceError::AlreadyInitialized => "Contract already initialized",
            GovernanceError::InvalidRule => "Invalid approval rule",
        }
    }
}
