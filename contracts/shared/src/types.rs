//! Shared ledger types for the governance contracts

use soroban_sdk::{contracttype, Address, String, Vec};

/// A numbered governance item and its voting outcome
///
/// Proposals are append-only: they are never deleted, counters only grow and
/// `approved`, `denied` and `executed` are write-once-true.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Dense identifier starting at 1
    pub id: u64,
    /// Member that submitted the proposal
    pub proposer: Address,
    /// Opaque reference to the proposal text (e.g. a content-addressed pointer)
    pub outline: String,
    /// Governed module the payload runs against; `None` for no-execution proposals
    pub target: Option<Address>,
    /// Payload entry point descriptor; empty when no execution is requested
    pub function_signature: String,
    /// Payload arguments decoded by the agent together with the signature
    pub arguments: Vec<i128>,
    pub total_votes: u32,
    pub votes_in_favor: u32,
    pub approved: bool,
    pub denied: bool,
    pub executed: bool,
    /// Ledger timestamp at submission
    pub created_at: u64,
    /// Ledger timestamp at which voting closes
    pub deadline: u64,
}

impl Proposal {
    pub fn votes_against(&self) -> u32 {
        self.total_votes - self.votes_in_favor
    }

    pub fn is_decided(&self) -> bool {
        self.approved || self.denied
    }
}

/// What an approved proposal asks the agent to run
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionPayload {
    pub proposal_id: u64,
    pub target: Address,
    pub function_signature: String,
    pub arguments: Vec<i128>,
}

/// Approval decision rule, fixed at bootstrap
///
/// A proposal is approved when `total_votes >= quorum` and the share of votes
/// in favor is strictly greater than `threshold_bps` basis points.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalRule {
    /// Minimum number of votes cast
    pub quorum: u32,
    /// Share of favorable votes to exceed, in basis points (5000 = simple majority)
    pub threshold_bps: u32,
    /// Voting window in seconds, counted from submission
    pub voting_period: u64,
}

/// Derived lifecycle position of a proposal
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    /// Voting window still open
    Open,
    /// Deadline passed, decision not yet recorded
    AwaitingDecision,
    Approved,
    Denied,
    Executed,
}
