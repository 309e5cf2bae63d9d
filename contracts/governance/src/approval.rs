//! Approval decision rule and derived proposal status

use shared::constants::BASIS_POINTS;
use shared::{ApprovalRule, Proposal, ProposalStatus};

pub fn quorum_met(rule: &ApprovalRule, total_votes: u32) -> bool {
    total_votes >= rule.quorum
}

/// Favorable share strictly above `threshold_bps`.
pub fn threshold_met(rule: &ApprovalRule, total_votes: u32, votes_in_favor: u32) -> bool {
    if total_votes == 0 {
        return false;
    }
    let in_favor = votes_in_favor as u64 * BASIS_POINTS as u64;
    let required = total_votes as u64 * rule.threshold_bps as u64;
    in_favor > required
}

pub fn is_approved(rule: &ApprovalRule, total_votes: u32, votes_in_favor: u32) -> bool {
    quorum_met(rule, total_votes) && threshold_met(rule, total_votes, votes_in_favor)
}

pub fn voting_open(proposal: &Proposal, now: u64) -> bool {
    !proposal.is_decided() && now < proposal.deadline
}

pub fn status(proposal: &Proposal, now: u64) -> ProposalStatus {
    if proposal.executed {
        ProposalStatus::Executed
    } else if proposal.approved {
        ProposalStatus::Approved
    } else if proposal.denied {
        ProposalStatus::Denied
    } else if now < proposal.deadline {
        ProposalStatus::Open
    } else {
        ProposalStatus::AwaitingDecision
    }
}
