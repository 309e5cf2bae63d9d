#![no_std]
//! # Shared Governance Library
//!
//! Types, errors, constants, validation helpers and cross-contract clients
//! used by the governance registry, the execution agent and the membership
//! ledger.
//!
//! ## Modules
//!
//! - `errors` - The `GovernanceError` taxonomy
//! - `types` - Proposal, payload and approval rule types
//! - `constants` - Limits and storage TTLs
//! - `validation` - Reusable validation helper functions
//! - `interfaces` - Membership oracle and registry clients
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::GovernanceError;
//! use shared::interfaces::RegistryClient;
//! use shared::types::{ApprovalRule, Proposal};
//! ```

pub mod constants;
pub mod errors;
pub mod interfaces;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use errors::GovernanceError;
pub use interfaces::{MembershipOracleClient, RegistryClient};
pub use types::{ApprovalRule, ExecutionPayload, Proposal, ProposalStatus};
pub use validation::{safe_increment, validate_proposal_input, validate_rule, validate_target};
