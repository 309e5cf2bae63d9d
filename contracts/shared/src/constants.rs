//! Limits and storage lifetimes shared by the governance contracts

// ===== Storage TTL (in ledgers, ~5s per ledger) =====

pub const LEDGER_CLOSE_SECONDS: u64 = 5;
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Lifetime of contract configuration (instance storage)
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Lifetime of proposals and vote records (persistent storage)
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ===== Proposal Limits =====

/// Maximum outline length in bytes
pub const MAX_OUTLINE_LEN: u32 = 256;

/// Maximum function signature length in bytes
pub const MAX_SIGNATURE_LEN: u32 = 64;

/// Maximum number of payload arguments
pub const MAX_PAYLOAD_ARGS: u32 = 8;

// ===== Approval Rule Bounds =====

/// Basis points in 100%
pub const BASIS_POINTS: u32 = 10_000;

/// Longest accepted voting window (28 days in seconds). Must stay below the
/// persistent bump so an untouched proposal is still live at its deadline.
pub const MAX_VOTING_PERIOD_SECONDS: u64 = 28 * 86_400;

// ===== Read Pagination =====

/// Most proposal ids scanned by one `open_proposals` call
pub const MAX_PAGE_SIZE: u32 = 50;

// ===== Governed Module Limits =====

/// Highest fee rate a module accepts, in basis points
pub const MAX_FEE_RATE_BPS: u32 = BASIS_POINTS;
