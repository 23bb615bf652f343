// Access Guards
//
// Pure predicates over a proposal and a caller. The engine consults these
// before committing any transition; they read no storage and perform no
// transfers, so the same checks can be evaluated off-chain.

use soroban_sdk::Address;

use crate::types::SwapProposal;

/// Check if `caller` may fulfill the proposal
///
/// A proposal bound to a specific fulfiller admits only that account.
/// An unbound proposal admits any account.
pub fn can_fulfill(proposal: &SwapProposal, caller: &Address) -> bool {
    match &proposal.fulfiller {
        Some(bound) => bound == caller,
        None => true,
    }
}

/// Check if `caller` may cancel the proposal (proposer only)
#[inline]
pub fn can_cancel(proposal: &SwapProposal, caller: &Address) -> bool {
    caller == &proposal.proposer
}

/// Check if a deadline exists and has been reached
///
/// The deadline itself counts as elapsed: at `now == expires_at` the
/// proposal can no longer be fulfilled.
pub fn is_elapsed(expires_at: Option<u64>, now: u64) -> bool {
    match expires_at {
        Some(deadline) => now >= deadline,
        None => false,
    }
}
