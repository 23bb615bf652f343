// Proposal State Machine

use crate::types::ProposalState;

/// Check if a state admits no further transitions
#[inline]
pub fn is_terminal(state: ProposalState) -> bool {
    !matches!(state, ProposalState::Open)
}

/// Transition table for the proposal lifecycle
///
/// The only legal moves are Open -> Fulfilled, Open -> Cancelled and
/// Open -> Expired. Terminal states admit nothing, and a proposal never
/// re-enters Open.
pub fn can_transition(from: ProposalState, to: ProposalState) -> bool {
    matches!(from, ProposalState::Open) && is_terminal(to)
}
