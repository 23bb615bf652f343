use soroban_sdk::{contracttype, Address};

/// Lifecycle state of a swap proposal
///
/// `Open` is the only live state. The other three are terminal and
/// mutually exclusive.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalState {
    Open,
    Fulfilled,
    Cancelled,
    Expired,
}

/// A swap proposal: one escrowed leg offered against one requested leg
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapProposal {
    /// Unique identifier assigned by the engine
    pub id: u64,
    /// Account that opened the proposal and funded the escrow
    pub proposer: Address,
    /// Counterparty bound to the proposal, or None for open fulfillment
    pub fulfiller: Option<Address>,
    /// Asset escrowed by the proposer
    pub offered_token: Address,
    pub offered_amount: i128,
    /// Asset the proposer expects in return
    pub requested_token: Address,
    pub requested_amount: i128,
    pub state: ProposalState,
    /// Ledger timestamp at creation
    pub created_at: u64,
    /// Deadline after which the proposal can no longer be fulfilled
    pub expires_at: Option<u64>,
}

/// State a proposal held before a transition, or `None` for the creation
/// entry
///
/// Stored in place of `Option<ProposalState>`, which the generated client
/// bindings cannot convert.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PriorState {
    None,
    Some(ProposalState),
}

impl From<Option<ProposalState>> for PriorState {
    fn from(state: Option<ProposalState>) -> Self {
        match state {
            Some(inner) => PriorState::Some(inner),
            None => PriorState::None,
        }
    }
}

/// One immutable entry in a proposal's transition history
///
/// The creation entry has `from_state = PriorState::None`. Replaying the
/// records in order reconstructs every state the proposal has been in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransitionRecord {
    pub proposal_id: u64,
    pub from_state: PriorState,
    pub to_state: ProposalState,
    /// Account that triggered the transition
    pub actor: Address,
    pub timestamp: u64,
}
