// Engine types - using types from packages

// Re-export types from packages
pub use pactswap_lifecycle::{PriorState, ProposalState, SwapProposal, TransitionRecord};
