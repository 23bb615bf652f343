#![no_std]

pub mod guard;
pub mod transition;
pub mod types;

pub use guard::{can_cancel, can_fulfill, is_elapsed};
pub use transition::{can_transition, is_terminal};
pub use types::{PriorState, ProposalState, SwapProposal, TransitionRecord};
