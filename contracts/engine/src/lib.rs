#![no_std]

//! # PactSwap Engine
//!
//! Escrowed token-for-token swaps with an explicit proposal lifecycle.
//!
//! ## Responsibilities:
//! 1. Hold the offered leg in escrow while a proposal is open
//! 2. Settle both legs atomically on fulfillment
//! 3. Refund escrow on cancellation or expiry
//! 4. Record every lifecycle transition in a replayable history

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

// External packages
use pactswap_lifecycle::{can_cancel, can_fulfill, can_transition, is_elapsed};

// Local modules
mod error;
mod events;
mod storage;
pub mod types;

pub use error::{EngineError, EngineErrorMsg};
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct PactEngine;

#[contractimpl]
impl PactEngine {
    // ========================================================
    // WRITE FUNCTIONS (4)
    // ========================================================

    /// Open a swap proposal and escrow the offered leg
    ///
    /// # Arguments
    /// * `proposer` - Account funding the escrow (must authorize)
    /// * `offered_token` - Asset the proposer locks with the engine
    /// * `offered_amount` - Escrowed quantity, must be positive
    /// * `requested_token` - Asset expected in return
    /// * `requested_amount` - Expected quantity, must be positive
    /// * `fulfiller` - Counterparty bound to the proposal, or None for
    ///   open fulfillment
    /// * `expires_at` - Ledger timestamp from which fulfillment is
    ///   rejected, or None for no deadline
    ///
    /// Returns the assigned proposal id.
    pub fn propose(
        env: Env,
        proposer: Address,
        offered_token: Address,
        offered_amount: i128,
        requested_token: Address,
        requested_amount: i128,
        fulfiller: Option<Address>,
        expires_at: Option<u64>,
    ) -> Result<u64, EngineError> {
        proposer.require_auth();

        // Validate amounts
        if offered_amount <= 0 || requested_amount <= 0 {
            return Err(EngineError::InvalidAmount);
        }

        // Validate token pair
        if offered_token == requested_token {
            return Err(EngineError::InvalidAmount);
        }

        // === ESCROW OFFERED LEG ===
        let engine = env.current_contract_address();
        if token::Client::new(&env, &offered_token)
            .try_transfer(&proposer, &engine, &offered_amount)
            .is_err()
        {
            return Err(EngineError::TransferFailed);
        }

        // === RECORD PROPOSAL ===
        let id = next_proposal_id(&env);
        let proposal = SwapProposal {
            id,
            proposer,
            fulfiller,
            offered_token,
            offered_amount,
            requested_token,
            requested_amount,
            state: ProposalState::Open,
            created_at: env.ledger().timestamp(),
            expires_at,
        };
        write_proposal(&env, &proposal);
        add_custody(&env, &proposal.offered_token, proposal.offered_amount);
        append_history(&env, id, None, ProposalState::Open, &proposal.proposer);

        emit_proposed(
            &env,
            id,
            &proposal.proposer,
            &proposal.fulfiller,
            &proposal.offered_token,
            proposal.offered_amount,
            &proposal.requested_token,
            proposal.requested_amount,
            proposal.expires_at,
        );

        Ok(id)
    }

    /// Fulfill an open proposal
    ///
    /// Moves the requested leg from the caller to the proposer and the
    /// escrowed leg from the engine to the caller. Either both transfers
    /// settle or the whole invocation rolls back.
    pub fn fulfill(env: Env, caller: Address, proposal_id: u64) -> Result<(), EngineError> {
        caller.require_auth();

        let mut proposal = read_proposal(&env, proposal_id).ok_or(EngineError::NotFound)?;
        let from_state = proposal.state;

        if !can_transition(from_state, ProposalState::Fulfilled) {
            return Err(EngineError::InvalidState);
        }
        if !can_fulfill(&proposal, &caller) {
            return Err(EngineError::Unauthorized);
        }
        if is_elapsed(proposal.expires_at, env.ledger().timestamp()) {
            return Err(EngineError::Expired);
        }

        // === SETTLE BOTH LEGS ===
        let engine = env.current_contract_address();

        if token::Client::new(&env, &proposal.requested_token)
            .try_transfer(&caller, &proposal.proposer, &proposal.requested_amount)
            .is_err()
        {
            return Err(EngineError::TransferFailed);
        }

        if token::Client::new(&env, &proposal.offered_token)
            .try_transfer(&engine, &caller, &proposal.offered_amount)
            .is_err()
        {
            return Err(EngineError::TransferFailed);
        }

        // === COMMIT TRANSITION ===
        proposal.state = ProposalState::Fulfilled;
        write_proposal(&env, &proposal);
        sub_custody(&env, &proposal.offered_token, proposal.offered_amount);
        append_history(
            &env,
            proposal_id,
            Some(from_state),
            ProposalState::Fulfilled,
            &caller,
        );

        emit_fulfilled(
            &env,
            proposal_id,
            &proposal.proposer,
            &caller,
            &proposal.offered_token,
            proposal.offered_amount,
            &proposal.requested_token,
            proposal.requested_amount,
        );

        Ok(())
    }

    /// Cancel an open proposal and reclaim the escrowed leg
    ///
    /// Only the proposer may cancel. Cancellation stays available after
    /// the deadline as long as nothing else has settled the proposal.
    pub fn cancel(env: Env, caller: Address, proposal_id: u64) -> Result<(), EngineError> {
        caller.require_auth();

        let mut proposal = read_proposal(&env, proposal_id).ok_or(EngineError::NotFound)?;
        let from_state = proposal.state;

        if !can_transition(from_state, ProposalState::Cancelled) {
            return Err(EngineError::InvalidState);
        }
        if !can_cancel(&proposal, &caller) {
            return Err(EngineError::Unauthorized);
        }

        Self::release_escrow(&env, &proposal);

        proposal.state = ProposalState::Cancelled;
        write_proposal(&env, &proposal);
        append_history(
            &env,
            proposal_id,
            Some(from_state),
            ProposalState::Cancelled,
            &caller,
        );

        emit_cancelled(
            &env,
            proposal_id,
            &proposal.proposer,
            &proposal.offered_token,
            proposal.offered_amount,
        );

        Ok(())
    }

    /// Settle a proposal whose deadline has passed
    ///
    /// Permissionless: any caller may expire a stale proposal to return
    /// its escrow to the proposer. The transition is attributed to the
    /// engine itself in the history.
    pub fn expire(env: Env, proposal_id: u64) -> Result<(), EngineError> {
        let mut proposal = read_proposal(&env, proposal_id).ok_or(EngineError::NotFound)?;
        let from_state = proposal.state;

        if !can_transition(from_state, ProposalState::Expired) {
            return Err(EngineError::InvalidState);
        }
        if !is_elapsed(proposal.expires_at, env.ledger().timestamp()) {
            return Err(EngineError::InvalidState);
        }

        Self::release_escrow(&env, &proposal);

        proposal.state = ProposalState::Expired;
        write_proposal(&env, &proposal);
        append_history(
            &env,
            proposal_id,
            Some(from_state),
            ProposalState::Expired,
            &env.current_contract_address(),
        );

        emit_expired(
            &env,
            proposal_id,
            &proposal.proposer,
            &proposal.offered_token,
            proposal.offered_amount,
        );

        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Get a proposal snapshot by id
    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<SwapProposal, EngineError> {
        read_proposal(&env, proposal_id).ok_or(EngineError::NotFound)
    }

    /// Get total number of proposals ever created
    pub fn get_proposal_count(env: Env) -> u64 {
        read_proposal_count(&env)
    }

    /// Check if a proposal exists
    pub fn has_proposal(env: Env, proposal_id: u64) -> bool {
        proposal_exists(&env, proposal_id)
    }

    /// Get the escrowed balance the engine accounts for in `token`
    ///
    /// Equals the sum of offered amounts across open proposals in that
    /// token. Terminal proposals contribute nothing.
    pub fn get_custody(env: Env, token: Address) -> i128 {
        read_custody(&env, &token)
    }

    /// Get the transition history of a proposal, oldest first
    ///
    /// The first record is always the creation entry (from None to Open).
    /// Replaying the records in order reconstructs the current state.
    pub fn get_history(env: Env, proposal_id: u64) -> Result<Vec<TransitionRecord>, EngineError> {
        if !proposal_exists(&env, proposal_id) {
            return Err(EngineError::NotFound);
        }
        Ok(read_history(&env, proposal_id))
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// Return the escrowed leg to the proposer and release custody
    fn release_escrow(env: &Env, proposal: &SwapProposal) {
        let engine = env.current_contract_address();
        token::Client::new(env, &proposal.offered_token).transfer(
            &engine,
            &proposal.proposer,
            &proposal.offered_amount,
        );
        sub_custody(env, &proposal.offered_token, proposal.offered_amount);
    }
}
