// Engine events module for PactSwap
// All events use compact names to reduce storage/gas costs

use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a proposal opens and its offered leg enters escrow
/// Topics: ("Proposed",)
/// Data: (id, proposer, fulfiller, offered_token, offered_amount, requested_token, requested_amount, expires_at)
pub fn emit_proposed(
    env: &Env,
    id: u64,
    proposer: &Address,
    fulfiller: &Option<Address>,
    offered_token: &Address,
    offered_amount: i128,
    requested_token: &Address,
    requested_amount: i128,
    expires_at: Option<u64>,
) {
    env.events().publish(
        (Symbol::new(env, "Proposed"),),
        (
            id,
            proposer.clone(),
            fulfiller.clone(),
            offered_token.clone(),
            offered_amount,
            requested_token.clone(),
            requested_amount,
            expires_at,
        ),
    );
}

/// Emitted when a proposal settles atomically
/// Topics: ("Fulfilled",)
/// Data: (id, proposer, fulfiller, offered_token, offered_amount, requested_token, requested_amount)
pub fn emit_fulfilled(
    env: &Env,
    id: u64,
    proposer: &Address,
    fulfiller: &Address,
    offered_token: &Address,
    offered_amount: i128,
    requested_token: &Address,
    requested_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Fulfilled"),),
        (
            id,
            proposer.clone(),
            fulfiller.clone(),
            offered_token.clone(),
            offered_amount,
            requested_token.clone(),
            requested_amount,
        ),
    );
}

/// Emitted when the proposer reclaims an open proposal's escrow
/// Topics: ("Cancelled",)
/// Data: (id, proposer, offered_token, offered_amount)
pub fn emit_cancelled(
    env: &Env,
    id: u64,
    proposer: &Address,
    offered_token: &Address,
    offered_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Cancelled"),),
        (id, proposer.clone(), offered_token.clone(), offered_amount),
    );
}

/// Emitted when a proposal past its deadline is settled as expired
/// Topics: ("Expired",)
/// Data: (id, proposer, offered_token, offered_amount)
pub fn emit_expired(
    env: &Env,
    id: u64,
    proposer: &Address,
    offered_token: &Address,
    offered_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Expired"),),
        (id, proposer.clone(), offered_token.clone(), offered_amount),
    );
}
