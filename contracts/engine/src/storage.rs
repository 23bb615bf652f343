// Engine storage module for PactSwap

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{ProposalState, SwapProposal, TransitionRecord};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum EngineDataKey {
    /// Last assigned proposal id (ids start at 1)
    ProposalCounter,
    /// Proposal record by id
    Proposal(u64),
    /// Escrowed balance the engine accounts for, per token
    Custody(Address),
    /// Transition history by proposal id, oldest first
    History(u64),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

/// Extend TTL for a persistent storage key
fn extend_ttl(env: &Env, key: &EngineDataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// PROPOSAL COUNTER
// ============================================================

/// Total proposals ever created
pub fn read_proposal_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&EngineDataKey::ProposalCounter)
        .unwrap_or(0)
}

/// Assign the next proposal id
pub fn next_proposal_id(env: &Env) -> u64 {
    let id = read_proposal_count(env) + 1;
    env.storage()
        .persistent()
        .set(&EngineDataKey::ProposalCounter, &id);
    extend_ttl(env, &EngineDataKey::ProposalCounter);
    id
}

// ============================================================
// PROPOSALS
// ============================================================

/// Write a proposal record
pub fn write_proposal(env: &Env, proposal: &SwapProposal) {
    let key = EngineDataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    extend_ttl(env, &key);
}

/// Read a proposal record by id
pub fn read_proposal(env: &Env, id: u64) -> Option<SwapProposal> {
    let key = EngineDataKey::Proposal(id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

/// Check if a proposal exists
pub fn proposal_exists(env: &Env, id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&EngineDataKey::Proposal(id))
}

// ============================================================
// CUSTODY ACCOUNTING
// ============================================================

/// Escrowed balance the engine accounts for in `token`
pub fn read_custody(env: &Env, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&EngineDataKey::Custody(token.clone()))
        .unwrap_or(0)
}

/// Increase the custody accumulator after an escrow deposit
pub fn add_custody(env: &Env, token: &Address, amount: i128) {
    let key = EngineDataKey::Custody(token.clone());
    let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage()
        .persistent()
        .set(&key, &current.saturating_add(amount));
    extend_ttl(env, &key);
}

/// Decrease the custody accumulator after an escrow release
pub fn sub_custody(env: &Env, token: &Address, amount: i128) {
    let key = EngineDataKey::Custody(token.clone());
    let current: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage()
        .persistent()
        .set(&key, &current.saturating_sub(amount));
    extend_ttl(env, &key);
}

// ============================================================
// TRANSITION HISTORY
// ============================================================

/// Read the transition history for a proposal, oldest first
pub fn read_history(env: &Env, proposal_id: u64) -> Vec<TransitionRecord> {
    let key = EngineDataKey::History(proposal_id);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

/// Append one transition record; existing records are never rewritten
pub fn append_history(
    env: &Env,
    proposal_id: u64,
    from_state: Option<ProposalState>,
    to_state: ProposalState,
    actor: &Address,
) {
    let key = EngineDataKey::History(proposal_id);
    let mut records: Vec<TransitionRecord> = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    records.push_back(TransitionRecord {
        proposal_id,
        from_state: from_state.into(),
        to_state,
        actor: actor.clone(),
        timestamp: env.ledger().timestamp(),
    });
    env.storage().persistent().set(&key, &records);
    extend_ttl(env, &key);
}
