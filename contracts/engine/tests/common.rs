use soroban_sdk::{
    testutils::{Address as _, Events, IssuerFlags, Ledger},
    token, Address, Env, IntoVal, Symbol, Val, Vec,
};
use pactswap_engine::{PactEngine, PactEngineClient};

// Test constants (7 decimals, Stellar asset convention)
pub const INITIAL_BALANCE: i128 = 1_000_0000000; // 1000 units
pub const OFFERED_AMOUNT: i128 = 100_0000000; // 100 units of token A
pub const REQUESTED_AMOUNT: i128 = 50_0000000; // 50 units of token B

/// Register a fresh engine instance
pub fn setup_engine(env: &Env) -> PactEngineClient<'_> {
    let engine_id = env.register(PactEngine, ());
    PactEngineClient::new(env, &engine_id)
}

/// Full swap fixture: engine, two assets, two funded parties
///
/// Returns (engine, token_a, token_b, proposer, fulfiller). The proposer
/// holds token A only and the fulfiller holds token B only.
pub fn setup_swap(env: &Env) -> (PactEngineClient<'_>, Address, Address, Address, Address) {
    let engine = setup_engine(env);
    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);
    let proposer = Address::generate(env);
    let fulfiller = Address::generate(env);

    mint_tokens(env, &token_a, &proposer, INITIAL_BALANCE);
    mint_tokens(env, &token_b, &fulfiller, INITIAL_BALANCE);

    (engine, token_a, token_b, proposer, fulfiller)
}

/// Create a test token whose issuer may later freeze balances
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.issuer().set_flag(IssuerFlags::RevocableFlag);
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

/// Freeze an account's balance in `token` so transfers out of it fail
pub fn freeze_balance(env: &Env, token: &Address, who: &Address) {
    use soroban_sdk::token::StellarAssetClient;
    StellarAssetClient::new(env, token).set_authorized(who, &false);
}

/// Token balance of an account
pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    token::Client::new(env, token).balance(who)
}

/// Set the ledger timestamp
pub fn set_timestamp(env: &Env, ts: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = ts;
    });
}

/// Data payload of the last event `contract` published under `name`
///
/// Token sub-calls publish their own events inside the same invocation,
/// so engine assertions filter by contract address and topic.
pub fn last_event(env: &Env, contract: &Address, name: &str) -> Option<Val> {
    let topics: Vec<Val> = (Symbol::new(env, name),).into_val(env);
    env.events()
        .all()
        .iter()
        .filter(|(source, event_topics, _)| source == contract && event_topics == &topics)
        .map(|(_, _, data)| data)
        .last()
}
