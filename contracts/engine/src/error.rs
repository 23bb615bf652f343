// Engine error module for PactSwap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EngineError {
    // Validation errors (100-199)
    InvalidAmount = 100,

    // Ledger errors (200-299)
    TransferFailed = 200,

    // Authorization errors (300-399)
    Unauthorized = 300,

    // Lifecycle errors (400-499)
    InvalidState = 400,
    Expired = 401,
    NotFound = 402,
}

/// Human-readable error messages for debugging
pub struct EngineErrorMsg;

impl EngineErrorMsg {
    // Validation
    pub const INVALID_AMOUNT: &'static str =
        "Engine: amounts must be positive and tokens must differ";

    // Ledger
    pub const TRANSFER_FAILED: &'static str = "Engine: token transfer failed";

    // Authorization
    pub const UNAUTHORIZED: &'static str = "Engine: caller not authorized for this transition";

    // Lifecycle
    pub const INVALID_STATE: &'static str = "Engine: proposal is not open for this transition";
    pub const EXPIRED: &'static str = "Engine: proposal deadline has passed";
    pub const NOT_FOUND: &'static str = "Engine: proposal does not exist";
}
