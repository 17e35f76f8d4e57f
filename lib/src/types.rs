use soroban_sdk::{contracttype, Address};

/// One metered rental between a payer and a payee.
///
/// A session is created active by `open_session` and flipped inactive exactly
/// once by `close_session`; after that it is a historical record and is never
/// mutated or reused under the same identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Session {
    pub session_id: u64,
    pub payer: Address,
    pub payee: Address,
    /// Price per elapsed second, in the fee token's smallest unit.
    pub rate: i128,
    /// Ledger timestamp recorded at open; never supplied by a caller.
    pub started_at: u64,
    pub active: bool,
}

/// Returned by `open_session`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SessionReceipt {
    pub session_id: u64,
    pub started_at: u64,
}

/// Returned by `close_session`: the realized cost and the ledger timestamp
/// the settlement was computed from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Settlement {
    pub session_id: u64,
    pub closed_at: u64,
    pub cost: i128,
}
