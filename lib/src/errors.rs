use soroban_sdk::contracterror;

/// Caller-visible failure taxonomy. Every failure is deterministic for a
/// given state and input, and aborts the whole invocation: the host reverts
/// all storage writes of a failed call, so no partial mutation is ever
/// observable.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    InvalidCounterparty = 5,
    InvalidRate = 6,
    NoFunds = 7,
    SessionNotActive = 8,
    NotAuthorized = 9,
    InsufficientDeposit = 10,
    Overflow = 11,
}
