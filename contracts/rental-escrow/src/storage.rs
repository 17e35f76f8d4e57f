use escrow_lib::{ContractError, Session};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    FeeToken,
    SessionCounter,
    EntryGuard,
    Balance(Address),
    Session(u64),
}

/* ---------------- ADMIN ---------------- */

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- FEE TOKEN ---------------- */

pub fn set_fee_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FeeToken, token);
}

pub fn get_fee_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::FeeToken)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- BALANCES ---------------- */

// Balances are created implicitly at zero on first reference and persist at
// zero; the key is never removed.
pub fn get_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

/* ---------------- SESSIONS ---------------- */

pub fn get_session(env: &Env, session_id: u64) -> Option<Session> {
    env.storage().persistent().get(&DataKey::Session(session_id))
}

pub fn set_session(env: &Env, session: &Session) {
    env.storage()
        .persistent()
        .set(&DataKey::Session(session.session_id), session);
}

pub fn get_session_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::SessionCounter)
        .unwrap_or(0)
}

/// Hands out the next session identifier. Identifiers start at 0, increase
/// strictly, and are never reused or reclaimed.
pub fn allocate_session_id(env: &Env) -> u64 {
    let session_id = get_session_counter(env);
    env.storage()
        .instance()
        .set(&DataKey::SessionCounter, &(session_id + 1));
    session_id
}

/* ---------------- ENTRY GUARD ---------------- */

// Second line of defense behind the effects-before-interaction ordering: a
// nested ledger-mutating call while one is already executing is rejected.
// A failed invocation reverts the guard bit along with all other writes.
pub fn acquire_entry_guard(env: &Env) -> Result<(), ContractError> {
    if env
        .storage()
        .instance()
        .get(&DataKey::EntryGuard)
        .unwrap_or(false)
    {
        return Err(ContractError::NotAuthorized);
    }
    env.storage().instance().set(&DataKey::EntryGuard, &true);
    Ok(())
}

pub fn release_entry_guard(env: &Env) {
    env.storage().instance().remove(&DataKey::EntryGuard);
}
