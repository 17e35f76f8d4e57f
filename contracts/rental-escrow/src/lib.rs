#![no_std]

use escrow_lib::{validation, ContractError, Session, SessionReceipt, Settlement};
use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol};

mod storage;

use storage::*;

#[contract]
pub struct RentalEscrow;

#[contractimpl]
impl RentalEscrow {
    /// Initialize contract with admin and the single fee token this ledger
    /// instance settles in. The fee token is fixed for the life of the
    /// contract: custody is denominated in one asset.
    pub fn init_contract(env: Env, admin: Address, fee_token: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();
        acquire_entry_guard(&env)?;
        set_admin(&env, &admin);
        set_fee_token(&env, &fee_token);
        env.storage().instance().set(&DataKey::SessionCounter, &0u64);

        release_entry_guard(&env);
        Ok(())
    }

    /// Set a new admin
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();
        acquire_entry_guard(&env)?;
        set_admin(&env, &new_admin);
        release_entry_guard(&env);
        Ok(())
    }

    /// The token all deposits, withdrawals and settlements are denominated in.
    pub fn fee_token(env: Env) -> Result<Address, ContractError> {
        get_fee_token(&env)
    }

    /// Credit the caller's ledger balance and pull the tokens into custody.
    ///
    /// The balance is recorded before the token contract runs, so a
    /// reentrant callback observes consistent ledger state; a failed
    /// transfer traps and reverts the credit with it.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), ContractError> {
        from.require_auth();
        acquire_entry_guard(&env)?;
        validation::check_amount(amount)?;

        let fee_token = get_fee_token(&env)?;

        let balance = get_balance(&env, &from);
        let updated = balance
            .checked_add(amount)
            .ok_or(ContractError::Overflow)?;
        set_balance(&env, &from, updated);

        let token_client = token::Client::new(&env, &fee_token);
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        env.events().publish(
            (Symbol::new(&env, "deposited"),),
            (from, amount),
        );

        release_entry_guard(&env);
        Ok(())
    }

    /// Debit the caller's ledger balance and push the tokens back out of
    /// custody. Open sessions do not reserve funds, so a payer can withdraw
    /// down to zero here even while a session is running.
    pub fn withdraw(env: Env, to: Address, amount: i128) -> Result<(), ContractError> {
        to.require_auth();
        acquire_entry_guard(&env)?;
        validation::check_amount(amount)?;

        let fee_token = get_fee_token(&env)?;

        let balance = get_balance(&env, &to);
        if amount > balance {
            return Err(ContractError::InsufficientBalance);
        }
        set_balance(&env, &to, balance - amount);

        let token_client = token::Client::new(&env, &fee_token);
        token_client.transfer(&env.current_contract_address(), &to, &amount);

        env.events().publish(
            (Symbol::new(&env, "withdrawn"),),
            (to, amount),
        );

        release_entry_guard(&env);
        Ok(())
    }

    /// Current ledger balance; zero for identities never seen before.
    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    /// Open a metered rental session with the caller as payer.
    ///
    /// The balance check here is a coarse solvency pre-check only: it does
    /// not reserve or lock anything, and the payer can still withdraw before
    /// close, in which case settlement fails with `InsufficientDeposit`
    /// until they redeposit.
    pub fn open_session(
        env: Env,
        payer: Address,
        payee: Address,
        rate: i128,
    ) -> Result<SessionReceipt, ContractError> {
        payer.require_auth();
        acquire_entry_guard(&env)?;
        get_admin(&env)?;

        validation::check_counterparty(&payer, &payee, &env.current_contract_address())?;
        validation::check_rate(rate)?;

        if get_balance(&env, &payer) == 0 {
            return Err(ContractError::NoFunds);
        }

        let session_id = allocate_session_id(&env);
        let started_at = env.ledger().timestamp();
        let session = Session {
            session_id,
            payer: payer.clone(),
            payee: payee.clone(),
            rate,
            started_at,
            active: true,
        };
        set_session(&env, &session);

        env.events().publish(
            (Symbol::new(&env, "session_opened"),),
            (session_id, payer, payee, started_at),
        );

        release_entry_guard(&env);
        Ok(SessionReceipt {
            session_id,
            started_at,
        })
    }

    /// Settle and deactivate a session. Either party may close, so a session
    /// cannot be stuck if the other side disappears.
    ///
    /// Cost is `elapsed * rate` in exact integer arithmetic from the two
    /// ledger timestamps recorded at open and close; callers never supply
    /// time. Settlement moves funds inside the ledger only, the tokens
    /// already sit in custody.
    pub fn close_session(
        env: Env,
        session_id: u64,
        caller: Address,
    ) -> Result<Settlement, ContractError> {
        caller.require_auth();
        acquire_entry_guard(&env)?;
        get_admin(&env)?;

        let mut session =
            get_session(&env, session_id).ok_or(ContractError::SessionNotActive)?;
        if !session.active {
            return Err(ContractError::SessionNotActive);
        }
        if caller != session.payer && caller != session.payee {
            return Err(ContractError::NotAuthorized);
        }

        let closed_at = env.ledger().timestamp();
        // Ledger time is monotonic, so closed_at >= started_at.
        let elapsed = closed_at - session.started_at;
        let cost = (elapsed as i128)
            .checked_mul(session.rate)
            .ok_or(ContractError::Overflow)?;

        // Checked against the payer's balance as it stands now, not as it
        // stood at open.
        let payer_balance = get_balance(&env, &session.payer);
        if payer_balance < cost {
            return Err(ContractError::InsufficientDeposit);
        }

        session.active = false;
        set_session(&env, &session);

        set_balance(&env, &session.payer, payer_balance - cost);
        let payee_balance = get_balance(&env, &session.payee);
        let payee_updated = payee_balance
            .checked_add(cost)
            .ok_or(ContractError::Overflow)?;
        set_balance(&env, &session.payee, payee_updated);

        env.events().publish(
            (Symbol::new(&env, "session_closed"),),
            (session_id, closed_at, cost),
        );

        release_entry_guard(&env);
        Ok(Settlement {
            session_id,
            closed_at,
            cost,
        })
    }

    /// Look up a session record, active or closed.
    pub fn get_session(env: Env, session_id: u64) -> Option<Session> {
        get_session(&env, session_id)
    }

    /// The identifier the next opened session will receive.
    pub fn next_session_id(env: Env) -> u64 {
        get_session_counter(&env)
    }
}
