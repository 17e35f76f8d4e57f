use soroban_sdk::Address;

use crate::{errors::ContractError, AMOUNT_UPPER_BOUND, RATE_UPPER_BOUND};

pub fn check_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 || amount > AMOUNT_UPPER_BOUND {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

pub fn check_rate(rate: i128) -> Result<(), ContractError> {
    if rate <= 0 || rate > RATE_UPPER_BOUND {
        return Err(ContractError::InvalidRate);
    }
    Ok(())
}

/// The address type cannot express a null identity, so the degenerate
/// counterparties it still allows are rejected instead: the payer itself and
/// the escrow contract holding custody.
pub fn check_counterparty(
    payer: &Address,
    payee: &Address,
    escrow: &Address,
) -> Result<(), ContractError> {
    if payee == payer || payee == escrow {
        return Err(ContractError::InvalidCounterparty);
    }
    Ok(())
}
