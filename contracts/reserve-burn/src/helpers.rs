use crate::ContractError;
use cosmwasm_std::{Addr, Api, Uint128};
use cw20::Cw20Coin;
use std::collections::HashSet;

// Empty and malformed addresses are both reported as InvalidAddress.
pub fn validate_address(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    if address.trim().is_empty() {
        return Err(ContractError::InvalidAddress {});
    }
    api.addr_validate(address)
        .map_err(|_| ContractError::InvalidAddress {})
}

// Sums the distribution, refusing an account listed twice. cw20-base refuses
// duplicates too, but without naming the address.
pub fn total_distribution(accounts: &[Cw20Coin]) -> Result<Uint128, ContractError> {
    let mut seen = HashSet::new();
    let mut total = Uint128::zero();
    for account in accounts {
        if !seen.insert(account.address.as_str()) {
            return Err(ContractError::DuplicateAccount(account.address.clone()));
        }
        total = total.checked_add(account.amount)?;
    }
    Ok(total)
}
