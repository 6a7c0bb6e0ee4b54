use crate::ContractError;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw20_base::state::{BALANCES, TOKEN_INFO};

/// The part of the fungible ledger the scheduler relies on.
pub trait ReserveLedger {
    fn balance_of(&self, account: &Addr) -> StdResult<Uint128>;

    fn total_supply(&self) -> StdResult<Uint128>;

    /// Removes `amount` from `account` and from total supply. Fails without
    /// touching either when the balance is too low.
    fn destroy(&mut self, account: &Addr, amount: Uint128) -> Result<(), ContractError>;
}

/// Ledger backed by the cw20-base balances stored in this contract.
pub struct Cw20Ledger<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> Cw20Ledger<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Cw20Ledger { storage }
    }
}

impl ReserveLedger for Cw20Ledger<'_> {
    fn balance_of(&self, account: &Addr) -> StdResult<Uint128> {
        Ok(BALANCES
            .may_load(&*self.storage, account)?
            .unwrap_or_default())
    }

    fn total_supply(&self) -> StdResult<Uint128> {
        Ok(TOKEN_INFO.load(&*self.storage)?.total_supply)
    }

    fn destroy(&mut self, account: &Addr, amount: Uint128) -> Result<(), ContractError> {
        let balance = self.balance_of(account)?;
        if balance < amount {
            return Err(ContractError::InsufficientReserveBalance {});
        }

        let mut token_info = TOKEN_INFO.load(&*self.storage)?;
        token_info.total_supply = token_info.total_supply.checked_sub(amount)?;

        BALANCES.save(self.storage, account, &balance.checked_sub(amount)?)?;
        TOKEN_INFO.save(self.storage, &token_info)?;
        Ok(())
    }
}
