use crate::authority::Authorizer;
use crate::constants::BURN_RATE;
use crate::helpers::validate_address;
use crate::ledger::ReserveLedger;
use crate::state::{BurnRecord, BurnState, Config, ReserveAllocation};
use crate::ContractError;
use cosmwasm_std::{Addr, Api, StdResult, Timestamp, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AuthorityChange {
    pub previous: Addr,
    pub next: Addr,
}

/// Nominal per-round amount, capped at what is left in the reserve.
pub fn burn_amount_for_round(max_supply: Uint128, burn_reserve: Uint128) -> StdResult<Uint128> {
    let nominal = BURN_RATE.apply(max_supply)?;
    Ok(nominal.min(burn_reserve))
}

/// Runs one round of the schedule.
///
/// Checks are ordered: authority, then interval, then reserve. Everything that
/// can fail is evaluated before the ledger is touched, and `state` and
/// `allocation` are only written after the ledger debit succeeded, so an error
/// leaves all three exactly as they were.
pub fn attempt_burn(
    state: &mut BurnState,
    allocation: &mut ReserveAllocation,
    ledger: &mut dyn ReserveLedger,
    authority: &dyn Authorizer,
    caller: &Addr,
    now: Timestamp,
) -> Result<BurnRecord, ContractError> {
    if !authority.authorizes(caller) {
        return Err(ContractError::Unauthorized {});
    }

    if now < state.next_burn_time() {
        return Err(ContractError::IntervalNotElapsed {});
    }

    if allocation.burn_reserve.is_zero() || state.ended {
        return Err(ContractError::ReserveExhausted {});
    }

    let amount = burn_amount_for_round(allocation.max_supply, allocation.burn_reserve)?;
    let remaining = allocation.burn_reserve.checked_sub(amount)?;
    let round = state.round + 1;

    ledger.destroy(&allocation.reserve_account, amount)?;

    allocation.burn_reserve = remaining;
    state.started = true;
    state.round = round;
    state.ended = BurnState::is_terminal_after(round, remaining);
    state.last_burn_time = now;

    Ok(BurnRecord {
        round,
        amount,
        timestamp: now,
    })
}

/// Replaces the burn authority. Only the owner may rotate it.
pub fn set_burn_authority(
    api: &dyn Api,
    config: &mut Config,
    requester: &Addr,
    new_authority: &str,
) -> Result<AuthorityChange, ContractError> {
    if !config.is_owner(requester) {
        return Err(ContractError::Unauthorized {});
    }

    let next = validate_address(api, new_authority)?;
    let previous = std::mem::replace(&mut config.burn_authority, next.clone());

    Ok(AuthorityChange { previous, next })
}
