use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw20_base::ContractError as Cw20ContractError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("ReserveBurn-Contract: {0}")]
    Std(#[from] StdError),

    #[error("ReserveBurn-Contract: {0}")]
    Overflow(#[from] OverflowError),

    #[error("ReserveBurn-Contract: {0}")]
    Cw20(#[from] Cw20ContractError),

    #[error("ReserveBurn-Contract: Unauthorized")]
    Unauthorized {},

    #[error("ReserveBurn-Contract: Address is empty or invalid")]
    InvalidAddress {},

    #[error("ReserveBurn-Contract: Burn interval has not elapsed since the last burn")]
    IntervalNotElapsed {},

    #[error("ReserveBurn-Contract: Burn reserve is exhausted or the schedule has ended")]
    ReserveExhausted {},

    #[error("ReserveBurn-Contract: Reserve account balance is lower than the burn amount")]
    InsufficientReserveBalance {},

    #[error("ReserveBurn-Contract: Burn reserve cannot exceed 10% of max supply")]
    ReserveAboveCap {},

    #[error("ReserveBurn-Contract: Initial distribution must equal max supply. expected {expected}, got {actual}")]
    SupplyMismatch { expected: Uint128, actual: Uint128 },

    #[error("ReserveBurn-Contract: Account `{0}` appears more than once in the initial distribution")]
    DuplicateAccount(String),

    #[error("ReserveBurn-Contract: Funds not expected with request")]
    FundsNotExpected {},

    #[error("ReserveBurn-Contract: No pending manager update")]
    TmpManagerStoreEmpty {},

    #[error("ReserveBurn-Contract: Cannot migrate from a different contract")]
    InvalidMigration {},
}
