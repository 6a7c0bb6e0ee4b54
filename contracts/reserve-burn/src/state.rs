use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::authority::Authorizer;
use crate::constants::{BURN_INTERVAL, BURN_RESERVE_CAP, TOTAL_ROUNDS};
use crate::ContractError;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub manager: Addr,        // Owner. Rotates the burn authority and hands over management.
    pub burn_authority: Addr, // Only address allowed to trigger a scheduled burn.
}

impl Config {
    pub fn is_owner(&self, caller: &Addr) -> bool {
        self.manager.authorizes(caller)
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    Active,
    Ended,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BurnState {
    pub round: u64,                // Completed burns.
    pub last_burn_time: Timestamp, // Instantiation time until the first burn.
    pub started: bool,
    pub ended: bool, // Terminal.
}

impl BurnState {
    pub fn new(created_at: Timestamp, burn_reserve: Uint128) -> Self {
        BurnState {
            round: 0,
            last_burn_time: created_at,
            started: false,
            ended: burn_reserve.is_zero(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.ended {
            Phase::Ended
        } else if self.started {
            Phase::Active
        } else {
            Phase::NotStarted
        }
    }

    pub fn next_burn_time(&self) -> Timestamp {
        self.last_burn_time.plus_seconds(BURN_INTERVAL)
    }

    pub fn is_terminal_after(round: u64, burn_reserve: Uint128) -> bool {
        round >= TOTAL_ROUNDS || burn_reserve.is_zero()
    }
}

pub const BURN_STATE: Item<BurnState> = Item::new("burn_state");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ReserveAllocation {
    pub max_supply: Uint128,
    pub burn_reserve: Uint128, // Only ever decreases.
    pub charity_reserve: Uint128,
    pub charity_address: Addr,
    pub reserve_account: Addr, // Ledger account holding the burn reserve.
}

impl ReserveAllocation {
    pub fn new(
        max_supply: Uint128,
        burn_reserve: Uint128,
        charity_reserve: Uint128,
        charity_address: Addr,
        reserve_account: Addr,
    ) -> Result<Self, ContractError> {
        if burn_reserve > BURN_RESERVE_CAP.apply(max_supply)? {
            return Err(ContractError::ReserveAboveCap {});
        }

        Ok(ReserveAllocation {
            max_supply,
            burn_reserve,
            charity_reserve,
            charity_address,
            reserve_account,
        })
    }
}

pub const ALLOCATION: Item<ReserveAllocation> = Item::new("allocation");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BurnRecord {
    pub round: u64,
    pub amount: Uint128,
    pub timestamp: Timestamp,
}

// round -> BurnRecord
pub const BURN_HISTORY: Map<u64, BurnRecord> = Map::new("burn_history");

// this is a tmp store to store the intermediate values of manager updates.
// manager updates are 2 phase, we set it and then accept it. This is done to
// add a greater assurance of the update.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TmpManagerStore {
    pub manager: String,
}

pub const TMP_MANAGER_STORE: Item<TmpManagerStore> = Item::new("tmp_manager_store");
