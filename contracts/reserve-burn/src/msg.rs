use crate::state::{BurnRecord, BurnState, Config, Phase, ReserveAllocation, TmpManagerStore};
use burn_utils::math::Ratio;
use cosmwasm_std::{Binary, Timestamp, Uint128};
use cw20::{Cw20Coin, Expiration};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub burn_authority: String,
    pub charity: Cw20Coin, // Disbursed once, here.
    // Together with the charity amount and the burn reserve this must add up to max supply.
    pub initial_balances: Vec<Cw20Coin>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    // Burns one round from the reserve. Burn authority only.
    ScheduledBurn {},
    SetBurnAuthority {
        authority: String,
    },
    SetManager {
        manager: String,
    },
    AcceptManager {},

    // cw20
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    BurnState {},
    Round {},
    LastBurnTime {},
    Status {},
    BurnReserve {},
    Allocation {},
    Constants {},
    BurnHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    TmpManagerStore {},

    // cw20
    Balance {
        address: String,
    },
    TokenInfo {},
    Allowance {
        owner: String,
        spender: String,
    },
    AllAllowances {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct QueryConfigResponse {
    pub config: Config,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct QueryBurnStateResponse {
    pub state: BurnState,
    pub phase: Phase,
    pub burn_reserve: Uint128,
    pub next_burn_time: Timestamp,
    pub next_burn_amount: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RoundResponse {
    pub round: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct LastBurnTimeResponse {
    pub last_burn_time: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct StatusResponse {
    pub started: bool,
    pub ended: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BurnReserveResponse {
    pub burn_reserve: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct QueryAllocationResponse {
    pub allocation: ReserveAllocation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConstantsResponse {
    pub max_supply: Uint128,
    pub burn_interval: u64, // seconds
    pub total_rounds: u64,
    pub burn_rate: Ratio, // of max supply, per round
    pub amount_per_round: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BurnHistoryResponse {
    pub burns: Vec<BurnRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TmpManagerStoreResponse {
    pub tmp_manager_store: Option<TmpManagerStore>,
}
