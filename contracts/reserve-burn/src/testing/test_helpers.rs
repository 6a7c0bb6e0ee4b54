use crate::constants::{BURN_RESERVE, MAX_SUPPLY};
use crate::contract::{execute, instantiate, query};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::ContractError;
use cosmwasm_std::testing::{mock_env, mock_info, MockApi, MockQuerier, MockStorage};
use cosmwasm_std::{from_binary, Env, Event, MessageInfo, OwnedDeps, Response, Uint128};
use cw20::{BalanceResponse, Cw20Coin};
use serde::de::DeserializeOwned;

pub const CREATOR: &str = "creator";
pub const BURN_AUTHORITY: &str = "burn_authority";
pub const CHARITY: &str = "charity";
pub const TREASURY: &str = "treasury";

// 5% of max supply.
pub const CHARITY_RESERVE: Uint128 = Uint128::new(1_050_000_000_000_000_000_000_000_000_000);
pub const NOMINAL_BURN: Uint128 = Uint128::new(14_994_000_000_000_000_000_000_000_000);

pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

pub fn treasury_balance() -> Uint128 {
    MAX_SUPPLY - BURN_RESERVE - CHARITY_RESERVE
}

pub fn default_instantiate_msg() -> InstantiateMsg {
    InstantiateMsg {
        name: "Reserve Token".to_string(),
        symbol: "RSVT".to_string(),
        burn_authority: BURN_AUTHORITY.to_string(),
        charity: Cw20Coin {
            address: CHARITY.to_string(),
            amount: CHARITY_RESERVE,
        },
        initial_balances: vec![Cw20Coin {
            address: TREASURY.to_string(),
            amount: treasury_balance(),
        }],
    }
}

pub fn instantiate_contract(deps: &mut MockDeps, info: &MessageInfo, env: &Env) -> Response {
    instantiate(
        deps.as_mut(),
        env.clone(),
        info.clone(),
        default_instantiate_msg(),
    )
    .unwrap()
}

// mock_env shifted forward by `seconds`.
pub fn env_after(seconds: u64) -> Env {
    let mut env = mock_env();
    env.block.time = env.block.time.plus_seconds(seconds);
    env
}

pub fn scheduled_burn(deps: &mut MockDeps, sender: &str, env: Env) -> Result<Response, ContractError> {
    execute(
        deps.as_mut(),
        env,
        mock_info(sender, &[]),
        ExecuteMsg::ScheduledBurn {},
    )
}

pub fn query_as<T: DeserializeOwned>(deps: &MockDeps, msg: QueryMsg) -> T {
    from_binary(&query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap()
}

pub fn balance_of(deps: &MockDeps, address: &str) -> Uint128 {
    let res: BalanceResponse = query_as(
        deps,
        QueryMsg::Balance {
            address: address.to_string(),
        },
    );
    res.balance
}

pub fn find_event<'a>(res: &'a Response, ty: &str) -> Option<&'a Event> {
    res.events.iter().find(|event| event.ty == ty)
}

pub fn event_value(event: &Event, key: &str) -> Option<String> {
    event
        .attributes
        .iter()
        .find(|attribute| attribute.key == key)
        .map(|attribute| attribute.value.clone())
}
