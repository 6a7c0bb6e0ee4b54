#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, to_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order, Response, StdResult,
    Uint128,
};

use crate::constants::{
    BURN_INTERVAL, BURN_RATE, BURN_RESERVE, DECIMALS, MAX_SUPPLY, TOTAL_ROUNDS,
};
use crate::error::ContractError;
use crate::helpers::{total_distribution, validate_address};
use crate::authority::Authorizer;
use crate::ledger::{Cw20Ledger, ReserveLedger};
use crate::msg::{
    BurnHistoryResponse, BurnReserveResponse, ConstantsResponse, ExecuteMsg, InstantiateMsg,
    LastBurnTimeResponse, MigrateMsg, QueryAllocationResponse, QueryBurnStateResponse,
    QueryConfigResponse, QueryMsg, RoundResponse, StatusResponse, TmpManagerStoreResponse,
};
use crate::scheduler::{attempt_burn, burn_amount_for_round, set_burn_authority};
use crate::state::{
    BurnRecord, BurnState, Config, ReserveAllocation, TmpManagerStore, ALLOCATION, BURN_HISTORY,
    BURN_STATE, CONFIG, TMP_MANAGER_STORE,
};
use burn_utils::constants::{
    EVENT_AUTHORITY_KEY_NEXT, EVENT_AUTHORITY_KEY_PREVIOUS, EVENT_AUTHORITY_TYPE,
    EVENT_BURN_KEY_AMOUNT, EVENT_BURN_KEY_ROUND, EVENT_BURN_KEY_TIMESTAMP,
    EVENT_BURN_KEY_TOTAL_SUPPLY, EVENT_BURN_TYPE,
};
use cw2::{get_contract_version, set_contract_version};
use cw20::Cw20Coin;
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_send_from,
    execute_transfer_from, query_allowance,
};
use cw20_base::contract::{
    execute_send, execute_transfer, instantiate as cw20_instantiate, query_balance,
    query_token_info,
};
use cw20_base::enumerable::{query_all_accounts, query_all_allowances};
use cw20_base::msg::InstantiateMsg as Cw20InstantiateMsg;
use cw_storage_plus::Bound;

const CONTRACT_NAME: &str = "crates.io:reserve-burn";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_HISTORY_LIMIT: u32 = 10;
const MAX_HISTORY_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let burn_authority = validate_address(deps.api, &msg.burn_authority)?;
    let charity_address = validate_address(deps.api, &msg.charity.address)?;
    let reserve_account = env.contract.address.clone();

    let allocation = ReserveAllocation::new(
        MAX_SUPPLY,
        BURN_RESERVE,
        msg.charity.amount,
        charity_address,
        reserve_account.clone(),
    )?;

    let mut accounts = msg.initial_balances;
    accounts.push(Cw20Coin {
        address: allocation.charity_address.to_string(),
        amount: allocation.charity_reserve,
    });
    accounts.push(Cw20Coin {
        address: reserve_account.to_string(),
        amount: allocation.burn_reserve,
    });

    let distributed = total_distribution(&accounts)?;
    if distributed != allocation.max_supply {
        return Err(ContractError::SupplyMismatch {
            expected: allocation.max_supply,
            actual: distributed,
        });
    }

    // Fixed supply: no minter.
    cw20_instantiate(
        deps.branch(),
        env.clone(),
        info.clone(),
        Cw20InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            decimals: DECIMALS,
            initial_balances: accounts,
            mint: None,
            marketing: None,
        },
    )?;

    CONFIG.save(
        deps.storage,
        &Config {
            manager: info.sender,
            burn_authority,
        },
    )?;
    BURN_STATE.save(
        deps.storage,
        &BurnState::new(env.block.time, allocation.burn_reserve),
    )?;
    ALLOCATION.save(deps.storage, &allocation)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attributes(vec![
        attr("method", "instantiate"),
        attr("burn_reserve", allocation.burn_reserve.to_string()),
        attr("charity_reserve", allocation.charity_reserve.to_string()),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let version = get_contract_version(deps.storage)?;
    if version.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {});
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new().add_attributes(vec![
        attr("method", "migrate"),
        attr("from_version", version.version),
        attr("to_version", CONTRACT_VERSION),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // A scheduled burn checks its caller before its funds.
    if !matches!(msg, ExecuteMsg::ScheduledBurn {}) {
        reject_funds(&info)?;
    }

    match msg {
        ExecuteMsg::ScheduledBurn {} => execute_scheduled_burn(deps, env, info),
        ExecuteMsg::SetBurnAuthority { authority } => {
            execute_set_burn_authority(deps, info, authority)
        }
        ExecuteMsg::SetManager { manager } => set_manager(deps, info, manager),
        ExecuteMsg::AcceptManager {} => accept_manager(deps, info),

        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(execute_send(deps, env, info, contract, amount, msg)?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => Ok(execute_send_from(
            deps, env, info, owner, contract, amount, msg,
        )?),
    }
}

// Destroys one round worth of tokens from the reserve held by this contract.
pub fn execute_scheduled_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = BURN_STATE.load(deps.storage)?;
    let mut allocation = ALLOCATION.load(deps.storage)?;

    if !config.burn_authority.authorizes(&info.sender) {
        return Err(ContractError::Unauthorized {});
    }
    reject_funds(&info)?;

    let (record, total_supply) = {
        let mut ledger = Cw20Ledger::new(deps.storage);
        let record = attempt_burn(
            &mut state,
            &mut allocation,
            &mut ledger,
            &config.burn_authority,
            &info.sender,
            env.block.time,
        )?;
        (record, ledger.total_supply()?)
    };

    BURN_STATE.save(deps.storage, &state)?;
    ALLOCATION.save(deps.storage, &allocation)?;
    BURN_HISTORY.save(deps.storage, record.round, &record)?;

    Ok(Response::new()
        .add_attributes(vec![
            attr("action", "scheduled_burn"),
            attr("burn_reserve", allocation.burn_reserve.to_string()),
            attr("ended", state.ended.to_string()),
        ])
        .add_event(
            Event::new(EVENT_BURN_TYPE)
                .add_attribute(EVENT_BURN_KEY_AMOUNT, record.amount.to_string())
                .add_attribute(
                    EVENT_BURN_KEY_TIMESTAMP,
                    record.timestamp.seconds().to_string(),
                )
                .add_attribute(EVENT_BURN_KEY_ROUND, record.round.to_string())
                .add_attribute(EVENT_BURN_KEY_TOTAL_SUPPLY, total_supply.to_string()),
        ))
}

fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::FundsNotExpected {});
    }
    Ok(())
}

pub fn execute_set_burn_authority(
    deps: DepsMut,
    info: MessageInfo,
    authority: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    let change = set_burn_authority(deps.api, &mut config, &info.sender, &authority)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_burn_authority")
        .add_event(
            Event::new(EVENT_AUTHORITY_TYPE)
                .add_attribute(EVENT_AUTHORITY_KEY_PREVIOUS, change.previous.to_string())
                .add_attribute(EVENT_AUTHORITY_KEY_NEXT, change.next.to_string()),
        ))
}

pub fn set_manager(
    deps: DepsMut,
    info: MessageInfo,
    manager: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.is_owner(&info.sender) {
        return Err(ContractError::Unauthorized {});
    }

    let manager = validate_address(deps.api, &manager)?;
    TMP_MANAGER_STORE.save(
        deps.storage,
        &TmpManagerStore {
            manager: manager.to_string(),
        },
    )?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "set_manager"),
        attr("pending_manager", manager.to_string()),
    ]))
}

pub fn accept_manager(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let tmp_manager_store = TMP_MANAGER_STORE
        .may_load(deps.storage)?
        .ok_or(ContractError::TmpManagerStoreEmpty {})?;

    let manager = deps.api.addr_validate(tmp_manager_store.manager.as_str())?;
    if info.sender != manager {
        return Err(ContractError::Unauthorized {});
    }

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.manager = manager.clone();
        Ok(config)
    })?;
    TMP_MANAGER_STORE.remove(deps.storage);

    Ok(Response::new().add_attributes(vec![
        attr("action", "accept_manager"),
        attr("manager", manager.to_string()),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::BurnState {} => to_binary(&query_burn_state(deps)?),
        QueryMsg::Round {} => to_binary(&RoundResponse {
            round: BURN_STATE.load(deps.storage)?.round,
        }),
        QueryMsg::LastBurnTime {} => to_binary(&LastBurnTimeResponse {
            last_burn_time: BURN_STATE.load(deps.storage)?.last_burn_time,
        }),
        QueryMsg::Status {} => to_binary(&query_status(deps)?),
        QueryMsg::BurnReserve {} => to_binary(&BurnReserveResponse {
            burn_reserve: ALLOCATION.load(deps.storage)?.burn_reserve,
        }),
        QueryMsg::Allocation {} => to_binary(&QueryAllocationResponse {
            allocation: ALLOCATION.load(deps.storage)?,
        }),
        QueryMsg::Constants {} => to_binary(&query_constants()?),
        QueryMsg::BurnHistory { start_after, limit } => {
            to_binary(&query_burn_history(deps, start_after, limit)?)
        }
        QueryMsg::TmpManagerStore {} => to_binary(&TmpManagerStoreResponse {
            tmp_manager_store: TMP_MANAGER_STORE.may_load(deps.storage)?,
        }),

        QueryMsg::Balance { address } => to_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::AllAllowances {
            owner,
            start_after,
            limit,
        } => to_binary(&query_all_allowances(deps, owner, start_after, limit)?),
        QueryMsg::AllAccounts { start_after, limit } => {
            to_binary(&query_all_accounts(deps, start_after, limit)?)
        }
    }
}

pub fn query_config(deps: Deps) -> StdResult<QueryConfigResponse> {
    let config: Config = CONFIG.load(deps.storage)?;
    Ok(QueryConfigResponse { config })
}

pub fn query_burn_state(deps: Deps) -> StdResult<QueryBurnStateResponse> {
    let state = BURN_STATE.load(deps.storage)?;
    let allocation = ALLOCATION.load(deps.storage)?;
    // Zero once the schedule has ended.
    let next_burn_amount = if state.ended {
        Uint128::zero()
    } else {
        burn_amount_for_round(allocation.max_supply, allocation.burn_reserve)?
    };

    Ok(QueryBurnStateResponse {
        phase: state.phase(),
        next_burn_time: state.next_burn_time(),
        next_burn_amount,
        burn_reserve: allocation.burn_reserve,
        state,
    })
}

pub fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let state = BURN_STATE.load(deps.storage)?;
    Ok(StatusResponse {
        started: state.started,
        ended: state.ended,
    })
}

pub fn query_constants() -> StdResult<ConstantsResponse> {
    Ok(ConstantsResponse {
        max_supply: MAX_SUPPLY,
        burn_interval: BURN_INTERVAL,
        total_rounds: TOTAL_ROUNDS,
        burn_rate: BURN_RATE,
        amount_per_round: BURN_RATE.apply(MAX_SUPPLY)?,
    })
}

pub fn query_burn_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<BurnHistoryResponse> {
    let limit = limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .min(MAX_HISTORY_LIMIT) as usize;
    let start = start_after.map(|round| Bound::exclusive(round));

    let burns = BURN_HISTORY
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<Vec<BurnRecord>>>()?;

    Ok(BurnHistoryResponse { burns })
}
