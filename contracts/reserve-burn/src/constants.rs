use burn_utils::math::Ratio;
use cosmwasm_std::Uint128;

pub const DECIMALS: u8 = 18;

// 21 trillion tokens at 18 decimals.
pub const MAX_SUPPLY: Uint128 = Uint128::new(21_000_000_000_000_000_000_000_000_000_000);

// 10% of MAX_SUPPLY, held by the contract itself and destroyed on schedule.
pub const BURN_RESERVE: Uint128 = Uint128::new(2_100_000_000_000_000_000_000_000_000_000);
pub const BURN_RESERVE_CAP: Ratio = Ratio::new(10, 100);

// 30 days
pub const BURN_INTERVAL: u64 = 30 * 24 * 60 * 60;

// 35 years of 30 day intervals plus one residual round.
pub const TOTAL_ROUNDS: u64 = 421;

// 0.0714% of MAX_SUPPLY per round.
pub const BURN_RATE: Ratio = Ratio::new(714, 1_000_000);
