pub mod authority;
pub mod constants;
pub mod contract;
mod error;
mod helpers;
pub mod ledger;
pub mod msg;
pub mod scheduler;
pub mod state;

#[cfg(test)]
mod testing;

pub use crate::error::ContractError;
