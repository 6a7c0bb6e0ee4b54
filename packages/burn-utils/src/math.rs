use cosmwasm_std::{StdResult, Uint128, Uint256};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// A fixed rational `numerator / denominator` applied to token amounts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
pub struct Ratio {
    pub numerator: Uint128,
    pub denominator: Uint128,
}

impl Ratio {
    pub const fn new(numerator: u128, denominator: u128) -> Self {
        Ratio {
            numerator: Uint128::new(numerator),
            denominator: Uint128::new(denominator),
        }
    }

    /// `amount * numerator / denominator`, truncating.
    pub fn apply(&self, amount: Uint128) -> StdResult<Uint128> {
        portion_of_in_256(amount, self.numerator, self.denominator)
    }
}

// Multiplies before dividing. The product is held in 256 bits so it cannot
// overflow for any pair of u128 inputs; only the final quotient is narrowed.
pub fn portion_of_in_256(
    amount: Uint128,
    numerator: Uint128,
    denominator: Uint128,
) -> StdResult<Uint128> {
    let product = Uint256::from(amount).checked_mul(Uint256::from(numerator))?;
    let quotient = product.checked_div(Uint256::from(denominator))?;
    Ok(Uint128::try_from(quotient)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portion_of_in_256() {
        assert_eq!(
            portion_of_in_256(Uint128::new(1_000_000), Uint128::new(714), Uint128::new(1_000_000))
                .unwrap(),
            Uint128::new(714)
        );

        // truncates towards zero
        assert_eq!(
            portion_of_in_256(Uint128::new(999), Uint128::new(714), Uint128::new(1_000_000))
                .unwrap(),
            Uint128::zero()
        );

        // product exceeds u128 but the quotient fits
        assert_eq!(
            portion_of_in_256(Uint128::MAX, Uint128::new(714), Uint128::new(1_000))
                .unwrap(),
            Uint128::MAX.multiply_ratio(714u128, 1_000u128)
        );

        assert!(portion_of_in_256(Uint128::new(10), Uint128::new(1), Uint128::zero()).is_err());
        assert!(portion_of_in_256(Uint128::MAX, Uint128::new(2), Uint128::new(1)).is_err());
    }

    #[test]
    fn test_ratio_apply() {
        let ratio = Ratio::new(714, 1_000_000);
        let max_supply = Uint128::new(21_000_000_000_000_000_000_000_000_000_000);
        assert_eq!(
            ratio.apply(max_supply).unwrap(),
            Uint128::new(14_994_000_000_000_000_000_000_000_000)
        );
    }
}
