// Pool configuration and validation: centralizes the knobs a `Pool` is
// constructed with, the same way `clamm_math::constants` centralizes its
// fixed-point-free math bounds.

use clamm_math::{fee_tier_presets, FEE_TIER_BOUNDS, GOV_SHARE_BOUNDS};

use crate::error::PoolError;

/// Conventional Uniswap v3 fee tiers, as fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeeTierPreset {
    /// 0.05%, for low-volatility pairs.
    Low,
    /// 0.30%, the default tier for most pairs.
    Medium,
    /// 1.00%, for exotic/high-volatility pairs.
    High,
}

impl FeeTierPreset {
    pub fn as_fraction(self) -> f64 {
        match self {
            FeeTierPreset::Low => fee_tier_presets::LOW,
            FeeTierPreset::Medium => fee_tier_presets::MEDIUM,
            FeeTierPreset::High => fee_tier_presets::HIGH,
        }
    }
}

/// Validate a fee tier given as a percentage in `(0, 100)`, returning the
/// fraction the rest of the engine works with.
pub fn validate_fee_tier_pct(fee_tier_pct: f64) -> Result<f64, PoolError> {
    let fraction = fee_tier_pct / 100.0;
    if fraction > FEE_TIER_BOUNDS.0 && fraction < FEE_TIER_BOUNDS.1 {
        Ok(fraction)
    } else {
        Err(PoolError::InvalidParameter {
            what: "fee_tier_pct must lie in (0, 100)",
        })
    }
}

pub fn validate_gov_share(gov_share: f64) -> Result<f64, PoolError> {
    if gov_share >= GOV_SHARE_BOUNDS.0 && gov_share <= GOV_SHARE_BOUNDS.1 {
        Ok(gov_share)
    } else {
        Err(PoolError::InvalidParameter {
            what: "gov_share must lie in [0, 1]",
        })
    }
}

pub fn validate_initial_price(initial_price: f64) -> Result<f64, PoolError> {
    if initial_price > 0.0 {
        Ok(initial_price)
    } else {
        Err(PoolError::InvalidParameter {
            what: "initial_price must be positive",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_tier_pct_out_of_bounds_is_rejected() {
        assert!(validate_fee_tier_pct(0.0).is_err());
        assert!(validate_fee_tier_pct(100.0).is_err());
        assert!(validate_fee_tier_pct(150.0).is_err());
    }

    #[test]
    fn fee_tier_pct_converts_to_fraction() {
        assert!((validate_fee_tier_pct(0.3).unwrap() - 0.003).abs() < 1e-12);
    }

    #[test]
    fn gov_share_bounds_are_inclusive() {
        assert!(validate_gov_share(0.0).is_ok());
        assert!(validate_gov_share(1.0).is_ok());
        assert!(validate_gov_share(-0.1).is_err());
        assert!(validate_gov_share(1.1).is_err());
    }
}
