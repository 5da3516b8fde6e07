// Pool State: the global scalars the Price-Update Engine mutates.

use serde::{Deserialize, Serialize};

/// Global pool state: current price, active liquidity, the active range
/// bounds, and the two fee-growth accumulators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolState {
    pub current_price: f64,
    /// Active liquidity: sum of liquidities of positions whose range
    /// currently contains `current_price`.
    pub l: f64,
    /// Largest registered tick `<= current_price`, or `-inf` if none.
    pub lower: f64,
    /// Smallest registered tick `> current_price`, or `+inf` if none.
    pub upper: f64,
    /// Fee growth accumulators, per token, monotonically non-decreasing.
    pub fg: [f64; 2],
    pub fee_tier: f64,
    pub gov_share: f64,
}

impl PoolState {
    pub fn new(current_price: f64, fee_tier: f64, gov_share: f64) -> Self {
        Self {
            current_price,
            l: 0.0,
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            fg: [0.0, 0.0],
            fee_tier,
            gov_share,
        }
    }
}
