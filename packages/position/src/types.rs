use serde::{Deserialize, Serialize};

/// An LP position over `[lower, upper)`, tracking owned liquidity and the
/// fee-growth-inside snapshot at its last settlement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lower: f64,
    pub upper: f64,
    pub liquidity: f64,
    /// Fee growth inside `[lower, upper)` at last settlement, per token.
    pub fg_last: [f64; 2],
}

impl Position {
    pub fn new(lower: f64, upper: f64, liquidity: f64, fg_last: [f64; 2]) -> Self {
        Self {
            lower,
            upper,
            liquidity,
            fg_last,
        }
    }
}
