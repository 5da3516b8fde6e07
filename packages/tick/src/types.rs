use serde::{Deserialize, Serialize};

/// A registered price boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Net liquidity entering the active set as price rises through this tick.
    pub delta_l: f64,
    /// Fee growth outside this tick, per token.
    pub fo: [f64; 2],
}

impl Tick {
    pub fn new(delta_l: f64, fo: [f64; 2]) -> Self {
        Self { delta_l, fo }
    }
}
