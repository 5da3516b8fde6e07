//! Pool State and the Price-Update Engine: crossing ticks toward a target
//! price and accruing fees into the global accumulators.

pub mod engine;
pub mod types;

pub use engine::swap_to_price;
pub use types::PoolState;
