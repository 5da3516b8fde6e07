//! Backtesting engine for a concentrated-liquidity AMM (Uniswap v3 style).
//!
//! A single in-process [`Pool`] simulates liquidity provision, tick
//! crossings, and fee attribution against a caller-driven price feed.

mod allocation;
mod config;
mod error;
mod events;
mod pool;

pub use clamm_math::Token;
pub use config::FeeTierPreset;
pub use error::PoolError;
pub use pool::Pool;
