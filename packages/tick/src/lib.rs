//! Tick Registry: price boundaries, net-liquidity deltas, and fee-growth
//! bookkeeping used when crossing ticks.

pub mod fee_growth;
pub mod registry;
pub mod types;

pub use fee_growth::fees_inside;
pub use registry::TickRegistry;
pub use types::Tick;
