// Allocation Helper: spreads a total wealth across ascending price buckets,
// converting each bucket's share into whichever token the current price
// makes available before minting.

use clamm_math::Token;
use clamm_position::PositionBook;
use clamm_swap::PoolState;
use clamm_tick::TickRegistry;

use crate::error::PoolError;

pub fn add_allocation(
    book: &mut PositionBook,
    registry: &mut TickRegistry,
    pool: &mut PoolState,
    wealth: f64,
    weights: &[f64],
    bins: &[f64],
) -> Result<(), PoolError> {
    if weights.len() + 1 != bins.len() {
        return Err(PoolError::ShapeMismatch {
            weights: weights.len(),
            bins: bins.len(),
        });
    }

    for (i, weight) in weights.iter().enumerate() {
        let lower = bins[i];
        let upper = bins[i + 1];
        let (amount, token) = if lower > pool.current_price {
            (wealth * weight / pool.current_price, Token::Zero)
        } else {
            (wealth * weight, Token::One)
        };
        book.mint_by_amount(registry, pool, lower, upper, amount, token)?;
    }

    Ok(())
}
