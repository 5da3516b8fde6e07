// Position Book: mint/burn and the mint-by-amount convenience layer over a
// keyed collection of f64-valued positions that also drives the Tick
// Registry and Pool State as a side effect of minting/burning.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use clamm_math::{liquidity_equivalent, mint_liquidity_for_value, Token};
use clamm_swap::PoolState;
use clamm_tick::{fees_inside, TickRegistry};

use crate::error::PositionError;
use crate::fees::settle;
use crate::types::Position;

type Key = (OrderedFloat<f64>, OrderedFloat<f64>);

fn key(lower: f64, upper: f64) -> Key {
    (OrderedFloat(lower), OrderedFloat(upper))
}

#[derive(Debug, Clone, Default)]
pub struct PositionBook {
    positions: BTreeMap<Key, Position>,
}

impl PositionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, lower: f64, upper: f64) -> Option<&Position> {
        self.positions.get(&key(lower, upper))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Mint `l_add` units of liquidity at `[lower, upper)`.
    pub fn mint(
        &mut self,
        registry: &mut TickRegistry,
        pool: &mut PoolState,
        lower: f64,
        upper: f64,
        l_add: f64,
    ) -> Result<(f64, f64), PositionError> {
        if !(lower < upper) {
            return Err(PositionError::InvalidRange { lower, upper });
        }
        if !(l_add > 0.0) {
            return Err(PositionError::InvalidParameter {
                what: "liquidity to mint must be positive",
            });
        }

        registry.ensure(lower, pool.current_price, pool.fg);
        registry.ensure(upper, pool.current_price, pool.fg);
        registry.adjust_delta(lower, l_add);
        registry.adjust_delta(upper, -l_add);

        if lower <= pool.current_price && pool.current_price < upper {
            pool.l += l_add;
            if upper < pool.upper {
                pool.upper = upper;
            }
            if lower > pool.lower {
                pool.lower = lower;
            }
        }

        let k = key(lower, upper);
        let collected = match self.positions.get_mut(&k) {
            Some(existing) => {
                let collected = settle(existing, registry, pool.current_price, pool.fg);
                existing.liquidity += l_add;
                collected
            }
            None => {
                let fr = fees_inside(registry, lower, upper, pool.current_price, pool.fg);
                self.positions
                    .insert(k, Position::new(lower, upper, l_add, fr));
                (0.0, 0.0)
            }
        };

        tracing::debug!(lower, upper, l_add, "liquidity added");
        Ok(collected)
    }

    /// Convert `amount` of `token` into a liquidity quantity and mint it.
    pub fn mint_by_amount(
        &mut self,
        registry: &mut TickRegistry,
        pool: &mut PoolState,
        lower: f64,
        upper: f64,
        amount: f64,
        token: Token,
    ) -> Result<(f64, f64), PositionError> {
        if !(lower < upper) {
            return Err(PositionError::InvalidRange { lower, upper });
        }

        let l = mint_liquidity_for_value(lower, upper, pool.current_price, amount, token)
            .ok_or_else(|| {
                let side = if pool.current_price < lower {
                    "below"
                } else {
                    "above"
                };
                PositionError::InvalidMintSide { side, token }
            })?;

        self.mint(registry, pool, lower, upper, l)
    }

    /// Burn `l_sub` units of liquidity from `[lower, upper)`.
    ///
    /// Returns `(token0_out, token1_out, f0, f1)`.
    pub fn burn(
        &mut self,
        registry: &mut TickRegistry,
        pool: &mut PoolState,
        lower: f64,
        upper: f64,
        l_sub: f64,
    ) -> Result<(f64, f64, f64, f64), PositionError> {
        let k = key(lower, upper);
        let position = self
            .positions
            .get_mut(&k)
            .ok_or(PositionError::NoSuchPosition { lower, upper })?;

        let (f0, f1) = settle(position, registry, pool.current_price, pool.fg);
        let in_range = lower <= pool.current_price && pool.current_price < upper;

        let removed_l = if l_sub >= position.liquidity {
            let full = position.liquidity;
            self.positions.remove(&k);
            registry.adjust_delta(lower, -full);
            registry.adjust_delta(upper, full);
            full
        } else {
            position.liquidity -= l_sub;
            registry.adjust_delta(lower, -l_sub);
            registry.adjust_delta(upper, l_sub);
            l_sub
        };

        if in_range {
            pool.l -= removed_l;
        }

        let (t0, t1) = liquidity_equivalent(removed_l, lower, upper, pool.current_price);

        tracing::debug!(lower, upper, removed_l, "liquidity removed");
        Ok((t0, t1, f0, f1))
    }

    /// Settle and return the fee amount owed on `token` for `[lower, upper)`
    /// Read-and-clear: each call returns only the fees accrued since the
    /// previous settlement.
    pub fn get_position_fees(
        &mut self,
        registry: &TickRegistry,
        pool: &PoolState,
        lower: f64,
        upper: f64,
        token: Token,
    ) -> Result<f64, PositionError> {
        let position = self
            .positions
            .get_mut(&key(lower, upper))
            .ok_or(PositionError::NoSuchPosition { lower, upper })?;
        let (f0, f1) = settle(position, registry, pool.current_price, pool.fg);
        tracing::debug!(lower, upper, f0, f1, "fees collected");
        Ok(match token {
            Token::Zero => f0,
            Token::One => f1,
        })
    }

    /// Value of a position in token1, optionally settling and adding its
    /// uncollected fees.
    pub fn get_position_value(
        &mut self,
        registry: &TickRegistry,
        pool: &PoolState,
        lower: f64,
        upper: f64,
        add_fees: bool,
    ) -> Result<f64, PositionError> {
        let position = self
            .positions
            .get_mut(&key(lower, upper))
            .ok_or(PositionError::NoSuchPosition { lower, upper })?;

        let (t0, t1) = liquidity_equivalent(position.liquidity, lower, upper, pool.current_price);
        let mut value = t1 + t0 * pool.current_price;

        if add_fees {
            let (f0, f1) = settle(position, registry, pool.current_price, pool.fg);
            value += f1 + f0 * pool.current_price;
        }

        Ok(value)
    }

    /// Sum of `get_position_value` across every live position in the book.
    pub fn get_allocation_value(
        &mut self,
        registry: &TickRegistry,
        pool: &PoolState,
        add_fees: bool,
    ) -> f64 {
        self.positions
            .values_mut()
            .map(|position| {
                let (t0, t1) =
                    liquidity_equivalent(position.liquidity, position.lower, position.upper, pool.current_price);
                let mut value = t1 + t0 * pool.current_price;
                if add_fees {
                    let (f0, f1) = settle(position, registry, pool.current_price, pool.fg);
                    value += f1 + f0 * pool.current_price;
                }
                value
            })
            .sum()
    }

    /// Sum of `liquidity_equivalent` token amounts across every live
    /// position in the book.
    pub fn get_allocation_comp(&self, pool: &PoolState) -> (f64, f64) {
        self.positions.values().fold((0.0, 0.0), |(acc0, acc1), position| {
            let (t0, t1) =
                liquidity_equivalent(position.liquidity, position.lower, position.upper, pool.current_price);
            (acc0 + t0, acc1 + t1)
        })
    }
}
