// The `Pool` facade: the single entry point a backtest driver calls into,
// composing the Tick Registry, Position Book, Pool State, and Price-Update
// Engine crates.

use clamm_math::Token;
use clamm_position::PositionBook;
use clamm_swap::{swap_to_price, PoolState};
use clamm_tick::TickRegistry;

use crate::allocation::add_allocation;
use crate::config::{validate_fee_tier_pct, validate_gov_share, validate_initial_price};
use crate::error::PoolError;
use crate::events;

/// A single concentrated-liquidity pool: everything needed to simulate
/// mints, burns, and swaps against one price feed.
pub struct Pool {
    registry: TickRegistry,
    book: PositionBook,
    state: PoolState,
    silent: bool,
}

impl Pool {
    /// Construct a pool at `initial_price`, with `fee_tier_pct` a percentage
    /// in `(0, 100)` and `gov_share` a fraction in `[0, 1]`.
    pub fn new(
        initial_price: f64,
        fee_tier_pct: f64,
        gov_share: f64,
        silent: bool,
    ) -> Result<Self, PoolError> {
        let initial_price = validate_initial_price(initial_price)?;
        let fee_tier = validate_fee_tier_pct(fee_tier_pct)?;
        let gov_share = validate_gov_share(gov_share)?;

        events::emit_pool_initialized(silent, initial_price, fee_tier, gov_share);

        Ok(Self {
            registry: TickRegistry::new(),
            book: PositionBook::new(),
            state: PoolState::new(initial_price, fee_tier, gov_share),
            silent,
        })
    }

    /// Mint `l` units of liquidity at `[lower, upper)`.
    pub fn add_position_liquidity(
        &mut self,
        lower: f64,
        upper: f64,
        l: f64,
    ) -> Result<(f64, f64), PoolError> {
        let (f0, f1) = self
            .book
            .mint(&mut self.registry, &mut self.state, lower, upper, l)?;
        events::emit_liquidity_added(self.silent, lower, upper, l, f0, f1);
        Ok((f0, f1))
    }

    /// Mint a position sized by token value rather than raw liquidity,
    /// exposed at the pool boundary as `add_custom_position`.
    pub fn add_custom_position(
        &mut self,
        lower: f64,
        upper: f64,
        amount: f64,
        token: i32,
    ) -> Result<(), PoolError> {
        let token = Token::from_i32(token).ok_or(PoolError::InvalidToken { token })?;
        let (f0, f1) = self.book.mint_by_amount(
            &mut self.registry,
            &mut self.state,
            lower,
            upper,
            amount,
            token,
        )?;
        events::emit_liquidity_added(self.silent, lower, upper, amount, f0, f1);
        Ok(())
    }

    /// Spread `wealth` (in token1) across `bins` by `weights`.
    pub fn add_allocation(
        &mut self,
        wealth: f64,
        weights: &[f64],
        bins: &[f64],
    ) -> Result<(), PoolError> {
        add_allocation(&mut self.book, &mut self.registry, &mut self.state, wealth, weights, bins)
    }

    /// Remove a position entirely, discarding any fees it had accrued — fees
    /// are still settled and cleared internally, just not surfaced through
    /// this call; use `burn_liquidity` or `get_position_fees` to observe
    /// them.
    pub fn remove_position(&mut self, lower: f64, upper: f64) -> Result<(f64, f64), PoolError> {
        let liquidity = self
            .book
            .get(lower, upper)
            .ok_or(PoolError::NoSuchPosition { lower, upper })?
            .liquidity;
        let (t0, t1, f0, f1) = self
            .book
            .burn(&mut self.registry, &mut self.state, lower, upper, liquidity)?;
        events::emit_liquidity_removed(self.silent, lower, upper, liquidity, t0, t1, f0, f1);
        Ok((t0, t1))
    }

    /// Burn `l` units of liquidity from `[lower, upper)`.
    pub fn burn_liquidity(
        &mut self,
        lower: f64,
        upper: f64,
        l: f64,
    ) -> Result<(f64, f64, f64, f64), PoolError> {
        let (t0, t1, f0, f1) = self
            .book
            .burn(&mut self.registry, &mut self.state, lower, upper, l)?;
        events::emit_liquidity_removed(self.silent, lower, upper, l, t0, t1, f0, f1);
        Ok((t0, t1, f0, f1))
    }

    /// Drive the pool's price to `p`, crossing ticks along the way.
    pub fn swap_price(&mut self, p: f64) -> Result<bool, PoolError> {
        if !(p > 0.0) {
            return Err(PoolError::InvalidParameter {
                what: "swap target price must be positive",
            });
        }
        let from_price = self.state.current_price;
        swap_to_price(&mut self.state, &mut self.registry, p);
        events::emit_swap(self.silent, from_price, p, self.state.l);
        Ok(true)
    }

    /// Value of a position in token1, optionally settling its uncollected
    /// fees first.
    pub fn get_position_value(
        &mut self,
        lower: f64,
        upper: f64,
        add_fees: bool,
    ) -> Result<f64, PoolError> {
        Ok(self
            .book
            .get_position_value(&self.registry, &self.state, lower, upper, add_fees)?)
    }

    /// Value of the entire position book in token1, summed across every
    /// live position.
    pub fn get_allocation_value(&mut self, add_fees: bool) -> f64 {
        self.book.get_allocation_value(&self.registry, &self.state, add_fees)
    }

    /// Token composition of the entire position book.
    pub fn get_allocation_comp(&self) -> (f64, f64) {
        self.book.get_allocation_comp(&self.state)
    }

    /// Settle and return the fee amount owed on `token` for `[lower, upper)`.
    pub fn get_position_fees(
        &mut self,
        lower: f64,
        upper: f64,
        token: i32,
    ) -> Result<f64, PoolError> {
        let token_tag = Token::from_i32(token).ok_or(PoolError::InvalidToken { token })?;
        let amount =
            self.book
                .get_position_fees(&self.registry, &self.state, lower, upper, token_tag)?;
        events::emit_fees_collected(self.silent, lower, upper, token, amount);
        Ok(amount)
    }

    // ---- read-only accessors used by tests and by callers that want the
    // raw pool scalars without an owned copy ----

    pub fn current_price(&self) -> f64 {
        self.state.current_price
    }

    pub fn active_liquidity(&self) -> f64 {
        self.state.l
    }

    pub fn active_lower(&self) -> f64 {
        self.state.lower
    }

    pub fn active_upper(&self) -> f64 {
        self.state.upper
    }

    pub fn fee_growth_global(&self) -> [f64; 2] {
        self.state.fg
    }
}
