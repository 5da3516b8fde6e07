// Price-Update Engine: crosses ticks in order toward a target price,
// snapshotting fee growth at each crossing and accruing swap fees into the
// pool's global accumulators.
//
// A bounded while loop that repeatedly locates the next boundary, applies one
// leg of fee accrual, crosses it, and updates the running state in place.

use clamm_math::{inv_sqrt_price, sqrt_price, MAX_TICK_CROSSINGS};
use clamm_tick::TickRegistry;

use crate::types::PoolState;

/// Drive the pool from `pool.current_price` to `target_price`, crossing
/// every tick in between and accruing fees leg by leg.
///
/// Callers (the `Pool` facade) are responsible for validating
/// `target_price > 0` before calling; this function assumes a valid input.
pub fn swap_to_price(pool: &mut PoolState, registry: &mut TickRegistry, target_price: f64) {
    if target_price > pool.current_price {
        rise_to(pool, registry, target_price);
    } else if target_price < pool.current_price {
        fall_to(pool, registry, target_price);
    }
    pool.current_price = target_price;
}

fn accrual_factor(pool: &PoolState) -> f64 {
    (1.0 - pool.gov_share) * pool.fee_tier / (1.0 - pool.fee_tier)
}

fn rise_to(pool: &mut PoolState, registry: &mut TickRegistry, target_price: f64) {
    let factor = accrual_factor(pool);
    let mut crossings = 0;

    while target_price > pool.upper {
        crossings += 1;
        assert!(
            crossings <= MAX_TICK_CROSSINGS,
            "swap_to_price: exceeded MAX_TICK_CROSSINGS crossing upward, registry likely corrupt"
        );

        pool.fg[1] += factor * (sqrt_price(pool.upper) - sqrt_price(pool.current_price));

        let tick = registry.get(pool.upper);
        registry.snapshot_cross(pool.upper, pool.fg);
        pool.l += tick.delta_l;

        tracing::debug!(
            tick = pool.upper,
            delta_l = tick.delta_l,
            new_l = pool.l,
            "crossed tick rising"
        );

        pool.lower = pool.upper;
        pool.current_price = pool.upper;
        pool.upper = registry.neighbor_above(pool.upper);
    }

    pool.fg[1] += factor * (sqrt_price(target_price) - sqrt_price(pool.current_price));
}

fn fall_to(pool: &mut PoolState, registry: &mut TickRegistry, target_price: f64) {
    let factor = accrual_factor(pool);
    let mut crossings = 0;

    while target_price < pool.lower {
        crossings += 1;
        assert!(
            crossings <= MAX_TICK_CROSSINGS,
            "swap_to_price: exceeded MAX_TICK_CROSSINGS crossing downward, registry likely corrupt"
        );

        pool.fg[0] += factor * (inv_sqrt_price(pool.lower) - inv_sqrt_price(pool.current_price));

        let tick = registry.get(pool.lower);
        registry.snapshot_cross(pool.lower, pool.fg);
        pool.l -= tick.delta_l;

        tracing::debug!(
            tick = pool.lower,
            delta_l = tick.delta_l,
            new_l = pool.l,
            "crossed tick falling"
        );

        pool.upper = pool.lower;
        pool.current_price = pool.lower;
        pool.lower = registry.neighbor_below(pool.lower);
    }

    pool.fg[0] += factor * (inv_sqrt_price(target_price) - inv_sqrt_price(pool.current_price));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_within_range_accrues_fg1_only() {
        let mut pool = PoolState {
            current_price: 100.0,
            l: 1000.0,
            lower: 90.0,
            upper: 110.0,
            fg: [0.0, 0.0],
            fee_tier: 0.003,
            gov_share: 0.1,
        };
        let mut registry = TickRegistry::new();
        registry.ensure(90.0, 100.0, [0.0, 0.0]);
        registry.ensure(110.0, 100.0, [0.0, 0.0]);

        swap_to_price(&mut pool, &mut registry, 105.0);

        assert_eq!(pool.current_price, 105.0);
        assert_eq!(pool.l, 1000.0);
        assert_eq!(pool.fg[0], 0.0);
        let expected =
            0.9 * 0.003 * (sqrt_price(105.0) - sqrt_price(100.0)) / 0.997;
        assert!((pool.fg[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn swap_crossing_one_tick_upward_updates_l_and_range() {
        let mut pool = PoolState {
            current_price: 100.0,
            l: 1000.0,
            lower: 90.0,
            upper: 110.0,
            fg: [0.0, 0.0],
            fee_tier: 0.003,
            gov_share: 0.1,
        };
        let mut registry = TickRegistry::new();
        registry.ensure(90.0, 100.0, [0.0, 0.0]);
        registry.ensure(110.0, 100.0, [0.0, 0.0]);
        registry.ensure(120.0, 100.0, [0.0, 0.0]);
        registry.adjust_delta(110.0, -500.0); // position2 mints at [110,120] => -1000+500

        swap_to_price(&mut pool, &mut registry, 115.0);

        assert_eq!(pool.l, 500.0);
        assert_eq!(pool.lower, 110.0);
        assert_eq!(pool.upper, 120.0);
        assert_eq!(pool.current_price, 115.0);
    }

    #[test]
    fn swap_past_all_positions_leaves_l_zero_and_range_unbounded() {
        let mut pool = PoolState {
            current_price: 100.0,
            l: 1000.0,
            lower: 90.0,
            upper: 110.0,
            fg: [0.0, 0.0],
            fee_tier: 0.003,
            gov_share: 0.1,
        };
        let mut registry = TickRegistry::new();
        registry.ensure(90.0, 100.0, [0.0, 0.0]);
        registry.ensure(110.0, 100.0, [0.0, 0.0]);
        registry.adjust_delta(90.0, 1000.0);
        registry.adjust_delta(110.0, -1000.0);

        swap_to_price(&mut pool, &mut registry, 200.0);

        assert_eq!(pool.l, 0.0);
        assert_eq!(pool.lower, 110.0);
        assert_eq!(pool.upper, f64::INFINITY);
        assert_eq!(pool.current_price, 200.0);
    }
}
