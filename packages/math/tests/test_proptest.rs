// Property-based tests for the f64 liquidity/sqrt-price math.
// Run with: cargo test -p clamm-math --test test_proptest

use clamm_math::{liquidity_equivalent, mint_liquidity_for_value, sqrt_price, Token};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// sqrt_price is monotonically increasing in price.
    #[test]
    fn prop_sqrt_price_monotonic(a in 1.0f64..1_000_000.0, b in 1.0f64..1_000_000.0) {
        if a < b {
            prop_assert!(sqrt_price(a) < sqrt_price(b));
        }
    }

    /// liquidity_equivalent never returns a negative amount.
    #[test]
    fn prop_liquidity_equivalent_non_negative(
        l in 1.0f64..1_000_000.0,
        lower in 1.0f64..500.0,
        width in 1.0f64..500.0,
        current in 1.0f64..1_500.0,
    ) {
        let upper = lower + width;
        let (t0, t1) = liquidity_equivalent(l, lower, upper, current);
        prop_assert!(t0 >= 0.0);
        prop_assert!(t1 >= 0.0);
    }

    /// Above the range, liquidity_equivalent holds only token1; below, only token0.
    #[test]
    fn prop_liquidity_equivalent_single_sided_outside_range(
        l in 1.0f64..1_000_000.0,
        lower in 1.0f64..500.0,
        width in 1.0f64..500.0,
    ) {
        let upper = lower + width;
        let (below_t0, below_t1) = liquidity_equivalent(l, lower, upper, lower / 2.0);
        prop_assert!(below_t0 > 0.0);
        prop_assert_eq!(below_t1, 0.0);

        let (above_t0, above_t1) = liquidity_equivalent(l, lower, upper, upper * 2.0);
        prop_assert_eq!(above_t0, 0.0);
        prop_assert!(above_t1 > 0.0);
    }

    /// mint_liquidity_for_value inverts liquidity_equivalent's value within tolerance.
    #[test]
    fn prop_mint_by_value_round_trip(
        lower in 10.0f64..500.0,
        width in 10.0f64..500.0,
        amount in 1.0f64..1_000_000.0,
    ) {
        let upper = lower + width;
        let current = lower + width / 2.0;
        let l = mint_liquidity_for_value(lower, upper, current, amount, Token::One).unwrap();
        let (t0, t1) = liquidity_equivalent(l, lower, upper, current);
        let value = t1 + t0 * current;
        prop_assert!((value - amount).abs() / amount < 1e-6);
    }

    /// Liquidity scales amounts linearly.
    #[test]
    fn prop_liquidity_equivalent_scales_linearly(
        l in 1.0f64..1_000.0,
        lower in 10.0f64..500.0,
        width in 10.0f64..500.0,
        current in 10.0f64..1_000.0,
    ) {
        let upper = lower + width;
        let (t0, t1) = liquidity_equivalent(l, lower, upper, current);
        let (t0_double, t1_double) = liquidity_equivalent(l * 2.0, lower, upper, current);
        prop_assert!((t0_double - 2.0 * t0).abs() < 1e-6 * t0.max(1.0));
        prop_assert!((t1_double - 2.0 * t1).abs() < 1e-6 * t1.max(1.0));
    }
}
