// Liquidity <-> token-amount conversions.

use crate::sqrt_price::{inv_sqrt_price, sqrt_price};
use crate::token::Token;

/// Token amounts `(token0, token1)` a range currently holds for liquidity `l`,
/// split across the three price-relative-to-range branches.
pub fn liquidity_equivalent(l: f64, lower: f64, upper: f64, current: f64) -> (f64, f64) {
    if current >= upper {
        (0.0, l * (sqrt_price(upper) - sqrt_price(lower)))
    } else if current <= lower {
        (l * (inv_sqrt_price(lower) - inv_sqrt_price(upper)), 0.0)
    } else {
        (
            l * (inv_sqrt_price(current) - inv_sqrt_price(upper)),
            l * (sqrt_price(current) - sqrt_price(lower)),
        )
    }
}

/// Liquidity that `amount0` units of token0 buys across `[lower, upper]`,
/// assuming the range is entirely above the current price.
pub fn liquidity_for_amount0(amount0: f64, lower: f64, upper: f64) -> f64 {
    amount0 / (inv_sqrt_price(lower) - inv_sqrt_price(upper))
}

/// Liquidity that `amount1` units of token1 buys across `[lower, upper]`,
/// assuming the range is entirely below the current price.
pub fn liquidity_for_amount1(amount1: f64, lower: f64, upper: f64) -> f64 {
    amount1 / (sqrt_price(upper) - sqrt_price(lower))
}

/// Liquidity that values a freshly-minted `[lower, upper]` position at
/// `amount` units of `token`, at the given current price.
///
/// Returns `None` when the requested token is on the wrong side of the range
/// (price strictly outside `[lower, upper]` and `token` is the one that
/// can't be supplied alone) — callers map that to `InvalidMintSide`.
pub fn mint_liquidity_for_value(
    lower: f64,
    upper: f64,
    current: f64,
    amount: f64,
    token: Token,
) -> Option<f64> {
    if current < lower {
        match token {
            Token::Zero => Some(liquidity_for_amount0(amount, lower, upper)),
            Token::One => None,
        }
    } else if current > upper {
        match token {
            Token::One => Some(liquidity_for_amount1(amount, lower, upper)),
            Token::Zero => None,
        }
    } else {
        let sqrt_cur = sqrt_price(current);
        let sqrt_lo = sqrt_price(lower);
        let inv_sqrt_cur = inv_sqrt_price(current);
        let inv_sqrt_up = inv_sqrt_price(upper);
        let denom = match token {
            // value = token0 + token1 / current
            Token::Zero => (inv_sqrt_cur - inv_sqrt_up) + (sqrt_cur - sqrt_lo) / current,
            // value = token1 + token0 * current
            Token::One => (sqrt_cur - sqrt_lo) + current * (inv_sqrt_cur - inv_sqrt_up),
        };
        if denom <= 0.0 {
            None
        } else {
            Some(amount / denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liquidity_equivalent_below_range_is_token0_only() {
        let (t0, t1) = liquidity_equivalent(1000.0, 90.0, 110.0, 80.0);
        assert!(t0 > 0.0);
        assert_eq!(t1, 0.0);
    }

    #[test]
    fn liquidity_equivalent_above_range_is_token1_only() {
        let (t0, t1) = liquidity_equivalent(1000.0, 90.0, 110.0, 120.0);
        assert_eq!(t0, 0.0);
        assert!(t1 > 0.0);
    }

    #[test]
    fn mint_by_value_round_trips_with_liquidity_equivalent() {
        let (lower, upper, current) = (90.0_f64, 110.0_f64, 100.0_f64);
        let l = mint_liquidity_for_value(lower, upper, current, 1_000.0, Token::One).unwrap();
        let (t0, t1) = liquidity_equivalent(l, lower, upper, current);
        let value = t1 + t0 * current;
        assert!((value - 1_000.0).abs() < 1e-6);
    }

    #[test]
    fn mint_by_value_rejects_wrong_side_token() {
        assert!(mint_liquidity_for_value(90.0, 110.0, 80.0, 100.0, Token::One).is_none());
        assert!(mint_liquidity_for_value(90.0, 110.0, 120.0, 100.0, Token::Zero).is_none());
    }
}
