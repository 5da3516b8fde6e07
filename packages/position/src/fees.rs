// Fee settlement: read-and-clear semantics shared by mint, burn, and
// `get_position_fees`.

use clamm_tick::{fees_inside, TickRegistry};

use crate::types::Position;

/// Settle a position against the pool's current fee-growth state, updating
/// `fg_last` to the freshly computed inside-fees value and returning the
/// token-denominated amount collected since the previous settlement.
///
/// Calling this twice with no intervening swap returns a (possibly zero)
/// amount on the first call and exactly `(0.0, 0.0)` on the second — the
/// position's per-unit-liquidity fee share hasn't moved.
pub fn settle(
    position: &mut Position,
    registry: &TickRegistry,
    current_price: f64,
    fg: [f64; 2],
) -> (f64, f64) {
    let fr = fees_inside(registry, position.lower, position.upper, current_price, fg);
    let f0 = position.liquidity * (fr[0] - position.fg_last[0]);
    let f1 = position.liquidity * (fr[1] - position.fg_last[1]);
    position.fg_last = fr;
    (f0, f1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settling_twice_without_a_swap_yields_zero_the_second_time() {
        let mut registry = TickRegistry::new();
        registry.ensure(90.0, 100.0, [0.0, 0.0]);
        registry.ensure(110.0, 100.0, [0.0, 0.0]);

        let mut position = Position::new(90.0, 110.0, 1000.0, [0.0, 0.0]);
        let fg = [0.0, 5.0];

        let (f0, f1) = settle(&mut position, &registry, 100.0, fg);
        assert_eq!(f0, 0.0);
        assert_eq!(f1, 5000.0);

        let (f0_again, f1_again) = settle(&mut position, &registry, 100.0, fg);
        assert_eq!(f0_again, 0.0);
        assert_eq!(f1_again, 0.0);
    }
}
