// Fee growth inside a range: splits the global per-token fee growth
// accumulator into "below", "inside", and "above" a [lower, upper) range.
// Plain subtraction — no modular wraparound needed, since an f64 accumulator
// never wraps the way a fixed-point one would.

use crate::registry::TickRegistry;

/// Fee growth accumulated *inside* `[lower, upper)` for both tokens, given
/// the pool's global fee growth `fg` and current price.
///
/// A boundary that was never registered as a tick behaves as if it had never
/// been crossed, i.e. `fo = [0.0, 0.0]`.
pub fn fees_inside(
    registry: &TickRegistry,
    lower: f64,
    upper: f64,
    current_price: f64,
    fg: [f64; 2],
) -> [f64; 2] {
    let lower_fo = if registry.contains(lower) {
        registry.get(lower).fo
    } else {
        [0.0, 0.0]
    };
    let upper_fo = if registry.contains(upper) {
        registry.get(upper).fo
    } else {
        [0.0, 0.0]
    };

    let below = if current_price >= lower {
        lower_fo
    } else {
        [fg[0] - lower_fo[0], fg[1] - lower_fo[1]]
    };

    let above = if current_price < upper {
        upper_fo
    } else {
        [fg[0] - upper_fo[0], fg[1] - upper_fo[1]]
    };

    [fg[0] - below[0] - above[0], fg[1] - below[1] - above[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_price_inside_range_sees_full_accrual_when_ticks_untouched() {
        let registry = TickRegistry::new();
        let fg = [10.0, 20.0];
        let inside = fees_inside(&registry, 90.0, 110.0, 100.0, fg);
        assert_eq!(inside, fg);
    }

    #[test]
    fn current_price_outside_range_excludes_it() {
        let mut registry = TickRegistry::new();
        registry.ensure(90.0, 50.0, [0.0, 0.0]);
        registry.ensure(110.0, 50.0, [0.0, 0.0]);
        // pool currently trades at 50, below the whole [90, 110) range
        let inside = fees_inside(&registry, 90.0, 110.0, 50.0, [10.0, 20.0]);
        assert_eq!(inside, [0.0, 0.0]);
    }
}
