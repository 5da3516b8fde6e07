// Structured logging for pool-level operations: one `info!` event each for
// pool-initialized, liquidity-added, liquidity-removed, swap, and
// fees-collected. Tick crossings are logged at `debug!` inside `clamm-swap`,
// ungated by `silent`.
//
// `silent` gates only these `info!`-level narrative events; it never
// silences `debug!`/`error!` and never affects a return value.

pub fn emit_pool_initialized(silent: bool, initial_price: f64, fee_tier: f64, gov_share: f64) {
    if !silent {
        tracing::info!(initial_price, fee_tier, gov_share, "pool initialized");
    }
}

pub fn emit_liquidity_added(silent: bool, lower: f64, upper: f64, l_add: f64, f0: f64, f1: f64) {
    if !silent {
        tracing::info!(lower, upper, l_add, f0, f1, "liquidity added");
    }
}

pub fn emit_liquidity_removed(
    silent: bool,
    lower: f64,
    upper: f64,
    l_sub: f64,
    token0: f64,
    token1: f64,
    f0: f64,
    f1: f64,
) {
    if !silent {
        tracing::info!(lower, upper, l_sub, token0, token1, f0, f1, "liquidity removed");
    }
}

pub fn emit_swap(silent: bool, from_price: f64, to_price: f64, l: f64) {
    if !silent {
        tracing::info!(from_price, to_price, l, "swap executed");
    }
}

pub fn emit_fees_collected(silent: bool, lower: f64, upper: f64, token: i32, amount: f64) {
    if !silent {
        tracing::info!(lower, upper, token, amount, "fees collected");
    }
}
