// Constants module, grouped by functionality.

// ============================================================
// PRICE CONSTANTS
// ============================================================

/// Smallest price the engine will accept or compute with.
///
/// Guards `1.0 / price.sqrt()` and similar divisions against blowing up near
/// zero; well below any price a real pool would ever be initialized at.
pub const MIN_PRICE: f64 = 1e-12;

// ============================================================
// POOL PARAMETER BOUNDS
// ============================================================

/// Fee tier must lie strictly inside this range (exclusive on both ends).
pub const FEE_TIER_BOUNDS: (f64, f64) = (0.0, 1.0);

/// Governance share must lie inside this range, inclusive on both ends.
pub const GOV_SHARE_BOUNDS: (f64, f64) = (0.0, 1.0);

// ============================================================
// PRICE-UPDATE ENGINE BOUNDS
// ============================================================

/// Hard cap on ticks crossed by a single `swap_price` call, guarding against
/// a runaway crossing loop over a corrupt registry.
pub const MAX_TICK_CROSSINGS: usize = 10_000;

// ============================================================
// FEE TIER PRESETS
// ============================================================

/// Conventional Uniswap v3 fee tiers, expressed as fractions (not bps/pct).
pub mod fee_tier_presets {
    /// 0.05%, for low-volatility pairs (e.g. stablecoin/stablecoin).
    pub const LOW: f64 = 0.0005;
    /// 0.30%, the default tier for most pairs.
    pub const MEDIUM: f64 = 0.003;
    /// 1.00%, for exotic/high-volatility pairs.
    pub const HIGH: f64 = 0.01;
}
