//! Liquidity math: the closed-form conversions between liquidity and token
//! amounts, and the shared `Token` tag used across the workspace.

pub mod constants;
pub mod liquidity;
pub mod sqrt_price;
pub mod token;

pub use constants::*;
pub use liquidity::{
    liquidity_equivalent, liquidity_for_amount0, liquidity_for_amount1, mint_liquidity_for_value,
};
pub use sqrt_price::{inv_sqrt_price, sqrt_price};
pub use token::Token;
