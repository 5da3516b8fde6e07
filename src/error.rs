use thiserror::Error;

use clamm_math::Token;
use clamm_position::PositionError;

/// Errors surfaced by every public `Pool` operation.
///
/// Inputs are validated completely before any field is mutated, so a `Pool`
/// never observes a partially-applied operation after an `Err` return.
#[derive(Debug, Error, PartialEq)]
pub enum PoolError {
    #[error("invalid range: lower ({lower}) must be less than upper ({upper})")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("invalid token selector: {token}")]
    InvalidToken { token: i32 },

    #[error("token {token:?} cannot be minted on the {side} side of the range")]
    InvalidMintSide { side: &'static str, token: Token },

    #[error("no position exists at [{lower}, {upper})")]
    NoSuchPosition { lower: f64, upper: f64 },

    #[error("invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("allocation shape mismatch: {weights} weights, {bins} bins (expected {weights} + 1)")]
    ShapeMismatch { weights: usize, bins: usize },
}

impl From<PositionError> for PoolError {
    fn from(err: PositionError) -> Self {
        match err {
            PositionError::InvalidRange { lower, upper } => PoolError::InvalidRange { lower, upper },
            PositionError::NoSuchPosition { lower, upper } => {
                PoolError::NoSuchPosition { lower, upper }
            }
            PositionError::InvalidMintSide { side, token } => {
                PoolError::InvalidMintSide { side, token }
            }
            PositionError::InvalidParameter { what } => PoolError::InvalidParameter { what },
        }
    }
}
