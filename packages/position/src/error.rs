use thiserror::Error;

use clamm_math::Token;

/// Errors raised by Position Book operations.
#[derive(Debug, Error, PartialEq)]
pub enum PositionError {
    #[error("invalid range: lower ({lower}) must be less than upper ({upper})")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("no position exists at [{lower}, {upper})")]
    NoSuchPosition { lower: f64, upper: f64 },

    #[error("token {token:?} cannot be minted on the {side} side of the range")]
    InvalidMintSide { side: &'static str, token: Token },

    #[error("invalid parameter: {what}")]
    InvalidParameter { what: &'static str },
}
