use serde::{Deserialize, Serialize};

/// Which side of the pair an amount or a fee accumulator refers to.
///
/// A typed alternative to passing a bare `0`/`1` integer around; the two fee
/// accumulators a pool keeps are `[f64; 2]` arrays indexed by `Token::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Zero,
    One,
}

impl Token {
    /// Array index for this token, for indexing `[f64; 2]` fee accumulators.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Token::Zero => 0,
            Token::One => 1,
        }
    }

    /// Parse the `0`/`1` selector used at the public API boundary.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Token::Zero),
            1 => Some(Token::One),
            _ => None,
        }
    }
}
