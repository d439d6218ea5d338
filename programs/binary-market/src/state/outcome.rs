use anchor_lang::prelude::*;
use common::U256;

use crate::error::ErrorCode;

/// Wire code for a yes bet or a yes resolution.
pub const OUTCOME_YES: u8 = 1;
/// Wire code for a no bet or a no resolution.
pub const OUTCOME_NO: u8 = 2;

/// Wire code for a market that accepts bets or awaits resolution.
pub const STATUS_OPEN: u8 = 1;
/// Wire code for a resolved market.
pub const STATUS_RESOLVED: u8 = 2;

/// A side of a market that can be bet on or declared the winner.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    /// Parses an outcome code supplied by a caller.
    pub fn from_code(code: U256) -> Result<Side> {
        if code == U256::from(OUTCOME_YES) {
            Ok(Side::Yes)
        } else if code == U256::from(OUTCOME_NO) {
            Ok(Side::No)
        } else {
            Err(error!(ErrorCode::InvalidOutcome))
        }
    }

    #[must_use]
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Side::Yes => OUTCOME_YES,
            Side::No => OUTCOME_NO,
        }
    }

    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Yes => Side::No,
            Side::No => Side::Yes,
        }
    }
}

/// The declared outcome of a market.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, AnchorDeserialize, AnchorSerialize)]
pub enum Outcome {
    /// No outcome has been declared yet.
    None,
    /// A positive outcome to the market question.
    Yes,
    /// A negative outcome to the market question.
    No,
}

impl Default for Outcome {
    #[inline]
    fn default() -> Self {
        Outcome::None
    }
}

impl Outcome {
    #[must_use]
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Outcome::None => 0,
            Outcome::Yes => OUTCOME_YES,
            Outcome::No => OUTCOME_NO,
        }
    }

    /// Returns the winning side, if one has been declared.
    #[must_use]
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::None => None,
            Outcome::Yes => Some(Side::Yes),
            Outcome::No => Some(Side::No),
        }
    }
}

impl From<Side> for Outcome {
    #[inline]
    fn from(side: Side) -> Self {
        match side {
            Side::Yes => Outcome::Yes,
            Side::No => Outcome::No,
        }
    }
}

/// Lifecycle status of a market.
///
/// `Open` is the only state that can change, and it can only become
/// `Resolved`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, AnchorDeserialize, AnchorSerialize)]
pub enum Status {
    Open,
    Resolved,
}

impl Default for Status {
    #[inline]
    fn default() -> Self {
        Status::Open
    }
}

impl Status {
    #[must_use]
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Status::Open => STATUS_OPEN,
            Status::Resolved => STATUS_RESOLVED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::assert_error;

    #[test]
    fn side_from_code() {
        assert_eq!(Side::from_code(1u64.into()).unwrap(), Side::Yes);
        assert_eq!(Side::from_code(2u64.into()).unwrap(), Side::No);

        for code in [U256::zero(), U256::from(3u64), U256::one() << 200] {
            assert_error(Side::from_code(code), ErrorCode::InvalidOutcome);
        }
    }

    #[test]
    fn outcome_codes() {
        assert_eq!(Outcome::default().code(), 0);
        assert_eq!(Outcome::from(Side::Yes).code(), OUTCOME_YES);
        assert_eq!(Outcome::from(Side::No).code(), OUTCOME_NO);
        assert_eq!(Outcome::from(Side::No).winner(), Some(Side::No));
        assert_eq!(Outcome::None.winner(), None);
    }
}
