use anchor_lang::prelude::*;
use solana_program::pubkey::PUBKEY_BYTES;

use common::math::pro_rata_payout;
use common::uint::{U256, U256_BYTES};

use crate::error::ErrorCode;
use crate::state::{Market, Side};

/// A user's stakes in a single market.
///
/// Stakes on each side accumulate independently and can never be withdrawn.
#[account]
#[derive(Default)]
pub struct UserPosition {
    /// The market this position belongs to.
    pub market_id: U256,
    /// The owner of the position.
    pub user: Pubkey,
    /// Sats staked on the yes side.
    pub yes_bet: U256,
    /// Sats staked on the no side.
    pub no_bet: U256,
    /// Whether the winnings of this position have been claimed.
    pub claimed: bool,
    /// The bump seed for the position PDA.
    pub bump: u8,
}

impl UserPosition {
    pub const LEN: usize = U256_BYTES + PUBKEY_BYTES + (2 * U256_BYTES) + 1 + 1;

    /// Binds a freshly created position to its market and owner.
    ///
    /// Does nothing if the position is already bound.
    pub fn bind(&mut self, market_id: U256, user: Pubkey, bump: u8) {
        if self.user == Pubkey::default() {
            self.market_id = market_id;
            self.user = user;
            self.bump = bump;
        }
    }

    /// Returns the stake on `side`.
    #[must_use]
    #[inline]
    pub fn stake(&self, side: Side) -> U256 {
        match side {
            Side::Yes => self.yes_bet,
            Side::No => self.no_bet,
        }
    }

    #[inline]
    fn stake_mut(&mut self, side: Side) -> &mut U256 {
        match side {
            Side::Yes => &mut self.yes_bet,
            Side::No => &mut self.no_bet,
        }
    }

    /// Adds `amount` to this position and to the market pool on `side`.
    ///
    /// Both sums are computed before either is written, so a failed bet leaves
    /// the market and the position untouched.
    pub fn place_bet(&mut self, market: &mut Market, side: Side, amount: U256, now: u64) -> Result<()> {
        market.check_accepts_bets(now)?;

        if amount.is_zero() {
            return Err(error!(ErrorCode::ZeroAmount));
        }

        let pool = market
            .pool(side)
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::Overflow))?;
        let stake = self
            .stake(side)
            .checked_add(amount)
            .ok_or_else(|| error!(ErrorCode::Overflow))?;

        *market.pool_mut(side) = pool;
        *self.stake_mut(side) = stake;

        Ok(())
    }

    /// Claims this position's share of a resolved market, returning the
    /// payout.
    ///
    /// Only the stake on the winning side pays out. The position is marked
    /// claimed before the payout is computed, and stays claimed unless the
    /// payout overflows.
    pub fn claim(&mut self, market: &Market) -> Result<U256> {
        let winner = market.winner()?;

        if self.claimed {
            return Err(error!(ErrorCode::AlreadyClaimed));
        }

        let stake = self.stake(winner);
        if stake.is_zero() {
            return Err(error!(ErrorCode::NoWinningStake));
        }

        self.claimed = true;

        match pro_rata_payout(stake, market.pool(winner), market.pool(winner.opposite())) {
            Some(payout) => Ok(payout),
            None => {
                self.claimed = false;
                Err(error!(ErrorCode::Overflow))
            }
        }
    }
}
