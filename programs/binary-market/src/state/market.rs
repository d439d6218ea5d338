use anchor_lang::prelude::*;
use solana_program::pubkey::PUBKEY_BYTES;

use common::traits::KeyRef;
use common::uint::{U256, U256_BYTES};

use crate::error::ErrorCode;
use crate::state::{Outcome, Side, Status};

/// Market account.
#[account]
#[derive(Default)]
pub struct Market {
    /// The id of the market, assigned by the registry.
    pub id: U256,
    /// Creator of the market.
    pub creator: Pubkey,
    /// The only identity allowed to resolve the market.
    pub oracle: Pubkey,
    /// The block at which betting closes and resolution opens.
    pub end_block: u64,
    /// The lifecycle status of the market.
    pub status: Status,
    /// The outcome of the market, [`Outcome::None`] while open.
    pub outcome: Outcome,
    /// Sats staked on the yes side.
    pub yes_pool: U256,
    /// Sats staked on the no side.
    pub no_pool: U256,
    /// The bump seed for the market PDA.
    pub bump: u8,
}

impl Market {
    pub const LEN: usize = U256_BYTES + (2 * PUBKEY_BYTES) + 8 + 1 + 1 + (2 * U256_BYTES) + 1;

    pub(crate) fn open(&mut self, id: U256, creator: Pubkey, oracle: Pubkey, end_block: u64, bump: u8) {
        *self = Market {
            id,
            creator,
            oracle,
            end_block,
            status: Status::Open,
            outcome: Outcome::None,
            yes_pool: U256::zero(),
            no_pool: U256::zero(),
            bump,
        };
    }

    /// Checks that this is the market with `id`.
    ///
    /// Market addresses only cover the low-order bytes of the id, so an
    /// account found by address is only the requested market if its stored
    /// id matches.
    pub fn check_id(&self, id: &U256) -> Result<()> {
        if self.id != *id {
            return Err(error!(ErrorCode::MarketNotFound));
        }
        Ok(())
    }

    /// Returns the pool staked on `side`.
    #[must_use]
    #[inline]
    pub fn pool(&self, side: Side) -> U256 {
        match side {
            Side::Yes => self.yes_pool,
            Side::No => self.no_pool,
        }
    }

    #[inline]
    pub(crate) fn pool_mut(&mut self, side: Side) -> &mut U256 {
        match side {
            Side::Yes => &mut self.yes_pool,
            Side::No => &mut self.no_pool,
        }
    }

    /// Returns the sum of both pools.
    pub fn total_pool(&self) -> Result<U256> {
        self.yes_pool
            .checked_add(self.no_pool)
            .ok_or_else(|| error!(ErrorCode::Overflow))
    }

    /// Checks that the market accepts bets at block `now`.
    ///
    /// Betting closes at `end_block`, so a bet in that block is rejected.
    pub fn check_accepts_bets(&self, now: u64) -> Result<()> {
        if self.status != Status::Open {
            return Err(error!(ErrorCode::MarketNotOpen));
        }
        if now >= self.end_block {
            return Err(error!(ErrorCode::BettingClosed));
        }
        Ok(())
    }

    /// Declares `side` the winner.
    ///
    /// This is the only transition of a market: it happens once, by the
    /// oracle, at or after `end_block`.
    pub fn resolve(&mut self, caller: &impl KeyRef, side: Side, now: u64) -> Result<()> {
        if self.status != Status::Open {
            return Err(error!(ErrorCode::AlreadyResolved));
        }
        if !caller.is(&self.oracle) {
            return Err(error!(ErrorCode::NotOracle));
        }
        if now < self.end_block {
            return Err(error!(ErrorCode::ResolutionTooEarly));
        }

        self.status = Status::Resolved;
        self.outcome = side.into();

        Ok(())
    }

    /// Returns the winning side of a resolved market.
    pub fn winner(&self) -> Result<Side> {
        match (self.status, self.outcome.winner()) {
            (Status::Resolved, Some(side)) => Ok(side),
            _ => Err(error!(ErrorCode::NotResolved)),
        }
    }
}
