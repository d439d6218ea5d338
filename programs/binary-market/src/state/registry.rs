use anchor_lang::prelude::*;
use solana_program::pubkey::PUBKEY_BYTES;

use common::uint::{U256, U256_BYTES};

use crate::error::ErrorCode;
use crate::state::Market;

/// The maximum number of markets the registry will ever create.
pub const MAX_MARKETS: u64 = 10_000;

/// The [Registry] account.
#[account]
#[derive(Default)]
pub struct Registry {
    /// The owner of the program, set to the upgrade authority on
    /// initialization.
    pub owner: Pubkey,
    /// The number of markets created so far, which is also the id of the most
    /// recent market.
    pub market_count: U256,
    /// The bump seed for the registry PDA.
    pub bump: u8,
}

/// Arguments for registering a new market.
pub struct NewMarket<'a> {
    pub question: &'a str,
    pub creator: Pubkey,
    pub oracle: Pubkey,
    pub end_block: u64,
    pub bump: u8,
}

impl Registry {
    pub const LEN: usize = PUBKEY_BYTES + U256_BYTES + 1;

    /// Returns the id the next market will be created with.
    ///
    /// Saturates on a full counter, `create_market` rejects that case.
    #[must_use]
    pub fn next_market_id(&self) -> U256 {
        self.market_count.saturating_add(U256::one())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.market_count >= U256::from(MAX_MARKETS)
    }

    /// Validates and opens `market` under the next id, returning that id.
    ///
    /// Nothing is written unless every check passes, so a rejected market
    /// never consumes an id.
    pub fn create_market(&mut self, market: &mut Market, new: NewMarket<'_>, now: u64) -> Result<U256> {
        if new.end_block <= now {
            return Err(error!(ErrorCode::InvalidEndBlock));
        }
        if new.question.is_empty() {
            return Err(error!(ErrorCode::EmptyQuestion));
        }
        if self.is_full() {
            return Err(error!(ErrorCode::RegistryFull));
        }

        let market_id = self
            .market_count
            .checked_add(U256::one())
            .ok_or_else(|| error!(ErrorCode::Overflow))?;

        market.open(market_id, new.creator, new.oracle, new.end_block, new.bump);
        self.market_count = market_id;

        Ok(market_id)
    }
}
