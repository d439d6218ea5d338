//! Events published for off-chain indexers. The program never reads them back.

use anchor_lang::prelude::*;
use common::U256;

#[event]
pub struct MarketCreated {
    pub market_id: U256,
    pub creator: Pubkey,
    pub end_block: u64,
}

#[event]
pub struct BetPlaced {
    pub market_id: U256,
    pub bettor: Pubkey,
    /// [`OUTCOME_YES`](crate::state::OUTCOME_YES) or
    /// [`OUTCOME_NO`](crate::state::OUTCOME_NO).
    pub outcome: u8,
    pub amount: U256,
}

#[event]
pub struct MarketResolved {
    pub market_id: U256,
    pub outcome: u8,
}

#[event]
pub struct WinningsClaimed {
    pub market_id: U256,
    pub claimant: Pubkey,
    pub amount: U256,
}
