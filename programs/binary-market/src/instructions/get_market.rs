use anchor_lang::prelude::*;

use common::U256;

use crate::state::{market_sub_key, Market, MARKET_SEED};
use crate::utils;

/// The public fields of a market, as returned by [GetMarket].
#[derive(Clone, Debug, Eq, PartialEq, AnchorDeserialize, AnchorSerialize)]
pub struct MarketInfo {
    pub creator: Pubkey,
    pub end_block: u64,
    pub oracle: Pubkey,
    /// [`STATUS_OPEN`](crate::state::STATUS_OPEN) or
    /// [`STATUS_RESOLVED`](crate::state::STATUS_RESOLVED).
    pub status: u8,
    /// `0` while open, otherwise the winning outcome code.
    pub outcome: u8,
    pub yes_pool: U256,
    pub no_pool: U256,
}

impl From<&Market> for MarketInfo {
    fn from(market: &Market) -> Self {
        MarketInfo {
            creator: market.creator,
            end_block: market.end_block,
            oracle: market.oracle,
            status: market.status.code(),
            outcome: market.outcome.code(),
            yes_pool: market.yes_pool,
            no_pool: market.no_pool,
        }
    }
}

#[derive(Clone, AnchorDeserialize, AnchorSerialize)]
pub struct GetMarketParams {
    pub market_id: U256,
}

/// Returns a [MarketInfo].
///
/// Fails if the market was never created.
#[derive(Accounts)]
#[instruction(params: GetMarketParams)]
pub struct GetMarket<'info> {
    #[account(
        seeds = [MARKET_SEED, &market_sub_key(&params.market_id)],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,
}

pub fn handler(ctx: Context<GetMarket>, params: GetMarketParams) -> Result<()> {
    let market: &Market = &ctx.accounts.market;
    market.check_id(&params.market_id)?;

    utils::set_return_data(&MarketInfo::from(market))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NewMarket, Registry, Side, OUTCOME_NO, STATUS_OPEN, STATUS_RESOLVED};

    #[test]
    fn info_uses_wire_codes() {
        let oracle = Pubkey::new_unique();
        let mut registry = Registry::default();
        let mut market = Market::default();
        registry
            .create_market(
                &mut market,
                NewMarket {
                    question: "Will the next block be mined by a pool?",
                    creator: Pubkey::new_unique(),
                    oracle,
                    end_block: 10,
                    bump: 255,
                },
                0,
            )
            .unwrap();

        let info = MarketInfo::from(&market);
        assert_eq!(info.status, STATUS_OPEN);
        assert_eq!(info.outcome, 0);
        assert_eq!(info.oracle, oracle);
        assert_eq!(info.end_block, 10);

        market.resolve(&oracle, Side::No, 10).unwrap();

        let info = MarketInfo::from(&market);
        assert_eq!(info.status, STATUS_RESOLVED);
        assert_eq!(info.outcome, OUTCOME_NO);
    }
}
