use anchor_lang::prelude::*;

use common::sys;
use common::U256;

use crate::events::MarketResolved;
use crate::state::{market_sub_key, Market, Side, MARKET_SEED};
use crate::utils;

#[derive(Clone, AnchorDeserialize, AnchorSerialize)]
pub struct ResolveMarketParams {
    /// The market to resolve.
    pub market_id: U256,
    /// The winning outcome code, `1` for yes or `2` for no.
    pub outcome: U256,
}

/// Allows the market oracle to declare the outcome.
#[derive(Accounts)]
#[instruction(params: ResolveMarketParams)]
pub struct ResolveMarket<'info> {
    /// The market to resolve.
    #[account(
        mut,
        seeds = [MARKET_SEED, &market_sub_key(&params.market_id)],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,
    /// The market oracle.
    pub oracle: Signer<'info>,
}

pub fn handler(mut ctx: Context<ResolveMarket>, params: ResolveMarketParams) -> Result<()> {
    let ResolveMarketParams { market_id, outcome } = params;

    ctx.accounts.market.check_id(&market_id)?;

    let side = Side::from_code(outcome)?;
    let now = sys::block_height()?;

    let accounts = &mut ctx.accounts;
    accounts.market.resolve(&accounts.oracle, side, now)?;

    msg!("Market {} resolved to {:?}", market_id, side);

    emit!(MarketResolved {
        market_id,
        outcome: side.code(),
    });

    utils::set_return_data(&true)
}
