use anchor_lang::prelude::*;

use crate::state::{Registry, REGISTRY_SEED};
use crate::utils;

/// Returns the number of markets created so far.
#[derive(Accounts)]
pub struct GetMarketCount<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

pub fn handler(ctx: Context<GetMarketCount>) -> Result<()> {
    utils::set_return_data(&ctx.accounts.registry.market_count)
}
