use anchor_lang::prelude::*;

use crate::state::{Registry, REGISTRY_SEED};
use crate::utils;

/// Returns the owner of the program.
#[derive(Accounts)]
pub struct GetOwner<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

pub fn handler(ctx: Context<GetOwner>) -> Result<()> {
    utils::set_return_data(&ctx.accounts.registry.owner)
}
