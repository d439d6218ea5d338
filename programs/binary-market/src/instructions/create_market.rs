use anchor_lang::prelude::*;

use common::sys;

use crate::error::ErrorCode;
use crate::events::MarketCreated;
use crate::state::{market_sub_key, Market, NewMarket, Registry, MARKET_SEED, REGISTRY_SEED};
use crate::utils;

/// Parameters for creating a market.
#[derive(Clone, AnchorDeserialize, AnchorSerialize)]
pub struct CreateMarketParams {
    /// The market question. Must not be empty.
    pub question: String,
    /// The block at which betting closes and resolution opens.
    pub end_block: u64,
    /// The identity allowed to resolve the market.
    pub oracle: Pubkey,
}

/// Creates a [`Market`] under the next id of the [`Registry`].
#[derive(Accounts)]
pub struct CreateMarket<'info> {
    /// The market registry.
    #[account(mut, seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
    /// The market account to initialize.
    #[account(
        init,
        payer = creator,
        space = 8 + Market::LEN,
        seeds = [MARKET_SEED, &market_sub_key(&registry.next_market_id())],
        bump,
    )]
    pub market: Box<Account<'info, Market>>,
    /// The creator of the market.
    #[account(mut)]
    pub creator: Signer<'info>,
    /// The Solana System Program.
    pub system_program: Program<'info, System>,
}

pub fn handler(mut ctx: Context<CreateMarket>, params: CreateMarketParams) -> Result<()> {
    let CreateMarketParams {
        question,
        end_block,
        oracle,
    } = params;

    let now = sys::block_height()?;
    let bump = *ctx
        .bumps
        .get("market")
        .ok_or_else(|| error!(ErrorCode::NonCanonicalBumpSeed))?;
    let creator = ctx.accounts.creator.key();

    let accounts = &mut ctx.accounts;
    let market_id = accounts.registry.create_market(
        &mut accounts.market,
        NewMarket {
            question: &question,
            creator,
            oracle,
            end_block,
            bump,
        },
        now,
    )?;

    msg!("Market {} created, ends at block {}", market_id, end_block);

    emit!(MarketCreated {
        market_id,
        creator,
        end_block,
    });

    utils::set_return_data(&market_id)
}
