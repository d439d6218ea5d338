use anchor_lang::prelude::*;

mod utils;

pub mod error;
pub mod events;
pub mod instructions;
pub mod interface;
pub mod state;


use crate::instructions::*;

pub use crate::error::ErrorCode;

declare_id!("9shteCUPzHgoNH7zNALH2sZFDtZTVF59XbtNUeCigf7t");

#[program]
pub mod binary_market {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::handler(ctx)
    }

    pub fn create_market(ctx: Context<CreateMarket>, params: CreateMarketParams) -> Result<()> {
        instructions::create_market::handler(ctx, params)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, params: PlaceBetParams) -> Result<()> {
        instructions::place_bet::handler(ctx, params)
    }

    pub fn resolve_market(ctx: Context<ResolveMarket>, params: ResolveMarketParams) -> Result<()> {
        instructions::resolve_market::handler(ctx, params)
    }

    pub fn claim_winnings(ctx: Context<ClaimWinnings>, params: ClaimWinningsParams) -> Result<()> {
        instructions::claim_winnings::handler(ctx, params)
    }

    pub fn get_market(ctx: Context<GetMarket>, params: GetMarketParams) -> Result<()> {
        instructions::get_market::handler(ctx, params)
    }

    pub fn get_user_position(
        ctx: Context<GetUserPosition>,
        params: GetUserPositionParams,
    ) -> Result<()> {
        instructions::get_user_position::handler(ctx, params)
    }

    pub fn get_market_count_view(ctx: Context<GetMarketCount>) -> Result<()> {
        instructions::get_market_count::handler(ctx)
    }

    pub fn get_owner_view(ctx: Context<GetOwner>) -> Result<()> {
        instructions::get_owner::handler(ctx)
    }
}
