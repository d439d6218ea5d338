use anchor_lang::prelude::*;

use common::sys;
use common::traits::KeyRef;
use common::U256;

use crate::error::ErrorCode;
use crate::events::BetPlaced;
use crate::state::{market_sub_key, Market, Side, UserPosition, MARKET_SEED, POSITION_SEED};
use crate::utils;

/// Parameters for the [PlaceBet] instruction.
#[derive(Clone, AnchorDeserialize, AnchorSerialize)]
pub struct PlaceBetParams {
    /// The market to bet on.
    pub market_id: U256,
    /// The outcome code to bet on, `1` for yes or `2` for no.
    pub outcome: U256,
    /// The amount of sats to stake.
    pub amount: U256,
}

/// Allows a user to bet on an open market.
///
/// The bettor's [UserPosition] is created on their first bet.
#[derive(Accounts)]
#[instruction(params: PlaceBetParams)]
pub struct PlaceBet<'info> {
    /// The user placing the bet.
    #[account(mut)]
    pub bettor: Signer<'info>,
    /// The market to bet on.
    #[account(
        mut,
        seeds = [MARKET_SEED, &market_sub_key(&params.market_id)],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,
    /// The [UserPosition] account for this user and market.
    #[account(
        init_if_needed,
        payer = bettor,
        space = 8 + UserPosition::LEN,
        seeds = [POSITION_SEED, &market_sub_key(&params.market_id), bettor.key_ref().as_ref()],
        bump,
    )]
    pub position: Box<Account<'info, UserPosition>>,
    /// The Solana System Program.
    pub system_program: Program<'info, System>,
}

pub fn handler(mut ctx: Context<PlaceBet>, params: PlaceBetParams) -> Result<()> {
    let PlaceBetParams {
        market_id,
        outcome,
        amount,
    } = params;

    ctx.accounts.market.check_id(&market_id)?;

    let side = Side::from_code(outcome)?;
    let now = sys::block_height()?;
    let bump = *ctx
        .bumps
        .get("position")
        .ok_or_else(|| error!(ErrorCode::NonCanonicalBumpSeed))?;
    let bettor = ctx.accounts.bettor.key();

    let accounts = &mut ctx.accounts;
    accounts.position.bind(market_id, bettor, bump);
    accounts
        .position
        .place_bet(&mut accounts.market, side, amount, now)?;

    msg!("Bet of {} sats on {:?} in market {}", amount, side, market_id);

    emit!(BetPlaced {
        market_id,
        bettor,
        outcome: side.code(),
        amount,
    });

    utils::set_return_data(&true)
}
