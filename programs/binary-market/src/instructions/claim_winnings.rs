use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

use common::traits::KeyRef;
use common::U256;

use crate::error::ErrorCode;
use crate::events::WinningsClaimed;
use crate::state::{market_sub_key, Market, UserPosition, MARKET_SEED, POSITION_SEED};
use crate::utils;

#[derive(Clone, AnchorDeserialize, AnchorSerialize)]
pub struct ClaimWinningsParams {
    /// The market to claim winnings for.
    pub market_id: U256,
}

/// Allows users to claim their winnings.
#[derive(Accounts)]
#[instruction(params: ClaimWinningsParams)]
pub struct ClaimWinnings<'info> {
    /// The market to claim winnings for.
    #[account(
        seeds = [MARKET_SEED, &market_sub_key(&params.market_id)],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,
    /// The user claiming winnings.
    pub claimant: Signer<'info>,
    /// The user's position for this market, which does not exist if they
    /// never bet.
    ///
    /// CHECK: The address is checked by the seeds, and the data is only
    /// deserialized as a program-owned [UserPosition].
    #[account(
        mut,
        seeds = [POSITION_SEED, &market_sub_key(&params.market_id), claimant.key_ref().as_ref()],
        bump,
    )]
    pub position: UncheckedAccount<'info>,
}

/// Claims from a position account that may not have been created.
///
/// A missing position has no winning stake.
pub fn claim_position<'info>(
    position: &AccountInfo<'info>,
    market: &Market,
    program_id: &Pubkey,
) -> Result<U256> {
    if position.data_is_empty() {
        market.winner()?;
        return Err(error!(ErrorCode::NoWinningStake));
    }

    let mut position: Account<'info, UserPosition> = Account::try_from(position)?;
    let payout = position.claim(market)?;
    position.exit(program_id)?;

    Ok(payout)
}

pub fn handler(ctx: Context<ClaimWinnings>, params: ClaimWinningsParams) -> Result<()> {
    let ClaimWinningsParams { market_id } = params;

    let accounts = &ctx.accounts;
    accounts.market.check_id(&market_id)?;

    let amount = claim_position(&accounts.position, &accounts.market, ctx.program_id)?;
    let claimant = accounts.claimant.key();

    msg!("Claimed {} sats from market {}", amount, market_id);

    emit!(WinningsClaimed {
        market_id,
        claimant,
        amount,
    });

    utils::set_return_data(&amount)
}
