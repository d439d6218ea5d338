use anchor_lang::prelude::*;

use common::traits::KeyRef;
use common::U256;

use crate::error::ErrorCode;
use crate::program::BinaryMarket;
use crate::state::{Registry, REGISTRY_SEED};

/// Initializes the market registry.
///
/// The program's upgrade authority must sign and becomes the registry owner.
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// The registry account to initialize.
    #[account(
        init,
        seeds = [REGISTRY_SEED],
        bump,
        payer = payer,
        space = 8 + Registry::LEN,
    )]
    pub registry: Account<'info, Registry>,

    /// Payer for the transaction.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The program's upgrade authority.
    pub upgrade_authority: Signer<'info>,
    /// The market program.
    ///
    /// Provided here to check the upgrade authority.
    #[account(constraint = market_program.programdata_address()?.as_ref() == Some(program_data.key_ref()) @ ErrorCode::InvalidProgramData)]
    pub market_program: Program<'info, BinaryMarket>,
    /// The program data account for the market program.
    ///
    /// Provided to check the upgrade authority.
    #[account(constraint = program_data.upgrade_authority_address.as_ref() == Some(upgrade_authority.key_ref()) @ ErrorCode::InvalidProgramUpgradeAuthority)]
    pub program_data: Account<'info, ProgramData>,

    /// The Solana System Program.
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let bump = *ctx
        .bumps
        .get("registry")
        .ok_or_else(|| error!(ErrorCode::NonCanonicalBumpSeed))?;

    let registry = &mut ctx.accounts.registry;

    registry.owner = ctx.accounts.upgrade_authority.key();
    registry.market_count = U256::zero();
    registry.bump = bump;

    msg!("Registry initialized, owner {}", registry.owner);

    Ok(())
}
