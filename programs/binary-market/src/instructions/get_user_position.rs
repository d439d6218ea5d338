use anchor_lang::prelude::*;

use common::U256;

use crate::state::{market_sub_key, Market, UserPosition, MARKET_SEED, POSITION_SEED};
use crate::utils;

/// A user's stakes in a market, as returned by [GetUserPosition].
#[derive(Clone, Debug, Default, Eq, PartialEq, AnchorDeserialize, AnchorSerialize)]
pub struct PositionInfo {
    pub yes_bet: U256,
    pub no_bet: U256,
    pub claimed: bool,
}

impl From<&UserPosition> for PositionInfo {
    fn from(position: &UserPosition) -> Self {
        PositionInfo {
            yes_bet: position.yes_bet,
            no_bet: position.no_bet,
            claimed: position.claimed,
        }
    }
}

#[derive(Clone, AnchorDeserialize, AnchorSerialize)]
pub struct GetUserPositionParams {
    pub market_id: U256,
    pub user: Pubkey,
}

/// Returns a [PositionInfo].
///
/// A user who never bet on the market has no position account and reads as
/// an empty position.
#[derive(Accounts)]
#[instruction(params: GetUserPositionParams)]
pub struct GetUserPosition<'info> {
    #[account(
        seeds = [MARKET_SEED, &market_sub_key(&params.market_id)],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,
    /// The user's position, which may not exist yet.
    ///
    /// CHECK: The address is checked by the seeds, and the data is only
    /// deserialized if the account is owned by this program.
    #[account(
        seeds = [POSITION_SEED, &market_sub_key(&params.market_id), params.user.as_ref()],
        bump,
    )]
    pub position: UncheckedAccount<'info>,
}

/// Reads a position account that may not have been created.
pub fn read_position(position: &AccountInfo, program_id: &Pubkey) -> Result<PositionInfo> {
    if position.data_is_empty() {
        return Ok(PositionInfo::default());
    }
    if position.owner != program_id {
        return Err(error!(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram));
    }

    let data = position.try_borrow_data()?;
    let position = UserPosition::try_deserialize(&mut &data[..])?;

    Ok(PositionInfo::from(&position))
}

pub fn handler(ctx: Context<GetUserPosition>, params: GetUserPositionParams) -> Result<()> {
    ctx.accounts.market.check_id(&params.market_id)?;

    let info = read_position(&ctx.accounts.position, ctx.program_id)?;
    utils::set_return_data(&info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Side;

    fn read(data: &mut [u8], owner: &Pubkey) -> Result<PositionInfo> {
        let key = Pubkey::new_unique();
        let mut lamports = 0;
        let account = AccountInfo::new(&key, false, false, &mut lamports, data, owner, false, 0);

        read_position(&account, &crate::ID)
    }

    #[test]
    fn missing_position_reads_as_empty() {
        let info = read(&mut [], &solana_program::system_program::ID).unwrap();
        assert_eq!(info, PositionInfo::default());
    }

    #[test]
    fn existing_position() {
        let mut market = Market {
            end_block: 10,
            ..Default::default()
        };

        let mut position = UserPosition::default();
        position.bind(U256::one(), Pubkey::new_unique(), 255);
        position
            .place_bet(&mut market, Side::No, U256::from(21u64), 0)
            .unwrap();

        let mut data = Vec::new();
        position.try_serialize(&mut data).unwrap();

        let info = read(&mut data, &crate::ID).unwrap();
        assert_eq!(
            info,
            PositionInfo {
                yes_bet: U256::zero(),
                no_bet: U256::from(21u64),
                claimed: false,
            }
        );
    }

    #[test]
    fn foreign_account_is_rejected() {
        let mut data = vec![1u8; 8 + UserPosition::LEN];
        assert!(read(&mut data, &Pubkey::new_unique()).is_err());
    }
}
