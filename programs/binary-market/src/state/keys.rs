//! Storage addressing.
//!
//! Every piece of ledger state lives in a program derived address under one
//! of a fixed set of regions. Per-market regions are keyed by a 30-byte
//! sub-key derived from the market id, and per-position regions additionally
//! by the user's key.

use anchor_lang::prelude::*;
use arrayref::array_ref;
use solana_program::pubkey::MAX_SEED_LEN;

use common::static_assert;
use common::uint::{U256, U256_BYTES};

/// The width of a market sub-key.
pub const SUB_KEY_LEN: usize = 30;

/// Seed for the [`Registry`](crate::state::Registry) PDA.
pub const REGISTRY_SEED: &[u8] = b"registry";
/// Seed prefix for [`Market`](crate::state::Market) PDAs.
pub const MARKET_SEED: &[u8] = b"market";
/// Seed prefix for [`UserPosition`](crate::state::UserPosition) PDAs.
pub const POSITION_SEED: &[u8] = b"position";

static_assert!(SUB_KEY_LEN <= MAX_SEED_LEN);
static_assert!(SUB_KEY_LEN < U256_BYTES);

/// A market sub-key.
pub type SubKey = [u8; SUB_KEY_LEN];

/// Storage regions of the program.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Region {
    Registry,
    Market,
    Position,
}

impl Region {
    #[must_use]
    #[inline]
    pub const fn seed(self) -> &'static [u8] {
        match self {
            Region::Registry => REGISTRY_SEED,
            Region::Market => MARKET_SEED,
            Region::Position => POSITION_SEED,
        }
    }
}

/// Returns the low-order [`SUB_KEY_LEN`] bytes of the big-endian encoding of
/// `market_id`.
///
/// Distinct ids below `2^240` map to distinct sub-keys. Larger ids alias, so
/// callers resolving an id through its sub-key must also compare the id
/// stored in the market account.
#[must_use]
pub fn market_sub_key(market_id: &U256) -> SubKey {
    let mut bytes = [0u8; U256_BYTES];
    market_id.to_big_endian(&mut bytes);
    *array_ref![bytes, U256_BYTES - SUB_KEY_LEN, SUB_KEY_LEN]
}

/// Returns the address and bump of the registry.
pub fn registry_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[Region::Registry.seed()], program_id)
}

/// Returns the address and bump of a market.
pub fn market_address(program_id: &Pubkey, market_id: &U256) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[Region::Market.seed(), &market_sub_key(market_id)],
        program_id,
    )
}

/// Returns the address and bump of a user's position in a market.
pub fn position_address(program_id: &Pubkey, market_id: &U256, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            Region::Position.seed(),
            &market_sub_key(market_id),
            user.as_ref(),
        ],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::state::MAX_MARKETS;

    #[test]
    fn sub_key_is_low_order_bytes() {
        let sub_key = market_sub_key(&U256::from(0x0102_0304u64));

        assert_eq!(&sub_key[SUB_KEY_LEN - 4..], &[1, 2, 3, 4]);
        assert!(sub_key[..SUB_KEY_LEN - 4].iter().all(|b| *b == 0));
    }

    #[test]
    fn sub_keys_are_unique_up_to_max_markets() {
        let sub_keys: HashSet<SubKey> = (0..=MAX_MARKETS)
            .map(|id| market_sub_key(&U256::from(id)))
            .collect();

        assert_eq!(sub_keys.len() as u64, MAX_MARKETS + 1);
    }

    #[test]
    fn sub_key_drops_high_bytes() {
        let aliased = U256::one() + (U256::one() << 240);
        assert_eq!(market_sub_key(&aliased), market_sub_key(&U256::one()));
    }

    #[test]
    fn regions_do_not_overlap() {
        let program_id = crate::ID;
        let market_id = U256::one();
        let user = Pubkey::new_unique();

        let registry = registry_address(&program_id).0;
        let market = market_address(&program_id, &market_id).0;
        let position = position_address(&program_id, &market_id, &user).0;
        let other_market = market_address(&program_id, &U256::from(2u64)).0;
        let other_position = position_address(&program_id, &market_id, &Pubkey::new_unique()).0;

        let addresses: HashSet<Pubkey> =
            [registry, market, position, other_market, other_position]
                .into_iter()
                .collect();
        assert_eq!(addresses.len(), 5);
    }
}
