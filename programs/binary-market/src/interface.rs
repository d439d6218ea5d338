//! Canonical method signatures and their 4-byte selectors.
//!
//! On chain, instructions are dispatched by Anchor's discriminator. Clients
//! and indexers that identify calls by selector use this table.

use solana_program::hash::hash;

/// A 4-byte method selector.
pub type Selector = [u8; 4];

/// A public method of the program.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Method {
    CreateMarket,
    PlaceBet,
    ResolveMarket,
    ClaimWinnings,
    GetMarket,
    GetUserPosition,
    GetMarketCountView,
    GetOwnerView,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::CreateMarket,
        Method::PlaceBet,
        Method::ResolveMarket,
        Method::ClaimWinnings,
        Method::GetMarket,
        Method::GetUserPosition,
        Method::GetMarketCountView,
        Method::GetOwnerView,
    ];

    /// Returns the canonical signature of the method.
    #[must_use]
    pub const fn signature(self) -> &'static str {
        match self {
            Method::CreateMarket => "createMarket(string,uint64,address)",
            Method::PlaceBet => "placeBet(uint256,uint256,uint256)",
            Method::ResolveMarket => "resolveMarket(uint256,uint256)",
            Method::ClaimWinnings => "claimWinnings(uint256)",
            Method::GetMarket => "getMarket(uint256)",
            Method::GetUserPosition => "getUserPosition(uint256,address)",
            Method::GetMarketCountView => "getMarketCountView()",
            Method::GetOwnerView => "getOwnerView()",
        }
    }

    /// Returns the first four bytes of the SHA-256 digest of the signature.
    #[must_use]
    pub fn selector(self) -> Selector {
        let digest = hash(self.signature().as_bytes()).to_bytes();
        [digest[0], digest[1], digest[2], digest[3]]
    }

    /// Looks up the method with the given selector.
    #[must_use]
    pub fn from_selector(selector: Selector) -> Option<Method> {
        Method::ALL
            .iter()
            .copied()
            .find(|method| method.selector() == selector)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn selectors_are_distinct() {
        let selectors: HashSet<Selector> = Method::ALL.iter().map(|m| m.selector()).collect();
        assert_eq!(selectors.len(), Method::ALL.len());
    }

    #[test]
    fn selector_lookup() {
        for method in Method::ALL {
            assert_eq!(Method::from_selector(method.selector()), Some(method));
        }
    }

    #[test]
    fn known_selectors() {
        assert_eq!(Method::CreateMarket.selector(), [0x85, 0x26, 0x3c, 0x47]);
        assert_eq!(Method::ClaimWinnings.selector(), [0xdd, 0x03, 0x00, 0x48]);
        assert_eq!(Method::GetOwnerView.selector(), [0x14, 0x23, 0x34, 0x29]);
    }

    #[test]
    fn unknown_selector() {
        let unknown = hash(b"withdraw(uint256)").to_bytes();
        let unknown = [unknown[0], unknown[1], unknown[2], unknown[3]];

        assert!(Method::ALL.iter().all(|m| m.selector() != unknown));
        assert_eq!(Method::from_selector(unknown), None);
    }
}
