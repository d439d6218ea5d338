use anchor_lang::prelude::*;

/// Borrowed access to the identity behind an account or key.
///
/// Identities are compared byte for byte, so anything that resolves to a
/// [`Pubkey`] can be checked against a stored creator or oracle without
/// copying the key.
pub trait KeyRef {
    /// Get a reference to the pubkey of an account.
    fn key_ref(&self) -> &Pubkey;

    /// Returns `true` if this identity is exactly `other`.
    #[inline]
    fn is(&self, other: &Pubkey) -> bool {
        self.key_ref() == other
    }
}

impl<T> KeyRef for Account<'_, T>
where
    T: AccountSerialize + AccountDeserialize + Owner + Clone,
{
    #[inline]
    fn key_ref(&self) -> &Pubkey {
        AsRef::<AccountInfo>::as_ref(&self).key
    }
}

impl KeyRef for AccountInfo<'_> {
    #[inline]
    fn key_ref(&self) -> &Pubkey {
        self.key
    }
}

impl KeyRef for Signer<'_> {
    #[inline]
    fn key_ref(&self) -> &Pubkey {
        AsRef::<AccountInfo>::as_ref(self).key
    }
}

impl KeyRef for Pubkey {
    #[inline]
    fn key_ref(&self) -> &Pubkey {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_exact() {
        let oracle = Pubkey::new_unique();
        let mut bytes = oracle.to_bytes();
        bytes[31] ^= 1;

        assert!(oracle.is(&oracle));
        assert!(!oracle.is(&Pubkey::new_from_array(bytes)));
    }
}
