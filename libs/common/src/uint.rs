//! 256-bit unsigned integers for satoshi-denominated amounts and market ids.

// Lints triggered inside `construct_uint!`.
#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use std::io::{self, Write};

use borsh::{BorshDeserialize, BorshSerialize};
use uint::construct_uint;

construct_uint! {
    /// Unsigned 256-bit integer stored as four little-endian `u64` limbs.
    pub struct U256(4);
}

/// The number of bytes in a serialized [`U256`].
pub const U256_BYTES: usize = 32;

// Borsh encodes the limbs in order, which is the 32-byte little-endian
// representation of the value.
impl BorshSerialize for U256 {
    fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for limb in self.0.iter() {
            limb.serialize(writer)?;
        }
        Ok(())
    }
}

impl BorshDeserialize for U256 {
    fn deserialize(buf: &mut &[u8]) -> io::Result<Self> {
        let mut limbs = [0u64; 4];
        for limb in limbs.iter_mut() {
            *limb = u64::deserialize(buf)?;
        }
        Ok(U256(limbs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_as_little_endian_bytes() {
        let value = U256::from(0x0102u64) << 128;

        let bytes = value.try_to_vec().unwrap();
        assert_eq!(bytes.len(), U256_BYTES);

        let mut expected = [0u8; U256_BYTES];
        value.to_little_endian(&mut expected);
        assert_eq!(bytes, expected);

        assert_eq!(U256::try_from_slice(&bytes).unwrap(), value);
    }

    #[test]
    fn deserialize_rejects_short_input() {
        assert!(U256::try_from_slice(&[0u8; U256_BYTES - 1]).is_err());
    }
}
