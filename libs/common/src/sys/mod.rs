use anchor_lang::prelude::*;

#[cfg(not(target_arch = "bpf"))]
pub mod mock;

/// Returns the current block height.
///
/// Markets measure their deadlines in slots, so this is the slot reported by
/// the [`Clock`] sysvar.
pub fn block_height() -> Result<u64> {
    Ok(Clock::get()?.slot)
}
