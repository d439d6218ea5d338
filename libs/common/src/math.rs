use crate::uint::U256;

/// Computes a winner's share of a resolved pool,
/// `floor(stake * (winning_pool + losing_pool) / winning_pool)`.
///
/// Returns `None` if an intermediate value overflows or if `winning_pool` is
/// zero.
///
/// For `stake <= winning_pool` the result never exceeds the combined pool, and
/// summing the results over a partition of `winning_pool` loses strictly less
/// than `winning_pool` units to rounding.
#[must_use]
#[inline]
pub fn pro_rata_payout(stake: U256, winning_pool: U256, losing_pool: U256) -> Option<U256> {
    let total = winning_pool.checked_add(losing_pool)?;
    stake.checked_mul(total)?.checked_div(winning_pool)
}
