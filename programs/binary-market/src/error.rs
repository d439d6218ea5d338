use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // Validation.
    #[msg("Outcome must be 1 (yes) or 2 (no).")]
    InvalidOutcome,
    #[msg("Market question must not be empty.")]
    EmptyQuestion,
    #[msg("Bet amount must be greater than zero.")]
    ZeroAmount,
    #[msg("End block must be greater than the current block.")]
    InvalidEndBlock,

    // Lifecycle.
    #[msg("Market does not exist.")]
    MarketNotFound,
    #[msg("Market is not open.")]
    MarketNotOpen,
    #[msg("Betting on this market has closed.")]
    BettingClosed,
    #[msg("Market is already resolved.")]
    AlreadyResolved,
    #[msg("Market cannot be resolved before its end block.")]
    ResolutionTooEarly,
    #[msg("Market is not resolved.")]
    NotResolved,
    #[msg("Winnings have already been claimed.")]
    AlreadyClaimed,
    #[msg("No stake on the winning outcome.")]
    NoWinningStake,

    // Authorization.
    #[msg("Only the market oracle can resolve this market.")]
    NotOracle,
    #[msg("Program data account does not match the program.")]
    InvalidProgramData,
    #[msg("Signer is not the program upgrade authority.")]
    InvalidProgramUpgradeAuthority,

    // Capacity and arithmetic.
    #[msg("Market registry is full.")]
    RegistryFull,
    #[msg("Numerical overflow occurred.")]
    Overflow,
    #[msg("Bump seed was non canonical.")]
    NonCanonicalBumpSeed,
}
