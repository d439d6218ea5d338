use anchor_lang::prelude::*;
use solana_program::program_error::ProgramError;

/// Publishes `value` as the instruction's return data.
pub fn set_return_data<T: AnchorSerialize>(value: &T) -> Result<()> {
    let data = value
        .try_to_vec()
        .map_err(|err| ProgramError::BorshIoError(err.to_string()))?;
    solana_program::program::set_return_data(&data);

    Ok(())
}

/// Asserts that `result` failed with the given program error.
#[cfg(test)]
#[track_caller]
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: crate::ErrorCode) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {}, got {}",
            expected.name(),
            err.error_name,
        ),
        other => panic!("expected {}, got {:?}", expected.name(), other),
    }
}
