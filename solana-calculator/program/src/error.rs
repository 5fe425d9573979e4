//! Calculator program errors.

use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Calculator errors.
///
/// The discriminant is the `ProgramError::Custom` code seen by the
/// clients, so new variants go to the end.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    /// The instruction data can't be decoded.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// The calculator account is not initialized.
    #[error("Calculator not found")]
    NotFound,

    /// The calculator account had been already initialized.
    #[error("Calculator already exists")]
    AlreadyExists,

    /// The greeting is empty or too long.
    #[error("Invalid argument")]
    InvalidArgument,

    /// The owner didn't sign the instruction.
    #[error("Missing owner signature")]
    Unauthorized,

    /// The result doesn't fit in `i64`.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    /// The divisor is zero.
    #[error("Divide by zero")]
    DivideByZero,

    /// The calculator account data can't be read.
    #[error("Failed to read the calculator account")]
    ReadFailed,

    /// The calculator account data can't be written.
    #[error("Failed to write the calculator account")]
    WriteFailed,
}

/// Converts the calculator errors into native `ProgramError`.
impl From<CalculatorError> for ProgramError {
    fn from(e: CalculatorError) -> ProgramError {
        ProgramError::Custom(e as u32)
    }
}
