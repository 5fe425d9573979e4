//! Calculator program instructions.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    msg,
    program_error::ProgramError,
    program_pack::Pack,
    pubkey::Pubkey,
    system_instruction,
};

use crate::error::CalculatorError::InvalidInstruction;
use crate::state::Calculator;

/// Instructions of the calculator program.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum CalculatorInstruction {
    /// Initializes the calculator account.
    ///
    /// The calculator account should be allocated with
    /// [`Calculator::LEN`] bytes and assigned to this program
    /// beforehand, e.g. with [`create_account`] in the same
    /// transaction.
    ///
    /// Accounts expected:
    ///
    /// 0. `[signer, writable]` The owner of the calculator.
    /// 1. `[writable]`         The calculator account.
    Create {
        /// A greeting, up to [`Calculator::GREETING_MAX`] bytes.
        greeting: String,
    },
    /// Sets `a + b` to the result.
    ///
    /// Accounts expected:
    ///
    /// 0. `[writable]` The calculator account.
    Add {
        /// The first operand.
        a: i64,
        /// The second operand.
        b: i64,
    },
    /// Sets `a - b` to the result.
    ///
    /// Accounts expected:
    ///
    /// 0. `[writable]` The calculator account.
    Subtract {
        /// The minuend.
        a: i64,
        /// The subtrahend.
        b: i64,
    },
    /// Sets `a * b` to the result.
    ///
    /// Accounts expected:
    ///
    /// 0. `[writable]` The calculator account.
    Multiply {
        /// The first operand.
        a: i64,
        /// The second operand.
        b: i64,
    },
    /// Sets the quotient of `a / b` to the result and the
    /// remainder to the remainder.
    ///
    /// Accounts expected:
    ///
    /// 0. `[writable]` The calculator account.
    Divide {
        /// The dividend.
        a: i64,
        /// The divisor.
        b: i64,
    },
}

impl CalculatorInstruction {
    /// Decodes the instruction data.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let ix = Self::try_from_slice(input).map_err(|_| InvalidInstruction)?;
        msg!("{:?}", ix);
        Ok(ix)
    }
}

/// Creates a system instruction to allocate the calculator account.
pub fn create_account(
    program_id: &Pubkey,
    payer: &Pubkey,
    calculator: &Pubkey,
    lamports: u64,
) -> Instruction {
    system_instruction::create_account(
        payer,
        calculator,
        lamports,
        Calculator::LEN as u64,
        program_id,
    )
}

/// Creates a `Create` instruction.
pub fn create(
    program_id: &Pubkey,
    owner: &Pubkey,
    calculator: &Pubkey,
    greeting: String,
) -> Result<Instruction, ProgramError> {
    let data = CalculatorInstruction::Create { greeting }.try_to_vec()?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(*calculator, false),
        ],
        data,
    })
}

/// Creates an `Add` instruction.
pub fn add(
    program_id: &Pubkey,
    calculator: &Pubkey,
    a: i64,
    b: i64,
) -> Result<Instruction, ProgramError> {
    arithmetic(program_id, calculator, CalculatorInstruction::Add { a, b })
}

/// Creates a `Subtract` instruction.
pub fn subtract(
    program_id: &Pubkey,
    calculator: &Pubkey,
    a: i64,
    b: i64,
) -> Result<Instruction, ProgramError> {
    arithmetic(program_id, calculator, CalculatorInstruction::Subtract { a, b })
}

/// Creates a `Multiply` instruction.
pub fn multiply(
    program_id: &Pubkey,
    calculator: &Pubkey,
    a: i64,
    b: i64,
) -> Result<Instruction, ProgramError> {
    arithmetic(program_id, calculator, CalculatorInstruction::Multiply { a, b })
}

/// Creates a `Divide` instruction.
pub fn divide(
    program_id: &Pubkey,
    calculator: &Pubkey,
    a: i64,
    b: i64,
) -> Result<Instruction, ProgramError> {
    arithmetic(program_id, calculator, CalculatorInstruction::Divide { a, b })
}

fn arithmetic(
    program_id: &Pubkey,
    calculator: &Pubkey,
    ix: CalculatorInstruction,
) -> Result<Instruction, ProgramError> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*calculator, false)],
        data: ix.try_to_vec()?,
    })
}
