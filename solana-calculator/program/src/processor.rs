//! Calculator instruction processor.

use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    program_pack::Pack,
    pubkey::Pubkey,
};

use crate::auth::AuthorizationContext;
use crate::handler;
use crate::instruction::CalculatorInstruction;
use crate::state::Calculator;
use crate::store::AccountStore;

/// A processor to handle the incoming transactions.
#[derive(Debug)]
pub struct Processor;

impl Processor {
    /// Process the instruction.
    ///
    /// This is the entry point of all the transactions to this program.
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        match CalculatorInstruction::unpack(instruction_data)? {
            CalculatorInstruction::Create { greeting } => {
                Self::process_create(accounts, greeting, program_id)
            }
            CalculatorInstruction::Add { a, b } => {
                let calculator = Self::calculator_account(accounts, program_id)?;
                handler::add(&mut AccountStore::new(calculator), calculator.key, a, b)?;
                Ok(())
            }
            CalculatorInstruction::Subtract { a, b } => {
                let calculator = Self::calculator_account(accounts, program_id)?;
                handler::subtract(&mut AccountStore::new(calculator), calculator.key, a, b)?;
                Ok(())
            }
            CalculatorInstruction::Multiply { a, b } => {
                let calculator = Self::calculator_account(accounts, program_id)?;
                handler::multiply(&mut AccountStore::new(calculator), calculator.key, a, b)?;
                Ok(())
            }
            CalculatorInstruction::Divide { a, b } => {
                let calculator = Self::calculator_account(accounts, program_id)?;
                handler::divide(&mut AccountStore::new(calculator), calculator.key, a, b)?;
                Ok(())
            }
        }
    }

    /// `CalculatorInstruction::Create` processor.
    fn process_create(
        accounts: &[AccountInfo],
        greeting: String,
        program_id: &Pubkey,
    ) -> ProgramResult {
        let accounts_iter = &mut accounts.iter();

        // The owner pays for the calculator account, and
        // its signature is checked by the handler.
        let owner = next_account_info(accounts_iter)?;
        let calculator = Self::calculator_account(accounts_iter.as_slice(), program_id)?;

        let auth = AuthorizationContext::from_accounts(accounts);
        handler::create(
            &mut AccountStore::new(calculator),
            calculator.key,
            &auth,
            owner.key,
            greeting,
        )?;

        Ok(())
    }

    /// Gets the first account as the calculator account, after
    /// checking it's a writable data account owned by this program.
    fn calculator_account<'a, 'info>(
        accounts: &'a [AccountInfo<'info>],
        program_id: &Pubkey,
    ) -> Result<&'a AccountInfo<'info>, ProgramError> {
        let calculator = next_account_info(&mut accounts.iter())?;
        if calculator.owner != program_id {
            msg!("Calculator account should be owned by the calculator program.");
            return Err(ProgramError::IncorrectProgramId);
        }
        if calculator.executable {
            msg!("Calculator account should not be executable.");
            return Err(ProgramError::InvalidAccountData);
        }
        if !calculator.is_writable {
            msg!("Calculator account should be writable.");
            return Err(ProgramError::InvalidAccountData);
        }
        if calculator.data_len() != Calculator::LEN {
            msg!(
                "Calculator account should have {} bytes of data.",
                Calculator::LEN
            );
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(calculator)
    }
}
