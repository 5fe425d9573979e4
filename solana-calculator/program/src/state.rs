//! Calculator account state.

use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{
    program_error::ProgramError,
    program_pack::{IsInitialized, Pack, Sealed},
    pubkey::Pubkey,
};

use crate::error::CalculatorError;

/// A calculator data account.
///
/// The greeting is given once through [`Calculator::new`] and there is
/// no way to change it afterward.  The `result` and the `remainder`
/// are only updated by the instruction handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculator {
    is_initialized: bool,
    owner: Pubkey,
    greeting: String,
    result: i64,
    remainder: i64,
}

impl Calculator {
    /// A maximum greeting length in bytes.
    pub const GREETING_MAX: usize = 200;

    /// Creates a new initialized calculator state owned by `owner`.
    pub fn new(owner: Pubkey, greeting: String) -> Result<Self, CalculatorError> {
        if greeting.is_empty() || greeting.len() > Self::GREETING_MAX {
            return Err(CalculatorError::InvalidArgument);
        }
        Ok(Self {
            is_initialized: true,
            owner,
            greeting,
            result: 0,
            remainder: 0,
        })
    }

    /// An owner who created the calculator.
    pub fn owner(&self) -> &Pubkey {
        &self.owner
    }

    /// A greeting given at the creation.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// A result of the last arithmetic instruction.
    pub fn result(&self) -> i64 {
        self.result
    }

    /// A remainder of the last `divide` instruction.
    pub fn remainder(&self) -> i64 {
        self.remainder
    }

    pub(crate) fn set_result(&mut self, result: i64) {
        self.result = result;
    }

    pub(crate) fn set_remainder(&mut self, remainder: i64) {
        self.remainder = remainder;
    }
}

impl Sealed for Calculator {}

impl IsInitialized for Calculator {
    fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

impl Pack for Calculator {
    /// 1 byte for `is_initialized`, 32 bytes for the owner `Pubkey`,
    /// 8 bytes each for `result` and `remainder`, and 4 bytes of the
    /// greeting length followed by the full greeting space.
    const LEN: usize = 1 + 32 + 8 + 8 + 4 + Self::GREETING_MAX;

    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        let src = array_ref![src, 0, Calculator::LEN];
        let (is_initialized, owner, result, remainder, greeting_len, greeting) =
            array_refs![src, 1, 32, 8, 8, 4, Calculator::GREETING_MAX];

        let is_initialized = match is_initialized {
            [0] => false,
            [1] => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };
        let greeting_len = u32::from_le_bytes(*greeting_len) as usize;
        if greeting_len > Self::GREETING_MAX {
            return Err(ProgramError::InvalidAccountData);
        }
        let greeting = String::from_utf8(greeting[..greeting_len].to_vec())
            .map_err(|_| ProgramError::InvalidAccountData)?;
        if is_initialized && greeting.is_empty() {
            return Err(ProgramError::InvalidAccountData);
        }

        Ok(Self {
            is_initialized,
            owner: Pubkey::new_from_array(*owner),
            greeting,
            result: i64::from_le_bytes(*result),
            remainder: i64::from_le_bytes(*remainder),
        })
    }

    fn pack_into_slice(&self, dst: &mut [u8]) {
        let dst = array_mut_ref![dst, 0, Calculator::LEN];
        let (
            is_initialized_dst,
            owner_dst,
            result_dst,
            remainder_dst,
            greeting_len_dst,
            greeting_dst,
        ) = mut_array_refs![dst, 1, 32, 8, 8, 4, Calculator::GREETING_MAX];

        // `Calculator::new` keeps the greeting within the limit.
        let greeting = self.greeting.as_bytes();
        debug_assert!(greeting.len() <= Self::GREETING_MAX);
        let greeting_len = greeting.len().min(Self::GREETING_MAX);

        is_initialized_dst[0] = self.is_initialized as u8;
        owner_dst.copy_from_slice(self.owner.as_ref());
        *result_dst = self.result.to_le_bytes();
        *remainder_dst = self.remainder.to_le_bytes();
        *greeting_len_dst = (greeting_len as u32).to_le_bytes();
        greeting_dst[..greeting_len].copy_from_slice(&greeting[..greeting_len]);
        greeting_dst[greeting_len..].fill(0);
    }
}
