//! Signers of the current instruction.

use std::collections::BTreeSet;

use solana_program::{account_info::AccountInfo, msg, pubkey::Pubkey};

use crate::error::CalculatorError;

/// An authorization context, holding the verified signers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationContext {
    signers: BTreeSet<Pubkey>,
}

impl AuthorizationContext {
    /// Creates a context with the given signers.
    pub fn new<I>(signers: I) -> Self
    where
        I: IntoIterator<Item = Pubkey>,
    {
        Self {
            signers: signers.into_iter().collect(),
        }
    }

    /// Collects the signers out of the instruction accounts.
    ///
    /// The runtime had already verified the signatures.
    pub fn from_accounts(accounts: &[AccountInfo]) -> Self {
        Self::new(
            accounts
                .iter()
                .filter(|account| account.is_signer)
                .map(|account| *account.key),
        )
    }

    /// Checks if `key` signed the instruction.
    pub fn is_signer(&self, key: &Pubkey) -> bool {
        self.signers.contains(key)
    }

    /// Fails with `Unauthorized` unless `key` signed the instruction.
    pub fn require_signer(&self, key: &Pubkey) -> Result<(), CalculatorError> {
        if !self.is_signer(key) {
            msg!("{} should sign the instruction", key);
            return Err(CalculatorError::Unauthorized);
        }
        Ok(())
    }
}
