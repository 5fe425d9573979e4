//! Calculator record stores.
//!
//! Handlers see the calculator records only through [`RecordStore`],
//! either backed by the program owned account on chain or by the
//! memory for the off-chain simulation.

use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use solana_program::{
    account_info::AccountInfo,
    program_pack::{IsInitialized, Pack},
    pubkey::Pubkey,
};

use crate::error::CalculatorError;
use crate::state::Calculator;

/// A calculator record store keyed by the calculator address.
pub trait RecordStore {
    /// Loads the initialized calculator.
    fn load(&self, id: &Pubkey) -> Result<Calculator, CalculatorError>;

    /// Stores the new calculator, failing if there is one already.
    fn create(&mut self, id: &Pubkey, calc: &Calculator) -> Result<(), CalculatorError>;

    /// Overwrites the existing calculator.
    fn save(&mut self, id: &Pubkey, calc: &Calculator) -> Result<(), CalculatorError>;
}

/// An in-memory record store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<Pubkey, Calculator>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of the calculators.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if there is no calculator.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, id: &Pubkey) -> Result<Calculator, CalculatorError> {
        self.records
            .get(id)
            .cloned()
            .ok_or(CalculatorError::NotFound)
    }

    fn create(&mut self, id: &Pubkey, calc: &Calculator) -> Result<(), CalculatorError> {
        if self.records.contains_key(id) {
            return Err(CalculatorError::AlreadyExists);
        }
        self.records.insert(*id, calc.clone());
        Ok(())
    }

    fn save(&mut self, id: &Pubkey, calc: &Calculator) -> Result<(), CalculatorError> {
        match self.records.get_mut(id) {
            None => Err(CalculatorError::NotFound),
            Some(record) => {
                *record = calc.clone();
                Ok(())
            }
        }
    }
}

/// A record store over a single calculator account.
///
/// The account address is the record identifier.  The account should
/// be allocated with [`Calculator::LEN`] bytes beforehand, and zeroed
/// data is treated as no record.
pub struct AccountStore<'a, 'info> {
    account: &'a AccountInfo<'info>,
}

impl Debug for AccountStore<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AccountStore")
            .field("account", &self.account.key)
            .finish()
    }
}

impl<'a, 'info> AccountStore<'a, 'info> {
    /// Creates a store over the calculator account.
    pub fn new(account: &'a AccountInfo<'info>) -> Self {
        Self { account }
    }

    fn unpack(&self, id: &Pubkey) -> Result<Calculator, CalculatorError> {
        if id != self.account.key {
            return Err(CalculatorError::NotFound);
        }
        let data = self
            .account
            .try_borrow_data()
            .map_err(|_| CalculatorError::ReadFailed)?;
        let data = data.get(..Calculator::LEN).ok_or(CalculatorError::ReadFailed)?;
        Calculator::unpack_unchecked(data).map_err(|_| CalculatorError::ReadFailed)
    }

    fn pack(&mut self, calc: &Calculator) -> Result<(), CalculatorError> {
        let mut data = self
            .account
            .try_borrow_mut_data()
            .map_err(|_| CalculatorError::WriteFailed)?;
        let data = data
            .get_mut(..Calculator::LEN)
            .ok_or(CalculatorError::WriteFailed)?;
        Calculator::pack(calc.clone(), data).map_err(|_| CalculatorError::WriteFailed)
    }
}

impl RecordStore for AccountStore<'_, '_> {
    fn load(&self, id: &Pubkey) -> Result<Calculator, CalculatorError> {
        let calc = self.unpack(id)?;
        if !calc.is_initialized() {
            return Err(CalculatorError::NotFound);
        }
        Ok(calc)
    }

    fn create(&mut self, id: &Pubkey, calc: &Calculator) -> Result<(), CalculatorError> {
        if id != self.account.key {
            return Err(CalculatorError::WriteFailed);
        }
        if self.unpack(id)?.is_initialized() {
            return Err(CalculatorError::AlreadyExists);
        }
        self.pack(calc)
    }

    fn save(&mut self, id: &Pubkey, calc: &Calculator) -> Result<(), CalculatorError> {
        self.load(id)?;
        self.pack(calc)
    }
}
