//! Calculator instruction handlers.
//!
//! Each handler validates everything before it touches the store,
//! and writes the store at most once, so the failed instruction
//! leaves the calculator as it was.

use solana_program::{msg, pubkey::Pubkey};

use crate::auth::AuthorizationContext;
use crate::error::CalculatorError;
use crate::state::Calculator;
use crate::store::RecordStore;

/// Creates a calculator at `id` owned by `owner`.
///
/// The `owner` should sign the instruction.
pub fn create<S: RecordStore>(
    store: &mut S,
    id: &Pubkey,
    auth: &AuthorizationContext,
    owner: &Pubkey,
    greeting: String,
) -> Result<Calculator, CalculatorError> {
    let calc = auth
        .require_signer(owner)
        .and_then(|()| Calculator::new(*owner, greeting))
        .and_then(|calc| store.create(id, &calc).map(|()| calc))
        .map_err(|e| rejected(id, e))?;

    msg!("calculator {} created by {}", id, owner);
    Ok(calc)
}

/// Sets `a + b` to the result.
pub fn add<S: RecordStore>(
    store: &mut S,
    id: &Pubkey,
    a: i64,
    b: i64,
) -> Result<Calculator, CalculatorError> {
    update(store, id, |calc| {
        let result = a.checked_add(b).ok_or(CalculatorError::ArithmeticOverflow)?;
        calc.set_result(result);
        Ok(())
    })
}

/// Sets `a - b` to the result.
pub fn subtract<S: RecordStore>(
    store: &mut S,
    id: &Pubkey,
    a: i64,
    b: i64,
) -> Result<Calculator, CalculatorError> {
    update(store, id, |calc| {
        let result = a.checked_sub(b).ok_or(CalculatorError::ArithmeticOverflow)?;
        calc.set_result(result);
        Ok(())
    })
}

/// Sets `a * b` to the result.
pub fn multiply<S: RecordStore>(
    store: &mut S,
    id: &Pubkey,
    a: i64,
    b: i64,
) -> Result<Calculator, CalculatorError> {
    update(store, id, |calc| {
        let result = a.checked_mul(b).ok_or(CalculatorError::ArithmeticOverflow)?;
        calc.set_result(result);
        Ok(())
    })
}

/// Sets the quotient and the remainder of `a / b`.
///
/// The quotient is truncated toward zero and the remainder takes
/// the sign of the dividend, e.g. `-7 / 2` gives `-3` and `-1`, so
/// that `result * b + remainder == a`.
pub fn divide<S: RecordStore>(
    store: &mut S,
    id: &Pubkey,
    a: i64,
    b: i64,
) -> Result<Calculator, CalculatorError> {
    update(store, id, |calc| {
        if b == 0 {
            return Err(CalculatorError::DivideByZero);
        }
        // `i64::MIN / -1` is the only overflow case.
        let result = a.checked_div(b).ok_or(CalculatorError::ArithmeticOverflow)?;
        let remainder = a.checked_rem(b).ok_or(CalculatorError::ArithmeticOverflow)?;
        calc.set_result(result);
        calc.set_remainder(remainder);
        Ok(())
    })
}

/// Returns the current calculator state.
pub fn query<S: RecordStore>(store: &S, id: &Pubkey) -> Result<Calculator, CalculatorError> {
    store.load(id)
}

fn update<S, F>(store: &mut S, id: &Pubkey, op: F) -> Result<Calculator, CalculatorError>
where
    S: RecordStore,
    F: FnOnce(&mut Calculator) -> Result<(), CalculatorError>,
{
    let mut calc = store.load(id).map_err(|e| rejected(id, e))?;
    op(&mut calc).map_err(|e| rejected(id, e))?;
    store.save(id, &calc).map_err(|e| rejected(id, e))?;

    msg!(
        "calculator {}: result={}, remainder={}",
        id,
        calc.result(),
        calc.remainder()
    );
    Ok(calc)
}

fn rejected(id: &Pubkey, e: CalculatorError) -> CalculatorError {
    msg!("calculator {}: {}", id, e);
    e
}
