use solana_calculator::auth::AuthorizationContext;
use solana_calculator::error::CalculatorError;
use solana_calculator::handler;
use solana_calculator::instruction;
use solana_calculator::processor::Processor;
use solana_calculator::state::Calculator;
use solana_calculator::store::{MemoryStore, RecordStore};
use solana_program::{
    account_info::AccountInfo, instruction::Instruction, program_error::ProgramError,
    program_pack::Pack, pubkey::Pubkey, system_program,
};

const GREETING: &str = "Welcome to Solana";

/// Runs the instruction against the given accounts, in the order of
/// the instruction account metas.
fn process(ix: &Instruction, accounts: &[AccountInfo]) -> Result<(), ProgramError> {
    let accounts: Vec<_> = ix
        .accounts
        .iter()
        .map(|meta| {
            accounts
                .iter()
                .find(|account| *account.key == meta.pubkey)
                .cloned()
                .unwrap()
        })
        .collect();
    Processor::process(&ix.program_id, &accounts, &ix.data)
}

#[test]
fn calculator() {
    let program_id = solana_calculator::id();
    let system = system_program::id();
    let (user_key, calc_key) = (Pubkey::new_unique(), Pubkey::new_unique());
    let (mut user_lamports, mut calc_lamports) = (1_000_000_000, 10_000_000);
    let mut user_data = vec![];
    let mut calc_data = vec![0u8; Calculator::LEN];
    let accounts = [
        AccountInfo::new(
            &user_key,
            true,
            true,
            &mut user_lamports,
            &mut user_data,
            &system,
            false,
            0,
        ),
        AccountInfo::new(
            &calc_key,
            true,
            true,
            &mut calc_lamports,
            &mut calc_data,
            &program_id,
            false,
            0,
        ),
    ];
    let fetch = || Calculator::unpack(&accounts[1].data.borrow()).unwrap();

    // Creates a calculator.
    let ix = instruction::create(&program_id, &user_key, &calc_key, GREETING.to_string()).unwrap();
    process(&ix, &accounts).unwrap();
    let calc = fetch();
    assert_eq!(calc.greeting(), GREETING);
    assert_eq!(calc.owner(), &user_key);
    assert_eq!(calc.result(), 0);
    assert_eq!(calc.remainder(), 0);

    // Adds two numbers.
    process(&instruction::add(&program_id, &calc_key, 2, 3).unwrap(), &accounts).unwrap();
    assert_eq!(fetch().result(), 5);
    assert_eq!(fetch().greeting(), GREETING);

    // Multiplies two numbers.
    process(&instruction::multiply(&program_id, &calc_key, 2, 3).unwrap(), &accounts).unwrap();
    assert_eq!(fetch().result(), 6);
    assert_eq!(fetch().greeting(), GREETING);

    // Subtracts two numbers.
    process(&instruction::subtract(&program_id, &calc_key, 32, 33).unwrap(), &accounts).unwrap();
    assert_eq!(fetch().result(), -1);
    assert_eq!(fetch().greeting(), GREETING);

    // Divides two numbers.
    process(&instruction::divide(&program_id, &calc_key, 10, 3).unwrap(), &accounts).unwrap();
    assert_eq!(fetch().result(), 3);
    assert_eq!(fetch().remainder(), 1);
    assert_eq!(fetch().greeting(), GREETING);

    // Failed instructions leave the calculator untouched.
    let before = fetch();
    assert_eq!(
        process(&instruction::divide(&program_id, &calc_key, 10, 0).unwrap(), &accounts),
        Err(CalculatorError::DivideByZero.into()),
    );
    assert_eq!(
        process(&instruction::add(&program_id, &calc_key, i64::MAX, 1).unwrap(), &accounts),
        Err(CalculatorError::ArithmeticOverflow.into()),
    );
    assert_eq!(
        process(&ix, &accounts),
        Err(CalculatorError::AlreadyExists.into())
    );
    assert_eq!(fetch(), before);
}

#[test]
fn calculators_are_independent() {
    let mut store = MemoryStore::new();
    let owner = Pubkey::new_unique();
    let auth = AuthorizationContext::new([owner]);
    let (first, second) = (Pubkey::new_unique(), Pubkey::new_unique());

    handler::create(&mut store, &first, &auth, &owner, "first".to_string()).unwrap();
    handler::create(&mut store, &second, &auth, &owner, "second".to_string()).unwrap();
    handler::multiply(&mut store, &first, -4, 5).unwrap();
    handler::divide(&mut store, &second, -7, 2).unwrap();

    let first = handler::query(&store, &first).unwrap();
    let second = handler::query(&store, &second).unwrap();
    assert_eq!((first.greeting(), first.result(), first.remainder()), ("first", -20, 0));
    assert_eq!((second.greeting(), second.result(), second.remainder()), ("second", -3, -1));
    assert_eq!(store.len(), 2);
}

#[test]
fn greeting_survives_arithmetic() {
    use CalculatorError::{ArithmeticOverflow, DivideByZero};

    let mut store = MemoryStore::new();
    let owner = Pubkey::new_unique();
    let id = Pubkey::new_unique();
    let auth = AuthorizationContext::new([owner]);
    handler::create(&mut store, &id, &auth, &owner, GREETING.to_string()).unwrap();

    // (a, b, a + b, a - b, a * b, (a / b, a % b))
    let cases = [
        (0, 0, Ok(0), Ok(0), Ok(0), Err(DivideByZero)),
        (1, -1, Ok(0), Ok(2), Ok(-1), Ok((-1, 0))),
        (-17, 4, Ok(-13), Ok(-21), Ok(-68), Ok((-4, -1))),
        (
            i64::MAX,
            1,
            Err(ArithmeticOverflow),
            Ok(i64::MAX - 1),
            Ok(i64::MAX),
            Ok((i64::MAX, 0)),
        ),
        (
            i64::MIN,
            -1,
            Err(ArithmeticOverflow),
            Ok(i64::MIN + 1),
            Err(ArithmeticOverflow),
            Err(ArithmeticOverflow),
        ),
        (100, 0, Ok(100), Ok(100), Ok(0), Err(DivideByZero)),
    ];
    for (a, b, sum, difference, product, division) in cases {
        assert_eq!(
            handler::add(&mut store, &id, a, b).map(|calc| calc.result()),
            sum
        );
        assert_eq!(
            handler::subtract(&mut store, &id, a, b).map(|calc| calc.result()),
            difference
        );
        assert_eq!(
            handler::multiply(&mut store, &id, a, b).map(|calc| calc.result()),
            product
        );
        assert_eq!(
            handler::divide(&mut store, &id, a, b).map(|calc| (calc.result(), calc.remainder())),
            division
        );
        assert_eq!(store.load(&id).unwrap().greeting(), GREETING);
    }
}
