use anyhow::Result;
use number_machine::core::digits::{
    increment_digits_with_wrap, reverse_digits, sum_digits, Digits,
};
use number_machine::{FiveDigit, Input, MachineError, NumberMachine, NumberReport};

fn report(original: u32, reversed: u64, digit_sum: u32, incremented: u64) -> NumberReport {
    NumberReport {
        original,
        reversed,
        digit_sum,
        incremented,
    }
}

#[test]
fn test_literal_scenarios() -> Result<()> {
    let machine = NumberMachine::new();

    assert_eq!(machine.process_number(12345)?, report(12345, 54321, 15, 23456));
    assert_eq!(machine.process_number(12391)?, report(12391, 19321, 16, 23402));
    assert_eq!(machine.process_number(99999)?, report(99999, 99999, 45, 0));
    assert_eq!(machine.process_number(10000)?, report(10000, 1, 1, 21111));
    assert_eq!(machine.process_number(88888)?, report(88888, 88888, 40, 99999));
    assert_eq!(machine.process_number(54321)?, report(54321, 12345, 15, 65432));

    Ok(())
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let machine = NumberMachine::new();
    let invalid = [
        Input::Integer(1234),
        Input::Integer(123456),
        Input::Integer(-12345),
        Input::Text("12345".to_string()),
        Input::Float(12.345),
        Input::Float(12345.0),
    ];

    for input in invalid {
        assert!(!machine.validate(&input), "{:?} should be invalid", input);
        let err = machine.process_number(input).unwrap_err();
        assert!(matches!(err, MachineError::ValidationError { .. }));
        assert!(err.to_string().contains("10000-99999"));
    }
}

#[test]
fn test_range_edges() {
    let machine = NumberMachine::new();
    assert!(machine.process_number(9_999).is_err());
    assert!(machine.process_number(10_000).is_ok());
    assert!(machine.process_number(99_999).is_ok());
    assert!(machine.process_number(100_000).is_err());
}

fn five_digits() -> impl Iterator<Item = u32> {
    10_000..=99_999
}

fn has_zero_digit(n: u32) -> bool {
    Digits::new(n).any(|d| d == 0)
}

#[test]
fn test_double_reversal_is_identity_without_zero_digits() -> Result<()> {
    for n in five_digits().filter(|&n| !has_zero_digit(n)) {
        let once = u32::try_from(reverse_digits(n))?;
        assert_eq!(reverse_digits(once), u64::from(n), "n = {}", n);
    }
    Ok(())
}

#[test]
fn test_double_reversal_loses_trailing_zero() -> Result<()> {
    for n in five_digits().filter(|n| n % 10 == 0) {
        let once = u32::try_from(reverse_digits(n))?;
        assert_ne!(reverse_digits(once), u64::from(n), "n = {}", n);
    }
    Ok(())
}

#[test]
fn test_digit_sum_bounds_and_value() {
    for n in five_digits() {
        let expected = n / 10_000 + (n / 1_000) % 10 + (n / 100) % 10 + (n / 10) % 10 + n % 10;
        let sum = sum_digits(n);
        assert_eq!(sum, expected, "n = {}", n);
        assert!((1..=45).contains(&sum));
    }
}

#[test]
fn test_incrementing_twice_adds_two_per_digit() -> Result<()> {
    // A leading 9 becomes a leading zero after one pass and drops out.
    for n in five_digits().filter(|&n| n < 90_000) {
        let once = u32::try_from(increment_digits_with_wrap(n))?;
        let twice = increment_digits_with_wrap(once);

        let mut expected = 0u64;
        let mut position = 1u64;
        for digit in Digits::new(n) {
            expected += u64::from((digit + 2) % 10) * position;
            position *= 10;
        }

        assert_eq!(twice, expected, "n = {}", n);
    }
    Ok(())
}

#[test]
fn test_leading_nine_wrap_drops_a_digit() -> Result<()> {
    let once = increment_digits_with_wrap(91234);
    assert_eq!(once, 2345);
    assert_eq!(increment_digits_with_wrap(u32::try_from(once)?), 3456);
    Ok(())
}

#[test]
fn test_machine_methods_match_free_functions() {
    let machine = NumberMachine::new();
    for n in [10000u32, 12345, 50505, 99999] {
        let number = FiveDigit::new(n).unwrap();
        assert_eq!(machine.reverse_digits(number), reverse_digits(n));
        assert_eq!(machine.sum_digits(number), sum_digits(n));
        assert_eq!(
            machine.increment_digits_with_wrap(number),
            increment_digits_with_wrap(n)
        );
    }
}

#[test]
fn test_machine_is_shareable_across_threads() {
    let machine = NumberMachine::new();
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            std::thread::spawn(move || {
                machine
                    .process_number(10_000 + i * 20_000)
                    .map(|r| r.digit_sum)
            })
        })
        .collect();

    let sums: Vec<u32> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(sums, vec![1, 3, 5, 7]);
}
