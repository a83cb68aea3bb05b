use crate::core::digits::{increment_digits_with_wrap, reverse_digits, sum_digits};
use crate::domain::model::{FiveDigit, Input, NumberReport};
use crate::utils::error::{MachineError, Result};

/// Applies the digit transformations to five-digit integers.
///
/// Stateless; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberMachine;

impl NumberMachine {
    pub fn new() -> Self {
        Self
    }

    /// True when `input` is an integer in `[10000, 99999]`.
    pub fn validate(&self, input: &Input) -> bool {
        FiveDigit::from_input(input).is_some()
    }

    pub fn reverse_digits(&self, number: FiveDigit) -> u64 {
        reverse_digits(number.get())
    }

    pub fn sum_digits(&self, number: FiveDigit) -> u32 {
        sum_digits(number.get())
    }

    pub fn increment_digits_with_wrap(&self, number: FiveDigit) -> u64 {
        increment_digits_with_wrap(number.get())
    }

    /// Validates `input` and computes all three transformations.
    pub fn process_number(&self, input: impl Into<Input>) -> Result<NumberReport> {
        let input = input.into();
        let Some(number) = FiveDigit::from_input(&input) else {
            tracing::debug!("Rejected {} input {}", input.kind(), input);
            return Err(MachineError::validation());
        };

        let report = NumberReport {
            original: number.get(),
            reversed: self.reverse_digits(number),
            digit_sum: self.sum_digits(number),
            incremented: self.increment_digits_with_wrap(number),
        };
        tracing::debug!("Processed {}: {:?}", number, report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let machine = NumberMachine::new();
        assert!(machine.validate(&Input::Integer(10000)));
        assert!(machine.validate(&Input::Integer(99999)));
        assert!(!machine.validate(&Input::Integer(1234)));
        assert!(!machine.validate(&Input::Integer(123456)));
        assert!(!machine.validate(&Input::Integer(-12345)));
        assert!(!machine.validate(&Input::Text("12345".to_string())));
        assert!(!machine.validate(&Input::Float(12.345)));
    }

    #[test]
    fn test_process_number() {
        let report = NumberMachine::new().process_number(12391).unwrap();
        assert_eq!(
            report,
            NumberReport {
                original: 12391,
                reversed: 19321,
                digit_sum: 16,
                incremented: 23402,
            }
        );
    }

    #[test]
    fn test_process_number_rejects_four_digits() {
        let err = NumberMachine::new().process_number(1234).unwrap_err();
        assert!(matches!(err, MachineError::ValidationError { .. }));
    }

    #[test]
    fn test_process_number_rejects_whole_float() {
        assert!(NumberMachine::new().process_number(12345.0).is_err());
    }
}
