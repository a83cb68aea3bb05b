//! Digit arithmetic on non-negative integers.
//!
//! Every function walks the decimal digits least-significant first using
//! `% 10` and `/ 10`; no string conversion is involved. Results that can
//! grow past the input width (reversal, increment) accumulate in `u64`,
//! which holds any transformation of a `u32`.

/// Decimal digits of a number, least-significant first.
///
/// Zero yields no digits, mirroring the `while n > 0` extraction loop.
#[derive(Debug, Clone)]
pub struct Digits {
    remaining: u32,
}

impl Digits {
    pub fn new(n: u32) -> Self {
        Self { remaining: n }
    }
}

impl Iterator for Digits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let digit = self.remaining % 10;
        self.remaining /= 10;
        Some(digit)
    }
}

/// Reverses the decimal digits of `n`.
///
/// Trailing zeros of `n` become leading zeros of the result and vanish:
/// `reverse_digits(10000) == 1`.
pub fn reverse_digits(n: u32) -> u64 {
    Digits::new(n).fold(0u64, |acc, digit| acc * 10 + u64::from(digit))
}

pub fn sum_digits(n: u32) -> u32 {
    Digits::new(n).sum()
}

/// Adds 1 to every digit modulo 10, keeping each digit at its position.
///
/// A leading 9 wraps to 0, so `increment_digits_with_wrap(99999) == 0`.
pub fn increment_digits_with_wrap(n: u32) -> u64 {
    let mut result = 0u64;
    let mut position = 1u64;
    for digit in Digits::new(n) {
        let new_digit = u64::from((digit + 1) % 10);
        result += new_digit * position;
        position *= 10;
    }
    result
}
