use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest accepted five-digit value.
pub const MIN_FIVE_DIGIT: u32 = 10_000;
/// Largest accepted five-digit value.
pub const MAX_FIVE_DIGIT: u32 = 99_999;

/// A value handed to the machine before its type has been checked.
///
/// Deserializes untagged, so a TOML or JSON `12345` becomes `Integer`,
/// `12.345` becomes `Float` and `"12345"` becomes `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Input {
    /// Classifies a raw command-line token.
    pub fn from_token(token: &str) -> Self {
        let trimmed = token.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            Input::Integer(value)
        } else if let Ok(value) = trimmed.parse::<f64>() {
            Input::Float(value)
        } else {
            Input::Text(token.to_string())
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Input::Integer(_) => "integer",
            Input::Float(_) => "float",
            Input::Text(_) => "text",
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Integer(value) => write!(f, "{}", value),
            Input::Float(value) => write!(f, "{}", value),
            Input::Text(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Input::Integer(value)
    }
}

impl From<i32> for Input {
    fn from(value: i32) -> Self {
        Input::Integer(i64::from(value))
    }
}

impl From<u32> for Input {
    fn from(value: u32) -> Self {
        Input::Integer(i64::from(value))
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Float(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

/// An integer known to lie in `[10000, 99999]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FiveDigit(u32);

impl FiveDigit {
    pub fn new(value: u32) -> Option<Self> {
        (MIN_FIVE_DIGIT..=MAX_FIVE_DIGIT)
            .contains(&value)
            .then_some(FiveDigit(value))
    }

    pub fn from_input(input: &Input) -> Option<Self> {
        match input {
            Input::Integer(value) => u32::try_from(*value).ok().and_then(FiveDigit::new),
            Input::Float(_) | Input::Text(_) => None,
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FiveDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three derived values of one accepted number.
///
/// `reversed` and `incremented` keep integer semantics: reversing 10000
/// gives 1 and incrementing 99999 gives 0. Zero-padding is a rendering
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberReport {
    pub original: u32,
    pub reversed: u64,
    pub digit_sum: u32,
    pub incremented: u64,
}
