use crate::domain::model::{Input, NumberReport};
use serde::{Deserialize, Serialize};

/// Expected transformation results for an accepted case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedValues {
    pub reversed: u64,
    pub digit_sum: u32,
    pub incremented: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expectation {
    Accept(ExpectedValues),
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationCase {
    pub description: String,
    pub input: Input,
    pub expectation: Expectation,
}

impl VerificationCase {
    pub fn accept(
        description: impl Into<String>,
        input: impl Into<Input>,
        expected: ExpectedValues,
    ) -> Self {
        Self {
            description: description.into(),
            input: input.into(),
            expectation: Expectation::Accept(expected),
        }
    }

    pub fn reject(description: impl Into<String>, input: impl Into<Input>) -> Self {
        Self {
            description: description.into(),
            input: input.into(),
            expectation: Expectation::Reject,
        }
    }
}

/// One field whose computed value differs from the expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub field: &'static str,
    pub expected: u64,
    pub actual: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// Accepted with matching values, or rejected as expected.
    Passed { report: Option<NumberReport> },
    Mismatched { mismatches: Vec<Mismatch> },
    UnexpectedRejection { message: String },
    UnexpectedAcceptance { report: NumberReport },
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            CaseOutcome::Passed { .. } => "passed",
            CaseOutcome::Mismatched { .. } => "mismatched",
            CaseOutcome::UnexpectedRejection { .. } => "unexpected_rejection",
            CaseOutcome::UnexpectedAcceptance { .. } => "unexpected_acceptance",
        }
    }

    pub fn detail(&self) -> String {
        match self {
            CaseOutcome::Passed { report: Some(report) } => format!(
                "reversed={} digit_sum={} incremented={}",
                report.reversed, report.digit_sum, report.incremented
            ),
            CaseOutcome::Passed { report: None } => "correctly rejected".to_string(),
            CaseOutcome::Mismatched { mismatches } => mismatches
                .iter()
                .map(|m| format!("{}: expected {}, got {}", m.field, m.expected, m.actual))
                .collect::<Vec<_>>()
                .join("; "),
            CaseOutcome::UnexpectedRejection { message } => format!("rejected: {}", message),
            CaseOutcome::UnexpectedAcceptance { report } => {
                format!("should have been rejected but produced {}", report.original)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    pub case: VerificationCase,
    pub outcome: CaseOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuiteReport {
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}
