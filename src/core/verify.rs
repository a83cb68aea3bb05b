use crate::core::machine::NumberMachine;
use crate::domain::model::NumberReport;
use crate::domain::verification::{
    CaseOutcome, CaseResult, Expectation, ExpectedValues, Mismatch, SuiteReport, VerificationCase,
};
use crate::utils::error::MachineError;

/// An ordered list of fixture cases run against a [`NumberMachine`].
#[derive(Debug, Clone, Default)]
pub struct VerificationSuite {
    cases: Vec<VerificationCase>,
}

impl VerificationSuite {
    pub fn new(cases: Vec<VerificationCase>) -> Self {
        Self { cases }
    }

    /// The reference fixture table: six accepted numbers and five rejections.
    pub fn builtin() -> Self {
        let accept = |description: &str, number: i64, reversed, digit_sum, incremented| {
            VerificationCase::accept(
                description,
                number,
                ExpectedValues {
                    reversed,
                    digit_sum,
                    incremented,
                },
            )
        };

        Self::new(vec![
            accept("Basic example", 12345, 54321, 15, 23456),
            accept("Example from problem", 12391, 19321, 16, 23402),
            accept("All nines", 99999, 99999, 45, 0),
            accept("One followed by zeros", 10000, 1, 1, 21111),
            accept("Reverse of basic example", 54321, 12345, 15, 65432),
            accept("All eights", 88888, 88888, 40, 99999),
            VerificationCase::reject("Four-digit number", 1234i64),
            VerificationCase::reject("Six-digit number", 123456i64),
            VerificationCase::reject("Negative number", -12345i64),
            VerificationCase::reject("String instead of number", "12345"),
            VerificationCase::reject("Float instead of integer", 12.345),
        ])
    }

    pub fn extend(&mut self, cases: impl IntoIterator<Item = VerificationCase>) {
        self.cases.extend(cases);
    }

    pub fn cases(&self) -> &[VerificationCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn run(&self, machine: &NumberMachine) -> SuiteReport {
        tracing::info!("Running {} verification cases", self.cases.len());

        let results = self
            .cases
            .iter()
            .map(|case| {
                let outcome = evaluate(machine, case);
                if outcome.is_pass() {
                    tracing::debug!("✓ {}: {}", case.description, outcome.detail());
                } else {
                    tracing::warn!("✗ {}: {}", case.description, outcome.detail());
                }
                CaseResult {
                    case: case.clone(),
                    outcome,
                }
            })
            .collect();

        let report = SuiteReport { results };
        tracing::info!(
            "Verification finished: {} passed, {} failed",
            report.passed(),
            report.failed()
        );
        report
    }
}

fn evaluate(machine: &NumberMachine, case: &VerificationCase) -> CaseOutcome {
    let processed = machine.process_number(case.input.clone());
    match (case.expectation, processed) {
        (Expectation::Accept(expected), Ok(report)) => {
            let mismatches = compare(&expected, &report);
            if mismatches.is_empty() {
                CaseOutcome::Passed {
                    report: Some(report),
                }
            } else {
                CaseOutcome::Mismatched { mismatches }
            }
        }
        (Expectation::Accept(_), Err(err)) => CaseOutcome::UnexpectedRejection {
            message: rejection_message(err),
        },
        (Expectation::Reject, Ok(report)) => CaseOutcome::UnexpectedAcceptance { report },
        (Expectation::Reject, Err(_)) => CaseOutcome::Passed { report: None },
    }
}

fn compare(expected: &ExpectedValues, report: &NumberReport) -> Vec<Mismatch> {
    let checks = [
        ("reversed", expected.reversed, report.reversed),
        (
            "digit_sum",
            u64::from(expected.digit_sum),
            u64::from(report.digit_sum),
        ),
        ("incremented", expected.incremented, report.incremented),
    ];

    checks
        .into_iter()
        .filter(|(_, expected, actual)| expected != actual)
        .map(|(field, expected, actual)| Mismatch {
            field,
            expected,
            actual,
        })
        .collect()
}

fn rejection_message(err: MachineError) -> String {
    match err {
        MachineError::ValidationError { message } => message,
        other => other.to_string(),
    }
}
