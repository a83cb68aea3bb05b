use crate::config::toml_config::MachineConfig;
use crate::config::DisplaySettings;
use crate::core::machine::NumberMachine;
use crate::core::verify::VerificationSuite;
use crate::domain::model::{Input, NumberReport};
use crate::domain::verification::SuiteReport;
use crate::utils::error::{MachineError, Result};

/// A value the machine refused, with the error it raised.
#[derive(Debug)]
pub struct Rejection {
    pub value: String,
    pub error: MachineError,
}

#[derive(Debug)]
pub struct ProcessOutput {
    pub reports: Vec<NumberReport>,
    pub rendered: String,
    pub rejections: Vec<Rejection>,
}

/// Processes every raw value, keeping accepted reports in input order.
pub fn process_values(
    machine: &NumberMachine,
    values: &[String],
    display: DisplaySettings,
) -> Result<ProcessOutput> {
    let mut reports = Vec::with_capacity(values.len());
    let mut rejections = Vec::new();

    for value in values {
        let input = Input::from_token(value);
        match machine.process_number(input) {
            Ok(report) => reports.push(report),
            Err(error) => {
                tracing::warn!("Rejected '{}': {}", value, error);
                rejections.push(Rejection {
                    value: value.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        "Processed {} values ({} accepted, {} rejected)",
        values.len(),
        reports.len(),
        rejections.len()
    );

    let rendered = display
        .format
        .renderer(display.zero_pad)
        .render_reports(&reports)?;

    Ok(ProcessOutput {
        reports,
        rendered,
        rejections,
    })
}

#[derive(Debug)]
pub struct VerifyOutput {
    pub report: SuiteReport,
    pub rendered: String,
}

impl VerifyOutput {
    pub fn into_result(self) -> Result<String> {
        if self.report.all_passed() {
            Ok(self.rendered)
        } else {
            Err(MachineError::VerificationFailed {
                failed: self.report.failed(),
                total: self.report.total(),
            })
        }
    }
}

/// Runs the built-in cases followed by any configured ones.
pub fn verify(
    machine: &NumberMachine,
    config: &MachineConfig,
    builtin_only: bool,
    display: DisplaySettings,
) -> Result<VerifyOutput> {
    let mut suite = VerificationSuite::builtin();
    if !builtin_only {
        let configured = config.verification_cases()?;
        tracing::debug!("Adding {} configured cases", configured.len());
        suite.extend(configured);
    }

    let report = suite.run(machine);
    let rendered = display
        .format
        .renderer(display.zero_pad)
        .render_suite(&report)?;

    Ok(VerifyOutput { report, rendered })
}
