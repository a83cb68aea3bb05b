use crate::domain::model::NumberReport;
use crate::domain::ports::ReportRenderer;
use crate::domain::verification::{CaseResult, SuiteReport};
use crate::utils::error::{MachineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

const RULE_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["text", "json", "csv", "tsv"];

    pub fn renderer(self, zero_pad: bool) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Text => Box::new(TextRenderer::new(zero_pad)),
            OutputFormat::Json => Box::new(JsonRenderer::new(true)),
            OutputFormat::Csv => Box::new(DelimitedRenderer::csv()),
            OutputFormat::Tsv => Box::new(DelimitedRenderer::tsv()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(MachineError::InvalidConfigValueError {
                field: "display.format".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    OutputFormat::NAMES.join(", ")
                ),
            }),
        }
    }
}

/// Human-readable blocks, one per result.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    zero_pad: bool,
}

impl TextRenderer {
    pub fn new(zero_pad: bool) -> Self {
        Self { zero_pad }
    }

    fn display_value(&self, value: u64) -> String {
        if self.zero_pad {
            format!("{:05}", value)
        } else {
            value.to_string()
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render_reports(&self, reports: &[NumberReport]) -> Result<String> {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();
        for report in reports {
            let _ = writeln!(out, "{}", rule);
            let _ = writeln!(out, "NUMBER MACHINE RESULTS");
            let _ = writeln!(out, "{}", rule);
            let _ = writeln!(out, "Original number: {}", report.original);
            let _ = writeln!(out, "Reversed number: {}", self.display_value(report.reversed));
            let _ = writeln!(out, "Sum of digits:   {}", report.digit_sum);
            let _ = writeln!(out, "Incremented:     {}", self.display_value(report.incremented));
            let _ = writeln!(out, "{}", rule);
        }
        Ok(out)
    }

    fn render_suite(&self, suite: &SuiteReport) -> Result<String> {
        let mut out = String::new();
        for result in &suite.results {
            let mark = if result.outcome.is_pass() { "✓" } else { "✗" };
            let _ = writeln!(
                out,
                "{} {} (input: {}): {}",
                mark,
                result.case.description,
                result.case.input,
                result.outcome.detail()
            );
        }
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        let _ = writeln!(
            out,
            "{} passed, {} failed, {} total",
            suite.passed(),
            suite.failed(),
            suite.total()
        );
        Ok(out)
    }
}

#[derive(Serialize)]
struct SuiteSummary<'a> {
    total: usize,
    passed: usize,
    failed: usize,
    results: &'a [CaseResult],
}

#[derive(Debug, Clone)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_reports(&self, reports: &[NumberReport]) -> Result<String> {
        self.to_json(reports)
    }

    fn render_suite(&self, suite: &SuiteReport) -> Result<String> {
        let summary = SuiteSummary {
            total: suite.total(),
            passed: suite.passed(),
            failed: suite.failed(),
            results: &suite.results,
        };
        self.to_json(&summary)
    }
}

/// CSV or TSV output with a header row.
#[derive(Debug, Clone)]
pub struct DelimitedRenderer {
    delimiter: u8,
}

impl DelimitedRenderer {
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }

    fn writer(&self) -> csv::Writer<Vec<u8>> {
        csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new())
    }

    fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
        let bytes = writer
            .into_inner()
            .map_err(|e| MachineError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| MachineError::IoError(std::io::Error::other(e)))
    }
}

impl ReportRenderer for DelimitedRenderer {
    fn render_reports(&self, reports: &[NumberReport]) -> Result<String> {
        let mut writer = self.writer();
        writer.write_record(["original", "reversed", "digit_sum", "incremented"])?;
        for report in reports {
            writer.write_record(&[
                report.original.to_string(),
                report.reversed.to_string(),
                report.digit_sum.to_string(),
                report.incremented.to_string(),
            ])?;
        }
        Self::finish(writer)
    }

    fn render_suite(&self, suite: &SuiteReport) -> Result<String> {
        let mut writer = self.writer();
        writer.write_record(["description", "input", "status", "detail"])?;
        for result in &suite.results {
            writer.write_record(&[
                result.case.description.clone(),
                result.case.input.to_string(),
                result.outcome.status().to_string(),
                result.outcome.detail(),
            ])?;
        }
        Self::finish(writer)
    }
}
