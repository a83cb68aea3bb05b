use crate::adapters::render::OutputFormat;
use crate::domain::model::Input;
use crate::domain::verification::{ExpectedValues, VerificationCase};
use crate::utils::error::{MachineError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_range, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MachineConfig {
    pub display: Option<DisplayConfig>,
    #[serde(default)]
    pub cases: Vec<CaseConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<String>,
    pub zero_pad: Option<bool>,
}

/// One `[[cases]]` entry. Exactly one of `expected` and
/// `expect_rejection = true` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    pub description: String,
    pub input: Input,
    pub expected: Option<ExpectedValues>,
    pub expect_rejection: Option<bool>,
}

impl CaseConfig {
    pub fn to_case(&self) -> Result<VerificationCase> {
        match (self.expected, self.expect_rejection.unwrap_or(false)) {
            (Some(expected), false) => Ok(VerificationCase::accept(
                self.description.clone(),
                self.input.clone(),
                expected,
            )),
            (None, true) => Ok(VerificationCase::reject(
                self.description.clone(),
                self.input.clone(),
            )),
            (Some(_), true) => Err(MachineError::InvalidConfigValueError {
                field: "cases.expect_rejection".to_string(),
                value: self.description.clone(),
                reason: "A case cannot both expect values and expect rejection".to_string(),
            }),
            (None, false) => Err(MachineError::InvalidConfigValueError {
                field: "cases.expected".to_string(),
                value: self.description.clone(),
                reason: "Set either `expected` or `expect_rejection = true`".to_string(),
            }),
        }
    }
}

impl MachineConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MachineError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MACHINE_FORMAT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MachineError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.display.as_ref().and_then(|d| d.format.as_deref()) {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    pub fn zero_pad(&self) -> bool {
        self.display
            .as_ref()
            .and_then(|d| d.zero_pad)
            .unwrap_or(false)
    }

    pub fn verification_cases(&self) -> Result<Vec<VerificationCase>> {
        self.cases.iter().map(CaseConfig::to_case).collect()
    }
}

impl Validate for MachineConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = self.display.as_ref().and_then(|d| d.format.as_deref()) {
            validate_one_of("display.format", &format.to_ascii_lowercase(), &OutputFormat::NAMES)?;
        }

        for case in &self.cases {
            validate_non_empty_string("cases.description", &case.description)?;
            if let Some(expected) = &case.expected {
                validate_range("cases.expected.digit_sum", expected.digit_sum, 0, 45)?;
            }
            case.to_case()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::verification::Expectation;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_config_with_cases() {
        let toml_content = r#"
[display]
format = "csv"
zero_pad = true

[[cases]]
description = "Example from problem"
input = 12391
expected = { reversed = 19321, digit_sum = 16, incremented = 23402 }

[[cases]]
description = "String rejected"
input = "12345"
expect_rejection = true

[[cases]]
description = "Float rejected"
input = 12.345
expect_rejection = true
"#;

        let config = MachineConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_format().unwrap(), OutputFormat::Csv);
        assert!(config.zero_pad());

        let cases = config.verification_cases().unwrap();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].input, Input::Integer(12391));
        assert!(matches!(cases[0].expectation, Expectation::Accept(_)));
        assert_eq!(cases[1].input, Input::Text("12345".to_string()));
        assert_eq!(cases[2].input, Input::Float(12.345));
        assert_eq!(cases[2].expectation, Expectation::Reject);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MachineConfig::from_toml_str("").unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert!(!config.zero_pad());
        assert!(config.verification_cases().unwrap().is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NUMBER_MACHINE_TEST_FORMAT", "tsv");

        let config = MachineConfig::from_toml_str(
            r#"
[display]
format = "${NUMBER_MACHINE_TEST_FORMAT}"
"#,
        )
        .unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Tsv);

        std::env::remove_var("NUMBER_MACHINE_TEST_FORMAT");
    }

    #[test]
    fn test_config_validation() {
        let unknown_format = MachineConfig::from_toml_str(
            r#"
[display]
format = "xml"
"#,
        )
        .unwrap();
        assert!(unknown_format.validate().is_err());

        let ambiguous_case = MachineConfig::from_toml_str(
            r#"
[[cases]]
description = "both"
input = 12345
expected = { reversed = 54321, digit_sum = 15, incremented = 23456 }
expect_rejection = true
"#,
        )
        .unwrap();
        assert!(ambiguous_case.validate().is_err());

        let missing_expectation = MachineConfig::from_toml_str(
            r#"
[[cases]]
description = "neither"
input = 12345
"#,
        )
        .unwrap();
        assert!(missing_expectation.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = MachineConfig::from_toml_str("[display\nformat = ").unwrap_err();
        assert!(matches!(err, MachineError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nformat = \"json\"\n")
            .unwrap();

        let config = MachineConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
    }
}
