#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::render::OutputFormat;
use crate::utils::error::Result;
use toml_config::MachineConfig;

/// Display options after layering flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub format: OutputFormat,
    pub zero_pad: bool,
}

impl DisplaySettings {
    /// Flags win over the file; the file wins over defaults.
    pub fn resolve(
        file: &MachineConfig,
        format_flag: Option<OutputFormat>,
        zero_pad_flag: bool,
    ) -> Result<Self> {
        let format = match format_flag {
            Some(format) => format,
            None => file.output_format()?,
        };
        Ok(Self {
            format,
            zero_pad: zero_pad_flag || file.zero_pad(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let file = MachineConfig::from_toml_str("[display]\nformat = \"csv\"\n").unwrap();

        let from_file = DisplaySettings::resolve(&file, None, false).unwrap();
        assert_eq!(from_file.format, OutputFormat::Csv);
        assert!(!from_file.zero_pad);

        let overridden = DisplaySettings::resolve(&file, Some(OutputFormat::Json), true).unwrap();
        assert_eq!(overridden.format, OutputFormat::Json);
        assert!(overridden.zero_pad);
    }
}
