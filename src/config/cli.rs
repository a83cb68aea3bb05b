use crate::adapters::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "number-machine")]
#[command(about = "Reverse, sum and increment the digits of five-digit numbers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Transform one or more values
    Process {
        /// Values to process; anything other than an integer in 10000-99999 is rejected
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Output format (overrides display.format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Print reversed and incremented values five digits wide
        #[arg(long)]
        zero_pad: bool,
    },

    /// Run the verification suite
    Verify {
        /// Output format (overrides display.format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Ignore cases from the configuration file
        #[arg(long)]
        builtin_only: bool,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
