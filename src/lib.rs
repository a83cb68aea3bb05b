pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::render::OutputFormat;
pub use config::{toml_config::MachineConfig, DisplaySettings};
pub use crate::core::{machine::NumberMachine, verify::VerificationSuite};
pub use domain::model::{FiveDigit, Input, NumberReport};
pub use utils::error::{MachineError, Result};
