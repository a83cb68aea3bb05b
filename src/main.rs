use clap::Parser;
use number_machine::app::commands;
use number_machine::utils::{logger, validation::Validate};
use number_machine::{CliConfig, Command, DisplaySettings, MachineConfig, MachineError, NumberMachine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting number-machine");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), MachineError> {
    config.validate()?;
    let file_config = load_file_config(config)?;
    let machine = NumberMachine::new();

    match &config.command {
        Command::Process {
            values,
            format,
            zero_pad,
        } => {
            let display = DisplaySettings::resolve(&file_config, *format, *zero_pad)?;
            let output = commands::process_values(&machine, values, display)?;

            if !output.reports.is_empty() {
                print!("{}", ensure_trailing_newline(output.rendered));
            }
            for rejection in &output.rejections {
                eprintln!(
                    "❌ '{}': {}",
                    rejection.value,
                    rejection.error.user_friendly_message()
                );
            }

            // First rejection decides the exit code.
            match output.rejections.into_iter().next() {
                Some(rejection) => Err(rejection.error),
                None => Ok(()),
            }
        }
        Command::Verify {
            format,
            builtin_only,
        } => {
            let display = DisplaySettings::resolve(&file_config, *format, false)?;
            let output = commands::verify(&machine, &file_config, *builtin_only, display)?;
            print!("{}", ensure_trailing_newline(output.rendered.clone()));
            output
                .into_result()
                .map(|_| tracing::info!("✓ All verification cases passed!"))
        }
    }
}

fn load_file_config(config: &CliConfig) -> Result<MachineConfig, MachineError> {
    let Some(path) = &config.config else {
        return Ok(MachineConfig::default());
    };

    tracing::info!("📁 Loading configuration from: {}", path);
    let file_config = MachineConfig::from_file(path)?;
    file_config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");
    Ok(file_config)
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
