//! Scan command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ScanCyclesConfig;
use crate::error::LineageLensError;

impl FromCommand for ScanCyclesConfig {
    fn from_command(command: Commands) -> Result<Self, LineageLensError> {
        match command {
            Commands::Scan {
                common,
                format,
                cycle_display,
                error_on_cycles,
                domains,
            } => ScanCyclesConfig::builder()
                .with_paths(common.get_paths())
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_exclude_control(common.exclude_control)
                .with_exclude_reference(common.exclude_reference)
                .with_exclude_inferred(common.exclude_inferred)
                .with_max_cycles(cycle_display.max_cycles)
                .with_domains(domains)
                .build(),
            _ => Err(LineageLensError::ConfigurationError {
                message: "Invalid command type for ScanCyclesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ScanCyclesConfig);

/// Execute the scan command for detecting lineage cycles
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = ScanCyclesConfig::from_command(command)
        .wrap_err("Failed to parse scan command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
