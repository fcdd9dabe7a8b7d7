//! Focus command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::FocusAssetConfig;
use crate::error::LineageLensError;

impl FromCommand for FocusAssetConfig {
    fn from_command(command: Commands) -> Result<Self, LineageLensError> {
        match command {
            Commands::Focus {
                asset_id,
                common,
                format,
                cycle_display,
                domains,
            } => FocusAssetConfig::builder()
                .with_asset_id(asset_id)
                .with_paths(common.get_paths())
                .with_format(format.format)
                .with_exclude_control(common.exclude_control)
                .with_exclude_reference(common.exclude_reference)
                .with_exclude_inferred(common.exclude_inferred)
                .with_max_cycles(cycle_display.max_cycles)
                .with_domains(domains)
                .build(),
            _ => Err(LineageLensError::ConfigurationError {
                message: "Invalid command type for FocusAssetConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(FocusAssetConfig);

/// Execute the focus command for analyzing cycles around one asset
pub fn execute_analyze_command(command: Commands) -> Result<()> {
    let config = FocusAssetConfig::from_command(command)
        .wrap_err("Failed to parse focus command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::analyze::AnalyzeExecutor;
    AnalyzeExecutor::execute(config)
}
