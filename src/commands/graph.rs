//! Chart command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::LineageLensError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, LineageLensError> {
        match command {
            Commands::Chart {
                common,
                format,
                output,
                highlight_cycles,
                show_edges,
            } => GraphOptions::builder()
                .with_paths(common.get_paths())
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .with_show_edges(show_edges)
                .with_exclude_control(common.exclude_control)
                .with_exclude_reference(common.exclude_reference)
                .with_exclude_inferred(common.exclude_inferred)
                .build(),
            _ => Err(LineageLensError::ConfigurationError {
                message: "Invalid command type for GraphOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the chart command for rendering the lineage graph
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse chart command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
