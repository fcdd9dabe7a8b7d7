//! Chart command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;

/// Configuration for the chart command
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Paths to search for lineage snapshots
    pub paths: Vec<PathBuf>,
    /// Graph output format
    pub format: GraphFormat,
    /// Output file (stdout if not set)
    pub output: Option<PathBuf>,
    /// Highlight cycles in the rendered graph
    pub highlight_cycles: bool,
    /// Include per-edge details
    pub show_edges: bool,
    /// Exclude control edges
    pub exclude_control: bool,
    /// Exclude reference edges
    pub exclude_reference: bool,
    /// Exclude inferred edges
    pub exclude_inferred: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
    show_edges: Option<bool>,
    exclude_control: Option<bool>,
    exclude_reference: Option<bool>,
    exclude_inferred: Option<bool>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }

    pub fn with_show_edges(mut self, show_edges: bool) -> Self {
        self.show_edges = Some(show_edges);
        self
    }

    pub fn with_exclude_control(mut self, exclude_control: bool) -> Self {
        self.exclude_control = Some(exclude_control);
        self
    }

    pub fn with_exclude_reference(mut self, exclude_reference: bool) -> Self {
        self.exclude_reference = Some(exclude_reference);
        self
    }

    pub fn with_exclude_inferred(mut self, exclude_inferred: bool) -> Self {
        self.exclude_inferred = Some(exclude_inferred);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::LineageLensError> {
        Ok(GraphOptions {
            paths: self.paths.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: paths".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            output: self.output.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
            highlight_cycles: self.highlight_cycles.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: highlight_cycles".to_string(),
                }
            })?,
            show_edges: self.show_edges.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: show_edges".to_string(),
                }
            })?,
            exclude_control: self.exclude_control.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: exclude_control".to_string(),
                }
            })?,
            exclude_reference: self.exclude_reference.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: exclude_reference".to_string(),
                }
            })?,
            exclude_inferred: self.exclude_inferred.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: exclude_inferred".to_string(),
                }
            })?,
        })
    }
}
