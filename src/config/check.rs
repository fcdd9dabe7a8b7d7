//! Scan command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the scan command
///
/// This struct contains all options for detecting and reporting circular
/// dependencies in lineage graphs.
#[derive(Debug, Clone)]
pub struct ScanCyclesConfig {
    /// Paths to search for lineage snapshots
    pub paths: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Exclude control edges from cycle detection
    pub exclude_control: bool,
    /// Exclude reference edges from cycle detection
    pub exclude_reference: bool,
    /// Exclude inferred edges from cycle detection
    pub exclude_inferred: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
    /// Check for cycles between catalog domains instead of between assets
    pub domains: bool,
}

impl ScanCyclesConfig {
    pub fn builder() -> ScanCyclesConfigBuilder {
        ScanCyclesConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ScanCyclesConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    exclude_control: Option<bool>,
    exclude_reference: Option<bool>,
    exclude_inferred: Option<bool>,
    max_cycles: Option<Option<usize>>,
    domains: Option<bool>,
}

impl ScanCyclesConfigBuilder {
    pub fn new() -> Self {
        Self {
            paths: None,
            format: None,
            error_on_cycles: None,
            exclude_control: None,
            exclude_reference: None,
            exclude_inferred: None,
            max_cycles: None,
            domains: None,
        }
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
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

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_domains(mut self, domains: bool) -> Self {
        self.domains = Some(domains);
        self
    }
}

impl crate::common::ConfigBuilder for ScanCyclesConfigBuilder {
    type Config = ScanCyclesConfig;

    fn build(self) -> Result<Self::Config, crate::error::LineageLensError> {
        Ok(ScanCyclesConfig {
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
            error_on_cycles: self.error_on_cycles.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: error_on_cycles".to_string(),
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
            max_cycles: self.max_cycles.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: max_cycles".to_string(),
                }
            })?,
            domains: self.domains.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: domains".to_string(),
                }
            })?,
        })
    }
}
