//! Trace command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct TraceConfig {
    pub asset: Option<String>,
    pub reverse: bool,
    pub transitive: bool,
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub exclude_control: bool,
    pub exclude_reference: bool,
    pub exclude_inferred: bool,
}

impl TraceConfig {
    pub fn builder() -> TraceConfigBuilder {
        TraceConfigBuilder::new()
    }
}

impl_builder! {
    TraceConfigBuilder => TraceConfig {
        with_asset => asset: Option<String>,
        with_reverse => reverse: bool,
        with_transitive => transitive: bool,
        with_paths => paths: Vec<PathBuf>,
        with_format => format: OutputFormat,
        with_exclude_control => exclude_control: bool,
        with_exclude_reference => exclude_reference: bool,
        with_exclude_inferred => exclude_inferred: bool,
    }
}
