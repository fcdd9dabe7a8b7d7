//! Focus command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct FocusAssetConfig {
    pub asset_id: String,
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub exclude_control: bool,
    pub exclude_reference: bool,
    pub exclude_inferred: bool,
    pub max_cycles: Option<usize>,
    pub domains: bool,
}

impl FocusAssetConfig {
    pub fn builder() -> FocusAssetConfigBuilder {
        FocusAssetConfigBuilder::new()
    }
}

impl_builder! {
    FocusAssetConfigBuilder => FocusAssetConfig {
        with_asset_id => asset_id: String,
        with_paths => paths: Vec<PathBuf>,
        with_format => format: OutputFormat,
        with_exclude_control => exclude_control: bool,
        with_exclude_reference => exclude_reference: bool,
        with_exclude_inferred => exclude_inferred: bool,
        with_max_cycles => max_cycles: Option<usize>,
        with_domains => domains: bool,
    }
}
