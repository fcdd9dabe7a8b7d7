//! Impact command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct ImpactConfig {
    pub assets: Vec<String>,
    pub show_assets: bool,
    pub direct_only: bool,
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub exclude_control: bool,
    pub exclude_reference: bool,
    pub exclude_inferred: bool,
}

impl ImpactConfig {
    pub fn builder() -> ImpactConfigBuilder {
        ImpactConfigBuilder::new()
    }
}

impl_builder! {
    ImpactConfigBuilder => ImpactConfig {
        with_assets => assets: Vec<String>,
        with_show_assets => show_assets: bool,
        with_direct_only => direct_only: bool,
        with_paths => paths: Vec<PathBuf>,
        with_format => format: OutputFormat,
        with_exclude_control => exclude_control: bool,
        with_exclude_reference => exclude_reference: bool,
        with_exclude_inferred => exclude_inferred: bool,
    }
}
