//! # Configuration Module
//!
//! This module provides configuration structures for all lineage-lens
//! commands. Each command has its own config module with builder patterns
//! for easy construction.
//!
//! ## Command Configurations
//!
//! - **ScanCyclesConfig**: Configuration for the `scan` command to detect
//!   cycles
//! - **FocusAssetConfig**: Configuration for the `focus` command to examine
//!   specific assets
//! - **TraceConfig**: Configuration for the `trace` command for dependency
//!   queries
//! - **GraphOptions**: Configuration for the `chart` command to visualize
//!   lineage
//! - **ImpactConfig**: Configuration for the `impact` command for change
//!   management
//!
//! ## Example
//!
//! ```
//! use lineage_lens::cli::{GraphFormat, OutputFormat};
//! use lineage_lens::config::{GraphOptions, ScanCyclesConfig};
//!
//! // Each configuration struct provides a builder pattern with with_*
//! // methods for each field
//!
//! // Example: Create a ScanCyclesConfig
//! let builder = ScanCyclesConfig::builder()
//!     .with_paths(vec![".".into()])
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true);
//!
//! // Example: Create a GraphOptions config
//! let graph_builder = GraphOptions::builder()
//!     .with_paths(vec![".".into()])
//!     .with_format(GraphFormat::Dot)
//!     .with_highlight_cycles(true);
//! ```

pub mod affected;
pub mod analyze;
pub mod check;
pub mod deps;
pub mod graph;

pub use affected::ImpactConfig;
pub use analyze::FocusAssetConfig;
pub use check::ScanCyclesConfig;
pub use deps::TraceConfig;
pub use graph::GraphOptions;
