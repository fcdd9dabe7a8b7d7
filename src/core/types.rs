//! Core type definitions
//!
//! Basic enumerations shared by the snapshot format, the lineage graph,
//! and the reports.

use serde::{Deserialize, Serialize};

/// Kind of cataloged asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Table,
    View,
    Pipeline,
    File,
    Service,
    /// A catalog domain grouping assets, used for domain-level graphs
    Domain,
    Unknown,
}

impl Default for AssetKind {
    fn default() -> Self {
        AssetKind::Unknown
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Table => write!(f, "table"),
            AssetKind::View => write!(f, "view"),
            AssetKind::Pipeline => write!(f, "pipeline"),
            AssetKind::File => write!(f, "file"),
            AssetKind::Service => write!(f, "service"),
            AssetKind::Domain => write!(f, "domain"),
            AssetKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Kind of dependency edge between assets
///
/// Data edges are hard data-flow dependencies and are always included in
/// analysis. Control edges come from orchestration triggers; reference
/// edges from documentation and metadata links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Data,
    Control,
    Reference,
}

impl Default for EdgeKind {
    fn default() -> Self {
        EdgeKind::Data
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Data => write!(f, "data"),
            EdgeKind::Control => write!(f, "control"),
            EdgeKind::Reference => write!(f, "reference"),
        }
    }
}
