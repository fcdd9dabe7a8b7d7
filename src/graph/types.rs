//! Core graph types
//!
//! This module contains the fundamental data structures used in the
//! lineage graph.

use crate::core::{AssetKind, EdgeKind};
use crate::impl_builder;

/// Represents an asset node in the lineage graph
///
/// At domain granularity the node stands for a whole catalog and carries
/// [`AssetKind::Domain`].
#[derive(Debug, Clone)]
pub struct AssetNode {
    id: String,
    name: String,
    kind: AssetKind,
}

impl AssetNode {
    pub fn builder() -> AssetNodeBuilder {
        AssetNodeBuilder::new()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }
}

impl_builder! {
    AssetNodeBuilder => AssetNode {
        with_id => id: String,
        with_name => name: String,
        with_kind => kind: AssetKind,
    }
}

/// Represents a dependency edge between assets
///
/// Data flows from `from_asset` into `to_asset`.
#[derive(Debug, Clone)]
pub struct FlowEdge {
    from_asset: String,
    to_asset: String,
    kind: EdgeKind,
    inferred_by: Option<String>,
}

impl FlowEdge {
    pub fn builder() -> FlowEdgeBuilder {
        FlowEdgeBuilder::new()
    }

    pub fn from_asset(&self) -> &str {
        &self.from_asset
    }

    pub fn to_asset(&self) -> &str {
        &self.to_asset
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn inferred_by(&self) -> Option<&str> {
        self.inferred_by.as_deref()
    }
}

pub struct FlowEdgeBuilder {
    from_asset: Option<String>,
    to_asset: Option<String>,
    kind: Option<EdgeKind>,
    inferred_by: Option<String>,
}

impl Default for FlowEdgeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowEdgeBuilder {
    pub fn new() -> Self {
        Self {
            from_asset: None,
            to_asset: None,
            kind: None,
            inferred_by: None,
        }
    }

    pub fn with_from_asset(mut self, from_asset: &str) -> Self {
        self.from_asset = Some(from_asset.to_string());
        self
    }

    pub fn with_to_asset(mut self, to_asset: &str) -> Self {
        self.to_asset = Some(to_asset.to_string());
        self
    }

    pub fn with_kind(mut self, kind: EdgeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_inferred_by(mut self, inferred_by: Option<String>) -> Self {
        self.inferred_by = inferred_by;
        self
    }
}

impl crate::common::ConfigBuilder for FlowEdgeBuilder {
    type Config = FlowEdge;

    fn build(self) -> Result<Self::Config, crate::error::LineageLensError> {
        Ok(FlowEdge {
            from_asset: self.from_asset.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: from_asset".to_string(),
                }
            })?,
            to_asset: self.to_asset.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: to_asset".to_string(),
                }
            })?,
            kind: self.kind.ok_or_else(|| {
                crate::error::LineageLensError::ConfigurationError {
                    message: "Missing required field: kind".to_string(),
                }
            })?,
            inferred_by: self.inferred_by,
        })
    }
}
