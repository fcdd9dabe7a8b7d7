use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use miette::{Result, WrapErr};
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{AssetNode, FlowEdge};
use crate::catalog::CatalogInfo;
use crate::common::ConfigBuilder;
use crate::core::AssetKind;
use crate::edge_filter::EdgeFilter;
use crate::progress::ProgressReporter;

/// Builder for constructing lineage graphs
///
/// This builder creates directed graphs representing data-flow
/// relationships between assets or between catalog domains, with support
/// for filtering edge kinds and inferred edges.
pub struct LineageGraphBuilder {
    graph: DiGraph<AssetNode, FlowEdge>,
    asset_indices: HashMap<String, NodeIndex>,
    filter: EdgeFilter,
    skipped_edges: usize,
}

impl LineageGraphBuilder {
    /// Create a new lineage graph builder
    ///
    /// # Arguments
    /// * `exclude_control` - Exclude control edges from the graph
    /// * `exclude_reference` - Exclude reference edges from the graph
    /// * `exclude_inferred` - Exclude edges inferred by discovery engines
    pub fn new(exclude_control: bool, exclude_reference: bool, exclude_inferred: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            asset_indices: HashMap::new(),
            filter: EdgeFilter::new(exclude_control, exclude_reference, exclude_inferred),
            skipped_edges: 0,
        }
    }

    /// Build a graph with one node per declared asset
    ///
    /// Nodes and edges are added in snapshot order, so traversal order is
    /// deterministic for a fixed set of input files. Edges referencing
    /// undeclared assets are dropped and counted in
    /// [`skipped_edges`](Self::skipped_edges).
    pub fn build_asset_graph(
        &mut self,
        catalogs: &BTreeMap<PathBuf, CatalogInfo>,
        progress: Option<&ProgressReporter>,
    ) -> Result<()> {
        for info in catalogs.values() {
            for asset in info.assets() {
                if self.asset_indices.contains_key(asset.id()) {
                    continue;
                }

                let node = AssetNode::builder()
                    .with_id(asset.id().to_string())
                    .with_name(asset.name().to_string())
                    .with_kind(asset.kind())
                    .build()
                    .wrap_err("Failed to build AssetNode")?;

                let idx = self.graph.add_node(node);
                self.asset_indices.insert(asset.id().to_string(), idx);
            }
        }

        for info in catalogs.values() {
            if let Some(p) = progress {
                p.analyzing_catalog(info.name());
            }

            for record in info.edges() {
                if !self.filter.should_include(record) {
                    continue;
                }

                let (Some(&from_idx), Some(&to_idx)) = (
                    self.asset_indices.get(&record.source),
                    self.asset_indices.get(&record.target),
                ) else {
                    self.skipped_edges += 1;
                    continue;
                };

                let edge = FlowEdge::builder()
                    .with_from_asset(&record.source)
                    .with_to_asset(&record.target)
                    .with_kind(record.kind)
                    .with_inferred_by(record.inferred_by.clone())
                    .build()
                    .wrap_err("Failed to build FlowEdge")?;

                self.graph.add_edge(from_idx, to_idx, edge);
            }
        }

        Ok(())
    }

    /// Build a coarse graph with one node per catalog domain
    ///
    /// Edges whose endpoints resolve to the same domain are not added:
    /// cycles inside one domain are the asset graph's concern.
    pub fn build_domain_graph(
        &mut self,
        catalogs: &BTreeMap<PathBuf, CatalogInfo>,
        asset_to_catalog: &HashMap<String, PathBuf>,
        progress: Option<&ProgressReporter>,
    ) -> Result<()> {
        let mut domain_indices: HashMap<PathBuf, NodeIndex> = HashMap::new();

        for (path, info) in catalogs {
            let node = AssetNode::builder()
                .with_id(info.name().to_string())
                .with_name(info.name().to_string())
                .with_kind(AssetKind::Domain)
                .build()
                .wrap_err("Failed to build domain AssetNode")?;

            let idx = self.graph.add_node(node);
            domain_indices.insert(path.clone(), idx);
        }

        for info in catalogs.values() {
            if let Some(p) = progress {
                p.analyzing_catalog(info.name());
            }

            for record in info.edges() {
                if !self.filter.should_include(record) {
                    continue;
                }

                let (Some(from_path), Some(to_path)) = (
                    asset_to_catalog.get(&record.source),
                    asset_to_catalog.get(&record.target),
                ) else {
                    self.skipped_edges += 1;
                    continue;
                };

                if from_path == to_path {
                    continue;
                }

                let (Some(&from_idx), Some(&to_idx)) =
                    (domain_indices.get(from_path), domain_indices.get(to_path))
                else {
                    self.skipped_edges += 1;
                    continue;
                };

                let edge = FlowEdge::builder()
                    .with_from_asset(&record.source)
                    .with_to_asset(&record.target)
                    .with_kind(record.kind)
                    .with_inferred_by(record.inferred_by.clone())
                    .build()
                    .wrap_err("Failed to build FlowEdge")?;

                self.graph.add_edge(from_idx, to_idx, edge);
            }
        }

        Ok(())
    }

    pub fn graph(&self) -> &DiGraph<AssetNode, FlowEdge> {
        &self.graph
    }

    /// Number of edges dropped because an endpoint was not declared in any
    /// discovered snapshot
    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }
}
