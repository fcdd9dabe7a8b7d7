//! # Graph Construction and Rendering Module
//!
//! This module provides functionality for building and visualizing
//! lineage graphs. It supports multiple output formats and can highlight
//! dependency cycles.
//!
//! ## Components
//!
//! ### Graph Building
//! - **LineageGraphBuilder**: Constructs the lineage graph from discovered
//!   catalogs
//! - **AssetNode**: Represents an asset (or catalog domain) in the graph
//! - **FlowEdge**: Represents a data-flow relationship between assets
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs in various formats (ASCII, Mermaid,
//!   DOT, D2)
//! - Supports cycle highlighting and per-edge detail
//!
//! ## Example
//!
//! ```
//! use lineage_lens::common::ConfigBuilder;
//! use lineage_lens::core::{AssetKind, EdgeKind};
//! use lineage_lens::graph::{AssetNode, FlowEdge, GraphRenderer};
//! use miette::IntoDiagnostic;
//! use petgraph::graph::DiGraph;
//!
//! # fn main() -> miette::Result<()> {
//! // Create a simple lineage graph
//! let mut graph = DiGraph::new();
//!
//! // Add asset nodes
//! let orders = graph.add_node(
//!     AssetNode::builder()
//!         .with_id("dwh.orders".to_string())
//!         .with_name("orders".to_string())
//!         .with_kind(AssetKind::Table)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let revenue = graph.add_node(
//!     AssetNode::builder()
//!         .with_id("rpt.revenue".to_string())
//!         .with_name("revenue".to_string())
//!         .with_kind(AssetKind::View)
//!         .build()
//!         .unwrap(),
//! );
//!
//! // Add a data-flow edge
//! graph.add_edge(
//!     orders,
//!     revenue,
//!     FlowEdge::builder()
//!         .with_from_asset("dwh.orders")
//!         .with_to_asset("rpt.revenue")
//!         .with_kind(EdgeKind::Data)
//!         .build()
//!         .unwrap(),
//! );
//!
//! // Render to DOT format
//! let renderer = GraphRenderer::new(true, true);
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, &[], &mut output)?;
//!
//! let dot_output = String::from_utf8(output).into_diagnostic()?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("dwh.orders"));
//! assert!(dot_output.contains("rpt.revenue"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **DOT**: Graphviz format for detailed visualization
//! - **Mermaid**: Markdown-compatible diagrams for documentation

mod builder;
mod renderer;
mod types;

// Re-export main types and builders
pub use builder::LineageGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{AssetNode, AssetNodeBuilder, FlowEdge, FlowEdgeBuilder};
