use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::core::{AssetKind, EdgeKind};
use crate::detector::{AssetCycle, CycleSeverity};
use crate::error::LineageLensError;
use crate::graph::{AssetNode, FlowEdge};

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const DATA_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CONTROL_EDGE: &str = "#90A4AE"; // Blue-grey
    pub const REFERENCE_EDGE: &str = "#81C784"; // Soft green
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
    pub const LEGEND_BG: &str = "#FAFAFA"; // Off-white background
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(LineageLensError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(LineageLensError::from)
    };
}

pub struct GraphRenderer {
    highlight_cycles: bool,
    show_edges: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool, show_edges: bool) -> Self {
        Self {
            highlight_cycles,
            show_edges,
        }
    }

    pub fn render_ascii(
        &self,
        graph: &DiGraph<AssetNode, FlowEdge>,
        cycles: &[AssetCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.node_count() == 0 {
            writeln_out!(output, "No assets found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Asset Lineage Graph\n")?;

        // Sort nodes by id for consistent output
        let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
        nodes.sort_by_key(|&idx| graph[idx].id());

        for node_idx in nodes {
            let node = &graph[node_idx];
            let asset_id = node.id();

            let in_cycle = cycles.iter().any(|cycle| cycle.involves(asset_id));

            // Print asset header with cycle indicator
            if in_cycle && self.highlight_cycles {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", asset_id)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", asset_id)?;
            }

            if node.kind() != AssetKind::Unknown {
                writeln_out!(output, "  🏷  Kind: {}", node.kind())?;
            }

            // Aggregate edges by target and edge kind
            type EdgeKey = (NodeIndex, EdgeKind);
            let mut edge_groups: HashMap<EdgeKey, Vec<&FlowEdge>> = HashMap::new();

            for edge in graph.edges(node_idx) {
                let edge_data = edge.weight();
                let key = (edge.target(), edge_data.kind());
                edge_groups.entry(key).or_default().push(edge_data);
            }

            if edge_groups.is_empty() {
                writeln_out!(output, "  └── (no downstream consumers)")?;
            } else {
                // Sort groups by target asset id and edge kind
                let mut groups: Vec<_> = edge_groups.into_iter().collect();
                groups.sort_by_key(|((target_idx, kind), _)| (graph[*target_idx].id(), *kind));

                for (i, ((target_idx, kind), edges)) in groups.iter().enumerate() {
                    let target_node = &graph[*target_idx];
                    let is_last = i == groups.len() - 1;
                    let prefix = if is_last { "└──" } else { "├──" };

                    let edge_in_cycle = self.is_edge_in_cycle(asset_id, target_node.id(), cycles);

                    let cycle_marker = if edge_in_cycle && self.highlight_cycles {
                        " ⚠️  [CYCLE]"
                    } else {
                        ""
                    };

                    let count_str = if edges.len() > 1 {
                        format!(" ({} {} edges)", edges.len(), kind)
                    } else {
                        format!(" ({kind})")
                    };

                    writeln_out!(
                        output,
                        "  {} → {}{}{}",
                        prefix,
                        target_node.id(),
                        count_str,
                        cycle_marker
                    )?;

                    // Show per-edge provenance details if requested
                    if self.show_edges {
                        let detail_prefix = if is_last { "      " } else { "  │   " };
                        for (j, edge) in edges.iter().enumerate() {
                            let is_last_detail = j == edges.len() - 1;
                            writeln_out!(
                                output,
                                "{}{}── {} → {} ({})",
                                detail_prefix,
                                if is_last_detail { "└" } else { "├" },
                                edge.from_asset(),
                                edge.to_asset(),
                                edge.inferred_by().unwrap_or("declared")
                            )?;
                        }
                    }
                }
            }

            writeln_out!(output)?; // Empty line between assets
        }

        // Add legend if there are cycles
        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output, "⚠️  = Part of a dependency cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<AssetNode, FlowEdge>,
        cycles: &[AssetCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        // Group assets by id prefix for subgraphs
        let groups = self.group_assets_by_prefix(graph);
        let mut ungrouped_nodes: Vec<NodeIndex> = graph.node_indices().collect();

        for (prefix, nodes) in groups.iter() {
            writeln_out!(output)?;
            writeln_out!(
                output,
                "    subgraph {}_group[\"{}\"]",
                self.mermaid_id(prefix),
                prefix
            )?;

            for &node in nodes {
                self.write_mermaid_node(graph, node, cycles, "        ", output)?;
                ungrouped_nodes.retain(|&n| n != node);
            }

            writeln_out!(output, "    end")?;
        }

        if !ungrouped_nodes.is_empty() {
            writeln_out!(output)?;
            for node in ungrouped_nodes {
                self.write_mermaid_node(graph, node, cycles, "    ", output)?;
            }
        }

        writeln_out!(output)?;

        // Aggregate edges by source, target, and edge kind
        type EdgeKey = (NodeIndex, NodeIndex, EdgeKind);
        let mut edge_groups: HashMap<EdgeKey, Vec<&FlowEdge>> = HashMap::new();

        for edge in graph.edge_indices() {
            let (source, target) =
                graph
                    .edge_endpoints(edge)
                    .ok_or_else(|| LineageLensError::GraphError {
                        message: "Edge must have endpoints".to_string(),
                    })?;
            let edge_data = graph
                .edge_weight(edge)
                .ok_or_else(|| LineageLensError::GraphError {
                    message: "Edge weight not found for existing edge".to_string(),
                })?;
            let key = (source, target, edge_data.kind());
            edge_groups.entry(key).or_default().push(edge_data);
        }

        // Render aggregated edges
        for (link_style_index, ((source, target, kind), edges)) in
            edge_groups.into_iter().enumerate()
        {
            let source_node = &graph[source];
            let target_node = &graph[target];

            let edge_in_cycle =
                self.is_edge_in_cycle(source_node.id(), target_node.id(), cycles);

            let (icon, kind_label) = match kind {
                EdgeKind::Data => ("💾", "flows"),
                EdgeKind::Control => ("⏱", "triggers"),
                EdgeKind::Reference => ("🔗", "references"),
            };
            let label = if edges.len() > 1 {
                format!("{} {} {}", icon, edges.len(), kind_label)
            } else {
                format!("{icon} {kind_label}")
            };

            // Choose arrow type based on edge kind
            let arrow_type = match kind {
                EdgeKind::Data => "-->",      // Solid arrow for data flow
                EdgeKind::Control => "-.->",  // Dotted arrow for control edges
                EdgeKind::Reference => "===>", // Thick arrow for references
            };

            writeln_out!(
                output,
                "    {} {}|{}| {}",
                self.mermaid_id(source_node.id()),
                arrow_type,
                label,
                self.mermaid_id(target_node.id())
            )?;

            if edge_in_cycle && self.highlight_cycles {
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{},stroke-width:3px",
                    link_style_index,
                    colors::CYCLE_EDGE
                )?;
            } else {
                let edge_color = match kind {
                    EdgeKind::Data => colors::DATA_EDGE,
                    EdgeKind::Control => colors::CONTROL_EDGE,
                    EdgeKind::Reference => colors::REFERENCE_EDGE,
                };
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{},stroke-width:2px",
                    link_style_index,
                    edge_color
                )?;
            }
        }

        // Add legend
        if !cycles.is_empty() && self.highlight_cycles {
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph Legend")?;
            writeln_out!(output, "        L1[Normal Asset]")?;
            writeln_out!(output, "        L2[Asset in Cycle]")?;
            writeln_out!(
                output,
                "        style L1 fill:{},stroke:{},stroke-width:2px",
                colors::NORMAL_NODE_FILL,
                colors::NORMAL_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "        style L2 fill:{},stroke:{},stroke-width:3px",
                colors::CYCLE_NODE_FILL,
                colors::CYCLE_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "        style Legend fill:{},stroke:#ddd,stroke-width:1px",
                colors::LEGEND_BG
            )?;
            writeln_out!(output, "    end")?;

            // Add cycle severity information
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph CycleSeverity[\"Cycle Severity\"]")?;
            for (i, cycle) in cycles.iter().enumerate() {
                let severity_icon = match cycle.severity() {
                    CycleSeverity::Low => "⚠️",
                    CycleSeverity::Medium => "⚠️⚠️",
                    CycleSeverity::High => "🚨🚨🚨",
                };
                writeln_out!(
                    output,
                    "        CS{}[\"{} Cycle {}: {} assets<br/>{}\"]",
                    i + 1,
                    severity_icon,
                    i + 1,
                    cycle.len(),
                    cycle.path().join(" → ")
                )?;
            }
            writeln_out!(output, "    end")?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DiGraph<AssetNode, FlowEdge>,
        cycles: &[AssetCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph lineage {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=filled];")?;
        writeln_out!(output)?;

        for node_idx in graph.node_indices() {
            let node = &graph[node_idx];
            let in_cycle = cycles.iter().any(|cycle| cycle.involves(node.id()));

            let label = if self.show_edges {
                format!("{}\\n({})", node.id(), node.kind())
            } else {
                node.id().to_string()
            };

            if in_cycle && self.highlight_cycles {
                writeln_out!(
                    output,
                    "    \"{}\" [label=\"{}\", fillcolor=\"{}\", color=\"{}\", penwidth=2];",
                    node.id(),
                    label,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(
                    output,
                    "    \"{}\" [label=\"{}\", fillcolor=\"{}\", color=\"{}\"];",
                    node.id(),
                    label,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        for edge in graph.edge_indices() {
            let (source, target) =
                graph
                    .edge_endpoints(edge)
                    .ok_or_else(|| LineageLensError::GraphError {
                        message: "Edge must have endpoints".to_string(),
                    })?;
            let edge_data = graph
                .edge_weight(edge)
                .ok_or_else(|| LineageLensError::GraphError {
                    message: "Edge weight not found for existing edge".to_string(),
                })?;

            let source_node = &graph[source];
            let target_node = &graph[target];

            let edge_in_cycle =
                self.is_edge_in_cycle(source_node.id(), target_node.id(), cycles);

            let style = match edge_data.kind() {
                EdgeKind::Data => "solid",
                EdgeKind::Control => "dashed",
                EdgeKind::Reference => "dotted",
            };

            let color = if edge_in_cycle && self.highlight_cycles {
                colors::CYCLE_EDGE
            } else {
                match edge_data.kind() {
                    EdgeKind::Data => colors::DATA_EDGE,
                    EdgeKind::Control => colors::CONTROL_EDGE,
                    EdgeKind::Reference => colors::REFERENCE_EDGE,
                }
            };

            writeln_out!(
                output,
                "    \"{}\" -> \"{}\" [label=\"{}\", style={}, color=\"{}\"];",
                source_node.id(),
                target_node.id(),
                edge_data.kind(),
                style,
                color
            )?;
        }

        writeln_out!(output, "}}")?;

        Ok(())
    }

    pub fn render_d2(
        &self,
        graph: &DiGraph<AssetNode, FlowEdge>,
        cycles: &[AssetCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "# Asset lineage graph")?;
        writeln_out!(output, "direction: right")?;
        writeln_out!(output)?;

        for node_idx in graph.node_indices() {
            let node = &graph[node_idx];
            let in_cycle = cycles.iter().any(|cycle| cycle.involves(node.id()));

            let d2_id = self.d2_id(node.id());
            writeln_out!(output, "{}: {}", d2_id, node.id())?;
            if in_cycle && self.highlight_cycles {
                writeln_out!(output, "{}.style.fill: \"{}\"", d2_id, colors::CYCLE_NODE_FILL)?;
                writeln_out!(
                    output,
                    "{}.style.stroke: \"{}\"",
                    d2_id,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(
                    output,
                    "{}.style.fill: \"{}\"",
                    d2_id,
                    colors::NORMAL_NODE_FILL
                )?;
            }
        }

        writeln_out!(output)?;

        for edge in graph.edge_indices() {
            let (source, target) =
                graph
                    .edge_endpoints(edge)
                    .ok_or_else(|| LineageLensError::GraphError {
                        message: "Edge must have endpoints".to_string(),
                    })?;
            let edge_data = graph
                .edge_weight(edge)
                .ok_or_else(|| LineageLensError::GraphError {
                    message: "Edge weight not found for existing edge".to_string(),
                })?;

            writeln_out!(
                output,
                "{} -> {}: {}",
                self.d2_id(graph[source].id()),
                self.d2_id(graph[target].id()),
                edge_data.kind()
            )?;
        }

        Ok(())
    }

    fn write_mermaid_node(
        &self,
        graph: &DiGraph<AssetNode, FlowEdge>,
        node: NodeIndex,
        cycles: &[AssetCycle],
        indent: &str,
        output: &mut dyn Write,
    ) -> Result<()> {
        let asset = &graph[node];
        let in_cycle = cycles.iter().any(|cycle| cycle.involves(asset.id()));

        let node_id = self.mermaid_id(asset.id());
        let label = if self.show_edges {
            format!("{}\\n{}", asset.id(), asset.kind())
        } else {
            asset.id().to_string()
        };

        // Use different shapes based on asset kind
        let node_shape = match asset.kind() {
            _ if in_cycle && self.highlight_cycles => format!("{node_id}((\"{label}\"))"),
            AssetKind::Pipeline | AssetKind::Service => format!("{node_id}([\"{label}\"])"),
            AssetKind::View => format!("{node_id}{{{{\"{label}\"}}}}"),
            _ => format!("{node_id}[\"{label}\"]"),
        };
        writeln_out!(output, "{}{}", indent, node_shape)?;

        if in_cycle && self.highlight_cycles {
            writeln_out!(
                output,
                "{}style {} fill:{},stroke:{},stroke-width:3px",
                indent,
                node_id,
                colors::CYCLE_NODE_FILL,
                colors::CYCLE_NODE_STROKE
            )?;
        } else {
            writeln_out!(
                output,
                "{}style {} fill:{},stroke:{},stroke-width:2px",
                indent,
                node_id,
                colors::NORMAL_NODE_FILL,
                colors::NORMAL_NODE_STROKE
            )?;
        }

        Ok(())
    }

    /// Whether `from → to` appears as a consecutive pair in any cycle path
    fn is_edge_in_cycle(&self, from: &str, to: &str, cycles: &[AssetCycle]) -> bool {
        cycles.iter().any(|cycle| {
            cycle
                .path()
                .windows(2)
                .any(|pair| pair[0] == from && pair[1] == to)
        })
    }

    /// Group assets by the id prefix before the first '.'
    ///
    /// Only prefixes with at least two assets become subgraphs.
    fn group_assets_by_prefix(
        &self,
        graph: &DiGraph<AssetNode, FlowEdge>,
    ) -> BTreeMap<String, Vec<NodeIndex>> {
        let mut groups: BTreeMap<String, Vec<NodeIndex>> = BTreeMap::new();

        for node in graph.node_indices() {
            let id = graph[node].id();
            if let Some((prefix, _)) = id.split_once('.') {
                groups.entry(prefix.to_string()).or_default().push(node);
            }
        }

        groups.retain(|_, nodes| nodes.len() >= 2);
        groups
    }

    fn mermaid_id(&self, id: &str) -> String {
        id.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }

    fn d2_id(&self, id: &str) -> String {
        self.mermaid_id(id)
    }
}
