//! Trace command implementation

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt::Write;

use miette::{Result, WrapErr};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::IntoNodeReferences;
use serde::{Deserialize, Serialize};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TraceConfig;
use crate::error::LineageLensError;
use crate::graph::{AssetNode, FlowEdge};

/// JSON output structure for dependency traces
#[derive(Debug, Serialize, Deserialize)]
pub struct TraceJsonReport {
    pub assets: Vec<TraceEntry>,
}

/// Individual asset entry in the JSON report
#[derive(Debug, Serialize, Deserialize)]
pub struct TraceEntry {
    pub id: String,
    pub kind: String,
    pub related: Vec<String>,
    pub reverse: bool,
    pub transitive: bool,
}

impl FromCommand for TraceConfig {
    fn from_command(command: Commands) -> Result<Self, LineageLensError> {
        match command {
            Commands::Trace {
                asset,
                reverse,
                transitive,
                common,
                format,
            } => TraceConfig::builder()
                .with_asset(asset)
                .with_reverse(reverse)
                .with_transitive(transitive)
                .with_paths(common.get_paths())
                .with_format(format.format)
                .with_exclude_control(common.exclude_control)
                .with_exclude_reference(common.exclude_reference)
                .with_exclude_inferred(common.exclude_inferred)
                .build(),
            _ => Err(LineageLensError::ConfigurationError {
                message: "Invalid command type for TraceConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TraceConfig);

/// Execute the trace command for analyzing asset dependencies
pub fn execute_deps_command(command: Commands) -> Result<()> {
    let config = TraceConfig::from_command(command)
        .wrap_err("Failed to parse trace command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::deps::DepsExecutor;
    DepsExecutor::execute(config)
}

/// Analysis of asset dependency relationships
///
/// Upstream of an asset are the sources of its incoming edges (what it is
/// derived from); downstream are the targets of its outgoing edges (what
/// consumes it).
pub struct AssetDependencyAnalysis {
    graph: DiGraph<AssetNode, FlowEdge>,
    node_indices: HashMap<String, NodeIndex>,
    // Cache for computed neighbor sets
    upstream_cache: HashMap<String, BTreeSet<String>>,
    downstream_cache: HashMap<String, BTreeSet<String>>,
    transitive_cache: HashMap<(String, bool), BTreeSet<String>>,
}

impl AssetDependencyAnalysis {
    pub fn new(graph: &DiGraph<AssetNode, FlowEdge>) -> Self {
        let mut node_indices = HashMap::new();
        for (idx, node) in graph.node_references() {
            node_indices.insert(node.id().to_string(), idx);
        }

        Self {
            graph: graph.clone(),
            node_indices,
            upstream_cache: HashMap::new(),
            downstream_cache: HashMap::new(),
            transitive_cache: HashMap::new(),
        }
    }

    /// All asset ids in the graph, sorted
    pub fn asset_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.node_indices.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn contains(&self, asset_id: &str) -> bool {
        self.node_indices.contains_key(asset_id)
    }

    pub fn kind_of(&self, asset_id: &str) -> Option<String> {
        self.node_indices
            .get(asset_id)
            .map(|&idx| self.graph[idx].kind().to_string())
    }

    /// Direct upstream sources of the asset
    pub fn upstream_of(&mut self, asset_id: &str) -> BTreeSet<String> {
        if let Some(cached) = self.upstream_cache.get(asset_id) {
            return cached.clone();
        }

        let result = self.neighbors(asset_id, Direction::Incoming);
        self.upstream_cache
            .insert(asset_id.to_string(), result.clone());
        result
    }

    /// Direct downstream consumers of the asset
    pub fn downstream_of(&mut self, asset_id: &str) -> BTreeSet<String> {
        if let Some(cached) = self.downstream_cache.get(asset_id) {
            return cached.clone();
        }

        let result = self.neighbors(asset_id, Direction::Outgoing);
        self.downstream_cache
            .insert(asset_id.to_string(), result.clone());
        result
    }

    /// Transitive closure in the requested direction, excluding the asset
    /// itself
    ///
    /// Bounded because each asset is enqueued at most once, so cyclic
    /// graphs terminate like acyclic ones.
    pub fn transitive_of(&mut self, asset_id: &str, downstream: bool) -> BTreeSet<String> {
        let key = (asset_id.to_string(), downstream);
        if let Some(cached) = self.transitive_cache.get(&key) {
            return cached.clone();
        }

        let direction = if downstream {
            Direction::Outgoing
        } else {
            Direction::Incoming
        };

        let mut result = BTreeSet::new();
        let Some(&start) = self.node_indices.get(asset_id) else {
            return result;
        };

        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        let mut seen: BTreeSet<NodeIndex> = BTreeSet::new();
        queue.push_back(start);
        seen.insert(start);

        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors_directed(current, direction) {
                if seen.insert(next) {
                    result.insert(self.graph[next].id().to_string());
                    queue.push_back(next);
                }
            }
        }

        // The start asset may be rediscovered through a cycle; it is not
        // its own dependency
        result.remove(asset_id);

        self.transitive_cache.insert(key, result.clone());
        result
    }

    fn neighbors(&self, asset_id: &str, direction: Direction) -> BTreeSet<String> {
        let Some(&idx) = self.node_indices.get(asset_id) else {
            return BTreeSet::new();
        };

        self.graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].id().to_string())
            .collect()
    }
}

/// Generates trace reports in the supported output formats
pub struct TraceReportGenerator {
    asset: Option<String>,
    reverse: bool,
    transitive: bool,
}

impl TraceReportGenerator {
    pub fn new(asset: Option<&str>, reverse: bool, transitive: bool) -> Self {
        Self {
            asset: asset.map(str::to_string),
            reverse,
            transitive,
        }
    }

    fn entries(&self, analysis: &mut AssetDependencyAnalysis) -> Vec<TraceEntry> {
        let ids = match &self.asset {
            Some(id) => vec![id.clone()],
            None => analysis.asset_ids(),
        };

        let ids: Vec<String> = ids.into_iter().filter(|id| analysis.contains(id)).collect();

        ids.into_iter()
            .map(|id| {
                let related: Vec<String> = if self.transitive {
                    analysis.transitive_of(&id, self.reverse).into_iter().collect()
                } else if self.reverse {
                    analysis.downstream_of(&id).into_iter().collect()
                } else {
                    analysis.upstream_of(&id).into_iter().collect()
                };

                TraceEntry {
                    kind: analysis.kind_of(&id).unwrap_or_default(),
                    id,
                    related,
                    reverse: self.reverse,
                    transitive: self.transitive,
                }
            })
            .collect()
    }

    pub fn generate_human_report(
        &self,
        analysis: &mut AssetDependencyAnalysis,
    ) -> Result<String, LineageLensError> {
        let mut output = String::new();
        let direction_label = if self.reverse {
            "downstream consumers"
        } else {
            "upstream sources"
        };
        let scope_label = if self.transitive {
            " (transitive)"
        } else {
            ""
        };

        if let Some(asset) = &self.asset
            && !analysis.contains(asset)
        {
            writeln!(output, "Asset '{asset}' not found in any snapshot")?;
            return Ok(output);
        }

        for entry in self.entries(analysis) {
            writeln!(output, "📦 {} ({})", entry.id, entry.kind)?;
            if entry.related.is_empty() {
                writeln!(output, "  └── (no {direction_label})")?;
            } else {
                writeln!(
                    output,
                    "  {} {}{}:",
                    if self.reverse { "⬇" } else { "⬆" },
                    direction_label,
                    scope_label
                )?;
                for related in &entry.related {
                    writeln!(output, "    - {related}")?;
                }
            }
            writeln!(output)?;
        }

        Ok(output)
    }

    pub fn generate_json_report(
        &self,
        analysis: &mut AssetDependencyAnalysis,
    ) -> Result<String, LineageLensError> {
        let report = TraceJsonReport {
            assets: self.entries(analysis),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }

    pub fn generate_junit_report(
        &self,
        analysis: &mut AssetDependencyAnalysis,
    ) -> Result<String, LineageLensError> {
        let entries = self.entries(analysis);
        let mut output = String::new();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="trace-analysis" tests="1" failures="0">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="asset-dependencies" tests="1" failures="0">"#
        )?;
        writeln!(
            output,
            r#"    <testcase name="trace-assets" classname="lineage-lens">"#
        )?;
        writeln!(output, "      <system-out>")?;
        writeln!(output, "        Assets analyzed: {}", entries.len())?;
        for entry in &entries {
            writeln!(
                output,
                "        {}: {} related assets",
                entry.id,
                entry.related.len()
            )?;
        }
        writeln!(output, "      </system-out>")?;
        writeln!(output, r#"    </testcase>"#)?;
        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }

    pub fn generate_github_report(
        &self,
        analysis: &mut AssetDependencyAnalysis,
    ) -> Result<String, LineageLensError> {
        let entries = self.entries(analysis);
        let mut output = String::new();

        writeln!(
            output,
            "::notice title=Trace Analysis::Analyzed {} asset{}",
            entries.len(),
            if entries.len() == 1 { "" } else { "s" }
        )?;

        for entry in &entries {
            if !entry.related.is_empty() {
                writeln!(
                    output,
                    "::notice title={}::{}",
                    entry.id,
                    entry.related.join(", ")
                )?;
            }
        }

        Ok(output)
    }
}
