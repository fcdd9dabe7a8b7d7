//! Impact command implementation

use std::collections::{BTreeSet, HashMap, VecDeque};

use miette::{Result, WrapErr};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::IntoNodeReferences;
use serde::{Deserialize, Serialize};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ImpactConfig;
use crate::error::LineageLensError;
use crate::graph::{AssetNode, FlowEdge};

/// JSON output structure for impact analysis
#[derive(Debug, Serialize, Deserialize)]
pub struct ImpactJsonReport {
    pub affected_assets: Vec<AffectedAsset>,
    pub affected_domains: Vec<String>,
    pub directly_affected_assets: Vec<String>,
    pub directly_affected_domains: Vec<String>,
    pub unmatched_assets: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AffectedAsset {
    pub id: String,
    pub domain: String,
    pub is_directly_affected: bool,
}

impl FromCommand for ImpactConfig {
    fn from_command(command: Commands) -> Result<Self, LineageLensError> {
        match command {
            Commands::Impact {
                assets,
                show_assets,
                direct_only,
                exclude_control,
                exclude_reference,
                exclude_inferred,
                format,
            } => ImpactConfig::builder()
                .with_assets(assets)
                .with_show_assets(show_assets)
                .with_direct_only(direct_only)
                .with_paths(vec![
                    std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from(".")),
                ])
                .with_format(format.format)
                .with_exclude_control(exclude_control)
                .with_exclude_reference(exclude_reference)
                .with_exclude_inferred(exclude_inferred)
                .build(),
            _ => Err(LineageLensError::ConfigurationError {
                message: "Invalid command type for ImpactConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ImpactConfig);

/// Execute the impact command
pub fn execute_affected_command(command: Commands) -> Result<()> {
    let config = ImpactConfig::from_command(command)
        .wrap_err("Failed to parse impact command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::affected::AffectedExecutor;
    AffectedExecutor::execute(config)
}

/// Analysis of assets and domains affected by changes to specific assets
///
/// Impact propagates forward along data flow: everything reachable from a
/// changed asset is downstream of it and may need revalidation.
pub struct ImpactAnalysis {
    graph: DiGraph<AssetNode, FlowEdge>,
    node_indices: HashMap<String, NodeIndex>,
    /// Map from asset id to its owning catalog domain
    asset_domains: HashMap<String, String>,
}

/// Result of an impact analysis run
#[derive(Debug)]
pub struct ImpactResult {
    /// Changed assets that were found in the graph
    pub directly_affected_assets: BTreeSet<String>,
    /// Domains owning the changed assets
    pub directly_affected_domains: BTreeSet<String>,
    /// Changed assets plus every downstream consumer
    pub all_affected_assets: BTreeSet<String>,
    /// Domains owning any affected asset
    pub all_affected_domains: BTreeSet<String>,
    /// Requested assets that do not exist in any snapshot
    pub unmatched_assets: Vec<String>,
}

impl ImpactAnalysis {
    pub fn new(
        graph: &DiGraph<AssetNode, FlowEdge>,
        asset_domains: HashMap<String, String>,
    ) -> Self {
        let mut node_indices = HashMap::new();
        for (idx, node) in graph.node_references() {
            node_indices.insert(node.id().to_string(), idx);
        }

        Self {
            graph: graph.clone(),
            node_indices,
            asset_domains,
        }
    }

    pub fn domain_of(&self, asset_id: &str) -> Option<&str> {
        self.asset_domains.get(asset_id).map(String::as_str)
    }

    /// Trace the blast radius of the given changed assets
    pub fn analyze_changed_assets(&self, changed: &[String]) -> ImpactResult {
        let mut directly_affected_assets = BTreeSet::new();
        let mut unmatched_assets = Vec::new();

        let mut queue: VecDeque<NodeIndex> = VecDeque::new();
        let mut seen: BTreeSet<NodeIndex> = BTreeSet::new();

        for asset_id in changed {
            match self.node_indices.get(asset_id) {
                Some(&idx) => {
                    directly_affected_assets.insert(asset_id.clone());
                    if seen.insert(idx) {
                        queue.push_back(idx);
                    }
                }
                None => unmatched_assets.push(asset_id.clone()),
            }
        }

        // Forward closure over data flow
        let mut all_affected_assets = directly_affected_assets.clone();
        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors(current) {
                if seen.insert(next) {
                    all_affected_assets.insert(self.graph[next].id().to_string());
                    queue.push_back(next);
                }
            }
        }

        let directly_affected_domains = self.domains_of(&directly_affected_assets);
        let all_affected_domains = self.domains_of(&all_affected_assets);

        ImpactResult {
            directly_affected_assets,
            directly_affected_domains,
            all_affected_assets,
            all_affected_domains,
            unmatched_assets,
        }
    }

    fn domains_of(&self, assets: &BTreeSet<String>) -> BTreeSet<String> {
        assets
            .iter()
            .filter_map(|id| self.asset_domains.get(id).cloned())
            .collect()
    }
}

impl ImpactResult {
    /// Build the JSON report structure for this result
    pub fn to_json_report(&self, analysis: &ImpactAnalysis) -> ImpactJsonReport {
        ImpactJsonReport {
            affected_assets: self
                .all_affected_assets
                .iter()
                .map(|id| AffectedAsset {
                    id: id.clone(),
                    domain: analysis.domain_of(id).unwrap_or_default().to_string(),
                    is_directly_affected: self.directly_affected_assets.contains(id),
                })
                .collect(),
            affected_domains: self.all_affected_domains.iter().cloned().collect(),
            directly_affected_assets: self.directly_affected_assets.iter().cloned().collect(),
            directly_affected_domains: self
                .directly_affected_domains
                .iter()
                .cloned()
                .collect(),
            unmatched_assets: self.unmatched_assets.clone(),
        }
    }
}
