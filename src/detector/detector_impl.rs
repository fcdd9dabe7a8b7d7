use std::collections::HashMap;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::common::ConfigBuilder;
use crate::core::{AssetKind, EdgeKind};
use crate::graph::{AssetNode, FlowEdge};

/// Detector for finding circular dependencies in lineage graphs
///
/// Walks the graph depth-first, keeping the active traversal path on a
/// shared stack. A back-edge into an asset still on the stack closes a
/// cycle.
pub struct CycleDetector {
    cycles: Vec<AssetCycle>,
}

/// A detected circular dependency
///
/// `path` is the ordered asset-id sequence `[n0, n1, …, nk, n0]`: the
/// first and last ids coincide and every consecutive pair is an edge of
/// the graph. `edges` holds the concrete edges composing the loop, in
/// path order, closing edge last.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCycle {
    path: Vec<String>,
    edges: Vec<CycleEdge>,
}

impl AssetCycle {
    pub fn builder() -> AssetCycleBuilder {
        AssetCycleBuilder::new()
    }

    /// Ordered asset ids, first repeated at the end to close the loop
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Distinct assets participating in the cycle, in path order
    pub fn asset_ids(&self) -> &[String] {
        &self.path[..self.path.len().saturating_sub(1)]
    }

    /// Number of distinct assets in the cycle (1 for a self-loop)
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Edges composing the cycle, in path order
    pub fn edges(&self) -> &[CycleEdge] {
        &self.edges
    }

    /// Whether the given asset participates in this cycle
    pub fn involves(&self, asset_id: &str) -> bool {
        self.asset_ids().iter().any(|id| id == asset_id)
    }

    /// Classify the cycle by the kinds of edges composing it
    ///
    /// A loop made purely of data edges is a refresh-ordering hazard; a
    /// loop held together only by control or reference edges is milder.
    pub fn severity(&self) -> CycleSeverity {
        let data_edges = self
            .edges
            .iter()
            .filter(|e| e.kind() == EdgeKind::Data)
            .count();

        if data_edges == self.edges.len() && !self.edges.is_empty() {
            CycleSeverity::High
        } else if data_edges > 0 {
            CycleSeverity::Medium
        } else {
            CycleSeverity::Low
        }
    }
}

/// Severity of a detected cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CycleSeverity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for CycleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleSeverity::Low => write!(f, "low"),
            CycleSeverity::Medium => write!(f, "medium"),
            CycleSeverity::High => write!(f, "high"),
        }
    }
}

pub struct AssetCycleBuilder {
    path: Vec<String>,
    edges: Vec<CycleEdge>,
}

impl Default for AssetCycleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetCycleBuilder {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = path;
        self
    }

    pub fn add_edge(mut self, edge: CycleEdge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn build(self) -> AssetCycle {
        AssetCycle {
            path: self.path,
            edges: self.edges,
        }
    }
}

/// A dependency edge within a detected cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleEdge {
    from_asset: String,
    to_asset: String,
    kind: EdgeKind,
    inferred_by: Option<String>,
}

impl CycleEdge {
    pub fn new(
        from_asset: &str,
        to_asset: &str,
        kind: EdgeKind,
        inferred_by: Option<String>,
    ) -> Self {
        Self {
            from_asset: from_asset.to_string(),
            to_asset: to_asset.to_string(),
            kind,
            inferred_by,
        }
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

impl From<&FlowEdge> for CycleEdge {
    fn from(edge: &FlowEdge) -> Self {
        Self::new(
            edge.from_asset(),
            edge.to_asset(),
            edge.kind(),
            edge.inferred_by().map(str::to_string),
        )
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Detect all cycles in the lineage graph
    ///
    /// Traversal state lives entirely inside this call, so repeated and
    /// concurrent invocations over the same graph produce identical
    /// results.
    pub fn detect_cycles(&mut self, graph: &DiGraph<AssetNode, FlowEdge>) -> Result<()> {
        let node_count = graph.node_count();
        let mut visited = vec![false; node_count];
        let mut on_stack = vec![false; node_count];
        let mut path: Vec<NodeIndex> = Vec::new();

        for start in graph.node_indices() {
            if !visited[start.index()] {
                self.visit(graph, start, &mut visited, &mut on_stack, &mut path);
            }
        }

        Ok(())
    }

    /// Detect cycles in a plain edge list
    ///
    /// Convenience entry point for callers holding raw `(source, target)`
    /// id pairs rather than a built graph. Nodes are created in order of
    /// first appearance and duplicate pairs are preserved, so discovery
    /// order matches the input order.
    pub fn detect_in_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut graph: DiGraph<AssetNode, FlowEdge> = DiGraph::new();
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();

        for (source, target) in edges {
            let from_idx = match indices.get(&source) {
                Some(&idx) => idx,
                None => {
                    let idx = graph.add_node(plain_node(&source)?);
                    indices.insert(source.clone(), idx);
                    idx
                }
            };
            let to_idx = match indices.get(&target) {
                Some(&idx) => idx,
                None => {
                    let idx = graph.add_node(plain_node(&target)?);
                    indices.insert(target.clone(), idx);
                    idx
                }
            };

            let edge = FlowEdge::builder()
                .with_from_asset(&source)
                .with_to_asset(&target)
                .with_kind(EdgeKind::Data)
                .with_inferred_by(None)
                .build()?;

            graph.add_edge(from_idx, to_idx, edge);
        }

        self.detect_cycles(&graph)
    }

    fn visit(
        &mut self,
        graph: &DiGraph<AssetNode, FlowEdge>,
        node: NodeIndex,
        visited: &mut [bool],
        on_stack: &mut [bool],
        path: &mut Vec<NodeIndex>,
    ) {
        visited[node.index()] = true;
        on_stack[node.index()] = true;
        path.push(node);

        // petgraph iterates outgoing edges newest-first; restore insertion
        // order so discovery follows the order edges were declared
        let mut edges: Vec<_> = graph.edges(node).collect();
        edges.reverse();

        for edge in edges {
            let next = edge.target();
            if on_stack[next.index()] {
                self.record_cycle(graph, path, next, edge.weight());
            } else if !visited[next.index()] {
                self.visit(graph, next, visited, on_stack, path);
            }
        }

        path.pop();
        on_stack[node.index()] = false;
    }

    fn record_cycle(
        &mut self,
        graph: &DiGraph<AssetNode, FlowEdge>,
        path: &[NodeIndex],
        reentry: NodeIndex,
        closing_edge: &FlowEdge,
    ) {
        let Some(start) = path.iter().position(|&idx| idx == reentry) else {
            return;
        };

        let loop_nodes = &path[start..];
        let mut ids: Vec<String> = loop_nodes
            .iter()
            .map(|&idx| graph[idx].id().to_string())
            .collect();
        ids.push(graph[reentry].id().to_string());

        let mut builder = AssetCycle::builder().with_path(ids);
        for pair in loop_nodes.windows(2) {
            if let Some(edge) = first_edge_between(graph, pair[0], pair[1]) {
                builder = builder.add_edge(CycleEdge::from(edge));
            }
        }
        builder = builder.add_edge(CycleEdge::from(closing_edge));

        self.cycles.push(builder.build());
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[AssetCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Add a cycle to the detector (used for filtered results)
    pub fn add_cycle(&mut self, cycle: AssetCycle) {
        self.cycles.push(cycle);
    }
}

fn plain_node(id: &str) -> Result<AssetNode, crate::error::LineageLensError> {
    AssetNode::builder()
        .with_id(id.to_string())
        .with_name(id.to_string())
        .with_kind(AssetKind::Unknown)
        .build()
}

/// First-inserted edge between two nodes
fn first_edge_between(
    graph: &DiGraph<AssetNode, FlowEdge>,
    from: NodeIndex,
    to: NodeIndex,
) -> Option<&FlowEdge> {
    graph.edges_connecting(from, to).last().map(|e| e.weight())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(edges: &[(&str, &str)]) -> Vec<(String, String)> {
        edges
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect()
    }

    fn detect(edges: &[(&str, &str)]) -> CycleDetector {
        let mut detector = CycleDetector::new();
        detector.detect_in_edges(pairs(edges)).unwrap();
        detector
    }

    /// Consecutive pairs of a cycle path, for rotation-insensitive equality
    fn pair_set(path: &[String]) -> std::collections::BTreeSet<(String, String)> {
        path.windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect()
    }

    #[test]
    fn test_no_cycles_in_linear_chain() {
        let detector = detect(&[("a", "b"), ("b", "c"), ("c", "d")]);

        assert_eq!(detector.cycle_count(), 0);
        assert!(!detector.has_cycles());
    }

    #[test]
    fn test_empty_edge_list() {
        let detector = detect(&[]);
        assert!(!detector.has_cycles());
        assert!(detector.cycles().is_empty());
    }

    #[test]
    fn test_self_loop() {
        let detector = detect(&[("a", "a")]);

        assert_eq!(detector.cycle_count(), 1);
        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.path(), ["a", "a"]);
        assert_eq!(cycle.len(), 1);
        assert_eq!(cycle.asset_ids(), ["a"]);
        assert_eq!(cycle.edges().len(), 1);
        assert_eq!(cycle.edges()[0].from_asset(), "a");
        assert_eq!(cycle.edges()[0].to_asset(), "a");
    }

    #[test]
    fn test_simple_three_cycle() {
        let detector = detect(&[("a", "b"), ("b", "c"), ("c", "a")]);

        assert_eq!(detector.cycle_count(), 1);
        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.path(), ["a", "b", "c", "a"]);

        // Rotation-insensitive check: the set of consecutive pairs matches
        let expected = pair_set(&[
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ]);
        assert_eq!(pair_set(cycle.path()), expected);
        assert_eq!(cycle.edges().len(), 3);
    }

    #[test]
    fn test_disjoint_cycles_are_both_returned() {
        let detector = detect(&[("a", "b"), ("b", "a"), ("x", "y"), ("y", "x")]);

        assert_eq!(detector.cycle_count(), 2);
        assert_eq!(detector.cycles()[0].path(), ["a", "b", "a"]);
        assert_eq!(detector.cycles()[1].path(), ["x", "y", "x"]);
    }

    #[test]
    fn test_chain_into_two_cycle() {
        let detector = detect(&[("a", "b"), ("b", "c"), ("c", "b")]);

        assert_eq!(detector.cycle_count(), 1);
        let cycle = &detector.cycles()[0];
        assert_eq!(cycle.path(), ["b", "c", "b"]);

        // The acyclic prefix never appears in any returned cycle
        assert!(!detector.cycles().iter().any(|c| c.involves("a")));
    }

    #[test]
    fn test_idempotence() {
        let edges = [("a", "b"), ("b", "c"), ("c", "a"), ("b", "b")];
        let first = detect(&edges);
        let second = detect(&edges);

        assert_eq!(first.cycles(), second.cycles());
    }

    #[test]
    fn test_order_determinism() {
        let edges = [("m", "n"), ("n", "o"), ("o", "m"), ("n", "m")];
        let baseline: Vec<Vec<String>> = detect(&edges)
            .cycles()
            .iter()
            .map(|c| c.path().to_vec())
            .collect();

        for _ in 0..5 {
            let run: Vec<Vec<String>> = detect(&edges)
                .cycles()
                .iter()
                .map(|c| c.path().to_vec())
                .collect();
            assert_eq!(run, baseline);
        }
    }

    #[test]
    fn test_duplicate_edges_are_preserved() {
        // The duplicate forward edge adds an adjacency entry but no extra
        // cycle: the second traversal of it finds its target already
        // explored
        let detector = detect(&[("a", "b"), ("a", "b"), ("b", "a")]);

        assert_eq!(detector.cycle_count(), 1);
        assert_eq!(detector.cycles()[0].path(), ["a", "b", "a"]);
    }

    #[test]
    fn test_dense_component_yields_one_cycle_per_back_edge() {
        // Fully connected triangle: a→b→c→a plus the reverse edges. The
        // DFS from 'a' records a cycle for each back-edge it crosses.
        let detector = detect(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("b", "a"),
            ("c", "b"),
            ("a", "c"),
        ]);

        assert_eq!(detector.cycle_count(), 3);
        let paths: Vec<Vec<String>> = detector
            .cycles()
            .iter()
            .map(|c| c.path().to_vec())
            .collect();
        let expect =
            |ids: &[&str]| ids.iter().map(|s| s.to_string()).collect::<Vec<String>>();
        assert!(paths.contains(&expect(&["a", "b", "c", "a"])));
        assert!(paths.contains(&expect(&["b", "c", "b"])));
        assert!(paths.contains(&expect(&["a", "b", "a"])));
    }

    #[test]
    fn test_severity_from_edge_kinds() {
        use std::collections::BTreeMap;
        use std::path::PathBuf;

        use crate::catalog::{Asset, CatalogInfo};
        use crate::graph::LineageGraphBuilder;
        use crate::snapshot::{AssetRecord, EdgeRecord};

        let asset = |id: &str| {
            Asset::from(&AssetRecord {
                id: id.to_string(),
                name: None,
                kind: None,
                zone: None,
            })
        };
        let edge = |s: &str, t: &str, kind: EdgeKind| EdgeRecord {
            source: s.to_string(),
            target: t.to_string(),
            kind,
            inferred_by: None,
        };

        let mut catalogs = BTreeMap::new();
        catalogs.insert(
            PathBuf::from("c.lineage.json"),
            CatalogInfo::builder()
                .with_name("c".to_string())
                .with_assets(vec![asset("a"), asset("b"), asset("x"), asset("y")])
                .with_edges(vec![
                    edge("a", "b", EdgeKind::Data),
                    edge("b", "a", EdgeKind::Data),
                    edge("x", "y", EdgeKind::Control),
                    edge("y", "x", EdgeKind::Reference),
                ])
                .build()
                .unwrap(),
        );

        let mut builder = LineageGraphBuilder::new(false, false, false);
        builder.build_asset_graph(&catalogs, None).unwrap();

        let mut detector = CycleDetector::new();
        detector.detect_cycles(builder.graph()).unwrap();

        assert_eq!(detector.cycle_count(), 2);

        let data_cycle = detector
            .cycles()
            .iter()
            .find(|c| c.involves("a"))
            .unwrap();
        assert_eq!(data_cycle.severity(), CycleSeverity::High);

        let soft_cycle = detector
            .cycles()
            .iter()
            .find(|c| c.involves("x"))
            .unwrap();
        assert_eq!(soft_cycle.severity(), CycleSeverity::Low);
    }

    #[test]
    fn test_add_cycle_accessors() {
        let mut detector = CycleDetector::new();
        assert!(!detector.has_cycles());

        let cycle = AssetCycle::builder()
            .with_path(vec!["a".to_string(), "b".to_string(), "a".to_string()])
            .add_edge(CycleEdge::new("a", "b", EdgeKind::Data, None))
            .add_edge(CycleEdge::new("b", "a", EdgeKind::Control, None))
            .build();

        assert_eq!(cycle.severity(), CycleSeverity::Medium);
        detector.add_cycle(cycle);

        assert!(detector.has_cycles());
        assert_eq!(detector.cycle_count(), 1);
        assert_eq!(detector.cycles()[0].len(), 2);
    }
}
