use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use console::style;
use miette::{Result, WrapErr};

use super::{EdgeClassifier, EdgeStats};
use crate::common::ConfigBuilder;
use crate::constants::discovery::SNAPSHOT_SUFFIX;
use crate::core::AssetKind;
use crate::impl_builder;
use crate::progress::ProgressReporter;
use crate::snapshot::{AssetRecord, EdgeRecord};
use crate::snapshot_discovery::SnapshotDiscovery;

/// Discovers lineage snapshots and indexes their catalogs and assets
#[derive(Debug, Clone, Default)]
pub struct CatalogAnalyzer {
    catalogs: BTreeMap<PathBuf, CatalogInfo>,
    asset_to_catalog: HashMap<String, PathBuf>,
}

/// A discovered catalog: one snapshot file's worth of assets and edges
#[derive(Debug, Clone)]
pub struct CatalogInfo {
    name: String,
    assets: Vec<Asset>,
    edges: Vec<EdgeRecord>,
}

impl CatalogInfo {
    pub fn builder() -> CatalogInfoBuilder {
        CatalogInfoBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Per-kind edge counts for this catalog
    pub fn edge_stats(&self) -> EdgeStats {
        EdgeClassifier::classify(&self.edges).stats()
    }
}

impl_builder! {
    CatalogInfoBuilder => CatalogInfo {
        with_name => name: String,
        with_assets => assets: Vec<Asset>,
        with_edges => edges: Vec<EdgeRecord>,
    }
}

/// A cataloged asset
#[derive(Debug, Clone)]
pub struct Asset {
    id: String,
    name: String,
    kind: AssetKind,
    zone: Option<String>,
}

impl Asset {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

impl From<&AssetRecord> for Asset {
    fn from(record: &AssetRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone().unwrap_or_else(|| record.id.clone()),
            kind: record.kind.unwrap_or_default(),
            zone: record.zone.clone(),
        }
    }
}

impl CatalogAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover all snapshots under the given paths and index their contents
    pub fn discover_catalogs(
        &mut self,
        paths: &[PathBuf],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        if let Some(p) = progress.as_mut() {
            p.start_discovery();
        }

        let mut discovery = SnapshotDiscovery::new();
        let sources = discovery
            .discover_all(paths, progress.as_deref())
            .wrap_err("Failed to discover lineage snapshots")?;

        for source in sources {
            let name = source
                .snapshot
                .catalog
                .clone()
                .unwrap_or_else(|| catalog_name_from_path(&source.path));

            if let Some(p) = progress.as_deref() {
                p.analyzing_catalog(&name);
            }

            let assets: Vec<Asset> = source.snapshot.assets.iter().map(Asset::from).collect();

            for asset in &assets {
                match self.asset_to_catalog.get(asset.id()) {
                    Some(existing) if existing != &source.path => {
                        eprintln!(
                            "{} Asset '{}' declared in multiple snapshots; keeping the first \
                             declaration",
                            style("⚠").yellow(),
                            asset.id()
                        );
                    }
                    Some(_) => {}
                    None => {
                        self.asset_to_catalog
                            .insert(asset.id().to_string(), source.path.clone());
                    }
                }
            }

            let info = CatalogInfo::builder()
                .with_name(name)
                .with_assets(assets)
                .with_edges(source.snapshot.edges.clone())
                .build()
                .wrap_err("Failed to build CatalogInfo")?;

            self.catalogs.insert(source.path, info);
        }

        if let Some(p) = progress.as_mut() {
            p.finish_discovery(self.catalogs.len());
        }

        Ok(())
    }

    /// Discovered catalogs, keyed by snapshot path in sorted order
    pub fn catalogs(&self) -> &BTreeMap<PathBuf, CatalogInfo> {
        &self.catalogs
    }

    /// Map from asset id to the snapshot that first declared it
    pub fn asset_to_catalog(&self) -> &HashMap<String, PathBuf> {
        &self.asset_to_catalog
    }

    /// Total number of declared assets across all catalogs
    pub fn asset_count(&self) -> usize {
        self.asset_to_catalog.len()
    }

    /// Combined edge statistics across all catalogs
    pub fn edge_stats(&self) -> EdgeStats {
        let mut stats = EdgeStats::default();
        for info in self.catalogs.values() {
            stats.merge(&info.edge_stats());
        }
        stats
    }
}

/// Derive a catalog name from a snapshot file path
fn catalog_name_from_path(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .map(|n| {
            n.strip_suffix(SNAPSHOT_SUFFIX)
                .map(str::to_string)
                .unwrap_or(n)
        })
        .unwrap_or_else(|| "catalog".to_string())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_snapshot(dir: &std::path::Path, file: &str, content: &str) {
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_discover_catalogs_indexes_assets() {
        let temp = TempDir::new().unwrap();
        write_snapshot(
            temp.path(),
            "finance.lineage.json",
            r#"{
  "catalog": "finance",
  "assets": [
    { "id": "dwh.orders", "kind": "table" },
    { "id": "rpt.revenue", "kind": "view" }
  ],
  "edges": [ { "source": "dwh.orders", "target": "rpt.revenue" } ]
}"#,
        );
        write_snapshot(
            temp.path(),
            "ops.lineage.json",
            r#"{
  "assets": [ { "id": "job.loader", "kind": "pipeline" } ],
  "edges": [
    { "source": "job.loader", "target": "dwh.orders", "kind": "control" }
  ]
}"#,
        );

        let mut analyzer = CatalogAnalyzer::new();
        analyzer
            .discover_catalogs(&[temp.path().to_path_buf()], None)
            .unwrap();

        assert_eq!(analyzer.catalogs().len(), 2);
        assert_eq!(analyzer.asset_count(), 3);

        let names: Vec<&str> = analyzer
            .catalogs()
            .values()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["finance", "ops"]);

        let stats = analyzer.edge_stats();
        assert_eq!(stats.data, 1);
        assert_eq!(stats.control, 1);

        // Ownership index points back to the declaring snapshot
        let owner = analyzer.asset_to_catalog().get("job.loader").unwrap();
        assert!(owner.ends_with("ops.lineage.json"));
    }

    #[test]
    fn test_catalog_name_falls_back_to_file_stem() {
        let temp = TempDir::new().unwrap();
        write_snapshot(
            temp.path(),
            "unnamed.lineage.json",
            r#"{ "assets": [ { "id": "x" } ], "edges": [] }"#,
        );

        let mut analyzer = CatalogAnalyzer::new();
        analyzer
            .discover_catalogs(&[temp.path().to_path_buf()], None)
            .unwrap();

        let info = analyzer.catalogs().values().next().unwrap();
        assert_eq!(info.name(), "unnamed");
    }

    #[test]
    fn test_duplicate_asset_keeps_first_declaration() {
        let temp = TempDir::new().unwrap();
        write_snapshot(
            temp.path(),
            "a.lineage.json",
            r#"{ "catalog": "a", "assets": [ { "id": "shared.asset" } ], "edges": [] }"#,
        );
        write_snapshot(
            temp.path(),
            "b.lineage.json",
            r#"{ "catalog": "b", "assets": [ { "id": "shared.asset" } ], "edges": [] }"#,
        );

        let mut analyzer = CatalogAnalyzer::new();
        analyzer
            .discover_catalogs(&[temp.path().to_path_buf()], None)
            .unwrap();

        assert_eq!(analyzer.asset_count(), 1);
        let owner = analyzer.asset_to_catalog().get("shared.asset").unwrap();
        assert!(owner.ends_with("a.lineage.json"));
    }

    #[test]
    fn test_asset_defaults() {
        let record = AssetRecord {
            id: "dwh.orders".to_string(),
            name: None,
            kind: None,
            zone: None,
        };

        let asset = Asset::from(&record);
        assert_eq!(asset.name(), "dwh.orders");
        assert_eq!(asset.kind(), AssetKind::Unknown);
        assert!(asset.zone().is_none());
    }
}
