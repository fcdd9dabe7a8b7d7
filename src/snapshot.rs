use std::path::Path;

use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::core::{AssetKind, EdgeKind};
use crate::error::LineageLensError;

/// A lineage snapshot document exported from a data catalog
///
/// Snapshots are JSON files carrying the asset inventory of one catalog
/// domain plus the dependency edges observed between assets. Edges may
/// reference assets declared in other snapshots.
#[derive(Debug, Clone, Deserialize)]
pub struct LineageSnapshot {
    pub catalog: Option<String>,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// A single asset declaration in a snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub name: Option<String>,
    pub kind: Option<AssetKind>,
    pub zone: Option<String>,
}

/// A single dependency edge in a snapshot
///
/// `source` flows into `target`: the target asset depends on / derives
/// from the source asset. `inferred_by` names the discovery engine that
/// inferred the edge; declared edges leave it unset.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub kind: EdgeKind,
    pub inferred_by: Option<String>,
}

impl LineageSnapshot {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LineageLensError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })
            .into_diagnostic()?;

        Self::parse_str(&content, &path.display().to_string()).map_err(Into::into)
    }

    pub fn parse_str(content: &str, origin: &str) -> Result<Self, LineageLensError> {
        serde_json::from_str(content).map_err(|e| {
            let span = span_for_error(content, &e);

            LineageLensError::SnapshotParseError(Box::new(crate::error::SnapshotParseError {
                file: origin.to_string(),
                source_code: NamedSource::new(origin.to_string(), content.to_string()),
                span,
                source: e,
            }))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.edges.is_empty()
    }
}

/// Convert serde_json's 1-based line/column into a byte span over the content
fn span_for_error(content: &str, error: &serde_json::Error) -> Option<SourceSpan> {
    let line = error.line();
    if line == 0 {
        return None;
    }

    let mut offset = 0usize;
    for (i, text) in content.split('\n').enumerate() {
        if i + 1 == line {
            offset += error.column().saturating_sub(1).min(text.len());
            return Some(SourceSpan::new(offset.into(), 1));
        }
        offset += text.len() + 1;
    }

    None
}
