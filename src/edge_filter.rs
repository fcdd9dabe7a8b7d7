//! Edge filtering functionality

use crate::core::EdgeKind;
use crate::snapshot::EdgeRecord;

/// Encapsulates edge filtering logic based on edge kinds and provenance
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeFilter {
    exclude_control: bool,
    exclude_reference: bool,
    exclude_inferred: bool,
}

impl EdgeFilter {
    /// Create a new edge filter
    pub fn new(exclude_control: bool, exclude_reference: bool, exclude_inferred: bool) -> Self {
        Self {
            exclude_control,
            exclude_reference,
            exclude_inferred,
        }
    }

    /// Check if control edges should be included
    pub fn include_control(&self) -> bool {
        !self.exclude_control
    }

    /// Check if reference edges should be included
    pub fn include_reference(&self) -> bool {
        !self.exclude_reference
    }

    /// Check if inferred edges should be included
    pub fn include_inferred(&self) -> bool {
        !self.exclude_inferred
    }

    /// Check if an edge record should be included in the graph
    ///
    /// Data edges are always included unless their provenance is excluded;
    /// control and reference edges are additionally subject to the kind
    /// exclusions.
    pub fn should_include(&self, edge: &EdgeRecord) -> bool {
        if edge.inferred_by.is_some() && !self.include_inferred() {
            return false;
        }

        match edge.kind {
            EdgeKind::Data => true,
            EdgeKind::Control => self.include_control(),
            EdgeKind::Reference => self.include_reference(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(kind: EdgeKind, inferred_by: Option<&str>) -> EdgeRecord {
        EdgeRecord {
            source: "a".to_string(),
            target: "b".to_string(),
            kind,
            inferred_by: inferred_by.map(str::to_string),
        }
    }

    #[test]
    fn test_default_filter_includes_everything() {
        let filter = EdgeFilter::default();
        assert!(filter.should_include(&edge(EdgeKind::Data, None)));
        assert!(filter.should_include(&edge(EdgeKind::Control, None)));
        assert!(filter.should_include(&edge(EdgeKind::Reference, Some("profiler"))));
    }

    #[test]
    fn test_kind_exclusions() {
        let filter = EdgeFilter::new(true, true, false);
        assert!(filter.should_include(&edge(EdgeKind::Data, None)));
        assert!(!filter.should_include(&edge(EdgeKind::Control, None)));
        assert!(!filter.should_include(&edge(EdgeKind::Reference, None)));
    }

    #[test]
    fn test_inferred_exclusion_applies_to_all_kinds() {
        let filter = EdgeFilter::new(false, false, true);
        assert!(!filter.should_include(&edge(EdgeKind::Data, Some("profiler"))));
        assert!(filter.should_include(&edge(EdgeKind::Data, None)));
    }
}
