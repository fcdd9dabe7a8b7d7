//! # Catalog Analysis Module
//!
//! This module is responsible for discovering and analyzing lineage
//! snapshot exports. It identifies catalog boundaries, member assets, and
//! the dependency edges observed between them.
//!
//! ## Key Components
//!
//! - **CatalogAnalyzer**: Main analyzer that discovers catalogs and their
//!   assets
//! - **EdgeClassifier**: Classifies edges by kind (data, control,
//!   reference) and provenance
//! - **CatalogInfo**: Contains metadata about a discovered catalog
//! - **Asset**: Represents an asset within a catalog

mod edge_classifier;

pub use edge_classifier::{ClassifiedEdges, EdgeClassifier, EdgeStats};

// Re-export the main analyzer types
mod catalog_impl;
pub use catalog_impl::*;
