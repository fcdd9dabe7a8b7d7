//! # Cycle Detection Module
//!
//! This module implements the cycle detection algorithm for lineage
//! graphs.
//!
//! ## Algorithm
//!
//! A depth-first traversal tracks the set of fully explored assets, the
//! assets on the active traversal path, and the path itself. An edge back
//! into an asset that is still on the active path closes a cycle; the
//! recorded cycle is the slice of the path from that asset through the
//! current one, with the re-entered asset repeated at the end. The path is
//! a single shared stack with push/pop paired around each recursive step,
//! so no per-branch copies are allocated. Start assets and neighbors are
//! visited in insertion order, which makes discovery deterministic for a
//! fixed input order. Every cycle found this way is kept; callers decide
//! how many to display.
//!
//! ## Key Components
//!
//! - **CycleDetector**: Main detector that walks the graph and collects
//!   cycles
//! - **AssetCycle**: A detected cycle with its ordered asset path
//! - **CycleEdge**: A dependency edge within a cycle
//! - **CycleSeverity**: Classification by the kinds of edges composing the
//!   loop
//!
//! ## Example
//!
//! ```
//! use lineage_lens::detector::CycleDetector;
//!
//! # fn main() -> miette::Result<()> {
//! let mut detector = CycleDetector::new();
//! detector.detect_in_edges([
//!     ("dwh.orders".to_string(), "rpt.revenue".to_string()),
//!     ("rpt.revenue".to_string(), "dwh.orders".to_string()),
//! ])?;
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycle_count(), 1);
//! assert_eq!(
//!     detector.cycles()[0].path(),
//!     ["dwh.orders", "rpt.revenue", "dwh.orders"]
//! );
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
