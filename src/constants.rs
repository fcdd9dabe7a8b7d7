//! Configuration constants for lineage-lens
//!
//! This module contains all configurable constants used throughout the
//! application.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the telescope animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🔭 ", // Standard telescope
        "🔭·", // Faint star
        "🔭∘", // Small star
        "🔭○", // Growing
        "🔭◎", // Ring
        "🔭●", // In focus
        "🔭◎", // Ring again
        "🔭○", // Shrinking
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Snapshot discovery configuration
pub mod discovery {
    /// File name suffix identifying lineage snapshot exports
    pub const SNAPSHOT_SUFFIX: &str = ".lineage.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 8);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }

    #[test]
    fn test_discovery_constants() {
        assert!(discovery::SNAPSHOT_SUFFIX.ends_with(".json"));
    }
}
