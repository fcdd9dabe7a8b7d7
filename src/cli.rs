use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "lineage-lens",
    about = "🔭 Detect circular dependencies in data catalog lineage graphs",
    long_about = "lineage-lens analyzes exported data-catalog lineage snapshots to find circular \
                  dependencies between assets. It includes all edge kinds by default and provides \
                  multiple visualization options.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the lineage graph for circular dependencies
    ///
    /// Analyzes your catalog's dependency graph to find circular
    /// dependencies between assets. Circular dependencies break refresh
    /// ordering and make impact analysis unreliable. This command helps
    /// you identify and fix these cycles before they cause problems.
    #[command(
        long_about = "Analyze asset dependencies to detect circular dependency chains. This \
                      command reads all lineage snapshot files under the given paths, builds a \
                      dependency graph, and walks it depth-first to find every cycle reachable \
                      from each asset. By default it checks for cycles between individual assets, \
                      but can also check for cycles between catalog domains using --domains."
    )]
    Scan {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "LINEAGE_LENS_ERROR_ON_CYCLES")]
        error_on_cycles: bool,

        /// Check for cycles between catalog domains instead of between
        /// individual assets
        #[arg(long, env = "LINEAGE_LENS_DOMAINS")]
        domains: bool,
    },

    /// Chart the lineage graph in a visual format
    ///
    /// Generates visual representations of your asset dependency graph
    /// in multiple formats. Useful for documentation, debugging complex
    /// data-flow relationships, or understanding your catalog structure.
    #[command(
        long_about = "Generate visual dependency graphs in various formats including ASCII art, \
                      Mermaid diagrams, Graphviz DOT files, and D2 diagrams. The generated graphs \
                      show data-flow relationships, highlight circular dependencies, and can \
                      include per-edge details. Use this to visualize and understand complex \
                      lineage structures in your catalog."
    )]
    Chart {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = "ascii",
            env = "LINEAGE_LENS_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "LINEAGE_LENS_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(long, default_value = "true", env = "LINEAGE_LENS_HIGHLIGHT_CYCLES")]
        highlight_cycles: bool,

        /// Include per-edge details
        #[arg(long, env = "LINEAGE_LENS_SHOW_EDGES")]
        show_edges: bool,
    },

    /// Focus on cycles involving a specific asset
    ///
    /// Restricts cycle detection to the circular dependencies that
    /// involve one asset. Useful for debugging why a particular table or
    /// pipeline is part of a dependency cycle.
    #[command(
        long_about = "Analyze circular dependencies involving a specific asset. This command \
                      filters the cycle detection results to show only cycles that include the \
                      given asset id, making it easier to understand and fix issues with a \
                      particular dataset. Works for both asset-level and domain-level cycle \
                      detection."
    )]
    Focus {
        /// Id of the asset to analyze
        #[arg(value_name = "ASSET_ID", env = "LINEAGE_LENS_ASSET_ID")]
        asset_id: String,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Check for cycles between catalog domains instead of between
        /// individual assets
        #[arg(long, env = "LINEAGE_LENS_DOMAINS")]
        domains: bool,
    },

    /// Trace upstream and downstream dependencies of assets
    ///
    /// Shows the dependency relationships between assets in your catalog.
    /// Can display upstream sources, downstream consumers, and transitive
    /// dependencies to help you understand your data flows.
    #[command(
        long_about = "Display asset dependency relationships in your catalog. Shows the upstream \
                      assets each asset is derived from, and with --reverse, the downstream \
                      consumers that read from it. The --transitive flag includes indirect \
                      dependencies. This is particularly useful for understanding the provenance \
                      of a dataset and planning schema changes."
    )]
    Trace {
        /// Specific asset to analyze (shows all assets if not specified)
        #[arg(long, value_name = "ASSET_ID", env = "LINEAGE_LENS_ASSET")]
        asset: Option<String>,

        /// Show downstream consumers (what reads from the specified asset)
        #[arg(long, env = "LINEAGE_LENS_REVERSE")]
        reverse: bool,

        /// Include transitive dependencies (dependencies of dependencies)
        #[arg(long, env = "LINEAGE_LENS_TRANSITIVE")]
        transitive: bool,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Estimate the impact of changing specific assets
    ///
    /// Analyzes which assets and domains are affected by changes to
    /// specific assets. Essential for change management to determine what
    /// needs to be revalidated or backfilled after a schema change.
    #[command(
        long_about = "Determine which assets and domains are affected by changes to the given \
                      assets. This command traces forward through the lineage graph to find every \
                      downstream consumer of the changed assets. Perfect for scoping the blast \
                      radius of a schema migration before it ships. Supports JSON output for easy \
                      integration."
    )]
    Impact {
        /// Ids of the changed assets
        #[arg(
            required = true,
            value_name = "ASSET_IDS",
            help = "Assets that have changed",
            env = "LINEAGE_LENS_ASSETS"
        )]
        assets: Vec<String>,

        /// Include asset-level information in output
        #[arg(long)]
        show_assets: bool,

        /// Include only directly affected assets (no transitive propagation)
        #[arg(long, env = "LINEAGE_LENS_DIRECT_ONLY")]
        direct_only: bool,

        /// Exclude control edges from analysis
        #[arg(long, env = "LINEAGE_LENS_EXCLUDE_CONTROL")]
        exclude_control: bool,

        /// Exclude reference edges from analysis
        #[arg(long, env = "LINEAGE_LENS_EXCLUDE_REFERENCE")]
        exclude_reference: bool,

        /// Exclude edges inferred by discovery engines
        #[arg(long, env = "LINEAGE_LENS_EXCLUDE_INFERRED")]
        exclude_inferred: bool,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
    D2,
}
