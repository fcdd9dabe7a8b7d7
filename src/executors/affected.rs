//! Executor for the impact command

use std::collections::HashMap;
use std::fmt::Write;

use miette::{Result, WrapErr};

use crate::catalog::CatalogAnalyzer;
use crate::cli::OutputFormat;
use crate::commands::affected::{ImpactAnalysis, ImpactJsonReport, ImpactResult};
use crate::config::ImpactConfig;
use crate::error::LineageLensError;
use crate::executors::CommandExecutor;
use crate::graph::LineageGraphBuilder;
use crate::progress::ProgressReporter;

pub struct AffectedExecutor;

impl CommandExecutor for AffectedExecutor {
    type Config = ImpactConfig;

    fn execute(config: Self::Config) -> Result<()> {
        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        // Discover catalogs
        let mut analyzer = CatalogAnalyzer::new();
        analyzer
            .discover_catalogs(&config.paths, progress.as_mut())
            .wrap_err("Failed to discover lineage snapshots")?;

        // Build lineage graph for analysis
        let mut graph_builder = LineageGraphBuilder::new(
            config.exclude_control,
            config.exclude_reference,
            config.exclude_inferred,
        );

        graph_builder
            .build_asset_graph(analyzer.catalogs(), progress.as_ref())
            .wrap_err("Failed to build lineage graph")?;

        // Map each asset to its owning catalog domain
        let mut asset_domains: HashMap<String, String> = HashMap::new();
        for info in analyzer.catalogs().values() {
            for asset in info.assets() {
                asset_domains
                    .entry(asset.id().to_string())
                    .or_insert_with(|| info.name().to_string());
            }
        }

        let impact_analysis = ImpactAnalysis::new(graph_builder.graph(), asset_domains);

        // Trace the blast radius of the changed assets
        let result = impact_analysis.analyze_changed_assets(&config.assets);

        // Generate report based on format
        let report = match config.format {
            OutputFormat::Json => generate_json_report(&result, &impact_analysis, &config)?,
            OutputFormat::Human => generate_human_report(&result, &config)?,
            OutputFormat::GitHub => generate_github_report(&result, &config)?,
            OutputFormat::Junit => generate_junit_report(&result, &config)?,
        };

        println!("{report}");

        // Report unmatched assets
        if !result.unmatched_assets.is_empty() && config.format == OutputFormat::Human {
            eprintln!("\n⚠️  Warning: Could not find the following assets in any snapshot:");
            for asset in &result.unmatched_assets {
                eprintln!("  - {asset}");
            }
        }

        Ok(())
    }
}

fn generate_json_report(
    result: &ImpactResult,
    analysis: &ImpactAnalysis,
    config: &ImpactConfig,
) -> Result<String, LineageLensError> {
    let report = if config.direct_only {
        // For direct_only mode, filter the report to the changed assets
        // themselves
        let full_report = result.to_json_report(analysis);
        ImpactJsonReport {
            affected_assets: full_report
                .affected_assets
                .into_iter()
                .filter(|asset| asset.is_directly_affected)
                .collect(),
            affected_domains: full_report
                .affected_domains
                .into_iter()
                .filter(|domain| result.directly_affected_domains.contains(domain))
                .collect(),
            directly_affected_assets: full_report.directly_affected_assets,
            directly_affected_domains: full_report.directly_affected_domains,
            unmatched_assets: full_report.unmatched_assets,
        }
    } else {
        result.to_json_report(analysis)
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn generate_human_report(
    result: &ImpactResult,
    config: &ImpactConfig,
) -> Result<String, LineageLensError> {
    let mut output = String::new();

    writeln!(
        output,
        "\n📁 Analyzing impact of {} changed asset(s)",
        config.assets.len()
    )?;

    // Directly affected
    writeln!(output, "\n🎯 Directly affected:")?;
    if config.show_assets {
        writeln!(
            output,
            "  Assets: {}",
            result.directly_affected_assets.len()
        )?;
        for asset_id in &result.directly_affected_assets {
            writeln!(output, "    - {asset_id}")?;
        }
    }
    writeln!(
        output,
        "  Domains: {}",
        result.directly_affected_domains.len()
    )?;
    for domain in &result.directly_affected_domains {
        writeln!(output, "    📦 {domain}")?;
    }

    // All affected (including downstream consumers)
    if !config.direct_only {
        writeln!(
            output,
            "\n🔄 All affected (including downstream consumers):"
        )?;
        if config.show_assets {
            writeln!(output, "  Assets: {}", result.all_affected_assets.len())?;
            for asset_id in &result.all_affected_assets {
                if !result.directly_affected_assets.contains(asset_id) {
                    writeln!(output, "    - {asset_id} (downstream)")?;
                }
            }
        }
        writeln!(output, "  Domains: {}", result.all_affected_domains.len())?;
        for domain in &result.all_affected_domains {
            if !result.directly_affected_domains.contains(domain) {
                writeln!(output, "    📦 {domain} (downstream)")?;
            }
        }
    }

    Ok(output)
}

fn generate_github_report(
    result: &ImpactResult,
    config: &ImpactConfig,
) -> Result<String, LineageLensError> {
    let mut output = String::new();

    let domains = if config.direct_only {
        &result.directly_affected_domains
    } else {
        &result.all_affected_domains
    };

    writeln!(
        output,
        "::notice title=Impact Analysis::Analyzed {} assets, found {} affected domain{}",
        config.assets.len(),
        domains.len(),
        if domains.len() == 1 { "" } else { "s" }
    )?;

    if !domains.is_empty() {
        let domain_list: Vec<_> = domains.iter().cloned().collect();
        writeln!(
            output,
            "::notice title=Affected Domains::{}",
            domain_list.join(", ")
        )?;
    }

    Ok(output)
}

fn generate_junit_report(
    result: &ImpactResult,
    config: &ImpactConfig,
) -> Result<String, LineageLensError> {
    let mut output = String::new();

    writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        output,
        r#"<testsuites name="impact-analysis" tests="1" failures="0">"#
    )?;
    writeln!(
        output,
        r#"  <testsuite name="asset-analysis" tests="1" failures="0">"#
    )?;
    writeln!(
        output,
        r#"    <testcase name="analyze-changed-assets" classname="lineage-lens">"#
    )?;

    writeln!(output, "      <system-out>")?;
    writeln!(output, "        Assets analyzed: {}", config.assets.len())?;
    writeln!(
        output,
        "        Directly affected assets: {}",
        result.directly_affected_assets.len()
    )?;
    writeln!(
        output,
        "        Directly affected domains: {}",
        result.directly_affected_domains.len()
    )?;

    if !config.direct_only {
        writeln!(
            output,
            "        All affected assets: {}",
            result.all_affected_assets.len()
        )?;
        writeln!(
            output,
            "        All affected domains: {}",
            result.all_affected_domains.len()
        )?;
    }

    writeln!(output, "      </system-out>")?;
    writeln!(output, r#"    </testcase>"#)?;
    writeln!(output, r#"  </testsuite>"#)?;
    writeln!(output, r#"</testsuites>"#)?;

    Ok(output)
}
