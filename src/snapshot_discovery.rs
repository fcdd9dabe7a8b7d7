use std::collections::HashSet;
use std::path::{Path, PathBuf};

use miette::{Result, WrapErr};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::constants::discovery::SNAPSHOT_SUFFIX;
use crate::progress::ProgressReporter;
use crate::snapshot::LineageSnapshot;

pub struct SnapshotDiscovery {
    discovered_files: HashSet<PathBuf>,
}

impl SnapshotDiscovery {
    pub fn new() -> Self {
        Self {
            discovered_files: HashSet::new(),
        }
    }

    /// Discover all lineage snapshot files in the given paths
    ///
    /// Paths may be directories (searched recursively), individual snapshot
    /// files, or glob patterns.
    pub fn discover_all(
        &mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<SnapshotSource>> {
        let mut candidates = Vec::new();

        for path in paths {
            let path_str = path.to_string_lossy();
            if path_str.contains('*') {
                self.collect_from_glob(&path_str, &mut candidates);
                continue;
            }

            if !path.exists() {
                eprintln!(
                    "{} Path '{}' does not exist",
                    console::style("⚠").yellow(),
                    path.display()
                );
                continue;
            }

            if path.is_file() {
                self.collect_file(path, &mut candidates);
            } else {
                self.collect_in_dir(path, &mut candidates)
                    .wrap_err_with(|| {
                        format!("Failed to discover snapshots in '{}'", path.display())
                    })?;
            }
        }

        // Parse in parallel; unreadable or malformed files are skipped with a
        // warning so one bad export does not sink the whole analysis
        let mut sources: Vec<SnapshotSource> = candidates
            .into_par_iter()
            .filter_map(|file| {
                if let Some(p) = progress {
                    p.checking_snapshot(&file);
                }

                match LineageSnapshot::parse_file(&file) {
                    Ok(snapshot) => Some(SnapshotSource {
                        path: file,
                        snapshot,
                    }),
                    Err(e) => {
                        eprintln!(
                            "{} Failed to parse {}: {}",
                            console::style("⚠").yellow(),
                            file.display(),
                            e
                        );
                        None
                    }
                }
            })
            .collect();

        // Sort by path for consistent output
        sources.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(sources)
    }

    fn collect_file(&mut self, path: &Path, candidates: &mut Vec<PathBuf>) {
        if !path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().ends_with(SNAPSHOT_SUFFIX))
        {
            eprintln!(
                "{} Skipping '{}': not a {} file",
                console::style("⚠").yellow(),
                path.display(),
                SNAPSHOT_SUFFIX
            );
            return;
        }

        if self.discovered_files.insert(path.to_path_buf()) {
            candidates.push(path.to_path_buf());
        }
    }

    fn collect_in_dir(&mut self, path: &Path, candidates: &mut Vec<PathBuf>) -> Result<()> {
        for entry in WalkDir::new(path)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name();
                // Skip common directories that won't contain snapshot exports
                name != "target" && name != ".git" && name != "node_modules"
            })
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_type().is_file()
                    && e.file_name().to_string_lossy().ends_with(SNAPSHOT_SUFFIX)
            })
        {
            let file = entry.into_path();
            if self.discovered_files.insert(file.clone()) {
                candidates.push(file);
            }
        }

        Ok(())
    }

    fn collect_from_glob(&mut self, pattern: &str, candidates: &mut Vec<PathBuf>) {
        match glob::glob(pattern) {
            Ok(paths) => {
                for file in paths.flatten().filter(|p| p.is_file()) {
                    if self.discovered_files.insert(file.clone()) {
                        candidates.push(file);
                    }
                }
            }
            Err(e) => {
                eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    console::style("⚠").yellow(),
                    pattern,
                    e
                );
            }
        }
    }
}

impl Default for SnapshotDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

/// A discovered snapshot file together with its parsed contents
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    pub path: PathBuf,
    pub snapshot: LineageSnapshot,
}
