//! Tree walking and aggregation
//!
//! [`Analyzer`] walks the configured root once, pruning excluded directories,
//! and folds every countable file into an [`Aggregation`].

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use ignore::{DirEntry, WalkBuilder};

use crate::config::AnalyzerConfig;
use crate::counter::count_lines;
use crate::error::AnalyzeError;
use crate::git::{GitCheckIgnore, IgnoreOracle};
use crate::stats::Aggregation;
use crate::Result;

/// Receives progress notifications during a run.
pub trait ProgressReporter {
    /// Called with the number of files recorded so far.
    fn progress(&mut self, processed: usize);
}

/// Discards progress notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn progress(&mut self, _processed: usize) {}
}

/// Prints `Processed N files...` lines to a writer.
pub struct WriterProgress<W: Write> {
    out: W,
}

impl<W: Write> WriterProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ProgressReporter for WriterProgress<W> {
    fn progress(&mut self, processed: usize) {
        // write errors are not fatal to the run
        if writeln!(self.out, "Processed {} files...", processed).is_err() {
            return;
        }
        let _ = self.out.flush();
    }
}

impl ProgressReporter for Vec<usize> {
    fn progress(&mut self, processed: usize) {
        self.push(processed);
    }
}

/// Walks a directory tree and aggregates line counts by language.
pub struct Analyzer<O: IgnoreOracle = GitCheckIgnore> {
    config: AnalyzerConfig,
    oracle: O,
}

impl Analyzer<GitCheckIgnore> {
    /// Analyzer that consults `git check-ignore` from the configured root.
    pub fn new(config: AnalyzerConfig) -> Self {
        let oracle = GitCheckIgnore::new(config.root.clone());
        Self { config, oracle }
    }
}

impl<O: IgnoreOracle> Analyzer<O> {
    pub fn with_oracle(config: AnalyzerConfig, oracle: O) -> Self {
        Self { config, oracle }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Run the analysis without progress output.
    pub fn analyze(&self) -> Result<Aggregation> {
        self.analyze_with_progress(&mut NoProgress)
    }

    /// Run the analysis, notifying `progress` every `progress_interval`
    /// recorded files and once more at the end for a partial batch.
    pub fn analyze_with_progress<P: ProgressReporter + ?Sized>(
        &self,
        progress: &mut P,
    ) -> Result<Aggregation> {
        let root = self.config.root.as_path();
        check_root(root)?;

        let interval = self.config.progress_interval();
        let mut aggregation = Aggregation::new();
        let mut processed = 0usize;

        for entry in self.build_walker().build() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.depth() == 0 || !is_file_entry(&entry) {
                continue;
            }

            if self.record_file(entry.path(), &mut aggregation) {
                processed += 1;
                if processed % interval == 0 {
                    progress.progress(processed);
                }
            }
        }

        if processed % interval != 0 {
            progress.progress(processed);
        }

        tracing::debug!(
            files = processed,
            lines = aggregation.total_lines(),
            "analysis complete"
        );

        Ok(aggregation)
    }

    /// Apply the skip rules to one file and record it if it survives.
    fn record_file(&self, path: &Path, aggregation: &mut Aggregation) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };

        if self.config.is_excluded_file(&name.to_string_lossy()) {
            tracing::trace!(path = %path.display(), "excluded file");
            return false;
        }

        if self.oracle.is_ignored(path) {
            tracing::trace!(path = %path.display(), "ignored by version control");
            return false;
        }

        let Some(language) = self.config.languages.classify(path) else {
            return false;
        };

        let lines = count_lines(path);
        aggregation.record(language, path, lines)
    }

    fn build_walker(&self) -> WalkBuilder {
        let excluded: Arc<HashSet<String>> = Arc::new(self.config.excluded_dirs.clone());

        let mut builder = WalkBuilder::new(&self.config.root);
        builder
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                // the root itself is never pruned
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                let name = entry.file_name().to_string_lossy();
                !(is_dir && excluded.contains(&*name))
            });
        builder
    }
}

/// Regular files, plus symlinks that resolve to regular files.
fn is_file_entry(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(AnalyzeError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(AnalyzeError::NotADirectory(root.to_path_buf()));
    }
    std::fs::read_dir(root).map_err(|source| AnalyzeError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}
