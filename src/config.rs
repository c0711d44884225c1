//! Analyzer configuration

use std::collections::HashSet;
use std::path::PathBuf;

use crate::language::LanguageTable;

/// Default number of recorded files between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// Manifest and lockfile names skipped regardless of extension.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "pnpm-lock.yaml",
    "yarn.lock",
    "requirements.txt",
    "Pipfile",
    "Pipfile.lock",
    "pyproject.toml",
    "setup.cfg",
    "setup.py",
    "Cargo.toml",
    "Cargo.lock",
    "composer.json",
    "composer.lock",
    "go.mod",
    "go.sum",
];

/// Dependency, build and cache directories that are never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    ".next",
    ".turbo",
    "__pycache__",
    "venv",
    "env",
    "bin",
    "obj",
    ".venv",
    ".idea",
    ".vscode",
    ".cache",
    ".pytest_cache",
];

/// Configuration for one analysis run.
///
/// Every field can be overridden independently; unspecified fields keep
/// their defaults. Exclusion sets match basenames exactly.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub root: PathBuf,
    pub excluded_dirs: HashSet<String>,
    pub excluded_files: HashSet<String>,
    pub languages: LanguageTable,
    progress_interval: usize,
}

impl AnalyzerConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Replace the excluded directory names.
    ///
    /// An empty set disables directory exclusion; it does not restore the
    /// defaults.
    pub fn with_excluded_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the excluded file names.
    ///
    /// An empty set disables file exclusion; it does not restore the
    /// defaults.
    pub fn with_excluded_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages(mut self, languages: LanguageTable) -> Self {
        self.languages = languages;
        self
    }

    /// Set the progress interval. Zero is clamped to one.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    pub fn progress_interval(&self) -> usize {
        self.progress_interval
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.excluded_files.contains(name)
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            excluded_dirs: to_set(DEFAULT_EXCLUDED_DIRS),
            excluded_files: to_set(DEFAULT_EXCLUDED_FILES),
            languages: LanguageTable::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

fn to_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
