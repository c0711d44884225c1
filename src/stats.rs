//! Per-language line totals collected during one analysis run

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A counted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub lines: usize,
}

/// Totals and file records for a single language.
///
/// `total` always equals the sum of `lines` over `files`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBucket {
    total: usize,
    files: Vec<FileRecord>,
}

impl LanguageBucket {
    pub fn total(&self) -> usize {
        self.total
    }

    /// Files in the order they were recorded.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Files sorted by line count descending, then by path.
    pub fn sorted_files(&self) -> Vec<&FileRecord> {
        let mut files: Vec<&FileRecord> = self.files.iter().collect();
        files.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.path.cmp(&b.path)));
        files
    }
}

/// Aggregation state for one run: language label → bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    languages: BTreeMap<String, LanguageBucket>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file under a language.
    ///
    /// Files with zero lines are not recorded; returns whether the file was
    /// added.
    pub fn record(&mut self, language: &str, path: &Path, lines: usize) -> bool {
        if lines == 0 {
            return false;
        }

        let bucket = self.languages.entry(language.to_string()).or_default();
        bucket.total += lines;
        bucket.files.push(FileRecord {
            path: path.to_path_buf(),
            lines,
        });
        true
    }

    pub fn language(&self, label: &str) -> Option<&LanguageBucket> {
        self.languages.get(label)
    }

    /// Languages in label order.
    pub fn languages(&self) -> impl Iterator<Item = (&str, &LanguageBucket)> {
        self.languages.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Languages sorted by total descending, then by label.
    pub fn sorted_languages(&self) -> Vec<(&str, &LanguageBucket)> {
        let mut langs: Vec<_> = self.languages().collect();
        // BTreeMap iteration is already label-ordered, so a stable sort keeps ties lexical
        langs.sort_by_key(|(_, bucket)| Reverse(bucket.total));
        langs
    }

    pub fn total_lines(&self) -> usize {
        self.languages.values().map(|b| b.total).sum()
    }

    pub fn file_count(&self) -> usize {
        self.languages.values().map(|b| b.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
