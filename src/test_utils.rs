//! Test utilities for building temporary source trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary directory tree, optionally a git repository.
///
/// The directory is removed when dropped.
pub struct TestTree {
    dir: TempDir,
    git_initialized: bool,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            git_initialized: false,
        }
    }

    /// Create a new temporary directory with git initialized.
    pub fn with_git() -> Self {
        let mut tree = Self::new();
        tree.init_git();
        tree
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run `git init` in the temporary directory.
    pub fn init_git(&mut self) {
        Command::new("git")
            .args(["init"])
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to init git");

        self.git_initialized = true;
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Write raw bytes, for content that is not valid UTF-8.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a file to the git index.
    pub fn stage(&self, path: &str) {
        assert!(self.git_initialized, "Git not initialized");
        Command::new("git")
            .args(["add", "--", path])
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to git add");
    }

    /// Write a `.gitignore` at the root of the tree.
    pub fn gitignore(&self, patterns: &str) -> PathBuf {
        self.add_file(".gitignore", patterns)
    }

    /// Populate `count` Python files of `lines` lines each, spread across
    /// a few nested packages.
    pub fn populate(&self, count: usize, lines: usize) {
        let body = "value = 1\n".repeat(lines);
        for i in 0..count {
            self.add_file(&format!("pkg{}/mod{}/file_{}.py", i % 4, i % 3, i), &body);
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a usable `git` executable is on `PATH`.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
