//! Git ignore checks
//!
//! The walker asks an [`IgnoreOracle`] whether each file would be ignored by
//! version control. The default oracle shells out to `git check-ignore`; an
//! in-process variant backed by libgit2 and a no-op variant are provided for
//! embedding and tests.

use std::cell::Cell;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use git2::Repository;

/// Answers whether a path is excluded by version-control ignore rules.
pub trait IgnoreOracle {
    fn is_ignored(&self, path: &Path) -> bool;
}

impl<T: IgnoreOracle + ?Sized> IgnoreOracle for Box<T> {
    fn is_ignored(&self, path: &Path) -> bool {
        (**self).is_ignored(path)
    }
}

impl<T: IgnoreOracle + ?Sized> IgnoreOracle for &T {
    fn is_ignored(&self, path: &Path) -> bool {
        (**self).is_ignored(path)
    }
}

/// Oracle that never ignores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIgnore;

impl IgnoreOracle for NoIgnore {
    fn is_ignored(&self, _path: &Path) -> bool {
        false
    }
}

/// Runs `git check-ignore -q <path>` once per query.
///
/// Exit status 0 means ignored; every other status means not ignored. If the
/// `git` executable cannot be found the oracle switches itself off and
/// reports "not ignored" from then on.
#[derive(Debug)]
pub struct GitCheckIgnore {
    program: OsString,
    root: PathBuf,
    unavailable: Cell<bool>,
}

impl GitCheckIgnore {
    /// Create an oracle that runs `git` from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_program(root, "git")
    }

    /// Use a different executable in place of `git`.
    pub fn with_program(root: impl Into<PathBuf>, program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            root: root.into(),
            unavailable: Cell::new(false),
        }
    }

    /// Whether a previous query found the executable missing.
    pub fn is_unavailable(&self) -> bool {
        self.unavailable.get()
    }

    fn run(&self, path: &Path) -> io::Result<bool> {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let status = Command::new(&self.program)
            .args(["check-ignore", "-q", "--"])
            .arg(relative)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(status.success())
    }
}

impl IgnoreOracle for GitCheckIgnore {
    fn is_ignored(&self, path: &Path) -> bool {
        if self.unavailable.get() {
            return false;
        }

        match self.run(path) {
            Ok(ignored) => ignored,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    program = %self.program.to_string_lossy(),
                    "ignore check unavailable, treating all files as not ignored"
                );
                self.unavailable.set(true);
                false
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "ignore check failed");
                false
            }
        }
    }
}

/// Answers ignore queries from the enclosing repository's rules via libgit2,
/// without spawning a process per file.
///
/// Agrees with `git check-ignore`: files present in the index are never
/// ignored, and a symlink is judged by its own path rather than its target.
pub struct RepoIgnoreOracle {
    repo: Repository,
    workdir: PathBuf,
}

impl RepoIgnoreOracle {
    /// Open the repository containing `path`.
    ///
    /// Returns `None` if `path` is not inside a repository with a work tree.
    pub fn discover(path: &Path) -> Option<Self> {
        let repo = Repository::discover(path).ok()?;
        let workdir = repo.workdir()?;
        let workdir = workdir.canonicalize().unwrap_or_else(|_| workdir.to_path_buf());
        Some(Self { repo, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl RepoIgnoreOracle {
    /// Path relative to the work tree, resolving only the parent directory.
    fn relative_path(&self, path: &Path) -> Option<PathBuf> {
        let name = path.file_name()?;
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let full = parent.canonicalize().ok()?.join(name);
        full.strip_prefix(&self.workdir).ok().map(Path::to_path_buf)
    }

    fn is_tracked(&self, relative: &Path) -> bool {
        self.repo
            .index()
            .is_ok_and(|index| index.get_path(relative, 0).is_some())
    }
}

impl IgnoreOracle for RepoIgnoreOracle {
    fn is_ignored(&self, path: &Path) -> bool {
        let Some(relative) = self.relative_path(path) else {
            return false;
        };
        if self.is_tracked(&relative) {
            return false;
        }
        self.repo.is_path_ignored(&relative).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestTree, git_available};

    fn create_test_repo() -> TestTree {
        let tree = TestTree::with_git();
        tree.gitignore("*.log\ngenerated/\n");
        tree
    }

    #[test]
    fn test_no_ignore() {
        assert!(!NoIgnore.is_ignored(Path::new("anything.py")));
    }

    #[test]
    fn test_missing_program_latches_unavailable() {
        let tree = TestTree::new();
        let file = tree.add_file("main.py", "print(1)\n");

        let oracle = GitCheckIgnore::with_program(tree.path(), "locreport-no-such-git-binary");
        assert!(!oracle.is_unavailable());
        assert!(!oracle.is_ignored(&file));
        assert!(oracle.is_unavailable());
        assert!(!oracle.is_ignored(&file));
    }

    #[test]
    fn test_outside_repository_not_ignored() {
        if !git_available() {
            return;
        }
        let tree = TestTree::new();
        let file = tree.add_file("debug.log", "log\n");

        // git exits with 128 here, which still means "not ignored"
        let oracle = GitCheckIgnore::new(tree.path());
        assert!(!oracle.is_ignored(&file));
        assert!(!oracle.is_unavailable());
    }

    #[test]
    fn test_check_ignore_subprocess() {
        if !git_available() {
            return;
        }
        let tree = create_test_repo();
        let ignored = tree.add_file("debug.log", "log\n");
        let kept = tree.add_file("main.py", "print(1)\n");

        let oracle = GitCheckIgnore::new(tree.path());
        assert!(oracle.is_ignored(&ignored));
        assert!(!oracle.is_ignored(&kept));
    }

    #[test]
    fn test_check_ignore_nested_directory() {
        if !git_available() {
            return;
        }
        let tree = create_test_repo();
        let file = tree.add_file("generated/out.py", "x = 1\n");

        let oracle = GitCheckIgnore::new(tree.path());
        assert!(oracle.is_ignored(&file));
    }

    #[test]
    fn test_repo_oracle() {
        if !git_available() {
            return;
        }
        let tree = create_test_repo();
        let ignored = tree.add_file("debug.log", "log\n");
        let kept = tree.add_file("main.py", "print(1)\n");
        let nested = tree.add_file("generated/out.py", "x = 1\n");

        let oracle = RepoIgnoreOracle::discover(tree.path()).unwrap();
        assert!(oracle.is_ignored(&ignored));
        assert!(oracle.is_ignored(&nested));
        assert!(!oracle.is_ignored(&kept));
    }

    #[test]
    fn test_check_ignore_dash_prefixed_name() {
        if !git_available() {
            return;
        }
        let tree = TestTree::with_git();
        tree.gitignore("-gen.py\n");
        let file = tree.add_file("-gen.py", "x = 1\n");

        let oracle = GitCheckIgnore::new(tree.path());
        assert!(oracle.is_ignored(&file));
    }

    #[test]
    fn test_repo_oracle_dash_prefixed_name() {
        if !git_available() {
            return;
        }
        let tree = TestTree::with_git();
        tree.gitignore("-gen.py\n");
        let file = tree.add_file("-gen.py", "x = 1\n");

        let oracle = RepoIgnoreOracle::discover(tree.path()).unwrap();
        assert!(oracle.is_ignored(&file));
    }

    #[test]
    fn test_tracked_file_never_ignored() {
        if !git_available() {
            return;
        }
        let tree = TestTree::with_git();
        let file = tree.add_file("gen.py", "x = 1\n");
        tree.stage("gen.py");
        tree.gitignore("gen.py\n");

        let subprocess = GitCheckIgnore::new(tree.path());
        let in_process = RepoIgnoreOracle::discover(tree.path()).unwrap();
        assert!(!subprocess.is_ignored(&file));
        assert_eq!(in_process.is_ignored(&file), subprocess.is_ignored(&file));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_judged_by_own_path() {
        use std::os::unix::fs::symlink;

        if !git_available() {
            return;
        }
        let outside = TestTree::new();
        let target = outside.add_file("target.py", "x = 1\n");

        let tree = create_test_repo();
        let link = tree.path().join("link.log");
        symlink(&target, &link).unwrap();

        let subprocess = GitCheckIgnore::new(tree.path());
        let in_process = RepoIgnoreOracle::discover(tree.path()).unwrap();
        assert!(subprocess.is_ignored(&link));
        assert!(in_process.is_ignored(&link));
    }

    #[test]
    fn test_oracles_agree_on_missing_path() {
        if !git_available() {
            return;
        }
        let tree = create_test_repo();
        let gone = tree.path().join("gone.log");

        let subprocess = GitCheckIgnore::new(tree.path());
        let in_process = RepoIgnoreOracle::discover(tree.path()).unwrap();
        assert_eq!(in_process.is_ignored(&gone), subprocess.is_ignored(&gone));
    }
}
