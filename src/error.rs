//! Error types for locreport

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a whole run.
///
/// Problems with individual files or subdirectories never surface here;
/// they are logged and skipped.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Root path does not exist
    #[error("cannot access '{0}': No such file or directory")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// Root directory could not be listed
    #[error("cannot read '{path}': {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}
