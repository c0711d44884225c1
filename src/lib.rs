//! locreport - count lines of code per language, skipping what git ignores
//!
//! ```no_run
//! use locreport::{Analyzer, AnalyzerConfig, render_report};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::new("."));
//! let aggregation = analyzer.analyze()?;
//! print!("{}", render_report(&aggregation));
//! # Ok::<(), locreport::AnalyzeError>(())
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod git;
pub mod language;
pub mod logging;
pub mod report;
pub mod stats;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{AnalyzerConfig, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILES};
pub use counter::count_lines;
pub use error::AnalyzeError;
pub use git::{GitCheckIgnore, IgnoreOracle, NoIgnore, RepoIgnoreOracle};
pub use language::LanguageTable;
pub use report::{print_report, render_report, write_report};
pub use stats::{Aggregation, FileRecord, LanguageBucket};
pub use walker::{Analyzer, NoProgress, ProgressReporter, WriterProgress};

/// Result type for locreport operations
pub type Result<T> = std::result::Result<T, AnalyzeError>;
