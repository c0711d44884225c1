//! CLI entry point for locreport

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use locreport::{Analyzer, AnalyzerConfig, WriterProgress, logging, print_report};

#[derive(Parser, Debug)]
#[command(name = "locreport")]
#[command(about = "Analyze a codebase by language and line count")]
#[command(version)]
struct Args {
    /// Path to the root of the codebase
    #[arg(default_value = ".")]
    path: PathBuf,
}

/// Colour only for an interactive terminal, honouring NO_COLOR, FORCE_COLOR and TERM=dumb.
fn should_use_color() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn main() {
    let args = Args::parse();
    logging::init_tracing();

    let analyzer = Analyzer::new(AnalyzerConfig::new(args.path));
    let aggregation = match analyzer.analyze_with_progress(&mut WriterProgress::stdout()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("locreport: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_report(&aggregation, should_use_color()) {
        eprintln!("locreport: error writing output: {}", e);
        process::exit(1);
    }
}
