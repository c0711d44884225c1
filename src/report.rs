//! Report formatting
//!
//! Renders an [`Aggregation`] as a plain-text summary: one block per language
//! (largest first) listing its files, then a grand total.

use std::io::{self, Write};

use termcolor::{ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::stats::Aggregation;

const LABEL_WIDTH: usize = 15;
const SEPARATOR_WIDTH: usize = 40;

/// Write the report to any colour-capable writer.
pub fn write_report<W: WriteColor>(agg: &Aggregation, out: &mut W) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    for (label, bucket) in agg.sorted_languages() {
        out.set_color(&bold)?;
        write!(out, "{:<width$}", label, width = LABEL_WIDTH)?;
        out.reset()?;
        writeln!(out, " {} lines", bucket.total())?;

        for file in bucket.sorted_files() {
            writeln!(out, "  {:>6} lines  {}", file.lines, file.path.display())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
    out.set_color(&bold)?;
    write!(out, "{:<width$}", "Total", width = LABEL_WIDTH)?;
    out.reset()?;
    writeln!(out, " {} lines", agg.total_lines())?;

    Ok(())
}

/// Render the report as plain text.
pub fn render_report(agg: &Aggregation) -> String {
    let mut out = NoColor::new(Vec::new());
    // writing into a Vec cannot fail
    let _ = write_report(agg, &mut out);
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

/// Print the report to stdout.
pub fn print_report(agg: &Aggregation, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_report(agg, &mut stdout)?;
    stdout.flush()
}
