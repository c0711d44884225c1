//! Line counting

use std::path::Path;

/// Count the lines in a file.
///
/// Every line counts, blank ones included. `\n`, `\r\n` and a lone `\r` each
/// end a line, and trailing text without a terminator is one more line.
/// Invalid UTF-8 sequences are dropped before counting. Any read failure
/// yields 0.
pub fn count_lines(path: &Path) -> usize {
    match std::fs::read(path) {
        Ok(content) => count_lines_in(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unreadable file counted as empty");
            0
        }
    }
}

/// Count lines in an in-memory buffer using the rules of [`count_lines`].
pub fn count_lines_in(content: &[u8]) -> usize {
    let mut lines = 0;
    let mut pending = false;
    let mut after_cr = false;

    for chunk in content.utf8_chunks() {
        for b in chunk.valid().bytes() {
            match b {
                b'\n' if after_cr => {
                    // second half of \r\n, already counted
                    after_cr = false;
                }
                b'\n' => {
                    lines += 1;
                    pending = false;
                }
                b'\r' => {
                    lines += 1;
                    pending = false;
                    after_cr = true;
                }
                _ => {
                    pending = true;
                    after_cr = false;
                }
            }
        }
    }

    if pending { lines + 1 } else { lines }
}
