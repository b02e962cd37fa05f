//! Interactive confirmation on stdin.

use std::io::{self, BufRead, Write};

/// Prints `question` with a `(y/N)` suffix and reads one line from stdin.
/// Only `y` (any case) confirms; EOF or a read error declines.
pub fn confirm(question: &str) -> bool {
    print!("{question} (y/N): ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
