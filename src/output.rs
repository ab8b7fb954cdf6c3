//! Result publication and terminal display.
//!
//! Mirrors the Actions runtime contract: when `GITHUB_OUTPUT` names a
//! file, outputs are appended there as `key=value` lines; otherwise
//! they are printed to stdout.

use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use crate::engine::Verdict;
use crate::error::Result;

/// Publish a single `key=value` output.
pub fn set_output(key: &str, value: &str) -> Result<()> {
    match env::var_os("GITHUB_OUTPUT") {
        Some(path) => {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", key, value)?;
        }
        None => println!("{}={}", key, value),
    }
    Ok(())
}

/// Publish both outputs of a verdict.
pub fn publish_verdict(verdict: &Verdict) -> Result<()> {
    set_output("valid", if verdict.valid { "true" } else { "false" })?;
    set_output("message", &verdict.message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a rejected verdict with a red cross. A rejection
/// is an expected outcome, not a process error.
pub fn display_rejection(message: &str) {
    println!("\x1b[31m✗\x1b[0m {}", message);
}
