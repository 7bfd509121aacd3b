//! Terminal formatting for status lines.
//!
//! Everything here writes to stderr so that dry-run output on stdout stays
//! exactly the extracted release notes. Styling is dropped automatically when
//! stderr is not a terminal.

use console::style;

use crate::boundary::ExtractionWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display an extraction warning with a yellow warning icon.
pub fn display_warning(warning: &ExtractionWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the versions found in the changelog, one per line on stdout.
pub fn display_versions(versions: &[String]) {
    eprintln!("{}", style("Changelog versions:").bold());
    for version in versions {
        println!("{}", version);
    }
}
