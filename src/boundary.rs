use std::fmt;

/// Non-fatal issues found while extracting release notes.
/// These are reported to the user but never fail the run.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionWarning {
    /// Version extracted from the tag is not a semantic version
    NonSemverVersion { version: String },
    /// Changelog has no section for the version
    SectionNotFound {
        version: String,
        available: Vec<String>,
    },
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionWarning::NonSemverVersion { version } => {
                write!(f, "Version '{}' is not a semantic version", version)
            }
            ExtractionWarning::SectionNotFound { version, available } => {
                write!(f, "No changelog section found for version '{}'", version)?;
                if available.is_empty() {
                    write!(f, " (changelog has no version headings)")
                } else {
                    write!(f, " (available: {})", available.join(", "))
                }
            }
        }
    }
}
