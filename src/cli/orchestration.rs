//! Main workflow orchestration logic
//!
//! Provides the extract workflow separately from CLI argument parsing so it
//! can be driven programmatically and tested without clap.

use std::path::{Path, PathBuf};

use crate::boundary::ExtractionWarning;
use crate::config::{Config, ReleaseSettings};
use crate::error::Result;
use crate::fs_ops;

/// What the workflow did with the extracted notes
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    /// Dry run: content is meant for standard output, nothing was written
    Printed { content: String },
    /// Content was written to `path`
    Written { path: PathBuf, content: String },
}

impl WorkflowOutcome {
    pub fn content(&self) -> &str {
        match self {
            WorkflowOutcome::Printed { content } | WorkflowOutcome::Written { content, .. } => {
                content
            }
        }
    }
}

/// Result of a successful extract workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub outcome: WorkflowOutcome,
    pub warnings: Vec<ExtractionWarning>,
}

/// Main extract workflow
///
/// 1. Read the changelog under the repository root
/// 2. Extract the section for the release version
/// 3. Either hand the content back for printing (dry run) or write it to the
///    output file
///
/// Settings are validated before this is called, so a bad tag never reaches
/// the filesystem.
pub fn run_extract_workflow(settings: &ReleaseSettings, config: &Config) -> Result<WorkflowResult> {
    let mut warnings = Vec::new();
    let version = settings.tag.version();

    if !settings.tag.is_semver() {
        warnings.push(ExtractionWarning::NonSemverVersion {
            version: version.to_string(),
        });
    }

    let changelog_path = settings.root.join(&config.changelog_file);
    let document = fs_ops::read_changelog(&changelog_path)?;
    let section = document.extract(version, &config.preamble());

    if !section.found {
        warnings.push(ExtractionWarning::SectionNotFound {
            version: version.to_string(),
            available: document.versions(),
        });
    }

    tracing::info!(
        version,
        found = section.found,
        dry_run = settings.dry_run,
        "extracted release notes"
    );

    let outcome = if settings.dry_run {
        WorkflowOutcome::Printed {
            content: section.content,
        }
    } else {
        let path = settings.root.join(&config.output_file);
        fs_ops::write_release_notes(&path, &section.content)?;
        WorkflowOutcome::Written {
            path,
            content: section.content,
        }
    };

    Ok(WorkflowResult { outcome, warnings })
}

/// Versions listed in the changelog under `root`.
pub fn list_versions(root: &Path, config: &Config) -> Result<Vec<String>> {
    let document = fs_ops::read_changelog(&root.join(&config.changelog_file))?;
    Ok(document.versions())
}
