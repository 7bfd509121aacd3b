use std::fs;
use std::path::Path;

use crate::domain::ChangelogDocument;
use crate::error::{ChangelogError, Result};

/// Read and split the changelog at `path`.
///
/// # Returns
/// * `Ok(ChangelogDocument)` - The changelog lines
/// * `Err(ChangelogError::FileAccess)` - If the file is missing or unreadable
pub fn read_changelog(path: &Path) -> Result<ChangelogDocument> {
    let text = fs::read_to_string(path).map_err(|e| ChangelogError::file_access(path, e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read changelog");
    Ok(ChangelogDocument::parse(&text))
}

/// Write release notes to `path`, replacing any previous contents.
///
/// The content is written exactly as given; no trailing newline is added.
pub fn write_release_notes(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ChangelogError::file_access(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote release notes");
    Ok(())
}
