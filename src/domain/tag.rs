use crate::error::{ChangelogError, Result};

/// Prefix every release ref must carry (e.g. "refs/tags/v1.2.3").
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Represents the release tag a changelog is extracted for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    /// The full ref as supplied, e.g. "refs/tags/v1.2.3"
    pub reference: String,
    version: String,
}

impl VersionTag {
    /// Parse a git ref into a version tag.
    ///
    /// The ref must start with `refs/tags/`. The version is the last path
    /// segment with a single leading 'v' removed.
    pub fn parse(reference: &str) -> Result<Self> {
        if reference.is_empty() {
            return Err(ChangelogError::config("No git tag found in VERSION"));
        }

        if !reference.starts_with(TAG_REF_PREFIX) {
            return Err(ChangelogError::config(format!(
                "Invalid git tag format '{}': expected '{}<tag>'",
                reference, TAG_REF_PREFIX
            )));
        }

        let last_segment = reference.rsplit('/').next().unwrap_or_default();
        let version = last_segment.strip_prefix('v').unwrap_or(last_segment);

        if version.is_empty() {
            return Err(ChangelogError::config(format!(
                "Git tag '{}' does not contain a version",
                reference
            )));
        }

        Ok(VersionTag {
            reference: reference.to_string(),
            version: version.to_string(),
        })
    }

    /// Version text matched against changelog headings (e.g. "1.2.3")
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether the version is a valid semantic version
    pub fn is_semver(&self) -> bool {
        semver::Version::parse(&self.version).is_ok()
    }
}

impl std::fmt::Display for VersionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.version)
    }
}
