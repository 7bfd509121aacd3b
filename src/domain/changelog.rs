//! Changelog scanning: locating one version section and replacing its heading
//! with the release-notes preamble.

use std::sync::OnceLock;

use regex::Regex;

/// Marker every section heading starts with.
pub const SECTION_MARKER: &str = "## [";

/// A changelog held as ordered lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    lines: Vec<String>,
}

/// Position of the scan relative to the requested section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    BeforeMatch,
    Collecting,
}

/// The release notes produced for one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSection {
    pub content: String,
    /// False when the content is the "no changelog found" fallback
    pub found: bool,
}

fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"^## \[([^\]]+)\]").expect("heading pattern is valid"))
}

impl ChangelogDocument {
    pub fn parse(text: &str) -> Self {
        ChangelogDocument {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Versions of every well-formed section heading, in document order.
    pub fn versions(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|line| heading_regex().captures(line))
            .map(|caps| caps[1].to_string())
            .collect()
    }

    /// Extract the section for `version`, substituting `preamble` for its heading.
    ///
    /// Collection stops at the next line starting with `## [`, well-formed or
    /// not. When no section matches, the preamble is followed by a
    /// "No changelog found" line.
    pub fn extract(&self, version: &str, preamble: &str) -> ExtractedSection {
        let heading = format!("{}{}]", SECTION_MARKER, version);
        let mut state = ScanState::BeforeMatch;
        let mut collected = String::new();

        for line in &self.lines {
            if state == ScanState::Collecting && line.starts_with(SECTION_MARKER) {
                break;
            }

            let line = if line.starts_with(&heading) {
                state = ScanState::Collecting;
                preamble
            } else {
                line.as_str()
            };

            if state == ScanState::Collecting {
                collected.push_str(line);
                collected.push('\n');
            }
        }

        let trimmed = collected.trim();
        if trimmed.is_empty() {
            return ExtractedSection {
                content: format!("{}\nNo changelog found for version {}", preamble, version),
                found: false,
            };
        }

        ExtractedSection {
            content: trimmed.to_string(),
            found: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREAMBLE: &str = "Release notes.\n\n## Changelog\n";

    const CHANGELOG: &str = "# Changelog\n\n\
        ## [Unreleased]\n\n\
        ## [2.0.0] - 2024-03-01\n\
        ### Fixed\n\
        - Fixed bug X\n\n\
        ## [1.9.0] - 2024-01-10\n\
        - Old stuff\n";

    #[test]
    fn test_extract_matching_section() {
        let doc = ChangelogDocument::parse(CHANGELOG);
        let section = doc.extract("2.0.0", PREAMBLE);

        assert!(section.found);
        assert_eq!(
            section.content,
            "Release notes.\n\n## Changelog\n\n### Fixed\n- Fixed bug X"
        );
    }

    #[test]
    fn test_extract_last_section_runs_to_end() {
        let doc = ChangelogDocument::parse(CHANGELOG);
        let section = doc.extract("1.9.0", PREAMBLE);

        assert!(section.found);
        assert!(section.content.ends_with("- Old stuff"));
        assert!(!section.content.contains("Fixed bug X"));
    }

    #[test]
    fn test_extract_missing_version_falls_back() {
        let doc = ChangelogDocument::parse(CHANGELOG);
        let section = doc.extract("3.0.0", PREAMBLE);

        assert!(!section.found);
        assert_eq!(
            section.content,
            "Release notes.\n\n## Changelog\n\nNo changelog found for version 3.0.0"
        );
    }

    #[test]
    fn test_extract_does_not_match_version_prefix() {
        let doc = ChangelogDocument::parse("## [1.0.10]\n- later\n");
        assert!(!doc.extract("1.0.1", PREAMBLE).found);
    }

    #[test]
    fn test_malformed_heading_still_ends_section() {
        let doc = ChangelogDocument::parse("## [1.1.0]\n- a\n## [broken\n- b\n");
        let section = doc.extract("1.1.0", PREAMBLE);
        assert!(section.content.ends_with("- a"));
        assert!(!section.content.contains("- b"));
    }

    #[test]
    fn test_heading_only_section_is_found() {
        let doc = ChangelogDocument::parse("## [1.0.0]\n\n## [0.9.0]\n- x\n");
        let section = doc.extract("1.0.0", PREAMBLE);
        assert!(section.found);
        assert_eq!(section.content, "Release notes.\n\n## Changelog");
    }

    #[test]
    fn test_empty_document() {
        let doc = ChangelogDocument::parse("");
        assert!(doc.lines().is_empty());
        assert!(!doc.extract("1.0.0", PREAMBLE).found);
    }

    #[test]
    fn test_crlf_lines() {
        let doc = ChangelogDocument::parse("## [1.0.0]\r\n- a\r\n## [0.1.0]\r\n");
        assert_eq!(
            doc.extract("1.0.0", PREAMBLE).content,
            "Release notes.\n\n## Changelog\n\n- a"
        );
    }

    #[test]
    fn test_versions_lists_well_formed_headings() {
        let doc = ChangelogDocument::parse(CHANGELOG);
        assert_eq!(doc.versions(), vec!["Unreleased", "2.0.0", "1.9.0"]);

        let doc = ChangelogDocument::parse("## [broken\n## [0.1.0]\n");
        assert_eq!(doc.versions(), vec!["0.1.0"]);
    }
}
