//! Domain logic - pure changelog rules independent of file access

pub mod changelog;
pub mod tag;

pub use changelog::{ChangelogDocument, ExtractedSection, ScanState};
pub use tag::VersionTag;
