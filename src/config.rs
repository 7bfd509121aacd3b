use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::VersionTag;
use crate::error::{ChangelogError, Result};

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "changelog-extract.toml";

/// Environment variable carrying the release ref.
pub const VERSION_ENV: &str = "VERSION";

const DEFAULT_PREAMBLE: &str = "The following release notes are automatically generated.

For the complete changelog, visit [here](https://github.com/{repository}/blob/master/CHANGELOG.md).
If you encounter any problems, please report them on the [issues](https://github.com/{repository}/issues/new/choose) page.

## Changelog
";

/// File-level settings for changelog-extract.
///
/// Every field has a default, so an empty or absent file behaves like the
/// stock release setup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Changelog path, relative to the repository root
    #[serde(default = "default_changelog_file")]
    pub changelog_file: PathBuf,

    /// Generated release notes path, relative to the repository root
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// GitHub "owner/name" used in the preamble links
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Replaces the built-in preamble template. `{repository}` is substituted.
    #[serde(default)]
    pub preamble: Option<String>,
}

fn default_changelog_file() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("CHANGELOG-GENERATED.md")
}

fn default_repository() -> String {
    "noaione/emancipated-rs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            changelog_file: default_changelog_file(),
            output_file: default_output_file(),
            repository: default_repository(),
            preamble: None,
        }
    }
}

impl Config {
    /// Preamble text with the repository filled in.
    pub fn preamble(&self) -> String {
        self.preamble
            .as_deref()
            .unwrap_or(DEFAULT_PREAMBLE)
            .replace("{repository}", &self.repository)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog-extract.toml` in current directory
/// 3. `changelog-extract.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let candidate = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() {
                Some(local)
            } else {
                dirs::config_dir()
                    .map(|dir| dir.join(CONFIG_FILE_NAME))
                    .filter(|path| path.exists())
            }
        }
    };

    let Some(path) = candidate else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str =
        fs::read_to_string(&path).map_err(|e| ChangelogError::file_access(&path, e))?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

/// Validated runtime inputs for one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseSettings {
    pub tag: VersionTag,
    pub dry_run: bool,
    pub root: PathBuf,
}

impl ReleaseSettings {
    /// Build settings from an explicit ref, falling back to `$VERSION`.
    ///
    /// Fails before any file is touched when the ref is missing or malformed.
    pub fn resolve(tag_override: Option<&str>, dry_run: bool, root: PathBuf) -> Result<Self> {
        let reference = match tag_override {
            Some(tag) => tag.to_string(),
            None => std::env::var(VERSION_ENV).map_err(|_| {
                ChangelogError::config(format!("No git tag found: {} is not set", VERSION_ENV))
            })?,
        };

        Ok(ReleaseSettings {
            tag: VersionTag::parse(&reference)?,
            dry_run,
            root,
        })
    }

    /// Settings driven purely by `$VERSION`.
    pub fn from_env(dry_run: bool, root: PathBuf) -> Result<Self> {
        Self::resolve(None, dry_run, root)
    }
}
