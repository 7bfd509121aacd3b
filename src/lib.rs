pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs_ops;
pub mod ui;

pub use error::{ChangelogError, Result};
