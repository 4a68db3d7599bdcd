//! Lookup tables loaded from plain text files at startup.
//!
//! Both files are optional: a missing file gives an empty table. The tables
//! are never changed after loading and are passed to the [editor](crate::editor)
//! explicitly.

mod enums;
mod labels;

pub use enums::*;
pub use labels::*;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_LABELS_FILE: &str = "headers.txt";
pub const DEFAULT_ENUMS_FILE: &str = "enums.txt";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Field labels and enum definitions for one editing session.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub labels: Labels,
    pub enums: Enums,
}

impl Tables {
    pub fn load(labels: impl AsRef<Path>, enums: impl AsRef<Path>) -> Result<Self, TableError> {
        Ok(Self {
            labels: load_labels(labels)?,
            enums: load_enums(enums)?,
        })
    }
}

/// Reads a whole text file, `None` if it does not exist.
fn read_optional(path: &Path) -> Result<Option<String>, TableError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "Table file not found, using an empty table");
            Ok(None)
        }
        Err(source) => Err(TableError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
