//! Full-snapshot persistence of an inventory.
//!
//! A snapshot is always the entire mapping: saving overwrites, loading
//! replaces. There is no merge and no incremental log.

pub mod json_file;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use json_file::{DEFAULT_INVENTORY_PATH, JsonSnapshotFile};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read inventory snapshot {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed inventory snapshot {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write inventory snapshot {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize inventory: {source}")]
    Serialize { source: serde_json::Error },
}

impl SnapshotError {
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
