//! JSON file snapshot: one flat object, item name -> quantity.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use stockbook_inventory::Inventory;

use super::SnapshotError;

/// Path used when the caller does not pick one.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// A JSON snapshot at a fixed path.
///
/// Writes go to a temporary file next to the target which is then renamed
/// over it, so readers see either the previous snapshot or the complete new
/// one. The temporary file is removed on every failure path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl Default for JsonSnapshotFile {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_PATH)
    }
}

impl JsonSnapshotFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. `Ok(None)` when the file does not exist.
    pub fn load(&self) -> Result<Option<Inventory>, SnapshotError> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SnapshotError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let inventory: Inventory =
            serde_json::from_slice(&contents).map_err(|source| SnapshotError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(path = %self.path.display(), items = inventory.len(), "inventory loaded");
        Ok(Some(inventory))
    }

    /// Overwrite the snapshot with the full contents of `inventory`.
    pub fn save(&self, inventory: &Inventory) -> Result<(), SnapshotError> {
        let mut tmp = self.create_temp().map_err(|e| self.write_error(e))?;

        {
            let mut writer = BufWriter::new(&mut tmp);
            serde_json::to_writer(&mut writer, inventory).map_err(|source| {
                if source.is_io() {
                    self.write_error(source.into())
                } else {
                    SnapshotError::Serialize { source }
                }
            })?;
            writer.flush().map_err(|e| self.write_error(e))?;
        }

        tmp.as_file().sync_all().map_err(|e| self.write_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_error(e.error))?;

        tracing::info!(path = %self.path.display(), items = inventory.len(), "inventory saved");
        Ok(())
    }

    /// Temp file for the next snapshot. It takes the target's permissions when
    /// the target exists, and the umask default for a new file otherwise.
    fn create_temp(&self) -> io::Result<NamedTempFile> {
        match fs::metadata(&self.path) {
            Ok(meta) => {
                let tmp = NamedTempFile::new_in(self.parent_dir())?;
                tmp.as_file().set_permissions(meta.permissions())?;
                Ok(tmp)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => fresh_temp_in(self.parent_dir()),
            Err(e) => Err(e),
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_error(&self, source: io::Error) -> SnapshotError {
        SnapshotError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(unix)]
fn fresh_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // Mode passed to open(2), so the process umask applies as for a plain create.
    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn fresh_temp_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
