//! Inventory store: the boundary between callers and the inventory domain.
//!
//! The domain reports a missing item on remove as an error, and the snapshot
//! layer reports a missing file as `None`. This is where both become warnings:
//! the caller gets an outcome value and the warning goes out through
//! `tracing`. Every other failure propagates.

use std::io;
use std::path::Path;

use stockbook_inventory::{ActivityLog, Inventory};

use crate::snapshot::{JsonSnapshotFile, SnapshotError};

/// What a `remove` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Quantity decremented, entry still present.
    Removed { remaining: i64 },
    /// Quantity reached zero or below and the entry was deleted.
    Depleted,
    /// The item was not stocked; nothing changed.
    Missing,
}

/// What a `load` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { items: usize },
    /// No snapshot at the path; the store was reset to empty.
    Missing,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    inventory: Inventory,
    log: ActivityLog,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    /// Take the activity log, leaving an empty one in its place.
    pub fn take_log(&mut self) -> ActivityLog {
        std::mem::take(&mut self.log)
    }

    pub fn add(&mut self, item: &str, quantity: i64) {
        if let Some(event) = self.inventory.add(item, quantity) {
            self.log.record(&event);
        }
    }

    pub fn remove(&mut self, item: &str, quantity: i64) -> RemoveOutcome {
        match self.inventory.remove(item, quantity) {
            Ok(event) => {
                self.log.record(&event);
                if self.inventory.contains(item) {
                    RemoveOutcome::Removed {
                        remaining: self.inventory.get_quantity(item),
                    }
                } else {
                    RemoveOutcome::Depleted
                }
            }
            Err(err) => {
                tracing::warn!(item, quantity, "{err}");
                RemoveOutcome::Missing
            }
        }
    }

    pub fn get_quantity(&self, item: &str) -> i64 {
        self.inventory.get_quantity(item)
    }

    pub fn list_low_stock(&self, threshold: i64) -> Vec<&str> {
        self.inventory.list_low_stock(threshold)
    }

    pub fn low_stock(&self) -> Vec<&str> {
        self.inventory.low_stock()
    }

    /// Write the report to stdout.
    pub fn print_report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.inventory.write_report(&mut out)
    }

    /// Replace the in-memory mapping with the snapshot at `path`.
    ///
    /// A missing file resets to an empty inventory and warns. A malformed or
    /// unreadable file is an error and leaves the current mapping untouched.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadOutcome, SnapshotError> {
        let snapshot = JsonSnapshotFile::new(path);
        match snapshot.load()? {
            Some(inventory) => {
                let items = inventory.len();
                self.inventory = inventory;
                Ok(LoadOutcome::Loaded { items })
            }
            None => {
                tracing::warn!(
                    path = %snapshot.path().display(),
                    "{} not found, starting with empty inventory",
                    snapshot.path().display()
                );
                self.inventory = Inventory::new();
                Ok(LoadOutcome::Missing)
            }
        }
    }

    /// Overwrite the snapshot at `path` with the current mapping.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        JsonSnapshotFile::new(path).save(&self.inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = BufferWriter;

        fn make_writer(&'a self) -> Self::Writer {
            BufferWriter(Arc::clone(&self.0))
        }
    }

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut guard = self
                .0
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
            guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` with a text subscriber writing into a buffer; return the output.
    fn capture_logs<F: FnOnce()>(f: F) -> String {
        let sink = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(sink.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = sink.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn remove_of_missing_item_warns() {
        let mut store = InventoryStore::new();
        store.add("apple", 10);

        let output = capture_logs(|| {
            assert_eq!(store.remove("grapes", 1), RemoveOutcome::Missing);
        });

        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("item 'grapes' not found"), "{output}");
    }

    #[test]
    fn successful_remove_does_not_warn() {
        let mut store = InventoryStore::new();
        store.add("apple", 10);

        let output = capture_logs(|| {
            store.remove("apple", 3);
        });

        assert!(output.is_empty(), "{output}");
    }

    #[test]
    fn load_of_missing_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let mut store = InventoryStore::new();

        let output = capture_logs(|| {
            assert_eq!(store.load(&path).unwrap(), LoadOutcome::Missing);
        });

        assert!(output.contains("WARN"), "{output}");
        assert!(
            output.contains(&format!(
                "{} not found, starting with empty inventory",
                path.display()
            )),
            "{output}"
        );
    }

    #[test]
    fn add_records_log_entries() {
        let mut store = InventoryStore::new();
        store.add("apple", 10);
        store.add("", 4);
        store.add("banana", -2);

        let messages: Vec<&str> = store
            .log()
            .entries()
            .iter()
            .map(|entry| entry.message.as_str())
            .collect();
        assert_eq!(messages, vec!["Added 10 of apple", "Added -2 of banana"]);
    }

    #[test]
    fn remove_reports_outcome() {
        let mut store = InventoryStore::new();
        store.add("apple", 10);
        store.add("pear", 2);

        assert_eq!(store.remove("apple", 3), RemoveOutcome::Removed { remaining: 7 });
        assert_eq!(store.remove("pear", 2), RemoveOutcome::Depleted);
        assert_eq!(store.get_quantity("pear"), 0);
    }

    #[test]
    fn remove_missing_item_leaves_mapping_unchanged() {
        let mut store = InventoryStore::new();
        store.add("apple", 10);
        let before = store.inventory().clone();

        assert_eq!(store.remove("grapes", 1), RemoveOutcome::Missing);
        assert_eq!(store.inventory(), &before);
        assert_eq!(store.log().len(), 1);
    }

    #[test]
    fn load_of_missing_file_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::new();
        store.add("apple", 3);

        let outcome = store.load(dir.path().join("absent.json")).unwrap();

        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(store.inventory().is_empty());
    }

    #[test]
    fn load_of_malformed_file_fails_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"apple": "lots"}"#).unwrap();

        let mut store = InventoryStore::new();
        store.add("pear", 3);

        let err = store.load(&path).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(store.get_quantity("pear"), 3);
    }

    #[test]
    fn load_replaces_whole_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"kiwi": 4}"#).unwrap();

        let mut store = InventoryStore::new();
        store.add("pear", 3);

        assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded { items: 1 });
        assert_eq!(store.get_quantity("pear"), 0);
        assert_eq!(store.get_quantity("kiwi"), 4);
    }

    #[test]
    fn take_log_leaves_empty_log() {
        let mut store = InventoryStore::new();
        store.add("apple", 1);

        let log = store.take_log();
        assert_eq!(log.len(), 1);
        assert!(store.log().is_empty());
    }
}
