//! Infrastructure layer: snapshot persistence and the inventory store
//! boundary.

pub mod snapshot;
pub mod store;

pub use snapshot::{DEFAULT_INVENTORY_PATH, JsonSnapshotFile, SnapshotError};
pub use store::{InventoryStore, LoadOutcome, RemoveOutcome};
