//! Inventory domain module.
//!
//! This crate contains the stock-keeping rules, implemented purely as
//! deterministic domain logic over an in-memory mapping (no files, no
//! global state). Persistence lives in `stockbook-infra`.

pub mod codec;
pub mod item;
pub mod log;
pub mod report;

pub use item::{
    AddStock, DEFAULT_LOW_STOCK_THRESHOLD, Inventory, InventoryCommand, InventoryEvent,
    ItemDepleted, RemoveStock, StockAdded, StockRemoved,
};
pub use log::{ActivityLog, LogEntry};
pub use report::Report;
