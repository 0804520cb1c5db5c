//! Caller-owned, append-only activity log.
//!
//! The log is an in-memory record of what happened to an inventory. It is
//! never persisted and never shared between callers implicitly.

use chrono::{DateTime, Utc};

use crate::item::InventoryEvent;

/// One timestamped log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with `at`.
    pub fn push(&mut self, at: DateTime<Utc>, message: impl Into<String>) -> &LogEntry {
        self.entries.push(LogEntry {
            at,
            message: message.into(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Append the human-readable line for an inventory event.
    pub fn record(&mut self, event: &InventoryEvent) -> &LogEntry {
        let message = match event {
            InventoryEvent::StockAdded(e) => format!("Added {} of {}", e.quantity, e.item),
            InventoryEvent::StockRemoved(e) => format!("Removed {} of {}", e.quantity, e.item),
            InventoryEvent::ItemDepleted(e) => {
                format!("Removed {} of {} (depleted)", e.quantity, e.item)
            }
        };
        self.push(event.occurred_at(), message)
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
