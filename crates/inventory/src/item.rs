use std::collections::HashMap;

use chrono::{DateTime, Utc};
use stockbook_core::{Aggregate, DomainError, DomainResult, ItemName};

/// Threshold used by [`Inventory::low_stock`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Aggregate root: the inventory mapping (item name -> quantity).
///
/// Iteration follows insertion order. Quantities are signed: `add` may leave
/// an entry at zero or below, only `remove` prunes entries.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    quantities: HashMap<ItemName, i64>,
    order: Vec<ItemName>,
    version: u64,
}

/// Command: AddStock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStock {
    pub item: ItemName,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveStock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveStock {
    pub item: ItemName,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    AddStock(AddStock),
    RemoveStock(RemoveStock),
}

/// Event: StockAdded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdded {
    pub item: ItemName,
    pub quantity: i64,
    pub new_quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockRemoved (entry still present afterwards).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRemoved {
    pub item: ItemName,
    pub quantity: i64,
    pub remaining: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemDepleted (a removal left the quantity at or below zero; the
/// entry is gone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDepleted {
    pub item: ItemName,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryEvent {
    StockAdded(StockAdded),
    StockRemoved(StockRemoved),
    ItemDepleted(ItemDepleted),
}

impl InventoryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::StockAdded(_) => "inventory.stock.added",
            InventoryEvent::StockRemoved(_) => "inventory.stock.removed",
            InventoryEvent::ItemDepleted(_) => "inventory.item.depleted",
        }
    }

    pub fn item(&self) -> &ItemName {
        match self {
            InventoryEvent::StockAdded(e) => &e.item,
            InventoryEvent::StockRemoved(e) => &e.item,
            InventoryEvent::ItemDepleted(e) => &e.item,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::StockAdded(e) => e.occurred_at,
            InventoryEvent::StockRemoved(e) => e.occurred_at,
            InventoryEvent::ItemDepleted(e) => e.occurred_at,
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`, creating the entry if needed.
    ///
    /// An empty name is a silent no-op and yields `None`. Negative quantities
    /// are accepted and may leave the entry at zero or below.
    pub fn add(&mut self, item: &str, quantity: i64) -> Option<InventoryEvent> {
        let item = ItemName::new(item).ok()?;
        let event = self.handle_add(&AddStock {
            item,
            quantity,
            occurred_at: Utc::now(),
        });

        self.apply(&event);
        Some(event)
    }

    /// Remove `quantity` of `item`; the entry is deleted once it reaches zero
    /// or below.
    ///
    /// Fails with [`DomainError::ItemNotFound`] when the item is absent, in
    /// which case nothing changes.
    pub fn remove(&mut self, item: &str, quantity: i64) -> DomainResult<InventoryEvent> {
        let item = ItemName::new(item).map_err(|_| DomainError::item_not_found(item))?;
        let event = self.handle_remove(&RemoveStock {
            item,
            quantity,
            occurred_at: Utc::now(),
        })?;

        self.apply(&event);
        Ok(event)
    }

    /// Stored quantity, or 0 when absent.
    pub fn get_quantity(&self, item: &str) -> i64 {
        self.quantities.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.quantities.contains_key(item)
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn list_low_stock(&self, threshold: i64) -> Vec<&str> {
        self.iter()
            .filter(|(_, quantity)| *quantity < threshold)
            .map(|(item, _)| item.as_str())
            .collect()
    }

    /// [`Self::list_low_stock`] with [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn low_stock(&self) -> Vec<&str> {
        self.list_low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> + '_ {
        self.order
            .iter()
            .map(move |item| (item, self.quantities.get(item).copied().unwrap_or(0)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Set an entry directly (snapshot restore). An existing key keeps its
    /// position and takes the new value.
    pub fn insert(&mut self, item: ItemName, quantity: i64) {
        if self.quantities.insert(item.clone(), quantity).is_none() {
            self.order.push(item);
        }
    }

    fn delete(&mut self, item: &ItemName) {
        if self.quantities.remove(item).is_some() {
            self.order.retain(|existing| existing != item);
        }
    }
}

/// Two inventories are equal when they hold the same entries in the same
/// order; `version` is bookkeeping and is not compared.
impl PartialEq for Inventory {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Inventory {}

impl FromIterator<(ItemName, i64)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (ItemName, i64)>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for (item, quantity) in iter {
            inventory.insert(item, quantity);
        }
        inventory
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::StockAdded(e) => {
                let current = self.get_quantity(e.item.as_str());
                self.insert(e.item.clone(), current.saturating_add(e.quantity));
            }
            InventoryEvent::StockRemoved(e) => {
                let current = self.get_quantity(e.item.as_str());
                self.insert(e.item.clone(), current.saturating_sub(e.quantity));
            }
            InventoryEvent::ItemDepleted(e) => {
                self.delete(&e.item);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddStock(cmd) => Ok(vec![self.handle_add(cmd)]),
            InventoryCommand::RemoveStock(cmd) => Ok(vec![self.handle_remove(cmd)?]),
        }
    }
}

impl Inventory {
    fn handle_add(&self, cmd: &AddStock) -> InventoryEvent {
        let new_quantity = self
            .get_quantity(cmd.item.as_str())
            .saturating_add(cmd.quantity);

        tracing::debug!(item = %cmd.item, quantity = cmd.quantity, new_quantity, "stock added");

        InventoryEvent::StockAdded(StockAdded {
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            new_quantity,
            occurred_at: cmd.occurred_at,
        })
    }

    fn handle_remove(&self, cmd: &RemoveStock) -> DomainResult<InventoryEvent> {
        let current = self
            .quantities
            .get(cmd.item.as_str())
            .copied()
            .ok_or_else(|| DomainError::item_not_found(cmd.item.as_str()))?;

        let remaining = current.saturating_sub(cmd.quantity);
        if remaining <= 0 {
            tracing::debug!(item = %cmd.item, quantity = cmd.quantity, "item depleted");
            return Ok(InventoryEvent::ItemDepleted(ItemDepleted {
                item: cmd.item.clone(),
                quantity: cmd.quantity,
                occurred_at: cmd.occurred_at,
            }));
        }

        tracing::debug!(item = %cmd.item, quantity = cmd.quantity, remaining, "stock removed");
        Ok(InventoryEvent::StockRemoved(StockRemoved {
            item: cmd.item.clone(),
            quantity: cmd.quantity,
            remaining,
            occurred_at: cmd.occurred_at,
        }))
    }
}
