//! JSON object representation of an [`Inventory`].
//!
//! The snapshot format is a flat object, item name -> integer quantity, e.g.
//! `{"apple": 7, "orange": 5}`. Keys are written in iteration order and read
//! back in file order. A repeated key overwrites the earlier value but keeps
//! its first position.

use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockbook_core::ItemName;

use crate::item::Inventory;

impl Serialize for Inventory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (item, quantity) in self.iter() {
            map.serialize_entry(item.as_str(), &quantity)?;
        }
        map.end()
    }
}

struct InventoryVisitor;

impl<'de> Visitor<'de> for InventoryVisitor {
    type Value = Inventory;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object mapping item names to integer quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut inventory = Inventory::new();
        while let Some((item, quantity)) = access.next_entry::<ItemName, i64>()? {
            inventory.insert(item, quantity);
        }
        Ok(inventory)
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(InventoryVisitor)
    }
}
