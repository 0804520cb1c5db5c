//! Human-readable stock report.

use std::io;

use crate::item::Inventory;

/// Header line written before the item lines.
pub const REPORT_HEADER: &str = "Items Report:";

/// Borrowed view that renders one `"{item} -> {quantity}"` line per entry.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    inventory: &'a Inventory,
}

impl core::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for (item, quantity) in self.inventory.iter() {
            writeln!(f, "{item} -> {quantity}")?;
        }
        Ok(())
    }
}

impl Inventory {
    pub fn report(&self) -> Report<'_> {
        Report { inventory: self }
    }

    /// Stream the report to `out`.
    pub fn write_report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_items_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add("apple", 7);
        inventory.add("banana", -2);
        inventory.add("orange", 5);

        let mut out = Vec::new();
        inventory.write_report(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Items Report:\napple -> 7\nbanana -> -2\norange -> 5\n"
        );
    }

    #[test]
    fn empty_inventory_prints_header_only() {
        assert_eq!(Inventory::new().report().to_string(), "Items Report:\n");
    }
}
