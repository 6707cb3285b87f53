//! Sorted listings and summary figures.

use std::cmp::Ordering;
use std::fmt;

use crate::collections::{DynamicArray, SortedTree};
use crate::types::Record;

/// Ordering used for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    /// Category, then name within a category.
    #[default]
    Category,
    Quantity,
    Price,
    Supplier,
}

impl SortKey {
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Category => a
                .category
                .cmp(&b.category)
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Supplier => a.supplier.cmp(&b.supplier),
        }
    }
}

const TITLE: &str = "------------------------------ INVENTORY ITEMS ------------------------------";
const RULE: &str = "--------------------------------------------------------------------------";

/// Fixed-width table over borrowed records, in the order given.
pub struct Table<'a> {
    records: DynamicArray<&'a Record>,
}

impl<'a> Table<'a> {
    pub fn new(records: impl IntoIterator<Item = &'a Record>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No items in inventory.");
        }
        writeln!(f, "{TITLE}")?;
        writeln!(
            f,
            "{:<10} {:<20} {:<15} {:<10} {:<10} {:<15}",
            "ID", "NAME", "CATEGORY", "QUANTITY", "PRICE", "SUPPLIER"
        )?;
        writeln!(f, "{RULE}")?;
        for record in self.records.iter() {
            let line = format!(
                "{:<10} {:<20} {:<15} {:<10} ${:<9.2} {:<15}",
                record.id,
                truncate(&record.name, 20),
                truncate(&record.category, 15),
                record.quantity,
                record.price,
                truncate(&record.supplier, 15),
            );
            writeln!(f, "{}", line.trim_end())?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Total Items: {}", self.records.len())
    }
}

/// Render records as a fixed-width table, in the order given.
pub fn render_table<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    Table::new(records).to_string()
}

/// Multi-line view of a single record.
pub fn render_details(record: &Record) -> String {
    format!(
        "----- Item Details -----\n\
         ID: {}\n\
         Name: {}\n\
         Category: {}\n\
         Quantity: {}\n\
         Price: ${:.2}\n\
         Supplier: {}\n\
         ------------------------\n",
        record.id, record.name, record.category, record.quantity, record.price, record.supplier
    )
}

/// Cut `text` to `max` characters, ending in `...` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Totals across the inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub records: usize,
    /// Sum of quantities.
    pub units: u64,
    /// Sum of quantity × price.
    pub total_value: f64,
    /// Distinct category names.
    pub categories: usize,
}

impl Stats {
    pub fn collect<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut stats = Stats::default();
        let mut categories = SortedTree::new(|a: &&str, b: &&str| a.cmp(b));
        for record in records {
            stats.records += 1;
            stats.units += u64::from(record.quantity);
            stats.total_value += record.value();
            categories.insert(record.category.as_str());
        }
        stats.categories = categories.len();
        stats
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Items:       {}", self.records)?;
        writeln!(f, "Units:       {}", self.units)?;
        writeln!(f, "Categories:  {}", self.categories)?;
        write!(f, "Stock value: ${:.2}", self.total_value)
    }
}
