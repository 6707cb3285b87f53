use std::fmt;

use crate::error::{Error, Result};

/// Record key. Ids start at 1; the next id is always `max + 1`.
pub type ItemId = u32;

/// One inventory item: the only entity the store manages.
///
/// `id` is the identity used everywhere a record must be found again:
/// tree ordering, list lookup, undo/redo, and CSV row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub supplier: String,
}

impl Record {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        price: f64,
        supplier: impl Into<String>,
    ) -> Self {
        Record {
            id,
            name: name.into(),
            category: category.into(),
            quantity,
            price,
            supplier: supplier.into(),
        }
    }

    /// A record carrying only a key. Used to probe a tree ordered by id.
    pub fn key_only(id: ItemId) -> Self {
        Record::new(id, "", "", 0, 0.0, "")
    }

    /// Check field constraints: positive id, non-empty text, finite
    /// non-negative price.
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(Error::InvalidArgument("item id must be at least 1".into()));
        }
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("supplier", &self.supplier),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidArgument(format!("{field} cannot be empty")));
            }
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        Ok(())
    }

    /// Stock value of this line: quantity × unit price.
    pub fn value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] qty={} price=${:.2} supplier={}",
            self.id, self.name, self.category, self.quantity, self.price, self.supplier
        )
    }
}

/// Field values for a record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub supplier: String,
}

impl NewRecord {
    pub fn into_record(self, id: ItemId) -> Record {
        Record {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            supplier: self.supplier,
        }
    }
}

/// Partial update: `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub supplier: Option<String>,
}

impl RecordPatch {
    /// Produce the updated record. The id never changes.
    pub fn apply_to(&self, current: &Record) -> Record {
        Record {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            category: self.category.clone().unwrap_or_else(|| current.category.clone()),
            quantity: self.quantity.unwrap_or(current.quantity),
            price: self.price.unwrap_or(current.price),
            supplier: self.supplier.clone().unwrap_or_else(|| current.supplier.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.supplier.is_none()
    }
}
