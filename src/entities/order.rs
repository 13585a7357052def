//! Order entity - A client purchase made of line items.
//!
//! Line totals and the order total are never stored independently of the values
//! they are computed from. An `OrderItem` keeps its line total private and
//! recomputes it whenever quantity or unit price change, and an order's total is
//! always summed from its items.

use super::status::OrderStatus;
use crate::core::order::{line_total, order_total};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Unique identifier
    pub id: String,
    /// Contract this order was placed under, if any
    #[serde(default)]
    pub contract_id: Option<String>,
    /// Short name of the order
    pub title: String,
    /// Client placing the order
    pub client: String,
    /// Ordered items
    pub items: Vec<OrderItem>,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// Date the order was placed
    pub order_date: NaiveDate,
    /// Expected or actual delivery date
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
    /// Date the record was created
    pub created_at: NaiveDate,
}

impl Model {
    /// Sum of all line totals.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        order_total(&self.items)
    }
}

/// A single order line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrderItemRecord")]
pub struct OrderItem {
    id: String,
    name: String,
    quantity: u32,
    unit_price: f64,
    total_price: f64,
}

/// Wire shape of an item; any stored total is ignored and recomputed.
#[derive(Deserialize)]
struct OrderItemRecord {
    id: String,
    name: String,
    quantity: u32,
    unit_price: f64,
}

impl From<OrderItemRecord> for OrderItem {
    fn from(record: OrderItemRecord) -> Self {
        Self::new(record.id, record.name, record.quantity, record.unit_price)
    }
}

impl OrderItem {
    /// Builds an item with its line total computed.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit_price,
            total_price: line_total(quantity, unit_price),
        }
    }

    /// Line identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Item name as typed
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of units
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of one unit
    #[must_use]
    pub const fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// Quantity times unit price, kept in sync by the setters.
    #[must_use]
    pub const fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Renames the item.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Changes the quantity and recomputes the line total.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = line_total(self.quantity, self.unit_price);
    }

    /// Changes the unit price and recomputes the line total.
    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.total_price = line_total(self.quantity, self.unit_price);
    }

    /// Trims surrounding whitespace from the name.
    pub(crate) fn trim_name(&mut self) {
        let trimmed = self.name.trim();
        if trimmed.len() != self.name.len() {
            self.name = trimmed.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_new_item_computes_line_total() {
        let item = OrderItem::new("1", "Vanne", 3, 10.5);
        assert_eq!(item.total_price(), 31.5);
    }

    #[test]
    fn test_setters_recompute_line_total() {
        let mut item = OrderItem::new("1", "Vanne", 1, 0.0);
        assert_eq!(item.total_price(), 0.0);

        item.set_unit_price(250.0);
        assert_eq!(item.total_price(), 250.0);

        item.set_quantity(4);
        assert_eq!(item.total_price(), 1000.0);

        // Renaming leaves the total alone
        item.set_name("Vanne DN50");
        assert_eq!(item.total_price(), 1000.0);
    }

    #[test]
    fn test_stored_total_is_ignored_on_load() {
        let toml_str = r#"
            id = "1"
            name = "Boulon"
            quantity = 10
            unit_price = 2.5
            total_price = 999.0
        "#;

        let item: OrderItem = toml::from_str(toml_str).unwrap();
        assert_eq!(item.total_price(), 25.0);
    }

    #[test]
    fn test_order_total_amount_sums_items() {
        let order = sample_order("o1");
        assert_eq!(order.total_amount(), 2.0 * 1200.0 + 5.0 * 80.0);
    }

    #[test]
    fn test_trim_name() {
        let mut item = OrderItem::new("1", "  Joint  ", 1, 1.0);
        item.trim_name();
        assert_eq!(item.name(), "Joint");
    }
}
