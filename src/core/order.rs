//! Order business logic - line totals, order totals and order submission.
//!
//! This module provides the arithmetic behind order amounts and the validation that
//! runs when an order form is submitted. Only valid items survive submission, and the
//! submitted order's total is computed over exactly those items.

use crate::{
    entities::{OrderItem, OrderModel, OrderStatus},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use uuid::Uuid;

use super::dates::parse_calendar_date;

pub(crate) const MISSING_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs obligatoires.";
const NO_VALID_ITEM_MESSAGE: &str = "Veuillez ajouter au moins un article valide.";

/// Total of a single order line.
#[must_use]
pub fn line_total(quantity: u32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

/// Sum of the line totals of `items`, accumulated in sequence order.
#[must_use]
pub fn order_total(items: &[OrderItem]) -> f64 {
    items
        .iter()
        .map(OrderItem::total_price)
        .fold(0.0, |sum, total| sum + total)
}

/// An item is valid when its trimmed name is non-empty and both quantity and unit
/// price are positive.
#[must_use]
pub fn is_valid_item(item: &OrderItem) -> bool {
    !item.name().trim().is_empty() && item.quantity() > 0 && item.unit_price() > 0.0
}

/// The valid items of `items`, in their original order.
#[must_use]
pub fn valid_items(items: &[OrderItem]) -> Vec<OrderItem> {
    items.iter().filter(|item| is_valid_item(item)).cloned().collect()
}

/// Keeps the valid items, failing when none remain.
///
/// # Errors
/// Returns `Error::Validation` if no item is valid.
pub fn require_valid_items(items: Vec<OrderItem>) -> Result<Vec<OrderItem>> {
    let valid: Vec<OrderItem> = items.into_iter().filter(is_valid_item).collect();

    if valid.is_empty() {
        return Err(Error::validation(NO_VALID_ITEM_MESSAGE));
    }

    Ok(valid)
}

/// Raw input of the new-order form.
#[derive(Debug, Clone)]
pub struct OrderForm {
    /// Order title (required)
    pub title: String,
    /// Client name (required)
    pub client: String,
    /// Order date as `YYYY-MM-DD` (required)
    pub order_date: String,
    /// Delivery date as `YYYY-MM-DD`, blank when unknown
    pub delivery_date: String,
    /// Free-text notes
    pub notes: String,
    /// Contract the order is placed under
    pub contract_id: Option<String>,
    items: Vec<OrderItem>,
}

impl Default for OrderForm {
    /// A blank form starts with one empty line of quantity one.
    fn default() -> Self {
        Self {
            title: String::new(),
            client: String::new(),
            order_date: String::new(),
            delivery_date: String::new(),
            notes: String::new(),
            contract_id: None,
            items: vec![blank_item()],
        }
    }
}

fn blank_item() -> OrderItem {
    OrderItem::new(Uuid::new_v4().to_string(), "", 1, 0.0)
}

impl OrderForm {
    /// Builds a form around existing lines.
    #[must_use]
    pub fn with_items(items: Vec<OrderItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Lines of the form, in entry order.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Mutable access to one line; setters on the item keep its total in sync.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut OrderItem> {
        self.items.get_mut(index)
    }

    /// Appends an empty line and returns it.
    pub fn add_item(&mut self) -> &mut OrderItem {
        let index = self.items.len();
        self.items.push(blank_item());
        &mut self.items[index]
    }

    /// Removes a line. The last remaining line cannot be removed.
    pub fn remove_item(&mut self, index: usize) -> Option<OrderItem> {
        if self.items.len() <= 1 || index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Running total over every line currently on the form.
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        order_total(&self.items)
    }

    /// Validates the form and builds a pending order from its valid lines.
    ///
    /// # Errors
    /// Returns `Error::Validation` when a required field is blank, a date does not
    /// parse, or no line is valid.
    pub fn into_order(self, id: String, created_at: NaiveDate) -> Result<OrderModel> {
        let title = self.title.trim();
        let client = self.client.trim();
        let order_date = self.order_date.trim();

        if title.is_empty() || client.is_empty() || order_date.is_empty() {
            return Err(Error::validation(MISSING_FIELDS_MESSAGE));
        }

        let order_date = parse_calendar_date(order_date)
            .map_err(|_| Error::validation("La date de commande est invalide."))?;

        let delivery_date = match self.delivery_date.trim() {
            "" => None,
            raw => Some(
                parse_calendar_date(raw)
                    .map_err(|_| Error::validation("La date de livraison est invalide."))?,
            ),
        };

        let mut items = require_valid_items(self.items)?;
        for item in &mut items {
            item.trim_name();
        }

        Ok(OrderModel {
            id,
            contract_id: self.contract_id,
            title: title.to_string(),
            client: client.to_string(),
            items,
            status: OrderStatus::Pending,
            order_date,
            delivery_date,
            notes: self.notes.trim().to_string(),
            created_at,
        })
    }
}
