//! Shared test utilities.
//!
//! This module provides sample records and filled-in forms with sensible defaults.

use crate::{
    core::{contract::ContractForm, order::OrderForm},
    entities::{
        ContractModel, ContractStatus, DelayUnit, OrderItem, OrderModel, OrderStatus,
    },
};
use chrono::NaiveDate;

/// Builds a date from known-good components.
#[allow(clippy::unwrap_used)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates an active contract.
///
/// # Defaults
/// * `effective_date`: 2024-03-15
/// * `value`: 1 200 000
/// * `execution_delay`: 6 months (ends 2024-09-15)
pub fn sample_contract(id: &str) -> ContractModel {
    ContractModel {
        id: id.to_string(),
        title: "Réhabilitation du siège".to_string(),
        client: "Groupe Cevital".to_string(),
        effective_date: date(2024, 3, 15),
        value: 1_200_000.0,
        status: ContractStatus::Active,
        description: "Travaux de réhabilitation".to_string(),
        terms: "Paiement à 30 jours".to_string(),
        execution_delay: 6,
        delay_unit: DelayUnit::Months,
        created_at: date(2024, 3, 1),
    }
}

/// Creates a pending order.
///
/// # Defaults
/// * items: 2 × 1200 and 5 × 80 (total 2800)
/// * `order_date`: 2024-04-01, `delivery_date`: 2024-04-20
pub fn sample_order(id: &str) -> OrderModel {
    OrderModel {
        id: id.to_string(),
        contract_id: None,
        title: "Pièces de rechange".to_string(),
        client: "SARL Atlas".to_string(),
        items: vec![
            OrderItem::new("1", "Pompe", 2, 1200.0),
            OrderItem::new("2", "Joint", 5, 80.0),
        ],
        status: OrderStatus::Pending,
        order_date: date(2024, 4, 1),
        delivery_date: Some(date(2024, 4, 20)),
        notes: String::new(),
        created_at: date(2024, 4, 1),
    }
}

/// A complete contract form: 6 months from 2024-03-15, value "2 500 000,5".
pub fn contract_form() -> ContractForm {
    ContractForm {
        title: " Installation électrique ".to_string(),
        client: "SARL Atlas".to_string(),
        effective_date: "2024-03-15".to_string(),
        value: "2 500 000,5".to_string(),
        description: "Câblage du bâtiment B".to_string(),
        terms: String::new(),
        execution_delay: "6".to_string(),
        delay_unit: DelayUnit::Months,
    }
}

/// A complete order form with the same lines as [`sample_order`].
pub fn order_form() -> OrderForm {
    let mut form = OrderForm::with_items(sample_order("template").items);
    form.title = "Pièces de rechange".to_string();
    form.client = "SARL Atlas".to_string();
    form.order_date = "2024-04-01".to_string();
    form.delivery_date = "2024-04-20".to_string();
    form.notes = "Urgent".to_string();
    form
}
