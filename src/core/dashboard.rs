//! Home summary business logic.
//!
//! This module turns stored contracts and orders into display-ready cards and builds
//! the home summary of active contracts and pending orders. All values are derived on
//! demand; a value that cannot be derived is `None` rather than a placeholder.

use super::{
    currency::CurrencyFormatter,
    dates::format_calendar_date,
    delay::format_execution_delay,
};
use crate::{
    entities::{BadgeTone, ContractModel, ContractStatus, OrderModel, OrderStatus},
    store::{BusinessData, Repository},
};
use tracing::warn;

/// Number of cards shown per section of the home summary.
pub const CARDS_PER_SECTION: usize = 3;

/// Display values derived from a contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractCard {
    /// Identifier of the source contract
    pub id: String,
    /// Contract title
    pub title: String,
    /// Client name
    pub client: String,
    /// French status label
    pub status_label: &'static str,
    /// Visual category of the status
    pub tone: BadgeTone,
    /// Formatted contract value
    pub value: String,
    /// Effective date as `DD/MM/YYYY`
    pub effective_date: String,
    /// Execution delay label, e.g. "6 mois"
    pub delay: String,
    /// End date as `DD/MM/YYYY`, absent when it cannot be derived
    pub end_date: Option<String>,
}

impl ContractCard {
    /// Derives the card for one contract.
    #[must_use]
    pub fn new(contract: &ContractModel, formatter: &CurrencyFormatter) -> Self {
        let end_date = contract
            .end_date()
            .inspect_err(|e| warn!("Contract {} has no end date: {}", contract.id, e))
            .ok()
            .map(format_calendar_date);

        Self {
            id: contract.id.clone(),
            title: contract.title.clone(),
            client: contract.client.clone(),
            status_label: contract.status.label(),
            tone: contract.status.tone(),
            value: formatter.format(contract.value),
            effective_date: format_calendar_date(contract.effective_date),
            delay: format_execution_delay(contract.execution_delay, contract.delay_unit),
            end_date,
        }
    }
}

/// Display values derived from an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCard {
    /// Identifier of the source order
    pub id: String,
    /// Order title
    pub title: String,
    /// Client name
    pub client: String,
    /// French status label
    pub status_label: &'static str,
    /// Visual category of the status
    pub tone: BadgeTone,
    /// Number of lines on the order
    pub item_count: usize,
    /// Formatted order total
    pub total: String,
    /// Order date as `DD/MM/YYYY`
    pub order_date: String,
    /// Delivery date as `DD/MM/YYYY`, if known
    pub delivery_date: Option<String>,
}

impl OrderCard {
    /// Derives the card for one order.
    #[must_use]
    pub fn new(order: &OrderModel, formatter: &CurrencyFormatter) -> Self {
        Self {
            id: order.id.clone(),
            title: order.title.clone(),
            client: order.client.clone(),
            status_label: order.status.label(),
            tone: order.status.tone(),
            item_count: order.items.len(),
            total: formatter.format(order.total_amount()),
            order_date: format_calendar_date(order.order_date),
            delivery_date: order.delivery_date.map(format_calendar_date),
        }
    }
}

/// Home summary: active contracts and pending orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Number of active contracts
    pub active_contract_count: usize,
    /// First active contracts, newest first
    pub active_contracts: Vec<ContractCard>,
    /// Number of pending orders
    pub pending_order_count: usize,
    /// First pending orders, newest first
    pub pending_orders: Vec<OrderCard>,
}

impl Dashboard {
    /// Builds the summary from the current records.
    #[must_use]
    pub fn build<C, O>(data: &BusinessData<C, O>, formatter: &CurrencyFormatter) -> Self
    where
        C: Repository<ContractModel>,
        O: Repository<OrderModel>,
    {
        let active: Vec<&ContractModel> = data
            .contracts()
            .iter()
            .filter(|c| c.status == ContractStatus::Active)
            .collect();
        let pending: Vec<&OrderModel> = data
            .orders()
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .collect();

        Self {
            active_contract_count: active.len(),
            active_contracts: active
                .iter()
                .take(CARDS_PER_SECTION)
                .map(|c| ContractCard::new(c, formatter))
                .collect(),
            pending_order_count: pending.len(),
            pending_orders: pending
                .iter()
                .take(CARDS_PER_SECTION)
                .map(|o| OrderCard::new(o, formatter))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use chrono::NaiveDate;

    #[test]
    fn test_contract_card() {
        let card = ContractCard::new(&sample_contract("c1"), &CurrencyFormatter::default());

        assert_eq!(card.status_label, "Actif");
        assert_eq!(card.tone, BadgeTone::Active);
        assert_eq!(card.value, "1\u{202f}200\u{202f}000,00\u{a0}DA");
        assert_eq!(card.effective_date, "15/03/2024");
        assert_eq!(card.delay, "6 mois");
        assert_eq!(card.end_date.as_deref(), Some("15/09/2024"));
    }

    #[test]
    fn test_contract_card_end_date_absent_when_out_of_range() {
        let mut contract = sample_contract("c1");
        contract.effective_date = NaiveDate::MAX;

        let card = ContractCard::new(&contract, &CurrencyFormatter::default());
        assert_eq!(card.end_date, None);
    }

    #[test]
    fn test_order_card() {
        let card = OrderCard::new(&sample_order("o1"), &CurrencyFormatter::default());

        assert_eq!(card.status_label, "En attente");
        assert_eq!(card.tone, BadgeTone::Pending);
        assert_eq!(card.item_count, 2);
        assert_eq!(card.total, "2\u{202f}800,00\u{a0}DA");
        assert_eq!(card.order_date, "01/04/2024");
        assert_eq!(card.delivery_date.as_deref(), Some("20/04/2024"));
    }

    #[test]
    fn test_dashboard_counts_and_limits_sections() {
        let mut data: BusinessData = BusinessData::default();
        for i in 0..5 {
            data.insert_contract(sample_contract(&format!("active-{i}")));
            data.insert_order(sample_order(&format!("pending-{i}")));
        }
        let mut expired = sample_contract("expired");
        expired.status = ContractStatus::Expired;
        data.insert_contract(expired);
        let mut delivered = sample_order("delivered");
        delivered.status = OrderStatus::Delivered;
        data.insert_order(delivered);

        let dashboard = Dashboard::build(&data, &CurrencyFormatter::default());

        assert_eq!(dashboard.active_contract_count, 5);
        assert_eq!(dashboard.active_contracts.len(), CARDS_PER_SECTION);
        assert_eq!(dashboard.pending_order_count, 5);
        assert_eq!(dashboard.pending_orders.len(), CARDS_PER_SECTION);

        // Newest records come first
        assert_eq!(dashboard.active_contracts[0].id, "active-4");
        assert_eq!(dashboard.pending_orders[0].id, "pending-4");
    }

    #[test]
    fn test_dashboard_empty() {
        let data: BusinessData = BusinessData::default();
        let dashboard = Dashboard::build(&data, &CurrencyFormatter::default());
        assert_eq!(dashboard.active_contract_count, 0);
        assert!(dashboard.active_contracts.is_empty());
        assert!(dashboard.pending_orders.is_empty());
    }
}
