//! The data-access collaborator holding every contract and order.
//!
//! `BusinessData` owns one repository per record kind. Any [`Repository`]
//! implementation can be injected; the in-memory one is the default. Form submissions
//! go through it so that identifiers and creation dates are assigned in one place,
//! and every mutation is logged.

use super::repository::{InMemoryRepository, Repository};
use crate::{
    config::AppConfig,
    core::{contract::ContractForm, order::OrderForm},
    entities::{ContractModel, OrderModel},
    errors::Result,
};
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

/// Contract and order collections for one session.
#[derive(Debug, Clone, Default)]
pub struct BusinessData<
    C = InMemoryRepository<ContractModel>,
    O = InMemoryRepository<OrderModel>,
> {
    contracts: C,
    orders: O,
}

impl BusinessData {
    /// Seeds the collections from configuration, keeping the file's order.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            "Seeding {} contracts and {} orders",
            config.contracts.len(),
            config.orders.len()
        );
        Self {
            contracts: InMemoryRepository::from_records(config.contracts.clone()),
            orders: InMemoryRepository::from_records(config.orders.clone()),
        }
    }
}

impl<C, O> BusinessData<C, O>
where
    C: Repository<ContractModel>,
    O: Repository<OrderModel>,
{
    /// Wraps the given repositories.
    #[must_use]
    pub const fn new(contracts: C, orders: O) -> Self {
        Self { contracts, orders }
    }

    /// All contracts, newest first.
    #[must_use]
    pub fn contracts(&self) -> &[ContractModel] {
        self.contracts.list()
    }

    /// All orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[OrderModel] {
        self.orders.list()
    }

    /// The contract with identifier `id`, if any.
    #[must_use]
    pub fn contract(&self, id: &str) -> Option<&ContractModel> {
        self.contracts.get(id)
    }

    /// The order with identifier `id`, if any.
    #[must_use]
    pub fn order(&self, id: &str) -> Option<&OrderModel> {
        self.orders.get(id)
    }

    /// Validates a contract form and stores the new contract.
    ///
    /// # Errors
    /// Returns `Error::Validation` if the form is incomplete; nothing is stored.
    pub fn add_contract(&mut self, form: ContractForm) -> Result<&ContractModel> {
        let contract = form.into_contract(new_id(), today())?;
        Ok(self.insert_contract(contract))
    }

    /// Stores an already built contract.
    pub fn insert_contract(&mut self, contract: ContractModel) -> &ContractModel {
        info!("Contract added: {} ({})", contract.title, contract.id);
        debug!("New contract: {:?}", contract);
        self.contracts.add(contract)
    }

    /// Applies a change to a stored contract.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no contract has that identifier.
    pub fn update_contract<F>(&mut self, id: &str, apply: F) -> Result<&ContractModel>
    where
        F: FnOnce(&mut ContractModel),
    {
        let contract = self.contracts.update(id, apply)?;
        info!("Contract updated: {}", id);
        Ok(contract)
    }

    /// Deletes a contract and returns it.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no contract has that identifier.
    pub fn delete_contract(&mut self, id: &str) -> Result<ContractModel> {
        let contract = self.contracts.remove(id)?;
        info!("Contract deleted: {}", id);
        Ok(contract)
    }

    /// Validates an order form and stores the new order.
    ///
    /// # Errors
    /// Returns `Error::Validation` if the form is incomplete or has no valid item;
    /// nothing is stored.
    pub fn add_order(&mut self, form: OrderForm) -> Result<&OrderModel> {
        let order = form.into_order(new_id(), today())?;
        Ok(self.insert_order(order))
    }

    /// Stores an already built order.
    pub fn insert_order(&mut self, order: OrderModel) -> &OrderModel {
        info!("Order added: {} ({})", order.title, order.id);
        debug!("New order: {:?}", order);
        self.orders.add(order)
    }

    /// Applies a change to a stored order.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no order has that identifier.
    pub fn update_order<F>(&mut self, id: &str, apply: F) -> Result<&OrderModel>
    where
        F: FnOnce(&mut OrderModel),
    {
        let order = self.orders.update(id, apply)?;
        info!("Order updated: {}", id);
        Ok(order)
    }

    /// Deletes an order and returns it.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if no order has that identifier.
    pub fn delete_order(&mut self, id: &str) -> Result<OrderModel> {
        let order = self.orders.remove(id)?;
        info!("Order deleted: {}", id);
        Ok(order)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
