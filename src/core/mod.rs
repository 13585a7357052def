//! Core business logic - framework-agnostic calculations and form submission.
//!
//! Nothing in here touches global state: every function works only on the values
//! passed to it.

/// Contract form submission and end date preview
pub mod contract;
/// Currency configuration and French amount formatting
pub mod currency;
/// Display cards and the home summary
pub mod dashboard;
/// End date calculation and date formatting
pub mod dates;
/// Execution delay labels
pub mod delay;
/// Line totals, order totals, item validity and order submission
pub mod order;

pub use contract::ContractForm;
pub use currency::{Currency, CurrencyFormatter};
pub use dashboard::{ContractCard, Dashboard, OrderCard};
pub use dates::{calculate_end_date, end_date_from, format_calendar_date, format_date};
pub use delay::format_execution_delay;
pub use order::{
    OrderForm, is_valid_item, line_total, order_total, require_valid_items, valid_items,
};
