//! Entity module - Contains the contract and order records and their enums.
//! Each record module exposes a `Model` struct; statuses and units live in `status`.

/// Contract record
pub mod contract;
/// Order record and its line items
pub mod order;
/// Statuses, delay units and badge tones
pub mod status;

// Re-export specific types to avoid conflicts
pub use contract::Model as ContractModel;
pub use order::{Model as OrderModel, OrderItem};
pub use status::{BadgeTone, ContractStatus, DelayUnit, OrderStatus};
