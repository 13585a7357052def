//! Contract entity - A client agreement with a value and an execution delay.
//!
//! The end date is deliberately absent from the record: it is derived from the
//! effective date and the delay every time it is needed.

use super::status::{ContractStatus, DelayUnit};
use crate::{core::dates, errors::Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Contract record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Unique identifier
    pub id: String,
    /// Short name of the contract
    pub title: String,
    /// Client the contract is signed with
    pub client: String,
    /// Date the contract takes effect
    pub effective_date: NaiveDate,
    /// Contract value in the configured currency
    pub value: f64,
    /// Current lifecycle status
    pub status: ContractStatus,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Free-text terms and conditions
    #[serde(default)]
    pub terms: String,
    /// Number of delay units until the contract ends
    pub execution_delay: u32,
    /// Unit of `execution_delay`
    pub delay_unit: DelayUnit,
    /// Date the record was created
    pub created_at: NaiveDate,
}

impl Model {
    /// Derives the date the contract ends.
    ///
    /// # Errors
    /// Returns `Error::DateOutOfRange` if the delay pushes the date past the calendar.
    pub fn end_date(&self) -> Result<NaiveDate> {
        dates::end_date_from(self.effective_date, self.execution_delay, self.delay_unit)
    }
}
