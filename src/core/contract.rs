//! Contract business logic - contract form submission and end date preview.
//!
//! A contract form carries raw text exactly as typed. Submitting it trims and parses
//! every field, and either yields a complete pending contract or a validation error
//! without building anything.

use super::{
    dates::{calculate_end_date, parse_calendar_date},
    order::MISSING_FIELDS_MESSAGE,
};
use crate::{
    entities::{ContractModel, ContractStatus, DelayUnit},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use tracing::debug;

/// Raw input of the new-contract form.
#[derive(Debug, Clone, Default)]
pub struct ContractForm {
    /// Contract title (required)
    pub title: String,
    /// Client name (required)
    pub client: String,
    /// Effective date as `YYYY-MM-DD` (required)
    pub effective_date: String,
    /// Contract value (required); a decimal comma is accepted
    pub value: String,
    /// Free-text description
    pub description: String,
    /// Free-text terms
    pub terms: String,
    /// Number of delay units (required)
    pub execution_delay: String,
    /// Unit of the execution delay
    pub delay_unit: DelayUnit,
}

impl ContractForm {
    /// End date for the values typed so far, or `None` while it cannot be derived.
    #[must_use]
    pub fn preview_end_date(&self) -> Option<String> {
        let effective_date = self.effective_date.trim();
        let delay = self.execution_delay.trim();
        if effective_date.is_empty() || delay.is_empty() {
            return None;
        }

        let delay = parse_delay(delay).ok()?;
        calculate_end_date(effective_date, delay, self.delay_unit)
            .inspect_err(|e| debug!("No end date preview: {e}"))
            .ok()
    }

    /// Validates the form and builds a pending contract.
    ///
    /// # Errors
    /// Returns `Error::Validation` when a required field is blank or a field does not
    /// parse. A negative or non-finite value is rejected here.
    pub fn into_contract(self, id: String, created_at: NaiveDate) -> Result<ContractModel> {
        let title = self.title.trim();
        let client = self.client.trim();
        let effective_date = self.effective_date.trim();
        let value = self.value.trim();
        let execution_delay = self.execution_delay.trim();

        if [title, client, effective_date, value, execution_delay]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(Error::validation(MISSING_FIELDS_MESSAGE));
        }

        let effective_date = parse_calendar_date(effective_date)
            .map_err(|_| Error::validation("La date d'entrée en vigueur est invalide."))?;
        let value = parse_amount(value)?;
        let execution_delay = parse_delay(execution_delay)?;

        Ok(ContractModel {
            id,
            title: title.to_string(),
            client: client.to_string(),
            effective_date,
            value,
            status: ContractStatus::Pending,
            description: self.description.trim().to_string(),
            terms: self.terms.trim().to_string(),
            execution_delay,
            delay_unit: self.delay_unit,
            created_at,
        })
    }
}

/// Parses a typed amount. Spaces used as thousands separators are ignored and a
/// decimal comma is read as a point.
fn parse_amount(raw: &str) -> Result<f64> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match normalized.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(Error::validation("La valeur du contrat est invalide.")),
    }
}

fn parse_delay(raw: &str) -> Result<u32> {
    raw.parse::<u32>()
        .map_err(|_| Error::validation("Le délai d'exécution est invalide."))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_submit_builds_pending_contract() {
        let contract = contract_form()
            .into_contract("c9".to_string(), date(2024, 3, 1))
            .unwrap();

        assert_eq!(contract.id, "c9");
        assert_eq!(contract.title, "Installation électrique");
        assert_eq!(contract.client, "SARL Atlas");
        assert_eq!(contract.status, ContractStatus::Pending);
        assert_eq!(contract.value, 2_500_000.5);
        assert_eq!(contract.execution_delay, 6);
        assert_eq!(contract.end_date().unwrap(), date(2024, 9, 15));
        assert_eq!(contract.created_at, date(2024, 3, 1));
    }

    #[test]
    fn test_submit_rejects_blank_required_fields() {
        let blanks: [fn(&mut ContractForm); 5] = [
            |f: &mut ContractForm| f.title = "  ".to_string(),
            |f: &mut ContractForm| f.client = String::new(),
            |f: &mut ContractForm| f.effective_date = String::new(),
            |f: &mut ContractForm| f.value = String::new(),
            |f: &mut ContractForm| f.execution_delay = " ".to_string(),
        ];

        for blank in blanks {
            let mut form = contract_form();
            blank(&mut form);
            let err = form.into_contract("c".to_string(), date(2024, 3, 1)).unwrap_err();
            assert!(matches!(err, Error::Validation { .. }));
        }
    }

    #[test]
    fn test_submit_rejects_unparseable_fields() {
        let bad: [fn(&mut ContractForm); 5] = [
            |f: &mut ContractForm| f.effective_date = "2024-02-30".to_string(),
            |f: &mut ContractForm| f.value = "beaucoup".to_string(),
            |f: &mut ContractForm| f.value = "-10".to_string(),
            |f: &mut ContractForm| f.execution_delay = "-1".to_string(),
            |f: &mut ContractForm| f.execution_delay = "2.5".to_string(),
        ];

        for corrupt in bad {
            let mut form = contract_form();
            corrupt(&mut form);
            assert!(matches!(
                form.into_contract("c".to_string(), date(2024, 3, 1)),
                Err(Error::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_amount_accepts_french_notation() {
        assert_eq!(parse_amount("1 250,75").unwrap(), 1250.75);
        assert_eq!(parse_amount("1\u{202f}000").unwrap(), 1000.0);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_preview_end_date() {
        let mut form = contract_form();
        assert_eq!(form.preview_end_date().as_deref(), Some("2024-09-15"));

        form.delay_unit = DelayUnit::Weeks;
        assert_eq!(form.preview_end_date().as_deref(), Some("2024-04-26"));
    }

    #[test]
    fn test_preview_end_date_is_absent_until_computable() {
        let mut form = ContractForm::default();
        assert_eq!(form.preview_end_date(), None);

        form.effective_date = "2024-03-15".to_string();
        assert_eq!(form.preview_end_date(), None);

        form.execution_delay = "trois".to_string();
        assert_eq!(form.preview_end_date(), None);

        form.execution_delay = "3".to_string();
        form.effective_date = "15 mars".to_string();
        assert_eq!(form.preview_end_date(), None);
    }
}
