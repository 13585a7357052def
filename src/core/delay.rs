//! Execution delay labels.

use crate::entities::DelayUnit;

/// Renders a delay as `"<amount> <unit>"` in French.
///
/// "mois" is invariable, while weeks take the plural "semaines" for every amount
/// other than one (including zero).
#[must_use]
pub fn format_execution_delay(amount: u32, unit: DelayUnit) -> String {
    let unit_text = match unit {
        DelayUnit::Months => "mois",
        DelayUnit::Weeks if amount == 1 => "semaine",
        DelayUnit::Weeks => "semaines",
    };

    format!("{amount} {unit_text}")
}
