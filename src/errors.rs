//! Unified error type for the calculation library and the data-access layer.

use thiserror::Error;

/// Everything that can go wrong in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A date string is not `YYYY-MM-DD` or RFC 3339, or names a day that does not exist
    #[error("Invalid calendar date: {input:?}")]
    InvalidDate {
        /// The rejected input, as given
        input: String,
    },

    /// Adding a delay runs past the supported calendar
    #[error("Date out of range: {date} + {delay}")]
    DateOutOfRange {
        /// Starting date as `YYYY-MM-DD`
        date: String,
        /// Delay label, e.g. "6 mois"
        delay: String,
    },

    /// A form submission was rejected; the message is shown to the user
    #[error("Validation error: {message}")]
    Validation {
        /// French message for the user
        message: String,
    },

    /// A contract or order status outside the known set
    #[error("Unknown status: {value:?}")]
    UnknownStatus {
        /// The rejected value
        value: String,
    },

    /// A delay unit other than months or weeks
    #[error("Unknown delay unit: {value:?}")]
    UnknownDelayUnit {
        /// The rejected value
        value: String,
    },

    /// A currency other than DZD or EUR
    #[error("Unknown currency: {value:?}")]
    UnknownCurrency {
        /// The rejected value
        value: String,
    },

    /// No record with that identifier
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind, e.g. "Contract"
        kind: &'static str,
        /// The identifier looked up
        id: String,
    },

    /// The configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What failed, including the path
        message: String,
    },
}

impl Error {
    /// Shorthand for a blocking form-submission error.
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
