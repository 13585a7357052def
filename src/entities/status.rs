//! Closed status and unit enums shared by contracts and orders.
//!
//! Every enum parses from its lowercase wire name and rejects anything else with an
//! explicit error. Serde deserialization goes through the same parser so a seed file
//! can never smuggle in an unrecognized value.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Visual category a status is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    /// Running or accepted
    Active,
    /// Waiting on someone
    Pending,
    /// Finished without success, or no longer valid
    Expired,
    /// Completed successfully
    Success,
}

/// Lifecycle status of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ContractStatus {
    /// Contract is in force
    Active,
    /// Contract is waiting to take effect
    Pending,
    /// Contract has run out
    Expired,
}

impl ContractStatus {
    /// Wire name used in seed files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Expired => "expired",
        }
    }

    /// French display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Actif",
            Self::Pending => "En attente",
            Self::Expired => "Expiré",
        }
    }

    /// Visual category the status is displayed with.
    #[must_use]
    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::Active => BadgeTone::Active,
            Self::Pending => BadgeTone::Pending,
            Self::Expired => BadgeTone::Expired,
        }
    }
}

impl FromStr for ContractStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "expired" => Ok(Self::Expired),
            other => Err(Error::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ContractStatus {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OrderStatus {
    /// Submitted, not yet confirmed
    Pending,
    /// Accepted by the supplier
    Confirmed,
    /// Handed over to the client
    Delivered,
    /// Abandoned
    Cancelled,
}

impl OrderStatus {
    /// Wire name used in seed files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// French display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Confirmed => "Confirmée",
            Self::Delivered => "Livrée",
            Self::Cancelled => "Annulée",
        }
    }

    /// Visual category the status is displayed with.
    #[must_use]
    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::Pending => BadgeTone::Pending,
            Self::Confirmed => BadgeTone::Active,
            Self::Delivered => BadgeTone::Success,
            Self::Cancelled => BadgeTone::Expired,
        }
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(Error::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of a contract's execution delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DelayUnit {
    /// Calendar months
    #[default]
    Months,
    /// Seven-day weeks
    Weeks,
}

impl DelayUnit {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Months => "months",
            Self::Weeks => "weeks",
        }
    }
}

impl FromStr for DelayUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "months" => Ok(Self::Months),
            "weeks" => Ok(Self::Weeks),
            other => Err(Error::UnknownDelayUnit {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DelayUnit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for DelayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
