//! Exchange-rate record types.

use serde::{Deserialize, Serialize};

/// One normalized entry of the NBS middle-rate table.
///
/// Every field stays a string: the upstream table controls number formatting
/// (decimal separator included) and the value must pass through unchanged.
/// Field order is the serialized JSON order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Currency short name / alphabetic code, e.g. "EUR" (first table column)
    pub label: String,

    /// Numeric currency code, e.g. "978"
    pub code: String,

    /// Issuing country or zone
    pub country: String,

    /// Quantity basis the rate refers to, e.g. "1" or "100"
    pub unit: String,

    /// Middle rate in dinars for `unit` of the currency, as published
    pub rate: String,
}

impl ExchangeRate {
    /// Number of leading cells a row must carry to map into a record.
    pub const FIELDS: usize = 5;

    /// Map a row's cells into a record by position.
    ///
    /// Returns `None` when the row is too short; extra trailing cells are
    /// ignored.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        match cells {
            [label, code, country, unit, rate, ..] => Some(Self {
                label: label.clone(),
                code: code.clone(),
                country: country.clone(),
                unit: unit.clone(),
                rate: rate.clone(),
            }),
            _ => None,
        }
    }
}
