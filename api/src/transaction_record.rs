//! The display record for one row of the transaction list.

use serde::Deserialize;
use serde::Serialize;

/// A single transaction as shown on the home screen.
///
/// Every field arrives pre-formatted: `amount` carries its own sign and
/// currency symbol, `date` is already a short label. `id` exists only
/// as a stable list key and is never dereferenced.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub title: String,
    pub amount: String,
    pub date: String,
}

impl TransactionRecord {
    pub fn new(id: &str, title: &str, amount: &str, date: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            amount: amount.to_string(),
            date: date.to_string(),
        }
    }
}
