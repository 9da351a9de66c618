//! Fixture data standing in for a real ledger backend.
//!
//! The rest of the app only sees the server functions in `lib.rs`, so
//! swapping this module for a live data source changes nothing else.

use crate::transaction_record::TransactionRecord;

/// The balance display string.
///
/// Independent of the transaction fixtures below on purpose: the home
/// screen shows it verbatim and enforces no consistency between the
/// two.
pub fn account_balance() -> String {
    "$12,345.67".to_string()
}

/// The fixed transaction history, newest first.
pub fn recent_transactions() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::new("1", "Grocery Store", "-$45.00", "Sep 10"),
        TransactionRecord::new("2", "Salary", "+$1500.00", "Sep 9"),
        TransactionRecord::new("3", "Coffee Shop", "-$5.50", "Sep 8"),
    ]
}
