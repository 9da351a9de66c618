//! This crate contains all shared fullstack server functions.

pub mod notification;
pub mod transaction_record;

#[cfg(not(target_arch = "wasm32"))]
mod notifier;
#[cfg(not(target_arch = "wasm32"))]
mod sample_data;

use dioxus::prelude::*;
use notification::NotificationId;
use transaction_record::TransactionRecord;

pub type ApiError = anyhow::Error;

/// Returns the display string for the current account balance.
///
/// The figure is served as-is; it is not computed from the transaction
/// history. See `sample_data` for where it comes from.
#[post("/api/account_balance")]
pub async fn account_balance() -> Result<String, ApiError> {
    Ok(sample_data::account_balance())
}

/// Returns the most recent transactions, newest first, already
/// formatted for display.
#[post("/api/recent_transactions")]
pub async fn recent_transactions() -> Result<Vec<TransactionRecord>, ApiError> {
    let history = sample_data::recent_transactions();
    dioxus_logger::tracing::info!("serving {} transactions", history.len());
    Ok(history)
}

/// Schedules a local push notification for delayed delivery and returns
/// its id.
///
/// Every call schedules a fresh notification. There is no debounce and
/// no in-flight tracking: pressing the trigger twice schedules twice.
#[post("/api/schedule_push_notification")]
pub async fn schedule_push_notification() -> Result<NotificationId, ApiError> {
    let id = notifier::schedule(notification::Notification::reminder()).await?;
    Ok(id)
}
