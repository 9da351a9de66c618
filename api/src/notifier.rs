//! Server-side scheduling of local notifications.
//!
//! Delivery here means a tracing event after the configured delay; a
//! platform notification daemon would hang off the same spot.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::notification::Notification;
use crate::notification::NotificationId;

const DEFAULT_DELAY_SECS: u64 = 2;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("invalid NOTIFY_DELAY_SECS value: {0:?}")]
    InvalidDelay(String),
}

/// Parses a delivery delay from the raw `NOTIFY_DELAY_SECS` value.
/// An unset variable falls back to the default; garbage is an error.
fn parse_delay(raw: Option<&str>) -> Result<Duration, NotifyError> {
    match raw {
        Some(s) => s
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| NotifyError::InvalidDelay(s.to_string())),
        None => Ok(Duration::from_secs(DEFAULT_DELAY_SECS)),
    }
}

fn delivery_delay() -> Result<Duration, NotifyError> {
    let raw = std::env::var("NOTIFY_DELAY_SECS").ok();
    parse_delay(raw.as_deref())
}

/// Schedules `notification` for delivery after the configured delay and
/// returns its id.
///
/// Delivery runs on a detached task; callers are done once the
/// notification is queued and are not expected to wait for it.
pub async fn schedule(notification: Notification) -> Result<NotificationId, NotifyError> {
    let delay = delivery_delay()?;
    let id = NotificationId::new(NEXT_ID.fetch_add(1, Ordering::Relaxed));

    dioxus_logger::tracing::info!("notification {id} scheduled, delivery in {delay:?}");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        dioxus_logger::tracing::info!(
            "notification {id} delivered: {} - {}",
            notification.title,
            notification.body
        );
    });

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_call_schedules_a_new_notification() {
        let first = schedule(Notification::reminder()).await.unwrap();
        let second = schedule(Notification::reminder()).await.unwrap();
        let third = schedule(Notification::reminder()).await.unwrap();

        // One id per call, strictly increasing. No deduplication of
        // back-to-back identical notifications.
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn unset_delay_uses_the_default() {
        let delay = parse_delay(None).unwrap();
        assert_eq!(delay, Duration::from_secs(DEFAULT_DELAY_SECS));
    }

    #[test]
    fn numeric_delay_is_honored() {
        let delay = parse_delay(Some("30")).unwrap();
        assert_eq!(delay, Duration::from_secs(30));
    }

    #[test]
    fn garbage_delay_is_rejected() {
        let err = parse_delay(Some("soon")).unwrap_err();
        assert!(matches!(err, NotifyError::InvalidDelay(ref s) if s == "soon"));
    }
}
