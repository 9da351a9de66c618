//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::components::pico::Button;
use crate::components::pico::Card;
use api::transaction_record::TransactionRecord;
use dioxus::prelude::*;

/// The balance summary region. The amount arrives pre-formatted, so
/// this renders it verbatim.
#[component]
fn BalanceSummary(balance: String) -> Element {
    rsx! {
        section {
            class: "balance-summary",
            h2 { "Account Balance" }
            p {
                class: "balance-amount",
                "{balance}"
            }
        }
    }
}

const QUICK_ACTIONS: [&str; 3] = ["Send Money", "Pay Bills", "Request Money"];

/// The quick-action row. All three buttons are intentionally inert;
/// wiring them up is a product decision that has not been made yet, not
/// an omission.
#[component]
fn QuickActions() -> Element {
    rsx! {
        section {
            class: "quick-actions",
            for label in QUICK_ACTIONS {
                Button { "{label}" }
            }
        }
    }
}

/// One row of the transaction list: title left, amount right in bold,
/// date below in the muted secondary style.
#[component]
fn TransactionRow(transaction: TransactionRecord) -> Element {
    rsx! {
        div {
            class: "transaction-row",
            span {
                class: "transaction-title",
                "{transaction.title}"
            }
            span {
                class: "transaction-amount",
                "{transaction.amount}"
            }
            span {
                class: "transaction-date",
                "{transaction.date}"
            }
        }
    }
}

/// The notification trigger. Each press schedules one more notification
/// with no debounce. The outcome is acknowledged in the log and
/// otherwise ignored on purpose: no spinner, no error surface, no
/// retry.
#[component]
fn NotificationTrigger() -> Element {
    rsx! {
        section {
            class: "notification-trigger",
            Button {
                on_click: move |_| {
                    spawn(async move {
                        match api::schedule_push_notification().await {
                            Ok(id) => {
                                dioxus_logger::tracing::info!("scheduled notification {id}");
                            }
                            Err(e) => {
                                dioxus_logger::tracing::warn!("notification scheduling failed: {e}");
                            }
                        }
                    });
                },
                "Press to schedule a notification"
            }
        }
    }
}

/// Pure rendering of the four home-screen regions, in fixed order.
///
/// Where the data comes from is the caller's concern; with fixture
/// props this renders the same screen every time, which is what the
/// tests below pin down.
#[component]
pub fn HomeContent(balance: String, transactions: Vec<TransactionRecord>) -> Element {
    rsx! {
        div {
            class: "home-container",
            BalanceSummary { balance }
            QuickActions {}
            section {
                class: "transactions",
                h3 { "Recent Transactions" }
                // Rows are keyed by the record id so a re-render with
                // unchanged data keeps row identity.
                for tx in transactions.iter() {
                    TransactionRow {
                        key: "{tx.id}",
                        transaction: tx.clone(),
                    }
                }
            }
            NotificationTrigger {}
        }
    }
}

/// The home screen: fetches the account overview once, then hands the
/// data to [`HomeContent`].
#[allow(non_snake_case)]
#[component]
pub fn HomeScreen() -> Element {
    let mut overview = use_resource(move || async move {
        let balance = api::account_balance().await?;
        let transactions = api::recent_transactions().await?;
        Ok::<_, api::ApiError>((balance, transactions))
    });

    rsx! {
        match &*overview.read() {
            None => rsx! {
                Card {
                    p { "Loading..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load account overview: {e}" }
                    button { onclick: move |_| overview.restart(), "Retry" }
                }
            },
            Some(Ok((balance, transactions))) => rsx! {
                HomeContent {
                    balance: balance.clone(),
                    transactions: transactions.clone(),
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BALANCE: &str = "$12,345.67";

    fn fixture_transactions() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::new("1", "Grocery Store", "-$45.00", "Sep 10"),
            TransactionRecord::new("2", "Salary", "+$1500.00", "Sep 9"),
            TransactionRecord::new("3", "Coffee Shop", "-$5.50", "Sep 8"),
        ]
    }

    fn render_home(balance: &str, transactions: Vec<TransactionRecord>) -> String {
        let mut vdom = VirtualDom::new_with_props(
            HomeContent,
            HomeContentProps {
                balance: balance.to_string(),
                transactions,
            },
        );
        vdom.rebuild_in_place();
        dioxus_ssr::render(&vdom)
    }

    #[test]
    fn renders_all_four_regions() {
        let html = render_home(BALANCE, fixture_transactions());

        assert!(html.contains("Account Balance"));
        assert!(html.contains(BALANCE));

        assert!(html.contains("Send Money"));
        assert!(html.contains("Pay Bills"));
        assert!(html.contains("Request Money"));

        assert!(html.contains("Recent Transactions"));
        for tx in fixture_transactions() {
            assert!(html.contains(&tx.title), "missing title {:?}", tx.title);
            assert!(html.contains(&tx.amount), "missing amount {:?}", tx.amount);
            assert!(html.contains(&tx.date), "missing date {:?}", tx.date);
        }

        assert!(html.contains("Press to schedule a notification"));
    }

    #[test]
    fn transaction_rows_keep_fixture_order() {
        let html = render_home(BALANCE, fixture_transactions());

        let grocery = html.find("Grocery Store").unwrap();
        let salary = html.find("Salary").unwrap();
        let coffee = html.find("Coffee Shop").unwrap();
        assert!(grocery < salary);
        assert!(salary < coffee);
    }

    #[test]
    fn exactly_one_row_per_transaction() {
        let html = render_home(BALANCE, fixture_transactions());
        assert_eq!(html.matches("transaction-row").count(), 3);
    }

    #[test]
    fn balance_is_independent_of_transaction_data() {
        let swapped = vec![TransactionRecord::new(
            "9",
            "Yacht",
            "-$999,999.00",
            "Jan 1",
        )];
        let html = render_home(BALANCE, swapped);

        // Different history, same balance: the two are unrelated.
        assert!(html.contains(BALANCE));
        assert!(html.contains("Yacht"));
        assert!(!html.contains("Grocery Store"));
    }

    #[test]
    fn empty_history_renders_no_rows() {
        let html = render_home(BALANCE, Vec::new());

        assert_eq!(html.matches("transaction-row").count(), 0);
        // The other regions are unaffected.
        assert!(html.contains(BALANCE));
        assert!(html.contains("Press to schedule a notification"));
    }
}
