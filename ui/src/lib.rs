// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use screens::home::HomeScreen;

/// Screen styling, translated from the product mockups. Kept inline so
/// every launcher ships the same look without an asset pipeline.
const APP_CSS: &str = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        margin: 0;
        padding: 0;
        font-family: system-ui, -apple-system, sans-serif;
        background-color: #fff;
        color: #111;
    }

    .home-container {
        min-height: 100vh;
        padding: 16px;
        display: flex;
        flex-direction: column;
        max-width: 480px;
        margin: 0 auto;
    }

    /* --- Balance summary --- */
    .balance-summary {
        margin-bottom: 24px;
        text-align: center;
    }
    .balance-summary h2 {
        font-size: 18px;
        font-weight: 600;
        margin: 0 0 8px 0;
    }
    .balance-amount {
        font-size: 32px;
        font-weight: bold;
        margin: 0;
    }

    /* --- Quick actions --- */
    .quick-actions {
        display: flex;
        justify-content: space-around;
        margin-bottom: 24px;
    }
    .quick-actions button {
        background-color: #4CAF50;
        color: #fff;
        font-weight: bold;
        padding: 12px;
        border: none;
        border-radius: 8px;
        cursor: pointer;
    }

    /* --- Transaction list --- */
    .transactions {
        flex: 1;
        min-height: 0;
        overflow-y: auto;
    }
    .transactions h3 {
        margin: 0 0 16px 0;
    }
    .transaction-row {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        padding: 12px;
        border-bottom: 1px solid #ccc;
    }
    .transaction-title { font-size: 16px; }
    .transaction-amount { font-size: 16px; font-weight: bold; }
    .transaction-date {
        font-size: 14px;
        color: #888;
        width: 100%;
    }

    /* --- Notification trigger --- */
    .notification-trigger {
        margin-top: 16px;
    }
    .notification-trigger button {
        width: 100%;
        background: none;
        border: none;
        color: #2196F3;
        font-size: 16px;
        padding: 8px;
        cursor: pointer;
    }
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{APP_CSS}"
        }
        HomeScreen {}
    }
}
