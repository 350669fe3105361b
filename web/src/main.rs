use api::access::AccountGrants;
use api::prefs::table_prefs::TablePrefs;
use api::source::InMemoryTransactions;
use api::source::TransactionStore;
use dioxus::prelude::*;
use ui::CashTransaction;
use ui::CashTransactions;
use ui::CashTransactionsEvent;

const DEMO_TRANSACTIONS: &str = include_str!("../assets/demo_transactions.json");
const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Demo data, readable by "alice" only.
fn demo_store() -> TransactionStore {
    let source = InMemoryTransactions::from_json(DEMO_TRANSACTIONS).unwrap_or_else(|e| {
        dioxus_logger::tracing::error!("demo transactions are invalid: {}", e);
        InMemoryTransactions::new()
    });
    let grants = AccountGrants::new()
        .grant("brokerage-1", "alice")
        .grant("savings-2", "alice");
    TransactionStore::new(source.with_policy(grants))
}

#[component]
fn App() -> Element {
    use_context_provider(demo_store);
    use_context_provider(TablePrefs::from_env);

    let mut highlight = use_signal(|| true);
    let mut viewer = use_signal(|| "alice".to_string());
    let mut last_event = use_signal(|| "none yet".to_string());

    rsx! {
        document::Stylesheet { href: PICO_CSS }
        main {
            class: "container",
            nav {
                ul {
                    li {
                        label {
                            input {
                                r#type: "checkbox",
                                checked: highlight(),
                                onchange: move |_| highlight.toggle(),
                            }
                            "Highlight P&L"
                        }
                    }
                    li {
                        select {
                            onchange: move |evt| viewer.set(evt.value()),
                            option { value: "alice", "Viewing as alice" }
                            option { value: "bob", "Viewing as bob" }
                        }
                    }
                }
            }
            p { small { "Last event: {last_event}" } }
            for account_id in ["brokerage-1", "savings-2"] {
                ErrorBoundary {
                    key: "{account_id}",
                    handle_error: move |_errors: ErrorContext| rsx! {
                        article { "You may not view the cash transactions of {account_id}." }
                    },
                    CashTransactions {
                        account_id,
                        user_id: viewer(),
                        highlight_pnl: highlight(),
                        show_header_link: true,
                        on_row_click: move |row: CashTransaction| {
                            last_event.set(format!("row-click {} ({})", row.id, row.description));
                        },
                        on_minimize: move |_| last_event.set(format!("minimize {account_id}")),
                        on_event: move |evt: CashTransactionsEvent| {
                            dioxus_logger::tracing::info!("{}: {:?}", account_id, evt);
                        },
                    }
                }
            }
        }
    }
}
