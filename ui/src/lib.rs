// A reusable Dioxus view of one account's cash transactions.
//
// The view reads rows from the `api::source::TransactionStore` provided as a
// context by the embedding application, and optionally from
// `api::prefs::table_prefs::TablePrefs`.

mod components;
mod events;
mod totals;
mod view_state;

pub use api::prefs::column::Column;
pub use api::transaction::CashTransaction;
pub use components::cash_transactions::CashTransactions;
pub use components::cash_transactions::CashTransactionsProps;
pub use events::CashTransactionsEvent;
