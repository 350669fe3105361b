//! Building blocks of the cash transactions view. Only `cash_transactions`
//! is exported from the crate; the rest are its parts.
pub mod cash_transactions;
pub mod columns_popup;
pub mod empty_state;
pub mod pico;
pub mod sortable_header;
pub mod transaction_row;
