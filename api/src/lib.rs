//! This crate contains the data types and collaborator seams shared by the
//! cash transactions view and the applications embedding it.

pub mod access;
pub mod cash_amount;
pub mod currency;
pub mod prefs;
pub mod source;
pub mod transaction;

use thiserror::Error;

/// Failures reported by a [`source::TransactionSource`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("account id must not be empty")]
    InvalidAccountId,

    #[error("unknown account: {0}")]
    UnknownAccount(String),

    #[error("{} may not view account {account_id}", .user_id.as_deref().unwrap_or("anonymous viewer"))]
    AccessDenied {
        user_id: Option<String>,
        account_id: String,
    },

    #[error("transaction data unavailable: {0}")]
    Unavailable(String),
}
