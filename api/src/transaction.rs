//! The cash transaction record as delivered by a [`TransactionSource`].
//!
//! [`TransactionSource`]: crate::source::TransactionSource

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::cash_amount::CashAmount;

/// What caused a cash movement.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum CashTransactionKind {
    Deposit,
    Withdrawal,
    Dividend,
    Interest,
    Fee,
    Trade,
    Transfer,
}

/// A single movement of cash on an account.
///
/// `amount` is signed: inflows are positive, outflows negative. `pnl` is the
/// realized profit or loss attributed to the movement, when there is one.
/// `balance` is the account's running cash balance after the movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashTransaction {
    pub id: String,
    pub account_id: String,
    pub date: NaiveDate,
    pub kind: CashTransactionKind,
    #[serde(default)]
    pub description: String,
    pub amount: CashAmount,
    #[serde(default)]
    pub pnl: Option<CashAmount>,
    #[serde(default)]
    pub balance: Option<CashAmount>,
}
