//! The data seam the cash transactions view reads from.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::access::AccessPolicy;
use crate::access::AllowAll;
use crate::transaction::CashTransaction;
use crate::ApiError;

/// Supplies the cash transactions of one account, as seen by one viewer.
///
/// Implementations own retrieval, caching, and access control. Rows are
/// returned in the order the view should show them by default.
pub trait TransactionSource: Send + Sync {
    fn cash_transactions(
        &self,
        account_id: &str,
        user_id: Option<&str>,
    ) -> BoxFuture<'static, Result<Vec<CashTransaction>, ApiError>>;
}

/// A cheaply clonable handle to the application's `TransactionSource`,
/// suitable for providing as a Dioxus context.
#[derive(Clone)]
pub struct TransactionStore(Arc<dyn TransactionSource>);

impl TransactionStore {
    pub fn new(source: impl TransactionSource + 'static) -> Self {
        Self(Arc::new(source))
    }
}

impl Deref for TransactionStore {
    type Target = dyn TransactionSource;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// An in-memory `TransactionSource`, keyed by account id.
pub struct InMemoryTransactions {
    accounts: HashMap<String, Vec<CashTransaction>>,
    policy: Box<dyn AccessPolicy>,
}

impl Default for InMemoryTransactions {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            policy: Box::new(AllowAll),
        }
    }
}

impl InMemoryTransactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from a JSON array of transactions, grouping rows by
    /// their `account_id` and keeping their relative order.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let rows: Vec<CashTransaction> = serde_json::from_str(json)?;
        Ok(rows.into_iter().fold(Self::new(), |src, row| src.with_row(row)))
    }

    /// Registers an account, so that it is known even without transactions.
    pub fn with_account(mut self, account_id: impl Into<String>) -> Self {
        self.accounts.entry(account_id.into()).or_default();
        self
    }

    pub fn with_row(mut self, row: CashTransaction) -> Self {
        self.accounts
            .entry(row.account_id.clone())
            .or_default()
            .push(row);
        self
    }

    pub fn with_policy(mut self, policy: impl AccessPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    fn lookup(
        &self,
        account_id: &str,
        user_id: Option<&str>,
    ) -> Result<Vec<CashTransaction>, ApiError> {
        if account_id.trim().is_empty() {
            return Err(ApiError::InvalidAccountId);
        }
        let rows = self
            .accounts
            .get(account_id)
            .ok_or_else(|| ApiError::UnknownAccount(account_id.to_string()))?;

        if !self.policy.can_view(user_id, account_id) {
            return Err(ApiError::AccessDenied {
                user_id: user_id.map(str::to_string),
                account_id: account_id.to_string(),
            });
        }
        Ok(rows.clone())
    }
}

impl TransactionSource for InMemoryTransactions {
    fn cash_transactions(
        &self,
        account_id: &str,
        user_id: Option<&str>,
    ) -> BoxFuture<'static, Result<Vec<CashTransaction>, ApiError>> {
        let result = self.lookup(account_id, user_id);
        match &result {
            Ok(rows) => dioxus_logger::tracing::debug!(
                "cash transactions for {}: {} rows",
                account_id,
                rows.len()
            ),
            Err(e) => dioxus_logger::tracing::warn!("cash transactions for {}: {}", account_id, e),
        }
        futures::future::ready(result).boxed()
    }
}
