//! Access rules consulted by transaction sources before releasing an account's rows.

use std::collections::HashMap;
use std::collections::HashSet;

/// Decides whether a viewer may see an account's cash transactions.
///
/// `user_id` is `None` for an anonymous viewer.
pub trait AccessPolicy: Send + Sync {
    fn can_view(&self, user_id: Option<&str>, account_id: &str) -> bool;
}

/// Lets everyone, including anonymous viewers, see every account.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn can_view(&self, _user_id: Option<&str>, _account_id: &str) -> bool {
        true
    }
}

/// Grants access per account to an explicit set of users.
///
/// Anonymous viewers and accounts without a grant are always refused.
#[derive(Debug, Clone, Default)]
pub struct AccountGrants {
    grants: HashMap<String, HashSet<String>>,
}

impl AccountGrants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, account_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.grants
            .entry(account_id.into())
            .or_default()
            .insert(user_id.into());
        self
    }
}

impl AccessPolicy for AccountGrants {
    fn can_view(&self, user_id: Option<&str>, account_id: &str) -> bool {
        match (user_id, self.grants.get(account_id)) {
            (Some(user), Some(users)) => users.contains(user),
            _ => false,
        }
    }
}
