use std::env;
use std::str::FromStr;

use chrono::format::Item;
use chrono::format::StrftimeItems;
use serde::Deserialize;
use serde::Serialize;

use super::column::Column;

/// Viewer-facing defaults for the cash transactions table.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TablePrefs {
    /// Columns hidden when the table first mounts. The viewer can re-enable
    /// them from the columns popup.
    pub hidden_columns: Vec<Column>,

    /// A `chrono` format string for the date column.
    pub date_format: String,

    /// Whether to render the totals footer.
    pub show_totals: bool,
}

impl TablePrefs {
    const DEFAULT_DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// Reads the prefs from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `CASH_TX_HIDDEN_COLUMNS`: comma separated column keys, e.g. "balance,kind".
    /// - `CASH_TX_DATE_FORMAT`: a chrono format string. Defaults to "%Y-%m-%d".
    /// - `CASH_TX_SHOW_TOTALS`: "true" or "1" to show totals. Defaults to true.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like `from_env`, but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let hidden_columns = lookup("CASH_TX_HIDDEN_COLUMNS")
            .map(|list| parse_column_list(&list))
            .unwrap_or_default();

        let date_format = lookup("CASH_TX_DATE_FORMAT")
            .filter(|f| !f.trim().is_empty())
            .filter(|f| {
                let valid = is_valid_date_format(f);
                if !valid {
                    dioxus_logger::tracing::warn!(
                        "ignoring invalid CASH_TX_DATE_FORMAT '{}', using '{}'",
                        f,
                        Self::DEFAULT_DATE_FORMAT
                    );
                }
                valid
            })
            .unwrap_or_else(|| Self::DEFAULT_DATE_FORMAT.to_string());

        let show_totals = lookup("CASH_TX_SHOW_TOTALS")
            .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
            .unwrap_or(true);

        Self {
            hidden_columns,
            date_format,
            show_totals,
        }
    }
}

impl Default for TablePrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

/// True if chrono can format dates with `format`.
pub fn is_valid_date_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Parses a comma separated list of column keys. Unknown names are logged and skipped.
pub fn parse_column_list(list: &str) -> Vec<Column> {
    let mut columns = Vec::new();
    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match Column::from_str(name) {
            Ok(column) if !columns.contains(&column) => columns.push(column),
            Ok(_) => {}
            Err(e) => dioxus_logger::tracing::warn!("ignoring column '{}': {}", name, e),
        }
    }
    columns
}
