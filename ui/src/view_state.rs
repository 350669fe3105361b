//! Per-instance, ephemeral state of a cash transactions view.

use std::cmp::Ordering;

use api::prefs::column::Column;
use api::prefs::table_prefs::TablePrefs;
use api::transaction::CashTransaction;
use strum::IntoEnumIterator;

/// The set of columns the viewer currently shows. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSelection {
    visible: Vec<Column>,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            visible: Column::iter().collect(),
        }
    }
}

impl ColumnSelection {
    /// All columns except `hidden`. Hiding every column falls back to showing all.
    pub fn hiding(hidden: &[Column]) -> Self {
        let visible: Vec<Column> = Column::iter().filter(|c| !hidden.contains(c)).collect();
        if visible.is_empty() {
            return Self::default();
        }
        Self { visible }
    }

    pub fn is_visible(&self, column: Column) -> bool {
        self.visible.contains(&column)
    }

    /// Visible columns in display order.
    pub fn visible(&self) -> &[Column] {
        &self.visible
    }

    /// True when `column` is the only one left, so it may not be hidden.
    pub fn is_last_visible(&self, column: Column) -> bool {
        self.visible == [column]
    }

    /// Shows or hides `column`. Returns false when the request was refused
    /// because it would hide the last visible column.
    pub fn toggle(&mut self, column: Column) -> bool {
        if self.is_visible(column) {
            if self.is_last_visible(column) {
                return false;
            }
            self.visible.retain(|c| *c != column);
        } else {
            self.visible.push(column);
            self.visible.sort();
        }
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

/// Everything a single view instance keeps between renders.
///
/// Starts expanded, with the popup closed, no sort (source order), and
/// the columns the prefs don't hide.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ViewState {
    minimized: bool,
    columns_popup_open: bool,
    columns: ColumnSelection,
    sort: Option<SortState>,
}

impl ViewState {
    pub fn new(prefs: &TablePrefs) -> Self {
        Self {
            columns: ColumnSelection::hiding(&prefs.hidden_columns),
            ..Self::default()
        }
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_columns_popup_open(&self) -> bool {
        self.columns_popup_open
    }

    pub fn columns(&self) -> &ColumnSelection {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnSelection {
        &mut self.columns
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Collapses the view. Returns true only on the expanded -> minimized
    /// transition, which is when a `Minimize` event must be emitted.
    pub fn minimize(&mut self) -> bool {
        if self.minimized {
            return false;
        }
        self.minimized = true;
        self.columns_popup_open = false;
        true
    }

    pub fn expand(&mut self) {
        self.minimized = false;
    }

    pub fn toggle_columns_popup(&mut self) {
        self.columns_popup_open = !self.columns_popup_open;
    }

    pub fn close_columns_popup(&mut self) {
        self.columns_popup_open = false;
    }

    /// Sorts by `column`, ascending. Picking the active column again flips the direction.
    pub fn sort_by(&mut self, column: Column) {
        self.sort = match self.sort {
            Some(SortState { column: active, direction }) if active == column => Some(SortState {
                column,
                direction: match direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            }),
            _ => Some(SortState {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }
}

fn compare_by(column: Column, a: &CashTransaction, b: &CashTransaction) -> Ordering {
    let minor = |amount: Option<api::cash_amount::CashAmount>| amount.map(|x| x.as_minor_units());
    match column {
        Column::Date => a.date.cmp(&b.date),
        Column::Kind => a.kind.cmp(&b.kind),
        Column::Description => a
            .description
            .to_lowercase()
            .cmp(&b.description.to_lowercase()),
        Column::Amount => a.amount.as_minor_units().cmp(&b.amount.as_minor_units()),
        Column::Pnl => minor(a.pnl).cmp(&minor(b.pnl)),
        Column::Balance => minor(a.balance).cmp(&minor(b.balance)),
    }
}

/// Returns the rows in display order. Without a sort the source order is kept;
/// with one, ties keep their source order too.
pub fn sorted_rows(rows: &[CashTransaction], sort: Option<SortState>) -> Vec<CashTransaction> {
    let mut sorted = rows.to_vec();
    if let Some(SortState { column, direction }) = sort {
        sorted.sort_by(|a, b| {
            let ordering = compare_by(column, a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    sorted
}
