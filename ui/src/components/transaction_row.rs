use api::cash_amount::CashAmount;
use api::prefs::column::Column;
use api::prefs::table_prefs::is_valid_date_format;
use api::transaction::CashTransaction;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

/// Emphasis class for a profit or loss figure.
pub fn pnl_class(amount: &CashAmount) -> &'static str {
    if amount.is_positive() {
        "pnl-positive"
    } else if amount.is_negative() {
        "pnl-negative"
    } else {
        "pnl-zero"
    }
}

fn cell_text(row: &CashTransaction, column: Column, date_format: &str) -> String {
    let money = |amount: Option<CashAmount>| match amount {
        Some(a) => a.to_string_with_symbol(),
        None => "-".to_string(),
    };
    match column {
        Column::Date if is_valid_date_format(date_format) => {
            row.date.format(date_format).to_string()
        }
        Column::Date => row.date.to_string(),
        Column::Kind => row.kind.to_string(),
        Column::Description => row.description.clone(),
        Column::Amount => money(Some(row.amount)),
        Column::Pnl => match row.pnl {
            Some(pnl) if pnl.is_positive() => format!("+{}", pnl.to_string_with_symbol()),
            other => money(other),
        },
        Column::Balance => money(row.balance),
    }
}

/// Keys that activate a focused row.
fn activates_row(key: &Key) -> bool {
    *key == Key::Enter
}

/// One row of the cash transactions table. Clicking the row, or pressing
/// Enter while it has focus, activates it.
#[component]
pub fn TransactionRow(
    row: CashTransaction,
    columns: Vec<Column>,
    highlight_pnl: bool,
    date_format: String,
    on_activate: EventHandler<CashTransaction>,
) -> Element {
    let clicked = row.clone();
    let pressed = row.clone();

    rsx! {
        tr {
            class: "cash-tx-row",
            "data-row-id": "{row.id}",
            tabindex: "0",
            style: "cursor: pointer;",
            onclick: move |_| on_activate.call(clicked.clone()),
            onkeydown: move |evt| {
                if activates_row(&evt.key()) {
                    on_activate.call(pressed.clone());
                }
            },
            for column in columns.iter().copied() {
                {
                    let emphasis = match (column, row.pnl) {
                        (Column::Pnl, Some(pnl)) if highlight_pnl => pnl_class(&pnl),
                        _ => "",
                    };
                    let align = if column.is_numeric() {
                        "text-align: right; white-space: nowrap;"
                    } else {
                        ""
                    };
                    rsx! {
                        td {
                            key: "{column.key()}",
                            class: "cash-tx-{column.key()} {emphasis}",
                            style: "{align}",
                            {cell_text(&row, column, &date_format)}
                        }
                    }
                }
            }
        }
    }
}
