use api::prefs::column::Column;
use dioxus::prelude::*;

use crate::view_state::SortDirection;
use crate::view_state::SortState;
use crate::view_state::ViewState;

/// A column header that sorts the table when clicked. Clicking the active
/// column again flips the direction.
#[component]
pub fn SortableHeader(column: Column, mut view: Signal<ViewState>) -> Element {
    let arrow_char = match view.read().sort() {
        Some(SortState {
            column: active,
            direction,
        }) if active == column => match direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        },
        _ => "\u{00A0}",
    };
    let align = if column.is_numeric() {
        "text-align: right;"
    } else {
        ""
    };

    rsx! {
        th {
            class: "cash-tx-{column.key()}",
            style: "position: sticky; top: 0; background: var(--pico-card-background-color); cursor: pointer; white-space: nowrap; {align}",
            onclick: move |_| view.write().sort_by(column),
            "{column.title()}"
            span {
                style: "display: inline-block; width: 1.2em; text-align: right;",
                "{arrow_char}"
            }
        }
    }
}
