#![allow(non_snake_case)]

use std::rc::Rc;

use api::prefs::column::Column;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::view_state::ViewState;

/// The "Columns" toggle button and the popup listing one checkbox per column.
///
/// The popup closes on a backdrop click or on Escape; after Escape, focus
/// returns to the toggle button.
#[component]
pub fn ColumnsPopup(mut view: Signal<ViewState>) -> Element {
    let mut toggle_button = use_signal::<Option<Rc<MountedData>>>(|| None);
    let is_open = view.read().is_columns_popup_open();

    let mut close_and_refocus = move || {
        view.write().close_columns_popup();
        if let Some(button) = toggle_button() {
            spawn(async move {
                button.set_focus(true).await.ok();
            });
        }
    };

    rsx! {
        div {
            class: "cash-tx-columns",
            style: "position: relative; display: inline-block;",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                title: "Choose visible columns".to_string(),
                on_mounted: move |mounted: MountedEvent| toggle_button.set(Some(mounted.data())),
                on_click: move |_| view.write().toggle_columns_popup(),
                "Columns"
            }
            if is_open {
                // Backdrop to catch clicks outside the popup
                div {
                    class: "cash-tx-columns-backdrop",
                    style: "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; z-index: 9; background: transparent;",
                    onclick: move |_| view.write().close_columns_popup(),
                }
                div {
                    class: "cash-tx-columns-popup",
                    role: "dialog",
                    tabindex: "-1",
                    // Keep clicks inside from reaching the backdrop
                    onclick: |e| e.stop_propagation(),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Escape {
                            close_and_refocus();
                        }
                    },
                    onmounted: move |mounted| {
                        let popup = mounted.data();
                        spawn(async move {
                            popup.set_focus(true).await.ok();
                        });
                    },
                    style: "
                        position: absolute;
                        right: 0;
                        min-width: 12rem;
                        z-index: 10;
                        background-color: var(--pico-card-background-color);
                        border: 1px solid var(--pico-card-border-color);
                        border-radius: var(--pico-border-radius);
                        padding: 0.5rem;
                        margin-top: 0.25rem;
                    ",
                    for column in Column::iter() {
                        ColumnToggle { key: "{column.key()}", column, view }
                    }
                }
            }
        }
    }
}

#[component]
fn ColumnToggle(column: Column, mut view: Signal<ViewState>) -> Element {
    let (checked, locked) = {
        let state = view.read();
        (
            state.columns().is_visible(column),
            state.columns().is_last_visible(column),
        )
    };

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 0.5rem; white-space: nowrap; margin: 0.25rem 0;",
            title: if locked { "At least one column stays visible" } else { "" },
            input {
                r#type: "checkbox",
                name: "cash-tx-column-{column.key()}",
                checked: checked,
                disabled: locked,
                onchange: move |_| {
                    view.write().columns_mut().toggle(column);
                },
            }
            "{column.title()}"
        }
    }
}
