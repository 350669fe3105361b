//! Small, lifetime-free Dioxus components for the Pico.css framework.
//! Pico's stylesheet is expected to be linked by the embedding application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(#[props(optional)] class: Option<&'static str>, children: Element) -> Element {
    rsx! { article { class: class.unwrap_or(""), {children} } }
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn theme(&self) -> &'static str {
        match self {
            ButtonType::Primary => "primary",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(optional)]
    on_mounted: Option<EventHandler<MountedEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Tooltip, doubling as the accessible label for icon-only buttons.
    #[props(optional)]
    title: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.outline, props.button_type) {
        (true, ButtonType::Contrast) => "contrast outline",
        (true, _) => "secondary outline",
        (false, ButtonType::Primary) => "",
        (false, other) => other.theme(),
    };
    let title = props.title.clone().unwrap_or_default();
    let on_click = props.on_click;
    let on_mounted = props.on_mounted;
    rsx! {
        button {
            class: "{class_str}",
            "data-theme": props.button_type.theme(),
            title: "{title}",
            "aria-label": "{title}",
            disabled: props.disabled,
            onmounted: move |evt| {
                if let Some(handler) = &on_mounted {
                    handler.call(evt);
                }
            },
            onclick: move |evt| {
                if let Some(handler) = &on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
