//! A small set of reusable, lifetime-free Dioxus components in the
//! Pico.css style.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    /// Left unset for controls that are deliberately inert.
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default = false)]
    disabled: bool,
}

/// A plain button. Clicks are forwarded only when a handler was
/// supplied, so inert and live controls share the same component.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
