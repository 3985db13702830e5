use dioxus::prelude::*;

/// Text shown for a detail value that is absent.
pub const EMPTY_VALUE: &str = "—";

/// A container for label/value rows in a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// A single label/value row inside a `DetailList`.
///
/// Plain values go through `value`; `None` renders the empty placeholder.
/// Rich content (badges, links) goes in children, which win over `value`.
#[component]
pub fn DetailItem(
    label: String,
    #[props(default)] value: Option<String>,
    /// Render the value in a monospace face (serials, tags, ids).
    #[props(default = false)]
    mono: bool,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());
    let missing = value.is_none() && !has_children;
    let text = value.unwrap_or_else(|| EMPTY_VALUE.to_string());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd {
                class: "detail-item-value",
                "data-mono": if mono { "true" } else { "false" },
                "data-empty": if missing { "true" } else { "false" },
                if has_children {
                    {children}
                } else {
                    "{text}"
                }
            }
        }
    }
}
