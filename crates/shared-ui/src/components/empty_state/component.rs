use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdInbox;
use dioxus_free_icons::Icon;

/// Centered message for an empty list or a missing resource.
///
/// `children` is an optional action row (retry, back).
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state", role: "status",
            span { class: "empty-state-icon",
                Icon { icon: LdInbox, width: 28, height: 28 }
            }
            p { class: "empty-state-title", "{title}" }
            if let Some(text) = description {
                p { class: "empty-state-description", "{text}" }
            }
            div { class: "empty-state-actions", {children} }
        }
    }
}
