use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tabs", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tab-list", None, false));

    rsx! {
        prim::TabList { ..props }
    }
}

/// Tab label. Put a [`TabCount`] in its children to show a count.
#[component]
pub fn TabTrigger(mut props: prim::TabTriggerProps) -> Element {
    if props.class.is_none() {
        props.class = Some("tab-trigger".to_string());
    }

    rsx! {
        prim::TabTrigger { ..props }
    }
}

#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("tab-content".to_string());
    }

    rsx! {
        prim::TabContent { ..props }
    }
}

/// Small number chip shown inside a [`TabTrigger`].
#[component]
pub fn TabCount(count: usize) -> Element {
    rsx! {
        span { class: "tab-count", "aria-label": "{count} items", "{count}" }
    }
}
