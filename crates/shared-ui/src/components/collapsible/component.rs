use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;
use dioxus_primitives::collapsible as prim;

#[component]
pub fn Collapsible(mut props: prim::CollapsibleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "collapsible", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Collapsible { ..props }
    }
}

#[component]
pub fn CollapsibleTrigger(mut props: prim::CollapsibleTriggerProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "collapsible-trigger", None, false));

    rsx! {
        prim::CollapsibleTrigger { ..props }
    }
}

#[component]
pub fn CollapsibleContent(mut props: prim::CollapsibleContentProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "collapsible-content", None, false));

    rsx! {
        prim::CollapsibleContent { ..props }
    }
}

/// A titled section whose body folds away behind a chevron trigger.
#[component]
pub fn CollapsibleSection(
    title: String,
    #[props(default)] default_open: bool,
    /// Extra classes appended to `collapsible-section`.
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let class = format!("collapsible-section {class}").trim_end().to_string();

    rsx! {
        section { class,
            Collapsible { default_open,
                CollapsibleTrigger {
                    span { class: "collapsible-section-title", "{title}" }
                    Icon { icon: LdChevronDown, width: 16, height: 16 }
                }
                CollapsibleContent { {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn section_renders_title_and_extra_class() {
        let html = render(|| {
            rsx! {
                CollapsibleSection { title: "Assignment", default_open: true, class: "modal-section",
                    p { "Dana Scully" }
                }
            }
        });
        assert!(html.contains("collapsible-section modal-section"), "{html}");
        assert!(html.contains("Assignment"));
        assert!(html.contains("collapsible-trigger"));
    }
}
