use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdApple, LdCloud, LdFileSpreadsheet, LdGlobe, LdPencil, LdPlug,
};
use dioxus_free_icons::Icon;
use shared_types::{source_abbreviation, source_config_for_tag, SourceIcon};
use shared_ui::{Badge, BadgeVariant};

const ICON_SIZE: u32 = 14;

fn source_icon(icon: SourceIcon) -> Element {
    match icon {
        SourceIcon::Pencil => rsx! { Icon { icon: LdPencil, width: ICON_SIZE, height: ICON_SIZE } },
        SourceIcon::Spreadsheet => {
            rsx! { Icon { icon: LdFileSpreadsheet, width: ICON_SIZE, height: ICON_SIZE } }
        }
        SourceIcon::Cloud => rsx! { Icon { icon: LdCloud, width: ICON_SIZE, height: ICON_SIZE } },
        SourceIcon::Apple => rsx! { Icon { icon: LdApple, width: ICON_SIZE, height: ICON_SIZE } },
        SourceIcon::Globe => rsx! { Icon { icon: LdGlobe, width: ICON_SIZE, height: ICON_SIZE } },
        SourceIcon::Plug => rsx! { Icon { icon: LdPlug, width: ICON_SIZE, height: ICON_SIZE } },
    }
}

/// Where an asset record came from, as an icon badge.
///
/// Unknown or absent tags render as manual entry.
#[component]
pub fn SourceBadge(source: Option<String>) -> Element {
    let config = source_config_for_tag(source.as_deref());

    rsx! {
        Badge {
            variant: BadgeVariant::Outline,
            class: "source-badge",
            style: "color: {config.color}; border-color: {config.color};",
            title: "Source: {config.label}",
            {source_icon(config.icon)}
            span { "{config.label}" }
        }
    }
}

/// Source shown as the vendor logo. Falls back to a two-letter abbreviation
/// of the raw tag when there is no logo or it fails to load.
#[component]
pub fn SourceLogoBadge(source: Option<String>) -> Element {
    let config = source_config_for_tag(source.as_deref());
    let mut logo_failed = use_signal(|| false);
    let abbreviation = source_abbreviation(source.as_deref());

    let logo = config.logo.filter(|_| !logo_failed());

    rsx! {
        span {
            class: "source-logo-badge",
            style: "border-color: {config.color};",
            title: "{config.label}",
            match logo {
                Some(src) => rsx! {
                    img {
                        class: "source-logo",
                        src: "{src}",
                        alt: "{config.label}",
                        onerror: move |_| {
                            tracing::warn!(logo = src, "Source logo failed to load");
                            logo_failed.set(true);
                        },
                    }
                },
                None => rsx! {
                    span { class: "source-logo-fallback", style: "color: {config.color};", "{abbreviation}" }
                },
            }
        }
    }
}
