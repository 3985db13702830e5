use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_types::{DetailLayout, FeatureFlags};
use shared_ui::{
    Button, Card, CardContent, Form, Input, PageHeader, PageSubtitle, PageTitle,
};

use super::assets::AssetDetailModal;
use super::Route;

const RECENT_LIMIT: usize = 5;

/// Trimmed asset id, `None` when blank.
pub fn normalize_asset_id(raw: &str) -> Option<String> {
    let id = raw.trim();
    (!id.is_empty()).then(|| id.to_string())
}

/// Move `id` to the front of `recent`, keeping at most `RECENT_LIMIT` entries.
pub fn remember(recent: &mut Vec<String>, id: &str) {
    recent.retain(|r| r != id);
    recent.insert(0, id.to_string());
    recent.truncate(RECENT_LIMIT);
}

/// Asset lookup. Opens the modal or navigates to the tabbed page depending
/// on the configured layout.
#[component]
pub fn Home() -> Element {
    let layout = use_context::<FeatureFlags>().detail_layout;
    let mut query = use_signal(String::new);
    let mut recent = use_signal(Vec::<String>::new);
    let mut modal_asset = use_signal(|| None::<String>);

    let mut open_asset = move |id: String| {
        remember(&mut recent.write(), &id);
        tracing::info!(asset_id = %id, ?layout, "Opening asset");
        match layout {
            DetailLayout::Modal => modal_asset.set(Some(id)),
            DetailLayout::Tabbed => {
                navigator().push(Route::AssetDetail { id });
            }
        }
    };

    let handle_submit = move |_: FormEvent| {
        if let Some(id) = normalize_asset_id(&query.read()) {
            open_asset(id);
        }
    };

    let modal_open = modal_asset.read().is_some();
    let modal_id = modal_asset.read().clone().unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Assets" }
                PageSubtitle { "Look up a device by its asset id." }
            }
            Card {
                CardContent {
                    Form { class: "asset-lookup", onsubmit: handle_submit,
                        Input {
                            label: "Asset ID",
                            value: query(),
                            placeholder: "e.g. 3f2c9a",
                            on_input: move |e: FormEvent| query.set(e.value()),
                        }
                        Button { button_type: "submit",
                            Icon { icon: LdSearch, width: 16, height: 16 }
                            "Open"
                        }
                    }
                    if !recent.read().is_empty() {
                        h4 { class: "section-heading", "Recently opened" }
                        ul { class: "recent-assets",
                            for id in recent.read().iter().cloned() {
                                li { key: "{id}",
                                    button {
                                        class: "recent-asset mono",
                                        r#type: "button",
                                        onclick: {
                                            let id = id.clone();
                                            move |_| open_asset(id.clone())
                                        },
                                        "{id}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            AssetDetailModal {
                open: modal_open,
                asset_id: modal_id,
                on_close: move |_| modal_asset.set(None),
            }
        }
    }
}
