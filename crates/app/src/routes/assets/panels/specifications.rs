use dioxus::prelude::*;
use shared_types::{Asset, Specifications};
use shared_ui::{DetailItem, DetailList, EmptyState};

/// Full technical specification, laid out per asset type.
#[component]
pub fn SpecificationsPanel(asset: Asset) -> Element {
    let specs = Specifications::parse(asset.specifications.as_ref());
    let rows = specs.detail_rows(asset.asset_type);

    if specs.is_empty() || rows.is_empty() {
        return rsx! {
            EmptyState { title: "No specifications available" }
        };
    }

    rsx! {
        DetailList {
            for row in rows {
                DetailItem { key: "{row.label}", label: row.label.clone(), value: row.value.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_asset(value: serde_json::Value) -> String {
        #[component]
        fn Harness(asset: Asset) -> Element {
            rsx! { SpecificationsPanel { asset } }
        }
        let asset: Asset = serde_json::from_value(value).unwrap();
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { asset });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn laptop_uses_computer_labels() {
        let html = render_asset(json!({
            "id": "a-1",
            "assetTag": "LT-1",
            "type": "LAPTOP",
            "specifications": { "processor": "M3 Pro", "ram": "36GB", "screenSize": "14in" }
        }));
        assert!(html.contains("Memory"), "{html}");
        assert!(html.contains("36GB"));
        assert!(html.contains("Display"));
        assert!(html.contains("Graphics"));
        assert!(!html.contains("Carrier"));
    }

    #[test]
    fn string_blob_is_parsed() {
        let html = render_asset(json!({
            "id": "a-2",
            "assetTag": "TB-1",
            "type": "TABLET",
            "specifications": "{\"screenSize\":\"11in\",\"storage\":\"256GB\"}"
        }));
        assert!(html.contains("Screen Size"), "{html}");
        assert!(html.contains("256GB"));
    }

    #[test]
    fn malformed_blob_shows_empty_state() {
        let html = render_asset(json!({
            "id": "a-3",
            "assetTag": "TB-2",
            "type": "TABLET",
            "specifications": "not json"
        }));
        assert!(html.contains("No specifications available"), "{html}");
    }
}
