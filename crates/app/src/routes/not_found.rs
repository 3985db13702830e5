use dioxus::prelude::*;

use crate::routes::Route;

/// Hint under the missing path. Asset URLs get pointed back at the lookup.
fn not_found_hint(route: &[String]) -> &'static str {
    match route.first().map(String::as_str) {
        Some("assets") | Some("asset") => {
            "Asset pages live at /assets/<id>. Look the asset up by id from the Assets page."
        }
        _ => "Nothing in Asset Desk lives at this address.",
    }
}

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    let hint = not_found_hint(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "No such page" }
                p { class: "not-found-message",
                    code { "{path}" }
                }
                p { class: "not-found-hint", "{hint}" }
                Link { to: Route::Home {}, class: "not-found-link", "Back to Assets" }
            }
        }
    }
}
