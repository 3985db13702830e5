pub mod assets;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPackage;
use dioxus_free_icons::Icon;

use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/assets/:id")]
    AssetDetail { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top bar plus page content.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let page_title = match &route {
        Route::Home {} => "Assets",
        Route::AssetDetail { .. } => "Asset Detail",
        Route::NotFound { .. } => "",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-navbar",
                Link { to: Route::Home {}, class: "app-brand",
                    Icon { icon: LdPackage, width: 20, height: 20 }
                    span { class: "app-brand-name", "Asset Desk" }
                }
                span { class: "app-navbar-title", "{page_title}" }
            }
            main { class: "page-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn AssetDetail(id: String) -> Element {
    rsx! { assets::AssetDetailPage { id } }
}
