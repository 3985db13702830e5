use dioxus::prelude::*;
use shared_ui::{Avatar, AvatarSize};

use crate::format_helpers::initials;
use crate::photo::use_profile_photo;

/// Staff avatar: the directory photo when one loads, otherwise initials.
#[component]
pub fn ProfilePicture(
    directory_id: Option<String>,
    display_name: Option<String>,
    #[props(default)] size: AvatarSize,
) -> Element {
    let photo = use_profile_photo(directory_id);
    let photo = photo.read();

    rsx! {
        PhotoFrame {
            state: photo.state_name(),
            loading: photo.is_loading(),
            error: photo.error().map(str::to_string),
            ProfileAvatar {
                // A failed fetch never shows a stale image.
                photo_url: photo.url.clone().filter(|_| photo.error().is_none()),
                display_name,
                size,
            }
        }
    }
}

/// Wrapper carrying the fetch state for styling and hover text.
#[component]
fn PhotoFrame(
    state: &'static str,
    loading: bool,
    error: Option<String>,
    children: Element,
) -> Element {
    let class = if loading { "profile-picture is-loading" } else { "profile-picture" };
    rsx! {
        span {
            class,
            "data-state": state,
            title: error.map(|e| format!("Photo unavailable: {e}")),
            {children}
        }
    }
}

/// Presentational half of [`ProfilePicture`]. A browser load failure flips
/// to the initials fallback.
#[component]
pub fn ProfileAvatar(
    photo_url: Option<String>,
    display_name: Option<String>,
    #[props(default)] size: AvatarSize,
) -> Element {
    let mut broken = use_signal(|| None::<String>);
    let label = display_name.clone().unwrap_or_default();
    let fallback = initials(display_name.as_deref());
    let src = photo_url.filter(|url| broken.read().as_deref() != Some(url.as_str()));

    let failed_url = src.clone();
    rsx! {
        Avatar {
            src,
            alt: label,
            fallback,
            size,
            on_image_error: move |_| {
                tracing::warn!(url = ?failed_url, "Profile photo failed to render");
                broken.set(failed_url.clone());
            },
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
    fn initials_render_without_photo() {
        let html = render(|| {
            rsx! { ProfileAvatar { photo_url: None, display_name: Some("Dana Scully".to_string()) } }
        });
        assert!(html.contains(">DS<"), "{html}");
        assert!(!html.contains("<img"));
    }

    #[test]
    fn unknown_name_renders_question_mark() {
        let html = render(|| rsx! { ProfileAvatar { photo_url: None, display_name: None } });
        assert!(html.contains(">?<"), "{html}");
    }

    #[test]
    fn photo_replaces_initials() {
        let html = render(|| {
            rsx! {
                ProfileAvatar {
                    photo_url: Some("blob:http://localhost/1".to_string()),
                    display_name: Some("Fox".to_string()),
                    size: AvatarSize::Large,
                }
            }
        });
        assert!(html.contains(r#"src="blob:http://localhost/1""#), "{html}");
        assert!(!html.contains(">F<"));
    }

    #[test]
    fn failed_fetch_marks_frame_and_keeps_initials() {
        let html = render(|| {
            rsx! {
                PhotoFrame {
                    state: "error",
                    loading: false,
                    error: Some("Network error".to_string()),
                    ProfileAvatar { photo_url: None, display_name: Some("Dana Scully".to_string()) }
                }
            }
        });
        assert!(html.contains(r#"data-state="error""#), "{html}");
        assert!(html.contains("Photo unavailable: Network error"), "{html}");
        assert!(html.contains(">DS<"), "{html}");
    }

    #[test]
    fn loading_frame_gets_loading_class() {
        let html = render(|| {
            rsx! {
                PhotoFrame { state: "loading", loading: true, error: None,
                    ProfileAvatar { photo_url: None, display_name: None }
                }
            }
        });
        assert!(html.contains("profile-picture is-loading"), "{html}");
        assert!(!html.contains("title="), "{html}");
    }

    #[test]
    fn missing_directory_id_falls_back_to_initials() {
        fn app() -> Element {
            use_context_provider(|| {
                client::ApiClient::from_config(&shared_types::AppConfig::default())
            });
            rsx! { ProfilePicture { directory_id: None, display_name: Some("walter skinner".to_string()) } }
        }
        let html = render(app);
        assert!(html.contains(">WS<"), "{html}");
        assert!(html.contains(r#"data-state="idle""#), "{html}");
    }
}
