use dioxus::prelude::*;

/// Rendered diameter of an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "sm",
            AvatarSize::Medium => "md",
            AvatarSize::Large => "lg",
        }
    }
}

/// Round avatar showing an image when `src` is set, else the fallback text.
#[component]
pub fn Avatar(
    #[props(default)] src: Option<String>,
    #[props(default)] alt: String,
    /// Text shown when there is no image, usually initials.
    #[props(default)]
    fallback: String,
    #[props(default)] size: AvatarSize,
    /// Fired when the browser fails to load `src`.
    #[props(default)]
    on_image_error: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "avatar", None, false),
        Attribute::new("data-size", size.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            match src {
                Some(url) => rsx! {
                    img {
                        class: "avatar-image",
                        src: "{url}",
                        alt: "{alt}",
                        onerror: move |_| {
                            if let Some(handler) = &on_image_error {
                                handler.call(());
                            }
                        },
                    }
                },
                None => rsx! {
                    span { class: "avatar-fallback", "aria-label": "{alt}", "{fallback}" }
                },
            }
        }
    }
}
