use dioxus::prelude::*;

/// Colour family of a badge.
///
/// The semantic tones line up with the tone names used by status and
/// condition values (`success`, `info`, ...), see [`BadgeVariant::from_tone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Info,
    Warning,
    Danger,
    Muted,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Success => "success",
            BadgeVariant::Info => "info",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Muted => "muted",
            BadgeVariant::Outline => "outline",
        }
    }

    /// Variant for a tone name. Unknown names render neutral.
    pub fn from_tone(tone: &str) -> Self {
        match tone {
            "success" => BadgeVariant::Success,
            "info" => BadgeVariant::Info,
            "warning" => BadgeVariant::Warning,
            "danger" => BadgeVariant::Danger,
            "muted" => BadgeVariant::Muted,
            "outline" => BadgeVariant::Outline,
            _ => BadgeVariant::Neutral,
        }
    }
}

/// Pill-shaped inline label.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
