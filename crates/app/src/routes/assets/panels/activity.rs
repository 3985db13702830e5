use dioxus::prelude::*;
use shared_types::{sort_newest_first, Activity, AppError};
use shared_ui::{EmptyState, SkeletonLines};

use crate::format_helpers::{format_action_label, format_optional_datetime};

/// Activity log, newest first.
#[component]
pub fn ActivityPanel(activities: Resource<Result<Vec<Activity>, AppError>>) -> Element {
    let mut entries = match &*activities.read() {
        None => return rsx! { SkeletonLines { count: 4 } },
        Some(Err(e)) => {
            return rsx! {
                EmptyState {
                    title: "Activity unavailable",
                    description: e.friendly_message(),
                }
            }
        }
        Some(Ok(list)) => list.clone(),
    };

    rsx! {
        ActivityList { entries: {
            sort_newest_first(&mut entries);
            entries
        } }
    }
}

#[component]
pub fn ActivityList(entries: Vec<Activity>) -> Element {
    if entries.is_empty() {
        return rsx! {
            EmptyState { title: "No activity recorded yet." }
        };
    }

    rsx! {
        ol { class: "activity-list",
            for (index, entry) in entries.into_iter().enumerate() {
                li { key: "{index}-{entry.id}", class: "activity-item",
                    div { class: "activity-head",
                        span { class: "activity-action", "{format_action_label(&entry.action)}" }
                        time { class: "activity-time",
                            "{format_optional_datetime(entry.timestamp.as_deref())}"
                        }
                    }
                    p { class: "activity-meta", "by {entry.actor_name()}" }
                    if let Some(details) = entry.details.as_deref().filter(|d| !d.trim().is_empty()) {
                        p { class: "activity-details", "{details}" }
                    }
                }
            }
        }
    }
}
