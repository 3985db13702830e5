use dioxus::prelude::*;
use shared_types::Asset;
use shared_ui::{AvatarSize, DetailItem, DetailList, EmptyState};

use crate::components::ProfilePicture;
use crate::format_helpers::{format_datetime_human, non_blank, or_placeholder};

#[component]
pub fn AssignmentPanel(asset: Asset) -> Element {
    let Some(person) = asset.assigned_to.clone() else {
        return rsx! {
            EmptyState {
                title: "Not assigned",
                description: "This asset is not assigned to anyone.",
            }
        };
    };
    let name = or_placeholder(person.display_name.as_deref());

    rsx! {
        div { class: "assignment-panel",
            div { class: "assignee",
                ProfilePicture {
                    directory_id: person.directory_id.clone(),
                    display_name: person.display_name.clone(),
                    size: AvatarSize::Large,
                }
                div { class: "assignee-text",
                    p { class: "assignee-name", "{name}" }
                    if let Some(title) = person.job_title.as_deref() {
                        p { class: "muted", "{title}" }
                    }
                }
            }
            DetailList {
                DetailItem { label: "Email", value: person.email.clone() }
                DetailItem { label: "Department", value: person.department.clone() }
                DetailItem {
                    label: "Assigned Since",
                    value: non_blank(asset.assigned_at.as_deref()).map(format_datetime_human),
                }
            }
        }
    }
}
