//! Read-only asset panels shared by the tabbed page and the modal.

pub mod activity;
pub mod assignment;
pub mod custom_fields;
pub mod overview;
pub mod purchase;
pub mod specifications;

pub use activity::ActivityPanel;
pub use assignment::AssignmentPanel;
pub use custom_fields::CustomFieldsPanel;
pub use overview::{AssetHeaderBadges, OverviewPanel};
pub use purchase::PurchasePanel;
pub use specifications::SpecificationsPanel;

use shared_types::Tone;
use shared_ui::BadgeVariant;

pub(crate) fn tone_variant(tone: Tone) -> BadgeVariant {
    BadgeVariant::from_tone(tone.as_str())
}
