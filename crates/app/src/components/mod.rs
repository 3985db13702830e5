pub mod profile_picture;
pub mod source_badge;

pub use profile_picture::{ProfileAvatar, ProfilePicture};
pub use source_badge::{SourceBadge, SourceLogoBadge};
