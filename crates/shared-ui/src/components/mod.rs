// Display
pub mod avatar;
pub mod badge;
pub mod card;
pub mod detail_list;
pub mod empty_state;
pub mod page_header;
pub mod skeleton;

// Inputs
pub mod button;
pub mod form;
pub mod form_select;
pub mod input;
pub mod textarea;

// Primitive wrappers
pub mod collapsible;
pub mod dialog;
pub mod tabs;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use collapsible::*;
pub use detail_list::*;
pub use dialog::*;
pub use empty_state::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use tabs::*;
pub use textarea::*;
