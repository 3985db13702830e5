pub mod error;
pub mod feature_flags;

// Asset tracking domain
pub mod activity;
pub mod asset;
pub mod custom_field;
pub mod source;
pub mod specs;

pub use error::*;
pub use feature_flags::*;

pub use activity::*;
pub use asset::*;
pub use custom_field::*;
pub use source::*;
pub use specs::*;
