//! Styled building blocks for the asset desk UI.

pub mod components;

pub use components::*;
