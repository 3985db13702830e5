//! Typed REST client and runtime configuration for the asset desk UI.

pub mod api;
pub mod auth;
pub mod config;
pub mod error_convert;

pub use api::{ApiClient, Blob};
pub use auth::{StaticTokenProvider, TokenProvider};
pub use config::{app_config, load_config};
