use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, baked in at compile time so the
/// web bundle needs no file access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse config text. Malformed input falls back to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// Apply build-time environment overrides on top of the parsed file.
///
/// Blank overrides are ignored.
pub fn apply_overrides(config: &mut AppConfig, base_url: Option<&str>, token: Option<&str>) {
    if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
    if let Some(tok) = token.map(str::trim).filter(|t| !t.is_empty()) {
        config.api.token = Some(tok.to_string());
    }
}

/// Load the embedded config and overrides into the global `OnceLock`.
/// Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = parse_config(EMBEDDED_CONFIG);
        apply_overrides(
            &mut config,
            option_env!("ASSET_DESK_API_BASE_URL"),
            option_env!("ASSET_DESK_API_TOKEN"),
        );
        tracing::info!(
            base_url = %config.api.base_url,
            layout = ?config.features.detail_layout,
            "Configuration loaded"
        );
        config
    })
}

/// The loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    load_config()
}
