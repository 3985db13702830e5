// ---------------------------------------------------------------------------
// Asset provenance
// ---------------------------------------------------------------------------

/// How an asset record entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AssetSource {
    #[default]
    Manual,
    CsvImport,
    Intune,
    Jamf,
    GoogleWorkspace,
    Api,
}

impl AssetSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetSource::Manual => "MANUAL",
            AssetSource::CsvImport => "CSV_IMPORT",
            AssetSource::Intune => "INTUNE",
            AssetSource::Jamf => "JAMF",
            AssetSource::GoogleWorkspace => "GOOGLE_WORKSPACE",
            AssetSource::Api => "API",
        }
    }

    /// Parse a raw tag. Case-insensitive; `-` and spaces count as `_`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized: String = tag
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        match normalized.as_str() {
            "MANUAL" => Some(AssetSource::Manual),
            "CSV_IMPORT" => Some(AssetSource::CsvImport),
            "INTUNE" => Some(AssetSource::Intune),
            "JAMF" => Some(AssetSource::Jamf),
            "GOOGLE_WORKSPACE" => Some(AssetSource::GoogleWorkspace),
            "API" => Some(AssetSource::Api),
            _ => None,
        }
    }

    /// Resolve an optional raw tag, treating anything unrecognized as manual
    /// entry.
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.and_then(Self::from_tag).unwrap_or_default()
    }

    pub fn config(&self) -> &'static SourceConfig {
        source_config(*self)
    }
}

/// Icon shown next to a source label. The UI maps each to an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceIcon {
    Pencil,
    Spreadsheet,
    Cloud,
    Apple,
    Globe,
    Plug,
}

/// Static presentation metadata for a source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    pub source: AssetSource,
    pub label: &'static str,
    pub icon: SourceIcon,
    /// Path of a vendor logo image, relative to the web root.
    pub logo: Option<&'static str>,
    /// CSS color used for the badge accent.
    pub color: &'static str,
}

const MANUAL: SourceConfig = SourceConfig {
    source: AssetSource::Manual,
    label: "Manual Entry",
    icon: SourceIcon::Pencil,
    logo: None,
    color: "#64748b",
};

const CSV_IMPORT: SourceConfig = SourceConfig {
    source: AssetSource::CsvImport,
    label: "CSV Import",
    icon: SourceIcon::Spreadsheet,
    logo: None,
    color: "#0f766e",
};

const INTUNE: SourceConfig = SourceConfig {
    source: AssetSource::Intune,
    label: "Microsoft Intune",
    icon: SourceIcon::Cloud,
    logo: Some("/logos/intune.svg"),
    color: "#0078d4",
};

const JAMF: SourceConfig = SourceConfig {
    source: AssetSource::Jamf,
    label: "Jamf Pro",
    icon: SourceIcon::Apple,
    logo: Some("/logos/jamf.svg"),
    color: "#4a5568",
};

const GOOGLE_WORKSPACE: SourceConfig = SourceConfig {
    source: AssetSource::GoogleWorkspace,
    label: "Google Workspace",
    icon: SourceIcon::Globe,
    logo: Some("/logos/google-workspace.svg"),
    color: "#1a73e8",
};

const API: SourceConfig = SourceConfig {
    source: AssetSource::Api,
    label: "API Integration",
    icon: SourceIcon::Plug,
    logo: None,
    color: "#7c3aed",
};

/// All source configurations, in display order. `Manual` is the fallback.
pub const SOURCE_CONFIGS: &[SourceConfig] =
    &[MANUAL, CSV_IMPORT, INTUNE, JAMF, GOOGLE_WORKSPACE, API];

/// Look up the config for a source.
pub fn source_config(source: AssetSource) -> &'static SourceConfig {
    match source {
        AssetSource::Manual => &MANUAL,
        AssetSource::CsvImport => &CSV_IMPORT,
        AssetSource::Intune => &INTUNE,
        AssetSource::Jamf => &JAMF,
        AssetSource::GoogleWorkspace => &GOOGLE_WORKSPACE,
        AssetSource::Api => &API,
    }
}

/// Config for a raw tag; unknown or absent tags get the manual entry config.
pub fn source_config_for_tag(tag: Option<&str>) -> &'static SourceConfig {
    AssetSource::resolve(tag).config()
}

/// Two-letter abbreviation of the raw tag, shown when a logo is unavailable.
///
/// Multi-word tags use the first letter of the first two words
/// (`GOOGLE_WORKSPACE` → `GW`); single words use their first two letters
/// (`jamf` → `JA`). Empty tags yield `?`.
pub fn source_abbreviation(tag: Option<&str>) -> String {
    let words: Vec<&str> = tag
        .unwrap_or("")
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| w.chars().any(|c| c.is_alphanumeric()))
        .collect();

    let letters: String = match words.as_slice() {
        [] => return "?".to_string(),
        [single] => single.chars().filter(|c| c.is_alphanumeric()).take(2).collect(),
        [first, second, ..] => [first, second]
            .iter()
            .filter_map(|w| w.chars().find(|c| c.is_alphanumeric()))
            .collect(),
    };
    letters.to_uppercase()
}
